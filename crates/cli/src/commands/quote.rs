use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use stayquote_core::config::HotelProfile;
use stayquote_core::domain::booking::BookingRequest;
use stayquote_core::errors::PricingError;
use stayquote_core::pricing::compute_quote;
use stayquote_core::render::render_quote_message;
use stayquote_store::fixtures::demo_tariff_profiles;

use super::{CommandResult, EXIT_INVALID_INPUT};

pub fn run(request_path: &Path, discount: Decimal, message: bool) -> CommandResult {
    let raw = match fs::read_to_string(request_path) {
        Ok(raw) => raw,
        Err(error) => {
            return CommandResult::failure(
                "quote",
                "request_file",
                format!("{}: {error}", request_path.display()),
                EXIT_INVALID_INPUT,
            );
        }
    };

    let request: BookingRequest = match toml::from_str(&raw) {
        Ok(request) => request,
        Err(error) => {
            return CommandResult::failure(
                "quote",
                "request_parse",
                error.to_string(),
                EXIT_INVALID_INPUT,
            );
        }
    };

    let tariffs = demo_tariff_profiles();
    let totals = match compute_quote(
        &request.rooms,
        request.checkin,
        request.checkout,
        &tariffs,
        discount,
    ) {
        Ok(totals) => totals,
        Err(error @ PricingError::InvalidDateRange { .. }) => {
            return CommandResult::failure(
                "quote",
                "invalid_date_range",
                error.to_string(),
                EXIT_INVALID_INPUT,
            );
        }
        Err(error @ PricingError::TariffNotFound { .. }) => {
            return CommandResult::failure(
                "quote",
                "tariff_not_found",
                error.to_string(),
                EXIT_INVALID_INPUT,
            );
        }
    };

    if message {
        let hotel = HotelProfile::load_or_default();
        return CommandResult::text(render_quote_message(&request, &totals, &hotel));
    }

    match serde_json::to_value(&totals) {
        Ok(data) => CommandResult::success("quote", data),
        Err(error) => CommandResult::failure("quote", "serialization", error.to_string(), 1),
    }
}
