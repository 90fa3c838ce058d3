use chrono::NaiveDate;
use thiserror::Error;

/// Pricing failures are typed and reach the caller unmodified. Data-quality
/// conditions inside a tariff (missing season coverage) are not errors; they
/// degrade locally and are flagged on the night breakdown instead.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("invalid date range: checkout {checkout} is not after checkin {checkin}")]
    InvalidDateRange { checkin: NaiveDate, checkout: NaiveDate },
    #[error("tariff not found for room type: {room_type}")]
    TariffNotFound { room_type: String },
}
