//! Guest-facing quote message rendering.
//!
//! The message is a fixed template; its literal section labels are part of
//! the external contract because operators copy the output verbatim into
//! chat. All substituted values are pre-formatted here so the template does
//! pure substitution.

use rust_decimal::Decimal;
use tera::{Context, Tera};

use crate::config::HotelProfile;
use crate::domain::booking::BookingRequest;
use crate::domain::quote::QuoteTotals;
use crate::pricing::round_currency;

const TEMPLATE_NAME: &str = "quote_message";
const QUOTE_TEMPLATE: &str = include_str!("../../../../templates/quote_message.tera");

/// Advance payable to confirm, as a percentage of the final total.
const ADVANCE_PCT: u32 = 30;

#[derive(Clone, Debug)]
pub struct QuoteTextRenderer {
    tera: Tera,
}

impl QuoteTextRenderer {
    pub fn new() -> Self {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, QUOTE_TEMPLATE)
            .expect("embedded quote template loads");
        Self { tera }
    }

    /// Renders the quote message. The template is embedded and the context
    /// always carries every referenced key, so rendering cannot fail for any
    /// input.
    pub fn render(
        &self,
        request: &BookingRequest,
        totals: &QuoteTotals,
        hotel: &HotelProfile,
    ) -> String {
        let mut context = Context::new();
        context.insert("hotel_name", &hotel.name);
        context.insert("hotel_name_upper", &hotel.name.to_uppercase());
        context.insert("hotel_address", &hotel.address);
        context.insert("hotel_phone", &hotel.phone);
        context.insert("hotel_email", &hotel.email);
        context.insert("checkin_time", &hotel.checkin_time);
        context.insert("checkout_time", &hotel.checkout_time);
        context.insert("validity_hours", &hotel.quote_validity_hours);

        context.insert("client_name", &request.client_name);
        context.insert("mobile", &request.mobile);
        context.insert("checkin", &request.checkin.format("%d %b %Y").to_string());
        context.insert("checkout", &request.checkout.format("%d %b %Y").to_string());
        context.insert("nights", &totals.nights);
        let meal_plan =
            request.meal_plan.map(|plan| plan.description()).unwrap_or("Room Only");
        context.insert("meal_plan", meal_plan);

        context.insert("room_details", &room_details(request, totals));
        context.insert("subtotal", &format_inr(totals.subtotal));
        context.insert("discount_line", &discount_line(totals));
        let tax_pct = (totals.tax_rate * Decimal::ONE_HUNDRED).normalize();
        context.insert("tax_label", &format!("{tax_pct}%"));
        context.insert("tax", &format_inr(totals.tax));
        context.insert("final_total", &format_inr(totals.final_total));

        let advance =
            round_currency(totals.final_total * Decimal::from(ADVANCE_PCT) / Decimal::ONE_HUNDRED);
        context.insert("advance", &format_inr(advance));
        context.insert("balance", &format_inr(totals.final_total - advance));

        self.tera.render(TEMPLATE_NAME, &context).expect("embedded quote template renders")
    }
}

impl Default for QuoteTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render_quote_message(
    request: &BookingRequest,
    totals: &QuoteTotals,
    hotel: &HotelProfile,
) -> String {
    QuoteTextRenderer::new().render(request, totals, hotel)
}

fn room_details(request: &BookingRequest, totals: &QuoteTotals) -> String {
    request
        .rooms
        .iter()
        .zip(&totals.room_quotes)
        .enumerate()
        .map(|(index, (room, quote))| {
            format!(
                "Room {}: {} {} - {} Adult(s), {} Child(ren) = {}",
                index + 1,
                room.room_type,
                if room.has_ac { "(AC)" } else { "(Non-AC)" },
                room.adults,
                room.children,
                format_inr(quote.total),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Empty when no overall discount applies; the template drops the line
/// entirely rather than leaving a blank one.
fn discount_line(totals: &QuoteTotals) -> String {
    if totals.overall_discount <= Decimal::ZERO {
        return String::new();
    }
    let discount_amount = totals.subtotal - totals.discounted_subtotal;
    format!(
        "• Discount ({}%): -{}",
        totals.overall_discount.normalize(),
        format_inr(discount_amount)
    )
}

/// Formats a currency amount with the rupee sign and Indian digit grouping:
/// `₹1,06,400`. The amount is rounded to whole rupees first.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round_currency(amount);
    let grouped = group_indian(&rounded.abs().to_string());
    if rounded.is_sign_negative() {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut parts = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, back) = rest.split_at(rest.len() - 2);
        parts.push(back);
        rest = front;
    }
    parts.push(rest);
    parts.reverse();
    format!("{},{}", parts.join(","), tail)
}
