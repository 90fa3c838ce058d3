pub mod config;
pub mod domain;
pub mod errors;
pub mod inquiry;
pub mod pricing;
pub mod render;

pub use config::HotelProfile;
pub use domain::booking::{BookingRequest, MealPlan, RoomRequest};
pub use domain::lead::{Lead, LeadId, LeadPatch, LeadStatus, NewLead, QuoteRecord};
pub use domain::quote::{NightCharge, QuoteTotals, RoomQuote};
pub use domain::tariff::{SeasonRate, TariffProfile};
pub use errors::PricingError;
pub use inquiry::{InquiryParser, ParsedInquiry};
pub use pricing::compute_quote;
pub use render::{format_inr, render_quote_message, QuoteTextRenderer};
