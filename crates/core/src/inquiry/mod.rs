//! Best-effort extraction of a structured booking draft from free-text
//! guest inquiries.
//!
//! The parser runs a fixed sequence of independent extractor passes, each
//! owning its own pattern table. Extraction never fails: anything the text
//! does not yield stays at its empty or default value, because the draft is
//! reviewed and corrected by a person before it is used.

pub mod contact;
pub mod dates;
pub mod guests;
pub mod name;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::booking::{BookingRequest, RoomRequest};

/// A lossy projection of a booking request recovered from raw text. Every
/// field is optionally empty; `notes` always carries the input verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedInquiry {
    pub client_name: String,
    pub mobile: String,
    pub checkin_date: Option<NaiveDate>,
    pub checkout_date: Option<NaiveDate>,
    pub rooms: Vec<RoomRequest>,
    pub notes: String,
}

impl ParsedInquiry {
    /// Promotes the draft to a full booking request once both stay dates are
    /// known. Meal plan selection stays with the operator.
    pub fn to_booking_request(&self) -> Option<BookingRequest> {
        let checkin = self.checkin_date?;
        let checkout = self.checkout_date?;
        Some(BookingRequest {
            client_name: self.client_name.clone(),
            mobile: self.mobile.clone(),
            checkin,
            checkout,
            rooms: self.rooms.clone(),
            meal_plan: None,
        })
    }
}

/// Inquiry text parser with a pinned reference date.
///
/// Year-less date mentions resolve against `reference_date`, never an
/// ambient clock, so identical inputs always parse identically.
#[derive(Clone, Debug)]
pub struct InquiryParser {
    reference_date: NaiveDate,
    name: name::NameExtractor,
    contact: contact::MobileExtractor,
    dates: dates::DateExtractor,
    guests: guests::GuestCountExtractor,
}

impl InquiryParser {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            name: name::NameExtractor::new(),
            contact: contact::MobileExtractor::new(),
            dates: dates::DateExtractor::new(),
            guests: guests::GuestCountExtractor::new(),
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn parse(&self, text: &str) -> ParsedInquiry {
        let mut inquiry = ParsedInquiry { notes: text.to_string(), ..ParsedInquiry::default() };

        if let Some(client_name) = self.name.extract(text) {
            inquiry.client_name = client_name;
        }
        if let Some(mobile) = self.contact.extract(text) {
            inquiry.mobile = mobile;
        }

        let stay = self.dates.extract(text, self.reference_date);
        inquiry.checkin_date = stay.checkin;
        inquiry.checkout_date = stay.checkout;

        inquiry.rooms = self.guests.extract(text).materialize_rooms();

        inquiry
    }
}
