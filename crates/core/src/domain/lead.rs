use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::quote::QuoteTotals;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LeadId(pub i64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    Open,
    Contacted,
    Negotiation,
    Nurturing,
    Won,
    Lost,
}

/// A quote issued against a lead. Appended to the lead's history, never
/// mutated in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub id: Uuid,
    pub totals: QuoteTotals,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub mobile: String,
    pub checkin_date: Option<NaiveDate>,
    pub checkout_date: Option<NaiveDate>,
    pub status: LeadStatus,
    pub notes: String,
    pub quotes: Vec<QuoteRecord>,
    pub created_at: DateTime<Utc>,
}

impl Lead {
    pub fn apply(&mut self, patch: LeadPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(mobile) = patch.mobile {
            self.mobile = mobile;
        }
        if let Some(checkin_date) = patch.checkin_date {
            self.checkin_date = Some(checkin_date);
        }
        if let Some(checkout_date) = patch.checkout_date {
            self.checkout_date = Some(checkout_date);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}

/// Fields for creating a lead; the store assigns the id and timestamps.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewLead {
    pub name: String,
    pub mobile: String,
    pub checkin_date: Option<NaiveDate>,
    pub checkout_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub notes: String,
}

/// Partial update; `None` leaves a field unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadPatch {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub checkin_date: Option<NaiveDate>,
    pub checkout_date: Option<NaiveDate>,
    pub status: Option<LeadStatus>,
    pub notes: Option<String>,
}
