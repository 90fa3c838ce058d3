use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Audit record for a single priced night. Derived per call, never persisted.
/// `total_rate` stays unrounded; rounding happens once at the room total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightCharge {
    pub night: u32,
    pub date: NaiveDate,
    pub season: String,
    pub base_rate: Decimal,
    pub total_rate: Decimal,
}

impl NightCharge {
    /// True when the night degraded to rate zero because the tariff carried
    /// no usable season data.
    pub fn is_unrated(&self) -> bool {
        self.season.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomQuote {
    pub room_type: String,
    pub nights: Vec<NightCharge>,
    pub total: Decimal,
}

/// The fully aggregated quote. `discounted_subtotal` and
/// `avg_nightly_room_rate` are stored rounded for display; bracket selection
/// and the final total are computed from the unrounded intermediates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteTotals {
    pub room_quotes: Vec<RoomQuote>,
    pub subtotal: Decimal,
    pub discounted_subtotal: Decimal,
    pub tax_rate: Decimal,
    pub tax: Decimal,
    pub final_total: Decimal,
    pub avg_nightly_room_rate: Decimal,
    pub nights: i64,
    pub overall_discount: Decimal,
    pub near_tax_threshold: bool,
}
