use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A rate applicable to a month range. `start_month > end_month` means the
/// range wraps the year boundary (Dec-Feb style).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRate {
    pub season: String,
    pub start_month: u32,
    pub end_month: u32,
    pub rate: Decimal,
}

impl SeasonRate {
    pub fn covers_month(&self, month: u32) -> bool {
        if self.start_month <= self.end_month {
            (self.start_month..=self.end_month).contains(&month)
        } else {
            month >= self.start_month || month <= self.end_month
        }
    }
}

/// Per-room-type pricing rules: ordered season rates plus fixed surcharges.
/// Entry order in `season_rates` is the caller-defined match priority.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffProfile {
    pub room_type: String,
    pub season_rates: Vec<SeasonRate>,
    pub ac_surcharge: Decimal,
    pub extra_adult_charge: Decimal,
    pub child_charge: Decimal,
}
