use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One requested room. `nightly_discounts` holds a percentage per night,
/// indexed by night; missing entries mean no discount for that night.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRequest {
    pub room_type: String,
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub infants: u32,
    #[serde(default)]
    pub pets: u32,
    #[serde(default = "default_has_ac")]
    pub has_ac: bool,
    #[serde(default)]
    pub nightly_discounts: Vec<Decimal>,
}

fn default_has_ac() -> bool {
    true
}

impl RoomRequest {
    /// The default room shape materialized from a parsed inquiry.
    pub fn standard(adults: u32, children: u32) -> Self {
        Self {
            room_type: "Standard".to_string(),
            adults,
            children,
            infants: 0,
            pets: 0,
            has_ac: true,
            nightly_discounts: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MealPlan {
    Cp,
    Map,
    Ap,
}

impl MealPlan {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Cp => "Continental Plan (Breakfast)",
            Self::Map => "Modified American Plan (Breakfast + Dinner)",
            Self::Ap => "American Plan (All Meals)",
        }
    }
}

/// A complete booking request as assembled on the sales side: the shape the
/// pricing engine and the quote message renderer consume.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub client_name: String,
    pub mobile: String,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub rooms: Vec<RoomRequest>,
    #[serde(default)]
    pub meal_plan: Option<MealPlan>,
}
