//! Deterministic demo data for tests and the operator CLI.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use stayquote_core::domain::lead::{LeadStatus, NewLead};
use stayquote_core::domain::tariff::{SeasonRate, TariffProfile};

use crate::encoding::SeasonRateData;
use crate::repositories::{InMemoryLeadStore, InMemoryTariffStore, StoredTariff};

fn rate(season: &str, start_month: u32, end_month: u32, amount: i64) -> SeasonRate {
    SeasonRate {
        season: season.to_string(),
        start_month,
        end_month,
        rate: Decimal::from(amount),
    }
}

/// Three room types; the Suite intentionally keeps the legacy text encoding
/// so normalization stays exercised end to end.
pub fn demo_tariffs() -> Vec<StoredTariff> {
    vec![
        StoredTariff {
            room_type: "Standard".to_string(),
            season_rates: SeasonRateData::Structured(vec![
                rate("Regular", 6, 11, 2000),
                rate("Peak", 12, 2, 3000),
                rate("High", 3, 5, 2500),
            ]),
            ac_surcharge: Decimal::from(200),
            extra_adult_charge: Decimal::from(300),
            child_charge: Decimal::from(150),
        },
        StoredTariff {
            room_type: "Deluxe".to_string(),
            season_rates: SeasonRateData::Structured(vec![
                rate("Regular", 6, 11, 3000),
                rate("Peak", 12, 2, 4500),
                rate("High", 3, 5, 3800),
            ]),
            ac_surcharge: Decimal::from(250),
            extra_adult_charge: Decimal::from(400),
            child_charge: Decimal::from(200),
        },
        StoredTariff {
            room_type: "Suite".to_string(),
            season_rates: SeasonRateData::Encoded(
                "Peak: 8000, High: 6500, Regular: 5000".to_string(),
            ),
            ac_surcharge: Decimal::from(300),
            extra_adult_charge: Decimal::from(500),
            child_charge: Decimal::from(250),
        },
    ]
}

/// The demo tariff catalog after normalization, for callers that go straight
/// to the pricing engine.
pub fn demo_tariff_profiles() -> Vec<TariffProfile> {
    demo_tariffs().iter().map(StoredTariff::to_profile).collect()
}

pub fn demo_leads() -> Vec<NewLead> {
    vec![
        NewLead {
            name: "Rahul Verma".to_string(),
            mobile: "9876543210".to_string(),
            checkin_date: NaiveDate::from_ymd_opt(2024, 12, 24),
            checkout_date: NaiveDate::from_ymd_opt(2024, 12, 27),
            status: LeadStatus::Open,
            notes: "Hi, my name is Rahul Verma. 2 rooms from 24/12 to 27/12.".to_string(),
        },
        NewLead {
            name: "Anita Desai".to_string(),
            mobile: "9822012345".to_string(),
            checkin_date: NaiveDate::from_ymd_opt(2024, 6, 10),
            checkout_date: NaiveDate::from_ymd_opt(2024, 6, 12),
            status: LeadStatus::Contacted,
            notes: "family of 6 visiting in June".to_string(),
        },
    ]
}

pub fn seeded_tariff_store() -> InMemoryTariffStore {
    InMemoryTariffStore::with_tariffs(demo_tariffs())
}

pub fn seeded_lead_store() -> InMemoryLeadStore {
    InMemoryLeadStore::with_leads(demo_leads())
}
