use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::warn;

use crate::domain::booking::RoomRequest;
use crate::domain::quote::NightCharge;
use crate::domain::tariff::TariffProfile;

use super::season::resolve_season_rate;

/// Adults included in the base rate; each one beyond this pays the
/// extra-adult charge.
const BASE_OCCUPANCY_ADULTS: u32 = 2;

/// Prices a single night for a single room. The returned charge stays
/// unrounded; rounding happens once when the room total is summed.
pub fn charge_for_night(
    room: &RoomRequest,
    tariff: &TariffProfile,
    night_index: u32,
    date: NaiveDate,
) -> NightCharge {
    let Some(season_rate) = resolve_season_rate(tariff, date.month()) else {
        warn!(room_type = %tariff.room_type, %date, "no season rate data, pricing night at zero");
        return NightCharge {
            night: night_index + 1,
            date,
            season: String::new(),
            base_rate: Decimal::ZERO,
            total_rate: Decimal::ZERO,
        };
    };

    let mut rate = season_rate.rate;
    if room.has_ac {
        rate += tariff.ac_surcharge;
    }
    if room.adults > BASE_OCCUPANCY_ADULTS {
        rate += Decimal::from(room.adults - BASE_OCCUPANCY_ADULTS) * tariff.extra_adult_charge;
    }
    if room.children > 0 {
        rate += Decimal::from(room.children) * tariff.child_charge;
    }

    let discount_pct = room
        .nightly_discounts
        .get(night_index as usize)
        .copied()
        .unwrap_or(Decimal::ZERO)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    if discount_pct > Decimal::ZERO {
        rate *= Decimal::ONE - discount_pct / Decimal::ONE_HUNDRED;
    }

    NightCharge {
        night: night_index + 1,
        date,
        season: season_rate.season.clone(),
        base_rate: season_rate.rate,
        total_rate: rate,
    }
}
