pub mod night;
pub mod season;

use chrono::{Days, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::booking::RoomRequest;
use crate::domain::quote::{QuoteTotals, RoomQuote};
use crate::domain::tariff::TariffProfile;
use crate::errors::PricingError;

/// Average nightly room rate above which the higher GST bracket applies.
const TAX_BRACKET_THRESHOLD: u32 = 7500;
/// Lower bound of the advisory near-threshold band.
const NEAR_THRESHOLD_FLOOR: u32 = 7000;

/// Rounds a currency amount to the nearest whole unit, halves away from
/// zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn tax_rate_for(avg_nightly_room_rate: Decimal) -> Decimal {
    if avg_nightly_room_rate > Decimal::from(TAX_BRACKET_THRESHOLD) {
        Decimal::new(18, 2)
    } else {
        Decimal::new(12, 2)
    }
}

/// Prices a multi-room, multi-night booking against a tariff catalog and
/// aggregates the taxed totals.
///
/// Fails with [`PricingError::InvalidDateRange`] when checkout is not after
/// checkin and with [`PricingError::TariffNotFound`] when a requested room
/// type has no profile in the catalog. Missing season coverage inside a
/// profile never fails; those nights price at zero and are flagged on the
/// breakdown.
pub fn compute_quote(
    rooms: &[RoomRequest],
    checkin: NaiveDate,
    checkout: NaiveDate,
    tariffs: &[TariffProfile],
    overall_discount_pct: Decimal,
) -> Result<QuoteTotals, PricingError> {
    let nights = (checkout - checkin).num_days();
    if nights <= 0 {
        return Err(PricingError::InvalidDateRange { checkin, checkout });
    }

    let mut room_quotes = Vec::with_capacity(rooms.len());
    for room in rooms {
        let tariff = tariffs
            .iter()
            .find(|profile| profile.room_type == room.room_type)
            .ok_or_else(|| PricingError::TariffNotFound { room_type: room.room_type.clone() })?;

        let mut night_charges = Vec::with_capacity(nights as usize);
        let mut room_total = Decimal::ZERO;
        for night_index in 0..nights as u32 {
            let date = checkin + Days::new(u64::from(night_index));
            let charge = night::charge_for_night(room, tariff, night_index, date);
            room_total += charge.total_rate;
            night_charges.push(charge);
        }

        room_quotes.push(RoomQuote {
            room_type: room.room_type.clone(),
            nights: night_charges,
            total: round_currency(room_total),
        });
    }

    let subtotal = round_currency(room_quotes.iter().map(|room| room.total).sum());
    let discounted = if overall_discount_pct > Decimal::ZERO {
        subtotal * (Decimal::ONE - overall_discount_pct / Decimal::ONE_HUNDRED)
    } else {
        subtotal
    };

    let room_nights = Decimal::from(rooms.len() as u64) * Decimal::from(nights);
    let avg_nightly_room_rate =
        if room_nights.is_zero() { Decimal::ZERO } else { discounted / room_nights };

    let tax_rate = tax_rate_for(avg_nightly_room_rate);
    let tax = round_currency(discounted * tax_rate);
    let final_total = round_currency(discounted + tax);
    let near_tax_threshold = avg_nightly_room_rate > Decimal::from(NEAR_THRESHOLD_FLOOR)
        && avg_nightly_room_rate <= Decimal::from(TAX_BRACKET_THRESHOLD);

    Ok(QuoteTotals {
        room_quotes,
        subtotal,
        discounted_subtotal: round_currency(discounted),
        tax_rate,
        tax,
        final_total,
        avg_nightly_room_rate: round_currency(avg_nightly_room_rate),
        nights,
        overall_discount: overall_discount_pct,
        near_tax_threshold,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use crate::domain::booking::RoomRequest;
    use crate::domain::tariff::{SeasonRate, TariffProfile};
    use crate::errors::PricingError;

    use super::compute_quote;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn rate(season: &str, start_month: u32, end_month: u32, amount: i64) -> SeasonRate {
        SeasonRate {
            season: season.to_string(),
            start_month,
            end_month,
            rate: Decimal::from(amount),
        }
    }

    fn standard_tariff() -> TariffProfile {
        TariffProfile {
            room_type: "Standard".to_string(),
            season_rates: vec![rate("Regular", 6, 11, 2000), rate("Peak", 12, 2, 3000)],
            ac_surcharge: Decimal::from(200),
            extra_adult_charge: Decimal::from(300),
            child_charge: Decimal::from(150),
        }
    }

    fn flat_tariff(room_type: &str, amount: i64) -> TariffProfile {
        TariffProfile {
            room_type: room_type.to_string(),
            season_rates: vec![rate("Regular", 1, 12, amount)],
            ac_surcharge: Decimal::ZERO,
            extra_adult_charge: Decimal::ZERO,
            child_charge: Decimal::ZERO,
        }
    }

    fn plain_room(room_type: &str) -> RoomRequest {
        RoomRequest {
            room_type: room_type.to_string(),
            has_ac: false,
            ..RoomRequest::standard(2, 0)
        }
    }

    #[test]
    fn two_peak_nights_with_ac_hit_the_lower_bracket() {
        let totals = compute_quote(
            &[RoomRequest::standard(2, 0)],
            date(2024, 1, 10),
            date(2024, 1, 12),
            &[standard_tariff()],
            Decimal::ZERO,
        )
        .expect("quote computes");

        assert_eq!(totals.nights, 2);
        assert_eq!(totals.room_quotes.len(), 1);
        assert_eq!(totals.room_quotes[0].total, Decimal::from(6400));
        assert_eq!(totals.room_quotes[0].nights[0].season, "Peak");
        assert_eq!(totals.subtotal, Decimal::from(6400));
        assert_eq!(totals.avg_nightly_room_rate, Decimal::from(3200));
        assert_eq!(totals.tax_rate, Decimal::new(12, 2));
        assert_eq!(totals.tax, Decimal::from(768));
        assert_eq!(totals.final_total, Decimal::from(7168));
        assert!(!totals.near_tax_threshold);
    }

    #[test]
    fn checkout_on_or_before_checkin_is_an_invalid_range() {
        for checkout in [date(2024, 1, 10), date(2024, 1, 9)] {
            let error = compute_quote(
                &[RoomRequest::standard(2, 0)],
                date(2024, 1, 10),
                checkout,
                &[standard_tariff()],
                Decimal::ZERO,
            )
            .expect_err("range should be rejected");

            assert!(matches!(error, PricingError::InvalidDateRange { .. }));
        }
    }

    #[test]
    fn unknown_room_type_surfaces_tariff_not_found() {
        let error = compute_quote(
            &[plain_room("Penthouse")],
            date(2024, 6, 1),
            date(2024, 6, 3),
            &[standard_tariff()],
            Decimal::ZERO,
        )
        .expect_err("missing tariff should be rejected");

        assert_eq!(
            error,
            PricingError::TariffNotFound { room_type: "Penthouse".to_string() }
        );
    }

    #[test]
    fn single_season_no_surcharges_totals_rate_times_nights() {
        let totals = compute_quote(
            &[plain_room("Standard")],
            date(2024, 7, 1),
            date(2024, 7, 6),
            &[flat_tariff("Standard", 2000)],
            Decimal::ZERO,
        )
        .expect("quote computes");

        assert_eq!(totals.room_quotes[0].total, Decimal::from(10_000));
        assert_eq!(totals.final_total, Decimal::from(11_200));
    }

    #[test]
    fn average_rate_at_the_threshold_keeps_the_lower_bracket() {
        let totals = compute_quote(
            &[plain_room("Standard")],
            date(2024, 7, 1),
            date(2024, 7, 2),
            &[flat_tariff("Standard", 7500)],
            Decimal::ZERO,
        )
        .expect("quote computes");

        assert_eq!(totals.avg_nightly_room_rate, Decimal::from(7500));
        assert_eq!(totals.tax_rate, Decimal::new(12, 2));
        assert!(totals.near_tax_threshold);
    }

    #[test]
    fn average_rate_just_above_the_threshold_takes_the_higher_bracket() {
        let totals = compute_quote(
            &[plain_room("Standard")],
            date(2024, 7, 1),
            date(2024, 7, 2),
            &[flat_tariff("Standard", 7501)],
            Decimal::ZERO,
        )
        .expect("quote computes");

        assert_eq!(totals.tax_rate, Decimal::new(18, 2));
        assert!(!totals.near_tax_threshold);
    }

    #[test]
    fn overall_discount_applies_before_tax_and_bracket_selection() {
        let totals = compute_quote(
            &[plain_room("Standard")],
            date(2024, 7, 1),
            date(2024, 7, 2),
            &[flat_tariff("Standard", 8000)],
            Decimal::from(10),
        )
        .expect("quote computes");

        // 8000 * 0.9 = 7200: the discount pulls the average under the
        // threshold, so the lower bracket applies.
        assert_eq!(totals.discounted_subtotal, Decimal::from(7200));
        assert_eq!(totals.tax_rate, Decimal::new(12, 2));
        assert_eq!(totals.tax, Decimal::from(864));
        assert_eq!(totals.final_total, Decimal::from(8064));
        assert!(totals.near_tax_threshold);
    }

    #[test]
    fn compute_quote_is_deterministic_for_identical_inputs() {
        let rooms = [RoomRequest::standard(3, 1), plain_room("Deluxe")];
        let tariffs = [standard_tariff(), flat_tariff("Deluxe", 3500)];

        let first = compute_quote(
            &rooms,
            date(2024, 11, 29),
            date(2024, 12, 3),
            &tariffs,
            Decimal::from(5),
        )
        .expect("first run computes");
        let second = compute_quote(
            &rooms,
            date(2024, 11, 29),
            date(2024, 12, 3),
            &tariffs,
            Decimal::from(5),
        )
        .expect("second run computes");

        assert_eq!(first, second);
    }

    #[test]
    fn stay_spanning_seasons_prices_each_night_by_its_month() {
        let totals = compute_quote(
            &[plain_room("Standard")],
            date(2024, 11, 29),
            date(2024, 12, 2),
            &[standard_tariff()],
            Decimal::ZERO,
        )
        .expect("quote computes");

        let seasons: Vec<&str> = totals.room_quotes[0]
            .nights
            .iter()
            .map(|night| night.season.as_str())
            .collect();
        assert_eq!(seasons, ["Regular", "Regular", "Peak"]);
        // 2000 + 2000 + 3000
        assert_eq!(totals.room_quotes[0].total, Decimal::from(7000));
    }

    #[test]
    fn profile_without_season_data_prices_to_zero_but_still_quotes() {
        let mut empty = standard_tariff();
        empty.season_rates.clear();

        let totals = compute_quote(
            &[plain_room("Standard")],
            date(2024, 7, 1),
            date(2024, 7, 3),
            &[empty],
            Decimal::ZERO,
        )
        .expect("quote computes despite missing season data");

        assert_eq!(totals.final_total, Decimal::ZERO);
        assert!(totals.room_quotes[0].nights.iter().all(|night| night.is_unrated()));
    }

    #[test]
    fn fractional_nightly_discounts_round_once_at_the_room_total() {
        let room = RoomRequest {
            has_ac: false,
            nightly_discounts: vec![Decimal::new(125, 1); 3],
            ..RoomRequest::standard(2, 0)
        };

        let totals = compute_quote(
            &[room],
            date(2024, 7, 1),
            date(2024, 7, 4),
            &[flat_tariff("Standard", 999)],
            Decimal::ZERO,
        )
        .expect("quote computes");

        // 999 * 0.875 = 874.125 per night; 2622.375 summed, rounded once.
        assert_eq!(totals.room_quotes[0].total, Decimal::from(2622));
        assert_eq!(
            totals.room_quotes[0].nights[0].total_rate,
            Decimal::new(874_125, 3)
        );
    }
}
