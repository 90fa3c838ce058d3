use crate::domain::tariff::{SeasonRate, TariffProfile};

/// Season label used as the fallback when no range covers a month.
const FALLBACK_SEASON: &str = "Regular";

/// Resolves the season rate applicable to a calendar month. The first entry
/// in profile order that covers the month wins. When nothing covers it, the
/// `"Regular"` entry applies, then the first entry. `None` means the profile
/// carries no season data at all.
pub fn resolve_season_rate(profile: &TariffProfile, month: u32) -> Option<&SeasonRate> {
    profile
        .season_rates
        .iter()
        .find(|rate| rate.covers_month(month))
        .or_else(|| profile.season_rates.iter().find(|rate| rate.season == FALLBACK_SEASON))
        .or_else(|| profile.season_rates.first())
}
