//! Season-rate data normalization at the store boundary.
//!
//! Persisted tariffs carry their season rates either as a structured list or
//! as a legacy free-text `"Label: rate, Label: rate"` encoding. Reads
//! normalize both into the canonical [`SeasonRate`] list; the pricing core
//! only ever sees the canonical shape.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use stayquote_core::domain::tariff::SeasonRate;

/// Season-rate data as persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "encoding", content = "data", rename_all = "snake_case")]
pub enum SeasonRateData {
    Structured(Vec<SeasonRate>),
    Encoded(String),
}

/// Unparseable season-rate data. Recovered locally by degrading to an empty
/// season list; never surfaced to store callers.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("malformed season rate data: {reason}")]
pub struct MalformedSeasonRateData {
    pub reason: String,
}

impl SeasonRateData {
    /// Normalizes either encoding into the canonical structured list.
    pub fn normalize(&self) -> Vec<SeasonRate> {
        match self {
            Self::Structured(rates) => rates.clone(),
            Self::Encoded(text) => match decode_season_rates(text) {
                Ok(rates) => rates,
                Err(error) => {
                    warn!(%error, raw = %text, "ignoring unparseable season rate data");
                    Vec::new()
                }
            },
        }
    }
}

/// Month ranges assigned when the encoded form carries only labels and
/// rates. Unknown labels fall into the regular band.
fn month_range_for_label(label: &str) -> (u32, u32) {
    match label.to_ascii_lowercase().as_str() {
        "peak" => (12, 2),
        "high" => (3, 5),
        "regular" | "low" => (6, 11),
        _ => (6, 11),
    }
}

fn decode_season_rates(text: &str) -> Result<Vec<SeasonRate>, MalformedSeasonRateData> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    // A structured list may also arrive serialized as JSON; that parse is
    // attempted before the plain-text form.
    if let Ok(rates) = serde_json::from_str::<Vec<SeasonRate>>(trimmed) {
        return Ok(rates);
    }

    let mut rates = Vec::new();
    for pair in trimmed.split(',') {
        let Some((label, rate_text)) = pair.split_once(':') else {
            continue;
        };
        let label = label.trim();
        if label.is_empty() {
            continue;
        }
        let Ok(rate) = rate_text.trim().parse::<Decimal>() else {
            continue;
        };
        let (start_month, end_month) = month_range_for_label(label);
        rates.push(SeasonRate { season: label.to_string(), start_month, end_month, rate });
    }

    if rates.is_empty() {
        return Err(MalformedSeasonRateData {
            reason: "neither structured JSON nor a label: rate list".to_string(),
        });
    }
    Ok(rates)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use stayquote_core::domain::tariff::SeasonRate;

    use super::SeasonRateData;

    #[test]
    fn structured_data_passes_through_unchanged() {
        let rates = vec![SeasonRate {
            season: "Peak".to_string(),
            start_month: 12,
            end_month: 2,
            rate: Decimal::from(4500),
        }];

        assert_eq!(SeasonRateData::Structured(rates.clone()).normalize(), rates);
    }

    #[test]
    fn label_rate_list_maps_to_fixed_month_ranges() {
        let data = SeasonRateData::Encoded("Peak: 4500, High: 3500, Regular: 2500".to_string());
        let rates = data.normalize();

        assert_eq!(rates.len(), 3);
        assert_eq!(rates[0].season, "Peak");
        assert_eq!((rates[0].start_month, rates[0].end_month), (12, 2));
        assert_eq!(rates[0].rate, Decimal::from(4500));
        assert_eq!((rates[1].start_month, rates[1].end_month), (3, 5));
        assert_eq!((rates[2].start_month, rates[2].end_month), (6, 11));
    }

    #[test]
    fn low_and_unknown_labels_fall_into_the_regular_band() {
        let data = SeasonRateData::Encoded("Low: 1800, Festival: 5000".to_string());
        let rates = data.normalize();

        assert_eq!((rates[0].start_month, rates[0].end_month), (6, 11));
        assert_eq!((rates[1].start_month, rates[1].end_month), (6, 11));
        assert_eq!(rates[1].season, "Festival");
    }

    #[test]
    fn json_encoded_structured_list_is_recognized() {
        let data = SeasonRateData::Encoded(
            r#"[{"season":"Peak","start_month":12,"end_month":2,"rate":"4500"}]"#.to_string(),
        );
        let rates = data.normalize();

        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].season, "Peak");
        assert_eq!(rates[0].rate, Decimal::from(4500));
    }

    #[test]
    fn partially_malformed_list_keeps_the_parseable_entries() {
        let data = SeasonRateData::Encoded("Peak: 4500, garbage, High: not-a-number".to_string());
        let rates = data.normalize();

        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].season, "Peak");
    }

    #[test]
    fn garbage_degrades_to_an_empty_list_without_erroring() {
        let data = SeasonRateData::Encoded("no rates here".to_string());
        assert!(data.normalize().is_empty());
    }

    #[test]
    fn empty_text_is_an_empty_list() {
        let data = SeasonRateData::Encoded("   ".to_string());
        assert!(data.normalize().is_empty());
    }
}
