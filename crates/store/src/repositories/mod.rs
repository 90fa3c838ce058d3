use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stayquote_core::domain::lead::{Lead, LeadId, LeadPatch, LeadStatus, NewLead, QuoteRecord};
use stayquote_core::domain::quote::QuoteTotals;
use stayquote_core::domain::tariff::TariffProfile;

use crate::encoding::SeasonRateData;

pub mod memory;

pub use memory::{InMemoryLeadStore, InMemoryTariffStore};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage failure: {0}")]
    Storage(String),
    #[error("decode error: {0}")]
    Decode(String),
}

/// A tariff as persisted: the season rates keep their stored encoding and
/// are normalized on every read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTariff {
    pub room_type: String,
    pub season_rates: SeasonRateData,
    pub ac_surcharge: Decimal,
    pub extra_adult_charge: Decimal,
    pub child_charge: Decimal,
}

impl StoredTariff {
    pub fn to_profile(&self) -> TariffProfile {
        TariffProfile {
            room_type: self.room_type.clone(),
            season_rates: self.season_rates.normalize(),
            ac_surcharge: self.ac_surcharge,
            extra_adult_charge: self.extra_adult_charge,
            child_charge: self.child_charge,
        }
    }
}

/// Partial tariff update; `None` leaves a field unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffPatch {
    pub season_rates: Option<SeasonRateData>,
    pub ac_surcharge: Option<Decimal>,
    pub extra_adult_charge: Option<Decimal>,
    pub child_charge: Option<Decimal>,
}

/// Lead records keyed by an opaque numeric id the store assigns. Quotes are
/// appended to a lead, never mutated in place.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Newest first.
    async fn get_all(&self) -> Result<Vec<Lead>, RepositoryError>;
    async fn get_by_id(&self, id: LeadId) -> Result<Option<Lead>, RepositoryError>;
    async fn create(&self, lead: NewLead) -> Result<Lead, RepositoryError>;
    async fn update(&self, id: LeadId, patch: LeadPatch) -> Result<Option<Lead>, RepositoryError>;
    async fn delete(&self, id: LeadId) -> Result<bool, RepositoryError>;
    async fn add_quote(
        &self,
        id: LeadId,
        totals: QuoteTotals,
        message: String,
    ) -> Result<Option<QuoteRecord>, RepositoryError>;
    async fn update_status(
        &self,
        id: LeadId,
        status: LeadStatus,
    ) -> Result<Option<Lead>, RepositoryError>;
}

/// Tariff profiles keyed by room type. Every read normalizes the persisted
/// season-rate encoding into the canonical structured list.
#[async_trait]
pub trait TariffStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<TariffProfile>, RepositoryError>;
    async fn get_by_room_type(
        &self,
        room_type: &str,
    ) -> Result<Option<TariffProfile>, RepositoryError>;
    async fn update(
        &self,
        room_type: &str,
        patch: TariffPatch,
    ) -> Result<Option<TariffProfile>, RepositoryError>;
}
