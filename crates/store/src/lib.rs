pub mod encoding;
pub mod fixtures;
pub mod repositories;

pub use encoding::{MalformedSeasonRateData, SeasonRateData};
pub use repositories::{
    InMemoryLeadStore, InMemoryTariffStore, LeadStore, RepositoryError, StoredTariff, TariffPatch,
    TariffStore,
};
