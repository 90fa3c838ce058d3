use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use stayquote_core::domain::lead::{Lead, LeadId, LeadPatch, LeadStatus, NewLead, QuoteRecord};
use stayquote_core::domain::quote::QuoteTotals;
use stayquote_core::domain::tariff::TariffProfile;

use super::{LeadStore, RepositoryError, StoredTariff, TariffPatch, TariffStore};

#[derive(Default)]
struct LeadTable {
    next_id: i64,
    leads: BTreeMap<LeadId, Lead>,
}

impl LeadTable {
    fn insert(&mut self, lead: NewLead) -> Lead {
        self.next_id += 1;
        let id = LeadId(self.next_id);
        let lead = Lead {
            id,
            name: lead.name,
            mobile: lead.mobile,
            checkin_date: lead.checkin_date,
            checkout_date: lead.checkout_date,
            status: lead.status,
            notes: lead.notes,
            quotes: Vec::new(),
            created_at: Utc::now(),
        };
        self.leads.insert(id, lead.clone());
        lead
    }
}

#[derive(Default)]
pub struct InMemoryLeadStore {
    table: RwLock<LeadTable>,
}

impl InMemoryLeadStore {
    pub fn with_leads(leads: Vec<NewLead>) -> Self {
        let mut table = LeadTable::default();
        for lead in leads {
            table.insert(lead);
        }
        Self { table: RwLock::new(table) }
    }
}

#[async_trait]
impl LeadStore for InMemoryLeadStore {
    async fn get_all(&self) -> Result<Vec<Lead>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.leads.values().rev().cloned().collect())
    }

    async fn get_by_id(&self, id: LeadId) -> Result<Option<Lead>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.leads.get(&id).cloned())
    }

    async fn create(&self, lead: NewLead) -> Result<Lead, RepositoryError> {
        let mut table = self.table.write().await;
        Ok(table.insert(lead))
    }

    async fn update(&self, id: LeadId, patch: LeadPatch) -> Result<Option<Lead>, RepositoryError> {
        let mut table = self.table.write().await;
        Ok(table.leads.get_mut(&id).map(|lead| {
            lead.apply(patch);
            lead.clone()
        }))
    }

    async fn delete(&self, id: LeadId) -> Result<bool, RepositoryError> {
        let mut table = self.table.write().await;
        Ok(table.leads.remove(&id).is_some())
    }

    async fn add_quote(
        &self,
        id: LeadId,
        totals: QuoteTotals,
        message: String,
    ) -> Result<Option<QuoteRecord>, RepositoryError> {
        let mut table = self.table.write().await;
        Ok(table.leads.get_mut(&id).map(|lead| {
            let record = QuoteRecord {
                id: Uuid::new_v4(),
                totals,
                message,
                created_at: Utc::now(),
            };
            lead.quotes.push(record.clone());
            record
        }))
    }

    async fn update_status(
        &self,
        id: LeadId,
        status: LeadStatus,
    ) -> Result<Option<Lead>, RepositoryError> {
        let mut table = self.table.write().await;
        Ok(table.leads.get_mut(&id).map(|lead| {
            lead.status = status;
            lead.clone()
        }))
    }
}

/// Tariffs keyed by room type; reads normalize the stored season-rate
/// encoding into the canonical structured list.
#[derive(Default)]
pub struct InMemoryTariffStore {
    tariffs: RwLock<BTreeMap<String, StoredTariff>>,
}

impl InMemoryTariffStore {
    pub fn with_tariffs(tariffs: Vec<StoredTariff>) -> Self {
        let table = tariffs
            .into_iter()
            .map(|tariff| (tariff.room_type.clone(), tariff))
            .collect();
        Self { tariffs: RwLock::new(table) }
    }
}

#[async_trait]
impl TariffStore for InMemoryTariffStore {
    async fn get_all(&self) -> Result<Vec<TariffProfile>, RepositoryError> {
        let tariffs = self.tariffs.read().await;
        Ok(tariffs.values().map(StoredTariff::to_profile).collect())
    }

    async fn get_by_room_type(
        &self,
        room_type: &str,
    ) -> Result<Option<TariffProfile>, RepositoryError> {
        let tariffs = self.tariffs.read().await;
        Ok(tariffs.get(room_type).map(StoredTariff::to_profile))
    }

    async fn update(
        &self,
        room_type: &str,
        patch: TariffPatch,
    ) -> Result<Option<TariffProfile>, RepositoryError> {
        let mut tariffs = self.tariffs.write().await;
        Ok(tariffs.get_mut(room_type).map(|tariff| {
            if let Some(season_rates) = patch.season_rates {
                tariff.season_rates = season_rates;
            }
            if let Some(ac_surcharge) = patch.ac_surcharge {
                tariff.ac_surcharge = ac_surcharge;
            }
            if let Some(extra_adult_charge) = patch.extra_adult_charge {
                tariff.extra_adult_charge = extra_adult_charge;
            }
            if let Some(child_charge) = patch.child_charge {
                tariff.child_charge = child_charge;
            }
            tariff.to_profile()
        }))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use stayquote_core::domain::lead::{LeadPatch, LeadStatus, NewLead};

    use crate::encoding::SeasonRateData;
    use crate::repositories::{
        LeadStore, StoredTariff, TariffPatch, TariffStore,
    };

    use super::{InMemoryLeadStore, InMemoryTariffStore};

    fn new_lead(name: &str) -> NewLead {
        NewLead { name: name.to_string(), mobile: "9876543210".to_string(), ..NewLead::default() }
    }

    #[tokio::test]
    async fn created_leads_get_sequential_ids_and_list_newest_first() {
        let store = InMemoryLeadStore::default();
        let first = store.create(new_lead("Asha")).await.expect("create first");
        let second = store.create(new_lead("Bina")).await.expect("create second");

        assert_eq!(second.id.0, first.id.0 + 1);

        let all = store.get_all().await.expect("list leads");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Bina");
        assert_eq!(all[1].name, "Asha");
    }

    #[tokio::test]
    async fn update_patches_only_named_fields() {
        let store = InMemoryLeadStore::default();
        let lead = store.create(new_lead("Asha")).await.expect("create lead");

        let updated = store
            .update(
                lead.id,
                LeadPatch { status: Some(LeadStatus::Negotiation), ..LeadPatch::default() },
            )
            .await
            .expect("update lead")
            .expect("lead exists");

        assert_eq!(updated.status, LeadStatus::Negotiation);
        assert_eq!(updated.name, "Asha");
    }

    #[tokio::test]
    async fn delete_reports_whether_a_lead_existed() {
        let store = InMemoryLeadStore::default();
        let lead = store.create(new_lead("Asha")).await.expect("create lead");

        assert!(store.delete(lead.id).await.expect("first delete"));
        assert!(!store.delete(lead.id).await.expect("second delete"));
        assert!(store.get_by_id(lead.id).await.expect("lookup").is_none());
    }

    #[tokio::test]
    async fn tariff_reads_normalize_the_encoded_form() {
        let store = InMemoryTariffStore::with_tariffs(vec![StoredTariff {
            room_type: "Suite".to_string(),
            season_rates: SeasonRateData::Encoded("Peak: 8000, Regular: 5000".to_string()),
            ac_surcharge: Decimal::from(300),
            extra_adult_charge: Decimal::from(500),
            child_charge: Decimal::from(250),
        }]);

        let profile = store
            .get_by_room_type("Suite")
            .await
            .expect("lookup")
            .expect("suite tariff exists");

        assert_eq!(profile.season_rates.len(), 2);
        assert_eq!(profile.season_rates[0].season, "Peak");
        assert_eq!(
            (profile.season_rates[0].start_month, profile.season_rates[0].end_month),
            (12, 2)
        );
    }

    #[tokio::test]
    async fn tariff_update_patches_and_returns_the_normalized_profile() {
        let store = InMemoryTariffStore::with_tariffs(vec![StoredTariff {
            room_type: "Standard".to_string(),
            season_rates: SeasonRateData::Structured(Vec::new()),
            ac_surcharge: Decimal::from(200),
            extra_adult_charge: Decimal::from(300),
            child_charge: Decimal::from(150),
        }]);

        let updated = store
            .update(
                "Standard",
                TariffPatch {
                    season_rates: Some(SeasonRateData::Encoded("High: 3500".to_string())),
                    ac_surcharge: Some(Decimal::from(250)),
                    ..TariffPatch::default()
                },
            )
            .await
            .expect("update tariff")
            .expect("standard tariff exists");

        assert_eq!(updated.ac_surcharge, Decimal::from(250));
        assert_eq!(updated.child_charge, Decimal::from(150));
        assert_eq!(updated.season_rates[0].season, "High");

        let missing = store
            .update("Penthouse", TariffPatch::default())
            .await
            .expect("update call succeeds");
        assert!(missing.is_none());
    }
}
