use super::{FacilityStore, fell_back, falls_back, mirrored, require_text};
use domain::DomainError;
use domain::safety::{NewSafetyRecord, RegulationType, SafetyRecord};
use tracing::info;

impl FacilityStore {
    /// Records under one regulation, earliest next inspection first.
    pub async fn get_safety_records(
        &self,
        nr_type: RegulationType,
    ) -> Result<Vec<SafetyRecord>, DomainError> {
        if let Some(remote) = &self.remote {
            match remote.safety.find_by_regulation(nr_type).await {
                Ok(records) => {
                    mirrored(
                        "get_safety_records",
                        self.local.safety.save_all(&records).await,
                    );
                    return Ok(records);
                }
                Err(e) if falls_back(&e) => fell_back("get_safety_records", &e),
                Err(e) => return Err(e),
            }
        }
        self.local.safety.find_by_regulation(nr_type).await
    }

    pub async fn create_safety_record(
        &self,
        draft: NewSafetyRecord,
    ) -> Result<SafetyRecord, DomainError> {
        require_text("Asset name", &draft.asset_name)?;

        if let Some(remote) = &self.remote {
            match remote.safety.insert(draft.clone()).await {
                Ok(record) => {
                    mirrored(
                        "create_safety_record",
                        self.local.safety.save_all(std::slice::from_ref(&record)).await,
                    );
                    info!(id = %record.id, nr = %record.nr_type.as_str(), "Safety record created");
                    return Ok(record);
                }
                Err(e) if falls_back(&e) => fell_back("create_safety_record", &e),
                Err(e) => return Err(e),
            }
        }
        let record = self.local.safety.insert(draft).await?;
        info!(id = %record.id, nr = %record.nr_type.as_str(), "Safety record created locally");
        Ok(record)
    }

    pub async fn update_safety_record(&self, record: &SafetyRecord) -> Result<(), DomainError> {
        require_text("Asset name", &record.asset_name)?;

        if let Some(remote) = &self.remote {
            match remote.safety.save(record).await {
                Ok(()) => {
                    mirrored(
                        "update_safety_record",
                        self.local.safety.save_all(std::slice::from_ref(record)).await,
                    );
                    return Ok(());
                }
                Err(e) if falls_back(&e) => fell_back("update_safety_record", &e),
                Err(e) => return Err(e),
            }
        }
        self.local.safety.save(record).await
    }

    pub async fn delete_safety_record(&self, id: &str) -> Result<(), DomainError> {
        if let Some(remote) = &self.remote {
            match remote.safety.delete(id).await {
                Ok(()) => {
                    mirrored("delete_safety_record", self.local.safety.delete(id).await);
                    return Ok(());
                }
                Err(e) if falls_back(&e) => fell_back("delete_safety_record", &e),
                Err(e) => return Err(e),
            }
        }
        self.local.safety.delete(id).await
    }
}
