use super::{FacilityStore, fell_back, falls_back, mirrored, require_text};
use domain::DomainError;
use domain::equipment::{Equipment, NewEquipment};
use domain::reservation::ReservationCategory;
use tracing::info;

impl FacilityStore {
    /// Equipment ordered by name. Hidden ids never show up; inactive items
    /// only when `include_inactive` is set.
    pub async fn get_equipment(&self, include_inactive: bool) -> Result<Vec<Equipment>, DomainError> {
        let mut items = self.list_equipment(include_inactive).await?;
        let hidden = self.blacklist.hidden_ids().await?;
        items.retain(|e| !hidden.contains(&e.id));
        Ok(items)
    }

    /// Active equipment a reservation of `category` can book.
    pub async fn get_bookable_equipment(
        &self,
        category: ReservationCategory,
    ) -> Result<Vec<Equipment>, DomainError> {
        let mut items = self.get_equipment(false).await?;
        items.retain(|e| category.accepts(e.kind));
        Ok(items)
    }

    async fn list_equipment(&self, include_inactive: bool) -> Result<Vec<Equipment>, DomainError> {
        if let Some(remote) = &self.remote {
            match remote.equipment.find_all(include_inactive).await {
                Ok(items) => {
                    mirrored("get_equipment", self.local.equipment.save_all(&items).await);
                    return Ok(items);
                }
                Err(e) if falls_back(&e) => fell_back("get_equipment", &e),
                Err(e) => return Err(e),
            }
        }
        self.local.equipment.find_all(include_inactive).await
    }

    async fn find_equipment(&self, id: &str) -> Result<Equipment, DomainError> {
        if let Some(remote) = &self.remote {
            match remote.equipment.find_by_id(id).await {
                Ok(Some(item)) => return Ok(item),
                Ok(None) => return Err(DomainError::not_found("Equipment", id)),
                Err(e) if falls_back(&e) => fell_back("find_equipment", &e),
                Err(e) => return Err(e),
            }
        }
        self.local
            .equipment
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Equipment", id))
    }

    pub async fn create_equipment(&self, draft: NewEquipment) -> Result<Equipment, DomainError> {
        require_text("Equipment name", &draft.name)?;

        if let Some(remote) = &self.remote {
            match remote.equipment.insert(draft.clone()).await {
                Ok(item) => {
                    mirrored(
                        "create_equipment",
                        self.local.equipment.save_all(std::slice::from_ref(&item)).await,
                    );
                    info!(id = %item.id, name = %item.name, "Equipment created");
                    return Ok(item);
                }
                Err(e) if falls_back(&e) => fell_back("create_equipment", &e),
                Err(e) => return Err(e),
            }
        }
        let item = self.local.equipment.insert(draft).await?;
        info!(id = %item.id, name = %item.name, "Equipment created locally");
        Ok(item)
    }

    pub async fn update_equipment(&self, item: &Equipment) -> Result<(), DomainError> {
        require_text("Equipment name", &item.name)?;

        if let Some(remote) = &self.remote {
            match remote.equipment.save(item).await {
                Ok(()) => {
                    mirrored(
                        "update_equipment",
                        self.local.equipment.save_all(std::slice::from_ref(item)).await,
                    );
                    return Ok(());
                }
                Err(e) if falls_back(&e) => fell_back("update_equipment", &e),
                Err(e) => return Err(e),
            }
        }
        self.local.equipment.save(item).await
    }

    pub async fn set_equipment_active(
        &self,
        id: &str,
        active: bool,
    ) -> Result<Equipment, DomainError> {
        let mut item = self.find_equipment(id).await?;
        item.is_active = active;
        self.update_equipment(&item).await?;
        Ok(item)
    }

    /// Equipment is never deleted, only hidden from every listing.
    pub async fn hide_equipment(&self, id: &str) -> Result<(), DomainError> {
        self.blacklist.hide(id).await?;
        info!(id, "Equipment hidden");
        Ok(())
    }
}
