use super::{FacilityStore, fell_back, falls_back, mirrored, require_text};
use chrono::{Local, NaiveDate};
use domain::DomainError;
use domain::maintenance::{
    MaintenanceOrder, MaintenanceStatus, MaintenanceType, NewMaintenanceOrder,
};
use tracing::info;

impl FacilityStore {
    /// Orders of one kind, newest entry first.
    pub async fn get_maintenance_orders(
        &self,
        kind: MaintenanceType,
    ) -> Result<Vec<MaintenanceOrder>, DomainError> {
        if let Some(remote) = &self.remote {
            match remote.maintenance.find_by_type(kind).await {
                Ok(orders) => {
                    mirrored(
                        "get_maintenance_orders",
                        self.local.maintenance.save_all(&orders).await,
                    );
                    return Ok(orders);
                }
                Err(e) if falls_back(&e) => fell_back("get_maintenance_orders", &e),
                Err(e) => return Err(e),
            }
        }
        self.local.maintenance.find_by_type(kind).await
    }

    async fn find_maintenance_order(&self, id: &str) -> Result<MaintenanceOrder, DomainError> {
        if let Some(remote) = &self.remote {
            match remote.maintenance.find_by_id(id).await {
                Ok(Some(order)) => return Ok(order),
                Ok(None) => return Err(DomainError::not_found("Maintenance order", id)),
                Err(e) if falls_back(&e) => fell_back("find_maintenance_order", &e),
                Err(e) => return Err(e),
            }
        }
        self.local
            .maintenance
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Maintenance order", id))
    }

    /// New orders start as pending and are entered today unless told otherwise.
    pub async fn create_maintenance_order(
        &self,
        draft: NewMaintenanceOrder,
    ) -> Result<MaintenanceOrder, DomainError> {
        require_text("Item name", &draft.item_name)?;
        let order = draft.into_order(String::new(), Local::now().date_naive());

        if let Some(remote) = &self.remote {
            match remote.maintenance.insert(order.clone()).await {
                Ok(stored) => {
                    mirrored(
                        "create_maintenance_order",
                        self.local.maintenance.save_all(std::slice::from_ref(&stored)).await,
                    );
                    info!(id = %stored.id, kind = %stored.kind.as_str(), "Maintenance order created");
                    return Ok(stored);
                }
                Err(e) if falls_back(&e) => fell_back("create_maintenance_order", &e),
                Err(e) => return Err(e),
            }
        }
        let stored = self.local.maintenance.insert(order).await?;
        info!(id = %stored.id, kind = %stored.kind.as_str(), "Maintenance order created locally");
        Ok(stored)
    }

    pub async fn update_maintenance_order(
        &self,
        order: &MaintenanceOrder,
    ) -> Result<(), DomainError> {
        require_text("Item name", &order.item_name)?;

        if let Some(remote) = &self.remote {
            match remote.maintenance.save(order).await {
                Ok(()) => {
                    mirrored(
                        "update_maintenance_order",
                        self.local.maintenance.save_all(std::slice::from_ref(order)).await,
                    );
                    return Ok(());
                }
                Err(e) if falls_back(&e) => fell_back("update_maintenance_order", &e),
                Err(e) => return Err(e),
            }
        }
        self.local.maintenance.save(order).await
    }

    /// Completing stamps `today` as completion date; reopening clears it.
    pub async fn set_maintenance_status(
        &self,
        id: &str,
        status: MaintenanceStatus,
        today: NaiveDate,
    ) -> Result<MaintenanceOrder, DomainError> {
        let mut order = self.find_maintenance_order(id).await?;
        order.transition(status, today);
        self.update_maintenance_order(&order).await?;
        info!(id, status = %status.as_str(), "Maintenance status changed");
        Ok(order)
    }

    pub async fn delete_maintenance_order(&self, id: &str) -> Result<(), DomainError> {
        if let Some(remote) = &self.remote {
            match remote.maintenance.delete(id).await {
                Ok(()) => {
                    mirrored(
                        "delete_maintenance_order",
                        self.local.maintenance.delete(id).await,
                    );
                    return Ok(());
                }
                Err(e) if falls_back(&e) => fell_back("delete_maintenance_order", &e),
                Err(e) => return Err(e),
            }
        }
        self.local.maintenance.delete(id).await
    }
}
