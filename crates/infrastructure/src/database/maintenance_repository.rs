use super::entities::maintenance_orders;
use super::{db_error, parse_id, update_error};
use async_trait::async_trait;
use domain::DomainError;
use domain::clock::{format_date, parse_date};
use domain::maintenance::{MaintenanceOrder, MaintenanceRepository, MaintenanceType};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

pub struct SeaOrmMaintenanceRepository {
    db: DatabaseConnection,
}

impl SeaOrmMaintenanceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_order(model: maintenance_orders::Model) -> Result<MaintenanceOrder, DomainError> {
        Ok(MaintenanceOrder {
            id: model.id.to_string(),
            kind: model.kind.parse()?,
            item_name: model.item_name,
            description: model.description,
            status: model.status.parse()?,
            cost_saved: model.cost_saved,
            technician: model.technician,
            entry_date: parse_date(&model.entry_date)?,
            completion_date: model.completion_date.as_deref().map(parse_date).transpose()?,
        })
    }

    fn to_active_model(
        id: ActiveValue<i32>,
        order: &MaintenanceOrder,
    ) -> maintenance_orders::ActiveModel {
        maintenance_orders::ActiveModel {
            id,
            kind: Set(order.kind.as_str().to_string()),
            item_name: Set(order.item_name.clone()),
            description: Set(order.description.clone()),
            status: Set(order.status.as_str().to_string()),
            cost_saved: Set(order.cost_saved),
            technician: Set(order.technician.clone()),
            entry_date: Set(format_date(order.entry_date)),
            completion_date: Set(order.completion_date.map(format_date)),
        }
    }
}

#[async_trait]
impl MaintenanceRepository for SeaOrmMaintenanceRepository {
    async fn find_by_type(
        &self,
        kind: MaintenanceType,
    ) -> Result<Vec<MaintenanceOrder>, DomainError> {
        let models = maintenance_orders::Entity::find()
            .filter(maintenance_orders::Column::Kind.eq(kind.as_str()))
            .order_by_desc(maintenance_orders::Column::EntryDate)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(Self::model_to_order).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<MaintenanceOrder>, DomainError> {
        let model = maintenance_orders::Entity::find_by_id(parse_id(id)?)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        model.map(Self::model_to_order).transpose()
    }

    async fn insert(&self, order: MaintenanceOrder) -> Result<MaintenanceOrder, DomainError> {
        let model = Self::to_active_model(NotSet, &order)
            .insert(&self.db)
            .await
            .map_err(db_error)?;
        Self::model_to_order(model)
    }

    async fn save(&self, order: &MaintenanceOrder) -> Result<(), DomainError> {
        Self::to_active_model(Set(parse_id(&order.id)?), order)
            .update(&self.db)
            .await
            .map_err(|e| update_error("Maintenance order", &order.id, e))?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let result = maintenance_orders::Entity::delete_by_id(parse_id(id)?)
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Maintenance order", id));
        }
        Ok(())
    }
}
