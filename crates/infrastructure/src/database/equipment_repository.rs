use super::entities::equipment;
use super::{db_error, parse_id, update_error};
use async_trait::async_trait;
use domain::DomainError;
use domain::equipment::{Equipment, EquipmentRepository, NewEquipment};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

pub struct SeaOrmEquipmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmEquipmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_equipment(model: equipment::Model) -> Result<Equipment, DomainError> {
        Ok(Equipment {
            id: model.id.to_string(),
            name: model.name,
            kind: model.kind.parse()?,
            is_active: model.is_active,
        })
    }
}

#[async_trait]
impl EquipmentRepository for SeaOrmEquipmentRepository {
    async fn find_all(&self, include_inactive: bool) -> Result<Vec<Equipment>, DomainError> {
        let mut query = equipment::Entity::find().order_by_asc(equipment::Column::Name);
        if !include_inactive {
            query = query.filter(equipment::Column::IsActive.eq(true));
        }

        let models = query.all(&self.db).await.map_err(db_error)?;
        models.into_iter().map(Self::model_to_equipment).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Equipment>, DomainError> {
        let model = equipment::Entity::find_by_id(parse_id(id)?)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        model.map(Self::model_to_equipment).transpose()
    }

    async fn insert(&self, draft: NewEquipment) -> Result<Equipment, DomainError> {
        let active_model = equipment::ActiveModel {
            id: NotSet,
            name: Set(draft.name),
            kind: Set(draft.kind.as_str().to_string()),
            is_active: Set(draft.is_active),
        };

        let model = active_model.insert(&self.db).await.map_err(db_error)?;
        Self::model_to_equipment(model)
    }

    async fn save(&self, item: &Equipment) -> Result<(), DomainError> {
        let active_model = equipment::ActiveModel {
            id: Set(parse_id(&item.id)?),
            name: Set(item.name.clone()),
            kind: Set(item.kind.as_str().to_string()),
            is_active: Set(item.is_active),
        };

        active_model
            .update(&self.db)
            .await
            .map_err(|e| update_error("Equipment", &item.id, e))?;
        Ok(())
    }
}
