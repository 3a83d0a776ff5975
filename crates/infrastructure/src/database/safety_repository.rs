use super::entities::safety_records;
use super::{db_error, parse_id, update_error};
use async_trait::async_trait;
use domain::DomainError;
use domain::clock::{format_date, parse_date};
use domain::safety::{NewSafetyRecord, RegulationType, SafetyRecord, SafetyRepository};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

pub struct SeaOrmSafetyRepository {
    db: DatabaseConnection,
}

impl SeaOrmSafetyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_record(model: safety_records::Model) -> Result<SafetyRecord, DomainError> {
        Ok(SafetyRecord {
            id: model.id.to_string(),
            nr_type: model.nr_type.parse()?,
            asset_name: model.asset_name,
            description: model.description,
            last_inspection: parse_date(&model.last_inspection)?,
            next_inspection: parse_date(&model.next_inspection)?,
            status: model.status.parse()?,
            responsible: model.responsible,
            document_url: model.document_url,
        })
    }
}

#[async_trait]
impl SafetyRepository for SeaOrmSafetyRepository {
    async fn find_by_regulation(
        &self,
        nr_type: RegulationType,
    ) -> Result<Vec<SafetyRecord>, DomainError> {
        let models = safety_records::Entity::find()
            .filter(safety_records::Column::NrType.eq(nr_type.as_str()))
            .order_by_asc(safety_records::Column::NextInspection)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(Self::model_to_record).collect()
    }

    async fn insert(&self, draft: NewSafetyRecord) -> Result<SafetyRecord, DomainError> {
        let active_model = safety_records::ActiveModel {
            id: NotSet,
            nr_type: Set(draft.nr_type.as_str().to_string()),
            asset_name: Set(draft.asset_name),
            description: Set(draft.description),
            last_inspection: Set(format_date(draft.last_inspection)),
            next_inspection: Set(format_date(draft.next_inspection)),
            status: Set(draft.status.as_str().to_string()),
            responsible: Set(draft.responsible),
            document_url: Set(draft.document_url),
        };

        let model = active_model.insert(&self.db).await.map_err(db_error)?;
        Self::model_to_record(model)
    }

    async fn save(&self, record: &SafetyRecord) -> Result<(), DomainError> {
        let active_model = safety_records::ActiveModel {
            id: Set(parse_id(&record.id)?),
            nr_type: Set(record.nr_type.as_str().to_string()),
            asset_name: Set(record.asset_name.clone()),
            description: Set(record.description.clone()),
            last_inspection: Set(format_date(record.last_inspection)),
            next_inspection: Set(format_date(record.next_inspection)),
            status: Set(record.status.as_str().to_string()),
            responsible: Set(record.responsible.clone()),
            document_url: Set(record.document_url.clone()),
        };

        active_model
            .update(&self.db)
            .await
            .map_err(|e| update_error("Safety record", &record.id, e))?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let result = safety_records::Entity::delete_by_id(parse_id(id)?)
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Safety record", id));
        }
        Ok(())
    }
}
