use super::entities::reservations;
use super::{db_error, parse_id, update_error};
use async_trait::async_trait;
use chrono::NaiveDate;
use domain::DomainError;
use domain::clock::{format_date, format_time, parse_date, parse_time};
use domain::reservation::{NewReservation, Reservation, ReservationRepository, ScaffoldingType};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_reservation(model: reservations::Model) -> Result<Reservation, DomainError> {
        Ok(Reservation {
            id: model.id.to_string(),
            resource_id: model.resource_id,
            resource_name: model.resource_name,
            category: model.category.parse()?,
            date: parse_date(&model.date)?,
            start_time: parse_time(&model.start_time)?,
            end_time: parse_time(&model.end_time)?,
            requester: model.requester,
            observation: model.observation,
            scaffolding_type: model
                .scaffolding_type
                .as_deref()
                .map(str::parse::<ScaffoldingType>)
                .transpose()?,
            cost_saved: Some(model.cost_saved),
        })
    }

    fn collect(models: Vec<reservations::Model>) -> Result<Vec<Reservation>, DomainError> {
        models.into_iter().map(Self::model_to_reservation).collect()
    }
}

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Reservation>, DomainError> {
        let models = reservations::Entity::find()
            .filter(reservations::Column::Date.eq(format_date(date)))
            .order_by_asc(reservations::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Self::collect(models)
    }

    async fn find_all(&self) -> Result<Vec<Reservation>, DomainError> {
        let models = reservations::Entity::find()
            .order_by_asc(reservations::Column::Date)
            .order_by_asc(reservations::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Self::collect(models)
    }

    async fn insert(&self, draft: NewReservation) -> Result<Reservation, DomainError> {
        let active_model = reservations::ActiveModel {
            id: NotSet,
            resource_id: Set(draft.resource_id),
            resource_name: Set(draft.resource_name),
            category: Set(draft.category.as_str().to_string()),
            date: Set(format_date(draft.date)),
            start_time: Set(format_time(draft.start_time)),
            end_time: Set(format_time(draft.end_time)),
            requester: Set(draft.requester),
            observation: Set(draft.observation),
            scaffolding_type: Set(draft.scaffolding_type.map(|t| t.as_str().to_string())),
            cost_saved: Set(draft.cost_saved.unwrap_or(0.0)),
        };

        let model = active_model.insert(&self.db).await.map_err(db_error)?;
        Self::model_to_reservation(model)
    }

    async fn save(&self, reservation: &Reservation) -> Result<(), DomainError> {
        let active_model = reservations::ActiveModel {
            id: Set(parse_id(&reservation.id)?),
            resource_id: Set(reservation.resource_id.clone()),
            resource_name: Set(reservation.resource_name.clone()),
            category: Set(reservation.category.as_str().to_string()),
            date: Set(format_date(reservation.date)),
            start_time: Set(format_time(reservation.start_time)),
            end_time: Set(format_time(reservation.end_time)),
            requester: Set(reservation.requester.clone()),
            observation: Set(reservation.observation.clone()),
            scaffolding_type: Set(reservation
                .scaffolding_type
                .map(|t| t.as_str().to_string())),
            cost_saved: Set(reservation.cost_saved.unwrap_or(0.0)),
        };

        active_model
            .update(&self.db)
            .await
            .map_err(|e| update_error("Reservation", &reservation.id, e))?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let result = reservations::Entity::delete_by_id(parse_id(id)?)
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Reservation", id));
        }
        Ok(())
    }
}
