use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    // Not a foreign key: scaffolding locations have no equipment row
    pub resource_id: String,
    pub resource_name: String,
    #[sea_orm(column_name = "type")]
    pub category: String,
    pub date: String,       // YYYY-MM-DD
    pub start_time: String, // HH:MM
    pub end_time: String,   // HH:MM
    pub requester: String,
    pub observation: Option<String>,
    pub scaffolding_type: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub cost_saved: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
