use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "safety_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nr_type: String,
    pub asset_name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub last_inspection: String,
    pub next_inspection: String,
    pub status: String,
    pub responsible: String,
    pub document_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
