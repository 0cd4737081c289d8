use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the lists table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lists")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::List {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            created_at: model.created_at.into(),
        }
    }
}

impl From<crate::models::CreateList> for ActiveModel {
    fn from(input: crate::models::CreateList) -> Self {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(input.title),
            created_at: Set(chrono::Utc::now().into()),
        }
    }
}
