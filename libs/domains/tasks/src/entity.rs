use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the tasks table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub list_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub completed: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Task
impl From<Model> for crate::models::Task {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            list_id: model.list_id,
            text: model.text,
            completed: model.completed,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl ActiveModel {
    /// A new, not yet completed task in `list_id`
    pub fn for_list(list_id: Uuid, input: crate::models::CreateTask) -> Self {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        ActiveModel {
            id: Set(Uuid::new_v4()),
            list_id: Set(list_id),
            text: Set(input.text),
            completed: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}
