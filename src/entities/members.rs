use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub age: i32,
    /// bcrypt 哈希
    pub password: String,
    pub phone_number: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::driving_records::Entity")]
    DrivingRecords,
    #[sea_orm(has_many = "super::reset_tokens::Entity")]
    ResetTokens,
}

impl Related<super::driving_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DrivingRecords.def()
    }
}

impl Related<super::reset_tokens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResetTokens.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
