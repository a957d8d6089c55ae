use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub account_id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub tax_id: String,
    pub password: String,
    pub car_plate: Option<String>,
    pub is_passenger: bool,
    pub is_driver: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rides::Entity")]
    Rides,
}

impl Related<super::rides::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rides.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
