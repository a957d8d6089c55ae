use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rides")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub ride_id: Uuid,
    pub passenger_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub from_lat: f64,
    pub from_long: f64,
    pub to_lat: f64,
    pub to_long: f64,
    pub fare: f64,
    pub distance: f64,
    pub status: String,
    pub date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::PassengerId",
        to = "super::accounts::Column::AccountId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Passenger,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Passenger.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
