use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "flight_route")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub start_airport_id: i32,
    pub end_airport_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::airport::Entity",
        from = "Column::StartAirportId",
        to = "super::airport::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    StartAirport,
    #[sea_orm(
        belongs_to = "super::airport::Entity",
        from = "Column::EndAirportId",
        to = "super::airport::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    EndAirport,
    #[sea_orm(has_many = "super::flight::Entity")]
    Flight,
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
