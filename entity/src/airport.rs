use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "airport")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::stop_by_airport::Entity")]
    StopByAirport,
}

impl Related<super::stop_by_airport::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StopByAirport.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
