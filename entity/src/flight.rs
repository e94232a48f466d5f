use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "flight")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub start_date: Option<DateTimeUtc>,
    pub end_date: Option<DateTimeUtc>,
    pub price: Option<f64>,
    pub is_active: bool,
    pub image: Option<String>,
    pub plane_id: i32,
    pub flight_route_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::plane::Entity",
        from = "Column::PlaneId",
        to = "super::plane::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Plane,
    #[sea_orm(
        belongs_to = "super::flight_route::Entity",
        from = "Column::FlightRouteId",
        to = "super::flight_route::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FlightRoute,
    #[sea_orm(has_many = "super::seat::Entity")]
    Seat,
    #[sea_orm(has_many = "super::stop_by_airport::Entity")]
    StopByAirport,
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
}

impl Related<super::plane::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plane.def()
    }
}

impl Related<super::flight_route::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightRoute.def()
    }
}

impl Related<super::seat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seat.def()
    }
}

impl Related<super::stop_by_airport::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StopByAirport.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
