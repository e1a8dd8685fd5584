use sea_orm::entity::prelude::*;

/// Customer record keyed by its natural code ("C00001").
///
/// Monetary columns hold integer cents so grouped sums stay exact.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub cust_code: String,
    pub cust_name: String,
    pub cust_city: Option<String>,
    pub working_area: Option<String>,
    pub cust_country: String,
    pub grade: Option<i32>,
    pub opening_amt: i64,
    pub receive_amt: i64,
    pub payment_amt: i64,
    pub outstanding_amt: i64,
    pub phone_no: Option<String>,
    pub agent_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::agent::Entity",
        from = "Column::AgentCode",
        to = "super::agent::Column::AgentCode"
    )]
    Agent,
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
}

impl Related<super::agent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agent.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
