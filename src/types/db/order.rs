use sea_orm::entity::prelude::*;

/// Order record. `cust_code` and `agent_code` are string foreign keys, not
/// numeric ids; the grouped aggregation queries group on these codes directly.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub ord_num: String,
    pub ord_amount: i64,
    pub advance_amount: i64,
    pub ord_date: String,
    pub cust_code: String,
    pub agent_code: String,
    pub ord_description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustCode",
        to = "super::customer::Column::CustCode"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "super::agent::Entity",
        from = "Column::AgentCode",
        to = "super::agent::Column::AgentCode"
    )]
    Agent,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::agent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
