use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, JoinType, QuerySelect, RelationTrait, Set,
};

use crate::errors::api::ApiError;
use crate::types::db::{customer, order};

/// Field-level patch for order updates; `None` leaves a column unchanged.
#[derive(Debug, Default)]
pub struct OrderPatch {
    pub ord_amount: Option<i64>,
    pub advance_amount: Option<i64>,
    pub ord_date: Option<String>,
    pub cust_code: Option<String>,
    pub agent_code: Option<String>,
    pub ord_description: Option<String>,
}

/// One row of the total-amount-by-customer aggregate (integer cents).
#[derive(Debug, FromQueryResult, PartialEq, Eq)]
pub struct CustomerTotalRow {
    pub cust_code: String,
    pub total_ord_amount: i64,
}

/// One row of the total-amount-by-agent aggregate (integer cents).
#[derive(Debug, FromQueryResult, PartialEq, Eq)]
pub struct AgentTotalRow {
    pub agent_code: String,
    pub total_ord_amount: i64,
}

/// One row of the total-amount-by-country aggregate (integer cents).
#[derive(Debug, FromQueryResult, PartialEq, Eq)]
pub struct CountryTotalRow {
    pub cust_country: String,
    pub total_ord_amount: i64,
}

/// OrderStore manages order records and the grouped-sum aggregates.
///
/// Group keys are the string codes themselves; only keys that appear on at
/// least one order produce a row (no zero-rows). Sums are integer-cent
/// exact.
pub struct OrderStore {
    db: DatabaseConnection,
}

impl OrderStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<order::Model>, ApiError> {
        order::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Database error: {}", e)))
    }

    pub async fn find(&self, ord_num: &str) -> Result<Option<order::Model>, ApiError> {
        order::Entity::find_by_id(ord_num)
            .one(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Database error: {}", e)))
    }

    pub async fn create(&self, record: order::Model) -> Result<order::Model, ApiError> {
        if self.find(&record.ord_num).await?.is_some() {
            return Err(ApiError::validation(format!(
                "Order '{}' already exists",
                record.ord_num
            )));
        }

        record
            .into_active_model()
            .insert(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Database error: {}", e)))
    }

    pub async fn update(&self, ord_num: &str, patch: OrderPatch) -> Result<order::Model, ApiError> {
        let found = self
            .find(ord_num)
            .await?
            .ok_or_else(|| ApiError::not_found("order", ord_num))?;

        let mut active: order::ActiveModel = found.into();
        if let Some(v) = patch.ord_amount {
            active.ord_amount = Set(v);
        }
        if let Some(v) = patch.advance_amount {
            active.advance_amount = Set(v);
        }
        if let Some(v) = patch.ord_date {
            active.ord_date = Set(v);
        }
        if let Some(v) = patch.cust_code {
            active.cust_code = Set(v);
        }
        if let Some(v) = patch.agent_code {
            active.agent_code = Set(v);
        }
        if let Some(v) = patch.ord_description {
            active.ord_description = Set(Some(v));
        }

        active
            .update(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Database error: {}", e)))
    }

    pub async fn delete(&self, ord_num: &str) -> Result<u64, ApiError> {
        let result = order::Entity::delete_by_id(ord_num)
            .exec(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Database error: {}", e)))?;

        if result.rows_affected == 0 {
            return Err(ApiError::not_found("order", ord_num));
        }
        Ok(result.rows_affected)
    }

    /// Sum of order amounts grouped by customer code.
    pub async fn total_amount_by_customer(&self) -> Result<Vec<CustomerTotalRow>, ApiError> {
        order::Entity::find()
            .select_only()
            .column(order::Column::CustCode)
            .column_as(order::Column::OrdAmount.sum(), "total_ord_amount")
            .group_by(order::Column::CustCode)
            .into_model::<CustomerTotalRow>()
            .all(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Database error: {}", e)))
    }

    /// Sum of order amounts grouped by agent code.
    pub async fn total_amount_by_agent(&self) -> Result<Vec<AgentTotalRow>, ApiError> {
        order::Entity::find()
            .select_only()
            .column(order::Column::AgentCode)
            .column_as(order::Column::OrdAmount.sum(), "total_ord_amount")
            .group_by(order::Column::AgentCode)
            .into_model::<AgentTotalRow>()
            .all(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Database error: {}", e)))
    }

    /// Sum of order amounts grouped by the customer's country.
    ///
    /// The country lives on the customer record, so this joins orders to
    /// customers on the string customer code.
    pub async fn total_amount_by_country(&self) -> Result<Vec<CountryTotalRow>, ApiError> {
        order::Entity::find()
            .select_only()
            .column(customer::Column::CustCountry)
            .column_as(order::Column::OrdAmount.sum(), "total_ord_amount")
            .join(JoinType::InnerJoin, order::Relation::Customer.def())
            .group_by(customer::Column::CustCountry)
            .into_model::<CountryTotalRow>()
            .all(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Database error: {}", e)))
    }
}
