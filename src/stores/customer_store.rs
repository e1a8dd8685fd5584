use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};

use crate::errors::api::ApiError;
use crate::types::db::customer;

/// Field-level patch for customer updates; `None` leaves a column unchanged.
#[derive(Debug, Default)]
pub struct CustomerPatch {
    pub cust_name: Option<String>,
    pub cust_city: Option<String>,
    pub working_area: Option<String>,
    pub cust_country: Option<String>,
    pub grade: Option<i32>,
    pub opening_amt: Option<i64>,
    pub receive_amt: Option<i64>,
    pub payment_amt: Option<i64>,
    pub outstanding_amt: Option<i64>,
    pub phone_no: Option<String>,
    pub agent_code: Option<String>,
}

/// CustomerStore manages customer records keyed by their natural code.
pub struct CustomerStore {
    db: DatabaseConnection,
}

impl CustomerStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<customer::Model>, ApiError> {
        customer::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Database error: {}", e)))
    }

    pub async fn find(&self, cust_code: &str) -> Result<Option<customer::Model>, ApiError> {
        customer::Entity::find_by_id(cust_code)
            .one(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Database error: {}", e)))
    }

    pub async fn create(&self, record: customer::Model) -> Result<customer::Model, ApiError> {
        if self.find(&record.cust_code).await?.is_some() {
            return Err(ApiError::validation(format!(
                "Customer '{}' already exists",
                record.cust_code
            )));
        }

        record
            .into_active_model()
            .insert(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Database error: {}", e)))
    }

    pub async fn update(
        &self,
        cust_code: &str,
        patch: CustomerPatch,
    ) -> Result<customer::Model, ApiError> {
        let found = self
            .find(cust_code)
            .await?
            .ok_or_else(|| ApiError::not_found("customer", cust_code))?;

        let mut active: customer::ActiveModel = found.into();
        if let Some(v) = patch.cust_name {
            active.cust_name = Set(v);
        }
        if let Some(v) = patch.cust_city {
            active.cust_city = Set(Some(v));
        }
        if let Some(v) = patch.working_area {
            active.working_area = Set(Some(v));
        }
        if let Some(v) = patch.cust_country {
            active.cust_country = Set(v);
        }
        if let Some(v) = patch.grade {
            active.grade = Set(Some(v));
        }
        if let Some(v) = patch.opening_amt {
            active.opening_amt = Set(v);
        }
        if let Some(v) = patch.receive_amt {
            active.receive_amt = Set(v);
        }
        if let Some(v) = patch.payment_amt {
            active.payment_amt = Set(v);
        }
        if let Some(v) = patch.outstanding_amt {
            active.outstanding_amt = Set(v);
        }
        if let Some(v) = patch.phone_no {
            active.phone_no = Set(Some(v));
        }
        if let Some(v) = patch.agent_code {
            active.agent_code = Set(v);
        }

        active
            .update(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Database error: {}", e)))
    }

    pub async fn delete(&self, cust_code: &str) -> Result<u64, ApiError> {
        let result = customer::Entity::delete_by_id(cust_code)
            .exec(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Database error: {}", e)))?;

        if result.rows_affected == 0 {
            return Err(ApiError::not_found("customer", cust_code));
        }
        Ok(result.rows_affected)
    }
}
