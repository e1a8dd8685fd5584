use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::BearerAuth;
use crate::errors::api::ApiError;
use crate::services::AccessControl;
use crate::stores::customer_store::{CustomerPatch, CustomerStore};
use crate::types::db::customer;
use crate::types::dto::common::DeleteResponse;
use crate::types::dto::customer::{CreateCustomerRequest, CustomerDto, UpdateCustomerRequest};
use crate::types::internal::auth::permissions;
use crate::types::internal::money::{format_amount, parse_amount};

/// Customer API endpoints
pub struct CustomersApi {
    customer_store: Arc<CustomerStore>,
    access_control: Arc<AccessControl>,
}

impl CustomersApi {
    pub fn new(customer_store: Arc<CustomerStore>, access_control: Arc<AccessControl>) -> Self {
        Self {
            customer_store,
            access_control,
        }
    }
}

/// API tags for customer endpoints
#[derive(Tags)]
enum CustomerTags {
    /// Customer endpoints
    Customers,
}

fn to_dto(record: customer::Model) -> CustomerDto {
    CustomerDto {
        cust_code: record.cust_code,
        cust_name: record.cust_name,
        cust_city: record.cust_city,
        working_area: record.working_area,
        cust_country: record.cust_country,
        grade: record.grade,
        opening_amt: format_amount(record.opening_amt),
        receive_amt: format_amount(record.receive_amt),
        payment_amt: format_amount(record.payment_amt),
        outstanding_amt: format_amount(record.outstanding_amt),
        phone_no: record.phone_no,
        agent_code: record.agent_code,
    }
}

fn from_create(body: CreateCustomerRequest) -> Result<customer::Model, ApiError> {
    Ok(customer::Model {
        cust_code: body.cust_code,
        cust_name: body.cust_name,
        cust_city: body.cust_city,
        working_area: body.working_area,
        cust_country: body.cust_country,
        grade: body.grade,
        opening_amt: parse_amount(&body.opening_amt)?,
        receive_amt: parse_amount(&body.receive_amt)?,
        payment_amt: parse_amount(&body.payment_amt)?,
        outstanding_amt: parse_amount(&body.outstanding_amt)?,
        phone_no: body.phone_no,
        agent_code: body.agent_code,
    })
}

fn from_update(body: UpdateCustomerRequest) -> Result<CustomerPatch, ApiError> {
    Ok(CustomerPatch {
        cust_name: body.cust_name,
        cust_city: body.cust_city,
        working_area: body.working_area,
        cust_country: body.cust_country,
        grade: body.grade,
        opening_amt: body.opening_amt.as_deref().map(parse_amount).transpose()?,
        receive_amt: body.receive_amt.as_deref().map(parse_amount).transpose()?,
        payment_amt: body.payment_amt.as_deref().map(parse_amount).transpose()?,
        outstanding_amt: body
            .outstanding_amt
            .as_deref()
            .map(parse_amount)
            .transpose()?,
        phone_no: body.phone_no,
        agent_code: body.agent_code,
    })
}

#[OpenApi(prefix_path = "/customers")]
impl CustomersApi {
    /// List every customer
    #[oai(path = "/", method = "get", tag = "CustomerTags::Customers")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<CustomerDto>>, ApiError> {
        self.access_control
            .require(&auth.0.token, permissions::CUSTOMERS_READ)
            .await?;

        let listed = self.customer_store.list().await?;
        Ok(Json(listed.into_iter().map(to_dto).collect()))
    }

    /// Fetch one customer by code
    #[oai(path = "/:cust_code", method = "get", tag = "CustomerTags::Customers")]
    async fn get(
        &self,
        auth: BearerAuth,
        cust_code: Path<String>,
    ) -> Result<Json<CustomerDto>, ApiError> {
        self.access_control
            .require(&auth.0.token, permissions::CUSTOMERS_READ)
            .await?;

        let found = self
            .customer_store
            .find(&cust_code.0)
            .await?
            .ok_or_else(|| ApiError::not_found("customer", &cust_code.0))?;
        Ok(Json(to_dto(found)))
    }

    /// Create a customer
    #[oai(path = "/", method = "post", tag = "CustomerTags::Customers")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<CreateCustomerRequest>,
    ) -> Result<Json<CustomerDto>, ApiError> {
        self.access_control
            .require(&auth.0.token, permissions::CUSTOMERS_WRITE)
            .await?;

        let created = self.customer_store.create(from_create(body.0)?).await?;
        Ok(Json(to_dto(created)))
    }

    /// Update a customer; absent fields are left unchanged
    #[oai(path = "/:cust_code", method = "patch", tag = "CustomerTags::Customers")]
    async fn update(
        &self,
        auth: BearerAuth,
        cust_code: Path<String>,
        body: Json<UpdateCustomerRequest>,
    ) -> Result<Json<CustomerDto>, ApiError> {
        self.access_control
            .require(&auth.0.token, permissions::CUSTOMERS_WRITE)
            .await?;

        let updated = self
            .customer_store
            .update(&cust_code.0, from_update(body.0)?)
            .await?;
        Ok(Json(to_dto(updated)))
    }

    /// Delete a customer
    #[oai(path = "/:cust_code", method = "delete", tag = "CustomerTags::Customers")]
    async fn delete(
        &self,
        auth: BearerAuth,
        cust_code: Path<String>,
    ) -> Result<Json<DeleteResponse>, ApiError> {
        self.access_control
            .require(&auth.0.token, permissions::CUSTOMERS_WRITE)
            .await?;

        let affected = self.customer_store.delete(&cust_code.0).await?;
        Ok(Json(DeleteResponse { affected }))
    }
}
