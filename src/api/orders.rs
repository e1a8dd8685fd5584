use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::BearerAuth;
use crate::errors::api::ApiError;
use crate::services::AccessControl;
use crate::stores::order_store::{OrderPatch, OrderStore};
use crate::types::db::order;
use crate::types::dto::common::DeleteResponse;
use crate::types::dto::order::{
    AgentTotalDto, CountryTotalDto, CreateOrderRequest, CustomerTotalDto, OrderDto,
    UpdateOrderRequest,
};
use crate::types::internal::auth::permissions;
use crate::types::internal::money::{format_amount, parse_amount};

/// Order API endpoints, including the grouped-sum reports
pub struct OrdersApi {
    order_store: Arc<OrderStore>,
    access_control: Arc<AccessControl>,
}

impl OrdersApi {
    pub fn new(order_store: Arc<OrderStore>, access_control: Arc<AccessControl>) -> Self {
        Self {
            order_store,
            access_control,
        }
    }
}

/// API tags for order endpoints
#[derive(Tags)]
enum OrderTags {
    /// Order endpoints
    Orders,
    /// Aggregated order reports
    Reports,
}

fn to_dto(record: order::Model) -> OrderDto {
    OrderDto {
        ord_num: record.ord_num,
        ord_amount: format_amount(record.ord_amount),
        advance_amount: format_amount(record.advance_amount),
        ord_date: record.ord_date,
        cust_code: record.cust_code,
        agent_code: record.agent_code,
        ord_description: record.ord_description,
    }
}

fn from_create(body: CreateOrderRequest) -> Result<order::Model, ApiError> {
    Ok(order::Model {
        ord_num: body.ord_num,
        ord_amount: parse_amount(&body.ord_amount)?,
        advance_amount: parse_amount(&body.advance_amount)?,
        ord_date: body.ord_date,
        cust_code: body.cust_code,
        agent_code: body.agent_code,
        ord_description: body.ord_description,
    })
}

fn from_update(body: UpdateOrderRequest) -> Result<OrderPatch, ApiError> {
    Ok(OrderPatch {
        ord_amount: body.ord_amount.as_deref().map(parse_amount).transpose()?,
        advance_amount: body
            .advance_amount
            .as_deref()
            .map(parse_amount)
            .transpose()?,
        ord_date: body.ord_date,
        cust_code: body.cust_code,
        agent_code: body.agent_code,
        ord_description: body.ord_description,
    })
}

#[OpenApi(prefix_path = "/orders")]
impl OrdersApi {
    /// List every order
    #[oai(path = "/", method = "get", tag = "OrderTags::Orders")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<OrderDto>>, ApiError> {
        self.access_control
            .require(&auth.0.token, permissions::ORDERS_READ)
            .await?;

        let listed = self.order_store.list().await?;
        Ok(Json(listed.into_iter().map(to_dto).collect()))
    }

    /// Sum of order amounts grouped by customer code
    #[oai(
        path = "/total-amount-by-customer",
        method = "get",
        tag = "OrderTags::Reports"
    )]
    async fn total_amount_by_customer(
        &self,
        auth: BearerAuth,
    ) -> Result<Json<Vec<CustomerTotalDto>>, ApiError> {
        self.access_control
            .require(&auth.0.token, permissions::REPORTS_READ)
            .await?;

        let rows = self.order_store.total_amount_by_customer().await?;
        Ok(Json(
            rows.into_iter()
                .map(|row| CustomerTotalDto {
                    cust_code: row.cust_code,
                    total_ord_amount: format_amount(row.total_ord_amount),
                })
                .collect(),
        ))
    }

    /// Sum of order amounts grouped by agent code
    #[oai(
        path = "/total-amount-by-agent",
        method = "get",
        tag = "OrderTags::Reports"
    )]
    async fn total_amount_by_agent(
        &self,
        auth: BearerAuth,
    ) -> Result<Json<Vec<AgentTotalDto>>, ApiError> {
        self.access_control
            .require(&auth.0.token, permissions::REPORTS_READ)
            .await?;

        let rows = self.order_store.total_amount_by_agent().await?;
        Ok(Json(
            rows.into_iter()
                .map(|row| AgentTotalDto {
                    agent_code: row.agent_code,
                    total_ord_amount: format_amount(row.total_ord_amount),
                })
                .collect(),
        ))
    }

    /// Sum of order amounts grouped by the customer's country
    #[oai(
        path = "/total-amount-by-country",
        method = "get",
        tag = "OrderTags::Reports"
    )]
    async fn total_amount_by_country(
        &self,
        auth: BearerAuth,
    ) -> Result<Json<Vec<CountryTotalDto>>, ApiError> {
        self.access_control
            .require(&auth.0.token, permissions::REPORTS_READ)
            .await?;

        let rows = self.order_store.total_amount_by_country().await?;
        Ok(Json(
            rows.into_iter()
                .map(|row| CountryTotalDto {
                    cust_country: row.cust_country,
                    total_ord_amount: format_amount(row.total_ord_amount),
                })
                .collect(),
        ))
    }

    /// Fetch one order by number
    #[oai(path = "/:ord_num", method = "get", tag = "OrderTags::Orders")]
    async fn get(&self, auth: BearerAuth, ord_num: Path<String>) -> Result<Json<OrderDto>, ApiError> {
        self.access_control
            .require(&auth.0.token, permissions::ORDERS_READ)
            .await?;

        let found = self
            .order_store
            .find(&ord_num.0)
            .await?
            .ok_or_else(|| ApiError::not_found("order", &ord_num.0))?;
        Ok(Json(to_dto(found)))
    }

    /// Create an order
    #[oai(path = "/", method = "post", tag = "OrderTags::Orders")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<CreateOrderRequest>,
    ) -> Result<Json<OrderDto>, ApiError> {
        self.access_control
            .require(&auth.0.token, permissions::ORDERS_WRITE)
            .await?;

        let created = self.order_store.create(from_create(body.0)?).await?;
        Ok(Json(to_dto(created)))
    }

    /// Update an order; absent fields are left unchanged
    #[oai(path = "/:ord_num", method = "patch", tag = "OrderTags::Orders")]
    async fn update(
        &self,
        auth: BearerAuth,
        ord_num: Path<String>,
        body: Json<UpdateOrderRequest>,
    ) -> Result<Json<OrderDto>, ApiError> {
        self.access_control
            .require(&auth.0.token, permissions::ORDERS_WRITE)
            .await?;

        let updated = self
            .order_store
            .update(&ord_num.0, from_update(body.0)?)
            .await?;
        Ok(Json(to_dto(updated)))
    }

    /// Delete an order
    #[oai(path = "/:ord_num", method = "delete", tag = "OrderTags::Orders")]
    async fn delete(
        &self,
        auth: BearerAuth,
        ord_num: Path<String>,
    ) -> Result<Json<DeleteResponse>, ApiError> {
        self.access_control
            .require(&auth.0.token, permissions::ORDERS_WRITE)
            .await?;

        let affected = self.order_store.delete(&ord_num.0).await?;
        Ok(Json(DeleteResponse { affected }))
    }
}
