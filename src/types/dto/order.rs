use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Order as returned by the API. Amounts are decimal strings.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct OrderDto {
    /// Order number (natural key, e.g. "200101")
    pub ord_num: String,

    /// Order amount
    pub ord_amount: String,

    /// Advance amount
    pub advance_amount: String,

    /// Order date (YYYY-MM-DD)
    pub ord_date: String,

    /// Customer code
    pub cust_code: String,

    /// Agent code
    pub agent_code: String,

    /// Free-text description
    pub ord_description: Option<String>,
}

/// Request model for creating an order
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Order number (natural key, e.g. "200101")
    pub ord_num: String,

    /// Order amount (decimal string)
    pub ord_amount: String,

    /// Advance amount (decimal string)
    pub advance_amount: String,

    /// Order date (YYYY-MM-DD)
    pub ord_date: String,

    /// Customer code
    pub cust_code: String,

    /// Agent code
    pub agent_code: String,

    /// Free-text description
    pub ord_description: Option<String>,
}

/// Request model for updating an order; absent fields are left unchanged
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateOrderRequest {
    /// Order amount (decimal string)
    pub ord_amount: Option<String>,

    /// Advance amount (decimal string)
    pub advance_amount: Option<String>,

    /// Order date (YYYY-MM-DD)
    pub ord_date: Option<String>,

    /// Customer code
    pub cust_code: Option<String>,

    /// Agent code
    pub agent_code: Option<String>,

    /// Free-text description
    pub ord_description: Option<String>,
}

/// One row of the total-amount-by-customer aggregate
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CustomerTotalDto {
    /// Customer code
    pub cust_code: String,

    /// Sum of order amounts for the customer
    pub total_ord_amount: String,
}

/// One row of the total-amount-by-agent aggregate
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct AgentTotalDto {
    /// Agent code
    pub agent_code: String,

    /// Sum of order amounts for the agent
    pub total_ord_amount: String,
}

/// One row of the total-amount-by-country aggregate
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CountryTotalDto {
    /// Customer country
    pub cust_country: String,

    /// Sum of order amounts for the country
    pub total_ord_amount: String,
}
