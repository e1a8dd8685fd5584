use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Customer as returned by the API. Monetary fields are decimal strings.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CustomerDto {
    /// Customer code (natural key, e.g. "C00001")
    pub cust_code: String,

    /// Customer name
    pub cust_name: String,

    /// City
    pub cust_city: Option<String>,

    /// Working area
    pub working_area: Option<String>,

    /// Country
    pub cust_country: String,

    /// Customer grade
    pub grade: Option<i32>,

    /// Opening amount
    pub opening_amt: String,

    /// Received amount
    pub receive_amt: String,

    /// Payment amount
    pub payment_amt: String,

    /// Outstanding amount
    pub outstanding_amt: String,

    /// Phone number
    pub phone_no: Option<String>,

    /// Responsible agent code
    pub agent_code: String,
}

/// Request model for creating a customer
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    /// Customer code (natural key, e.g. "C00001")
    pub cust_code: String,

    /// Customer name
    pub cust_name: String,

    /// City
    pub cust_city: Option<String>,

    /// Working area
    pub working_area: Option<String>,

    /// Country
    pub cust_country: String,

    /// Customer grade
    pub grade: Option<i32>,

    /// Opening amount (decimal string)
    pub opening_amt: String,

    /// Received amount (decimal string)
    pub receive_amt: String,

    /// Payment amount (decimal string)
    pub payment_amt: String,

    /// Outstanding amount (decimal string)
    pub outstanding_amt: String,

    /// Phone number
    pub phone_no: Option<String>,

    /// Responsible agent code
    pub agent_code: String,
}

/// Request model for updating a customer; absent fields are left unchanged
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateCustomerRequest {
    /// Customer name
    pub cust_name: Option<String>,

    /// City
    pub cust_city: Option<String>,

    /// Working area
    pub working_area: Option<String>,

    /// Country
    pub cust_country: Option<String>,

    /// Customer grade
    pub grade: Option<i32>,

    /// Opening amount (decimal string)
    pub opening_amt: Option<String>,

    /// Received amount (decimal string)
    pub receive_amt: Option<String>,

    /// Payment amount (decimal string)
    pub payment_amt: Option<String>,

    /// Outstanding amount (decimal string)
    pub outstanding_amt: Option<String>,

    /// Phone number
    pub phone_no: Option<String>,

    /// Responsible agent code
    pub agent_code: Option<String>,
}
