use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Insert payload for a `sessions` row: the bearer token minted alongside a
/// completed transaction. The database assigns id and started_at; nothing in
/// this service reads the row back (the gate does no lookup).
#[derive(Debug, Clone, Serialize)]
pub struct NewCallSession {
    pub transaction_id: String,
    pub user_token: String,
    pub video_id: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateCheckoutRequest {
    #[serde(rename = "planId")]
    pub plan_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateCheckoutResponse {
    /// Stripe's hosted checkout redirect URL.
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyPaymentRequest {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyPaymentResponse {
    pub success: bool,
    #[serde(rename = "sessionToken")]
    pub session_token: String,
    #[serde(rename = "planName")]
    pub plan_name: String,
}
