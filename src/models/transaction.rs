use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

/// A `transactions` row as returned by the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub plan_id: String,
    pub amount: i64,
    pub provider: String,
    pub provider_id: String,
    pub status: TransactionStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert payload; the database assigns id and created_at.
#[derive(Debug, Clone, Serialize)]
pub struct NewTransaction {
    pub plan_id: String,
    pub amount: i64,
    pub provider: String,
    pub provider_id: String,
    pub status: TransactionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransactionStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionStatus::Refunded).unwrap(),
            "\"refunded\""
        );
    }
}
