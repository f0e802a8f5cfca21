use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A purchasable offer: duration label plus price in centavos.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub minutes_label: String,
    pub price_cents: i64,
    pub description: String,
}
