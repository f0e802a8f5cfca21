use crate::config::StripeConfig;
use crate::error::{AppError, AppResult};
use crate::models::Plan;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

const API_BASE: &str = "https://api.stripe.com/v1";

/// The slice of a Stripe Checkout Session this service cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    /// Hosted redirect URL; present on freshly created sessions.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub payment_status: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl CheckoutSession {
    pub fn is_paid(&self) -> bool {
        self.payment_status == "paid"
    }

    /// Plan id stashed in the session metadata at creation time.
    pub fn plan_id(&self) -> Option<&str> {
        self.metadata.get("planId").map(String::as_str)
    }
}

#[derive(Clone)]
pub struct StripeService {
    client: Client,
    config: StripeConfig,
}

impl StripeService {
    pub fn new(config: StripeConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Creates a single-use hosted checkout session for one plan.
    pub async fn create_checkout_session(
        &self,
        plan: &Plan,
        base_url: &str,
    ) -> AppResult<CheckoutSession> {
        let url = format!("{API_BASE}/checkout/sessions");
        let params = checkout_form_params(plan, base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.secret_key)
            .form(&params)
            .send()
            .await?;

        if response.status().is_success() {
            let session: CheckoutSession = response.json().await?;
            log::info!(
                "Created checkout session {} for plan {}",
                session.id,
                plan.id
            );
            Ok(session)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(AppError::ExternalApiError(format!(
                "Failed to create checkout session: {error_text}"
            )))
        }
    }

    pub async fn retrieve_checkout_session(&self, session_id: &str) -> AppResult<CheckoutSession> {
        let url = format!("{API_BASE}/checkout/sessions/{session_id}");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.secret_key)
            .send()
            .await?;

        if response.status().is_success() {
            let session: CheckoutSession = response.json().await?;
            Ok(session)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(AppError::ExternalApiError(format!(
                "Failed to retrieve checkout session {session_id}: {error_text}"
            )))
        }
    }
}

/// Form-encoded body for POST /v1/checkout/sessions. The amount goes through
/// in centavos; the plan id rides along as metadata for the verifier.
pub(crate) fn checkout_form_params(plan: &Plan, base_url: &str) -> Vec<(String, String)> {
    let base_url = base_url.trim_end_matches('/');
    vec![
        ("payment_method_types[0]".to_string(), "card".to_string()),
        (
            "line_items[0][price_data][currency]".to_string(),
            "brl".to_string(),
        ),
        (
            "line_items[0][price_data][product_data][name]".to_string(),
            format!("Sorrisinho Call - {}", plan.name),
        ),
        (
            "line_items[0][price_data][product_data][description]".to_string(),
            plan.description.clone(),
        ),
        (
            "line_items[0][price_data][unit_amount]".to_string(),
            plan.price_cents.to_string(),
        ),
        ("line_items[0][quantity]".to_string(), "1".to_string()),
        ("mode".to_string(), "payment".to_string()),
        (
            "success_url".to_string(),
            format!("{base_url}/success?session_id={{CHECKOUT_SESSION_ID}}"),
        ),
        ("cancel_url".to_string(), base_url.to_string()),
        ("metadata[planId]".to_string(), plan.id.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_form_params_price_matches_plan() {
        for plan in catalog::plans() {
            let params = checkout_form_params(plan, "https://example.com");
            assert_eq!(
                param(&params, "line_items[0][price_data][unit_amount]"),
                Some(plan.price_cents.to_string().as_str())
            );
            assert_eq!(param(&params, "metadata[planId]"), Some(plan.id.as_str()));
        }
    }

    #[test]
    fn test_form_params_urls_and_mode() {
        let plan = catalog::find_plan("10min").unwrap();
        let params = checkout_form_params(plan, "https://example.com/");
        assert_eq!(param(&params, "mode"), Some("payment"));
        assert_eq!(
            param(&params, "success_url"),
            Some("https://example.com/success?session_id={CHECKOUT_SESSION_ID}")
        );
        assert_eq!(param(&params, "cancel_url"), Some("https://example.com"));
        assert_eq!(
            param(&params, "line_items[0][price_data][currency]"),
            Some("brl")
        );
    }

    #[test]
    fn test_parse_paid_session() {
        let body = serde_json::json!({
            "id": "cs_test_123",
            "object": "checkout.session",
            "payment_status": "paid",
            "metadata": {"planId": "10min"},
            "url": null
        });
        let session: CheckoutSession = serde_json::from_value(body).unwrap();
        assert!(session.is_paid());
        assert_eq!(session.plan_id(), Some("10min"));
    }

    #[test]
    fn test_parse_unpaid_session() {
        let body = serde_json::json!({
            "id": "cs_test_456",
            "payment_status": "unpaid",
            "url": "https://checkout.stripe.com/c/pay/cs_test_456"
        });
        let session: CheckoutSession = serde_json::from_value(body).unwrap();
        assert!(!session.is_paid());
        assert_eq!(session.plan_id(), None);
        assert!(session.url.is_some());
    }
}
