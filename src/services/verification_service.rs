use crate::catalog;
use crate::error::{AppError, AppResult};
use crate::external::{CheckoutSession, StripeService, SupabaseClient};
use crate::models::{
    NewCallSession, NewTransaction, Plan, TransactionStatus, VerifyPaymentRequest,
    VerifyPaymentResponse,
};
use crate::utils::{generate_session_token, session_expiry};
use chrono::{DateTime, Utc};

#[derive(Clone)]
pub struct VerificationService {
    stripe: Option<StripeService>,
    supabase: Option<SupabaseClient>,
    default_video_id: String,
}

impl VerificationService {
    pub fn new(
        stripe: Option<StripeService>,
        supabase: Option<SupabaseClient>,
        default_video_id: String,
    ) -> Self {
        Self {
            stripe,
            supabase,
            default_video_id,
        }
    }

    /// Confirms a paid checkout session and mints the access token. Database
    /// writes are best-effort: a failure is logged and the success response is
    /// returned anyway, so a token can exist without a matching session row.
    pub async fn verify_payment(
        &self,
        request: VerifyPaymentRequest,
    ) -> AppResult<VerifyPaymentResponse> {
        let stripe = self.stripe.as_ref().ok_or_else(|| {
            AppError::NotConfigured(
                "Stripe não configurado. Configure as variáveis de ambiente.".to_string(),
            )
        })?;

        if request.session_id.is_empty() {
            return Err(AppError::ValidationError(
                "Session ID é obrigatório".to_string(),
            ));
        }

        let session = stripe.retrieve_checkout_session(&request.session_id).await?;
        let plan = resolve_paid_plan(&session)?;

        let token = generate_session_token();
        let expires_at = session_expiry();

        if let Some(db) = &self.supabase {
            if let Err(e) = self
                .persist_purchase(db, plan, &session.id, &token, expires_at)
                .await
            {
                log::error!(
                    "Failed to persist purchase for checkout session {}: {e}",
                    session.id
                );
            }
        }

        Ok(VerifyPaymentResponse {
            success: true,
            session_token: token,
            plan_name: plan.name.clone(),
        })
    }

    /// Transaction row first, then the session row referencing it. A failed
    /// video lookup falls back to the default video id instead of aborting.
    async fn persist_purchase(
        &self,
        db: &SupabaseClient,
        plan: &Plan,
        provider_id: &str,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let video_id = match db.find_video_for_plan(&plan.id).await {
            Ok(Some(video)) => video.id,
            Ok(None) => self.default_video_id.clone(),
            Err(e) => {
                log::warn!("Video lookup failed, using default video: {e}");
                self.default_video_id.clone()
            }
        };

        let transaction = db
            .insert_transaction(&NewTransaction {
                plan_id: plan.id.clone(),
                amount: plan.price_cents,
                provider: "stripe".to_string(),
                provider_id: provider_id.to_string(),
                status: TransactionStatus::Completed,
            })
            .await?;

        db.insert_call_session(&NewCallSession {
            transaction_id: transaction.id,
            user_token: token.to_string(),
            video_id,
            expires_at,
        })
        .await?;

        Ok(())
    }
}

/// Re-validates provider-controlled metadata against the static catalog. The
/// session must report `paid` and carry a known plan id.
pub(crate) fn resolve_paid_plan(session: &CheckoutSession) -> AppResult<&'static Plan> {
    if !session.is_paid() {
        return Err(AppError::ValidationError(
            "Pagamento não confirmado".to_string(),
        ));
    }

    session
        .plan_id()
        .and_then(catalog::find_plan)
        .ok_or_else(|| AppError::ValidationError("Plano não encontrado".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(payment_status: &str, plan_id: Option<&str>) -> CheckoutSession {
        let mut body = serde_json::json!({
            "id": "cs_test_123",
            "payment_status": payment_status,
        });
        if let Some(plan_id) = plan_id {
            body["metadata"] = serde_json::json!({ "planId": plan_id });
        }
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_unpaid_session_is_rejected() {
        let err = resolve_paid_plan(&session("unpaid", Some("10min"))).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(msg) if msg == "Pagamento não confirmado"));
    }

    #[test]
    fn test_missing_metadata_is_rejected() {
        let err = resolve_paid_plan(&session("paid", None)).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(msg) if msg == "Plano não encontrado"));
    }

    #[test]
    fn test_unknown_plan_is_rejected() {
        let err = resolve_paid_plan(&session("paid", Some("60min"))).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_paid_session_resolves_plan() {
        let plan = resolve_paid_plan(&session("paid", Some("10min"))).unwrap();
        assert_eq!(plan.name, "10 Minutos");
        assert_eq!(plan.price_cents, 10000);
    }
}
