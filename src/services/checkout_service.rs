use crate::catalog;
use crate::error::{AppError, AppResult};
use crate::external::StripeService;
use crate::models::{CreateCheckoutRequest, CreateCheckoutResponse};

#[derive(Clone)]
pub struct CheckoutService {
    stripe: Option<StripeService>,
    base_url: String,
}

impl CheckoutService {
    pub fn new(stripe: Option<StripeService>, base_url: String) -> Self {
        Self { stripe, base_url }
    }

    /// Resolves the plan and creates a hosted checkout session for it. The
    /// plan is checked before any provider call, so an unknown plan never
    /// creates remote state.
    pub async fn create_checkout(
        &self,
        request: CreateCheckoutRequest,
    ) -> AppResult<CreateCheckoutResponse> {
        let stripe = self.stripe.as_ref().ok_or_else(|| {
            AppError::NotConfigured(
                "Stripe não configurado. Configure as variáveis de ambiente.".to_string(),
            )
        })?;

        let plan = catalog::find_plan(&request.plan_id)
            .ok_or_else(|| AppError::ValidationError("Plano não encontrado".to_string()))?;

        let session = stripe.create_checkout_session(plan, &self.base_url).await?;

        match session.url {
            Some(url) => Ok(CreateCheckoutResponse { url }),
            None => Err(AppError::ExternalApiError(format!(
                "Checkout session {} has no redirect URL",
                session.id
            ))),
        }
    }
}
