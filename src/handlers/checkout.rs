use actix_web::{HttpResponse, ResponseError, Result, web};

use crate::models::{
    CreateCheckoutRequest, CreateCheckoutResponse, VerifyPaymentRequest, VerifyPaymentResponse,
};
use crate::services::{CheckoutService, VerificationService};

#[utoipa::path(
    post,
    path = "/checkout",
    tag = "checkout",
    request_body = CreateCheckoutRequest,
    responses(
        (status = 200, description = "Hosted checkout URL", body = CreateCheckoutResponse),
        (status = 400, description = "Unknown plan"),
        (status = 503, description = "Stripe not configured"),
        (status = 500, description = "Provider error")
    )
)]
pub async fn create_checkout(
    checkout_service: web::Data<CheckoutService>,
    request: web::Json<CreateCheckoutRequest>,
) -> Result<HttpResponse> {
    match checkout_service.create_checkout(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/verify-payment",
    tag = "checkout",
    request_body = VerifyPaymentRequest,
    responses(
        (status = 200, description = "Payment confirmed, token minted", body = VerifyPaymentResponse),
        (status = 400, description = "Payment not confirmed or unknown plan"),
        (status = 503, description = "Stripe not configured"),
        (status = 500, description = "Provider error")
    )
)]
pub async fn verify_payment(
    verification_service: web::Data<VerificationService>,
    request: web::Json<VerifyPaymentRequest>,
) -> Result<HttpResponse> {
    match verification_service
        .verify_payment(request.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn checkout_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/checkout", web::post().to(create_checkout))
        .route("/verify-payment", web::post().to(verify_payment));
}
