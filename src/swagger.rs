use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::checkout::create_checkout,
        handlers::checkout::verify_payment,
    ),
    components(
        schemas(
            Plan,
            TransactionStatus,
            CreateCheckoutRequest,
            CreateCheckoutResponse,
            VerifyPaymentRequest,
            VerifyPaymentResponse,
            ApiError,
        )
    ),
    tags(
        (name = "checkout", description = "Checkout and payment verification API"),
    ),
    info(
        title = "Sorrisinho Call API",
        version = "1.0.0",
        description = "Storefront backend: Stripe checkout, payment verification and call access"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
