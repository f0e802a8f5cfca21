use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local;
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use sorrisinho_backend::{
    config::Config,
    external::{StripeService, SupabaseClient},
    handlers,
    middlewares::create_cors,
    services::{CheckoutService, VerificationService},
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config = Config::from_toml().expect("Failed to load configuration file");

    // Both integrations are optional: missing Stripe keys make checkout and
    // verification answer 503, missing Supabase keys only disable persistence.
    let stripe_service = if config.has_stripe() {
        Some(StripeService::new(config.stripe.clone()))
    } else {
        log::warn!("Stripe keys missing: checkout and verification will respond 503");
        None
    };

    let supabase_client = if config.has_supabase() {
        Some(SupabaseClient::new(config.supabase.clone()))
    } else {
        log::warn!("Supabase not configured: purchases will not be persisted");
        None
    };

    let checkout_service = CheckoutService::new(stripe_service.clone(), config.app.base_url.clone());
    let verification_service = VerificationService::new(
        stripe_service,
        supabase_client,
        config.video.default_video_id.clone(),
    );

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    let bind_addr = (config.server.host.clone(), config.server.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(checkout_service.clone()))
            .app_data(web::Data::new(verification_service.clone()))
            .configure(swagger_config)
            .configure(handlers::pages_config)
            .service(web::scope("/api/v1").configure(handlers::checkout_config))
    })
    .bind(bind_addr)?
    .run()
    .await
}
