use std::sync::LazyLock;

use actix_web::{
    middleware::{Compress, Logger, NormalizePath, TrailingSlash},
    web::{self, Data, JsonConfig, PathConfig},
    App, HttpServer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod cache;
mod docs;
mod errors;
mod macros;
mod models;
mod paths;
mod req_caching;
mod sprites;

pub static IS_DEBUG_ON: LazyLock<bool> = LazyLock::new(|| {
    std::env::var("debug")
        .map(|val| val == "1")
        .unwrap_or_default()
});

async fn default_handler_debug(req: actix_web::HttpRequest) -> impl actix_web::Responder {
    actix_web::HttpResponse::NotFound().body(format!("{:#?}", req))
}
async fn default_handler() -> impl actix_web::Responder {
    actix_web::HttpResponse::NotFound().finish()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!(
        "Debug is {}",
        if *IS_DEBUG_ON { "enabled" } else { "disabled" }
    );

    let bind_address = std::env::var("address").unwrap_or("0.0.0.0:80".into());

    HttpServer::new(move || {
        let req_client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36")
            .build()
            .unwrap();

        App::new()
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(Logger::default())
            .wrap(Compress::default())
            .app_data(JsonConfig::default().error_handler(errors::json_config_error_handler))
            .app_data(PathConfig::default().error_handler(errors::json_config_error_handler))
            .app_data(Data::new(req_client))
            .configure(paths::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
            )
            .default_service(if *IS_DEBUG_ON {
                web::to(default_handler_debug)
            } else {
                web::to(default_handler)
            })
    })
    .bind(bind_address)
    .expect("Failed to bind server to address")
    .run()
    .await
}
