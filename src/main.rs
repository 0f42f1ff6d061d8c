#![recursion_limit = "256"]

mod api_doc;
mod app;
mod config;
mod error;
mod fixtures;
mod handlers;
mod models;
mod routes;

use anyhow::Result;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("redfish-mock starting");

    let config = Config::from_env()?;
    config.log_startup();

    let app = app::app()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.service_host, config.service_port))
            .await?;
    axum::serve(listener, app).await?;

    Ok(())
}
