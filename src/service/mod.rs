//! HTTP front end for the risk evaluator
//!
//! Accepts login events as JSON, returns assessments, and exposes the factor
//! catalog. The evaluator is shared read-only between workers.

mod error;
mod routes;

pub use error::ApiError;
pub use routes::{configure, MODEL_VERSION, SERVICE_NAME};

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};

use crate::config::ServerConfig;
use crate::detection::RiskEvaluator;

/// Bind and run the HTTP server until it is shut down
pub async fn run(config: &ServerConfig, evaluator: RiskEvaluator) -> std::io::Result<()> {
    let evaluator = web::Data::new(evaluator);

    let mut server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(evaluator.clone())
            .configure(configure)
    });
    if config.workers > 0 {
        server = server.workers(config.workers);
    }

    log::info!("Listening on {}:{}", config.host, config.port);
    server
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
