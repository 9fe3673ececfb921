//! HTTP handlers and route configuration.

mod health;
mod keywords;
mod posts;
mod stats;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed JSON bodies become a 400 `{error}`, a non-numeric id a 404,
    // instead of actix's default plain-text responses.
    cfg.app_data(web::JsonConfig::default().error_handler(|_err, _req| {
        AppError::BadRequest("Invalid request body.".to_string()).into()
    }))
    .app_data(
        web::PathConfig::default()
            .error_handler(|_err, _req| AppError::NotFound("Post not found.".to_string()).into()),
    )
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/posts", web::get().to(posts::list_posts))
            .route("/posts", web::post().to(posts::create_post))
            .route("/posts/{id}", web::get().to(posts::get_post))
            .route("/posts/{id}", web::put().to(posts::update_post))
            .route("/posts/{id}", web::delete().to(posts::delete_post))
            .route("/keywords", web::get().to(keywords::list_keywords))
            .route("/stats", web::get().to(stats::daily_stats)),
    );
}
