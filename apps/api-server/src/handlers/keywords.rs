//! Keyword listing handler.

use actix_web::{HttpResponse, web};

use osuda_core::domain::unique_keywords;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/keywords
///
/// Recomputed from the raw keyword fields on every call; nothing is cached.
pub async fn list_keywords(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.repo.list().await;
    Ok(HttpResponse::Ok().json(unique_keywords(&posts)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test, web};
    use osuda_infra::InMemoryStorage;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    #[actix_web::test]
    async fn keywords_are_split_trimmed_and_deduped() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(
                    AppState::new(Arc::new(InMemoryStorage::new())).await,
                ))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(serde_json::json!({"content": "hello", "keywords": "a, b"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(serde_json::json!({"content": "again", "keywords": "b,c"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/api/keywords").to_request();
        let keywords: Vec<String> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(keywords, vec!["a", "b", "c"]);
    }
}
