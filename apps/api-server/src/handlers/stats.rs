//! Calendar statistics handler.

use actix_web::{HttpResponse, web};

use osuda_core::stats;
use osuda_shared::dto::StatsQuery;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/stats
pub async fn daily_stats(
    state: web::Data<AppState>,
    params: web::Query<StatsQuery>,
) -> AppResult<HttpResponse> {
    let params = params.into_inner();
    let posts = state.repo.list().await;
    let rows = stats::aggregate(
        &posts,
        params.start_date.as_deref(),
        params.end_date.as_deref(),
    );

    Ok(HttpResponse::Ok().json(rows))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test, web};
    use osuda_core::stats::DayStat;
    use osuda_infra::InMemoryStorage;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    #[actix_web::test]
    async fn redated_post_lands_in_its_own_bucket() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(
                    AppState::new(Arc::new(InMemoryStorage::new())).await,
                ))
                .configure(configure_routes),
        )
        .await;

        // Two posts created now, one redated to a fixed day.
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(serde_json::json!({"content": "today"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(serde_json::json!({"content": "past", "manual_date": "2020-05-05"}))
            .to_request();
        test::call_service(&app, req).await;

        let today = chrono::Utc::now().date_naive().to_string();
        let req = test::TestRequest::get()
            .uri(&format!(
                "/api/stats?start_date=2020-05-05&end_date={}",
                today
            ))
            .to_request();
        let rows: Vec<DayStat> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "2020-05-05");
        assert_eq!(rows[0].count, 1);
        assert_eq!(rows[1].date, today);
        assert_eq!(rows[1].count, 1);
    }

    #[actix_web::test]
    async fn no_range_aggregates_the_whole_journal() {
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
            .set_json(serde_json::json!({"content": "entry"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/api/stats").to_request();
        let rows: Vec<DayStat> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].count, 1);
    }
}
