//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use osuda_core::domain::{PostDraft, parse_timestamp};
use osuda_core::query::{PostQuery, SortOrder};
use osuda_shared::dto::{ListPostsQuery, PostPayload};
use osuda_shared::{CreatedResponse, MessageResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    params: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let params = params.into_inner();
    let query = PostQuery {
        search: params.search,
        keyword: params.keyword,
        date: params.date,
        sort: SortOrder::parse(params.sort.as_deref()),
    };

    let posts = query.apply(state.repo.list().await);
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<u64>) -> AppResult<HttpResponse> {
    let post = state.repo.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let draft = draft_from_payload(body.into_inner())?;
    let post = state.repo.create(draft).await?;

    Ok(HttpResponse::Ok().json(CreatedResponse {
        id: post.id,
        message: "Post created.".to_string(),
    }))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let draft = draft_from_payload(body.into_inner())?;
    state.repo.update(path.into_inner(), draft).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post updated.")))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    state.repo.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted.")))
}

/// Convert the wire payload into a draft. A missing `content` becomes the
/// empty string so the repository rejects it with its own message; an empty
/// `manual_date` counts as absent.
fn draft_from_payload(payload: PostPayload) -> Result<PostDraft, AppError> {
    let manual_date = match payload.manual_date.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(
            parse_timestamp(raw)
                .ok_or_else(|| AppError::BadRequest("Invalid manual_date.".to_string()))?,
        ),
    };

    Ok(PostDraft {
        content: payload.content.unwrap_or_default(),
        keywords: payload.keywords.unwrap_or_default(),
        manual_date,
    })
}
