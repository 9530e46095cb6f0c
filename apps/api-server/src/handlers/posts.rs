//! Post handlers - the HTTP face of the record store.

use actix_web::{HttpResponse, http::header, web};

use postbook_core::{Post, PostId};
use postbook_shared::ApiResponse;
use postbook_shared::dto::{CreatePostRequest, CreatePostResponse, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id().get(),
        title: post.title().to_owned(),
        content: post.content().to_owned(),
        author: post.author().map(str::to_owned),
    }
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Missing fields become empty strings; the store decides whether that is valid.
    let id = state
        .posts
        .create(
            req.title.unwrap_or_default(),
            req.content.unwrap_or_default(),
            req.author,
        )
        .await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/posts/{id}")))
        .json(ApiResponse::ok(CreatePostResponse { id: id.get() })))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw = path.into_inner();
    let id: i64 = raw
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid post id: {raw}")))?;

    let post = state.posts.get(PostId::new(id)).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(post))))
}
