//! Post handlers - the five board operations plus form method override.

use actix_web::{HttpResponse, http::header, web};

use board_core::DomainError;
use board_core::domain::{Post, PostPage, TIMESTAMP_FORMAT};
use board_core::services::{DEFAULT_LIMIT, DEFAULT_PAGE, PostInput};
use board_shared::ApiResponse;
use board_shared::dto::{
    ListQuery, PaginationResponse, PostForm, PostListResponse, PostResponse,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author: post.author,
        created_at: post.created_at.format(TIMESTAMP_FORMAT).to_string(),
        updated_at: post.updated_at.format(TIMESTAMP_FORMAT).to_string(),
    }
}

fn list_response(page: PostPage) -> PostListResponse {
    PostListResponse {
        posts: page.posts.into_iter().map(post_response).collect(),
        pagination: PaginationResponse {
            page: page.pagination.page,
            limit: page.pagination.limit,
            total: page.pagination.total,
            pages: page.pagination.pages,
        },
    }
}

fn post_input(form: &PostForm) -> PostInput {
    PostInput {
        title: form.title.clone(),
        content: form.content.clone(),
        author: form.author.clone(),
    }
}

fn submitted(form: &PostForm) -> serde_json::Value {
    serde_json::to_value(form).unwrap_or(serde_json::Value::Null)
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn post_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Post {} not found", id))
}

/// GET / and GET /posts
pub async fn index(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let page = query.page.unwrap_or(DEFAULT_PAGE);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let result = state.posts.get_all_posts(page, limit).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(list_response(result))))
}

/// GET /posts/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .get_post(&id)
        .await?
        .ok_or_else(|| post_not_found(&id))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(post))))
}

/// POST /posts
pub async fn store(
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    match state.posts.create_post(&post_input(&form)).await {
        Ok(post) => {
            tracing::info!(post_id = %post.id, "Post created");
            Ok(redirect(&format!("/posts/{}", post.id)))
        }
        Err(e) => {
            if let DomainError::Validation(message) = &e {
                tracing::warn!(error = %message, "Validation error creating post");
            }
            Err(AppError::from_submission(e, submitted(&form)))
        }
    }
}

/// PUT|PATCH /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    apply_update(&state, &path.into_inner(), form.into_inner()).await
}

/// DELETE /posts/{id}
pub async fn destroy(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    apply_delete(&state, &path.into_inner()).await
}

/// POST /posts/{id} with a `_METHOD` field of PUT, PATCH or DELETE.
pub async fn method_override(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let form = form.into_inner();
    let method = form
        .method
        .as_deref()
        .map(str::to_ascii_uppercase)
        .unwrap_or_default();

    match method.as_str() {
        "PUT" | "PATCH" => apply_update(&state, &id, form).await,
        "DELETE" => apply_delete(&state, &id).await,
        "" => Err(AppError::BadRequest("Missing _METHOD field".to_string())),
        other => Err(AppError::BadRequest(format!(
            "Unsupported method override: {}",
            other
        ))),
    }
}

async fn apply_update(state: &AppState, id: &str, form: PostForm) -> AppResult<HttpResponse> {
    match state.posts.update_post(id, &post_input(&form)).await {
        Ok(Some(post)) => {
            tracing::info!(post_id = %post.id, "Post updated");
            Ok(redirect(&format!("/posts/{}", post.id)))
        }
        Ok(None) => Err(post_not_found(id)),
        Err(e @ DomainError::Validation(_)) => {
            tracing::warn!(post_id = %id, error = %e, "Validation error updating post");

            // The edit target may have vanished in the meantime
            if state.posts.get_post(id).await?.is_none() {
                return Err(post_not_found(id));
            }

            Err(AppError::from_submission(e, submitted(&form)))
        }
        Err(e) => Err(e.into()),
    }
}

async fn apply_delete(state: &AppState, id: &str) -> AppResult<HttpResponse> {
    if !state.posts.delete_post(id).await? {
        return Err(post_not_found(id));
    }

    tracing::info!(post_id = %id, "Post deleted");
    Ok(redirect("/"))
}
