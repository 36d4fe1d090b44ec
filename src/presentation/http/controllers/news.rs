// src/presentation/http/controllers/news.rs
use crate::application::{
    commands::news::RevokeArticleCommand,
    dto::{NewsArticleDto, NewsListItemDto, PageRequest},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RevokeRequest {
    /// Why the article is hidden.
    pub reason: String,
}

#[utoipa::path(
    get,
    path = "/news",
    params(PageRequest),
    responses(
        (status = 200, description = "Non-revoked news articles, newest first.", body = [NewsListItemDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn list_news(
    Extension(state): Extension<HttpState>,
    Query(page): Query<PageRequest>,
) -> HttpResult<Json<Vec<NewsListItemDto>>> {
    state
        .services
        .news_queries
        .list_news(page)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/news/{id}",
    params(("id" = String, Path, description = "News article identifier")),
    responses(
        (status = 200, description = "News article, revoked ones included.", body = NewsArticleDto),
        (status = 404, description = "Unknown news article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn get_news_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<NewsArticleDto>> {
    state
        .services
        .news_queries
        .get_news_article(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/news/{id}/revoke",
    params(("id" = String, Path, description = "News article identifier")),
    request_body = RevokeRequest,
    responses(
        (status = 204, description = "News article revoked."),
        (status = 400, description = "Empty reason.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Missing news:revoke.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown news article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "News"
)]
pub async fn revoke_news_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<RevokeRequest>,
) -> HttpResult<StatusCode> {
    let command = RevokeArticleCommand {
        news_article_id: id,
        reason: payload.reason,
    };

    state
        .services
        .news_commands
        .revoke_article(&user, command)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
