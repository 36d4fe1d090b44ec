// src/presentation/http/controllers/drafts.rs
use crate::application::{
    commands::drafts::{
        CreateDraftCommand, DeleteDraftCommand, PublishDraftCommand, UpdateDraftCommand,
    },
    dto::{
        CreatedDraftDto, DraftDto, DraftListItemDto, ImageDto, PageRequest, PublishedDraftDto,
        nullable, serde_time,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDraftRequest {
    /// Article to edit, `null` to write a new one.
    #[serde(deserialize_with = "nullable::required")]
    pub news_article_id: Option<String>,
}

/// Every field must be present; nullable ones may be `null`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDraftRequest {
    pub headline: String,
    #[serde(deserialize_with = "serde_time::option::deserialize")]
    pub date_published: Option<DateTime<Utc>>,
    pub author_id: String,
    #[serde(deserialize_with = "nullable::required")]
    pub image: Option<ImageDto>,
    pub text: String,
}

#[utoipa::path(
    get,
    path = "/drafts",
    params(PageRequest),
    responses(
        (status = 200, description = "Drafts visible to the caller, newest first.", body = [DraftListItemDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Drafts"
)]
pub async fn list_drafts(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(page): Query<PageRequest>,
) -> HttpResult<Json<Vec<DraftListItemDto>>> {
    state
        .services
        .draft_queries
        .list_drafts(&user, page)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/drafts",
    request_body = CreateDraftRequest,
    responses(
        (status = 200, description = "Draft created.", body = CreatedDraftDto),
        (status = 400, description = "Malformed request.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown news article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Another draft already exists for the article.", body = crate::presentation::http::error::DraftConflictResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Drafts"
)]
pub async fn create_draft(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<CreateDraftRequest>,
) -> HttpResult<Json<CreatedDraftDto>> {
    let command = CreateDraftCommand {
        news_article_id: payload.news_article_id,
    };

    state
        .services
        .draft_commands
        .create_draft(&user, command)
        .await
        .into_http()
        .map(|id| Json(id.into()))
}

#[utoipa::path(
    get,
    path = "/drafts/{id}",
    params(("id" = String, Path, description = "Draft identifier")),
    responses(
        (status = 200, description = "Draft.", body = DraftDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Not the owner.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown draft.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Drafts"
)]
pub async fn get_draft(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<DraftDto>> {
    state
        .services
        .draft_queries
        .get_draft(&user, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/drafts/{id}",
    params(("id" = String, Path, description = "Draft identifier")),
    request_body = UpdateDraftRequest,
    responses(
        (status = 204, description = "Draft replaced."),
        (status = 400, description = "Malformed request.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Not the owner.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown draft.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Draft already published.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Drafts"
)]
pub async fn update_draft(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateDraftRequest>,
) -> HttpResult<StatusCode> {
    let command = UpdateDraftCommand {
        draft_id: id,
        headline: payload.headline,
        date_published: payload.date_published,
        author_id: payload.author_id,
        image: payload.image.map(Into::into),
        text: payload.text,
    };

    state
        .services
        .draft_commands
        .update_draft(&user, command)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/drafts/{id}",
    params(("id" = String, Path, description = "Draft identifier")),
    responses(
        (status = 204, description = "Draft deleted, releasing its article."),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Not the owner.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown draft.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Drafts"
)]
pub async fn delete_draft(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .draft_commands
        .delete_draft(&user, DeleteDraftCommand { draft_id: id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/drafts/{id}/publish",
    params(("id" = String, Path, description = "Draft identifier")),
    responses(
        (status = 200, description = "Draft published.", body = PublishedDraftDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown draft or article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Draft is not publishable.", body = crate::presentation::http::error::PublishConflictResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Drafts"
)]
pub async fn publish_draft(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<PublishedDraftDto>> {
    state
        .services
        .draft_commands
        .publish_draft(&user, PublishDraftCommand { draft_id: id })
        .await
        .into_http()
        .map(|id| Json(id.into()))
}
