// src/presentation/http/controllers/authors.rs
use crate::application::{
    commands::authors::{
        CreateAuthorCommand, DeleteAuthorCommand, SetDefaultAuthorCommand, UpdateAuthorCommand,
    },
    dto::{AuthorDto, CreatedAuthorDto, DefaultAuthorDto, PageRequest, nullable},
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
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AuthorNameRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DefaultAuthorParams {
    /// User to look up; the caller when omitted.
    #[serde(rename = "user-id")]
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetDefaultAuthorRequest {
    /// User to update; the caller when omitted or `null`.
    #[serde(default)]
    pub user_id: Option<String>,
    /// `null` clears the default author.
    #[serde(deserialize_with = "nullable::required")]
    pub author_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/authors",
    params(PageRequest),
    responses(
        (status = 200, description = "Authors ordered by name.", body = [AuthorDto])
    ),
    tag = "Authors"
)]
pub async fn list_authors(
    Extension(state): Extension<HttpState>,
    Query(page): Query<PageRequest>,
) -> HttpResult<Json<Vec<AuthorDto>>> {
    state
        .services
        .author_queries
        .list_authors(page)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/authors",
    request_body = AuthorNameRequest,
    responses(
        (status = 201, description = "Author created.", body = CreatedAuthorDto),
        (status = 400, description = "Empty name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Authors"
)]
pub async fn create_author(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<AuthorNameRequest>,
) -> HttpResult<(StatusCode, Json<CreatedAuthorDto>)> {
    let id = state
        .services
        .author_commands
        .create_author(&user, CreateAuthorCommand { name: payload.name })
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedAuthorDto {
            id: id.into_inner(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/authors/{id}",
    params(("id" = String, Path, description = "Author identifier")),
    responses(
        (status = 200, description = "Author.", body = AuthorDto),
        (status = 404, description = "Unknown author.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Authors"
)]
pub async fn get_author(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<AuthorDto>> {
    state
        .services
        .author_queries
        .get_author(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/authors/{id}",
    params(("id" = String, Path, description = "Author identifier")),
    request_body = AuthorNameRequest,
    responses(
        (status = 204, description = "Author renamed."),
        (status = 400, description = "Empty name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown author.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Authors"
)]
pub async fn update_author(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<AuthorNameRequest>,
) -> HttpResult<StatusCode> {
    let command = UpdateAuthorCommand {
        author_id: id,
        name: payload.name,
    };
    state
        .services
        .author_commands
        .update_author(&user, command)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/authors/{id}",
    params(("id" = String, Path, description = "Author identifier")),
    responses(
        (status = 204, description = "Author deleted."),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Author has published news articles.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Authors"
)]
pub async fn delete_author(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .author_commands
        .delete_author(&user, DeleteAuthorCommand { author_id: id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/authors/default",
    params(DefaultAuthorParams),
    responses(
        (status = 200, description = "Default author of the user, `author` is null when unset.", body = DefaultAuthorDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Authors"
)]
pub async fn get_default_author(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<DefaultAuthorParams>,
) -> HttpResult<Json<DefaultAuthorDto>> {
    state
        .services
        .author_queries
        .get_default_author(&user, params.user_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/authors/default",
    request_body = SetDefaultAuthorRequest,
    responses(
        (status = 204, description = "Default author updated."),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Setting another user's default.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown author.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Authors"
)]
pub async fn set_default_author(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<SetDefaultAuthorRequest>,
) -> HttpResult<StatusCode> {
    let command = SetDefaultAuthorCommand {
        user_id: payload.user_id,
        author_id: payload.author_id,
    };
    state
        .services
        .author_commands
        .set_default_author(&user, command)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
