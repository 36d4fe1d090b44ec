// src/presentation/http/error.rs
use crate::{
    application::{ApplicationResult, error::ApplicationError},
    domain::{
        draft::{DraftConflict, PublishProblem},
        errors::DomainError,
    },
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    body: ErrorBody,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ErrorBody {
    Message(ErrorResponse),
    DraftConflict(DraftConflictResponse),
    PublishConflict(PublishConflictResponse),
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::message(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::message(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => Self::message(StatusCode::CONFLICT, msg),
            ApplicationError::Unauthorized(msg) => Self::message(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Forbidden(msg) => Self::message(StatusCode::FORBIDDEN, msg),
            ApplicationError::DraftConflict(conflict) => Self {
                status: StatusCode::CONFLICT,
                body: ErrorBody::DraftConflict(conflict.into()),
            },
            ApplicationError::PublishConflict(problems) => Self {
                status: StatusCode::CONFLICT,
                body: ErrorBody::PublishConflict(PublishConflictResponse {
                    problems: problems.into_iter().map(Into::into).collect(),
                }),
            },
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "infrastructure failure");
                Self::internal()
            }
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        let status = match &err {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Conflict(_) => StatusCode::CONFLICT,
            DomainError::Persistence(msg) => {
                tracing::error!(error = %msg, "persistence failure");
                return Self::internal();
            }
        };
        Self::message(status, err.to_string())
    }

    /// Details stay in the log; clients get a fixed message.
    fn internal() -> Self {
        Self::message(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error".to_string(),
        )
    }

    fn message(status: StatusCode, message: String) -> Self {
        Self {
            status,
            body: ErrorBody::Message(ErrorResponse {
                error: status.canonical_reason().unwrap_or("error").to_string(),
                message,
            }),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedByView {
    pub user_id: String,
}

/// Body of a 409 from draft creation. `draftId` is present for admins only.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftConflictResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_id: Option<String>,
    pub created_by: CreatedByView,
}

impl From<DraftConflict> for DraftConflictResponse {
    fn from(conflict: DraftConflict) -> Self {
        Self {
            draft_id: conflict.draft_id.map(|id| id.into_inner()),
            created_by: CreatedByView {
                user_id: conflict.created_by.into_inner(),
            },
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublishProblemView {
    pub message: String,
    pub user_message: String,
}

impl From<PublishProblem> for PublishProblemView {
    fn from(problem: PublishProblem) -> Self {
        Self {
            message: problem.message.to_owned(),
            user_message: problem.user_message,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PublishConflictResponse {
    pub problems: Vec<PublishProblemView>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
