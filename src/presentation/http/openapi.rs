// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::news::list_news,
        crate::presentation::http::controllers::news::get_news_article,
        crate::presentation::http::controllers::news::revoke_news_article,
        crate::presentation::http::controllers::drafts::list_drafts,
        crate::presentation::http::controllers::drafts::create_draft,
        crate::presentation::http::controllers::drafts::get_draft,
        crate::presentation::http::controllers::drafts::update_draft,
        crate::presentation::http::controllers::drafts::delete_draft,
        crate::presentation::http::controllers::drafts::publish_draft,
        crate::presentation::http::controllers::authors::list_authors,
        crate::presentation::http::controllers::authors::create_author,
        crate::presentation::http::controllers::authors::get_author,
        crate::presentation::http::controllers::authors::update_author,
        crate::presentation::http::controllers::authors::delete_author,
        crate::presentation::http::controllers::authors::get_default_author,
        crate::presentation::http::controllers::authors::set_default_author,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::error::CreatedByView,
            crate::presentation::http::error::DraftConflictResponse,
            crate::presentation::http::error::PublishProblemView,
            crate::presentation::http::error::PublishConflictResponse,
            crate::presentation::http::controllers::news::RevokeRequest,
            crate::presentation::http::controllers::drafts::CreateDraftRequest,
            crate::presentation::http::controllers::drafts::UpdateDraftRequest,
            crate::presentation::http::controllers::authors::AuthorNameRequest,
            crate::presentation::http::controllers::authors::SetDefaultAuthorRequest,
            crate::application::dto::NewsArticleDto,
            crate::application::dto::NewsListItemDto,
            crate::application::dto::DraftDto,
            crate::application::dto::DraftListItemDto,
            crate::application::dto::CreatedDraftDto,
            crate::application::dto::PublishedDraftDto,
            crate::application::dto::ImageDto,
            crate::application::dto::AuthorDto,
            crate::application::dto::AuthorRefDto,
            crate::application::dto::CreatedAuthorDto,
            crate::application::dto::DefaultAuthorDto
        )
    ),
    tags(
        (name = "News", description = "Published news articles and revocation"),
        (name = "Drafts", description = "Draft lifecycle endpoints"),
        (name = "Authors", description = "Author and default author endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Newsroom API",
        description = "Draft locking, publishing and revocation of news articles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}
