// tests/support/helpers.rs
use super::mocks::{CapturingEvents, FixedClock, SequentialIds};
use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
};
use newsroom_core::application::{dto::AuthenticatedUser, services::ApplicationServices};
use newsroom_core::domain::user::{Role, UserId};
use newsroom_core::infrastructure::{
    repositories::InMemoryTransactionManager, security::StaticTokenIdentityProvider,
};
use newsroom_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const ALICE_TOKEN: &str = "alice-token";
pub const BOB_TOKEN: &str = "bob-token";

pub const ADMIN_ID: &str = "U0";
pub const ALICE_ID: &str = "U1";
pub const BOB_ID: &str = "U2";

pub struct TestApp {
    pub router: Router,
    pub services: Arc<ApplicationServices>,
    pub events: CapturingEvents,
}

pub fn user(id: &str, role: Role) -> AuthenticatedUser {
    AuthenticatedUser::with_role(UserId::new(id).unwrap(), role)
}

pub fn admin() -> AuthenticatedUser {
    user(ADMIN_ID, Role::Admin)
}

pub fn alice() -> AuthenticatedUser {
    user(ALICE_ID, Role::Regular)
}

pub fn bob() -> AuthenticatedUser {
    user(BOB_ID, Role::Regular)
}

/// Services and router over a fresh in-memory store.
pub fn test_app() -> TestApp {
    let identity = StaticTokenIdentityProvider::default()
        .with_token(ADMIN_TOKEN, UserId::new(ADMIN_ID).unwrap(), Role::Admin)
        .with_token(ALICE_TOKEN, UserId::new(ALICE_ID).unwrap(), Role::Regular)
        .with_token(BOB_TOKEN, UserId::new(BOB_ID).unwrap(), Role::Regular);
    let events = CapturingEvents::default();

    let services = Arc::new(ApplicationServices::new(
        Arc::new(InMemoryTransactionManager::new()),
        Arc::new(identity),
        Arc::new(FixedClock),
        Arc::new(SequentialIds::default()),
        Arc::new(events.clone()),
    ));

    let router = build_router(
        HttpState {
            services: Arc::clone(&services),
        },
        &[],
    );

    TestApp {
        router,
        services,
        events,
    }
}

impl TestApp {
    /// Sends one request and returns the status and the JSON body
    /// (`Value::Null` for empty bodies).
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn create_author(&self, name: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/authors",
                Some(ADMIN_TOKEN),
                Some(json!({ "name": name })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn create_draft(&self, token: &str, article_id: Option<&str>) -> (StatusCode, Value) {
        self.send(
            Method::POST,
            "/drafts",
            Some(token),
            Some(json!({ "newsArticleId": article_id })),
        )
        .await
    }

    pub async fn update_draft(
        &self,
        token: &str,
        draft_id: &str,
        headline: &str,
        author_id: &str,
        text: &str,
    ) -> StatusCode {
        let (status, _) = self
            .send(
                Method::PUT,
                &format!("/drafts/{draft_id}"),
                Some(token),
                Some(json!({
                    "headline": headline,
                    "datePublished": "2024-01-01T00:00:00Z",
                    "authorId": author_id,
                    "image": null,
                    "text": text,
                })),
            )
            .await;
        status
    }

    pub async fn publish(&self, token: &str, draft_id: &str) -> (StatusCode, Value) {
        self.send(
            Method::POST,
            &format!("/drafts/{draft_id}/publish"),
            Some(token),
            None,
        )
        .await
    }

    /// Writes and publishes a draft, returning `(draft id, article id)`.
    pub async fn publish_article(
        &self,
        token: &str,
        article_id: Option<&str>,
        headline: &str,
        author_id: &str,
    ) -> (String, String) {
        let (status, body) = self.create_draft(token, article_id).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        let draft_id = body["draftId"].as_str().unwrap().to_string();

        let status = self
            .update_draft(token, &draft_id, headline, author_id, "Full text")
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = self.publish(token, &draft_id).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        let article_id = body["newsArticleId"].as_str().unwrap().to_string();
        (draft_id, article_id)
    }
}
