// tests/e2e_drafts.rs
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::json;

mod support;

use support::{ADMIN_TOKEN, ALICE_ID, ALICE_TOKEN, BOB_TOKEN, test_app};

#[tokio::test]
async fn publishing_a_scratch_draft_creates_a_news_article() {
    let app = test_app();
    let author = app.create_author("Jane Doe").await;

    let (status, body) = app.create_draft(ALICE_TOKEN, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "draftId": "D1" }));

    let status = app
        .update_draft(
            ALICE_TOKEN,
            "D1",
            "The Ultimate Cat Dresses Checklist",
            &author,
            "Full text of the news article",
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.publish(ALICE_TOKEN, "D1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "newsArticleId": "A1" }));

    let (status, body) = app.get("/news/A1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": "A1",
            "headline": "The Ultimate Cat Dresses Checklist",
            "datePublished": "2024-01-01T00:00:00+00:00",
            "author": { "id": "AU1", "name": "Jane Doe" },
            "image": null,
            "text": "Full text of the news article",
            "revokeReason": null,
        })
    );

    let (_, draft) = app.get("/drafts/D1", Some(ALICE_TOKEN)).await;
    assert_eq!(draft["isPublished"], true);
    assert_eq!(draft["newsArticleId"], json!(null));
    assert_eq!(app.events.names(), vec!["article_created"]);
}

#[tokio::test]
async fn second_draft_for_an_article_is_a_conflict() {
    let app = test_app();
    let author = app.create_author("Jane Doe").await;
    let (_, article) = app
        .publish_article(ALICE_TOKEN, None, "Original", &author)
        .await;

    let (status, body) = app.create_draft(ALICE_TOKEN, Some(&article)).await;
    assert_eq!(status, StatusCode::OK);
    let draft_id = body["draftId"].as_str().unwrap().to_string();

    let (status, body) = app.create_draft(BOB_TOKEN, Some(&article)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({ "createdBy": { "userId": ALICE_ID } }));

    let (status, body) = app.create_draft(ADMIN_TOKEN, Some(&article)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body,
        json!({ "draftId": draft_id, "createdBy": { "userId": ALICE_ID } })
    );

    // The holder itself is refused as well.
    let (status, _) = app.create_draft(ALICE_TOKEN, Some(&article)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn draft_for_an_article_starts_from_its_content() {
    let app = test_app();
    let author = app.create_author("Jane Doe").await;
    let (_, article) = app
        .publish_article(ALICE_TOKEN, None, "Original", &author)
        .await;

    let (_, body) = app.create_draft(BOB_TOKEN, Some(&article)).await;
    let draft_id = body["draftId"].as_str().unwrap();
    let (status, draft) = app
        .get(&format!("/drafts/{draft_id}"), Some(BOB_TOKEN))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(draft["headline"], "Original");
    assert_eq!(draft["text"], "Full text");
    assert_eq!(draft["author"], json!({ "id": author, "name": "Jane Doe" }));
    assert_eq!(draft["isPublished"], false);
}

#[tokio::test]
async fn publishing_over_an_existing_article_keeps_its_id() {
    let app = test_app();
    let author = app.create_author("Jane Doe").await;
    let (_, article) = app
        .publish_article(ALICE_TOKEN, None, "Original", &author)
        .await;

    let (_, republished) = app
        .publish_article(BOB_TOKEN, Some(&article), "Corrected", &author)
        .await;
    assert_eq!(republished, article);

    let (_, body) = app.get(&format!("/news/{article}"), None).await;
    assert_eq!(body["headline"], "Corrected");
    let (_, list) = app.get("/news", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(app.events.names(), vec!["article_created", "article_updated"]);

    // Publishing released the lock.
    let (status, _) = app.create_draft(ALICE_TOKEN, Some(&article)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn publish_reports_every_problem() {
    let app = test_app();
    let author = app.create_author("Jane Doe").await;
    let (_, body) = app.create_draft(ALICE_TOKEN, None).await;
    let draft_id = body["draftId"].as_str().unwrap();

    let status = app.update_draft(ALICE_TOKEN, draft_id, "  ", &author, "").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.publish(ALICE_TOKEN, draft_id).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let problems = body["problems"].as_array().unwrap();
    let codes: Vec<&str> = problems
        .iter()
        .map(|p| p["message"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["headline_required", "text_required"]);
    assert!(problems.iter().all(|p| p["userMessage"].is_string()));

    let (_, list) = app.get("/news", None).await;
    assert_eq!(list, json!([]));
    assert!(app.events.names().is_empty());
}

#[tokio::test]
async fn scratch_draft_without_default_author_cannot_be_published() {
    let app = test_app();
    let (_, body) = app.create_draft(ALICE_TOKEN, None).await;
    let draft_id = body["draftId"].as_str().unwrap();

    let (_, draft) = app
        .get(&format!("/drafts/{draft_id}"), Some(ALICE_TOKEN))
        .await;
    assert_eq!(draft["author"], json!(null));

    let (status, body) = app.publish(ALICE_TOKEN, draft_id).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let codes: Vec<&str> = body["problems"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["message"].as_str().unwrap())
        .collect();
    assert!(codes.contains(&"author_required"));
}

#[tokio::test]
async fn published_draft_can_not_be_edited() {
    let app = test_app();
    let author = app.create_author("Jane Doe").await;
    let (draft_id, _) = app
        .publish_article(ALICE_TOKEN, None, "Original", &author)
        .await;

    let status = app
        .update_draft(ALICE_TOKEN, &draft_id, "Again", &author, "text")
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = app.publish(ALICE_TOKEN, &draft_id).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["problems"][0]["message"], "draft_already_published");
}

#[tokio::test]
async fn deleting_a_draft_releases_the_article() {
    let app = test_app();
    let author = app.create_author("Jane Doe").await;
    let (_, article) = app
        .publish_article(ALICE_TOKEN, None, "Original", &author)
        .await;

    let (_, body) = app.create_draft(ALICE_TOKEN, Some(&article)).await;
    let draft_id = body["draftId"].as_str().unwrap().to_string();

    let (status, _) = app
        .send(
            Method::DELETE,
            &format!("/drafts/{draft_id}"),
            Some(BOB_TOKEN),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .send(
            Method::DELETE,
            &format!("/drafts/{draft_id}"),
            Some(ALICE_TOKEN),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT, "{body}");

    let (status, _) = app
        .get(&format!("/drafts/{draft_id}"), Some(ALICE_TOKEN))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.create_draft(BOB_TOKEN, Some(&article)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn only_privileged_users_delete_published_drafts() {
    let app = test_app();
    let author = app.create_author("Jane Doe").await;
    let (draft_id, _) = app
        .publish_article(ALICE_TOKEN, None, "Original", &author)
        .await;
    let uri = format!("/drafts/{draft_id}");

    let (status, _) = app.send(Method::DELETE, &uri, Some(ALICE_TOKEN), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.send(Method::DELETE, &uri, Some(ADMIN_TOKEN), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn drafts_are_listed_per_owner_unless_admin() {
    let app = test_app();
    app.create_draft(ALICE_TOKEN, None).await;
    app.create_draft(ALICE_TOKEN, None).await;
    app.create_draft(BOB_TOKEN, None).await;

    let (status, mine) = app.get("/drafts", Some(ALICE_TOKEN)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mine.as_array().unwrap().len(), 2);
    assert!(
        mine.as_array()
            .unwrap()
            .iter()
            .all(|d| d["createdByUserId"] == ALICE_ID)
    );

    let (_, all) = app.get("/drafts", Some(ADMIN_TOKEN)).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (_, page) = app.get("/drafts?limit=1&offset=1", Some(ADMIN_TOKEN)).await;
    assert_eq!(page.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn other_users_drafts_are_forbidden() {
    let app = test_app();
    let (_, body) = app.create_draft(ALICE_TOKEN, None).await;
    let draft_id = body["draftId"].as_str().unwrap();
    let uri = format!("/drafts/{draft_id}");

    let (status, body) = app.get(&uri, Some(BOB_TOKEN)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Forbidden");

    let (status, _) = app.get(&uri, Some(ADMIN_TOKEN)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.publish(BOB_TOKEN, draft_id).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn missing_or_unknown_tokens_are_unauthorized() {
    let app = test_app();

    let (status, body) = app.get("/drafts", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");

    let (status, _) = app.create_draft("nope", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_targets_are_not_found() {
    let app = test_app();

    let (status, _) = app.get("/drafts/D404", Some(ALICE_TOKEN)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.publish(ALICE_TOKEN, "D404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.create_draft(ALICE_TOKEN, Some("A404")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, drafts) = app.get("/drafts", Some(ADMIN_TOKEN)).await;
    assert_eq!(drafts, json!([]));
}

#[tokio::test]
async fn malformed_bodies_are_bad_requests() {
    let app = test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/drafts")
        .header(header::AUTHORIZATION, format!("Bearer {ALICE_TOKEN}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{"))
        .unwrap();
    let (status, body) = app.send_request(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");

    // `newsArticleId` must be present even when null.
    let (status, _) = app
        .send(Method::POST, "/drafts", Some(ALICE_TOKEN), Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.create_draft(ALICE_TOKEN, None).await;
    let draft_id = body["draftId"].as_str().unwrap();
    let (status, _) = app
        .send(
            Method::PUT,
            &format!("/drafts/{draft_id}"),
            Some(ALICE_TOKEN),
            Some(json!({ "headline": "Only a headline" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
