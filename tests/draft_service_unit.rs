// tests/draft_service_unit.rs
use std::collections::HashSet;
use std::sync::Arc;

use newsroom_core::application::commands::authors::CreateAuthorCommand;
use newsroom_core::application::commands::drafts::{
    CreateDraftCommand, DeleteDraftCommand, PublishDraftCommand, UpdateDraftCommand,
};
use newsroom_core::application::dto::PageRequest;
use newsroom_core::application::error::ApplicationError;
use newsroom_core::domain::article::{ArticleId, Image};
use newsroom_core::domain::user::Role;

mod support;

use support::{admin, alice, bob, fixed_now, test_app, user};

async fn published_article(app: &support::TestApp) -> ArticleId {
    let author = app
        .services
        .author_commands
        .create_author(
            &admin(),
            CreateAuthorCommand {
                name: "Jane Doe".into(),
            },
        )
        .await
        .unwrap();
    let drafts = &app.services.draft_commands;
    let draft = drafts
        .create_draft(
            &alice(),
            CreateDraftCommand {
                news_article_id: None,
            },
        )
        .await
        .unwrap();
    let command = UpdateDraftCommand::builder(draft.as_str())
        .headline("Original")
        .date_published(fixed_now())
        .author_id(author.as_str())
        .image(Image::new("https://cdn.test/cat.png", "A cat", "Photographer"))
        .text("Full text")
        .build()
        .unwrap();
    drafts.update_draft(&alice(), command).await.unwrap();
    drafts
        .publish_draft(
            &alice(),
            PublishDraftCommand {
                draft_id: draft.into_inner(),
            },
        )
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_for_one_article_grant_a_single_lock() {
    let app = test_app();
    let article = published_article(&app).await;

    let mut handles = Vec::new();
    for n in 0..16 {
        let commands = Arc::clone(&app.services.draft_commands);
        let article = article.as_str().to_string();
        handles.push(tokio::spawn(async move {
            let actor = user(&format!("U{}", 100 + n), Role::Regular);
            commands
                .create_draft(
                    &actor,
                    CreateDraftCommand {
                        news_article_id: Some(article),
                    },
                )
                .await
        }));
    }

    let mut granted = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => granted += 1,
            Err(ApplicationError::DraftConflict(conflict)) => {
                assert_eq!(conflict.draft_id, None);
                conflicts += 1;
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(granted, 1);
    assert_eq!(conflicts, 15);

    let active = app
        .services
        .draft_queries
        .list_drafts(&admin(), PageRequest::new(Some(100), None))
        .await
        .unwrap()
        .into_iter()
        .filter(|d| !d.is_published && d.news_article_id.as_deref() == Some(article.as_str()))
        .count();
    assert_eq!(active, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_scratch_drafts_all_succeed_with_distinct_ids() {
    let app = test_app();

    let mut handles = Vec::new();
    for _ in 0..12 {
        let commands = Arc::clone(&app.services.draft_commands);
        handles.push(tokio::spawn(async move {
            commands
                .create_draft(
                    &alice(),
                    CreateDraftCommand {
                        news_article_id: None,
                    },
                )
                .await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().unwrap());
    }
    assert_eq!(ids.len(), 12);
}

#[tokio::test]
async fn failed_publish_writes_nothing() {
    let app = test_app();
    let drafts = &app.services.draft_commands;
    let draft = drafts
        .create_draft(
            &alice(),
            CreateDraftCommand {
                news_article_id: None,
            },
        )
        .await
        .unwrap();

    let err = drafts
        .publish_draft(
            &alice(),
            PublishDraftCommand {
                draft_id: draft.as_str().into(),
            },
        )
        .await
        .unwrap_err();
    let problems = match err {
        ApplicationError::PublishConflict(problems) => problems,
        other => panic!("expected publish conflict, got {other:?}"),
    };
    let codes: Vec<&str> = problems.iter().map(|p| p.message).collect();
    assert_eq!(
        codes,
        vec![
            "headline_required",
            "date_published_required",
            "author_required",
            "text_required"
        ]
    );

    let news = app
        .services
        .news_queries
        .list_news(PageRequest::default())
        .await
        .unwrap();
    assert!(news.is_empty());
    let stored = app
        .services
        .draft_queries
        .get_draft(&alice(), draft.into_inner())
        .await
        .unwrap();
    assert!(!stored.is_published);
    assert!(app.events.all().is_empty());
}

#[tokio::test]
async fn published_article_carries_the_image() {
    let app = test_app();
    let article = published_article(&app).await;

    let dto = app
        .services
        .news_queries
        .get_news_article(article.into_inner())
        .await
        .unwrap();
    let image = dto.image.expect("image");
    assert_eq!(image.url, "https://cdn.test/cat.png");
    assert_eq!(dto.date_published, fixed_now());
}

#[test]
fn update_requires_every_field() {
    let missing = UpdateDraftCommand::builder("D1")
        .headline("Headline")
        .text("Text")
        .build();
    assert!(missing.is_err());
}

#[tokio::test]
async fn admin_may_clear_a_stuck_lock() {
    let app = test_app();
    let article = published_article(&app).await;
    let drafts = &app.services.draft_commands;

    let stuck = drafts
        .create_draft(
            &bob(),
            CreateDraftCommand {
                news_article_id: Some(article.as_str().into()),
            },
        )
        .await
        .unwrap();

    let err = drafts
        .create_draft(
            &admin(),
            CreateDraftCommand {
                news_article_id: Some(article.as_str().into()),
            },
        )
        .await
        .unwrap_err();
    let conflict = match err {
        ApplicationError::DraftConflict(conflict) => conflict,
        other => panic!("expected draft conflict, got {other:?}"),
    };
    assert_eq!(conflict.draft_id.as_ref(), Some(&stuck));

    drafts
        .delete_draft(
            &admin(),
            DeleteDraftCommand {
                draft_id: stuck.into_inner(),
            },
        )
        .await
        .unwrap();
    drafts
        .create_draft(
            &alice(),
            CreateDraftCommand {
                news_article_id: Some(article.into_inner()),
            },
        )
        .await
        .unwrap();
}
