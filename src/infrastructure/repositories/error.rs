use crate::domain::errors::DomainError;

const CNT_DRAFT_ACTIVE_PER_ARTICLE: &str = "drafts_one_active_per_article_idx";
const CNT_DRAFT_ARTICLE: &str = "drafts_news_article_id_fkey";
const CNT_DEFAULT_AUTHOR: &str = "default_authors_author_id_fkey";
const CNT_AUTHOR_NAME: &str = "authors_name_not_blank_chk";
const CNT_ARTICLE_IMAGE: &str = "news_articles_image_complete_chk";
const CNT_DRAFT_IMAGE: &str = "drafts_image_shape_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_DRAFT_ACTIVE_PER_ARTICLE => DomainError::Conflict(
                        "another draft already exists for this news article".into(),
                    ),
                    CNT_DRAFT_ARTICLE => DomainError::NotFound("news article not found".into()),
                    CNT_DEFAULT_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_AUTHOR_NAME => {
                        DomainError::Validation("author name cannot be empty".into())
                    }
                    CNT_ARTICLE_IMAGE | CNT_DRAFT_IMAGE => {
                        DomainError::Validation("image url, description and author go together".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
