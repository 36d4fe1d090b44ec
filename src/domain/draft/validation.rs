// src/domain/draft/validation.rs
use crate::domain::article::MAX_HEADLINE_LENGTH;
use crate::domain::author::Author;
use crate::domain::draft::entity::Draft;

/// One reason a draft cannot be published. `message` is a stable machine
/// code, `user_message` is meant for editors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishProblem {
    pub message: &'static str,
    pub user_message: String,
}

impl PublishProblem {
    fn new(message: &'static str, user_message: impl Into<String>) -> Self {
        Self {
            message,
            user_message: user_message.into(),
        }
    }
}

/// Collects every publication problem in one pass.
#[derive(Debug, Clone, Copy)]
pub struct PublishValidator {
    max_headline_length: usize,
}

impl Default for PublishValidator {
    fn default() -> Self {
        Self {
            max_headline_length: MAX_HEADLINE_LENGTH,
        }
    }
}

impl PublishValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `author` is the resolved record for `draft.author_id`, `None` when the
    /// reference is empty or dangling.
    pub fn validate(&self, draft: &Draft, author: Option<&Author>) -> Result<(), Vec<PublishProblem>> {
        let mut problems = Vec::new();

        if draft.is_published {
            problems.push(PublishProblem::new(
                "draft_already_published",
                "This draft has already been published, create a new one",
            ));
        }

        self.check_headline(draft, &mut problems);

        if draft.date_published.is_none() {
            problems.push(PublishProblem::new(
                "date_published_required",
                "Publication date is not set",
            ));
        }

        match (&draft.author_id, author) {
            (None, _) => problems.push(PublishProblem::new(
                "author_required",
                "Author is not selected",
            )),
            (Some(_), None) => problems.push(PublishProblem::new(
                "author_not_found",
                "Selected author does not exist",
            )),
            (Some(_), Some(_)) => {}
        }

        if draft.text.trim().is_empty() {
            problems.push(PublishProblem::new("text_required", "Text is empty"));
        }

        if let Some(image) = &draft.image {
            if image.url.trim().is_empty() {
                problems.push(PublishProblem::new(
                    "image_url_required",
                    "Image URL is empty",
                ));
            }
            if image.description.trim().is_empty() {
                problems.push(PublishProblem::new(
                    "image_description_required",
                    "Image description is empty",
                ));
            }
            if image.author.trim().is_empty() {
                problems.push(PublishProblem::new(
                    "image_author_required",
                    "Image author is empty",
                ));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }

    fn check_headline(&self, draft: &Draft, problems: &mut Vec<PublishProblem>) {
        let headline = draft.headline.trim();
        if headline.is_empty() {
            problems.push(PublishProblem::new(
                "headline_required",
                "Headline is empty",
            ));
            return;
        }
        let length = headline.chars().count();
        if length > self.max_headline_length {
            problems.push(PublishProblem::new(
                "headline_too_long",
                format!(
                    "Headline is too long ({length} characters, at most {} allowed)",
                    self.max_headline_length
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::Image;
    use crate::domain::author::{AuthorId, AuthorName};
    use crate::domain::draft::DraftId;
    use crate::domain::user::UserId;
    use chrono::Utc;

    fn author() -> Author {
        Author {
            id: AuthorId::new("AU1").unwrap(),
            name: AuthorName::new("Jane Doe").unwrap(),
        }
    }

    fn complete_draft() -> Draft {
        let mut draft = Draft::from_scratch(
            DraftId::new("D1").unwrap(),
            UserId::new("U1").unwrap(),
            Some(AuthorId::new("AU1").unwrap()),
            Utc::now(),
        );
        draft.headline = "The Ultimate Cat Dresses Checklist".into();
        draft.text = "Full text of the news article".into();
        draft.date_published = Some(Utc::now());
        draft
    }

    fn codes(problems: &[PublishProblem]) -> Vec<&'static str> {
        problems.iter().map(|p| p.message).collect()
    }

    #[test]
    fn complete_draft_is_publishable() {
        let author = author();
        assert!(PublishValidator::new().validate(&complete_draft(), Some(&author)).is_ok());
    }

    #[test]
    fn collects_every_problem_instead_of_failing_fast() {
        let author = author();
        let mut draft = complete_draft();
        draft.headline = "  ".into();
        draft.text = String::new();
        let problems = PublishValidator::new()
            .validate(&draft, Some(&author))
            .unwrap_err();
        assert_eq!(codes(&problems), vec!["headline_required", "text_required"]);
    }

    #[test]
    fn reports_missing_and_dangling_authors_separately() {
        let mut draft = complete_draft();
        let problems = PublishValidator::new().validate(&draft, None).unwrap_err();
        assert_eq!(codes(&problems), vec!["author_not_found"]);

        draft.author_id = None;
        let problems = PublishValidator::new().validate(&draft, None).unwrap_err();
        assert_eq!(codes(&problems), vec!["author_required"]);
    }

    #[test]
    fn image_parts_are_all_or_nothing() {
        let author = author();
        let mut draft = complete_draft();
        draft.image = Some(Image::new("https://cdn/cat.png", "", ""));
        let problems = PublishValidator::new()
            .validate(&draft, Some(&author))
            .unwrap_err();
        assert_eq!(
            codes(&problems),
            vec!["image_description_required", "image_author_required"]
        );
    }

    #[test]
    fn flags_overlong_headline_and_missing_date() {
        let author = author();
        let mut draft = complete_draft();
        draft.headline = "x".repeat(MAX_HEADLINE_LENGTH + 1);
        draft.date_published = None;
        let problems = PublishValidator::new()
            .validate(&draft, Some(&author))
            .unwrap_err();
        assert_eq!(
            codes(&problems),
            vec!["headline_too_long", "date_published_required"]
        );
        assert!(problems[0].user_message.contains("61"));
    }

    #[test]
    fn already_published_draft_is_rejected() {
        let author = author();
        let mut draft = complete_draft();
        draft.is_published = true;
        let problems = PublishValidator::new()
            .validate(&draft, Some(&author))
            .unwrap_err();
        assert_eq!(codes(&problems), vec!["draft_already_published"]);
    }
}
