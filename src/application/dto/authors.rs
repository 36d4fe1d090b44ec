use crate::domain::{
    author::{Author, AuthorId},
    user::UserId,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthorDto {
    pub id: String,
    pub name: String,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.into_inner(),
            name: author.name.into_inner(),
        }
    }
}

/// Author as embedded in articles and drafts. `name` is `null` when the
/// referenced author no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthorRefDto {
    pub id: String,
    pub name: Option<String>,
}

impl AuthorRefDto {
    pub fn resolve(id: &AuthorId, author: Option<Author>) -> Self {
        Self {
            id: id.as_str().to_owned(),
            name: author.map(|author| author.name.into_inner()),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatedAuthorDto {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DefaultAuthorDto {
    pub user_id: String,
    pub author: Option<AuthorDto>,
}

impl DefaultAuthorDto {
    pub fn new(user_id: UserId, author: Option<Author>) -> Self {
        Self {
            user_id: user_id.into_inner(),
            author: author.map(Into::into),
        }
    }
}
