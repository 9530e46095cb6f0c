use std::fmt;

use crate::error::DomainError;

/// Upper bound on a title, counted in characters.
pub const TITLE_MAX_LEN: usize = 500;

/// Store-assigned identifier of a persisted post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostId(i64);

impl PostId {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A validated post that has not been stored yet.
///
/// The only way to obtain one is [`NewPost::builder`]: `title` and `content`
/// must be supplied before `build` is callable, and `build` rejects values
/// that break the entity invariants.
///
/// ```
/// use postbook_core::NewPost;
///
/// let post = NewPost::builder()
///     .title("Hello")
///     .content("World")
///     .author("alice")
///     .build()
///     .unwrap();
/// assert_eq!(post.title(), "Hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    content: String,
    author: Option<String>,
}

#[bon::bon]
impl NewPost {
    #[builder]
    pub fn new(
        #[builder(into)] title: String,
        #[builder(into)] content: String,
        #[builder(into)] author: Option<String>,
    ) -> Result<Self, DomainError> {
        if title.is_empty() {
            return Err(DomainError::Validation("title must not be empty".to_string()));
        }
        let title_len = title.chars().count();
        if title_len > TITLE_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "title must be at most {TITLE_MAX_LEN} characters, got {title_len}"
            )));
        }
        if content.is_empty() {
            return Err(DomainError::Validation(
                "content must not be empty".to_string(),
            ));
        }

        Ok(Self {
            title,
            content,
            author,
        })
    }
}

impl NewPost {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Attach the identifier the store assigned on insert.
    pub fn into_persisted(self, id: PostId) -> Post {
        Post { id, fields: self }
    }
}

/// Post entity - an immutable snapshot of a stored post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: PostId,
    fields: NewPost,
}

impl Post {
    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn title(&self) -> &str {
        self.fields.title()
    }

    pub fn content(&self) -> &str {
        self.fields.content()
    }

    pub fn author(&self) -> Option<&str> {
        self.fields.author()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_all_fields() {
        let post = NewPost::builder()
            .title("Hello")
            .content("World")
            .author("alice")
            .build()
            .unwrap();

        assert_eq!(post.title(), "Hello");
        assert_eq!(post.content(), "World");
        assert_eq!(post.author(), Some("alice"));
    }

    #[test]
    fn author_is_optional() {
        let post = NewPost::builder()
            .title("Hello")
            .content("World")
            .build()
            .unwrap();

        assert_eq!(post.author(), None);
    }

    #[test]
    fn rejects_empty_title() {
        let err = NewPost::builder()
            .title("")
            .content("body")
            .build()
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("title")));
    }

    #[test]
    fn whitespace_fields_are_kept_verbatim() {
        for text in ["   ", "\n\t"] {
            let post = NewPost::builder()
                .title(text)
                .content(text)
                .build()
                .unwrap();
            assert_eq!(post.title(), text);
            assert_eq!(post.content(), text);
        }
    }

    #[test]
    fn rejects_empty_content() {
        let err = NewPost::builder()
            .title("Hello")
            .content("")
            .maybe_author(Some("bob"))
            .build()
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("content")));
    }

    #[test]
    fn title_limit_counts_characters() {
        let at_limit = "é".repeat(TITLE_MAX_LEN);
        assert!(
            NewPost::builder()
                .title(at_limit)
                .content("body")
                .build()
                .is_ok()
        );

        let over_limit = "a".repeat(TITLE_MAX_LEN + 1);
        let err = NewPost::builder()
            .title(over_limit)
            .content("body")
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn persisted_post_keeps_fields_and_id() {
        let post = NewPost::builder()
            .title("Hello")
            .content("World")
            .build()
            .unwrap()
            .into_persisted(PostId::new(7));

        assert_eq!(post.id(), PostId::new(7));
        assert_eq!(post.title(), "Hello");
        assert_eq!(post.content(), "World");
        assert_eq!(post.author(), None);
    }
}
