//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a post.
///
/// Every field may be missing from the JSON body; required-field checks
/// belong to the record store, not to deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Response to a successful create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub id: i64,
}

/// A post as seen by API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_tolerates_missing_fields() {
        let req: CreatePostRequest = serde_json::from_str(r#"{"content":"body"}"#).unwrap();

        assert_eq!(req.title, None);
        assert_eq!(req.content.as_deref(), Some("body"));
        assert_eq!(req.author, None);
    }

    #[test]
    fn post_response_serializes_null_author() {
        let json = serde_json::to_value(PostResponse {
            id: 1,
            title: "Hello".into(),
            content: "World".into(),
            author: None,
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": 1, "title": "Hello", "content": "World", "author": null})
        );
    }
}
