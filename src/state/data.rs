/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the book service (JSON over HTTP) and the UI layer.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque identifier of a book on the service
///
/// The service hands out string ids, but numeric ids are accepted too.
/// The value is used verbatim as a URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Create an id from its textual form, rejecting blank values
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.contains('/') {
            return None;
        }
        Some(BookId(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        let raw = match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text,
            Raw::Number(number) => number.to_string(),
        };
        BookId::new(raw).ok_or_else(|| serde::de::Error::custom("book id must not be empty"))
    }
}

/// Publish year exactly as the service or the user provided it
///
/// A JSON number stays a number and a JSON string stays a string.
/// Edits made in the form are always `Text`, nothing is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PublishYear {
    Number(i64),
    Text(String),
}

impl Default for PublishYear {
    fn default() -> Self {
        PublishYear::Text(String::new())
    }
}

impl fmt::Display for PublishYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishYear::Number(year) => write!(f, "{}", year),
            PublishYear::Text(text) => f.write_str(text),
        }
    }
}

/// A book record as returned by `GET /books/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Book {
    /// Service-side id (`_id` on the wire), absent in some responses
    #[serde(default, alias = "_id")]
    pub id: Option<BookId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Kept as received, see [`PublishYear`]
    #[serde(default, rename = "publishYear")]
    pub publish_year: PublishYear,
}

/// Body of `PUT /books/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookPayload {
    pub title: String,
    pub author: String,
    #[serde(rename = "publishYear")]
    pub publish_year: PublishYear,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_keeps_numeric_publish_year() {
        let book: Book = serde_json::from_value(json!({
            "_id": "65a1f0c2",
            "title": "A",
            "author": "B",
            "publishYear": 1999,
            "createdAt": "2024-01-12T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(book.id, BookId::new("65a1f0c2"));
        assert_eq!(book.title, "A");
        assert_eq!(book.author, "B");
        assert_eq!(book.publish_year, PublishYear::Number(1999));
    }

    #[test]
    fn test_book_keeps_textual_publish_year() {
        let book: Book = serde_json::from_value(json!({
            "id": 7,
            "title": "A",
            "author": "B",
            "publishYear": "1999"
        }))
        .unwrap();

        assert_eq!(book.id, BookId::new("7"));
        assert_eq!(book.publish_year, PublishYear::Text("1999".to_string()));
    }

    #[test]
    fn test_payload_wire_format() {
        let payload = BookPayload {
            title: "X".to_string(),
            author: "Y".to_string(),
            publish_year: PublishYear::Text("2020".to_string()),
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "title": "X", "author": "Y", "publishYear": "2020" })
        );
    }

    #[test]
    fn test_book_id_rejects_blank_and_nested() {
        assert!(BookId::new("").is_none());
        assert!(BookId::new("   ").is_none());
        assert!(BookId::new("a/b").is_none());
        let id = BookId::new(" 42 ").unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
    }
}
