//! Data model and browser-agnostic logic for the Inkpress blog front-end.
//!
//! Everything here compiles for both the native host and `wasm32`, so the
//! request cache, formatting rules and error policy are unit-tested without
//! a browser.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub mod error;
pub mod loadable;
pub mod query;
pub mod time_format;

pub use error::{ensure_success, Operation, RequestError};
pub use loadable::{Loadable, MutationStatus};
pub use query::{FetchTicket, QueryStore};

/// Paragraph delimiter inside [`Article::content`].
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Number of categories shown on a compact card.
pub const TEASER_CATEGORY_LIMIT: usize = 2;

// 完整文章数据模型
/// A published article as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Backend-assigned identifier; numeric ids are normalised to strings.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Display title.
    pub title: String,
    /// Upper-case labels, in author order.
    #[serde(default)]
    pub category: Vec<String>,
    /// Short summary shown as a teaser.
    pub description: String,
    /// URL of the cover image.
    pub cover_image: String,
    /// Body text; paragraphs are separated by [`PARAGRAPH_SEPARATOR`].
    pub content: String,
    /// ISO-8601 timestamp supplied by the client at creation.
    pub date: String,
}

impl Article {
    /// Body split into paragraphs, one block each.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content.split(PARAGRAPH_SEPARATOR)
    }

    /// Categories shown on a compact card.
    pub fn teaser_categories(&self) -> &[String] {
        let end = self.category.len().min(TEASER_CATEGORY_LIMIT);
        &self.category[..end]
    }

    /// Whether this article is the one picked in the browse pane.
    pub fn is_selected(&self, selected_id: Option<&str>) -> bool {
        selected_id == Some(self.id.as_str())
    }

    /// Parsed publication timestamp, `None` if the stored string is not RFC 3339.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|date| date.with_timezone(&Utc))
    }
}

/// Author-supplied fields of a new article.
///
/// A draft has no id and no date. It only becomes a request body through
/// [`ArticleDraft::stamp`], so the timestamp always reflects the moment of
/// submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticleDraft {
    /// Display title.
    pub title: String,
    /// Already-normalised categories, see [`parse_categories`].
    pub category: Vec<String>,
    /// Short summary.
    pub description: String,
    /// URL of the cover image.
    pub cover_image: String,
    /// Body text.
    pub content: String,
}

impl ArticleDraft {
    /// Attach the submission timestamp, producing the POST body.
    pub fn stamp(self, now: DateTime<Utc>) -> NewArticle {
        NewArticle {
            title: self.title,
            category: self.category,
            description: self.description,
            cover_image: self.cover_image,
            content: self.content,
            date: now.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }
}

/// Body of `POST /blogs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    /// Display title.
    pub title: String,
    /// Upper-case labels.
    pub category: Vec<String>,
    /// Short summary.
    pub description: String,
    /// URL of the cover image.
    pub cover_image: String,
    /// Body text.
    pub content: String,
    /// ISO-8601 timestamp of submission.
    pub date: String,
}

impl NewArticle {
    /// Materialise the article the backend would return for this body.
    pub fn into_article(self, id: String) -> Article {
        Article {
            id,
            title: self.title,
            category: self.category,
            description: self.description,
            cover_image: self.cover_image,
            content: self.content,
            date: self.date,
        }
    }
}

/// Split a comma-separated category field into trimmed upper-case labels.
///
/// Empty pieces are dropped and order is preserved.
pub fn parse_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_uppercase)
        .collect()
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Int(id) => id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample_article() -> Article {
        Article {
            id: "7".to_string(),
            title: "Budgeting basics".to_string(),
            category: vec!["FINANCE".to_string(), "TECH".to_string(), "GROWTH".to_string()],
            description: "A primer".to_string(),
            cover_image: "https://example.com/cover.jpg".to_string(),
            content: "First.\n\nSecond.\n\nThird.".to_string(),
            date: "2026-10-17T09:30:00.000Z".to_string(),
        }
    }

    #[test]
    fn parses_categories_trimmed_uppercased_without_empties() {
        assert_eq!(parse_categories("finance, Tech ,, growth"), vec!["FINANCE", "TECH", "GROWTH"]);
    }

    #[test]
    fn parses_blank_category_field_to_nothing() {
        assert!(parse_categories(" , ,").is_empty());
        assert!(parse_categories("").is_empty());
    }

    #[test]
    fn stamp_uses_the_given_instant() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 5).unwrap();
        let draft = ArticleDraft {
            title: "Hello".to_string(),
            category: vec!["TECH".to_string()],
            ..ArticleDraft::default()
        };

        let body = draft.stamp(now);

        assert_eq!(body.date, "2026-10-18T12:00:05.000Z");
        assert_eq!(DateTime::parse_from_rfc3339(&body.date).unwrap(), now);
        assert_eq!(body.title, "Hello");
    }

    #[test]
    fn new_article_serializes_with_camel_case_fields() {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let body = ArticleDraft {
            title: "T".to_string(),
            category: vec!["A".to_string()],
            description: "D".to_string(),
            cover_image: "https://img".to_string(),
            content: "C".to_string(),
        }
        .stamp(now);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["coverImage"], "https://img");
        assert_eq!(json["category"], serde_json::json!(["A"]));
        assert!(json.get("id").is_none());
        assert!(json.get("cover_image").is_none());
    }

    #[test]
    fn deserializes_numeric_and_string_ids() {
        let numeric: Article = serde_json::from_str(
            r#"{"id":3,"title":"t","category":["X"],"description":"d","coverImage":"c","content":"b","date":"2026-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        let text: Article = serde_json::from_str(
            r#"{"id":"a1","title":"t","description":"d","coverImage":"c","content":"b","date":"2026-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(numeric.id, "3");
        assert_eq!(text.id, "a1");
        assert!(text.category.is_empty());
    }

    #[test]
    fn splits_content_into_paragraphs() {
        let article = sample_article();
        assert_eq!(article.paragraphs().collect::<Vec<_>>(), vec!["First.", "Second.", "Third."]);
    }

    #[test]
    fn teaser_keeps_first_two_categories() {
        let mut article = sample_article();
        assert_eq!(article.teaser_categories(), ["FINANCE", "TECH"]);

        article.category.truncate(1);
        assert_eq!(article.teaser_categories(), ["FINANCE"]);

        article.category.clear();
        assert!(article.teaser_categories().is_empty());
    }

    #[test]
    fn selection_matches_on_id_only() {
        let article = sample_article();
        assert!(article.is_selected(Some(article.id.as_str())));
        assert!(!article.is_selected(Some("other")));
        assert!(!article.is_selected(None));
    }

    #[test]
    fn published_at_rejects_garbage() {
        let mut article = sample_article();
        assert!(article.published_at().is_some());

        article.date = "yesterday".to_string();
        assert!(article.published_at().is_none());
    }
}
