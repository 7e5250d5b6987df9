//! Federal Register document model
//!
//! [`DocumentPage`] is one decoded API response and [`Document`] one record
//! inside it. Dates are kept exactly as the API formats them; nothing here
//! parses or normalizes field contents.

use serde::{Deserialize, Deserializer, Serialize};

/// Output column names, in row order
pub const CSV_HEADER: [&str; 6] = [
    "title",
    "citation",
    "document_number",
    "president",
    "signing_date",
    "publication_date",
];

/// Treats a JSON `null` the same as a missing field
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Issuing president of a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct President {
    /// Stable identifier assigned by the API (e.g. `"donald-trump"`)
    #[serde(default, deserialize_with = "nullable_string")]
    pub identifier: String,

    /// Display name
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
}

/// A single presidential document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub citation: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub document_number: String,

    #[serde(default)]
    pub president: Option<President>,

    #[serde(default, deserialize_with = "nullable_string")]
    pub signing_date: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub publication_date: String,
}

impl Document {
    /// Projects the document onto the output columns of [`CSV_HEADER`]
    pub fn to_row(&self) -> [&str; 6] {
        [
            self.title.as_str(),
            self.citation.as_str(),
            self.document_number.as_str(),
            self.president_name(),
            self.signing_date.as_str(),
            self.publication_date.as_str(),
        ]
    }

    /// Display name of the issuing president, empty when the API omitted it
    pub fn president_name(&self) -> &str {
        self.president
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or_default()
    }
}

/// One page of results from the documents endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentPage {
    /// Total number of matching documents across all pages
    #[serde(default)]
    pub count: Option<u64>,

    /// Human readable description of the query
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub total_pages: Option<u64>,

    /// Link to the following page; absent, `null` or empty on the last page
    #[serde(default)]
    pub next_page_url: Option<String>,

    #[serde(default)]
    pub results: Vec<Document>,
}

impl DocumentPage {
    /// URL of the next page, or `None` when this is the last one
    pub fn next_page(&self) -> Option<&str> {
        self.next_page_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
