//! In-memory page source shared by the export unit tests

use crate::adapters::federal_register::PageSource;
use crate::domain::{Document, DocumentPage, FedRegError, President, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

pub(crate) fn doc(title: &str, president: &str) -> Document {
    Document {
        title: title.to_string(),
        citation: format!("{title} FR"),
        document_number: format!("{title}-no"),
        president: Some(President {
            identifier: president.to_lowercase().replace(' ', "-"),
            name: president.to_string(),
        }),
        signing_date: "2025-01-20".to_string(),
        publication_date: "2025-01-29".to_string(),
    }
}

/// Serves `stub://page/N` URLs from a fixed list of pages
///
/// `None` entries fail with `RequestFailed`.
pub(crate) struct StubSource {
    pages: HashMap<String, Option<DocumentPage>>,
    calls: AtomicUsize,
}

impl StubSource {
    pub(crate) const START: &'static str = "stub://page/1";

    /// Builds a chain of pages from per-page titles
    pub(crate) fn chain(pages: Vec<Option<Vec<&str>>>) -> Self {
        let total = pages.len();
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(i, titles)| {
                let url = format!("stub://page/{}", i + 1);
                let page = titles.map(|titles| DocumentPage {
                    results: titles.iter().map(|t| doc(t, "Donald Trump")).collect(),
                    next_page_url: (i + 1 < total).then(|| format!("stub://page/{}", i + 2)),
                    ..Default::default()
                });
                (url, page)
            })
            .collect();

        Self {
            pages,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageSource for StubSource {
    async fn fetch_page(&self, url: &str) -> Result<DocumentPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.pages.get(url) {
            Some(Some(page)) => Ok(page.clone()),
            Some(None) => Err(FedRegError::RequestFailed {
                url: url.to_string(),
                reason: "non-success status 500 Internal Server Error: ".to_string(),
            }),
            None => Err(FedRegError::RequestFailed {
                url: url.to_string(),
                reason: "no such page".to_string(),
            }),
        }
    }
}
