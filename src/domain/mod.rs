//! Domain models and types for fedreg-export.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Records** ([`Document`], [`President`]) and the page envelope ([`DocumentPage`])
//! - **The output row shape** ([`CSV_HEADER`], [`Document::to_row`])
//! - **Error types** ([`FedRegError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use fedreg_export::domain::{DocumentPage, CSV_HEADER};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let page: DocumentPage = serde_json::from_str(r#"{
//!     "results": [{"title": "EO", "president": {"identifier": "x", "name": "Donald Trump"}}],
//!     "next_page_url": ""
//! }"#)?;
//!
//! assert_eq!(CSV_HEADER[3], "president");
//! assert_eq!(page.results[0].to_row()[3], "Donald Trump");
//! assert!(page.next_page().is_none());
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod errors;
pub mod result;

pub use document::{Document, DocumentPage, President, CSV_HEADER};
pub use errors::FedRegError;
pub use result::Result;
