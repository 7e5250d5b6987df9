//! Federal Register API adapter
//!
//! This module provides the [`PageSource`] seam used by the export pipeline and
//! its HTTP implementation, [`FederalRegisterClient`].

pub mod client;
pub mod source;

pub use client::FederalRegisterClient;
pub use source::PageSource;
