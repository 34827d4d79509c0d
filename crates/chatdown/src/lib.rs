//! # chatdown
//!
//! Export ChatGPT conversation documents as Markdown.
//!
//! The input is a read-only tree of typed content nodes (see
//! [`chatdown_core`]) produced by whatever adapts the live page. This crate
//! partitions the tree into role-tagged turns, renders each turn's content
//! to Markdown, and assembles the final document with role headings and a
//! derived title.
//!
//! ## Example
//!
//! ```rust
//! use chatdown::{ExportService, Node, Role, Tag};
//!
//! let message = Node::with_children(
//!     Tag::Message { role: Role::User },
//!     vec![Node::with_children(Tag::UserText, vec![Node::text("Hi")])],
//! );
//! let turn = Node::with_children(Tag::Turn, vec![message]);
//! let document = Node::with_children(Tag::Container, vec![turn]);
//!
//! let service = ExportService::new();
//! let markdown = service.export(&document, "Test Chat").unwrap();
//! assert!(markdown.starts_with("# Test Chat"));
//! assert!(markdown.contains("##### You said:"));
//! ```

mod extract;
mod service;
mod title;

pub use chatdown_core::{
    language_from_class, normalize_whitespace, render, Node, Role, Tag,
};
pub use extract::{extract_turns, ImageRef, Turn};
pub use service::{ExportOptions, ExportService};
pub use title::{derive_title, sanitize_filename, DEFAULT_TITLE};

/// Error type for export operations
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The document contained no conversation turns. Distinct from a
    /// conversation that renders to little text: there was nothing to
    /// export at all.
    #[error("no conversation content found")]
    NoContent,
}

pub type Result<T> = std::result::Result<T, ExportError>;
