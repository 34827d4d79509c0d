//! # chatdown-core
//!
//! Content node model and Markdown rendering for conversation exports.
//!
//! This crate owns the pure part of the pipeline: a tagged tree of content
//! nodes and a recursive renderer that turns a subtree into a Markdown
//! fragment. It knows nothing about conversations, roles, or documents;
//! that layering lives in the `chatdown` crate.
//!
//! # Architecture
//!
//! ```text
//! Live page ──adapter──▶ ┌───────────┐
//!                        │ Node tree │ ──render──▶ Markdown fragment
//! Test fixture ─────────▶│           │
//!                        └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use chatdown_core::{render, Node, Tag};
//!
//! let paragraph = Node::with_children(
//!     Tag::Paragraph,
//!     vec![
//!         Node::text("This is "),
//!         Node::with_children(Tag::Bold, vec![Node::text("bold")]),
//!         Node::text(" text."),
//!     ],
//! );
//!
//! assert_eq!(render(&paragraph), "This is **bold** text.\n\n");
//! ```

mod convert;
mod node;
mod utilities;

pub use convert::{render, render_list, render_table};
pub use node::{Descendants, Node, Role, Tag};
pub use utilities::{language_from_class, normalize_whitespace};
