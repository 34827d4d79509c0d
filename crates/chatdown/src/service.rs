//! Document assembly: join extracted turns into the final Markdown export.

use chatdown_core::{normalize_whitespace, render, Node, Role};

use crate::extract::{extract_turns, Turn};
use crate::title::DEFAULT_TITLE;
use crate::{ExportError, Result};

/// Options for the export service.
///
/// The defaults reproduce the canonical export format; they exist so a
/// caller can re-badge the role headings or the "untitled" sentinel.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Heading line emitted before each user turn.
    pub user_heading: String,

    /// Heading line emitted before each assistant turn.
    pub assistant_heading: String,

    /// Title treated as "untitled": it is never emitted as a document
    /// heading.
    pub default_title: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            user_heading: "##### You said:".to_string(),
            assistant_heading: "###### ChatGPT said:".to_string(),
            default_title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// The main service for exporting conversation documents as Markdown.
pub struct ExportService {
    options: ExportOptions,
}

impl ExportService {
    /// Create a new ExportService with default options.
    pub fn new() -> Self {
        Self {
            options: ExportOptions::default(),
        }
    }

    /// Create an ExportService with custom options.
    pub fn with_options(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Get the current options.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Export a conversation document as one Markdown string.
    ///
    /// Returns [`ExportError::NoContent`] when the document contains no
    /// conversation turns.
    pub fn export(&self, document: &Node, title: &str) -> Result<String> {
        let turns = extract_turns(document);
        self.assemble(title, &turns).ok_or(ExportError::NoContent)
    }

    /// Assemble extracted turns and a derived title into the final
    /// document. Returns `None` when there is nothing to export, which is
    /// distinct from a document that happens to render empty.
    pub fn assemble(&self, title: &str, turns: &[Turn<'_>]) -> Option<String> {
        if turns.is_empty() {
            return None;
        }

        let mut parts: Vec<String> = Vec::new();

        if !title.is_empty() && title != self.options.default_title {
            parts.push(format!("# {title}"));
            parts.push(String::new());
        }

        for turn in turns {
            let heading = match turn.role {
                Role::User => &self.options.user_heading,
                Role::Assistant => &self.options.assistant_heading,
            };
            parts.push(heading.clone());
            parts.push(String::new());

            match turn.role {
                Role::User => {
                    for image in &turn.images {
                        let alt = if image.alt.is_empty() {
                            "Image"
                        } else {
                            image.alt.as_str()
                        };
                        parts.push(format!("![{alt}]({})", image.src));
                        parts.push(String::new());
                    }
                    if let Some(text) = turn.content {
                        parts.push(text.text_content().trim().to_string());
                        parts.push(String::new());
                    }
                }
                Role::Assistant => {
                    if let Some(content) = turn.content {
                        parts.push(normalize_whitespace(&render(content)));
                        parts.push(String::new());
                    }
                }
            }
        }

        let mut output = normalize_whitespace(&parts.join("\n"));
        output.push('\n');
        Some(output)
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}
