//! Render content nodes to Markdown fragments.
//!
//! [`render`] is a total, side-effect-free function of its input subtree:
//! it dispatches on the node tag and concatenates child output in order,
//! with no implicit separators. Lists and tables get their own renderers
//! because their output is line-oriented rather than a flat concatenation.

use crate::node::{Node, Tag};

/// Render a node and its descendants to a Markdown fragment.
pub fn render(node: &Node) -> String {
    let tag = match node {
        Node::Text(content) => return content.clone(),
        Node::Element { tag, .. } => tag,
    };

    match tag {
        Tag::Paragraph => format!("{}\n\n", render_children(node)),

        Tag::LineBreak => "\n".to_string(),

        Tag::Bold => format!("**{}**", render_children(node)),
        Tag::Italic => format!("*{}*", render_children(node)),
        Tag::Strike => format!("~~{}~~", render_children(node)),

        // Raw text, not recursively rendered children: markup inside an
        // inline code span is literal.
        Tag::InlineCode => format!("`{}`", node.text_content()),

        Tag::CodeBlock { language } => {
            let code = node.text_content();
            let code = code.strip_suffix('\n').unwrap_or(&code);
            format!(
                "\n```{}\n{}\n```\n\n",
                language.as_deref().unwrap_or(""),
                code
            )
        }

        Tag::Heading { level } => {
            let level = usize::from(*level).clamp(1, 6);
            format!("{} {}\n\n", "#".repeat(level), render_children(node))
        }

        Tag::UnorderedList => format!("{}\n", render_list(node, false, 0)),
        Tag::OrderedList => format!("{}\n", render_list(node, true, 0)),

        // List items are normally consumed by `render_list`; a stray item
        // renders its children with trailing newlines stripped.
        Tag::ListItem => render_children(node).trim_end_matches('\n').to_string(),

        Tag::Blockquote => {
            let content = render_children(node);
            let quoted: Vec<String> = content
                .trim()
                .split('\n')
                .map(|line| format!("> {line}"))
                .collect();
            format!("{}\n\n", quoted.join("\n"))
        }

        Tag::Link { href } => {
            let text = render_children(node);
            // Bare URLs stay bare: [x](x) is noise.
            if href.is_empty() || *href == text {
                text
            } else {
                format!("[{text}]({href})")
            }
        }

        Tag::Image { alt, src } => {
            let alt = if alt.is_empty() { "Image" } else { alt.as_str() };
            format!("![{alt}]({src})")
        }

        Tag::Rule => "\n---\n\n".to_string(),

        Tag::Table => format!("{}\n", render_table(node)),

        Tag::Superscript => format!("<sup>{}</sup>", render_children(node)),
        Tag::Subscript => format!("<sub>{}</sub>", render_children(node)),

        Tag::Ignored => String::new(),

        // Structural wrappers (containers, turn scaffolding, table parts
        // reached outside the table renderer) and anything added later
        // render their children transparently.
        _ => render_children(node),
    }
}

/// Render the children of a node in order, concatenated.
pub(crate) fn render_children(node: &Node) -> String {
    node.children().iter().map(render).collect()
}

/// Render an ordered or unordered list as indented Markdown lines.
///
/// Only direct `ListItem` children are considered. Each item's non-list
/// content renders inline; nested lists re-enter at `depth + 1` and follow
/// their parent item on their own lines. The ordered counter is local to
/// one call, so sibling lists and nested lists each restart at 1.
pub fn render_list(list: &Node, ordered: bool, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    let mut lines: Vec<String> = Vec::new();
    let mut counter = 1;

    for item in list.children() {
        if !matches!(item.tag(), Some(Tag::ListItem)) {
            continue;
        }

        let mut content = String::new();
        let mut nested: Vec<String> = Vec::new();

        for child in item.children() {
            match child.tag() {
                Some(Tag::UnorderedList) => nested.push(render_list(child, false, depth + 1)),
                Some(Tag::OrderedList) => nested.push(render_list(child, true, depth + 1)),
                _ => content.push_str(&render(child)),
            }
        }

        let content = content.trim_matches('\n');
        let marker = if ordered {
            format!("{counter}. ")
        } else {
            "- ".to_string()
        };
        lines.push(format!("{indent}{marker}{content}"));

        if !nested.is_empty() {
            lines.push(nested.join("\n"));
        }

        counter += 1;
    }

    lines.join("\n")
}

/// Render a table as a pipe-delimited Markdown table.
///
/// The header comes from the first row of an explicit `TableHead`
/// container when one exists; otherwise the first row encountered anywhere
/// in the table is promoted to header. Returns the empty string when no
/// header can be determined.
pub fn render_table(table: &Node) -> String {
    let head = table
        .descendants()
        .find(|n| matches!(n.tag(), Some(Tag::TableHead)));

    let mut header: Vec<String> = Vec::new();
    if let Some(head) = head {
        if let Some(row) = head
            .descendants()
            .find(|n| matches!(n.tag(), Some(Tag::TableRow)))
        {
            header = row_cells(row);
        }
    }

    let body_root = table
        .descendants()
        .find(|n| matches!(n.tag(), Some(Tag::TableBody)))
        .unwrap_or(table);

    let mut rows: Vec<&Node> = Vec::new();
    collect_rows(body_root, head, &mut rows);

    let mut body: Vec<Vec<String>> = Vec::new();
    for row in rows {
        let cells = row_cells(row);
        if header.is_empty() && body.is_empty() {
            header = cells;
        } else {
            body.push(cells);
        }
    }

    if header.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format!("| {} |", header.join(" | ")));
    lines.push(format!("| {} |", vec!["---"; header.len()].join(" | ")));
    for mut cells in body {
        // Short rows are padded to header width; extra cells are kept.
        while cells.len() < header.len() {
            cells.push(String::new());
        }
        lines.push(format!("| {} |", cells.join(" | ")));
    }

    format!("{}\n", lines.join("\n"))
}

/// Collect `TableRow` nodes below `node`, skipping the header container's
/// subtree so its rows are not emitted twice.
fn collect_rows<'a>(node: &'a Node, skip: Option<&'a Node>, out: &mut Vec<&'a Node>) {
    for child in node.children() {
        if skip.is_some_and(|s| std::ptr::eq(child, s)) {
            continue;
        }
        if matches!(child.tag(), Some(Tag::TableRow)) {
            out.push(child);
        } else {
            collect_rows(child, skip, out);
        }
    }
}

fn row_cells(row: &Node) -> Vec<String> {
    let mut cells = Vec::new();
    collect_cells(row, &mut cells);
    cells
}

fn collect_cells(node: &Node, out: &mut Vec<String>) {
    for child in node.children() {
        if matches!(child.tag(), Some(Tag::TableCell { .. })) {
            out.push(render_children(child).trim().to_string());
        } else {
            collect_cells(child, out);
        }
    }
}
