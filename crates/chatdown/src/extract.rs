//! Turn extraction: partition a conversation document into an ordered
//! sequence of role-tagged segments.

use chatdown_core::{Node, Role, Tag};

/// An image attached to a user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub alt: String,
    pub src: String,
}

/// One role-attributed message segment, in source order.
#[derive(Debug, Clone)]
pub struct Turn<'a> {
    pub role: Role,

    /// Content subtree: the plain-text node for a user turn, the rich
    /// content container for an assistant turn. `None` when the turn has
    /// no content; it still gets its heading in the assembled document.
    pub content: Option<&'a Node>,

    /// Images attached to a user turn, in document order. Always empty for
    /// assistant turns.
    pub images: Vec<ImageRef>,

    /// Index of the turn container in the source document walk.
    pub order: usize,
}

/// Extract all conversation turns from a document, in document order.
///
/// A container without a role-bearing descendant is skipped silently; some
/// structural wrappers carry no message. Nothing is reordered or
/// deduplicated.
pub fn extract_turns(document: &Node) -> Vec<Turn<'_>> {
    let mut containers: Vec<&Node> = Vec::new();
    collect_containers(document, &mut containers);

    let mut turns = Vec::new();
    for (order, container) in containers.into_iter().enumerate() {
        let role = container.descendants().find_map(|n| match n.tag() {
            Some(Tag::Message { role }) => Some(*role),
            _ => None,
        });
        let Some(role) = role else { continue };

        let turn = match role {
            Role::User => Turn {
                role,
                content: find_first(container, |tag| matches!(tag, Tag::UserText)),
                images: collect_images(container),
                order,
            },
            Role::Assistant => Turn {
                role,
                content: find_first(container, |tag| matches!(tag, Tag::RichContent)),
                images: Vec::new(),
                order,
            },
        };
        turns.push(turn);
    }

    turns
}

fn collect_containers<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
    if matches!(node.tag(), Some(Tag::Turn)) {
        out.push(node);
        return;
    }
    for child in node.children() {
        collect_containers(child, out);
    }
}

fn find_first<'a>(node: &'a Node, pred: impl Fn(&Tag) -> bool) -> Option<&'a Node> {
    node.descendants().find(|n| n.tag().is_some_and(&pred))
}

fn collect_images(container: &Node) -> Vec<ImageRef> {
    container
        .descendants()
        .filter_map(|n| match n.tag() {
            Some(Tag::Image { alt, src }) => Some(ImageRef {
                alt: alt.clone(),
                src: src.clone(),
            }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_turn(text: &str) -> Node {
        Node::with_children(
            Tag::Turn,
            vec![Node::with_children(
                Tag::Message { role: Role::User },
                vec![Node::with_children(
                    Tag::UserText,
                    vec![Node::text(text)],
                )],
            )],
        )
    }

    fn assistant_turn(children: Vec<Node>) -> Node {
        Node::with_children(
            Tag::Turn,
            vec![Node::with_children(
                Tag::Message {
                    role: Role::Assistant,
                },
                vec![Node::with_children(Tag::RichContent, children)],
            )],
        )
    }

    #[test]
    fn test_extracts_turns_in_document_order() {
        let document = Node::with_children(
            Tag::Container,
            vec![
                user_turn("Hi"),
                assistant_turn(vec![Node::with_children(
                    Tag::Paragraph,
                    vec![Node::text("Hello!")],
                )]),
                user_turn("Thanks"),
            ],
        );

        let turns = extract_turns(&document);
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[1].role, Role::Assistant);
        assert_eq!(turns[2].role, Role::User);
        assert_eq!(turns[0].order, 0);
        assert_eq!(turns[2].order, 2);
        assert_eq!(turns[0].content.unwrap().text_content(), "Hi");
    }

    #[test]
    fn test_empty_document_yields_no_turns() {
        let document = Node::with_children(
            Tag::Container,
            vec![Node::with_children(
                Tag::Paragraph,
                vec![Node::text("not a conversation")],
            )],
        );
        assert!(extract_turns(&document).is_empty());
    }

    #[test]
    fn test_container_without_role_is_skipped() {
        let wrapper = Node::with_children(Tag::Turn, vec![Node::text("scaffolding")]);
        let document = Node::with_children(Tag::Container, vec![wrapper, user_turn("Hi")]);

        let turns = extract_turns(&document);
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].role, Role::User);
        // The skipped container still occupied a slot in the walk.
        assert_eq!(turns[0].order, 1);
    }

    #[test]
    fn test_assistant_turn_without_content() {
        let turn = Node::with_children(
            Tag::Turn,
            vec![Node::element(Tag::Message {
                role: Role::Assistant,
            })],
        );
        let document = Node::with_children(Tag::Container, vec![turn]);

        let turns = extract_turns(&document);
        assert_eq!(turns.len(), 1);
        assert!(turns[0].content.is_none());
    }

    #[test]
    fn test_user_turn_collects_images_in_order() {
        let mut turn = user_turn("look at these");
        turn.add_child(Node::element(Tag::image("first", "a.png")));
        turn.add_child(Node::element(Tag::image("", "b.png")));
        let document = Node::with_children(Tag::Container, vec![turn]);

        let turns = extract_turns(&document);
        assert_eq!(
            turns[0].images,
            vec![
                ImageRef {
                    alt: "first".to_string(),
                    src: "a.png".to_string()
                },
                ImageRef {
                    alt: String::new(),
                    src: "b.png".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_assistant_turn_ignores_images() {
        let turn = assistant_turn(vec![
            Node::element(Tag::image("inline", "c.png")),
            Node::with_children(Tag::Paragraph, vec![Node::text("text")]),
        ]);
        let document = Node::with_children(Tag::Container, vec![turn]);

        let turns = extract_turns(&document);
        assert!(turns[0].images.is_empty());
        assert!(turns[0].content.is_some());
    }
}
