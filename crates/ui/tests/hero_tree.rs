use pvault_ui::ThemeSignal;
use pvault_ui::hero::{HEADING, TAGLINE, hero, themed_hero};
use pvault_ui::tree::{Node, Tag};

fn text_nodes_under<F>(tree: &Node, predicate: F) -> Vec<&'static str>
where
    F: Fn(Tag) -> bool,
{
    let mut out = Vec::new();
    for tag in [Tag::Div, Tag::H1, Tag::P].into_iter().filter(|tag| predicate(*tag)) {
        for element in tree.elements_with_tag(tag) {
            out.extend(element.children().iter().filter_map(|child| match child {
                Node::Text(text) => Some(*text),
                Node::Element { .. } => None,
            }));
        }
    }
    out
}

#[test]
fn exactly_one_heading_says_hello_world() {
    let tree = hero();
    assert_eq!(text_nodes_under(&tree, Tag::is_heading), vec![HEADING]);
    assert_eq!(HEADING, "Hello World");
}

#[test]
fn exactly_one_paragraph_welcomes_the_user() {
    let tree = hero();
    assert_eq!(text_nodes_under(&tree, Tag::is_paragraph), vec![TAGLINE]);
    assert_eq!(TAGLINE, "Welcome to Prompt Vault");
}

#[test]
fn repeated_invocations_are_structurally_identical() {
    let first = hero();
    for _ in 0..8 {
        assert_eq!(hero(), first);
    }
}

#[test]
fn nesting_is_root_region_group_then_two_texts() {
    let root = hero();
    assert_eq!(root.tag(), Some(Tag::Div));

    let regions: Vec<_> = root.element_children().collect();
    assert_eq!(regions.len(), 1, "root wraps exactly one content region");

    let groups: Vec<_> = regions[0].element_children().collect();
    assert_eq!(groups.len(), 1, "content region wraps exactly one text grouping");

    let texts: Vec<_> = groups[0].children().iter().collect();
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0].tag(), Some(Tag::H1));
    assert_eq!(texts[0].texts(), vec![HEADING]);
    assert_eq!(texts[1].tag(), Some(Tag::P));
    assert_eq!(texts[1].texts(), vec![TAGLINE]);
}

#[test]
fn layout_tokens_match_the_banner() {
    let root = hero();
    assert!(root.has_class("min-h-screen"));
    assert!(root.has_class("bg-gradient-to-b"));
    assert!(root.has_class("dark:from-gray-900"));

    let region = root.element_children().next().expect("content region");
    assert_eq!(region.class_attr(), "container mx-auto px-4 py-16");

    let group = region.element_children().next().expect("text grouping");
    assert_eq!(group.class_attr(), "text-center");
}

#[test]
fn theme_signal_never_changes_text() {
    let expected = hero().texts();
    for signal in ThemeSignal::ALL {
        let tree = themed_hero(signal);
        assert_eq!(tree.texts(), expected, "text changed under {signal}");
        assert_eq!(tree.elements_with_tag(Tag::H1).len(), 1);
        assert_eq!(tree.elements_with_tag(Tag::P).len(), 1);
    }
}

#[test]
fn theme_signal_only_adds_a_root_token() {
    let plain = hero();
    let light = themed_hero(ThemeSignal::Light);
    let dark = themed_hero(ThemeSignal::Dark);

    assert!(light.has_class("light") && !light.has_class("dark"));
    assert!(dark.has_class("dark") && !dark.has_class("light"));
    assert_eq!(light.children(), plain.children());
    assert_eq!(dark.children(), plain.children());
}
