//! The launch banner.

use crate::tree::{Node, Tag};
use pvault_domain::theme::ThemeSignal;

pub const HEADING: &str = "Hello World";
pub const TAGLINE: &str = "Welcome to Prompt Vault";

/// Full-height backdrop with a vertical gradient, light and dark variants.
pub const ROOT_CLASSES: &[&str] = &[
    "min-h-screen",
    "bg-gradient-to-b",
    "from-blue-50",
    "to-white",
    "dark:from-gray-900",
    "dark:to-gray-800",
];
pub const CONTENT_CLASSES: &[&str] = &["container", "mx-auto", "px-4", "py-16"];
pub const TEXT_BLOCK_CLASSES: &[&str] = &["text-center"];
pub const HEADING_CLASSES: &[&str] =
    &["text-5xl", "font-bold", "text-gray-900", "dark:text-white", "mb-4"];
pub const TAGLINE_CLASSES: &[&str] = &["text-xl", "text-gray-600", "dark:text-gray-300"];

/// Builds the banner: backdrop > content region > text block > heading, tagline.
#[must_use]
pub fn hero() -> Node {
    Node::element(
        Tag::Div,
        ROOT_CLASSES.iter().copied(),
        [Node::element(
            Tag::Div,
            CONTENT_CLASSES.iter().copied(),
            [Node::element(
                Tag::Div,
                TEXT_BLOCK_CLASSES.iter().copied(),
                [
                    Node::element(Tag::H1, HEADING_CLASSES.iter().copied(), [Node::Text(HEADING)]),
                    Node::element(Tag::P, TAGLINE_CLASSES.iter().copied(), [Node::Text(TAGLINE)]),
                ],
            )],
        )],
    )
}

/// [`hero`] with the theme signal's token appended to the backdrop.
///
/// `System` leaves the tree untouched so `prefers-color-scheme` decides.
#[must_use]
pub fn themed_hero(signal: ThemeSignal) -> Node {
    let mut tree = hero();
    if let (Some(token), Node::Element { classes, .. }) = (signal.class_token(), &mut tree) {
        classes.push(token);
    }
    tree
}
