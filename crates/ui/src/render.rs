//! Dioxus bindings for [`Node`] trees.

use crate::hero::themed_hero;
use crate::tree::{Node, Tag};
use dioxus::prelude::*;
use pvault_domain::theme::ThemeSignal;

/// Maps a [`Node`] onto the virtual DOM.
pub fn render_node(node: &Node) -> Element {
    let class = node.class_attr();

    match node {
        Node::Text(text) => rsx! { "{text}" },
        Node::Element { tag: Tag::Div, children, .. } => rsx! {
            div { class: "{class}",
                for child in children.iter() {
                    {render_node(child)}
                }
            }
        },
        Node::Element { tag: Tag::H1, children, .. } => rsx! {
            h1 { class: "{class}",
                for child in children.iter() {
                    {render_node(child)}
                }
            }
        },
        Node::Element { tag: Tag::P, children, .. } => rsx! {
            p { class: "{class}",
                for child in children.iter() {
                    {render_node(child)}
                }
            }
        },
    }
}

/// The launch banner under an explicit theme signal.
#[component]
pub fn Hero(#[props(default)] theme: ThemeSignal) -> Element {
    render_node(&themed_hero(theme))
}

/// Root view mounted by the host. Reads the ambient [`ThemeSignal`] from
/// context and falls back to `System` when the host provides none.
#[component]
pub fn App() -> Element {
    let theme = try_use_context::<ThemeSignal>().unwrap_or_default();

    rsx! {
        Hero { theme }
    }
}
