//! Stylesheet backing the class tokens used by the views.

/// A named stylesheet whose rules ship inside the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stylesheet {
    pub href: &'static str,
    pub css: &'static str,
}

impl Stylesheet {
    /// Inline `<style>` tag for a document head, tagged with the sheet's name.
    #[must_use]
    pub fn head_tag(&self) -> String {
        format!(r#"<style data-href="{}">{}</style>"#, self.href, self.css)
    }
}

pub const STYLESHEET: Stylesheet =
    Stylesheet { href: "app.css", css: include_str!("../assets/app.css") };
