use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Ambient light/dark preference handed to the view by its host.
///
/// The view never stores or derives this value; it only turns it into a
/// presentational class token on the root container.
///
/// Deserialization goes through [`FromStr`], so config values ignore case.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum ThemeSignal {
    /// Follow the platform preference (`prefers-color-scheme`).
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeSignal {
    pub const ALL: [Self; 3] = [Self::System, Self::Light, Self::Dark];

    /// Class token forced onto the root container, if any.
    #[must_use]
    pub const fn class_token(self) -> Option<&'static str> {
        match self {
            Self::System => None,
            Self::Light => Some("light"),
            Self::Dark => Some("dark"),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme '{0}', expected one of: system, light, dark")]
pub struct ThemeParseError(pub String);

impl FromStr for ThemeSignal {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" | "auto" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ThemeParseError(s.to_owned())),
        }
    }
}

impl TryFrom<String> for ThemeSignal {
    type Error = ThemeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
