//! Color themes for the terminal skin.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Default,
    Dark,
    Matrix,
    Amber,
}

/// ANSI colors a theme paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub user: &'static str,
    pub bot: &'static str,
    pub accent: &'static str,
    pub code: &'static str,
}

pub const RESET: &str = "\x1b[0m";

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Default, Theme::Dark, Theme::Matrix, Theme::Amber];

    /// Stored and displayed name.
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Dark => "dark",
            Theme::Matrix => "matrix",
            Theme::Amber => "amber",
        }
    }

    /// Parse a stored name, falling back to [`Theme::Default`].
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!("unknown theme {name:?}, using default");
            Theme::Default
        })
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Default => Palette {
                user: "\x1b[1;36m",
                bot: "\x1b[1;35m",
                accent: "\x1b[33m",
                code: "\x1b[37m",
            },
            Theme::Dark => Palette {
                user: "\x1b[1;37m",
                bot: "\x1b[1;34m",
                accent: "\x1b[90m",
                code: "\x1b[37m",
            },
            Theme::Matrix => Palette {
                user: "\x1b[1;92m",
                bot: "\x1b[32m",
                accent: "\x1b[92m",
                code: "\x1b[32m",
            },
            Theme::Amber => Palette {
                user: "\x1b[1;93m",
                bot: "\x1b[33m",
                accent: "\x1b[93m",
                code: "\x1b[33m",
            },
        }
    }

    /// Comma-separated list of every theme name.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        for theme in Self::ALL {
            if theme.name() == wanted {
                return Ok(theme);
            }
        }
        bail!("unknown theme: {s} (available: {})", Self::names())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
