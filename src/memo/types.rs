//! Core memo type definitions.
//!
//! Defines [`Memo`] (a stored snippet), [`Layout`] (the two list presentation
//! modes), and the fixed color palette memos are tagged with at creation.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single memo record.
///
/// `id` is assigned at creation and never changes or gets reused; `color` is a
/// cosmetic palette tag that is likewise fixed for the life of the record.
/// Only memos with a non-empty `keyword` are visible to trigger completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    /// Opaque unique identifier (millisecond timestamp rendered as decimal).
    pub id: String,
    /// Optional display label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Text inserted when a completion is accepted. May be empty.
    pub content: String,
    /// Completion keyword, trimmed on write. `None` hides the memo from
    /// the completion engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Display color from [`COLOR_PALETTE`].
    pub color: String,
}

/// Presentation mode for the memo list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Single-column list (default).
    #[default]
    List,
    /// Card grid.
    Grid,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Grid => "grid",
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Self::List),
            "grid" => Ok(Self::Grid),
            _ => Err(format!("unknown layout: {s}")),
        }
    }
}

/// Semi-transparent colors that read well on both dark and light themes.
pub const COLOR_PALETTE: [&str; 11] = [
    "rgba(242, 139, 130, 0.4)", // red
    "rgba(251, 188, 4, 0.4)",   // orange
    "rgba(255, 244, 117, 0.4)", // yellow
    "rgba(204, 255, 144, 0.4)", // green
    "rgba(167, 255, 235, 0.4)", // teal
    "rgba(203, 240, 248, 0.4)", // blue
    "rgba(174, 203, 250, 0.4)", // dark blue
    "rgba(215, 174, 251, 0.4)", // purple
    "rgba(253, 207, 232, 0.4)", // pink
    "rgba(230, 201, 168, 0.4)", // brown
    "rgba(232, 234, 237, 0.4)", // gray
];

/// Pick a palette color uniformly at random. The RNG is a parameter so tests
/// can drive the draw with a seeded generator.
pub fn pick_color<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    COLOR_PALETTE[rng.gen_range(0..COLOR_PALETTE.len())]
}
