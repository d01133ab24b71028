//! Saved places and trip history

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::icons::IconDescriptor;
use crate::modes::{ModeId, ParseModeError};

/// A saved place
///
/// The id is opaque. It is not a route key and is not guaranteed to resolve
/// to anything in the route fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteLocation {
    /// Opaque identifier
    pub id: String,
    /// Short name, e.g. "Home"
    pub name: String,
    /// Street address
    pub address: String,
    /// Glyph
    pub icon: IconDescriptor,
}

/// A past trip
///
/// Like favorites, the id does not reference a route record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Opaque identifier
    pub id: String,
    /// Origin label
    pub from: String,
    /// Destination label
    pub to: String,
    /// Trip date
    pub date: NaiveDate,
    /// Mode used
    pub mode: ModeId,
    /// Profile used
    pub profile: String,
    /// Trip duration in minutes
    pub duration: u32,
}

impl HistoryEntry {
    /// Date label such as "Apr 10, 2025"
    pub fn formatted_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}

/// Mode filter for the history list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HistoryFilter {
    /// Every entry
    #[default]
    All,
    /// Entries whose mode equals this one
    Mode(ModeId),
}

impl HistoryFilter {
    /// Filter tabs in display order
    pub fn tabs() -> [HistoryFilter; 5] {
        [
            HistoryFilter::All,
            HistoryFilter::Mode(ModeId::Walking),
            HistoryFilter::Mode(ModeId::Cycling),
            HistoryFilter::Mode(ModeId::Car),
            HistoryFilter::Mode(ModeId::Transit),
        ]
    }

    /// Tab key (`all` or a mode key)
    pub fn key(&self) -> &'static str {
        match self {
            HistoryFilter::All => "all",
            HistoryFilter::Mode(mode) => mode.as_str(),
        }
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            HistoryFilter::All => "All",
            HistoryFilter::Mode(mode) => mode.display_name(),
        }
    }

    /// Exact-match test against an entry
    pub fn matches(&self, entry: &HistoryEntry) -> bool {
        match self {
            HistoryFilter::All => true,
            HistoryFilter::Mode(mode) => entry.mode == *mode,
        }
    }
}

impl FromStr for HistoryFilter {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(HistoryFilter::All)
        } else {
            s.parse().map(HistoryFilter::Mode)
        }
    }
}
