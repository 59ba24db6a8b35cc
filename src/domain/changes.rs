// src/domain/changes.rs

use crate::errors::ServerError;
use serde::Serialize;

/// What happened to a file between two snapshots of a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChangeKind {
    #[serde(rename = "add")]
    Added,
    #[serde(rename = "mod")]
    Modified,
    #[serde(rename = "del")]
    Deleted,
}

impl ChangeKind {
    pub const ALL: [ChangeKind; 3] = [ChangeKind::Added, ChangeKind::Modified, ChangeKind::Deleted];

    /// Short code used in query strings and the `changes.kind` column.
    pub fn code(self) -> &'static str {
        match self {
            ChangeKind::Added => "add",
            ChangeKind::Modified => "mod",
            ChangeKind::Deleted => "del",
        }
    }

    pub fn parse(code: &str) -> Result<Self, ServerError> {
        match code {
            "add" => Ok(ChangeKind::Added),
            "mod" => Ok(ChangeKind::Modified),
            "del" => Ok(ChangeKind::Deleted),
            other => Err(ServerError::BadRequest(format!("unknown change kind: {other}"))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Modified => "modified",
            ChangeKind::Deleted => "deleted",
        }
    }
}

/// A single file-level event inside a folder's change history.
/// Records are append-only; views only ever filter them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    pub id: i64,
    pub name: String,
    pub kind: ChangeKind,
    /// Relative display string ("12 minutes ago"), not an instant.
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterSelection {
    #[default]
    All,
    Kind(ChangeKind),
}

impl FilterSelection {
    pub fn code(self) -> &'static str {
        match self {
            FilterSelection::All => "all",
            FilterSelection::Kind(kind) => kind.code(),
        }
    }

    /// Missing or empty codes mean `All`.
    pub fn parse(code: Option<&str>) -> Result<Self, ServerError> {
        match code {
            None | Some("") | Some("all") => Ok(FilterSelection::All),
            Some(other) => ChangeKind::parse(other).map(FilterSelection::Kind),
        }
    }

    pub fn matches(self, kind: ChangeKind) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Kind(selected) => selected == kind,
        }
    }
}

/// Records of `history` matching `selection`, in their original order.
pub fn filter_updates(history: &[ChangeRecord], selection: FilterSelection) -> Vec<&ChangeRecord> {
    history
        .iter()
        .filter(|record| selection.matches(record.kind))
        .collect()
}
