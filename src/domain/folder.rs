// src/domain/folder.rs

use crate::domain::changes::{ChangeKind, ChangeRecord};
use serde::Serialize;

/// A monitored folder as shown on a board.
#[derive(Debug, Clone, Serialize)]
pub struct Folder {
    pub id: i64,
    pub name: String,
    pub path: String,
    pub files: i64,
    pub size_bytes: i64,
    /// When the latest snapshot was taken, as a display string.
    pub time: String,
    /// Oldest first.
    pub recent_updates: Vec<ChangeRecord>,
}

impl Folder {
    /// Opaque token handed back to `refresh` / `open`.
    pub fn identifier(&self) -> String {
        self.id.to_string()
    }

    pub fn count(&self, kind: ChangeKind) -> usize {
        self.recent_updates.iter().filter(|r| r.kind == kind).count()
    }

    /// Case-insensitive substring match on name or path.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty() || self.name.to_lowercase().contains(&q) || self.path.to_lowercase().contains(&q)
    }
}

pub fn search_folders(folders: Vec<Folder>, query: &str) -> Vec<Folder> {
    folders.into_iter().filter(|f| f.matches_query(query)).collect()
}

/// Human readable size, e.g. "4.23 GB" or "366.48 MB".
pub fn format_bytes(bytes: i64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes.max(0) as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes.max(0))
    } else {
        format!("{value:.2} {}", UNITS[unit])
    }
}

/// How a board arranges its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardLayout {
    #[default]
    Grid,
    List,
}

impl BoardLayout {
    pub fn code(self) -> &'static str {
        match self {
            BoardLayout::Grid => "grid",
            BoardLayout::List => "list",
        }
    }

    /// Anything unrecognised falls back to the grid.
    pub fn parse(code: Option<&str>) -> Self {
        match code {
            Some("list") => BoardLayout::List,
            _ => BoardLayout::Grid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIcon {
    Image,
    Video,
    Text,
    Generic,
}

impl FileIcon {
    pub fn for_name(name: &str) -> Self {
        let ext = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "jpg" | "png" | "exr" => FileIcon::Image,
            "mp4" | "mov" => FileIcon::Video,
            "txt" | "csv" => FileIcon::Text,
            _ => FileIcon::Generic,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            FileIcon::Image => "icon-image",
            FileIcon::Video => "icon-video",
            FileIcon::Text => "icon-text",
            FileIcon::Generic => "icon-file",
        }
    }
}
