// src/domain/quick_action.rs

/// One of the dashboard shortcut buttons. Running one only raises a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub slug: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        slug: "scan",
        label: "Scan disks",
        hint: "Update the index",
    },
    QuickAction {
        slug: "large-files",
        label: "Find large files",
        hint: "What takes the space",
    },
    QuickAction {
        slug: "clean",
        label: "Clean junk",
        hint: "Free up space",
    },
    QuickAction {
        slug: "browse",
        label: "Browse folders",
        hint: "Browse and manage",
    },
];

pub fn find_action(slug: &str) -> Option<QuickAction> {
    QUICK_ACTIONS.into_iter().find(|a| a.slug == slug)
}

impl QuickAction {
    pub fn notice(&self) -> String {
        format!("Running: {}", self.label)
    }
}
