// src/domain/disk.rs

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Disk {
    pub id: String,
    pub name: String,
    pub kind: String,
    /// Capacity in GB.
    pub total_gb: i64,
    pub used_gb: i64,
    pub color: String,
}

impl Disk {
    pub fn free_gb(&self) -> i64 {
        (self.total_gb - self.used_gb).max(0)
    }

    pub fn percent_used(&self) -> i64 {
        percent(self.used_gb, self.total_gb)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskTotals {
    pub total_gb: i64,
    pub used_gb: i64,
}

impl DiskTotals {
    pub fn of(disks: &[Disk]) -> Self {
        Self {
            total_gb: disks.iter().map(|d| d.total_gb).sum(),
            used_gb: disks.iter().map(|d| d.used_gb).sum(),
        }
    }

    pub fn percent_used(&self) -> i64 {
        percent(self.used_gb, self.total_gb)
    }
}

/// One slice of the space distribution panel.
#[derive(Debug, Clone)]
pub struct UsageCategory {
    pub name: String,
    pub gb: i64,
    pub color: String,
}

pub fn category_total(categories: &[UsageCategory]) -> i64 {
    categories.iter().map(|c| c.gb).sum()
}

/// Rounded percentage; zero when `whole` is zero.
pub fn percent(part: i64, whole: i64) -> i64 {
    if whole <= 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as i64
}

/// GB figures above 1024 are shown in TB with two decimals.
pub fn format_gb(gb: i64) -> String {
    if gb >= 1024 {
        format!("{:.2} TB", gb as f64 / 1024.0)
    } else {
        format!("{gb} GB")
    }
}
