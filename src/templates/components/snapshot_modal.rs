use crate::db::snapshots::SnapshotFrequency;
use crate::domain::disk::Disk;
use maud::{html, Markup};

/// Snapshot settings dialog. The form posts to `/snapshots` and the toast
/// comes back into `#toasts`.
pub fn snapshot_modal(disks: &[Disk], default_path: &str) -> Markup {
    html! {
        details class="modal" {
            summary class="button" { "Snapshot settings" }
            form
                method="post"
                action="/snapshots"
                hx-post="/snapshots"
                hx-target="#toasts"
                hx-swap="beforeend"
                class="stack"
            {
                h3 { "Snapshot settings" }

                label for="snapshot-disk" { "Disk" }
                select id="snapshot-disk" name="disk" {
                    @for disk in disks {
                        option value=(disk.id) { (disk.name) " (" (disk.kind) ")" }
                    }
                }

                label for="snapshot-path" { "Folder path" }
                input id="snapshot-path" name="path" type="text" value=(default_path) required;

                label for="snapshot-frequency" { "Frequency" }
                select id="snapshot-frequency" name="frequency" {
                    @for freq in SnapshotFrequency::ALL {
                        option value=(freq.code()) selected[freq == SnapshotFrequency::Daily] { (freq.label()) }
                    }
                }

                button type="submit" class="primary" { "Save settings" }
            }
        }
    }
}
