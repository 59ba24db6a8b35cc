pub mod admin;
pub mod dashboard;
pub mod error;
pub mod folders;
pub mod login;
pub mod project;

pub use admin::{admin_page, locked_page, AdminTab, AdminVm};
pub use dashboard::{dashboard_page, export_files, DashboardVm, ExportVm};
pub use error::error_page;
pub use folders::{folders_page, FolderBoardVm};
pub use login::login_page;
pub use project::{project_page, ProjectVm};
