pub mod card;
pub mod folder_card;
pub mod login_form;
pub mod snapshot_modal;
pub mod toast;

pub use card::{card, meter};
pub use folder_card::{folder_card, folder_grid};
pub use login_form::login_form;
pub use snapshot_modal::snapshot_modal;
pub use toast::{toast, toasts, Toast};
