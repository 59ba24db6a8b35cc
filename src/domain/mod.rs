pub mod changes;
pub mod date_range;
pub mod disclosure;
pub mod disk;
pub mod folder;
pub mod folder_card;
pub mod provider;
pub mod quick_action;
