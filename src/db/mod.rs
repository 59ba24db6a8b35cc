pub mod activity;
pub mod boards;
pub mod connection;
pub mod disks;
pub mod exports;
pub mod folders;
pub mod snapshots;
pub mod users;

pub use connection::Database;
