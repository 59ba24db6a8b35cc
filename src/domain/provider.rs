// src/domain/provider.rs

use crate::domain::folder::Folder;
use crate::errors::ServerError;

/// Read-only source of monitored folders for a board.
/// Views depend on this, never on where the folders come from.
pub trait FolderProvider {
    fn list_folders(&self) -> Result<Vec<Folder>, ServerError>;
}

/// Fixed in-memory folders.
#[cfg(test)]
pub struct StaticFolders(pub Vec<Folder>);

#[cfg(test)]
impl FolderProvider for StaticFolders {
    fn list_folders(&self) -> Result<Vec<Folder>, ServerError> {
        Ok(self.0.clone())
    }
}
