//! Folder management tools.

mod create;
mod list;
mod restore;
mod trash;
mod update;

pub use create::{CreateFolderParams, CreateFolderTool, ProjectType};
pub use list::{ListFoldersParams, ListFoldersTool};
pub use restore::{RestoreFolderParams, RestoreFolderTool};
pub use trash::{TrashFolderParams, TrashFolderTool};
pub use update::{UpdateFolderParams, UpdateFolderTool};
