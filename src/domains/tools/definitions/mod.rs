//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod assets;
mod common;
pub mod folders;

pub use assets::{
    DeleteAssetParams, DeleteAssetTool, FileType, ListAssetsParams, ListAssetsTool, MimeType,
    UploadAssetParams, UploadAssetTool,
};
pub use common::{MAX_LIST_LIMIT, error_result, success_result};
pub use folders::{
    CreateFolderParams, CreateFolderTool, ListFoldersParams, ListFoldersTool, ProjectType,
    RestoreFolderParams, RestoreFolderTool, TrashFolderParams, TrashFolderTool,
    UpdateFolderParams, UpdateFolderTool,
};
