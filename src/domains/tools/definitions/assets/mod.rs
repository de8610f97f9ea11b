//! Asset management tools.

mod delete;
mod list;
mod upload;

pub use delete::{DeleteAssetParams, DeleteAssetTool};
pub use list::{FileType, ListAssetsParams, ListAssetsTool};
pub use upload::{MimeType, UploadAssetParams, UploadAssetTool};
