mod error;
mod models;
pub mod protocol;

pub use error::SyncError;
pub use models::{Author, Comment, CommentId, PostId, UserId};
