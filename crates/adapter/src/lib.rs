mod http;
mod traits;

pub use http::{ApiConfig, HttpCommentApi};
pub use traits::CommentApi;
