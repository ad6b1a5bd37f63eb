use crate::models::Comment;
use serde::{Deserialize, Serialize};

// 后端 AJAX 视图约定的成功标记（大小写敏感）
pub const STATUS_SUCCESS: &str = "success";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentListResponse {
    pub status: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl CommentListResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub status: String,
    // status 为 success 时必须携带新建的评论
    #[serde(default)]
    pub comment: Option<Comment>,
}

impl SubmitResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub status: String,
}

impl DeleteResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}
