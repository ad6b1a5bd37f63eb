use async_trait::async_trait;
use domain::{Comment, CommentId, SyncError};

// 远端评论 API 的端口。挂起点只在这三处：
// 请求发出到回调之间，调用方不得改动任何本地状态。
#[async_trait]
pub trait CommentApi: Send + Sync {
    /// 拉取当前文章的完整评论列表（服务端顺序，客户端不重排）。
    async fn list(&self) -> Result<Vec<Comment>, SyncError>;

    /// 提交新评论；成功时服务端返回带 id 和时间戳的完整评论。
    async fn submit(&self, body: &str) -> Result<Comment, SyncError>;

    /// 删除指定评论。归属校验在服务端，这里只透传 id。
    async fn delete(&self, id: CommentId) -> Result<(), SyncError>;
}

#[async_trait]
impl<T: CommentApi + ?Sized> CommentApi for std::sync::Arc<T> {
    async fn list(&self) -> Result<Vec<Comment>, SyncError> {
        (**self).list().await
    }

    async fn submit(&self, body: &str) -> Result<Comment, SyncError> {
        (**self).submit(body).await
    }

    async fn delete(&self, id: CommentId) -> Result<(), SyncError> {
        (**self).delete(id).await
    }
}
