use adapter::CommentApi;
use chrono::Utc;
use domain::{CommentId, SyncError, UserId};
use storage::SnapshotStore;
use tracing::{debug, info, warn};

use crate::render::{render_comment, render_list};
use crate::view::CommentsView;

#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub viewing_user_id: UserId,
    // 模板里已经渲染出来的初始计数
    pub initial_count: i64,
}

// 单篇文章的评论区。store 和 api 都是注入的端口，便于替换和测试。
//
// 一致性约定：任何一次成功的写（提交/删除）只做乐观 DOM 更新
// 并 invalidate 缓存，从不就地修补快照；失败的写不碰任何状态。
pub struct CommentsWidget<S, A> {
    store: S,
    api: A,
    view: CommentsView,
    viewer: UserId,
}

impl<S: SnapshotStore, A: CommentApi> CommentsWidget<S, A> {
    pub fn new(store: S, api: A, config: WidgetConfig) -> Self {
        Self {
            store,
            api,
            view: CommentsView::new(config.initial_count),
            viewer: config.viewing_user_id,
        }
    }

    pub fn view(&self) -> &CommentsView {
        &self.view
    }

    /// 页面激活时调用一次：命中缓存直接重绘（零网络请求），
    /// 否则走网络、回填缓存、把计数器校准为列表长度。
    pub async fn load(&mut self) -> Result<(), SyncError> {
        if let Some(cached) = self.store.get() {
            debug!("cache hit, repainting {} comments", cached.len());
            let nodes = render_list(&cached, self.viewer, Utc::now());
            self.view.repaint(nodes);
            return Ok(());
        }

        match self.api.list().await {
            Ok(comments) => {
                info!("fetched {} comments", comments.len());
                self.store.replace(&comments);
                self.view.set_counter(comments.len() as i64);
                let nodes = render_list(&comments, self.viewer, Utc::now());
                self.view.repaint(nodes);
                Ok(())
            }
            Err(e) => {
                // 不重试也不回滚：本次页面没有评论列表而已
                warn!("failed to fetch comments: {}", e);
                Err(e)
            }
        }
    }

    /// 提交新评论。不做乐观预渲染，等服务端确认（带回 id 和
    /// 时间戳）后才追加节点、计数 +1、清缓存。
    pub async fn submit(&mut self, body: &str) -> Result<CommentId, SyncError> {
        match self.api.submit(body).await {
            Ok(comment) => {
                let node = render_comment(&comment, self.viewer, Utc::now());
                let id = node.id;
                info!("comment {} accepted", id);
                self.view.append(node);
                self.view.bump_counter(1);
                self.store.invalidate();
                Ok(id)
            }
            Err(e) => {
                warn!("failed to submit comment: {}", e);
                Err(e)
            }
        }
    }

    /// 删除评论。控件只对作者可见，但这里不做归属校验——
    /// 那是服务端的安全边界，客户端的隐藏只是 UI 行为。
    pub async fn delete(&mut self, id: CommentId) -> Result<(), SyncError> {
        match self.api.delete(id).await {
            Ok(()) => {
                info!("comment {} deleted", id);
                self.view.remove(id);
                self.view.bump_counter(-1);
                self.store.invalidate();
                Ok(())
            }
            Err(e) => {
                warn!("failed to delete comment {}: {}", id, e);
                Err(e)
            }
        }
    }
}
