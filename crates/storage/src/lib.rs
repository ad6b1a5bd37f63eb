use domain::Comment;

mod session;

pub use session::SessionStore;

/// 快照存储端口：整存整取，从不部分更新。
/// 写操作成功后只做 invalidate，下一次加载重新向服务端取真相。
pub trait SnapshotStore {
    /// 读取快照；槽位为空或内容损坏时返回 None，从不失败。
    fn get(&self) -> Option<Vec<Comment>>;

    /// 用一次成功拉取的完整列表覆盖槽位。
    fn replace(&self, comments: &[Comment]);

    /// 清空槽位（写成功之后调用，失败的写不触碰缓存）。
    fn invalidate(&self);
}

impl<T: SnapshotStore + ?Sized> SnapshotStore for std::sync::Arc<T> {
    fn get(&self) -> Option<Vec<Comment>> {
        (**self).get()
    }

    fn replace(&self, comments: &[Comment]) {
        (**self).replace(comments)
    }

    fn invalidate(&self) {
        (**self).invalidate()
    }
}
