use crate::SnapshotStore;
use domain::Comment;
use std::sync::Mutex;
use tracing::warn;

// 会话级单槽存储，对标浏览器 sessionStorage 的 "comments" 条目：
// 槽内是序列化后的字符串，而不是活对象。
pub struct SessionStore {
    slot: Mutex<Option<String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore for SessionStore {
    fn get(&self) -> Option<Vec<Comment>> {
        let mut slot = self.slot.lock().unwrap();
        let raw = slot.as_deref()?;
        match serde_json::from_str(raw) {
            Ok(comments) => Some(comments),
            Err(e) => {
                // 损坏的槽位视同缺失，顺手清掉，避免反复解析失败
                warn!("cached snapshot is corrupt, dropping it: {}", e);
                *slot = None;
                None
            }
        }
    }

    fn replace(&self, comments: &[Comment]) {
        match serde_json::to_string(comments) {
            Ok(raw) => {
                *self.slot.lock().unwrap() = Some(raw);
            }
            Err(e) => {
                // 宁可空槽，不存半截快照
                warn!("failed to serialize snapshot, leaving slot empty: {}", e);
                *self.slot.lock().unwrap() = None;
            }
        }
    }

    fn invalidate(&self) {
        *self.slot.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Author, CommentId, UserId};

    fn sample_comment(id: u64) -> Comment {
        Comment {
            id: CommentId::new(id),
            body: format!("comment {}", id),
            timestamp: "2024-03-01T12:00:00Z".parse().unwrap(),
            author: Author {
                id: UserId::new(1),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            },
        }
    }

    #[test]
    fn test_replace_then_get() {
        let store = SessionStore::new();
        assert!(store.get().is_none());

        let comments = vec![sample_comment(1), sample_comment(2)];
        store.replace(&comments);

        let cached = store.get().expect("snapshot should be present");
        assert_eq!(cached, comments);
        // get 不消费快照
        assert!(store.get().is_some());
    }

    #[test]
    fn test_invalidate_clears_slot() {
        let store = SessionStore::new();
        store.replace(&[sample_comment(1)]);
        store.invalidate();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_corrupt_slot_treated_as_absent() {
        let store = SessionStore::new();
        *store.slot.lock().unwrap() = Some("{not json".to_string());

        assert!(store.get().is_none());
        // 损坏内容应已被清理
        assert!(store.slot.lock().unwrap().is_none());
    }
}
