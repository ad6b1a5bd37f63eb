use crate::render::CommentNode;
use domain::CommentId;

// 页面侧状态的替身：有序的评论节点 + 可见计数器。
//
// 计数器是独立的乐观估计，不从节点列表推导：
// 只有网络拉取路径会把它校准为列表长度，缓存命中不会；
// 提交/删除只做 ±1。在下一次网络拉取前它可能与真相漂移。
pub struct CommentsView {
    nodes: Vec<CommentNode>,
    counter: i64,
}

impl CommentsView {
    pub fn new(initial_count: i64) -> Self {
        Self {
            nodes: Vec::new(),
            counter: initial_count,
        }
    }

    pub fn counter(&self) -> i64 {
        self.counter
    }

    pub fn nodes(&self) -> &[CommentNode] {
        &self.nodes
    }

    pub fn contains(&self, id: CommentId) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn html(&self) -> String {
        self.nodes.iter().map(|n| n.html.as_str()).collect()
    }

    // 整页重绘（页面激活时），不累积上一次的节点
    pub(crate) fn repaint(&mut self, nodes: Vec<CommentNode>) {
        self.nodes = nodes;
    }

    pub(crate) fn append(&mut self, node: CommentNode) {
        self.nodes.push(node);
    }

    // 按 id 独立移除，节点不存在时为 no-op
    pub(crate) fn remove(&mut self, id: CommentId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        self.nodes.len() != before
    }

    pub(crate) fn set_counter(&mut self, n: i64) {
        self.counter = n;
    }

    pub(crate) fn bump_counter(&mut self, delta: i64) {
        self.counter += delta;
    }
}
