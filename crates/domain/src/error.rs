use thiserror::Error;

// 三类失败（传输失败 / 应用失败 / 成功响应缺字段）统一收口。
// 任何一类发生时，调用方都不得改动缓存、节点列表和计数器。
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("api returned non-success status `{status}`")]
    Api { status: String },

    #[error("success response missing field `{0}`")]
    MissingField(&'static str),

    #[error("failed to decode response: {0}")]
    Decode(String),
}
