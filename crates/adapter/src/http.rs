use async_trait::async_trait;
use domain::protocol::{CommentListResponse, DeleteResponse, SubmitResponse};
use domain::{Comment, CommentId, PostId, SyncError};
use reqwest::multipart::Form;
use tracing::debug;

use crate::traits::CommentApi;

// 原先散落在模板 data-* 属性里的配置，集中成显式结构传入
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub fetch_url: String,
    pub submit_url: String,
    pub delete_url: String,
    pub post_id: PostId,
    // 由外层页面签发，这里原样透传
    pub csrf_token: Option<String>,
}

pub struct HttpCommentApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpCommentApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn with_client(client: reqwest::Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    fn base_form(&self) -> Form {
        let form = Form::new();
        match &self.config.csrf_token {
            Some(token) => form.text("csrfmiddlewaretoken", token.clone()),
            None => form,
        }
    }
}

fn transport(e: reqwest::Error) -> SyncError {
    SyncError::Transport(e.to_string())
}

#[async_trait]
impl CommentApi for HttpCommentApi {
    async fn list(&self) -> Result<Vec<Comment>, SyncError> {
        debug!("fetching comment list from {}", self.config.fetch_url);
        let raw = self
            .client
            .get(&self.config.fetch_url)
            .send()
            .await
            .map_err(transport)?
            .text()
            .await
            .map_err(transport)?;
        decode_list(&raw)
    }

    async fn submit(&self, body: &str) -> Result<Comment, SyncError> {
        let form = self
            .base_form()
            .text("body", body.to_string())
            .text("post_id", self.config.post_id.to_string());

        let raw = self
            .client
            .post(&self.config.submit_url)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?
            .text()
            .await
            .map_err(transport)?;
        decode_submit(&raw)
    }

    async fn delete(&self, id: CommentId) -> Result<(), SyncError> {
        let form = self.base_form().text("comment_id", id.to_string());

        let raw = self
            .client
            .post(&self.config.delete_url)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?
            .text()
            .await
            .map_err(transport)?;
        decode_delete(&raw)
    }
}

// 解码与状态判定是纯函数，和传输层分开，方便单测

fn decode_list(raw: &str) -> Result<Vec<Comment>, SyncError> {
    let resp: CommentListResponse =
        serde_json::from_str(raw).map_err(|e| SyncError::Decode(e.to_string()))?;
    if !resp.is_success() {
        return Err(SyncError::Api {
            status: resp.status,
        });
    }
    Ok(resp.comments)
}

fn decode_submit(raw: &str) -> Result<Comment, SyncError> {
    let resp: SubmitResponse =
        serde_json::from_str(raw).map_err(|e| SyncError::Decode(e.to_string()))?;
    if !resp.is_success() {
        return Err(SyncError::Api {
            status: resp.status,
        });
    }
    // status 成功但缺 comment 字段：渲染前置条件被破坏
    resp.comment.ok_or(SyncError::MissingField("comment"))
}

fn decode_delete(raw: &str) -> Result<(), SyncError> {
    let resp: DeleteResponse =
        serde_json::from_str(raw).map_err(|e| SyncError::Decode(e.to_string()))?;
    if !resp.is_success() {
        return Err(SyncError::Api {
            status: resp.status,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_list_success() {
        let raw = r#"{
            "status": "success",
            "comments": [
                {
                    "id": 11,
                    "body": "first",
                    "timestamp": "2024-03-01T09:00:00Z",
                    "user_from": { "id": 5, "first_name": "Grace", "last_name": "Hopper" }
                },
                {
                    "id": 12,
                    "body": "second",
                    "timestamp": "2024-03-01T10:00:00Z",
                    "user_from": { "id": 6, "first_name": "Alan", "last_name": "Turing" }
                }
            ]
        }"#;

        let comments = decode_list(raw).unwrap();
        assert_eq!(comments.len(), 2);
        // 服务端顺序原样保留
        assert_eq!(comments[0].id, CommentId::new(11));
        assert_eq!(comments[1].id, CommentId::new(12));
    }

    #[test]
    fn test_decode_list_application_failure() {
        let err = decode_list(r#"{"status": "error"}"#).unwrap_err();
        assert!(matches!(err, SyncError::Api { status } if status == "error"));
    }

    #[test]
    fn test_decode_list_garbage_is_decode_error() {
        let err = decode_list("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, SyncError::Decode(_)));
    }

    #[test]
    fn test_decode_submit_requires_comment_payload() {
        let err = decode_submit(r#"{"status": "success"}"#).unwrap_err();
        assert!(matches!(err, SyncError::MissingField("comment")));

        let raw = r#"{
            "status": "success",
            "comment": {
                "id": 99,
                "body": "fresh",
                "timestamp": "2024-03-02T08:00:00Z",
                "user_from": { "id": 5, "first_name": "Grace", "last_name": "Hopper" }
            }
        }"#;
        let comment = decode_submit(raw).unwrap();
        assert_eq!(comment.id, CommentId::new(99));
    }

    #[test]
    fn test_decode_delete() {
        assert!(decode_delete(r#"{"status": "success"}"#).is_ok());
        let err = decode_delete(r#"{"status": "forbidden"}"#).unwrap_err();
        assert!(matches!(err, SyncError::Api { status } if status == "forbidden"));
    }
}
