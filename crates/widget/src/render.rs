use chrono::{DateTime, Utc};
use domain::{Comment, CommentId, UserId};

// 渲染出的单个评论卡片。html 为可直接插入页面的片段，
// 节点用 comment id 打标，删除流程靠它定位。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentNode {
    pub id: CommentId,
    // 是否带删除入口（仅当 viewer 是作者）
    pub deletable: bool,
    pub html: String,
}

// 纯映射：同一输入永远产出同一片段，去重是调用方的责任。
pub fn render_comment(comment: &Comment, viewer: UserId, now: DateTime<Utc>) -> CommentNode {
    let deletable = comment.is_owned_by(viewer);

    // 正文按不可信内容处理；作者名和时间只做转义
    let body = ammonia::clean(&comment.body);
    let name = ammonia::clean_text(&comment.author.full_name());
    let when = ammonia::clean_text(&relative_time(comment.timestamp, now));

    let delete_form = if deletable {
        format!(
            concat!(
                r#"<form class="delete-comment-form" method="post" data-commentid="{id}">"#,
                r#"<button type="submit" class="btn btn-sm btn-link text-danger">Delete</button>"#,
                "</form>"
            ),
            id = comment.id
        )
    } else {
        String::new()
    };

    let html = format!(
        concat!(
            r#"<div class="card mb-2" id="comment-{id}">"#,
            r#"<div class="card-header">"#,
            r#"<p class="m-0">By <b>{name}</b> <em class="float-right">{when}</em></p>"#,
            "</div>",
            r#"<div class="card-body">{body}</div>"#,
            "{delete_form}",
            "</div>"
        ),
        id = comment.id,
        name = name,
        when = when,
        body = body,
        delete_form = delete_form,
    );

    CommentNode {
        id: comment.id,
        deletable,
        html,
    }
}

pub fn render_list(comments: &[Comment], viewer: UserId, now: DateTime<Utc>) -> Vec<CommentNode> {
    comments
        .iter()
        .map(|c| render_comment(c, viewer, now))
        .collect()
}

// 相对时间展示，超过一周退化为日期
pub fn relative_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(ts);
    let secs = delta.num_seconds();

    if secs < 60 {
        // 时钟偏差导致的"未来"时间也归到这里
        return "just now".to_string();
    }

    let minutes = delta.num_minutes();
    if minutes < 60 {
        return if minutes == 1 {
            "1 minute ago".to_string()
        } else {
            format!("{} minutes ago", minutes)
        };
    }

    let hours = delta.num_hours();
    if hours < 24 {
        return if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        };
    }

    let days = delta.num_days();
    if days < 7 {
        return if days == 1 {
            "1 day ago".to_string()
        } else {
            format!("{} days ago", days)
        };
    }

    ts.format("%d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use domain::Author;

    fn comment(id: u64, author_id: u64, body: &str) -> Comment {
        Comment {
            id: CommentId::new(id),
            body: body.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            author: Author {
                id: UserId::new(author_id),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            },
        }
    }

    #[test]
    fn test_ownership_gates_delete_control() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 5, 0).unwrap();
        let viewer = UserId::new(3);

        let own = render_comment(&comment(1, 3, "mine"), viewer, now);
        assert!(own.deletable);
        assert!(own.html.contains("delete-comment-form"));
        assert!(own.html.contains(r#"data-commentid="1""#));

        let other = render_comment(&comment(2, 4, "theirs"), viewer, now);
        assert!(!other.deletable);
        assert!(!other.html.contains("delete-comment-form"));
    }

    #[test]
    fn test_node_is_tagged_with_comment_id() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 5, 0).unwrap();
        let node = render_comment(&comment(42, 1, "x"), UserId::new(9), now);
        assert_eq!(node.id, CommentId::new(42));
        assert!(node.html.contains(r#"id="comment-42""#));
    }

    #[test]
    fn test_body_is_sanitized() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 5, 0).unwrap();
        let node = render_comment(
            &comment(1, 1, r#"<script>alert(1)</script><b>bold</b>"#),
            UserId::new(2),
            now,
        );
        assert!(!node.html.contains("<script>"));
        assert!(node.html.contains("<b>bold</b>"));
    }

    #[test]
    fn test_author_name_is_escaped() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 5, 0).unwrap();
        let mut c = comment(1, 1, "hi");
        c.author.first_name = "<img src=x onerror=alert(1)>".to_string();
        let node = render_comment(&c, UserId::new(2), now);
        assert!(!node.html.contains("<img"));
    }

    #[test]
    fn test_relative_time_buckets() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let at = |s| ts + chrono::Duration::seconds(s);

        assert_eq!(relative_time(ts, at(5)), "just now");
        assert_eq!(relative_time(ts, at(60)), "1 minute ago");
        assert_eq!(relative_time(ts, at(180)), "3 minutes ago");
        assert_eq!(relative_time(ts, at(3600)), "1 hour ago");
        assert_eq!(relative_time(ts, at(7200)), "2 hours ago");
        assert_eq!(relative_time(ts, at(86400)), "1 day ago");
        assert_eq!(relative_time(ts, at(86400 * 3)), "3 days ago");
        assert_eq!(relative_time(ts, at(86400 * 30)), "01 Mar 2024");
        // 未来时间戳不 panic
        assert_eq!(relative_time(ts, ts - chrono::Duration::seconds(30)), "just now");
    }

    #[test]
    fn test_render_is_pure() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 5, 0).unwrap();
        let c = comment(1, 1, "same");
        let a = render_comment(&c, UserId::new(1), now);
        let b = render_comment(&c, UserId::new(1), now);
        assert_eq!(a, b);
    }
}
