mod config;
mod render;
mod view;
mod widget;

pub use config::Settings;
pub use render::{relative_time, render_comment, render_list, CommentNode};
pub use view::CommentsView;
pub use widget::{CommentsWidget, WidgetConfig};
