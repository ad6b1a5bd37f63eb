use config::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub endpoints: EndpointSettings,
    pub page: PageSettings,
}

#[derive(Deserialize, Clone)]
pub struct EndpointSettings {
    pub fetch_url: String,
    pub submit_url: String,
    pub delete_url: String,
    // 由外层页面签发的令牌，这里不解释其内容
    pub csrf_token: Option<String>,
}

// 原本由模板 data-* 属性携带的页面上下文
#[derive(Deserialize, Clone)]
pub struct PageSettings {
    pub post_id: u64,
    pub viewing_user_id: u64,
    pub initial_count: i64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        let env_map = collect_env_vars();

        let s = config::Config::builder()
            .set_default("endpoints.fetch_url", "http://127.0.0.1:8000/ajax/comments")?
            .set_default("endpoints.submit_url", "http://127.0.0.1:8000/ajax/comment/add")?
            .set_default(
                "endpoints.delete_url",
                "http://127.0.0.1:8000/ajax/comment/delete",
            )?
            .set_default("page.post_id", 1)?
            .set_default("page.viewing_user_id", 1)?
            .set_default("page.initial_count", 0)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name(&format!("config.{}", run_mode)).required(false))
            .add_source(config::File::from_str(
                &serde_json::to_string(&env_map)
                    .expect("Environment variables should serialize to JSON"),
                config::FileFormat::Json,
            ))
            .build()?;

        s.try_deserialize()
    }
}

fn collect_env_vars() -> HashMap<String, String> {
    std::env::vars()
        .filter(|(k, _)| k.starts_with("KOMMENTO_"))
        .map(|(k, v)| {
            let new_key = k
                .trim_start_matches("KOMMENTO_")
                .replace("__", ".")
                .to_lowercase();
            (new_key, v)
        })
        .collect()
}
