use adapter::{ApiConfig, HttpCommentApi};
use anyhow::Context;
use domain::{PostId, UserId};
use dotenvy::dotenv;
use storage::SessionStore;
use widget::{CommentsWidget, Settings, WidgetConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = Settings::new().context("Failed to load configuration")?;

    let api = HttpCommentApi::new(ApiConfig {
        fetch_url: settings.endpoints.fetch_url.clone(),
        submit_url: settings.endpoints.submit_url.clone(),
        delete_url: settings.endpoints.delete_url.clone(),
        post_id: PostId::new(settings.page.post_id),
        csrf_token: settings.endpoints.csrf_token.clone(),
    });

    let mut w = CommentsWidget::new(
        SessionStore::new(),
        api,
        WidgetConfig {
            viewing_user_id: UserId::new(settings.page.viewing_user_id),
            initial_count: settings.page.initial_count,
        },
    );

    println!("Starting kommento demo client...");

    println!("\n[1/4] Initial load (cache miss, goes to network)...");
    w.load().await?;
    println!("   -> {} comment(s), counter = {}", w.view().nodes().len(), w.view().counter());

    println!("\n[2/4] Submitting a comment...");
    let id = w.submit("Hello from the kommento demo client!").await?;
    println!("   -> Accepted with id {}", id);
    println!("   -> Counter = {} (cache invalidated)", w.view().counter());

    println!("\n[3/4] Reloading (cache is empty again, fetches truth)...");
    w.load().await?;
    println!("   -> {} comment(s), counter = {}", w.view().nodes().len(), w.view().counter());

    println!("\n[4/4] Deleting the comment we just posted...");
    w.delete(id).await?;
    println!("   -> Counter = {}", w.view().counter());

    println!("\nRendered fragment:\n{}", w.view().html());

    Ok(())
}
