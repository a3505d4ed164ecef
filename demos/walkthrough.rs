//! Shorten a link, visit it, and print the dashboard, using the on-disk slot
//! and the configured telemetry collector.
//!
//! ```sh
//! RUST_LOG=linklet=debug cargo run --example walkthrough -- https://www.rust-lang.org
//! ```

use linklet::{
    auth::SharedIdentity,
    config::AppConfig,
    handlers::{self, ShortenForm},
    navigation::TracingNavigator,
    App,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (ignore error if file is absent, env vars may already be set)
    dotenvy::dotenv().ok();
    linklet::init_tracing();

    let config = AppConfig::from_env()?;
    let identity = SharedIdentity::default();
    identity.login(std::env::var("USER").unwrap_or_else(|_| "demo".into()));

    let mut app = App::from_config(config, identity, TracingNavigator)?;

    let mut form = ShortenForm::new(app.config.default_validity_days);
    form.url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://www.rust-lang.org".into());

    let created = handlers::shorten(&mut app, &mut form);
    println!("{}", created.flash.message());

    if let Some(row) = created.link {
        println!("{} -> {} (valid till {})", row.short_url, row.original_url, row.expiry);
        let visited = handlers::visit(&mut app, &row.code);
        println!("{}", visited.flash.message());
    }

    for row in handlers::dashboard(&app) {
        let state = if row.expired { "expired" } else { "active" };
        println!(
            "{:<40} {:>5} clicks  {:<8} {}",
            row.short_url, row.clicks, state, row.original_url
        );
    }

    // Give in-flight telemetry a moment before the runtime shuts down.
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;
    Ok(())
}
