/// Example covering error handling, scheduling and subscriber management
///
/// Configure via environment variables or a `.env` file:
/// - SKRYBE_API_KEY
/// - SKRYBE_BASE_URL (default: https://dashboard.skry.be)
/// - SKRYBE_MIN_REQUEST_INTERVAL_MS (default: 100)
///
/// Run with: cargo run --bin advanced_usage
use chrono::{Duration, Utc};
use serde_json::json;
use skrybe_client::prelude::*;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

fn template(name: &str) -> std::io::Result<String> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("templates")
        .join(name);
    std::fs::read_to_string(path)
}

fn report(context: &str, e: &AppError) {
    match e {
        AppError::Validation(v) => {
            warn!("{context}: validation error");
            for field in v.errors() {
                warn!("  {field}");
            }
        }
        AppError::Transport(t) => error!("{context}: {} (code {})", t.message(), t.code()),
        other => error!("{context}: {other}"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::from_config(Config::from_env())?.with_logger(Arc::new(TracingLogger));

    // Example 1: send an email with error handling
    let email = SendEmailOptions::new(
        "Newsletter Team",
        "newsletter@yourdomain.com",
        "Welcome to Our Newsletter!",
        template("welcome.html")?,
    )
    .with_reply_to("support@yourdomain.com")
    .with_to(vec!["user@example.com".to_string()])
    .with_track_opens(true)
    .with_track_clicks(true);

    match client.send_email(&email).await {
        Ok(result) => info!("Email sent successfully: {result}"),
        Err(e) => report("Failed to send email", &e),
    }

    // Example 2: create a campaign for the first list, scheduled for tomorrow
    match client.get_lists(false).await {
        Ok(lists) => {
            let first = lists
                .get("lists")
                .and_then(|l| l.as_array())
                .and_then(|l| l.first())
                .and_then(|l| l.get("id"))
                .and_then(|id| id.as_str());

            if let Some(list_id) = first {
                let tomorrow = (Utc::now() + Duration::days(1)).naive_utc();
                let campaign = CreateCampaignOptions::new(
                    "Newsletter Team",
                    "newsletter@yourdomain.com",
                    format!("Monthly Newsletter - {}", Utc::now().format("%B %Y")),
                    "Your Monthly Update Is Here!",
                    template("monthly.html")?,
                )
                .with_reply_to("support@yourdomain.com")
                .with_list_ids(vec![list_id.to_string()])
                .with_track_opens(true)
                .with_track_clicks(true)
                .with_schedule(tomorrow, "UTC");

                match client.create_campaign(&campaign).await {
                    Ok(result) => info!("Campaign scheduled successfully: {result}"),
                    Err(e) => report("Failed to create campaign", &e),
                }
            } else {
                warn!("No lists available, skipping campaign");
            }
        }
        Err(e) => report("Failed to fetch lists", &e),
    }

    // Example 3: manage subscribers
    let subscriber = RequestOptions::try_from(json!({
        "email": "new.subscriber@example.com",
        "name": "John Doe",
        "custom_fields": {"company": "Acme Inc", "role": "Developer"}
    }))?;

    match client.add_subscriber("list-id-here", subscriber).await {
        Ok(result) => info!("Subscriber added: {result}"),
        Err(e) => report("Failed to add subscriber", &e),
    }

    let active = client
        .get_subscribers("list-id-here", &PageQuery::new().with_limit(50).with_status("active"))
        .await;
    match active {
        Ok(result) => info!("Active subscribers: {result}"),
        Err(e) => report("Failed to fetch subscribers", &e),
    }

    Ok(())
}
