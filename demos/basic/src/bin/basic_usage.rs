use skrybe_client::prelude::*;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::from_config(Config::from_env())?.with_logger(Arc::new(TracingLogger));

    let email = SendEmailOptions::new(
        "John Doe",
        "john@example.com",
        "Test Email",
        "<h1>Hello World!</h1><p>This is a test email.</p>",
    )
    .with_reply_to("reply@example.com")
    .with_to(vec!["recipient@example.com".to_string()]);

    match client.send_email(&email).await {
        Ok(result) => info!("Email sent: {result}"),
        Err(e) => error!("Failed to send email: {e}"),
    }

    let lists = client.get_lists(false).await?;
    info!("Available lists: {lists}");

    let campaign = CreateCampaignOptions::new(
        "John Doe",
        "john@example.com",
        "Test Campaign",
        "Welcome to Our Newsletter",
        "<h1>Welcome!</h1><p>Thank you for subscribing.</p>",
    )
    .with_reply_to("reply@example.com")
    .with_list_ids(vec!["your-list-id-here".to_string()]);
    let created = client.create_campaign(&campaign).await?;
    info!("Campaign created: {created}");

    let subscribers = client
        .get_subscribers("your-list-id-here", &PageQuery::new().with_page(1).with_limit(10))
        .await?;
    info!("Subscribers: {subscribers}");

    Ok(())
}
