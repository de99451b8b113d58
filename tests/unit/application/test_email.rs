use crate::common::{TEST_API_KEY, create_logged_client, create_test_client, email_options};
use assert_json_diff::assert_json_eq;
use mockito::Matcher;
use serde_json::json;
use skrybe_client::prelude::*;

#[tokio::test]
async fn send_email_returns_parsed_json() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/emails/send.php")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_header("user-agent", Matcher::Regex("^SkrybeSDK-Rust/".to_string()))
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(format!("^api_key={TEST_API_KEY}&")),
            Matcher::UrlEncoded("from_name".into(), "Test Name".into()),
            Matcher::UrlEncoded("from_email".into(), "test@example.com".into()),
            Matcher::UrlEncoded("reply_to".into(), "reply@example.com".into()),
            Matcher::UrlEncoded("subject".into(), "Test Subject".into()),
            Matcher::UrlEncoded("html_text".into(), "<p>Test Content</p>".into()),
            Matcher::UrlEncoded("to".into(), r#"["recipient@example.com"]"#.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let result = client.send_email(&email_options()).await.unwrap();

    mock.assert_async().await;
    assert_json_eq!(result.as_json().unwrap(), json!({"success": true}));
    assert!(result.is_success());
}

#[tokio::test]
async fn send_email_omits_absent_options_and_encodes_flags() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/emails/send.php")
        .match_body(Matcher::Exact(
            "api_key=test-api-key\
             &from_name=Team\
             &from_email=team%40example.com\
             &subject=Hi\
             &html_text=%3Cp%3Ex%3C%2Fp%3E\
             &list_ids=list-1%2Clist-2\
             &query_string=utm_source%3Dskrybe\
             &track_opens=1\
             &track_clicks=0"
                .to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;

    let options = SendEmailOptions::new("Team", "team@example.com", "Hi", "<p>x</p>")
        .with_list_ids(vec!["list-1".to_string(), "list-2".to_string()])
        .with_track_opens(true)
        .with_track_clicks(false)
        .with_query_string("utm_source=skrybe");

    let client = create_test_client(&server.url());
    client.send_email(&options).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn send_email_reports_every_missing_field() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let err = client
        .send_email(&SendEmailOptions::default())
        .await
        .unwrap_err();

    mock.assert_async().await;
    let validation = err.as_validation().expect("validation error");
    let fields: Vec<&str> = validation.fields().collect();
    assert_eq!(fields, vec!["fromName", "fromEmail", "subject", "htmlText"]);
    assert_eq!(
        validation.field("htmlText"),
        Some("Field 'htmlText' is required")
    );
}

#[tokio::test]
async fn send_email_invalid_sender_preempts_missing_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let options = SendEmailOptions {
        from_email: "not-an-email".to_string(),
        ..Default::default()
    };

    let client = create_test_client(&server.url());
    let err = client.send_email(&options).await.unwrap_err();

    mock.assert_async().await;
    let validation = err.as_validation().expect("validation error");
    assert_eq!(validation.errors().len(), 1);
    assert_eq!(validation.field("fromEmail"), Some("Invalid email format"));
}

#[tokio::test]
async fn send_email_names_first_invalid_recipient() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let options = email_options().with_to(vec![
        "ok@example.com".to_string(),
        "broken@".to_string(),
        "also broken".to_string(),
    ]);

    let client = create_test_client(&server.url());
    let err = client.send_email(&options).await.unwrap_err();

    mock.assert_async().await;
    let validation = err.as_validation().expect("validation error");
    assert_eq!(validation.field("to"), Some("Invalid email format: broken@"));
    assert_eq!(validation.errors().len(), 1);
}

#[tokio::test]
async fn send_email_logs_request_and_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/emails/send.php")
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;

    let (client, logger) = create_logged_client(&server.url());
    client.send_email(&email_options()).await.unwrap();

    let entries = logger.entries();
    assert_eq!(logger.levels(), vec![LogLevel::Info, LogLevel::Debug]);

    let (_, message, context) = &entries[0];
    assert_eq!(message, "Making request to /api/emails/send.php");
    assert_eq!(context["endpoint"], "/api/emails/send.php");
    assert_eq!(context["data"]["subject"], "Test Subject");
    assert!(context["data"].get("api_key").is_none());

    let (_, message, context) = &entries[1];
    assert_eq!(message, "Response received");
    assert_json_eq!(context["response"], json!({"success": true}));
}
