use crate::common::create_test_client;
use mockito::Matcher;
use serde_json::json;
use skrybe_client::prelude::*;

#[tokio::test]
async fn get_lists_preserves_order() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/lists/get-lists.php")
        .match_body("api_key=test-api-key&include_hidden=no")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"lists": [{"id":"list-1","name":"List 1"},{"id":"list-2","name":"List 2"}]}"#,
        )
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let result = client.get_lists(false).await.unwrap();

    mock.assert_async().await;
    let lists = result.get("lists").and_then(|l| l.as_array()).unwrap();
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0]["id"], "list-1");
    assert_eq!(lists[1]["id"], "list-2");
}

#[tokio::test]
async fn get_lists_include_hidden_sends_yes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/lists/get-lists.php")
        .match_body(Matcher::UrlEncoded("include_hidden".into(), "yes".into()))
        .with_status(200)
        .with_body(r#"{"lists": []}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    client.get_lists(true).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn get_subscribers_sends_list_and_paging() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/subscribers/get-subscribers.php")
        .match_body("api_key=test-api-key&list_id=list-123&page=1&limit=10")
        .with_status(200)
        .with_body(
            r#"{"subscribers": [
                {"email": "sub1@example.com", "name": "Sub 1"},
                {"email": "sub2@example.com", "name": "Sub 2"}
            ]}"#,
        )
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let result = client
        .get_subscribers("list-123", &PageQuery::new())
        .await
        .unwrap();

    mock.assert_async().await;
    let subscribers = result.get("subscribers").and_then(|s| s.as_array()).unwrap();
    assert_eq!(subscribers.len(), 2);
    assert_eq!(subscribers[1]["email"], "sub2@example.com");
}

#[tokio::test]
async fn add_subscriber_merges_list_id_first() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/subscribers/add.php")
        .match_body(
            "api_key=test-api-key&list_id=list-123&email=new%40example.com&name=New+Subscriber",
        )
        .with_status(200)
        .with_body(r#"{"success": true, "subscriber_id": "789"}"#)
        .create_async()
        .await;

    let subscriber = RequestOptions::new()
        .with("email", "new@example.com")
        .with("name", "New Subscriber");

    let client = create_test_client(&server.url());
    let result = client.add_subscriber("list-123", subscriber).await.unwrap();

    mock.assert_async().await;
    assert!(result.is_success());
    assert_eq!(result.get("subscriber_id"), Some(&json!("789")));
}

#[tokio::test]
async fn add_subscriber_sends_fields_in_caller_order() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/subscribers/add.php")
        .match_body(Matcher::Exact(
            "api_key=test-api-key\
             &list_id=list-123\
             &name=Zed\
             &email=zed%40example.com\
             &custom_fields=%7B%22score%22%3A1.5%2C%22note%22%3Anull%7D"
                .to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;

    let subscriber = RequestOptions::try_from(json!({
        "name": "Zed",
        "email": "zed@example.com",
        "custom_fields": {"score": 1.5, "note": null}
    }))
    .unwrap();

    let client = create_test_client(&server.url());
    client.add_subscriber("list-123", subscriber).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn add_subscriber_encodes_custom_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/subscribers/add.php")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("list_id".into(), "list-123".into()),
            Matcher::UrlEncoded("email".into(), "jane@example.com".into()),
            Matcher::UrlEncoded("custom_fields".into(), r#"{"plan":"pro","city":"Lyon"}"#.into()),
            Matcher::UrlEncoded("gdpr".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;

    let subscriber = RequestOptions::try_from(json!({
        "email": "jane@example.com",
        "custom_fields": {"plan": "pro", "city": "Lyon"},
        "gdpr": true,
        "phone": null
    }))
    .unwrap();

    let client = create_test_client(&server.url());
    client.add_subscriber("list-123", subscriber).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn list_id_is_required() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let client = create_test_client(&server.url());

    let err = client
        .get_subscribers("", &PageQuery::new())
        .await
        .unwrap_err();
    assert_eq!(
        err.as_validation().and_then(|v| v.field("listId")),
        Some("Field 'listId' is required")
    );

    let err = client
        .add_subscriber("", RequestOptions::new().with("email", "a@example.com"))
        .await
        .unwrap_err();
    assert!(err.as_validation().is_some());

    mock.assert_async().await;
}
