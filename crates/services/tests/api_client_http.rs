use mockito::{Matcher, Server};
use services::{ApiClient, ApiConfig, ApiError, AuthApi, TopicsApi};
use tracker_core::model::{Level, SubTopicId, TopicStatus};

fn client_for(server: &Server) -> ApiClient {
    ApiClient::new(ApiConfig::new(&server.url()).unwrap()).unwrap()
}

#[tokio::test]
async fn login_posts_credentials_and_decodes_user() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/login")
        .match_body(Matcher::Json(serde_json::json!({
            "email": "asha@example.com",
            "password": "hunter2"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"user":{"id":"u1","name":"Asha","email":"asha@example.com"}}"#)
        .create_async()
        .await;

    let user = client_for(&server)
        .login("asha@example.com", "hunter2")
        .await
        .unwrap();

    assert_eq!(user.name, "Asha");
    mock.assert_async().await;
}

#[tokio::test]
async fn session_cookie_is_sent_on_later_requests() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("set-cookie", "token=abc123; Path=/; HttpOnly")
        .with_body(r#"{"user":{"id":"u1","name":"Asha","email":"asha@example.com"}}"#)
        .create_async()
        .await;
    let me = server
        .mock("GET", "/auth/me")
        .match_header("cookie", Matcher::Regex("token=abc123".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"user":{"id":"u1","name":"Asha","email":"asha@example.com"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    client.login("asha@example.com", "hunter2").await.unwrap();
    let user = client.current_user().await.unwrap();

    assert_eq!(user.email, "asha@example.com");
    login.assert_async().await;
    me.assert_async().await;
}

#[tokio::test]
async fn rejected_login_carries_server_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/auth/login")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Invalid credentials"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .login("asha@example.com", "nope")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Auth { .. }));
    assert_eq!(err.message(), Some("Invalid credentials"));
}

#[tokio::test]
async fn server_error_without_body_has_no_message() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/topics/progress")
        .with_status(503)
        .create_async()
        .await;

    let err = client_for(&server).progress().await.unwrap_err();

    assert!(matches!(err, ApiError::Server { .. }));
    assert_eq!(err.message(), None);
}

#[tokio::test]
async fn lists_topics_with_nested_subtopics() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/topics")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{
                "_id": "t1",
                "name": "Algorithms",
                "status": "Completed",
                "subTopics": [{
                    "_id": "s1",
                    "name": "Two Sum",
                    "leetcodeLink": "https://leetcode.com/problems/two-sum/",
                    "youtubeLink": "https://youtube.com/watch?v=x",
                    "articleLink": "https://example.com/two-sum",
                    "level": "MEDIUM",
                    "completed": true
                }]
            }]"#,
        )
        .create_async()
        .await;

    let topics = client_for(&server).list_topics().await.unwrap();

    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0].status, TopicStatus::Completed);
    assert_eq!(topics[0].sub_topics[0].level, Level::Medium);
}

#[tokio::test]
async fn toggle_patches_subtopic_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/topics/subtopic/s42/toggle")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"completed":false}"#)
        .create_async()
        .await;

    let completed = client_for(&server)
        .toggle_subtopic(&SubTopicId::new("s42"))
        .await
        .unwrap();

    assert!(!completed);
    mock.assert_async().await;
}

#[tokio::test]
async fn logout_accepts_empty_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/logout")
        .with_status(204)
        .create_async()
        .await;

    client_for(&server).logout().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/auth/me")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"nope":true}"#)
        .create_async()
        .await;

    let err = client_for(&server).current_user().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:9").unwrap()).unwrap();
    let err = client.list_topics().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
