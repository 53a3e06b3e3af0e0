use board_client::BoardClientHttp;
use board_core::view::{LikeMode, LikeOutcome, PostDetailView, PostListView};
use board_core::{BoardApi, BoardError, CancellationToken, Direction, PostId, UserId, UserSession};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn post_body(recommend_count: i64) -> serde_json::Value {
    json!({
        "id": "1",
        "title": "첫 글",
        "content": "<p>hello</p><script>alert(1)</script>",
        "createdAt": "2024-05-01T08:00:00Z",
        "viewCount": 4,
        "recommendCount": recommend_count,
        "User": { "name": "kim" }
    })
}

async fn client(server: &MockServer) -> BoardClientHttp {
    BoardClientHttp::connect(&server.uri()).unwrap()
}

#[tokio::test]
async fn lists_posts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "1", "title": "A", "content": "x" },
            { "id": 2, "title": "B", "content": "y" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let view = PostListView::load(&client(&server).await, &CancellationToken::new())
        .await
        .unwrap();

    let links: Vec<_> = view.cards().iter().map(|c| c.href()).collect();
    assert_eq!(links, ["/post/1", "/post/2"]);
}

#[tokio::test]
async fn null_and_missing_posts_are_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/gone"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::Value::Null))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/posts/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such post"))
        .mount(&server)
        .await;

    let api = client(&server).await;

    assert!(api.get_post(&PostId::new("gone")).await.unwrap().is_none());
    assert!(api.get_post(&PostId::new("missing")).await.unwrap().is_none());
}

#[tokio::test]
async fn server_errors_keep_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client(&server)
        .await
        .get_post(&PostId::new("1"))
        .await
        .unwrap_err();

    match err {
        BoardError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn recommendation_endpoints_use_wire_format() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/1/recommendation"))
        .and(query_param("userId", "u 1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(true))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/posts/1/recommendation"))
        .and(body_json(json!({ "userId": "u 1", "direction": "increase" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server).await;
    let id = PostId::new("1");
    let user = UserId::new("u 1");

    assert!(api.check_recommendation(&id, &user).await.unwrap());
    api.update_recommendation(&id, &user, Direction::Increase)
        .await
        .unwrap();
}

#[tokio::test]
async fn detail_page_counts_view_once_and_likes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_body(2)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/posts/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_body(3)))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/posts/1/view"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/posts/1/recommendation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(false))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/posts/1/recommendation"))
        .and(body_json(json!({ "userId": "u1", "direction": "increase" })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server).await;
    let session = UserSession::signed_in(UserId::new("u1"));
    let token = CancellationToken::new();

    let load = PostDetailView::load(&api, &session, &PostId::new("1"), &token)
        .await
        .unwrap();
    load.view_increment
        .expect("found post yields a view increment")
        .send(&api, &token)
        .await
        .unwrap();
    let mut view = load.view;

    let outcome = view
        .toggle_like(&api, &session, LikeMode::default(), &token)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        LikeOutcome::Updated {
            liked: true,
            recommend_count: 3
        }
    );
}

#[tokio::test]
async fn comments_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posts/1/comments"))
        .and(body_json(json!({ "userId": "u1", "content": "nice" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "c1",
            "postId": "1",
            "content": "nice",
            "createdAt": "2024-05-01T09:00:00Z",
            "User": { "name": "u1" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/posts/1/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::Value::Null))
        .mount(&server)
        .await;

    let api = client(&server).await;
    let comment = api
        .create_comment(&PostId::new("1"), &UserId::new("u1"), "nice")
        .await
        .unwrap();

    assert_eq!(comment.id, "c1");
    assert_eq!(comment.author.unwrap().name, "u1");
    assert!(api.list_comments(&PostId::new("1")).await.unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let api = BoardClientHttp::connect("http://127.0.0.1:9").unwrap();

    let err = api.list_posts().await.unwrap_err();

    assert!(matches!(err, BoardError::Transport(_)), "{err}");
}
