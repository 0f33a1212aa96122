use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use user_directory::clients::ActorClient;
use user_directory::error::ServerError;
use user_directory::http;
use user_directory::lifecycle::UserSystem;
use user_directory::model::User;

/// A server on an ephemeral port, backed by its own store.
struct TestServer {
    base_url: String,
    system: UserSystem,
    stop: oneshot::Sender<()>,
    server: JoinHandle<Result<(), ServerError>>,
}

impl TestServer {
    async fn start() -> Self {
        let system = UserSystem::new(32);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop, stopped) = oneshot::channel::<()>();

        let server = tokio::spawn(http::serve(
            listener,
            system.user_client.clone(),
            async move {
                let _ = stopped.await;
            },
        ));

        Self {
            base_url: format!("http://{addr}"),
            system,
            stop,
            server,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn shutdown(self) {
        let _ = self.stop.send(());
        self.server
            .await
            .expect("server task panicked")
            .expect("server failed");
        self.system.shutdown().await.expect("store failed to stop");
    }
}

/// Full end-to-end walk through every documented behavior over a real socket.
#[tokio::test]
async fn test_users_api_end_to_end() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // Seed records
    let response = client.get(server.url("/users")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let users: Value = response.json().await.unwrap();
    assert_eq!(
        users,
        json!([
            {"id": 1, "name": "John Doe", "email": "john@example.com"},
            {"id": 2, "name": "Jane Smith", "email": "jane@example.com"},
        ])
    );

    // Create
    let response = client
        .post(server.url("/users"))
        .body(r#"{"name":"Alice","email":"alice@x.com"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created, json!({"id": 3, "name": "Alice", "email": "alice@x.com"}));

    // Malformed body
    let response = client
        .post(server.url("/users"))
        .body("not-json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "Error parsing JSON");

    // Wrong method
    let response = client.delete(server.url("/users")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.text().await.unwrap(), "Method not allowed");

    // Unknown path
    let response = client.get(server.url("/accounts")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Only the one successful create changed the store
    let users: Vec<User> = client
        .get(server.url("/users"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[2], User::new(3, "Alice", "alice@x.com"));

    server.shutdown().await;
}

/// Concurrent creates over HTTP must never hand out the same id twice.
#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let mut handles = vec![];
    for i in 0..20 {
        let client = client.clone();
        let url = server.url("/users");
        handles.push(tokio::spawn(async move {
            let response = client
                .post(url)
                .json(&json!({"name": format!("user{i}"), "email": format!("user{i}@x.com")}))
                .send()
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
            response.json::<User>().await.unwrap().id
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (3..=22).collect::<Vec<u64>>());

    // The store agrees with what the clients saw.
    let stored = server.system.user_client.list().await.unwrap();
    let stored_ids: Vec<u64> = stored.iter().map(|u| u.id).collect();
    assert_eq!(stored_ids, (1..=22).collect::<Vec<u64>>());

    server.shutdown().await;
}

/// Binding an address that is already taken is reported, not swallowed.
#[tokio::test]
async fn test_bind_conflict_is_an_error() {
    let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = taken.local_addr().unwrap();

    let result = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source });

    match result {
        Err(ServerError::Bind { addr: reported, .. }) => assert_eq!(reported, addr),
        other => panic!("expected bind error, got {other:?}"),
    }
}
