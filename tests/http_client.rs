use abctl::client::http::HttpClient;
use abctl::client::{BaseUrl, PlayerService};
use abctl::error::{AbctlError, RemoteError};
use abctl::model::PlayerDraft;
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A mock server driven by its own runtime so the blocking client can be called
/// from the test thread. The server is declared first so it drops first.
struct Harness {
    server: MockServer,
    rt: Runtime,
}

impl Harness {
    fn start() -> Self {
        let rt = Runtime::new().unwrap();
        let server = rt.block_on(MockServer::builder().start());
        Self { server, rt }
    }

    fn mount(&self, mock: Mock) {
        self.rt.block_on(mock.mount(&self.server));
    }

    fn client(&self) -> HttpClient {
        HttpClient::new(BaseUrl::parse(&self.server.uri()).unwrap()).unwrap()
    }

    fn requests(&self) -> Vec<wiremock::Request> {
        self.rt
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }
}

fn player_json(id: i64, name: &str, author: i64) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "version": 1,
        "author_id": author,
        "path": format!("/srv/players/{}", id),
        "created_at": "2024-05-01T09:30:00Z",
        "updated_at": "2024-05-01T09:30:00Z"
    })
}

#[test]
fn list_returns_players_in_server_order() {
    let harness = Harness::start();
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/api/players"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                player_json(3, "c", 1),
                player_json(1, "a", 1),
            ]))),
    );

    let players = harness.client().list().unwrap();
    let ids: Vec<i64> = players.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[test]
fn upload_sends_multipart_to_author_route() {
    let harness = Harness::start();
    harness.mount(
        Mock::given(method("POST"))
            .and(path("/api/users/7/players"))
            .respond_with(ResponseTemplate::new(201).set_body_json(player_json(12, "bot1", 7))),
    );

    let draft = PlayerDraft::new("bot1", 1, 7);
    let created = harness
        .client()
        .upload(7, &draft, &mut &b"BINARY-CONTENT"[..])
        .unwrap();

    assert_eq!(created.id, 12);
    assert_eq!(created.path, "/srv/players/12");

    let requests = harness.requests();
    assert_eq!(requests.len(), 1);
    let content_type = requests[0]
        .headers
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"player\""));
    assert!(body.contains("\"name\":\"bot1\""));
    assert!(body.contains("name=\"executable\""));
    assert!(body.contains("BINARY-CONTENT"));
}

#[test]
fn delete_hits_player_route() {
    let harness = Harness::start();
    harness.mount(
        Mock::given(method("DELETE"))
            .and(path("/api/players/4"))
            .respond_with(ResponseTemplate::new(204)),
    );

    harness.client().delete(4).unwrap();
    assert_eq!(harness.requests().len(), 1);
}

#[test]
fn error_status_keeps_server_message() {
    let harness = Harness::start();
    harness.mount(
        Mock::given(method("DELETE"))
            .and(path("/api/players/9"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such player\n")),
    );

    let err = harness.client().delete(9).unwrap_err();
    match err {
        AbctlError::Remote(RemoteError::Status { status, body }) => {
            assert_eq!(status, 404);
            assert_eq!(body, "no such player");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn undecodable_body_is_a_transport_error() {
    let harness = Harness::start();
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/api/players"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json")),
    );

    let err = harness.client().list().unwrap_err();
    assert!(matches!(err, AbctlError::Remote(RemoteError::Transport(_))));
}

#[test]
fn unreachable_server_is_a_transport_error() {
    let client = HttpClient::new(BaseUrl::parse("127.0.0.1:1").unwrap()).unwrap();
    let err = client.list().unwrap_err();
    assert!(matches!(err, AbctlError::Remote(RemoteError::Transport(_))));
}
