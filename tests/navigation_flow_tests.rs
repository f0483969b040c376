use std::sync::Mutex;

use octoscope::core::action::Action;
use octoscope::core::messages;
use octoscope::core::navigator::Destination;
use octoscope::core::screens::ScreenState;
use octoscope::core::session::PLACEHOLDER_AVATAR_URL;
use octoscope::core::state::App;
use octoscope::github::GitHubClient;
use octoscope::links::{LinkOpenError, LinkOpener};
use octoscope::runtime::dispatch;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

#[derive(Default)]
struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<(), LinkOpenError> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

struct NoBrowser;

impl LinkOpener for NoBrowser {
    fn open(&self, url: &str) -> Result<(), LinkOpenError> {
        Err(LinkOpenError::Unsupported {
            url: url.to_string(),
            reason: "headless".to_string(),
        })
    }
}

async fn mount_json(server: &MockServer, route: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

async fn octocat_server() -> MockServer {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/users/octocat",
        200,
        json!({"name": "The Octocat", "login": "octocat", "avatar_url": "X"}),
    )
    .await;
    mount_json(
        &server,
        "/users/octocat/followers",
        200,
        json!([{"login": "torvalds"}, {"login": "gvanrossum"}]),
    )
    .await;
    mount_json(
        &server,
        "/users/octocat/orgs",
        200,
        json!([{"login": "github"}]),
    )
    .await;
    mount_json(
        &server,
        "/users/octocat/repos",
        500,
        json!({"message": "Server Error"}),
    )
    .await;
    mount_json(
        &server,
        "/users/torvalds",
        200,
        json!({"name": "Linus Torvalds", "login": "torvalds", "avatar_url": "T"}),
    )
    .await;
    mount_json(
        &server,
        "/users/zzz_not_exist",
        404,
        json!({"message": "Not Found"}),
    )
    .await;
    server
}

/// Drives a sequence of actions, awaiting every fetch they cause.
async fn run(app: &mut App, client: &GitHubClient, opener: &dyn LinkOpener, actions: Vec<Action>) {
    for action in actions {
        dispatch(app, client, opener, action).await;
    }
}

fn search(handle: &str) -> Vec<Action> {
    vec![Action::OpenSearch, Action::SubmitSearch(handle.to_string())]
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_search_shows_found_profile() {
    let server = octocat_server().await;
    let client = GitHubClient::new(server.uri());
    let mut app = App::default();

    run(&mut app, &client, &RecordingOpener::default(), search("octocat")).await;

    let identity = app.current().identity();
    assert_eq!(identity.display_name(), Some("The Octocat"));
    assert_eq!(identity.login_handle(), Some("octocat"));
    assert_eq!(identity.avatar_url(), "X");
    assert_eq!(app.navigator.depth(), 1);
    assert!(!app.reporter.is_visible());
}

#[tokio::test]
async fn test_search_unknown_user_reverts_to_anonymous() {
    let server = octocat_server().await;
    let client = GitHubClient::new(server.uri());
    let mut app = App::default();
    let opener = RecordingOpener::default();

    run(&mut app, &client, &opener, search("octocat")).await;
    run(&mut app, &client, &opener, search("zzz_not_exist")).await;

    assert_eq!(
        app.reporter.visible_message(),
        Some(messages::USER_NOT_FOUND)
    );
    let identity = app.current().identity();
    assert!(identity.is_anonymous());
    assert_eq!(identity.avatar_url(), PLACEHOLDER_AVATAR_URL);
}

#[tokio::test]
async fn test_follower_pivot_resets_history() {
    let server = octocat_server().await;
    let client = GitHubClient::new(server.uri());
    let mut app = App::default();
    let opener = RecordingOpener::default();

    run(&mut app, &client, &opener, search("octocat")).await;
    // Home menu row 3 is Seguidores
    run(&mut app, &client, &opener, vec![Action::Select(3)]).await;
    assert_eq!(app.navigator.depth(), 2);
    assert_eq!(app.current().screen.row_count(), 2);

    run(&mut app, &client, &opener, vec![Action::Select(0)]).await;

    assert_eq!(app.navigator.depth(), 1);
    let top = app.current();
    assert_eq!(top.destination().name(), Destination::HOME);
    assert_eq!(top.identity().login_handle(), Some("torvalds"));
    assert_eq!(top.identity().display_name(), Some("Linus Torvalds"));
}

// ============================================================================
// Lists and links
// ============================================================================

#[tokio::test]
async fn test_org_row_opens_web_page() {
    let server = octocat_server().await;
    let client = GitHubClient::new(server.uri());
    let mut app = App::new("https://github.com");
    let opener = RecordingOpener::default();

    run(&mut app, &client, &opener, search("octocat")).await;
    run(&mut app, &client, &opener, vec![Action::Select(1), Action::Select(0)]).await;

    assert_eq!(opener.opened(), vec!["https://github.com/github".to_string()]);
    assert!(!app.reporter.is_visible());
}

#[tokio::test]
async fn test_repo_fetch_failure_reports_and_leaves_list_empty() {
    let server = octocat_server().await;
    let client = GitHubClient::new(server.uri());
    let mut app = App::default();
    let opener = RecordingOpener::default();

    run(&mut app, &client, &opener, search("octocat")).await;
    run(&mut app, &client, &opener, vec![Action::Select(2)]).await;

    assert!(matches!(app.current().screen, ScreenState::Repos(_)));
    assert_eq!(app.current().screen.row_count(), 0);
    assert_eq!(
        app.reporter.visible_message(),
        Some(messages::REPOS_FETCH_FAILED)
    );
}

#[tokio::test]
async fn test_org_link_failure_reports_org_message() {
    let server = octocat_server().await;
    let client = GitHubClient::new(server.uri());
    let mut app = App::default();

    run(&mut app, &client, &NoBrowser, search("octocat")).await;
    run(&mut app, &client, &NoBrowser, vec![Action::Select(1), Action::Select(0)]).await;

    assert_eq!(
        app.reporter.visible_message(),
        Some(messages::ORG_LINK_FAILED)
    );
    assert_eq!(app.current().identity().login_handle(), Some("octocat"));
}

#[tokio::test]
async fn test_back_restores_previous_identity() {
    let server = octocat_server().await;
    let client = GitHubClient::new(server.uri());
    let mut app = App::default();
    let opener = RecordingOpener::default();

    run(&mut app, &client, &opener, search("octocat")).await;
    run(&mut app, &client, &opener, vec![Action::Select(1), Action::Back]).await;

    assert_eq!(app.navigator.depth(), 1);
    assert_eq!(app.current().identity().login_handle(), Some("octocat"));
}

#[tokio::test]
async fn test_api_down_search_reports_generic_search_failure() {
    // Nothing listens on port 1
    let client = GitHubClient::new("http://127.0.0.1:1");
    let mut app = App::default();

    run(&mut app, &client, &RecordingOpener::default(), search("octocat")).await;

    assert_eq!(app.reporter.visible_message(), Some(messages::SEARCH_FAILED));
    assert!(app.current().identity().is_anonymous());
}
