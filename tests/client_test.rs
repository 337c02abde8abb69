use std::time::Duration;

use mockito::{Matcher, Server, ServerGuard};
use spotweb::types::{PageOptions, PlaylistDetails, SearchOptions, SearchType};
use spotweb::{Error, SpotifyClient};

// Helper to build a client pointed at the mock server. Also routes the
// crate's tracing output through the test harness; select it with
// RUST_LOG, e.g. `RUST_LOG=spotweb=debug`.
fn test_client(server: &ServerGuard) -> SpotifyClient {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    SpotifyClient::with_endpoints(
        "test-id",
        "test-secret",
        server.url(),
        format!("{}/api/token", server.url()),
    )
}

// Helper to mount a token endpoint answering a client-credentials
// exchange with the given validity duration
async fn mock_token(server: &mut ServerGuard, expires_in: u64, hits: usize) -> mockito::Mock {
    server
        .mock("POST", "/api/token")
        .match_header("authorization", Matcher::Regex("^Basic ".to_string()))
        .match_body(Matcher::UrlEncoded(
            "grant_type".into(),
            "client_credentials".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"access_token":"test-token","token_type":"Bearer","expires_in":{}}}"#,
            expires_in
        ))
        .expect(hits)
        .create_async()
        .await
}

#[tokio::test]
async fn test_login_then_facade_call() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, 3600, 1).await;
    let album = server
        .mock("GET", "/albums/33pt9HBdGlAbRGBHQgsZsU")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"33pt9HBdGlAbRGBHQgsZsU","name":"Evolve"}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    client.login().await.expect("login should succeed");
    assert!(client.session().is_authenticated());

    let result = client
        .albums
        .get_album("33pt9HBdGlAbRGBHQgsZsU", None)
        .await
        .expect("album lookup should succeed");
    assert_eq!(result.name, "Evolve");

    // The facade call reused the token from login(); no second exchange
    token.assert_async().await;
    album.assert_async().await;
    client.destroy();
}

#[tokio::test]
async fn test_first_facade_call_logs_in_once() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, 3600, 1).await;
    let _artist = server
        .mock("GET", "/artists/53XhwfbYqKCa1cC15pYq2q")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"53XhwfbYqKCa1cC15pYq2q","name":"Imagine Dragons"}"#)
        .create_async()
        .await;

    // No explicit login(): the facade authenticates on demand
    let client = test_client(&server);
    let artist = client
        .artists
        .get_artist("53XhwfbYqKCa1cC15pYq2q")
        .await
        .expect("artist lookup should succeed");
    assert_eq!(artist.name, "Imagine Dragons");

    token.assert_async().await;
    client.destroy();
}

#[tokio::test]
async fn test_concurrent_calls_share_one_login() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, 3600, 1).await;
    let _album = server
        .mock("GET", "/albums/a1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"a1","name":"Evolve"}"#)
        .create_async()
        .await;
    let _artist = server
        .mock("GET", "/artists/r1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"r1","name":"OneRepublic"}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let (album, artist) = tokio::join!(
        client.albums.get_album("a1", None),
        client.artists.get_artist("r1"),
    );
    album.expect("album lookup should succeed");
    artist.expect("artist lookup should succeed");

    // Both callers raced the unauthenticated session, but only one
    // credential exchange went out
    token.assert_async().await;
    client.destroy();
}

#[tokio::test]
async fn test_invalid_credentials() {
    let mut server = Server::new_async().await;
    let rejected = server
        .mock("POST", "/api/token")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"invalid_client"}"#)
        .expect(2)
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client.login().await.expect_err("login should fail");
    assert!(matches!(err, Error::Authentication(_)));
    assert!(!client.session().is_authenticated());

    // Facade calls keep failing with the same taxonomy until a valid login
    let err = client
        .albums
        .get_album("33pt9HBdGlAbRGBHQgsZsU", None)
        .await
        .expect_err("facade call should fail without a token");
    assert!(matches!(err, Error::Authentication(_)));
    rejected.assert_async().await;

    // A later successful exchange recovers the client (newer mocks take
    // precedence over the 400 above)
    let _token = mock_token(&mut server, 3600, 1).await;
    let _album = server
        .mock("GET", "/albums/33pt9HBdGlAbRGBHQgsZsU")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"33pt9HBdGlAbRGBHQgsZsU","name":"Evolve"}"#)
        .create_async()
        .await;
    let album = client
        .albums
        .get_album("33pt9HBdGlAbRGBHQgsZsU", None)
        .await
        .expect("facade call should succeed after valid login");
    assert_eq!(album.name, "Evolve");
    client.destroy();
}

#[tokio::test]
async fn test_error_envelope_maps_to_api_error() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, 3600, 1).await;
    let _missing = server
        .mock("GET", "/albums/does-not-exist")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":{"status":404,"message":"invalid id"}}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client
        .albums
        .get_album("does-not-exist", None)
        .await
        .expect_err("lookup of unknown id should fail");
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "invalid id");
        }
        other => panic!("expected Error::Api, got {:?}", other),
    }
    client.destroy();
}

#[tokio::test]
async fn test_destroy_cancels_renewal() {
    let mut server = Server::new_async().await;
    // Token valid for one second; without destroy() the renewal task
    // would hit the endpoint a second time
    let token = mock_token(&mut server, 1, 1).await;

    let client = test_client(&server);
    client.login().await.expect("login should succeed");
    client.destroy();

    tokio::time::sleep(Duration::from_millis(1800)).await;
    token.assert_async().await;

    // The credential itself is retained after destroy()
    assert!(client.session().is_authenticated());
}

#[tokio::test]
async fn test_background_renewal_refreshes_token() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, 1, 2).await;

    let client = test_client(&server);
    client.login().await.expect("login should succeed");

    tokio::time::sleep(Duration::from_millis(1800)).await;
    // Initial exchange plus exactly one scheduled renewal
    token.assert_async().await;
    client.destroy();
}

#[tokio::test]
async fn test_renewal_failure_reaches_hook_and_keeps_old_token() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, 1, 1).await;

    let client = test_client(&server);
    client.login().await.expect("login should succeed");

    // Shadow the token endpoint with an outage; the pending renewal
    // runs into it
    let _outage = server
        .mock("POST", "/api/token")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    client.on_renewal_error(Box::new(move |err| {
        let _ = tx.send(err.to_string());
    }));

    let reported = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("renewal failure should be reported")
        .expect("hook channel should stay open");
    assert!(reported.contains("authentication failed"));

    // The stale credential survives the failed renewal
    assert_eq!(
        client.session().bearer_token().as_deref(),
        Some("test-token")
    );
    client.destroy();
}

#[tokio::test]
async fn test_get_albums_scenario() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, 3600, 1).await;
    let _albums = server
        .mock("GET", "/albums")
        .match_query(Matcher::UrlEncoded(
            "ids".into(),
            "33pt9HBdGlAbRGBHQgsZsU,2bbhW5ifCwOYM8DMkqoYBF".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"albums":[
                {"id":"33pt9HBdGlAbRGBHQgsZsU","name":"Evolve"},
                {"id":"2bbhW5ifCwOYM8DMkqoYBF","name":"Native"}
            ]}"#,
        )
        .create_async()
        .await;

    let client = test_client(&server);
    let result = client
        .albums
        .get_albums(&["33pt9HBdGlAbRGBHQgsZsU", "2bbhW5ifCwOYM8DMkqoYBF"], None)
        .await
        .expect("several-albums lookup should succeed");

    assert_eq!(result.albums.len(), 2);
    assert!(
        result
            .albums
            .iter()
            .all(|a| a.name == "Evolve" || a.name == "Native")
    );
    client.destroy();
}

#[tokio::test]
async fn test_album_tracks_with_limit_and_offset() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, 3600, 1).await;
    let _tracks = server
        .mock("GET", "/albums/33pt9HBdGlAbRGBHQgsZsU/tracks")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "1".into()),
            Matcher::UrlEncoded("offset".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"items":[{"id":"t2","name":"I Don't Know Why"}],
                "limit":1,"offset":1,"total":12,"next":null,"previous":null}"#,
        )
        .create_async()
        .await;

    let client = test_client(&server);
    let page = client
        .albums
        .get_tracks(
            "33pt9HBdGlAbRGBHQgsZsU",
            Some(PageOptions {
                limit: Some(1),
                offset: Some(1),
                market: None,
            }),
        )
        .await
        .expect("album tracks lookup should succeed");

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "I Don't Know Why");
    client.destroy();
}

#[tokio::test]
async fn test_search_track_scenario() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, 3600, 1).await;
    let _search = server
        .mock("GET", "/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "natural".into()),
            Matcher::UrlEncoded("type".into(), "track".into()),
            Matcher::UrlEncoded("limit".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"tracks":{"items":[{"id":"2FY7b99s15jUprqC0M5NCT","name":"Natural"}]}}"#,
        )
        .create_async()
        .await;

    let client = test_client(&server);
    let results = client
        .search
        .search(
            "natural",
            &[SearchType::Track],
            Some(SearchOptions {
                limit: Some(1),
                ..Default::default()
            }),
        )
        .await
        .expect("search should succeed");

    let tracks = results.tracks.expect("track page should be present");
    assert_eq!(tracks.items.len(), 1);
    assert_eq!(tracks.items[0].id, "2FY7b99s15jUprqC0M5NCT");
    client.destroy();
}

#[tokio::test]
async fn test_check_users_follow_playlist() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, 3600, 1).await;
    let _contains = server
        .mock("GET", "/playlists/2AnJjcunltlCloeir9Dorm/followers/contains")
        .match_query(Matcher::UrlEncoded("ids".into(), "userA,userB".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[true, false]")
        .create_async()
        .await;

    let client = test_client(&server);
    let follows = client
        .users
        .check_users_follow_playlist("2AnJjcunltlCloeir9Dorm", &["userA", "userB"])
        .await
        .expect("follower check should succeed");
    assert_eq!(follows, vec![true, false]);
    client.destroy();
}

#[tokio::test]
async fn test_update_playlist_details() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, 3600, 1).await;
    let update = server
        .mock("PUT", "/playlists/3cEYpjA9oz9GiPac4AsH4n")
        .match_header("authorization", "Bearer test-token")
        .match_body(Matcher::Json(serde_json::json!({
            "name": "New Title",
            "public": false
        })))
        .with_status(200)
        .create_async()
        .await;

    let client = test_client(&server);
    client
        .playlists
        .update_playlist_details(
            "3cEYpjA9oz9GiPac4AsH4n",
            &PlaylistDetails {
                name: Some("New Title".to_string()),
                public: Some(false),
                ..Default::default()
            },
        )
        .await
        .expect("playlist update should succeed");

    update.assert_async().await;
    client.destroy();
}

#[tokio::test]
async fn test_user_profile() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, 3600, 1).await;
    let _user = server
        .mock("GET", "/users/smedjan")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"smedjan","display_name":"Smedjan"}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let user = client
        .users
        .get_user_profile("smedjan")
        .await
        .expect("user lookup should succeed");
    assert_eq!(user.id, "smedjan");
    client.destroy();
}
