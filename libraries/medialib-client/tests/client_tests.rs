//! Tests for the media library client.
//!
//! These tests use mock servers to verify request shapes, response
//! normalization and error mapping without a real API.

use medialib_client::{
    ClientConfig, ClientError, ErrorKind, MediaLibraryClient, NewPlaylist, NewSong,
    PlaylistUpdate, SongUpdate, UserUpdate, NO_USER_PLAYLIST,
};
use std::time::Duration;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> MediaLibraryClient {
    MediaLibraryClient::new(ClientConfig::new(server.uri())).unwrap()
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let config = ClientConfig::new("http://localhost:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_empty_url_rejected() {
        match MediaLibraryClient::new(ClientConfig::new("")).unwrap_err() {
            ClientError::InvalidUrl(msg) => assert!(msg.contains("empty")),
            e => panic!("Expected InvalidUrl error, got: {:?}", e),
        }
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        match MediaLibraryClient::new(ClientConfig::new("example.com")).unwrap_err() {
            ClientError::InvalidUrl(msg) => {
                assert!(msg.contains("http://") || msg.contains("https://"));
            }
            e => panic!("Expected InvalidUrl error, got: {:?}", e),
        }
    }
}

// =============================================================================
// User Tests
// =============================================================================

mod users {
    use super::*;

    #[tokio::test]
    async fn test_list_users_normalizes_nested_playlists() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": 1,
                    "username": "alice",
                    "playlists": [{ "id": 10, "name": "Road", "songTitles": ["T"] }]
                },
                { "id": 2, "username": "bob" }
            ])))
            .mount(&mock_server)
            .await;

        let users = client_for(&mock_server).users().list().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[0].playlists[0].song_titles, vec!["T".to_string()]);
        assert_eq!(users[0].playlists[0].username, "alice");
        assert!(!users[0].playlists[0].is_orphaned());
        assert!(users[1].playlists.is_empty());
    }

    #[tokio::test]
    async fn test_empty_collection_404_is_empty_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(404).set_body_string("The user list is empty"))
            .mount(&mock_server)
            .await;

        let users = client_for(&mock_server).users().list().await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_create_user_posts_single_element_batch() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .and(body_json(serde_json::json!([{ "username": "carol" }])))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{ "id": 42, "username": "carol" }])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let user = client_for(&mock_server)
            .users()
            .create("carol")
            .await
            .unwrap();

        assert_eq!(user.id, 42);
        assert_eq!(user.username, "carol");
    }

    #[tokio::test]
    async fn test_create_user_rejected_is_validation_kind() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Username taken"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .users()
            .create("carol")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        match err {
            ClientError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("taken"));
            }
            e => panic!("Expected Rejected, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_update_user_sends_null_playlists_when_unchanged() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/users/7"))
            .and(body_json(
                serde_json::json!({ "username": "dave", "playlistIds": null }),
            ))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        client_for(&mock_server)
            .users()
            .update(
                7,
                &UserUpdate {
                    username: "dave".into(),
                    playlist_ids: None,
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/users/9"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .users()
            .delete(9)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}

// =============================================================================
// Playlist Tests
// =============================================================================

mod playlists {
    use super::*;

    #[tokio::test]
    async fn test_list_playlists_normalizes_both_shapes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/playlists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": 1, "name": "Titles", "username": "alice", "songTitles": ["A", "B"] },
                {
                    "id": 2,
                    "name": "Expanded",
                    "username": "bob",
                    "songs": [{ "id": 5, "title": "C", "artist": "X" }]
                },
                { "id": 3, "name": "Orphan", "username": null, "songTitles": [] }
            ])))
            .mount(&mock_server)
            .await;

        let playlists = client_for(&mock_server).playlists().list().await.unwrap();

        assert_eq!(playlists.len(), 3);
        assert_eq!(playlists[0].song_titles, vec!["A".to_string(), "B".to_string()]);
        assert!(playlists[0].songs.is_empty());
        assert_eq!(playlists[1].song_titles, vec!["C".to_string()]);
        assert_eq!(playlists[1].songs[0].id, 5);
        assert!(playlists[2].is_orphaned());
    }

    #[tokio::test]
    async fn test_create_playlist_scoped_to_user() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/playlists/create/3"))
            .and(body_json(serde_json::json!({ "name": "Gym", "userId": 3 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 77, "name": "Gym", "username": "alice", "songTitles": []
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let playlist = client_for(&mock_server)
            .playlists()
            .create(&NewPlaylist {
                name: "Gym".into(),
                user_id: 3,
            })
            .await
            .unwrap();

        assert_eq!(playlist.id, 77);
        assert_eq!(playlist.username, "alice");
    }

    #[tokio::test]
    async fn test_update_playlist_omits_unchanged_songs() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/playlists/u/4"))
            .and(body_json(serde_json::json!({ "name": "Renamed" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 4, "name": "Renamed", "username": "alice"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let playlist = client_for(&mock_server)
            .playlists()
            .update(
                4,
                &PlaylistUpdate {
                    name: "Renamed".into(),
                    song_ids: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(playlist.name, "Renamed");
    }

    #[tokio::test]
    async fn test_add_songs_sends_ids_verbatim() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/playlists/4/add-songs"))
            .and(body_json(serde_json::json!([1, 1, 2])))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        client_for(&mock_server)
            .playlists()
            .add_songs(4, &[1, 1, 2])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_second_delete_is_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/playlists/10"))
            .respond_with(ResponseTemplate::new(200))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/playlists/10"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        client.playlists().delete(10).await.unwrap();

        let err = client.playlists().delete(10).await.unwrap_err();
        match err {
            ClientError::NotFound(target) => assert!(target.contains("10")),
            e => panic!("Expected NotFound, got: {:?}", e),
        }
    }
}

// =============================================================================
// Song Tests
// =============================================================================

mod songs {
    use super::*;

    #[tokio::test]
    async fn test_list_songs_derives_cross_references() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/songs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": 100, "title": "T", "artist": "X", "playlistNames": ["ignored"] },
                { "id": 101, "title": "Lonely", "artist": "Y" }
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/playlists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": 11, "name": "P", "username": "A", "songTitles": ["T"] }
            ])))
            .mount(&mock_server)
            .await;

        let songs = client_for(&mock_server).songs().list().await.unwrap();

        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].playlist_names, vec!["P".to_string()]);
        assert_eq!(songs[0].user_names, vec!["A".to_string()]);
        assert_eq!(songs[0].playlists[0].id, 11);
        assert!(songs[1].playlist_names.is_empty());
        assert_eq!(songs[1].user_names, vec![NO_USER_PLAYLIST.to_string()]);
    }

    #[tokio::test]
    async fn test_list_songs_fails_when_playlists_fail() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/songs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": 100, "title": "T", "artist": "X" }
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/playlists"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).songs().list().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[tokio::test]
    async fn test_create_song_accepts_array_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/songs"))
            .and(body_json(serde_json::json!([{ "title": "New", "artist": "Band" }])))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": 300, "title": "New", "artist": "Band" }
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let song = client_for(&mock_server)
            .songs()
            .create(&NewSong {
                title: "New".into(),
                artist: "Band".into(),
            })
            .await
            .unwrap();

        assert_eq!(song.id, 300);
        assert_eq!(song.user_names, vec![NO_USER_PLAYLIST.to_string()]);
    }

    #[tokio::test]
    async fn test_update_song() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/songs/300"))
            .and(body_json(serde_json::json!({ "title": "Renamed", "artist": "Band" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 300, "title": "Renamed", "artist": "Band"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let song = client_for(&mock_server)
            .songs()
            .update(
                300,
                &SongUpdate {
                    title: "Renamed".into(),
                    artist: "Band".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(song.title, "Renamed");
    }

    #[tokio::test]
    async fn test_by_artist_encodes_query_and_maps_404() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/songs/by-artist"))
            .and(query_param("artist", "Some Band"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": 1, "title": "T", "artist": "Some Band" }
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/songs/by-artist"))
            .and(query_param("artist", "Nobody"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        assert_eq!(client.songs().by_artist("Some Band").await.unwrap().len(), 1);
        assert!(client.songs().by_artist("Nobody").await.unwrap().is_empty());
    }
}

// =============================================================================
// Transport Tests
// =============================================================================

mod transport {
    use super::*;

    #[tokio::test]
    async fn test_timeout_is_network_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([]))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let client = MediaLibraryClient::new(
            ClientConfig::new(mock_server.uri()).with_timeout(Duration::from_millis(50)),
        )
        .unwrap();

        let err = client.users().list().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let client = MediaLibraryClient::new(ClientConfig::new("http://127.0.0.1:1")).unwrap();

        let err = client.songs().list_unlinked().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/songs"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        match client_for(&mock_server).songs().list_unlinked().await.unwrap_err() {
            ClientError::ParseError(_) => {}
            e => panic!("Expected ParseError, got: {:?}", e),
        }
    }
}
