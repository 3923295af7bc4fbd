//! Integration tests for the transport and sub-clients against a mock backend.

mod common;

use challenge_sdk::domain::challenge::wire::ChallengeAction;
use challenge_sdk::domain::challenge::ExerciseInfo;
use challenge_sdk::domain::group::wire::CreateGroupRequest;
use challenge_sdk::error::{HttpError, SdkError};
use challenge_sdk::session::Session;
use challenge_sdk::shared::{ChallengeId, ChallengeRef, GroupId, GroupRef, SessionToken, UserId, UserRef};
use common::MockBackend;
use serde_json::json;

fn alice(token: &str) -> Session {
    Session {
        user: UserId::from("u-alice"),
        username: "alice".into(),
        token: SessionToken::from(token),
    }
}

// ─── Session injection ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_no_session_means_no_session_field() {
    let mock = MockBackend::start().await;
    mock.respond("/Group/getMembers", json!({"members": []}));
    let client = mock.client();

    client
        .groups()
        .get_members(&GroupRef::from(GroupId::from("g1")))
        .await
        .unwrap();

    let body = mock.last_body("/Group/getMembers").unwrap();
    assert_eq!(body, json!({"group": "g1"}));
}

#[tokio::test]
async fn test_every_post_carries_current_session() {
    let mock = MockBackend::start().await;
    mock.respond("/Group/create", json!({"group": "g1"}));
    mock.respond("/Leaderboard/_getUserPoints", json!({"points": 12}));
    let client = mock.client();
    client.session().set(alice("tok-1")).await;

    client
        .groups()
        .create(&CreateGroupRequest {
            leader: UserId::from("u-alice"),
            name: "Runners".into(),
            private: false,
        })
        .await
        .unwrap();
    let points = client
        .leaderboard()
        .get_user_points(&UserRef::from(UserId::from("u-alice")))
        .await
        .unwrap();
    assert_eq!(points.points, 12);

    for call in mock.calls() {
        assert_eq!(call.body["session"], "tok-1", "missing session on {}", call.path);
    }
}

#[tokio::test]
async fn test_empty_body_gets_session_object() {
    let mock = MockBackend::start().await;
    mock.respond("/Group/getPublicGroups", json!({"groups": ["g1", "g2"]}));
    let client = mock.client();
    client.session().set(alice("tok-2")).await;

    let groups = client.groups().get_public_groups().await.unwrap();
    assert_eq!(groups.groups.len(), 2);
    assert_eq!(
        mock.last_body("/Group/getPublicGroups").unwrap(),
        json!({"session": "tok-2"})
    );
}

#[tokio::test]
async fn test_caller_session_is_not_overwritten() {
    let mock = MockBackend::start().await;
    mock.respond("/ChallengeDefinition/openChallenge", json!({"status": "ok"}));
    let client = mock.client();
    client.session().set(alice("context-token")).await;

    let resp = client
        .challenges()
        .open(&ChallengeAction {
            session: Some(SessionToken::from("explicit-token")),
            challenge: ChallengeId::from("c1"),
        })
        .await
        .unwrap();
    assert!(resp.status.is_ok());

    let body = mock.last_body("/ChallengeDefinition/openChallenge").unwrap();
    assert_eq!(body["session"], "explicit-token");
    assert_eq!(body["challenge"], "c1");
}

#[tokio::test]
async fn test_cleared_session_stops_injection() {
    let mock = MockBackend::start().await;
    mock.respond("/ChallengeDefinition/_isOpen", json!({"isOpen": true}));
    let client = mock.client();
    client.session().set(alice("tok-3")).await;
    client.session().clear().await;

    let open = client
        .challenges()
        .is_open(&ChallengeRef::from(ChallengeId::from("c1")))
        .await
        .unwrap();
    assert!(open.is_open);
    assert!(mock
        .last_body("/ChallengeDefinition/_isOpen")
        .unwrap()
        .get("session")
        .is_none());
}

// ─── Failure classification ──────────────────────────────────────────────────

#[tokio::test]
async fn test_server_error_carries_backend_message() {
    let mock = MockBackend::start().await;
    mock.respond_with("/Group/getName", 500, json!({"error": "database offline"}));
    let client = mock.client();

    let err = client
        .groups()
        .get_name(&GroupRef::from(GroupId::from("g1")))
        .await
        .unwrap_err();

    match err {
        SdkError::Http(HttpError::ServerError { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "database offline");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_status_codes_map_to_variants() {
    let mock = MockBackend::start().await;
    mock.respond_with("/UserProfile/_getProfile", 401, json!({"error": "expired"}));
    mock.respond_with("/Group/getLeader", 403, json!({"error": "nope"}));
    mock.respond_with("/Group/isPrivate", 422, json!({"error": "bad group"}));
    let client = mock.client();

    let err = client
        .profiles()
        .get_profile(&UserRef::from(UserId::from("u1")))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Http(HttpError::Unauthorized(ref m)) if m == "expired"));

    let err = client
        .groups()
        .get_leader(&GroupRef::from(GroupId::from("g1")))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Http(HttpError::Forbidden(_))));

    let err = client
        .groups()
        .is_private(&GroupRef::from(GroupId::from("g1")))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SdkError::Http(HttpError::BadRequest { status: 422, .. })
    ));
}

#[tokio::test]
async fn test_unscripted_path_is_not_found() {
    let mock = MockBackend::start().await;
    let client = mock.client();

    let err = client
        .challenges()
        .get_creator(&ChallengeRef::from(ChallengeId::from("c1")))
        .await
        .unwrap_err();
    assert!(err.is_transport());
    assert!(matches!(err, SdkError::Http(HttpError::NotFound(_))));
}

#[tokio::test]
async fn test_embedded_error_is_domain_error() {
    let mock = MockBackend::start().await;
    mock.respond(
        "/ChallengeDefinition/_getChallengeName",
        json!({"error": "Challenge c9 does not exist"}),
    );
    mock.respond(
        "/ChallengeDefinition/_getChallengeDetails",
        json!([{"error": "Challenge c9 does not exist"}]),
    );
    let client = mock.client();
    let c9 = ChallengeRef::from(ChallengeId::from("c9"));

    let err = client.challenges().get_name(&c9).await.unwrap_err();
    assert!(err.is_domain());

    let err = client.challenges().get_details(&c9).await.unwrap_err();
    match err {
        SdkError::Domain(msg) => assert_eq!(msg, "Challenge c9 does not exist"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client =
        challenge_sdk::client::ChallengeClient::new(&format!("http://{}/api", addr)).unwrap();
    let err = client
        .leaderboard()
        .get_user_points(&UserRef::from(UserId::from("u1")))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Http(HttpError::Reqwest(_))));
}

// ─── Decoding ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_empty_body_decodes_as_empty_object() {
    let mock = MockBackend::start().await;
    mock.respond("/Group/deleteGroup", serde_json::Value::Null);
    let client = mock.client();

    client
        .groups()
        .delete_group(&GroupRef::from(GroupId::from("g1")))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_empty_query_result_is_empty_vec() {
    let mock = MockBackend::start().await;
    mock.respond("/Friending/_getFriends", json!([]));
    mock.respond("/ChallengeProgress/_getParts", json!([]));
    let client = mock.client();

    let friends = client
        .friending()
        .get_friends(&UserRef::from(UserId::from("u1")))
        .await
        .unwrap();
    assert!(friends.is_empty());

    let parts = client
        .progress()
        .get_parts(&ChallengeRef::from(ChallengeId::from("c1")))
        .await
        .unwrap();
    assert!(parts.is_empty());
}

#[tokio::test]
async fn test_exercise_info_survives_round_trip_through_backend() {
    let mock = MockBackend::start().await;
    let variants = vec![
        json!({"_type": "AnaerobicInfo", "weight": 20.0, "sets": 3, "reps": 10}),
        json!({"_type": "RepAerobicInfo", "repSpeed": 40.0, "minutes": 15.0}),
        json!({"_type": "DistanceAerobicInfo", "distanceSpeed": 10.0, "minutes": 30.0}),
    ];
    let rows: Vec<_> = variants
        .iter()
        .map(|info| {
            json!({
                "exercise": "mixed",
                "daysOfWeek": 2,
                "weeks": 3,
                "level": 2,
                "info": info,
                "open": true,
                "creator": "u1"
            })
        })
        .collect();
    mock.respond("/ChallengeDefinition/_getChallengeDetails", json!(rows));
    let client = mock.client();

    let details = client
        .challenges()
        .get_details(&ChallengeRef::from(ChallengeId::from("c1")))
        .await
        .unwrap();
    assert_eq!(details.len(), 3);
    assert!(matches!(
        details[0].info,
        ExerciseInfo::Anaerobic { weight: Some(w), sets: 3, reps: 10 } if w == 20.0
    ));
    assert!(matches!(details[1].info, ExerciseInfo::RepAerobic { .. }));
    assert!(matches!(details[2].info, ExerciseInfo::DistanceAerobic { .. }));
    for (detail, expected) in details.iter().zip(&variants) {
        assert_eq!(&serde_json::to_value(&detail.info).unwrap(), expected);
    }
    assert_eq!(details[0].creator, Some(UserId::from("u1")));
}
