//! Integration tests against an in-process fake room API.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde_json::{Value, json};
use studyroom_client::{
    MediaRoomSession, RoomPorts, SessionTiming,
    config::ClientConfig,
    domain::{
        MemberId, MemberSource, MemberSourceError, RoomSnapshot, RtcConfig, RtcConfigSource,
        Role,
    },
    infrastructure::{
        http::{HttpMemberSource, HttpRtcConfigSource},
        media::StaticMediaSource,
        transport::DryRunPeerTransport,
    },
    usecase::AcquireRtcConfigUseCase,
};
use studyroom_shared::time::FixedClock;
use tokio::net::TcpListener;

/// Shared state of the fake API
#[derive(Clone, Default)]
struct FakeApi {
    /// Member list per room number
    members: Arc<Mutex<HashMap<u64, Value>>>,
    /// Query strings received by the ice-servers endpoint
    ice_requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl FakeApi {
    fn set_members(&self, room: u64, members: Value) {
        self.members.lock().unwrap().insert(room, members);
    }
}

async fn members_handler(
    State(api): State<FakeApi>,
    Path(room_id): Path<u64>,
) -> Result<Json<Value>, StatusCode> {
    api.members
        .lock()
        .unwrap()
        .get(&room_id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)
}

async fn ice_servers_handler(
    State(api): State<FakeApi>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    api.ice_requests.lock().unwrap().push(query);
    Json(json!({
        "iceServers": [
            { "urls": "stun:stun.example.com:3478" },
            { "urls": ["turn:turn.example.com:3478"], "username": "room", "credential": "secret" }
        ]
    }))
}

/// Helper to start the fake API on an ephemeral port
async fn start_fake_api(api: FakeApi) -> String {
    let app = Router::new()
        .route("/api/rooms/{room_id}/members", get(members_handler))
        .route("/api/webrtc/ice-servers", get(ice_servers_handler))
        .with_state(api);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn member_json(user_id: u64, nickname: &str, role: &str) -> Value {
    json!({
        "userId": user_id,
        "nickname": nickname,
        "role": role,
        "profileImageUrl": format!("https://img.example.com/{}.png", user_id)
    })
}

fn snapshot() -> RoomSnapshot {
    RoomSnapshot::from_json(
        r#"{
            "info": { "id": "room-2", "title": "math", "password": "1234" },
            "members": [ { "id": "u-2", "name": "me-from-snapshot", "isMe": true } ]
        }"#,
    )
    .unwrap()
}

fn fast_timing() -> SessionTiming {
    SessionTiming {
        poll_interval: Duration::from_millis(100),
        offer_delay: Duration::from_millis(10),
        retry_delay: Duration::from_millis(10),
    }
}

#[tokio::test]
async fn test_http_member_source_fetches_members() {
    // テスト項目: API の参加者リストが取得・変換される
    // given (前提条件):
    let api = FakeApi::default();
    api.set_members(
        2,
        json!([member_json(1, "host", "HOST"), member_json(2, "me", "MEMBER")]),
    );
    let base_url = start_fake_api(api).await;
    let source = HttpMemberSource::new(reqwest::Client::new(), base_url);

    // when (操作):
    let members = source.fetch_members(2).await.unwrap();

    // then (期待する結果):
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].user_number, 1);
    assert_eq!(members[0].role, Role::Owner);
    assert_eq!(
        members[0].avatar_url.as_deref(),
        Some("https://img.example.com/1.png")
    );
    assert_eq!(members[1].role, Role::Member);
}

#[tokio::test]
async fn test_http_member_source_reports_server_error() {
    // テスト項目: サーバーエラーは Fetch エラーとして返される
    // given (前提条件):
    let base_url = start_fake_api(FakeApi::default()).await;
    let source = HttpMemberSource::new(reqwest::Client::new(), base_url);

    // when (操作):
    let result = source.fetch_members(99).await;

    // then (期待する結果):
    assert!(matches!(
        result,
        Err(MemberSourceError::Fetch { room: 99, .. })
    ));
}

#[tokio::test]
async fn test_http_member_source_reports_invalid_payload() {
    // テスト項目: 想定外の JSON は InvalidPayload エラーになる
    // given (前提条件):
    let api = FakeApi::default();
    api.set_members(3, json!({ "members": [] }));
    let base_url = start_fake_api(api).await;
    let source = HttpMemberSource::new(reqwest::Client::new(), base_url);

    // when (操作):
    let result = source.fetch_members(3).await;

    // then (期待する結果):
    assert!(matches!(result, Err(MemberSourceError::InvalidPayload(_))));
}

#[tokio::test]
async fn test_http_rtc_config_source_sends_user_and_room() {
    // テスト項目: ICE 設定の取得時にユーザー番号と部屋番号が渡される
    // given (前提条件):
    let api = FakeApi::default();
    let base_url = start_fake_api(api.clone()).await;
    let source = HttpRtcConfigSource::new(reqwest::Client::new(), base_url);

    // when (操作):
    let config = source.fetch_rtc_config(12, 2).await.unwrap();

    // then (期待する結果):
    assert_eq!(config.ice_servers.len(), 2);
    assert_eq!(config.ice_servers[1].username.as_deref(), Some("room"));
    let requests = api.ice_requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].get("userId").map(String::as_str), Some("12"));
    assert_eq!(requests[0].get("roomId").map(String::as_str), Some("2"));
}

#[tokio::test]
async fn test_unreachable_rtc_config_service_falls_back_to_stun() {
    // テスト項目: 設定サービスに接続できない場合は STUN のみの設定になる
    // given (前提条件): 一度 bind して閉じたポートを使う
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let source = HttpRtcConfigSource::new(reqwest::Client::new(), format!("http://{}", addr));
    let usecase = AcquireRtcConfigUseCase::new(Arc::new(source));

    // when (操作):
    let config = usecase.execute(&MemberId::from_user_number(1), 2).await;

    // then (期待する結果):
    assert_eq!(config, RtcConfig::fallback());
    assert_eq!(config.ice_servers.len(), 1);
}

#[tokio::test]
async fn test_session_offers_to_peers_from_live_api() {
    // テスト項目: ライブの参加者リストに基づき、自分より大きい ID にだけオファーが送られる
    // given (前提条件):
    let api = FakeApi::default();
    api.set_members(
        2,
        json!([
            member_json(1, "host", "HOST"),
            member_json(2, "me", "MEMBER"),
            member_json(5, "late", "MEMBER")
        ]),
    );
    let base_url = start_fake_api(api.clone()).await;
    let http = reqwest::Client::new();
    let transport = Arc::new(DryRunPeerTransport::new());
    let ports = RoomPorts {
        member_source: Arc::new(HttpMemberSource::new(http.clone(), base_url.clone())),
        rtc_config_source: Arc::new(HttpRtcConfigSource::new(http, base_url)),
        transport: transport.clone(),
        media_source: Arc::new(StaticMediaSource::new("local")),
        clock: Arc::new(FixedClock::new(0)),
    };
    let mut session = MediaRoomSession::join(snapshot(), ports, None, fast_timing());
    session.start().await;

    // when (操作):
    session.poll_members().await;
    let scheduled = session.reconcile();
    session.wait_for_offers().await;

    // then (期待する結果):
    assert_eq!(scheduled, vec![MemberId::from_user_number(5)]);
    assert_eq!(transport.calls().await, vec![MemberId::from_user_number(5)]);
    assert_eq!(session.rtc_config().ice_servers.len(), 2);

    let stage = session.stage().await;
    assert!(stage.info.media_enabled);
    assert_eq!(stage.members.len(), 3);
    assert!(stage.members[1].is_me);

    let requests = api.ice_requests.lock().unwrap().clone();
    assert_eq!(requests[0].get("userId").map(String::as_str), Some("2"));
    assert!(session.leave().is_empty());
}

#[tokio::test]
async fn test_session_run_picks_up_newcomer() {
    // テスト項目: ポーリング中に入室した参加者にオファーが送られる
    // given (前提条件):
    let api = FakeApi::default();
    api.set_members(2, json!([member_json(2, "me", "MEMBER")]));
    let base_url = start_fake_api(api.clone()).await;
    let http = reqwest::Client::new();
    let transport = Arc::new(DryRunPeerTransport::new());
    let ports = RoomPorts {
        member_source: Arc::new(HttpMemberSource::new(http.clone(), base_url.clone())),
        rtc_config_source: Arc::new(HttpRtcConfigSource::new(http, base_url)),
        transport: transport.clone(),
        media_source: Arc::new(StaticMediaSource::new("local")),
        clock: Arc::new(FixedClock::new(0)),
    };
    let mut session = MediaRoomSession::join(snapshot(), ports, None, fast_timing());
    session.start().await;

    // when (操作): 少し遅れて u-7 が入室する
    let newcomer = api.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(150)).await;
        newcomer.set_members(
            2,
            json!([member_json(2, "me", "MEMBER"), member_json(7, "new", "MEMBER")]),
        );
    });
    session
        .run(tokio::time::sleep(Duration::from_millis(600)))
        .await;
    session.wait_for_offers().await;

    // then (期待する結果):
    assert_eq!(transport.calls().await, vec![MemberId::from_user_number(7)]);
}

#[tokio::test]
async fn test_run_room_client_once() {
    // テスト項目: --once 指定で 1 回分の処理を行い正常終了する
    // given (前提条件):
    let api = FakeApi::default();
    api.set_members(2, json!([member_json(1, "host", "HOST"), member_json(2, "me", "MEMBER")]));
    let base_url = start_fake_api(api).await;

    let dir = std::env::temp_dir().join(format!("studyroom-runner-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let snapshot_path = dir.join("room.json");
    let identity_path = dir.join("user.json");
    std::fs::write(
        &snapshot_path,
        r#"{ "info": { "id": "room-2", "title": "math" }, "members": [] }"#,
    )
    .unwrap();
    std::fs::write(&identity_path, r#"{ "userId": 2, "nickname": "me" }"#).unwrap();

    let config = ClientConfig {
        snapshot_path,
        api_url: base_url,
        identity_path: Some(identity_path),
        timing: fast_timing(),
        request_timeout: Duration::from_secs(2),
        once: true,
    };

    // when (操作):
    let result = studyroom_client::run_room_client(config).await;

    // then (期待する結果):
    assert!(result.is_ok());
    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_run_room_client_missing_snapshot() {
    // テスト項目: スナップショットが読めなければエラーになる
    // given (前提条件):
    let config = ClientConfig {
        snapshot_path: std::env::temp_dir().join("studyroom-no-such-room.json"),
        api_url: "http://127.0.0.1:1".to_string(),
        identity_path: None,
        timing: fast_timing(),
        request_timeout: Duration::from_secs(1),
        once: true,
    };

    // when (操作):
    let result = studyroom_client::run_room_client(config).await;

    // then (期待する結果):
    assert!(matches!(
        result,
        Err(studyroom_client::error::ClientError::Snapshot(_))
    ));
}
