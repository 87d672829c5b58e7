//! Client execution logic.

use std::sync::Arc;

use studyroom_shared::time::SystemClock;

use crate::{
    config::ClientConfig,
    domain::{RoomSnapshot, identity::load_persisted_identity},
    error::ClientError,
    infrastructure::{
        http::{HttpMemberSource, HttpRtcConfigSource},
        identity::JsonFileIdentityStore,
        media::StaticMediaSource,
        transport::DryRunPeerTransport,
    },
    session::{MediaRoomSession, RoomPorts},
    ui::StageFormatter,
};

/// Run the media-room client until Ctrl+C (or a single cycle with `once`)
pub async fn run_room_client(config: ClientConfig) -> Result<(), ClientError> {
    let room = RoomSnapshot::load(&config.snapshot_path)?;

    let persisted_id = config
        .identity_path
        .as_ref()
        .and_then(|path| load_persisted_identity(&JsonFileIdentityStore::new(path)));

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;

    let ports = RoomPorts {
        member_source: Arc::new(HttpMemberSource::new(http.clone(), config.api_url.clone())),
        rtc_config_source: Arc::new(HttpRtcConfigSource::new(http, config.api_url.clone())),
        transport: Arc::new(DryRunPeerTransport::new()),
        media_source: Arc::new(StaticMediaSource::new("local")),
        clock: Arc::new(SystemClock),
    };

    let mut session = MediaRoomSession::join(room, ports, persisted_id, config.timing);
    session.start().await;

    if config.once {
        session.poll_members().await;
        session.reconcile();
        session.wait_for_offers().await;
    } else {
        print!("{}", StageFormatter::format_stage(&session.stage().await));
        session.run(shutdown_signal()).await;
    }

    print!("{}", StageFormatter::format_stage(&session.stage().await));
    let failed = session.leave();
    print!("{}", StageFormatter::format_failed_offers(&failed));

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Ctrl+C received, leaving room");
}
