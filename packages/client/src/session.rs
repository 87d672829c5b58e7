//! Media room session.
//!
//! One `MediaRoomSession` exists per joined room. It owns the offer
//! bookkeeping (started peers and the last candidate key), so nothing
//! outlives the room: the state is created by [`MediaRoomSession::join`] and
//! dropped by [`MediaRoomSession::leave`].
//!
//! Every input change (member poll, media or identity becoming available)
//! ends in [`MediaRoomSession::reconcile`], which schedules offers for new
//! peers when the local participant is the initiator.

use std::{future::Future, sync::Arc, time::Duration};

use studyroom_shared::time::Clock;
use tokio::{
    task::{JoinError, JoinSet},
    time::MissedTickBehavior,
};

use crate::{
    domain::{
        MediaSource, MediaStreamHandle, Member, MemberId, MemberSource, OfferPlanner,
        PeerTransport, RoomInfo, RoomSnapshot, RtcConfig, RtcConfigSource, StreamsByUser,
        TransportError,
        roster::{effective_self_id, live_members, merge_rosters, resolve_self_id},
    },
    usecase::{AcquireRtcConfigUseCase, OfferOutcome, SendOfferUseCase, SyncRosterUseCase},
};

/// Member list polling interval
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(8000);
/// Delay before the first offer so local tracks can attach
pub const DEFAULT_OFFER_DELAY: Duration = Duration::from_millis(400);
/// Delay before the single offer retry
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Timers used by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTiming {
    pub poll_interval: Duration,
    pub offer_delay: Duration,
    pub retry_delay: Duration,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            offer_delay: DEFAULT_OFFER_DELAY,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

/// External collaborators of a session
#[derive(Clone)]
pub struct RoomPorts {
    pub member_source: Arc<dyn MemberSource>,
    pub rtc_config_source: Arc<dyn RtcConfigSource>,
    pub transport: Arc<dyn PeerTransport>,
    pub media_source: Arc<dyn MediaSource>,
    pub clock: Arc<dyn Clock>,
}

/// Offer that failed on every attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedOffer {
    pub peer: MemberId,
    pub attempts: u32,
    pub error: TransportError,
    /// Unix timestamp (milliseconds) when the last attempt failed
    pub failed_at: i64,
}

/// What the enclosing page renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomStage {
    pub info: RoomInfo,
    /// Live member list (self included)
    pub members: Vec<Member>,
    /// Stream per member, the local participant included
    pub streams: StreamsByUser,
    /// Unix timestamp (milliseconds) of room entry
    pub joined_at: i64,
}

/// Per-room session state and orchestration
pub struct MediaRoomSession {
    room: RoomSnapshot,
    room_number: u64,
    /// Identity resolved at join (persisted record, then snapshot)
    self_id: Option<MemberId>,
    joined_at: i64,

    transport: Arc<dyn PeerTransport>,
    media_source: Arc<dyn MediaSource>,
    clock: Arc<dyn Clock>,
    sync_roster: SyncRosterUseCase,
    acquire_rtc_config: AcquireRtcConfigUseCase,
    send_offer: Arc<SendOfferUseCase>,
    poll_interval: Duration,

    live_members: Vec<Member>,
    members: Vec<Member>,
    local_stream: Option<MediaStreamHandle>,
    rtc_config: RtcConfig,

    planner: OfferPlanner,
    offers: JoinSet<(MemberId, OfferOutcome)>,
    failed_offers: Vec<FailedOffer>,
}

impl MediaRoomSession {
    /// Enter a room.
    ///
    /// # Arguments
    ///
    /// * `room` - Snapshot captured at room entry
    /// * `ports` - External collaborators
    /// * `persisted_id` - Identity from the persisted user record, if any
    /// * `timing` - Polling and offer timers
    pub fn join(
        room: RoomSnapshot,
        ports: RoomPorts,
        persisted_id: Option<MemberId>,
        timing: SessionTiming,
    ) -> Self {
        let room_number = room.info.room_number();
        let self_id = resolve_self_id(persisted_id, &room.members);
        let live = live_members(&[], self_id.as_ref(), &room.members);
        let members = merge_rosters(&room.members, &live);
        let joined_at = ports.clock.now_millis();

        tracing::info!(
            "joined room {}({}) as {}",
            room.info.id,
            room_number,
            self_id.as_ref().map_or("<unknown>", MemberId::as_str)
        );

        Self {
            room,
            room_number,
            self_id,
            joined_at,
            transport: Arc::clone(&ports.transport),
            media_source: ports.media_source,
            clock: ports.clock,
            sync_roster: SyncRosterUseCase::new(ports.member_source),
            acquire_rtc_config: AcquireRtcConfigUseCase::new(ports.rtc_config_source),
            send_offer: Arc::new(SendOfferUseCase::new(
                ports.transport,
                timing.offer_delay,
                timing.retry_delay,
            )),
            poll_interval: timing.poll_interval,
            live_members: live,
            members,
            local_stream: None,
            rtc_config: RtcConfig::fallback(),
            planner: OfferPlanner::new(),
            offers: JoinSet::new(),
            failed_offers: Vec::new(),
        }
    }

    /// Acquire local media and the ICE configuration, then reconcile.
    pub async fn start(&mut self) {
        self.init_media().await;
        self.refresh_rtc_config().await;
        self.reconcile();
    }

    /// Acquire the local capture and attach it to the transport.
    ///
    /// Failure leaves the session without local media; bring-up stays
    /// deferred until a later call succeeds.
    pub async fn init_media(&mut self) {
        match self.media_source.acquire().await {
            Ok(stream) => {
                self.transport.attach_local_stream(&stream).await;
                self.local_stream = Some(stream);
            }
            Err(e) => {
                tracing::warn!("local media unavailable: {}", e);
            }
        }
    }

    /// Fetch the ICE configuration for the current identity and hand it to
    /// the transport. Keeps the fallback configuration while identity is
    /// unresolved.
    pub async fn refresh_rtc_config(&mut self) {
        let Some(me) = self.me() else {
            tracing::debug!("rtc config: identity not resolved, keeping fallback");
            return;
        };
        self.rtc_config = self.acquire_rtc_config.execute(&me, self.room_number).await;
        self.transport.apply_config(&self.rtc_config).await;
    }

    /// Poll the member list once and rebuild the merged roster.
    ///
    /// On failure the previous live list is kept.
    pub async fn poll_members(&mut self) {
        match self
            .sync_roster
            .execute(self.room_number, self.self_id.as_ref(), &self.room.members)
            .await
        {
            Ok(live) => {
                self.members = merge_rosters(&self.room.members, &live);
                self.live_members = live;
            }
            Err(e) => {
                tracing::warn!("member poll failed, keeping previous list: {}", e);
            }
        }
    }

    /// Schedule offers for new peers of the current roster.
    ///
    /// Skipped while local media or identity is missing. Returns the peers an
    /// offer was scheduled for.
    pub fn reconcile(&mut self) -> Vec<MemberId> {
        let Some(me) = self.me() else {
            tracing::debug!("offer skip: identity not resolved");
            return Vec::new();
        };
        if self.local_stream.is_none() {
            tracing::debug!("offer skip: local stream not ready");
            return Vec::new();
        }

        let scheduled = self.planner.plan(&self.members, &me);
        for peer in &scheduled {
            tracing::debug!("offer scheduled -> {} from {}", peer, me);
            let send_offer = Arc::clone(&self.send_offer);
            let peer = peer.clone();
            self.offers.spawn(async move {
                let outcome = send_offer.execute(&peer).await;
                (peer, outcome)
            });
        }
        scheduled
    }

    /// Poll members on the configured interval until `shutdown` resolves.
    ///
    /// The first poll happens immediately.
    pub async fn run<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = ticker.tick() => {
                    self.poll_members().await;
                    self.reconcile();
                }
                Some(result) = self.offers.join_next(), if !self.offers.is_empty() => {
                    self.record_offer(result);
                }
            }
        }
    }

    /// Wait until every scheduled offer has finished.
    pub async fn wait_for_offers(&mut self) {
        while let Some(result) = self.offers.join_next().await {
            self.record_offer(result);
        }
    }

    /// Leave the room. Pending offers are aborted.
    ///
    /// Returns the offers that failed during the session.
    pub fn leave(mut self) -> Vec<FailedOffer> {
        let pending = self.offers.len();
        self.offers.abort_all();
        tracing::info!(
            "left room {} ({} pending offers aborted, {} failed)",
            self.room.info.id,
            pending,
            self.failed_offers.len()
        );
        self.failed_offers
    }

    fn record_offer(&mut self, result: Result<(MemberId, OfferOutcome), JoinError>) {
        match result {
            Ok((peer, OfferOutcome::Sent { attempts })) => {
                tracing::debug!("offer to {} sent after {} attempt(s)", peer, attempts);
            }
            Ok((peer, OfferOutcome::Failed { attempts, error })) => {
                self.failed_offers.push(FailedOffer {
                    peer,
                    attempts,
                    error,
                    failed_at: self.clock.now_millis(),
                });
            }
            Err(e) if e.is_cancelled() => {
                tracing::debug!("offer task cancelled");
            }
            Err(e) => {
                tracing::warn!("offer task failed: {}", e);
            }
        }
    }

    /// Identity used for bring-up (snapshot me, live me, resolved id)
    pub fn me(&self) -> Option<MemberId> {
        effective_self_id(&self.room.members, &self.live_members, self.self_id.as_ref())
    }

    /// Streams per member, including the local participant's own stream
    pub async fn streams_by_user(&self) -> StreamsByUser {
        let mut streams: StreamsByUser = self
            .transport
            .remote_streams()
            .await
            .into_iter()
            .map(|(peer, stream)| (peer, Some(stream)))
            .collect();

        if let Some(me) = self.me()
            && let Ok(key) = MemberId::normalized(me.as_str())
        {
            streams.insert(key, self.local_stream.clone());
        }
        streams
    }

    /// Room as rendered by the stage
    pub async fn stage(&self) -> RoomStage {
        RoomStage {
            info: RoomInfo {
                media_enabled: true,
                ..self.room.info.clone()
            },
            members: self.live_members.clone(),
            streams: self.streams_by_user().await,
            joined_at: self.joined_at,
        }
    }

    /// Merged roster (snapshot ∪ live)
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Live member list
    pub fn live_members(&self) -> &[Member] {
        &self.live_members
    }

    pub fn rtc_config(&self) -> &RtcConfig {
        &self.rtc_config
    }

    pub fn failed_offers(&self) -> &[FailedOffer] {
        &self.failed_offers
    }

    /// Number of offers still waiting or in flight
    pub fn pending_offers(&self) -> usize {
        self.offers.len()
    }
}
