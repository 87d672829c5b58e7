//! Command line configuration of the media-room client.

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::session::{
    DEFAULT_OFFER_DELAY, DEFAULT_POLL_INTERVAL, DEFAULT_RETRY_DELAY, SessionTiming,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "studyroom-client")]
#[command(about = "Headless study-room media client: polls members and orchestrates WebRTC offers", long_about = None)]
pub struct Args {
    /// Room snapshot JSON captured at room entry
    #[arg(short = 's', long)]
    pub snapshot: PathBuf,

    /// Base URL of the room API
    #[arg(short = 'u', long, default_value = "http://127.0.0.1:8080")]
    pub api_url: String,

    /// Persisted user record (JSON) identifying the local participant
    #[arg(short = 'i', long)]
    pub identity: Option<PathBuf>,

    /// Member list polling interval in milliseconds
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL.as_millis() as u64)]
    pub poll_interval_ms: u64,

    /// Delay before sending an offer in milliseconds
    #[arg(long, default_value_t = DEFAULT_OFFER_DELAY.as_millis() as u64)]
    pub offer_delay_ms: u64,

    /// Delay before retrying a failed offer in milliseconds
    #[arg(long, default_value_t = DEFAULT_RETRY_DELAY.as_millis() as u64)]
    pub retry_delay_ms: u64,

    /// HTTP request timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub request_timeout_ms: u64,

    /// Poll once, wait for scheduled offers, print the stage and exit
    #[arg(long)]
    pub once: bool,

    /// Default log level (overridden by RUST_LOG)
    #[arg(short = 'l', long, default_value = "info")]
    pub log_level: String,
}

/// Runtime configuration of the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub snapshot_path: PathBuf,
    pub api_url: String,
    pub identity_path: Option<PathBuf>,
    pub timing: SessionTiming,
    pub request_timeout: Duration,
    pub once: bool,
}

impl From<Args> for ClientConfig {
    fn from(args: Args) -> Self {
        Self {
            snapshot_path: args.snapshot,
            api_url: args.api_url,
            identity_path: args.identity,
            timing: SessionTiming {
                poll_interval: Duration::from_millis(args.poll_interval_ms),
                offer_delay: Duration::from_millis(args.offer_delay_ms),
                retry_delay: Duration::from_millis(args.retry_delay_ms),
            },
            request_timeout: Duration::from_millis(args.request_timeout_ms),
            once: args.once,
        }
    }
}
