//! Headless study-room media client.
//!
//! Enters a room from a snapshot file, polls the member list every 8 seconds
//! and sends WebRTC offers to peers this participant is the initiator for.
//! The room stage (members and streams) is printed on entry and on exit.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin studyroom-client -- --snapshot demos/room-2.json --identity demos/user.json
//! cargo run --bin studyroom-client -- -s demos/room-2.json -u http://127.0.0.1:8080 --once
//! ```

use clap::Parser;

use studyroom_client::config::{Args, ClientConfig};
use studyroom_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    if let Err(e) = studyroom_client::run_room_client(ClientConfig::from(args)).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
