use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::ws::manager::WsManager;

/// Default spacing of keep-alive pings.
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);

/// Spawn the keep-alive task: every `period` each open socket gets a Ping.
///
/// The first ping goes out one full period after start, and a stalled tick is
/// not made up with a burst. The handle is aborted during shutdown.
pub fn start_heartbeat(ws_manager: Arc<WsManager>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let pinged = ws_manager.ping_all().await;
            if pinged > 0 {
                tracing::trace!(pinged, "Heartbeat sent");
            }
        }
    })
}
