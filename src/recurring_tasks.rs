use courtside_application::prelude::reconcile;
use courtside_core::entities::Timestamp;
use courtside_db_sqlite::Connections;
use std::time::Duration;

/// Periodically completes past bookings, repairs rating
/// aggregates and purges expired verification codes.
pub async fn run(connections: Connections, interval_time: Duration) {
    let mut interval = tokio::time::interval(interval_time);
    loop {
        interval.tick().await;
        let connections = connections.clone();
        let task = tokio::task::spawn_blocking(move || reconcile(&connections, Timestamp::now()));
        match task.await {
            Ok(outcome) => log::info!("Reconciliation finished: {outcome:?}"),
            Err(err) => log::error!("Reconciliation task failed: {err}"),
        }
    }
}
