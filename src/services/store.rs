//! Store service
//!
//! Runs the [`TopSitesStore`] on its own task. The UI side only holds a
//! [`StoreDispatcher`]: actions go over a channel, and after each one the
//! service sends back a [`StoreSnapshot`] the UI renders from.

use tokio::sync::mpsc;

use crate::actions::{Action, Dispatch};
use crate::model::Link;
use crate::store::{NavigationRequest, StoreStats, TopSitesStore};

/// State published by the store after handling one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub rows: Vec<Link>,
    /// Type of the action that produced this snapshot
    pub action: String,
    pub navigation: Option<NavigationRequest>,
    pub stats: StoreStats,
}

/// Dispatch boundary handed to tiles; forwards actions to the store task
#[derive(Debug, Clone)]
pub struct StoreDispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatch for StoreDispatcher {
    fn dispatch(&mut self, action: Action) {
        if let Err(e) = self.tx.send(action) {
            log::warn!("store service stopped, dropping {}", e.0.describe());
        }
    }
}

/// Spawn the store service
///
/// Returns the dispatcher and the receiver of snapshots. The task ends when
/// every dispatcher has been dropped or the snapshot receiver is gone.
pub fn spawn_store_service(
    mut store: TopSitesStore,
) -> (StoreDispatcher, mpsc::UnboundedReceiver<StoreSnapshot>) {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (snapshot_tx, snapshot_rx) = mpsc::unbounded_channel::<StoreSnapshot>();

    tokio::spawn(async move {
        log::debug!("store service started with {} rows", store.rows().len());

        while let Some(action) = action_rx.recv().await {
            store.dispatch(action);

            let snapshot = StoreSnapshot {
                rows: store.rows().to_vec(),
                action: store.last_action().unwrap_or_default().to_string(),
                navigation: store.take_navigation(),
                stats: store.stats(),
            };
            if snapshot_tx.send(snapshot).is_err() {
                break;
            }
        }

        log::debug!("store service stopped");
    });

    (StoreDispatcher { tx: action_tx }, snapshot_rx)
}
