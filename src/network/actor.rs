//! Network actor - runs GitHub fetches in the Tokio async runtime

use std::collections::HashMap;
use std::time::Instant;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::GithubClient;

/// Tracks an in-flight fetch for cancellation
struct ActiveFetch {
    cancel_tx: oneshot::Sender<()>,
}

/// Network actor that processes fetch commands
pub struct NetworkActor {
    client: GithubClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_fetches: JoinSet<u64>,
    cancel_handles: HashMap<u64, ActiveFetch>,
}

impl NetworkActor {
    pub fn new(client: GithubClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_fetches: JoinSet::new(),
            cancel_handles: HashMap::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchUser { id, username }) => {
                            let (cancel_tx, cancel_rx) = oneshot::channel();
                            self.cancel_handles.insert(id, ActiveFetch { cancel_tx });

                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_fetches.spawn(async move {
                                fetch_user(&client, id, username, response_tx, cancel_rx).await;
                                id
                            });
                        }

                        Some(NetworkCommand::CancelFetch(id)) => {
                            if let Some(active) = self.cancel_handles.remove(&id) {
                                tracing::info!(id, "Cancelling fetch");
                                let _ = active.cancel_tx.send(());
                                let _ = self.response_tx.send(NetworkResponse::Cancelled { id });
                            }
                        }

                        Some(NetworkCommand::Shutdown) => {
                            for (_, active) in self.cancel_handles.drain() {
                                let _ = active.cancel_tx.send(());
                            }
                            break;
                        }

                        None => break,
                    }
                }

                Some(result) = self.active_fetches.join_next() => {
                    match result {
                        Ok(id) => {
                            self.cancel_handles.remove(&id);
                        }
                        Err(e) => tracing::error!(error = %e, "Fetch task failed"),
                    }
                }
            }
        }

        self.active_fetches.shutdown().await;
    }
}

/// Run one fetch to completion unless `cancel_rx` fires first
async fn fetch_user(
    client: &GithubClient,
    id: u64,
    username: String,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    mut cancel_rx: oneshot::Receiver<()>,
) {
    let start = Instant::now();
    tracing::info!(id, username = %username, "Fetching user");

    tokio::select! {
        biased;

        _ = &mut cancel_rx => {
            tracing::info!(id, "Fetch abandoned");
        }
        result = client.fetch_user(&username) => {
            let time_ms = start.elapsed().as_millis() as u64;
            let response = match result {
                Ok((profile, repos)) => {
                    tracing::info!(id, repos = repos.len(), time_ms, "Fetch completed");
                    NetworkResponse::UserLoaded {
                        id,
                        profile: Box::new(profile),
                        repos,
                        time_ms,
                    }
                }
                Err(e) => {
                    tracing::warn!(id, error = %e, time_ms, "Fetch failed");
                    NetworkResponse::Failed {
                        id,
                        retryable: e.is_transient(),
                        message: e.to_string(),
                        time_ms,
                    }
                }
            };
            let _ = response_tx.send(response);
        }
    }
}
