//! Network messages - communication between App and Network layers

use crate::models::{Profile, Repository};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Fetch a user's profile and repositories
    FetchUser { id: u64, username: String },
    /// Cancel a pending fetch
    CancelFetch(u64),
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Profile and repositories fetched
    UserLoaded {
        id: u64,
        profile: Box<Profile>,
        repos: Vec<Repository>,
        time_ms: u64,
    },
    /// Fetch failed
    Failed {
        id: u64,
        message: String,
        /// Whether trying again later may succeed (rate limit, 5xx, transport)
        retryable: bool,
        time_ms: u64,
    },
    /// Fetch was cancelled
    Cancelled { id: u64 },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::UserLoaded { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
            NetworkResponse::Cancelled { id } => *id,
        }
    }
}
