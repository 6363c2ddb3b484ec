//! Wire payloads and the optimistic-update rule.
//!
//! The engine is consumed through three message kinds exchanged between a
//! host and its participants. The schema is transport-agnostic; the
//! helpers here encode to JSON because the original relay shipped JSON
//! strings, but any serde format works on the same types.
//!
//! ## Versioning
//!
//! An `updategame` carries the version id the sender computed against.
//! The receiver accepts the proposal only when that id matches its own
//! current state - otherwise the proposal raced a newer accepted action
//! and is discarded (last-writer-conflict rejection, not merge). The
//! host's next broadcast is the recovery path.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{GameState, VersionId};

/// A message between host and participants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Message {
    /// Host -> participants: current membership, in seating order.
    Peerlist { peers: Vec<String> },

    /// Participant -> host: announce a display name.
    Newpeer { peer: String },

    /// Either direction: a full snapshot plus the version it was computed
    /// against.
    Updategame {
        prior_id: VersionId,
        game: GameState,
    },
}

/// Encode a message as JSON.
pub fn encode(message: &Message) -> Result<String, serde_json::Error> {
    serde_json::to_string(message)
}

/// Decode a message from JSON.
pub fn decode(raw: &str) -> Result<Message, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Apply a remotely proposed snapshot against the local state.
///
/// Returns the proposal when it was computed against the local version;
/// otherwise logs the stale update and returns the local state unchanged.
#[must_use]
pub fn apply_update(local: &GameState, prior_id: VersionId, proposed: &GameState) -> GameState {
    if prior_id == local.id {
        proposed.clone()
    } else {
        warn!(local = %local.id, proposal_against = %prior_id, "discarding stale game update");
        local.clone()
    }
}
