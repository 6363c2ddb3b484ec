//! Opaque version tokens for optimistic concurrency.
//!
//! Every accepted state transition stamps a fresh `VersionId` onto the
//! produced snapshot. The surrounding sync layer compares tokens for
//! equality to detect and discard stale remote proposals; nothing else is
//! ever read out of a token.
//!
//! The successor token is derived from the previous one with a SplitMix64
//! step, so stamping stays a pure function of the state being replaced.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Opaque 64-bit version token carried by every [`GameState`](super::GameState).
///
/// Tokens are only ever compared for equality. A rejected action returns
/// the input state with its token untouched, which is how callers detect
/// that nothing happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionId(u64);

impl VersionId {
    /// Create a token from a raw value (tests, replay tooling).
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw token value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Draw an initial token from the game's RNG.
    #[must_use]
    pub fn seed_from(rng: &mut GameRng) -> Self {
        Self(rng.next_u64())
    }

    /// Derive the successor token (SplitMix64 finalizer).
    #[must_use]
    pub fn next(self) -> Self {
        let mut z = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        Self(z ^ (z >> 31))
    }
}

impl std::fmt::Display for VersionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{:016x}", self.0)
    }
}
