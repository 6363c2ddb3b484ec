//! Turn engine: directional advancement around the table.

use crate::core::GameState;

/// Index of the player `offset` seats from `from` in the current
/// direction. Offset 1 is a normal turn advance; offset 2 skips one
/// player.
#[must_use]
pub fn next_player_index(state: &GameState, offset: i64, from: usize) -> usize {
    let count = state.player_count() as i64;
    let next = (from as i64 + state.direction.step() * offset).rem_euclid(count);
    next as usize
}

/// Move the turn `offset` seats from the current player.
///
/// Always resets the per-turn draw counter.
pub fn advance(state: &mut GameState, offset: i64) {
    state.current_player = next_player_index(state, offset, state.current_player);
    state.current_draws = 0;
}
