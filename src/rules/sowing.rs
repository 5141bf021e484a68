//! Sowing: distributing the stones of one pit around the board.

use tracing::trace;

use crate::core::{Board, Player};

/// Empty `pit` and sow its stones one per cell, counter-clockwise.
///
/// The opponent's store is skipped without consuming a stone; the mover's
/// own store receives stones like any pit. Returns the index that received
/// the last stone (the landing pit), or `pit` itself if it was empty.
///
/// The caller guarantees `pit` is on the board.
pub fn sow(board: &mut Board, pit: usize, mover: Player) -> usize {
    let skip = board.store_index(mover.other());
    let len = board.len();
    let mut remaining = board.take(pit);
    let mut index = pit;

    while remaining > 0 {
        index = (index + 1) % len;
        if index == skip {
            trace!(index, "skipping opponent store");
            continue;
        }
        board.add(index, 1);
        remaining -= 1;
    }

    index
}
