//! Completion score.
//!
//! | Hardware signer | Wallet | Node | `"none"` signer | Score |
//! |-----------------|--------|------|-----------------|-------|
//! | yes | yes | yes | - | 120 |
//! | yes | yes | no  | - | 100 |
//! | no  | yes | yes | yes | 80 |
//! | no  | yes | no  | yes | 60 |
//! | yes | no  | -   | - | 50 |
//! | otherwise | | | | 0 |

use crate::models::SelectionState;

/// Highest reachable score: hardware signer, wallet and node.
pub const MAX_SCORE: u8 = 120;

/// Score for a complete setup without a node.
pub const COMPLETE_SCORE: u8 = 100;

/// Completion percentage for a selection.
pub fn score(state: &SelectionState) -> u8 {
    let hardware = state.has_hardware_signer();
    let none = state.has_none_signer();
    let wallet = state.wallet().is_some();
    let node = state.node().is_some();

    match (hardware, wallet, node, none) {
        (true, true, true, _) => MAX_SCORE,
        (true, true, false, _) => COMPLETE_SCORE,
        (false, true, true, true) => 80,
        (false, true, false, true) => 60,
        (true, false, _, _) => 50,
        _ => 0,
    }
}
