//! Pairing of twelve-state symbols with a primary structural alphabet.
//!
//! A residue with primary state `p` and twelve-state symbol `s`, both in `0..12`,
//! is stored as the single code `p * 12 + s`. Codes therefore range over `0..144`.
use crate::twelve_state::STATE_COUNT;

pub const COMBINED_COUNT: usize = STATE_COUNT * STATE_COUNT;

pub fn combine(primary: u8, twelve_state: u8) -> Option<u8> {
    let states = STATE_COUNT as u8;
    (primary < states && twelve_state < states).then(|| primary * states + twelve_state)
}

/// Inverse of [`combine`]: `(primary, twelve_state)`.
pub fn split(combined: u8) -> Option<(u8, u8)> {
    let states = STATE_COUNT as u8;
    ((combined as usize) < COMBINED_COUNT).then(|| (combined / states, combined % states))
}
