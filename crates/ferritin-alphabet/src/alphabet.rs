//! Letter representation of twelve-state symbols.
//!
//! States are written with the first twelve letters of the one-letter amino acid
//! alphabet, so sequences can be stored and aligned with ordinary FASTA tooling. The
//! invalid state 6 prints as `H`.
use crate::twelve_state::STATE_COUNT;

pub const ALPHABET: [u8; STATE_COUNT] = *b"ACDEFGHIKLMN";

/// Printed for bytes outside of `0..STATE_COUNT`.
pub const UNKNOWN_CHAR: char = 'X';

pub fn state_to_char(state: u8) -> Option<char> {
    ALPHABET.get(state as usize).map(|&b| b as char)
}

pub fn char_to_state(c: char) -> Option<u8> {
    let upper = c.to_ascii_uppercase();
    ALPHABET
        .iter()
        .position(|&b| b as char == upper)
        .map(|idx| idx as u8)
}

pub fn states_to_string(states: &[u8]) -> String {
    states
        .iter()
        .map(|&s| state_to_char(s).unwrap_or(UNKNOWN_CHAR))
        .collect()
}
