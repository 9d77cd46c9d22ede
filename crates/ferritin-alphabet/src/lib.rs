//! # ferritin-alphabet
//!
//! Discretize protein backbones into structural alphabets.
//!
//! The [`TwelveStateEncoder`] turns per-residue CA/N/C/CB coordinates into one of
//! twelve states per residue. The states are designed to be paired with a primary
//! structural alphabet ([`combined`]) so that structures can be indexed and searched
//! with sequence algorithms.
//!
//! ```ignore
//! use ferritin_alphabet::{states_to_string, TwelveStateEncoder};
//! use ferritin_core::ChainBackbone;
//!
//! let (pdb, _warnings) = pdbtbx::open("1abc.pdb").unwrap();
//! let mut encoder = TwelveStateEncoder::new();
//! for mut chain in ChainBackbone::from_pdb(&pdb) {
//!     let states = encoder.encode_chain(&mut chain);
//!     println!("{}: {}", chain.chain_id, states_to_string(states));
//! }
//! ```
pub mod alphabet;
pub mod combined;
pub mod twelve_state;

pub use alphabet::{char_to_state, state_to_char, states_to_string};
pub use twelve_state::{
    EncoderBuffers, Feature, LinearModel, TwelveStateEncoder, FEATURE_COUNT, INVALID_STATE,
    STATE_COUNT,
};
