#![forbid(unsafe_code)]
#![deny(missing_docs, unused_must_use)]

//! Word-level LSTM reply engine.
//!
//! A tiny, auditable generation core: embedding lookup, a single gated
//! recurrent cell, a dense projection to vocabulary logits, and
//! temperature-scaled sampling, all evaluated with fixed-size buffers that
//! are allocated exactly once when the engine is built. The trained
//! tensors are an immutable borrowed view, so they can live in static
//! program data and be shared by every call.
//!
//! Layout (important files):
//! - `vocab.rs` — word table, reserved marker indices, tokenize/detokenize
//! - `weights.rs` — read-only tensor views + embedding lookup
//! - `lstm.rs` — the gated recurrent step
//! - `dense.rs` — hidden state -> vocabulary logits
//! - `sampler.rs` — temperature softmax + one uniform draw
//! - `generate.rs` — `Engine`: seed ingest, generation loop, scratch buffers
//! - `clean.rs` — post-processing of the raw reply
//! - `loader.rs` — f32 weight blobs and word lists from files
//! - `bin/chat.rs` — REPL that drives an `Engine` from stdin

/// Vocabulary table and word <-> index mapping.
pub mod vocab;
/// Read-only model tensors and embedding lookup.
pub mod weights;
/// Gated recurrent cell step.
pub mod lstm;
/// Dense output projection.
pub mod dense;
/// Temperature-scaled sampling over logits.
pub mod sampler;
/// The generation engine and its preallocated buffers.
pub mod generate;
/// Reply post-processing.
pub mod clean;
/// File helpers for weight blobs and word lists.
pub mod loader;

pub use generate::{Engine, EngineError, DEFAULT_MAX_WORDS};
pub use vocab::Vocab;
pub use weights::{Dims, ModelWeights, WeightsError};
