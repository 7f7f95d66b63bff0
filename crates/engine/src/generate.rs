#![forbid(unsafe_code)]

use std::collections::TryReserveError;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::clean;
use crate::dense;
use crate::lstm;
use crate::sampler;
use crate::vocab::{self, Vocab, TERMINATOR};
use crate::weights::ModelWeights;

/// Longest seed prefix fed into the recurrent state; excess seed words
/// are dropped, never an error.
pub const SEQ_LENGTH: usize = 40;
/// Default cap on generated words.
pub const DEFAULT_MAX_WORDS: usize = 40;
/// Sampling temperature used for every draw.
pub const TEMPERATURE: f32 = 0.8;

/// Fatal construction-time problems. Everything after a successful
/// construction is total.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A scratch or state buffer could not be allocated.
    #[error("buffer allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
    /// The word table does not match the weight view.
    #[error("vocabulary has {vocab} words but weights expect {expected}")]
    VocabSize {
        /// Number of entries in the supplied vocabulary.
        vocab: usize,
        /// Vocabulary size declared by the weights.
        expected: usize,
    },
}

fn zeroed(len: usize) -> Result<Vec<f32>, TryReserveError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)?;
    v.resize(len, 0.0);
    Ok(v)
}

/// The generation engine: borrowed read-only weights, an owned word
/// table, the recurrent state, and every scratch buffer the numeric path
/// touches. All buffers are sized from the weight dims and allocated
/// exactly once here; `generate` performs no numeric allocation.
///
/// `generate` takes `&mut self` — the state vectors and scratch are
/// shared across calls, so one generation is in flight at a time.
pub struct Engine<'a> {
    weights: ModelWeights<'a>,
    vocab: Vocab,
    rng: ChaCha8Rng,
    temperature: f32,
    // recurrent state, zeroed at the start of every call
    h: Vec<f32>,
    c: Vec<f32>,
    // scratch
    embedded: Vec<f32>,
    gates: Vec<f32>,
    output: Vec<f32>,
    logits: Vec<f32>,
    probs: Vec<f32>,
    seed_tokens: Vec<usize>,
}

impl<'a> Engine<'a> {
    /// Allocate all buffers and seed the sampling RNG. Identical
    /// `rng_seed` plus identical inputs reproduce the same output.
    pub fn new(weights: ModelWeights<'a>, vocab: Vocab, rng_seed: u64) -> Result<Self, EngineError> {
        if vocab.len() != weights.dims.vocab {
            return Err(EngineError::VocabSize {
                vocab: vocab.len(),
                expected: weights.dims.vocab,
            });
        }
        let d = weights.dims;
        let mut seed_tokens = Vec::new();
        seed_tokens.try_reserve_exact(SEQ_LENGTH)?;
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(rng_seed),
            temperature: TEMPERATURE,
            h: zeroed(d.hidden)?,
            c: zeroed(d.hidden)?,
            embedded: zeroed(d.embed)?,
            gates: zeroed(d.hidden * 4)?,
            output: zeroed(d.hidden)?,
            logits: zeroed(d.vocab)?,
            probs: zeroed(d.vocab)?,
            seed_tokens,
            weights,
            vocab,
        })
    }

    /// The word table in use.
    pub fn vocab(&self) -> &Vocab {
        &self.vocab
    }

    /// Override the sampling temperature (strictly positive).
    pub fn set_temperature(&mut self, temperature: f32) {
        self.temperature = temperature;
    }

    // Embed one token and advance the recurrent state on it.
    fn advance(&mut self, token: usize) {
        self.weights.embed(token, &mut self.embedded);
        lstm::step(
            &self.weights,
            &self.embedded,
            &mut self.h,
            &mut self.c,
            &mut self.gates,
            &mut self.output,
        );
    }

    /// Generate a cleaned reply from `seed_text`, capped at `max_words`
    /// sampled words. Always returns a string, possibly empty; no input
    /// can make this fail.
    ///
    /// The seed is split on whitespace, tokenized (unknown words become
    /// the `<UNK>` marker) and fed through the cell to prime the state,
    /// outputs discarded. Sampled marker words are kept out of the text
    /// but still advance the state; the literal `.` terminates.
    pub fn generate(&mut self, seed_text: &str, max_words: usize) -> String {
        self.seed_tokens.clear();
        for word in seed_text.split_whitespace().take(SEQ_LENGTH) {
            self.seed_tokens.push(self.vocab.token_id(word));
        }

        self.h.fill(0.0);
        self.c.fill(0.0);
        self.output.fill(0.0);
        for i in 0..self.seed_tokens.len() {
            let token = self.seed_tokens[i];
            self.advance(token);
        }

        let mut response = String::new();
        for _ in 0..max_words {
            dense::project(&self.weights, &self.output, &mut self.logits);
            let idx = sampler::sample(&self.logits, self.temperature, &mut self.probs, &mut self.rng);

            let word = self.vocab.word(idx);
            if vocab::is_marker(word) {
                // markers stay out of the text but still drive the state
                self.advance(idx);
                continue;
            }
            if word == TERMINATOR {
                response.push_str(TERMINATOR);
                break;
            }
            if !response.is_empty() {
                response.push(' ');
            }
            response.push_str(word);
            self.advance(idx);
        }

        clean::clean(&response)
    }
}
