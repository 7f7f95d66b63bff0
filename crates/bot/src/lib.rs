#![forbid(unsafe_code)]
#![deny(missing_docs, unused_must_use)]

//! Scheduling and social glue around the reply engine.
//!
//! This crate carries everything around the generation core that is not
//! numeric work: the [`client::SocialClient`] interface to the posting
//! service, the seed-phrase routing for daily posts and mention replies,
//! and a [`Bot`] that composes them. The bot is driven by `tick` with the
//! real current time supplied by the caller — it owns no loop, no timer
//! and no network connection.

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use engine::Engine;

/// Posting-service interface and mention type.
pub mod client;
/// Seed phrases and mention routing.
pub mod seeds;

pub use client::{Mention, SocialClient};

/// UTC hour of the daily status post.
pub const DAILY_POST_HOUR: u32 = 20;
/// Word cap for the daily status post.
const DAILY_POST_WORDS: usize = 35;
/// Word cap for mention replies.
const REPLY_WORDS: usize = 40;

/// The bot: one engine, one posting client, one RNG for seed selection.
pub struct Bot<'a, C: SocialClient> {
    client: C,
    engine: Engine<'a>,
    rng: ChaCha8Rng,
    last_post_day: Option<NaiveDate>,
}

impl<'a, C: SocialClient> Bot<'a, C> {
    /// Build a bot around an initialized engine and client.
    pub fn new(client: C, engine: Engine<'a>, rng_seed: u64) -> Self {
        Self {
            client,
            engine,
            rng: ChaCha8Rng::seed_from_u64(rng_seed),
            last_post_day: None,
        }
    }

    /// Run one scheduling pass at the given wall-clock time: publish the
    /// daily status once per day during the posting hour, then answer at
    /// most one pending mention. Errors from the client bubble up;
    /// generation itself cannot fail.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Result<(), C::Error> {
        let today = now.date_naive();
        if now.hour() == DAILY_POST_HOUR && self.last_post_day != Some(today) {
            // mark the day first so a failed post is not retried all hour
            self.last_post_day = Some(today);
            let seed = seeds::DAILY_SEEDS[self.rng.gen_range(0..seeds::DAILY_SEEDS.len())];
            let post = self.engine.generate(seed, DAILY_POST_WORDS);
            self.client.post_status(&post)?;
        }

        if let Some(mention) = self.client.check_mentions()? {
            let message = seeds::strip_handles(&mention.text);
            let reply = self.engine.generate(seeds::seed_for_mention(&message), REPLY_WORDS);
            self.client.post_reply(&reply, &mention.uri, &mention.cid)?;
        }
        Ok(())
    }

    /// Day of the last published daily post, if any.
    pub fn last_post_day(&self) -> Option<NaiveDate> {
        self.last_post_day
    }
}
