//! Random sources for shot trials.
//!
//! Every simulation pulls from its own stream derived from a user-visible
//! seed, so two runs never share generator state and any run can be replayed
//! from `(seed, run index)`.
use hmac::{Hmac, Mac};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::Sha256;

use crate::constants::LOG_TARGET_RNG;

/// Source of uniform draws in `[0, 100)`.
pub trait RandomSource {
    fn draw_percent(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn draw_percent(&mut self) -> f64 {
        self.gen_range(0.0..100.0)
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// An empty script yields `0.0` on every draw.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedDraws {
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of draws served so far.
    #[must_use]
    pub const fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedDraws {
    fn draw_percent(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor = self.cursor.saturating_add(1);
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.saturating_add(1);
        value
    }
}

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl CountingRng<ChaCha20Rng> {
    fn from_stream_seed(seed: u64) -> Self {
        Self::wrap(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> CountingRng<R> {
    #[must_use]
    pub const fn wrap(rng: R) -> Self {
        Self { rng, draws: 0 }
    }

    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: RngCore> RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}

/// HMAC-SHA256 domain separation of a user seed into an independent stream seed.
#[must_use]
pub fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()).expect("64-bit seed is valid key");
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let mut seed_bytes = [0_u8; 8];
    seed_bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed_bytes)
}

/// Issues one fresh stream per simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialStreams {
    user_seed: u64,
    issued: u64,
}

impl TrialStreams {
    #[must_use]
    pub const fn from_user_seed(user_seed: u64) -> Self {
        Self {
            user_seed,
            issued: 0,
        }
    }

    #[must_use]
    pub const fn user_seed(&self) -> u64 {
        self.user_seed
    }

    /// Streams handed out so far.
    #[must_use]
    pub const fn issued(&self) -> u64 {
        self.issued
    }

    /// Stream for the next run; advances the run counter.
    pub fn next_stream(&mut self) -> CountingRng<ChaCha20Rng> {
        let stream = self.stream_for_run(self.issued);
        self.issued = self.issued.saturating_add(1);
        stream
    }

    /// Stream for a specific run index, without touching the counter.
    #[must_use]
    pub fn stream_for_run(&self, run: u64) -> CountingRng<ChaCha20Rng> {
        let tag = format!("trials/{run}");
        let seed = derive_stream_seed(self.user_seed, tag.as_bytes());
        log::trace!(target: LOG_TARGET_RNG, "run {run} of seed {} -> stream {seed:#018x}", self.user_seed);
        CountingRng::from_stream_seed(seed)
    }
}
