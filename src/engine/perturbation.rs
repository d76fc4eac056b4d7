//! Token-level text obfuscation applied to answers before they are stored.
//!
//! This is a best-effort heuristic. It makes verbatim answers harder to read
//! back out of stored sessions and prompts, but it is NOT a differential
//! privacy mechanism: there is no epsilon/delta accounting and no bound on
//! what an observer can infer from the output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_PERTURBATION_PROBABILITY: f64 = 0.5;

/// Explicit next-value interface over whatever randomness backs perturbation.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform value in `[0, bound)`. `bound` is always at least 1.
    fn next_below(&mut self, bound: usize) -> usize;
}

/// Adapts any `rand` generator.
pub struct RngSource<R: Rng>(R);

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }

    fn next_below(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound.max(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Noise {
    Shuffle,
    InsertRandom,
}

/// Splits `text` on whitespace and, with probability `p` per token, swaps the
/// token for a noisy variant. Tokens are re-joined with single spaces, so the
/// token count never changes.
pub fn perturb(text: &str, p: f64, rng: &mut dyn RandomSource) -> String {
    text.split_whitespace()
        .map(|token| {
            if rng.next_unit() < p {
                add_noise(token, rng)
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn add_noise(token: &str, rng: &mut dyn RandomSource) -> String {
    let noise = match rng.next_below(2) {
        0 => Noise::Shuffle,
        _ => Noise::InsertRandom,
    };

    match noise {
        Noise::Shuffle => shuffle_chars(token, rng),
        Noise::InsertRandom => insert_random_letter(token, rng),
    }
}

/// Fisher-Yates over chars so multi-byte characters survive intact.
/// Written out because `SliceRandom::shuffle` needs an `Rng`, not a `RandomSource`.
pub(crate) fn shuffle_chars(token: &str, rng: &mut dyn RandomSource) -> String {
    let mut chars: Vec<char> = token.chars().collect();
    for i in (1..chars.len()).rev() {
        let j = rng.next_below(i + 1);
        chars.swap(i, j);
    }
    chars.into_iter().collect()
}

/// Inserts one lowercase ASCII letter right after the first character.
/// An empty token becomes just the letter.
pub(crate) fn insert_random_letter(token: &str, rng: &mut dyn RandomSource) -> String {
    let letter = char::from(b'a' + (rng.next_below(26) % 26) as u8);

    let mut chars = token.chars();
    let mut out = String::with_capacity(token.len() + 1);
    if let Some(first) = chars.next() {
        out.push(first);
    }
    out.push(letter);
    out.push_str(chars.as_str());
    out
}
