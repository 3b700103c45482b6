//! Quote selection for the banner above the month bars.

mod quotes;

pub use quotes::QUOTES;

use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Supplies the quote shown when the window opens.
pub trait QuoteProvider {
    fn next(&mut self) -> String;
}

/// Picks uniformly at random from a fixed pool.
pub struct RandomQuotes<R: Rng = ThreadRng> {
    pool: &'static [&'static str],
    rng: R,
}

impl RandomQuotes<ThreadRng> {
    /// Random picks from the built-in pool.
    pub fn new() -> Self {
        Self::with_rng(QUOTES, rand::rng())
    }
}

impl Default for RandomQuotes<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomQuotes<R> {
    pub fn with_rng(pool: &'static [&'static str], rng: R) -> Self {
        Self { pool, rng }
    }
}

impl<R: Rng> QuoteProvider for RandomQuotes<R> {
    fn next(&mut self) -> String {
        self.pool
            .choose(&mut self.rng)
            .map(|quote| quote.to_string())
            .unwrap_or_default()
    }
}

/// Walks a list in order and starts over at the end.
#[derive(Debug, Clone, Default)]
pub struct CyclingQuotes {
    quotes: Vec<String>,
    position: usize,
}

impl CyclingQuotes {
    pub fn new<I, S>(quotes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            quotes: quotes.into_iter().map(Into::into).collect(),
            position: 0,
        }
    }
}

impl QuoteProvider for CyclingQuotes {
    fn next(&mut self) -> String {
        if self.quotes.is_empty() {
            return String::new();
        }
        let quote = self.quotes[self.position % self.quotes.len()].clone();
        self.position = (self.position + 1) % self.quotes.len();
        quote
    }
}
