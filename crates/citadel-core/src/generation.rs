// ── Fetch generation tracking ──
//
// Every navigation that starts a fetch advances the generation, and
// the spawned request carries its token. By the time a response comes
// back, a newer navigation may have superseded it; a completion with a
// stale token must be discarded, not applied to the current view.

/// Token carried by one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Monotonic generation counter for fetch completions.
#[derive(Debug, Default)]
pub struct Generation(u64);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch generation, invalidating all earlier tokens.
    pub fn advance(&mut self) -> FetchToken {
        self.0 += 1;
        FetchToken(self.0)
    }

    /// Whether a completed fetch is still the latest one.
    pub fn is_current(&self, token: FetchToken) -> bool {
        self.0 == token.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn latest_token_is_current() {
        let mut generation = Generation::new();
        let token = generation.advance();
        assert!(generation.is_current(token));
    }

    #[test]
    fn advancing_invalidates_earlier_tokens() {
        let mut generation = Generation::new();
        let first = generation.advance();
        let second = generation.advance();

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn tokens_from_before_any_advance_are_never_current() {
        let mut stale_source = Generation::new();
        let stale = stale_source.advance();

        let generation = Generation::new();
        assert!(!generation.is_current(stale));
    }
}
