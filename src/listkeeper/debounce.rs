use chrono::{DateTime, Duration, Utc};

/// Quiet period after the last keystroke before a search term is committed.
pub const DEBOUNCE_WINDOW_MS: i64 = 400;

/// Terms shorter than this are suppressed, except for the empty string,
/// which clears the filter.
pub const MIN_TERM_LEN: usize = 3;

#[derive(Debug, Clone)]
struct Pending {
    term: String,
    fire_at: DateTime<Utc>,
}

/// Turns a raw stream of keystroke values into committed search terms.
///
/// The host event loop feeds every input change through
/// [`input`](SearchDebouncer::input) and calls [`poll`](SearchDebouncer::poll)
/// on its ticks; there are no threads or timers here, only deadlines. Each
/// new input supersedes the pending one, so a burst of keystrokes commits
/// only its final value, once the window of inactivity has elapsed.
///
/// Gating happens at commit time: terms shorter than [`MIN_TERM_LEN`] are
/// dropped, and a term equal to the previously committed one is dropped.
/// The empty string is exempt from both the window and the length gate, so
/// clearing the filter takes effect immediately.
#[derive(Debug, Clone, Default)]
pub struct SearchDebouncer {
    window: Option<Duration>,
    pending: Option<Pending>,
    last_committed: Option<String>,
}

impl SearchDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the debounce window, for tests that don't want to model
    /// 400ms of silence.
    pub fn with_window(window: Duration) -> Self {
        Self {
            window: Some(window),
            pending: None,
            last_committed: None,
        }
    }

    fn window(&self) -> Duration {
        self.window
            .unwrap_or_else(|| Duration::milliseconds(DEBOUNCE_WINDOW_MS))
    }

    /// Record an input change at `now`. Cancels any pending commit and
    /// schedules this term instead. An empty term commits immediately and
    /// is returned here rather than from a later `poll`.
    pub fn input(&mut self, term: &str, now: DateTime<Utc>) -> Option<String> {
        if term.is_empty() {
            self.pending = None;
            return self.commit(String::new());
        }

        self.pending = Some(Pending {
            term: term.to_string(),
            fire_at: now + self.window(),
        });
        None
    }

    /// Fire the pending term if its quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<String> {
        match self.pending.take() {
            Some(pending) if pending.fire_at <= now => self.commit(pending.term),
            Some(pending) => {
                self.pending = Some(pending);
                None
            }
            None => None,
        }
    }

    /// True while an input is waiting out its quiet period.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn commit(&mut self, term: String) -> Option<String> {
        if !term.is_empty() && term.chars().count() < MIN_TERM_LEN {
            return None;
        }
        if self.last_committed.as_deref() == Some(term.as_str()) {
            return None;
        }
        self.last_committed = Some(term.clone());
        Some(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 22, 12, 0, 0).unwrap()
    }

    fn ms(n: i64) -> Duration {
        Duration::milliseconds(n)
    }

    #[test]
    fn burst_commits_only_the_final_term() {
        let mut debouncer = SearchDebouncer::new();

        assert_eq!(debouncer.input("a", t0()), None);
        assert_eq!(debouncer.input("ab", t0() + ms(100)), None);
        assert_eq!(debouncer.input("abc", t0() + ms(200)), None);

        // Still inside the quiet period of the last keystroke
        assert_eq!(debouncer.poll(t0() + ms(450)), None);

        // 400ms after the last keystroke
        assert_eq!(debouncer.poll(t0() + ms(600)), Some("abc".to_string()));

        // Nothing left to fire
        assert_eq!(debouncer.poll(t0() + ms(5000)), None);
    }

    #[test]
    fn each_keystroke_restarts_the_window() {
        let mut debouncer = SearchDebouncer::new();

        debouncer.input("chicken", t0());
        debouncer.input("chickens", t0() + ms(300));

        assert_eq!(debouncer.poll(t0() + ms(500)), None);
        assert_eq!(
            debouncer.poll(t0() + ms(700)),
            Some("chickens".to_string())
        );
    }

    #[test]
    fn empty_term_commits_immediately() {
        let mut debouncer = SearchDebouncer::new();

        debouncer.input("abc", t0());
        // Clearing the field cancels the pending term and fires at once
        assert_eq!(debouncer.input("", t0() + ms(100)), Some(String::new()));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(t0() + ms(1000)), None);
    }

    #[test]
    fn short_terms_are_suppressed() {
        let mut debouncer = SearchDebouncer::new();

        debouncer.input("ab", t0());
        assert_eq!(debouncer.poll(t0() + ms(500)), None);

        debouncer.input("abc", t0() + ms(600));
        assert_eq!(debouncer.poll(t0() + ms(1100)), Some("abc".to_string()));
    }

    #[test]
    fn consecutive_identical_terms_are_suppressed() {
        let mut debouncer = SearchDebouncer::new();

        debouncer.input("abc", t0());
        assert_eq!(debouncer.poll(t0() + ms(500)), Some("abc".to_string()));

        debouncer.input("abc", t0() + ms(600));
        assert_eq!(debouncer.poll(t0() + ms(1100)), None);

        // A different term goes through, and the same term again after that
        // is no longer "consecutive"
        debouncer.input("abcd", t0() + ms(1200));
        assert_eq!(debouncer.poll(t0() + ms(1700)), Some("abcd".to_string()));
        debouncer.input("abc", t0() + ms(1800));
        assert_eq!(debouncer.poll(t0() + ms(2300)), Some("abc".to_string()));
    }

    #[test]
    fn repeated_empty_term_is_deduplicated() {
        let mut debouncer = SearchDebouncer::new();

        assert_eq!(debouncer.input("", t0()), Some(String::new()));
        assert_eq!(debouncer.input("", t0() + ms(50)), None);
    }

    #[test]
    fn custom_window_is_respected() {
        let mut debouncer = SearchDebouncer::with_window(ms(10));

        debouncer.input("abc", t0());
        assert_eq!(debouncer.poll(t0() + ms(5)), None);
        assert_eq!(debouncer.poll(t0() + ms(10)), Some("abc".to_string()));
    }

    #[test]
    fn suppressed_short_term_does_not_poison_dedup() {
        let mut debouncer = SearchDebouncer::new();

        // "ab" fires but is suppressed by the length gate
        debouncer.input("ab", t0());
        assert_eq!(debouncer.poll(t0() + ms(500)), None);

        // The empty string still commits (nothing was ever emitted)
        assert_eq!(debouncer.input("", t0() + ms(600)), Some(String::new()));
    }
}
