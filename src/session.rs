use crate::models::{Rating, ReviewSession, SessionStats, WordCard};
use rand::seq::SliceRandom;
use std::time::{Duration, Instant};

/// Pause between rating a card and presenting the next one, mirroring the
/// card-flip transition of the original client.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(350);

/// How long the completion notice stays on screen before the session closes
/// itself.
pub const FINISH_DISPLAY: Duration = Duration::from_millis(1600);

/// What a `rate` call did. The caller owns the side effect: `persist` is the
/// rated card, to be stamped with a review time and pushed to the backend.
#[derive(Debug, PartialEq)]
pub enum RateOutcome {
    /// Input arrived while an advance was pending or after completion.
    Ignored,
    Advanced { persist: WordCard },
    Finished { persist: WordCard, reviewed: u32 },
}

impl ReviewSession {
    /// Shuffles a snapshot of `cards` into a fresh queue. Returns `None` for
    /// empty input; an empty session is a no-op, not an error.
    pub fn start(cards: Vec<WordCard>, now: Instant) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }
        let mut queue = cards;
        queue.shuffle(&mut rand::thread_rng());
        Some(ReviewSession {
            queue,
            current_index: 0,
            is_flipped: false,
            stats: SessionStats::default(),
            started_at: now,
            pending_advance: None,
            close_at: None,
            finished_reviewed: None,
        })
    }

    pub fn current(&self) -> Option<&WordCard> {
        self.queue.get(self.current_index)
    }

    pub fn elapsed_secs(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.started_at).as_secs()
    }

    pub fn is_finished(&self) -> bool {
        self.finished_reviewed.is_some()
    }

    /// Toggles the presentation face of the current card. No queue state
    /// changes. Ignored while an advance is pending so the next card never
    /// starts back-side up.
    pub fn flip(&mut self) {
        if self.pending_advance.is_some() || self.is_finished() {
            return;
        }
        self.is_flipped = !self.is_flipped;
    }

    /// Scores the current card. `Hard` requeues a copy of it at the tail, with
    /// no limit on how often the same card can come back. Rating the last
    /// queued card anything other than `Hard` finishes the session.
    pub fn rate(&mut self, rating: Rating, now: Instant) -> RateOutcome {
        if self.pending_advance.is_some() || self.is_finished() {
            return RateOutcome::Ignored;
        }
        let Some(card) = self.queue.get(self.current_index).cloned() else {
            return RateOutcome::Ignored;
        };

        let reviewed_before = self.stats.reviewed;
        self.stats.reviewed += 1;
        if rating != Rating::Hard {
            self.stats.correct += 1;
        }
        if rating == Rating::Hard {
            self.queue.push(card.clone());
        }

        self.is_flipped = false;
        if self.current_index + 1 >= self.queue.len() {
            // Unreachable for Hard: the requeue just grew the queue past us.
            let reviewed = reviewed_before + 1;
            self.finished_reviewed = Some(reviewed);
            self.close_at = Some(now + FINISH_DISPLAY);
            RateOutcome::Finished {
                persist: card,
                reviewed,
            }
        } else {
            self.pending_advance = Some(now + ADVANCE_DELAY);
            RateOutcome::Advanced { persist: card }
        }
    }

    /// Drives the delayed advance. Called once per event-loop tick.
    pub fn tick(&mut self, now: Instant) {
        if let Some(at) = self.pending_advance {
            if now >= at {
                self.pending_advance = None;
                self.current_index += 1;
            }
        }
    }

    /// True once the completion notice has been displayed long enough.
    pub fn should_close(&self, now: Instant) -> bool {
        self.close_at.is_some_and(|at| now >= at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(word: &str) -> WordCard {
        WordCard {
            original_word: word.to_string(),
            clean_word: word.to_string(),
            definitions: vec![],
            english_definition: format!("{word} (en)"),
            synonyms: vec![],
            audio_url: None,
            last_review: None,
            source_lang: None,
            target_lang: None,
            secondary_lang: None,
        }
    }

    fn advance(session: &mut ReviewSession, now: Instant) -> Instant {
        let later = now + ADVANCE_DELAY;
        session.tick(later);
        later
    }

    #[test]
    fn test_start_rejects_empty_input() {
        assert!(ReviewSession::start(vec![], Instant::now()).is_none());
    }

    #[test]
    fn test_start_produces_permutation_of_input() {
        let cards: Vec<WordCard> = (0..20).map(|i| card(&format!("w{i}"))).collect();
        let session = ReviewSession::start(cards.clone(), Instant::now()).unwrap();

        assert_eq!(session.queue.len(), cards.len());
        let mut expected: Vec<String> = cards.iter().map(|c| c.clean_word.clone()).collect();
        let mut got: Vec<String> = session.queue.iter().map(|c| c.clean_word.clone()).collect();
        expected.sort();
        got.sort();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_start_resets_counters() {
        let now = Instant::now();
        let session = ReviewSession::start(vec![card("a")], now).unwrap();
        assert_eq!(session.current_index, 0);
        assert!(!session.is_flipped);
        assert_eq!(session.stats, SessionStats::default());
        assert_eq!(session.elapsed_secs(now), 0);
        assert_eq!(session.elapsed_secs(now + Duration::from_secs(61)), 61);
    }

    #[test]
    fn test_flip_toggles_presentation_only() {
        let now = Instant::now();
        let mut session = ReviewSession::start(vec![card("a"), card("b")], now).unwrap();
        session.flip();
        assert!(session.is_flipped);
        assert_eq!(session.current_index, 0);
        assert_eq!(session.stats.reviewed, 0);
        session.flip();
        assert!(!session.is_flipped);
    }

    #[test]
    fn test_rate_increments_reviewed_for_every_rating() {
        let now = Instant::now();
        let cards = vec![card("a"), card("b"), card("c")];
        let mut session = ReviewSession::start(cards, now).unwrap();

        let mut now = now;
        for rating in [Rating::Hard, Rating::Good, Rating::Easy] {
            let before = session.stats.reviewed;
            session.rate(rating, now);
            assert_eq!(session.stats.reviewed, before + 1);
            now = advance(&mut session, now);
        }
        assert_eq!(session.stats.correct, 2);
    }

    #[test]
    fn test_hard_never_shrinks_queue_good_easy_never_grow_it() {
        let now = Instant::now();
        let mut session = ReviewSession::start(vec![card("a"), card("b")], now).unwrap();

        let len = session.queue.len();
        session.rate(Rating::Hard, now);
        assert_eq!(session.queue.len(), len + 1);

        let now = advance(&mut session, now);
        let len = session.queue.len();
        session.rate(Rating::Good, now);
        assert_eq!(session.queue.len(), len);
    }

    #[test]
    fn test_two_cards_rated_good_good_finishes_with_full_stats() {
        let now = Instant::now();
        let mut session = ReviewSession::start(vec![card("a"), card("b")], now).unwrap();

        assert!(matches!(
            session.rate(Rating::Good, now),
            RateOutcome::Advanced { .. }
        ));
        let now = advance(&mut session, now);
        match session.rate(Rating::Good, now) {
            RateOutcome::Finished { reviewed, .. } => assert_eq!(reviewed, 2),
            other => panic!("expected Finished, got {other:?}"),
        }
        assert_eq!(session.stats, SessionStats { reviewed: 2, correct: 2 });
    }

    #[test]
    fn test_hard_at_tail_requeues_instead_of_finishing() {
        let now = Instant::now();
        let mut session = ReviewSession::start(vec![card("a")], now).unwrap();

        // Hard on the only card grows the queue to [a, a] and keeps going.
        match session.rate(Rating::Hard, now) {
            RateOutcome::Advanced { persist } => assert_eq!(persist.clean_word, "a"),
            other => panic!("expected Advanced, got {other:?}"),
        }
        assert_eq!(session.queue.len(), 2);
        assert!(!session.is_finished());

        let now = advance(&mut session, now);
        assert_eq!(session.current_index, 1);
        assert_eq!(session.current().unwrap().clean_word, "a");

        match session.rate(Rating::Good, now) {
            RateOutcome::Finished { reviewed, .. } => assert_eq!(reviewed, 2),
            other => panic!("expected Finished, got {other:?}"),
        }
        assert_eq!(session.stats, SessionStats { reviewed: 2, correct: 1 });
    }

    #[test]
    fn test_hard_every_time_cycles_forever() {
        let now = Instant::now();
        let mut session = ReviewSession::start(vec![card("a")], now).unwrap();

        let mut now = now;
        for round in 1..=10u32 {
            assert!(matches!(
                session.rate(Rating::Hard, now),
                RateOutcome::Advanced { .. }
            ));
            assert_eq!(session.queue.len(), 1 + round as usize);
            assert!(!session.is_finished());
            now = advance(&mut session, now);
        }
        assert_eq!(session.stats.reviewed, 10);
        assert_eq!(session.stats.correct, 0);
    }

    #[test]
    fn test_rating_resets_flip_before_advancing() {
        let now = Instant::now();
        let mut session = ReviewSession::start(vec![card("a"), card("b")], now).unwrap();
        session.flip();
        session.rate(Rating::Easy, now);
        assert!(!session.is_flipped);
        assert_eq!(session.current_index, 0);
    }

    #[test]
    fn test_tick_before_deadline_does_not_advance() {
        let now = Instant::now();
        let mut session = ReviewSession::start(vec![card("a"), card("b")], now).unwrap();
        session.rate(Rating::Good, now);

        session.tick(now + ADVANCE_DELAY / 2);
        assert_eq!(session.current_index, 0);

        session.tick(now + ADVANCE_DELAY);
        assert_eq!(session.current_index, 1);
        assert!(session.pending_advance.is_none());
    }

    #[test]
    fn test_input_ignored_while_advance_is_pending() {
        let now = Instant::now();
        let mut session = ReviewSession::start(vec![card("a"), card("b")], now).unwrap();
        session.rate(Rating::Good, now);

        assert_eq!(session.rate(Rating::Good, now), RateOutcome::Ignored);
        assert_eq!(session.stats.reviewed, 1);

        session.flip();
        assert!(!session.is_flipped);
    }

    #[test]
    fn test_input_ignored_after_finish() {
        let now = Instant::now();
        let mut session = ReviewSession::start(vec![card("a")], now).unwrap();
        session.rate(Rating::Good, now);
        assert!(session.is_finished());

        assert_eq!(session.rate(Rating::Hard, now), RateOutcome::Ignored);
        assert_eq!(session.stats.reviewed, 1);
        session.flip();
        assert!(!session.is_flipped);
    }

    #[test]
    fn test_finished_session_closes_after_display_delay() {
        let now = Instant::now();
        let mut session = ReviewSession::start(vec![card("a")], now).unwrap();
        session.rate(Rating::Easy, now);

        assert!(!session.should_close(now));
        assert!(!session.should_close(now + FINISH_DISPLAY / 2));
        assert!(session.should_close(now + FINISH_DISPLAY));
    }

    #[test]
    fn test_requeued_copy_carries_no_changes() {
        let now = Instant::now();
        let mut original = card("a");
        original.last_review = Some("2026-01-01T00:00:00+00:00".to_string());
        let mut session = ReviewSession::start(vec![original.clone()], now).unwrap();

        session.rate(Rating::Hard, now);
        assert_eq!(session.queue[1], original);
    }
}
