//! Candidate queue for the results view and the durable accepted-match
//! ledger that survives navigation within a session.

use crate::catalog::{CandidateProfile, Game};
use crate::storage::{get_json, set_json, KeyValue, MATCHES_KEY};
use crate::swipe::{SwipeDirection, VISIBLE_CARDS};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An accepted candidate enriched with the rank resolved at accept
/// time. Append-only within a session; cleared only by a restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedCandidate {
    pub id: u32,
    pub name: String,
    pub tag: String,
    pub game: String,
    pub role: String,
    pub rank: String,
    pub win_rate: f64,
    pub kda: Option<f64>,
}

impl MatchedCandidate {
    fn from_profile(profile: &CandidateProfile, rank: String) -> Self {
        Self {
            id: profile.id,
            name: profile.name.clone(),
            tag: profile.tag.clone(),
            game: profile.game.id().to_string(),
            role: profile.role.clone(),
            rank,
            win_rate: profile.win_rate,
            kda: profile.kda,
        }
    }

    pub fn game(&self) -> Option<Game> {
        Game::from_id(&self.game)
    }
}

/// The filtered candidate list plus the queue pointer. Dismissed
/// candidates are never re-shown: the pointer only moves forward, and
/// exactly once per decision.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchQueue {
    candidates: Vec<CandidateProfile>,
    ranks: HashMap<u32, String>,
    cursor: usize,
}

impl MatchQueue {
    pub fn new(candidates: Vec<CandidateProfile>, ranks: HashMap<u32, String>) -> Self {
        Self {
            candidates,
            ranks,
            cursor: 0,
        }
    }

    /// True when the filter matched nothing at all; the view renders
    /// the dedicated "no candidates" state instead of an empty stack.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn exhausted(&self) -> bool {
        self.cursor >= self.candidates.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&CandidateProfile> {
        self.candidates.get(self.cursor)
    }

    /// The up-to-three candidates rendered as the card stack, top first.
    pub fn visible(&self) -> &[CandidateProfile] {
        let end = (self.cursor + VISIBLE_CARDS).min(self.candidates.len());
        &self.candidates[self.cursor..end]
    }

    /// Session-stable display rank for a candidate, assigned when the
    /// result set was finalized. Falls back to the profile's own tier
    /// for a candidate with no assigned rank.
    pub fn rank_of<'a>(&'a self, candidate: &'a CandidateProfile) -> &'a str {
        self.ranks
            .get(&candidate.id)
            .map(String::as_str)
            .unwrap_or(candidate.tier.as_str())
    }

    /// Record a decision for the current candidate: the pointer
    /// advances exactly once, and an accept yields the enriched record
    /// to append to the ledger.
    pub fn decide(&mut self, direction: SwipeDirection) -> Option<MatchedCandidate> {
        let candidate = self.candidates.get(self.cursor)?;
        let matched = match direction {
            SwipeDirection::Accept => Some(MatchedCandidate::from_profile(
                candidate,
                self.rank_of(candidate).to_string(),
            )),
            SwipeDirection::Reject => None,
        };
        self.cursor += 1;
        matched
    }
}

pub fn load_matches(store: &dyn KeyValue) -> Vec<MatchedCandidate> {
    get_json(store, MATCHES_KEY)
}

/// Append an accepted candidate and persist immediately.
pub fn append_match(store: &dyn KeyValue, matched: MatchedCandidate) -> Vec<MatchedCandidate> {
    let mut matches = load_matches(store);
    matches.push(matched);
    set_json(store, MATCHES_KEY, &matches);
    matches
}

/// Restart matching: drop the whole accepted list.
pub fn clear_matches(store: &dyn KeyValue) {
    store.remove(MATCHES_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use crate::filter::{assign_ranks, filter_candidates, FilterSpec};
    use crate::storage::MemoryStore;
    use crate::wizard::{AdvanceOutcome, MicPreference, Wizard};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn lol_top_queue() -> MatchQueue {
        let spec = FilterSpec {
            game: Game::Lol,
            positions: vec!["top".to_string()],
            tier: "goldG2".to_string(),
        };
        let filtered = filter_candidates(catalog(), &spec);
        let mut rng = SmallRng::seed_from_u64(11);
        let ranks = assign_ranks(&filtered, &spec.tier, &mut rng);
        MatchQueue::new(filtered.into_iter().cloned().collect(), ranks)
    }

    #[test]
    fn pointer_advances_once_per_decision_and_never_revisits() {
        let mut queue = lol_top_queue();
        let total = queue.visible().len();
        let mut seen = Vec::new();
        let mut decisions = 0;
        while let Some(current) = queue.current().cloned() {
            assert!(!seen.contains(&current.id));
            seen.push(current.id);
            let direction = if decisions % 2 == 0 {
                SwipeDirection::Accept
            } else {
                SwipeDirection::Reject
            };
            queue.decide(direction);
            decisions += 1;
        }
        assert_eq!(queue.cursor(), decisions);
        assert_eq!(seen.len(), total);
        assert!(queue.exhausted());
        // Deciding past the end changes nothing.
        assert_eq!(queue.decide(SwipeDirection::Accept), None);
        assert_eq!(queue.cursor(), decisions);
    }

    #[test]
    fn visible_window_restacks_as_the_top_card_is_dismissed() {
        let spec = FilterSpec {
            game: Game::Lol,
            positions: vec![],
            tier: "goldG2".to_string(),
        };
        let filtered = filter_candidates(catalog(), &spec);
        let mut rng = SmallRng::seed_from_u64(3);
        let ranks = assign_ranks(&filtered, &spec.tier, &mut rng);
        let mut queue = MatchQueue::new(filtered.into_iter().cloned().collect(), ranks);

        assert_eq!(queue.visible().len(), VISIBLE_CARDS);
        let second = queue.visible()[1].id;
        queue.decide(SwipeDirection::Reject);
        assert_eq!(queue.visible()[0].id, second);
    }

    #[test]
    fn assigned_rank_is_stable_across_reads() {
        let queue = lol_top_queue();
        let top = queue.current().unwrap();
        let first = queue.rank_of(top).to_string();
        for _ in 0..10 {
            assert_eq!(queue.rank_of(top), first);
        }
    }

    #[test]
    fn rank_falls_back_to_the_profile_tier() {
        let spec = FilterSpec {
            game: Game::Lol,
            positions: vec!["top".to_string()],
            tier: "goldG2".to_string(),
        };
        let filtered = filter_candidates(catalog(), &spec);
        let candidates: Vec<_> = filtered.into_iter().cloned().collect();
        let queue = MatchQueue::new(candidates, HashMap::new());
        let top = queue.current().unwrap();
        assert_eq!(queue.rank_of(top), top.tier);
    }

    #[test]
    fn accepted_list_is_append_only_and_cleared_by_restart() {
        let store = MemoryStore::new();
        let mut queue = lol_top_queue();
        let mut accepted_ids = Vec::new();

        while !queue.exhausted() {
            let id = queue.current().unwrap().id;
            if let Some(matched) = queue.decide(SwipeDirection::Accept) {
                accepted_ids.push(id);
                append_match(&store, matched);
            }
        }

        let persisted = load_matches(&store);
        let persisted_ids: Vec<u32> = persisted.iter().map(|m| m.id).collect();
        assert_eq!(persisted_ids, accepted_ids);

        clear_matches(&store);
        assert!(load_matches(&store).is_empty());
    }

    #[test]
    fn empty_filter_result_is_a_distinct_terminal_state() {
        let queue = MatchQueue::new(Vec::new(), HashMap::new());
        assert!(queue.is_empty());
        assert!(queue.exhausted());
        assert!(queue.visible().is_empty());
    }

    // The full wizard -> filter -> queue path of the gold-top scenario.
    #[test]
    fn end_to_end_gold_top_scenario() {
        let mut wizard = Wizard::new();
        wizard.select_game(Game::Lol);
        assert_eq!(wizard.advance(), AdvanceOutcome::Moved(2));
        wizard.toggle_position("top");
        assert_eq!(wizard.advance(), AdvanceOutcome::Moved(3));
        wizard.selection.tier = Some("goldG2".to_string());
        assert_eq!(wizard.advance(), AdvanceOutcome::Moved(4));
        wizard.selection.mic = Some(MicPreference::Required);
        assert_eq!(wizard.advance(), AdvanceOutcome::Moved(5));
        wizard.toggle_game_style("공격적인");
        assert_eq!(wizard.advance(), AdvanceOutcome::Finished);

        let spec = wizard.filter_spec().unwrap();
        let filtered = filter_candidates(catalog(), &spec);
        let mut rng = SmallRng::seed_from_u64(42);
        let ranks = assign_ranks(&filtered, &spec.tier, &mut rng);
        let mut queue = MatchQueue::new(filtered.into_iter().cloned().collect(), ranks);

        assert!(queue
            .visible()
            .iter()
            .all(|candidate| candidate.role == "top"));

        let store = MemoryStore::new();
        while !queue.exhausted() {
            if let Some(matched) = queue.decide(SwipeDirection::Accept) {
                append_match(&store, matched);
            }
        }

        let matches = load_matches(&store);
        assert_eq!(matches.len(), 2);
        for matched in &matches {
            assert_eq!(matched.game(), Some(Game::Lol));
            let mut chars = matched.rank.chars();
            assert_eq!(chars.next(), Some('G'));
            let digit = chars.next().unwrap().to_digit(10).unwrap();
            assert!((1..=4).contains(&digit));
        }
    }
}
