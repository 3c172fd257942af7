use crate::catalog::{tier_family, CandidateProfile, Game, ALL_POSITIONS};
use rand::Rng;
use std::collections::HashMap;

/// Upper bound on candidates handed to the swipe stack.
pub const MAX_RESULTS: usize = 5;

/// What the wizard hands to matching: the fields of the selection that
/// survive past the wizard session.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub game: Game,
    pub positions: Vec<String>,
    pub tier: String,
}

impl FilterSpec {
    fn filters_positions(&self) -> bool {
        !self.positions.is_empty()
            && !self.positions.iter().any(|position| position == ALL_POSITIONS)
    }
}

/// Filter the catalog by game and desired positions, in catalog order,
/// truncated to [`MAX_RESULTS`]. No scoring or ranking is applied.
pub fn filter_candidates<'a>(
    catalog: &'a [CandidateProfile],
    spec: &FilterSpec,
) -> Vec<&'a CandidateProfile> {
    catalog
        .iter()
        .filter(|candidate| candidate.game == spec.game)
        .filter(|candidate| {
            !spec.filters_positions()
                || spec.positions.iter().any(|position| *position == candidate.role)
        })
        .take(MAX_RESULTS)
        .collect()
}

/// Synthesize the per-session display rank for each candidate: the
/// chosen tier's abbreviation plus a uniform division digit in 1..=4.
/// Generated once per result set so the displayed rank stays stable.
pub fn assign_ranks(
    candidates: &[&CandidateProfile],
    tier: &str,
    rng: &mut impl Rng,
) -> HashMap<u32, String> {
    let abbr = tier_family(tier).map(|family| family.abbr).unwrap_or("U");
    candidates
        .iter()
        .map(|candidate| {
            let division: u8 = rng.gen_range(1..=4);
            (candidate.id, format!("{abbr}{division}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn spec(game: Game, positions: &[&str], tier: &str) -> FilterSpec {
        FilterSpec {
            game,
            positions: positions.iter().map(|p| p.to_string()).collect(),
            tier: tier.to_string(),
        }
    }

    #[test]
    fn filters_by_game_and_position_in_catalog_order() {
        let result = filter_candidates(catalog(), &spec(Game::Lol, &["top"], "goldG2"));
        let ids: Vec<u32> = result.iter().map(|candidate| candidate.id).collect();
        assert_eq!(ids, vec![101, 106]);
    }

    #[test]
    fn all_sentinel_and_empty_positions_disable_position_filtering() {
        let unfiltered = filter_candidates(catalog(), &spec(Game::Valorant, &[], "silverS1"));
        let sentinel =
            filter_candidates(catalog(), &spec(Game::Valorant, &["all"], "silverS1"));
        assert_eq!(unfiltered, sentinel);
        assert_eq!(unfiltered.len(), 4);
    }

    #[test]
    fn result_length_is_bounded() {
        let result = filter_candidates(catalog(), &spec(Game::Lol, &[], "goldG2"));
        let lol_total = catalog()
            .iter()
            .filter(|candidate| candidate.game == Game::Lol)
            .count();
        assert!(lol_total > MAX_RESULTS);
        assert_eq!(result.len(), MAX_RESULTS);
    }

    #[test]
    fn multiple_positions_are_matched_in_catalog_order() {
        let result = filter_candidates(catalog(), &spec(Game::Lol, &["mid", "adc"], "ironI4"));
        let ids: Vec<u32> = result.iter().map(|candidate| candidate.id).collect();
        assert_eq!(ids, vec![103, 104]);
    }

    #[test]
    fn no_matches_yields_empty_list() {
        let none = filter_candidates(&[], &spec(Game::Lol, &["top"], "goldG2"));
        assert!(none.is_empty());
    }

    #[test]
    fn assigned_ranks_combine_tier_abbreviation_with_division_digit() {
        let mut rng = SmallRng::seed_from_u64(7);
        let result = filter_candidates(catalog(), &spec(Game::Lol, &["top"], "goldG2"));
        let ranks = assign_ranks(&result, "goldG2", &mut rng);
        assert_eq!(ranks.len(), 2);
        for candidate in &result {
            let rank = &ranks[&candidate.id];
            let mut chars = rank.chars();
            assert_eq!(chars.next(), Some('G'));
            let digit = chars.next().unwrap().to_digit(10).unwrap();
            assert!((1..=4).contains(&digit));
            assert!(chars.next().is_none());
        }
    }

    #[test]
    fn unknown_tier_gets_placeholder_abbreviation() {
        let mut rng = SmallRng::seed_from_u64(7);
        let result = filter_candidates(catalog(), &spec(Game::Lol, &["top"], "goldG2"));
        let ranks = assign_ranks(&result, "mythicX9", &mut rng);
        assert!(ranks.values().all(|rank| rank.starts_with('U')));
    }
}
