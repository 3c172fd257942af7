use crate::catalog::{Game, ALL_POSITIONS};
use crate::filter::FilterSpec;

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 5;

/// Microphone preference collected on step 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MicPreference {
    Required,
    Optional,
    Off,
}

impl MicPreference {
    pub const ALL: [MicPreference; 3] = [
        MicPreference::Required,
        MicPreference::Optional,
        MicPreference::Off,
    ];

    pub fn id(self) -> &'static str {
        match self {
            MicPreference::Required => "required",
            MicPreference::Optional => "optional",
            MicPreference::Off => "off",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MicPreference::Required => "마이크 필수",
            MicPreference::Optional => "있으면 좋아요",
            MicPreference::Off => "채팅만 할래요",
        }
    }
}

/// Selections accumulated across the wizard steps. Owned by the wizard
/// for the session; only the fields echoed into [`FilterSpec`] outlive it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WizardSelection {
    pub game: Option<Game>,
    pub positions: Vec<String>,
    pub tier: Option<String>,
    pub mic: Option<MicPreference>,
    pub game_styles: Vec<String>,
    pub comm_styles: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The current step's required field is unset; nothing changed.
    Blocked,
    Moved(u8),
    /// Advanced past the final step: initiate matching.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetreatOutcome {
    Moved(u8),
    /// Retreated from the first step: leave the wizard.
    Exited,
}

/// Linear/skippable step machine over [`WizardSelection`]. Steps are
/// 1 game, 2 positions, 3 tier, 4 mic, 5 styles; games without distinct
/// positions skip step 2 in both directions.
#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    step: u8,
    pub selection: WizardSelection,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: FIRST_STEP,
            selection: WizardSelection::default(),
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    fn skips_positions(&self) -> bool {
        matches!(self.selection.game, Some(game) if !game.has_positions())
    }

    pub fn can_advance(&self) -> bool {
        match self.step {
            1 => self.selection.game.is_some(),
            2 => !self.selection.positions.is_empty(),
            3 => self.selection.tier.is_some(),
            4 => self.selection.mic.is_some(),
            5 => {
                !self.selection.game_styles.is_empty()
                    || !self.selection.comm_styles.is_empty()
            }
            _ => false,
        }
    }

    pub fn advance(&mut self) -> AdvanceOutcome {
        if !self.can_advance() {
            return AdvanceOutcome::Blocked;
        }
        if self.step >= LAST_STEP {
            return AdvanceOutcome::Finished;
        }
        self.step = if self.step == 1 && self.skips_positions() {
            // No position step for this game; the filter still needs a
            // well-formed positions list downstream.
            self.selection.positions = vec![ALL_POSITIONS.to_string()];
            3
        } else {
            self.step + 1
        };
        AdvanceOutcome::Moved(self.step)
    }

    pub fn retreat(&mut self) -> RetreatOutcome {
        if self.step <= FIRST_STEP {
            self.selection = WizardSelection::default();
            return RetreatOutcome::Exited;
        }
        self.step = if self.step == 3 && self.skips_positions() {
            1
        } else {
            self.step - 1
        };
        RetreatOutcome::Moved(self.step)
    }

    /// Selecting a game invalidates any positions picked for the
    /// previous game.
    pub fn select_game(&mut self, game: Game) {
        if self.selection.game != Some(game) {
            self.selection.positions.clear();
        }
        self.selection.game = Some(game);
    }

    pub fn toggle_position(&mut self, position: &str) {
        toggle_tag(&mut self.selection.positions, position);
    }

    pub fn toggle_game_style(&mut self, tag: &str) {
        toggle_tag(&mut self.selection.game_styles, tag);
    }

    pub fn toggle_comm_style(&mut self, tag: &str) {
        toggle_tag(&mut self.selection.comm_styles, tag);
    }

    /// Progress as (current logical step, total logical steps); the
    /// position step does not count for games that skip it.
    pub fn progress(&self) -> (u8, u8) {
        if self.skips_positions() {
            let logical = match self.step {
                1 => 1,
                2 | 3 => 2,
                other => other - 1,
            };
            (logical, 4)
        } else {
            (self.step, 5)
        }
    }

    pub fn progress_fraction(&self) -> f64 {
        let (current, total) = self.progress();
        f64::from(current) / f64::from(total)
    }

    /// The filter specification the terminal advance hands to matching.
    /// Requires a complete selection; callers reach this only through a
    /// `Finished` advance.
    pub fn filter_spec(&self) -> Option<FilterSpec> {
        Some(FilterSpec {
            game: self.selection.game?,
            positions: self.selection.positions.clone(),
            tier: self.selection.tier.clone()?,
        })
    }
}

fn toggle_tag(tags: &mut Vec<String>, tag: &str) {
    if let Some(index) = tags.iter().position(|existing| existing == tag) {
        tags.remove(index);
    } else {
        tags.push(tag.to_string());
    }
}
