//! Cross-interaction state of an interactive session.
//!
//! The caller owns the session and passes it by reference; filtering itself
//! stays a pure function of the criteria derived from it.

use std::collections::BTreeSet;

use f1_results_shared_kernel::Season;
use serde::{Deserialize, Serialize};

use crate::filtering::{FilterCriteria, Range};

/// Initial points bounds offered to the user.
pub const DEFAULT_POINTS_BOUNDS: (f64, f64) = (0.0, 400.0);
/// Initial finishing position bounds offered to the user.
pub const DEFAULT_POSITION_BOUNDS: (u32, u32) = (1, 20);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub season: Option<Season>,
    pub points_range: Range<f64>,
    pub position_range: Range<u32>,
    pub selected_races: BTreeSet<String>,
    pub selected_constructors: BTreeSet<String>,
    pub selected_drivers: Vec<String>,
    pub comparison_mode: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            season: None,
            points_range: Range::between(DEFAULT_POINTS_BOUNDS.0, DEFAULT_POINTS_BOUNDS.1),
            position_range: Range::between(DEFAULT_POSITION_BOUNDS.0, DEFAULT_POSITION_BOUNDS.1),
            selected_races: BTreeSet::new(),
            selected_constructors: BTreeSet::new(),
            selected_drivers: Vec::new(),
            comparison_mode: false,
        }
    }
}

impl SessionState {
    pub fn for_season(season: Season) -> Self {
        Self { season: Some(season), ..Self::default() }
    }

    /// Fresh criteria reflecting the current selections.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            points_range: self.points_range,
            position_range: self.position_range,
            selected_races: self.selected_races.clone(),
            selected_constructors: self.selected_constructors.clone(),
        }
    }

    /// Returns whether `race` is selected afterwards.
    pub fn toggle_race(&mut self, race: &str) -> bool {
        toggle(&mut self.selected_races, race)
    }

    /// Returns whether `constructor` is selected afterwards.
    pub fn toggle_constructor(&mut self, constructor: &str) -> bool {
        toggle(&mut self.selected_constructors, constructor)
    }

    /// Returns whether `driver` is selected afterwards. Selection order is kept.
    pub fn toggle_driver(&mut self, driver: &str) -> bool {
        if let Some(idx) = self.selected_drivers.iter().position(|d| d == driver) {
            self.selected_drivers.remove(idx);
            false
        } else {
            self.selected_drivers.push(driver.to_string());
            true
        }
    }

    pub fn reset_filters(&mut self) {
        let defaults = Self::default();
        self.points_range = defaults.points_range;
        self.position_range = defaults.position_range;
        self.selected_races.clear();
        self.selected_constructors.clear();
    }
}

fn toggle(set: &mut BTreeSet<String>, name: &str) -> bool {
    if set.remove(name) {
        false
    } else {
        set.insert(name.to_string());
        true
    }
}
