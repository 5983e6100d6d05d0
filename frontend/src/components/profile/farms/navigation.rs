//! Which farm tab, and which plot tab inside each farm, is active.
//!
//! Tabs are addressed by a structured [`TabKey`] of indices instead of by
//! content. Each farm keeps its own plot selection, so moving between farms
//! never disturbs the plot chosen in another one. The key also has a URL
//! fragment form (`#farm1plot0`) so a tab can be linked to directly.

use std::collections::HashMap;

use common::model::farm::{Farm, Plot};

use super::error::ProfileFarmsError;

/// Path of the page where a new farm is created.
pub const ADD_FARM_PATH: &str = "/farm";

const FARM_PREFIX: &str = "farm";
const PLOT_PREFIX: &str = "plot";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabKey {
    pub farm: usize,
    pub plot: Option<usize>,
}

impl TabKey {
    pub fn farm(farm: usize) -> Self {
        Self { farm, plot: None }
    }

    pub fn plot(farm: usize, plot: usize) -> Self {
        Self {
            farm,
            plot: Some(plot),
        }
    }

    /// `#farm{i}` or `#farm{i}plot{j}`.
    pub fn fragment(&self) -> String {
        match self.plot {
            Some(plot) => format!("#{FARM_PREFIX}{}{PLOT_PREFIX}{plot}", self.farm),
            None => format!("#{FARM_PREFIX}{}", self.farm),
        }
    }

    /// Parses the output of [`TabKey::fragment`]; the leading `#` is optional.
    pub fn parse_fragment(fragment: &str) -> Option<Self> {
        let rest = fragment.strip_prefix('#').unwrap_or(fragment);
        let rest = rest.strip_prefix(FARM_PREFIX)?;

        match rest.split_once(PLOT_PREFIX) {
            Some((farm, plot)) => Some(Self::plot(parse_index(farm)?, parse_index(plot)?)),
            None => Some(Self::farm(parse_index(rest)?)),
        }
    }
}

fn parse_index(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    active_farm: usize,
    active_plots: HashMap<usize, usize>,
    /// Plot count per farm of the tree the selection was last synced against.
    shape: Vec<usize>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activate_farm(&mut self, farm: usize) {
        self.active_farm = farm;
    }

    /// Selects `plot` inside `farm`'s own tab group. The active farm is left alone.
    pub fn activate_plot(&mut self, farm: usize, plot: usize) {
        self.active_plots.insert(farm, plot);
    }

    pub fn apply(&mut self, key: TabKey) {
        self.activate_farm(key.farm);
        if let Some(plot) = key.plot {
            self.activate_plot(key.farm, plot);
        }
    }

    /// Index of the displayed farm, clamped to `farm_count`.
    pub fn active_farm(&self, farm_count: usize) -> Option<usize> {
        if farm_count == 0 {
            None
        } else {
            Some(self.active_farm.min(farm_count - 1))
        }
    }

    /// Index of the displayed plot of `farm`, clamped to `plot_count`.
    /// `None` for a farm without plots.
    pub fn active_plot(&self, farm: usize, plot_count: usize) -> Option<usize> {
        if plot_count == 0 {
            None
        } else {
            let selected = self.active_plots.get(&farm).copied().unwrap_or(0);
            Some(selected.min(plot_count - 1))
        }
    }

    pub fn is_farm_active(&self, farm: usize, farm_count: usize) -> bool {
        self.active_farm(farm_count) == Some(farm)
    }

    pub fn is_plot_active(&self, farm: usize, plot: usize, plot_count: usize) -> bool {
        self.active_plot(farm, plot_count) == Some(plot)
    }

    /// Reconciles the selection with a freshly loaded tree.
    ///
    /// A tree with a different number of farms resets everything to the first
    /// tab; a farm whose plot count changed goes back to its first plot. Any
    /// selection still out of bounds afterwards is clamped, and the first such
    /// inconsistency is reported.
    pub fn sync(&mut self, farms: &[Farm]) -> Result<(), ProfileFarmsError> {
        let shape: Vec<usize> = farms.iter().map(|farm| farm.plots.len()).collect();

        if shape.len() != self.shape.len() {
            self.active_farm = 0;
            self.active_plots.clear();
        } else {
            for (farm, (old, new)) in self.shape.iter().zip(&shape).enumerate() {
                if old != new {
                    self.active_plots.remove(&farm);
                }
            }
        }
        self.shape = shape;

        self.clamp()
    }

    /// Applies a deep link and clamps it against `farms`.
    pub fn apply_fragment(&mut self, key: TabKey, farms: &[Farm]) -> Result<(), ProfileFarmsError> {
        self.apply(key);
        self.sync(farms)
    }

    fn clamp(&mut self) -> Result<(), ProfileFarmsError> {
        let mut first_error = None;

        let farm_count = self.shape.len();
        if self.active_farm >= farm_count.max(1) {
            first_error.get_or_insert(ProfileFarmsError::InconsistentSelection {
                what: "campo",
                index: self.active_farm,
                len: farm_count,
            });
            self.active_farm = farm_count.saturating_sub(1);
        }

        let shape = &self.shape;
        self.active_plots.retain(|&farm, &mut plot| {
            let len = shape.get(farm).copied().unwrap_or(0);
            let valid = plot < len;
            if !valid {
                first_error.get_or_insert(ProfileFarmsError::InconsistentSelection {
                    what: "parcela",
                    index: plot,
                    len,
                });
            }
            valid
        });

        match first_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Joins a route prefix and a document URI, keeping exactly one separator.
fn route(prefix: &str, document_uri: &str) -> String {
    if document_uri.starts_with('/') {
        format!("{prefix}{document_uri}")
    } else {
        format!("{prefix}/{document_uri}")
    }
}

pub fn edit_farm_path(farm: &Farm) -> String {
    route(ADD_FARM_PATH, &farm.document_uri)
}

pub fn edit_privacy_path(farm: &Farm) -> String {
    route("/privacy", &farm.document_uri)
}

pub fn add_event_path(farm: &Farm, plot: &Plot) -> String {
    route(&route("/event", &farm.document_uri), &plot.document_uri)
}
