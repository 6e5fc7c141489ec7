use std::collections::BTreeSet;

use super::TOP_N;
use crate::dataset::Dataset;

/// Distinct customer states, ascending.
pub fn available_states(dataset: &Dataset) -> Vec<String> {
    dataset
        .customers
        .iter()
        .map(|c| c.customer_state.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// The first few states in lexical order, used when the caller made no selection.
pub fn default_states(dataset: &Dataset) -> Vec<String> {
    available_states(dataset).into_iter().take(TOP_N).collect()
}

/// Selected state codes gating the city view. An empty selection is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionFilter {
    states: BTreeSet<String>,
}

impl RegionFilter {
    pub fn new<I, S>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            states: states.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a comma separated list such as `SP,RJ`. Blank entries are skipped.
    pub fn parse(raw: &str) -> Self {
        Self::new(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty()),
        )
    }

    /// `None` means no prior selection and falls back to [`default_states`].
    pub fn resolve(selection: Option<&str>, dataset: &Dataset) -> Self {
        match selection {
            Some(raw) => Self::parse(raw),
            None => Self::new(default_states(dataset)),
        }
    }

    pub fn contains(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    pub fn states(&self) -> Vec<String> {
        self.states.iter().cloned().collect()
    }
}
