//! Mode listing command
//!
//! Describes every mode in a catalog in declaration order.

use crate::core::ModeCatalog;

/// One row of the mode listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeInfo {
    pub index: usize,
    pub name: String,
    pub mistake_budget: u32,
    pub allows_repeats: bool,
    pub pool_size: Option<usize>,
    pub is_default: bool,
}

/// Describe the modes of `catalog`
#[must_use]
pub fn list_modes(catalog: &ModeCatalog) -> Vec<ModeInfo> {
    catalog
        .modes()
        .iter()
        .enumerate()
        .map(|(index, mode)| ModeInfo {
            index,
            name: mode.name().to_string(),
            mistake_budget: mode.mistake_budget(),
            allows_repeats: mode.allows_repeats(),
            pool_size: mode.word_pool().map(<[String]>::len),
            is_default: index == 0,
        })
        .collect()
}
