use crate::combos::{EnumerationMode, CUSTOM_MAX_GROUP};
use crate::config::EngineParams;
use crate::error::HrResult;
use crate::keymap::HomeRowKeymap;
use crate::profile::{ComplexModifications, Rule};
use crate::rules::{self, HomeRowOptions};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, info};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Permutations up to three keys, plus delete and home/end fixes.
    Compiled,
    /// Every group size, sets above two keys, plus arrows, markdown and Meh/Hyper.
    Extended,
}

impl Variant {
    pub fn keymap(&self) -> HomeRowKeymap {
        match self {
            Self::Compiled => HomeRowKeymap::compiled(),
            Self::Extended => HomeRowKeymap::extended(),
        }
    }

    pub fn mode(&self) -> EnumerationMode {
        match self {
            Self::Compiled => EnumerationMode::Permutations,
            Self::Extended => EnumerationMode::Mixed,
        }
    }

    /// Largest group generated for a keymap of `key_count` keys.
    pub fn max_size(&self, key_count: usize) -> usize {
        match self {
            Self::Compiled => key_count.min(CUSTOM_MAX_GROUP),
            Self::Extended => key_count,
        }
    }

    pub fn default_profile_name(&self) -> &'static str {
        match self {
            Self::Compiled => "Compiled",
            Self::Extended => "Extended",
        }
    }

    pub fn home_row_options(&self, keymap: HomeRowKeymap) -> HomeRowOptions {
        let max_size = self.max_size(keymap.len());
        HomeRowOptions::builder()
            .keymap(keymap)
            .mode(self.mode())
            .max_size(max_size)
            .build()
    }

    /// Hand-written rules that sit around the home row block.
    pub fn extra_rules(&self) -> Vec<Rule> {
        match self {
            Self::Compiled => vec![
                rules::shift_backspace_delete(),
                rules::home_end(),
                rules::home_end_terminal(),
            ],
            Self::Extended => vec![
                rules::arrow_repeat(),
                rules::markdown_helpers(),
                rules::meh_hyper(),
            ],
        }
    }

    pub fn rules(&self) -> HrResult<Vec<Rule>> {
        self.rules_with_keymap(self.keymap())
    }

    /// The engine takes the first manipulator that matches, and every home
    /// row key accepts any modifier. Extra rules triggered by a home row key
    /// therefore go ahead of the home row block; the rest follow it.
    pub fn rules_with_keymap(&self, keymap: HomeRowKeymap) -> HrResult<Vec<Rule>> {
        let home_keys = keymap.keys();
        let home_row = rules::home_row_mods(&self.home_row_options(keymap))?;

        let (leading, trailing): (Vec<Rule>, Vec<Rule>) =
            self.extra_rules().into_iter().partition(|rule| {
                rule.trigger_keys()
                    .iter()
                    .any(|key| home_keys.contains(key))
            });
        debug!(
            "{} rules ahead of the home row block, {} after",
            leading.len(),
            trailing.len()
        );

        let mut out = leading;
        out.push(home_row);
        out.extend(trailing);
        Ok(out)
    }

    pub fn build(&self, params: &EngineParams) -> HrResult<ComplexModifications> {
        self.build_with_keymap(self.keymap(), params)
    }

    pub fn build_with_keymap(
        &self,
        keymap: HomeRowKeymap,
        params: &EngineParams,
    ) -> HrResult<ComplexModifications> {
        params.validate()?;
        let rules = self.rules_with_keymap(keymap)?;

        info!(
            "🧩 Variant '{}': {} rules, {} home row manipulators",
            self,
            rules.len(),
            rules
                .iter()
                .find(|r| r.description == rules::HOME_ROW_DESCRIPTION)
                .map_or(0, |r| r.manipulators.len())
        );

        Ok(ComplexModifications {
            parameters: params.to_parameters(),
            rules,
        })
    }
}
