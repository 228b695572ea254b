use crate::error::{HomerowError, HrResult};
use crate::profile::Parameters;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Timing parameters written next to the rules.
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    // Tap vs. hold
    #[arg(long, default_value_t = 250)]
    pub to_if_held_down_threshold_ms: u32,
    #[arg(long, default_value_t = 1000)]
    pub to_if_alone_timeout_ms: u32,

    // How close together keys must land to count as a chord
    #[arg(long, default_value_t = 50)]
    pub simultaneous_threshold_ms: u32,

    #[arg(long, default_value_t = 500)]
    pub to_delayed_action_delay_ms: u32,
    #[arg(long, default_value_t = 100)]
    pub mouse_motion_to_scroll_speed: u32,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            to_if_held_down_threshold_ms: 250,
            to_if_alone_timeout_ms: 1000,
            simultaneous_threshold_ms: 50,
            to_delayed_action_delay_ms: 500,
            mouse_motion_to_scroll_speed: 100,
        }
    }
}

impl EngineParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> HrResult<Self> {
        let content = fs::read_to_string(&path).map_err(|e| {
            HomerowError::Config(format!(
                "Failed to read params file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let params: Self = serde_json::from_str(&content)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> HrResult<()> {
        if self.simultaneous_threshold_ms >= self.to_if_held_down_threshold_ms {
            return Err(HomerowError::Config(format!(
                "simultaneous threshold ({} ms) must be below the held-down threshold ({} ms)",
                self.simultaneous_threshold_ms, self.to_if_held_down_threshold_ms
            )));
        }
        Ok(())
    }

    /// Overlay values the user typed on the command line, leaving file values
    /// for every flag that only carries its default.
    pub fn merge_from_cli(&mut self, cli_params: &EngineParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_params.$field;
                }
            };
        }

        update_if_present!(to_if_held_down_threshold_ms, "to_if_held_down_threshold_ms");
        update_if_present!(to_if_alone_timeout_ms, "to_if_alone_timeout_ms");
        update_if_present!(simultaneous_threshold_ms, "simultaneous_threshold_ms");
        update_if_present!(to_delayed_action_delay_ms, "to_delayed_action_delay_ms");
        update_if_present!(mouse_motion_to_scroll_speed, "mouse_motion_to_scroll_speed");
    }

    pub fn to_parameters(&self) -> Parameters {
        Parameters {
            simultaneous_threshold_milliseconds: self.simultaneous_threshold_ms,
            to_delayed_action_delay_milliseconds: self.to_delayed_action_delay_ms,
            to_if_alone_timeout_milliseconds: self.to_if_alone_timeout_ms,
            to_if_held_down_threshold_milliseconds: self.to_if_held_down_threshold_ms,
            mouse_motion_to_scroll_speed: self.mouse_motion_to_scroll_speed,
        }
    }
}
