//! Serializable model of a profile's `complex_modifications` block.
//!
//! Only the parts of the engine schema this tool emits are modelled. Builders
//! consume and return `self` so rules read as a single chain.

use crate::keycodes::{KeyCode, ModifierKey};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexModifications {
    pub parameters: Parameters,
    pub rules: Vec<Rule>,
}

/// Engine timing parameters, keyed by their dotted engine names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameters {
    #[serde(rename = "basic.simultaneous_threshold_milliseconds")]
    pub simultaneous_threshold_milliseconds: u32,
    #[serde(rename = "basic.to_delayed_action_delay_milliseconds")]
    pub to_delayed_action_delay_milliseconds: u32,
    #[serde(rename = "basic.to_if_alone_timeout_milliseconds")]
    pub to_if_alone_timeout_milliseconds: u32,
    #[serde(rename = "basic.to_if_held_down_threshold_milliseconds")]
    pub to_if_held_down_threshold_milliseconds: u32,
    #[serde(rename = "mouse_motion_to_scroll.speed")]
    pub mouse_motion_to_scroll_speed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub description: String,
    pub manipulators: Vec<Manipulator>,
}

impl Rule {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            manipulators: Vec::new(),
        }
    }

    pub fn manipulators(mut self, manipulators: impl IntoIterator<Item = Manipulator>) -> Self {
        self.manipulators.extend(manipulators);
        self
    }

    /// Single keys that start one of this rule's manipulators.
    pub fn trigger_keys(&self) -> Vec<KeyCode> {
        self.manipulators
            .iter()
            .filter_map(|m| m.from.key_code)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManipulatorType {
    Basic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manipulator {
    #[serde(rename = "type")]
    pub kind: ManipulatorType,
    pub from: FromEvent,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<ToEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_if_alone: Vec<ToEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_if_held_down: Vec<ToEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

impl Manipulator {
    fn basic(from: FromEvent) -> Self {
        Self {
            kind: ManipulatorType::Basic,
            from,
            to: Vec::new(),
            to_if_alone: Vec::new(),
            to_if_held_down: Vec::new(),
            conditions: Vec::new(),
        }
    }

    /// Trigger on a single key.
    pub fn map(key: KeyCode) -> Self {
        Self::basic(FromEvent {
            key_code: Some(key),
            ..Default::default()
        })
    }

    /// Trigger on several keys pressed within the simultaneous threshold.
    pub fn simultaneous(keys: &[KeyCode], order: KeyDownOrder) -> Self {
        Self::basic(FromEvent {
            simultaneous: keys.iter().map(|&key_code| SimultaneousKey { key_code }).collect(),
            simultaneous_options: Some(SimultaneousOptions {
                key_down_order: order,
            }),
            ..Default::default()
        })
    }

    pub fn mandatory(mut self, modifiers: &[ModifierKey]) -> Self {
        self.from
            .modifiers
            .get_or_insert_with(FromModifiers::default)
            .mandatory
            .extend_from_slice(modifiers);
        self
    }

    /// Let the trigger fire whatever other modifiers are held.
    pub fn optional_any(mut self) -> Self {
        self.from
            .modifiers
            .get_or_insert_with(FromModifiers::default)
            .optional
            .push(ModifierKey::Any);
        self
    }

    pub fn to(mut self, event: ToEvent) -> Self {
        self.to.push(event);
        self
    }

    pub fn to_if_alone(mut self, event: ToEvent) -> Self {
        self.to_if_alone.push(event);
        self
    }

    pub fn to_if_held_down(mut self, event: ToEvent) -> Self {
        self.to_if_held_down.push(event);
        self
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FromEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_code: Option<KeyCode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub simultaneous: Vec<SimultaneousKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simultaneous_options: Option<SimultaneousOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<FromModifiers>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimultaneousKey {
    pub key_code: KeyCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimultaneousOptions {
    pub key_down_order: KeyDownOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyDownOrder {
    Insensitive,
    Strict,
    StrictInverse,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FromModifiers {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mandatory: Vec<ModifierKey>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub optional: Vec<ModifierKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToEvent {
    pub key_code: KeyCode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<ModifierKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub halt: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<bool>,
}

impl ToEvent {
    pub fn key(key_code: KeyCode) -> Self {
        Self {
            key_code,
            modifiers: Vec::new(),
            halt: None,
            repeat: None,
        }
    }

    pub fn with_modifiers(mut self, modifiers: &[ModifierKey]) -> Self {
        self.modifiers.extend_from_slice(modifiers);
        self
    }

    /// Cancel the pending `to_if_alone` / `to_if_held_down` of this manipulator.
    pub fn halt(mut self) -> Self {
        self.halt = Some(true);
        self
    }

    pub fn repeat(mut self, repeat: bool) -> Self {
        self.repeat = Some(repeat);
        self
    }
}

impl From<KeyCode> for ToEvent {
    fn from(key_code: KeyCode) -> Self {
        Self::key(key_code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    FrontmostApplicationIf { bundle_identifiers: Vec<String> },
    FrontmostApplicationUnless { bundle_identifiers: Vec<String> },
}

impl Condition {
    pub fn app_if(bundle_identifiers: &[&str]) -> Self {
        Self::FrontmostApplicationIf {
            bundle_identifiers: bundle_identifiers.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn app_unless(bundle_identifiers: &[&str]) -> Self {
        Self::FrontmostApplicationUnless {
            bundle_identifiers: bundle_identifiers.iter().map(|s| s.to_string()).collect(),
        }
    }
}
