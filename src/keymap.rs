use crate::combos::ensure_unique;
use crate::error::{HomerowError, HrResult};
use crate::keycodes::{KeyCode, ModifierKey};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeRowKey {
    pub key: KeyCode,
    pub modifier: ModifierKey,
}

/// Ordered key -> modifier table. Order drives generation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HomeRowKeymap {
    entries: Vec<HomeRowKey>,
}

impl HomeRowKeymap {
    pub fn new(entries: Vec<HomeRowKey>) -> HrResult<Self> {
        if entries.is_empty() {
            return Err(HomerowError::InvalidKeymap("keymap is empty".to_string()));
        }

        let keys: Vec<KeyCode> = entries.iter().map(|e| e.key).collect();
        ensure_unique(&keys)?;

        if let Some(bad) = entries.iter().find(|e| !e.modifier.is_sided()) {
            return Err(HomerowError::InvalidKeymap(format!(
                "key '{}' maps to '{}', expected a left_* or right_* modifier",
                bad.key, bad.modifier
            )));
        }

        let mut modifiers: Vec<ModifierKey> = entries.iter().map(|e| e.modifier).collect();
        modifiers.sort();
        if let Some(pair) = modifiers.windows(2).find(|w| w[0] == w[1]) {
            return Err(HomerowError::InvalidKeymap(format!(
                "modifier '{}' is assigned to more than one key",
                pair[0]
            )));
        }

        Ok(Self { entries })
    }

    pub fn from_pairs(pairs: &[(KeyCode, ModifierKey)]) -> HrResult<Self> {
        Self::new(
            pairs
                .iter()
                .map(|&(key, modifier)| HomeRowKey { key, modifier })
                .collect(),
        )
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> HrResult<Self> {
        let content = fs::read_to_string(&path)?;
        let entries: Vec<HomeRowKey> = serde_json::from_str(&content)?;
        Self::new(entries)
    }

    /// Left hand then right hand.
    pub fn compiled() -> Self {
        Self::preset(&[
            (KeyCode::D, ModifierKey::LeftCommand),
            (KeyCode::S, ModifierKey::LeftControl),
            (KeyCode::A, ModifierKey::LeftShift),
            (KeyCode::F, ModifierKey::LeftOption),
            (KeyCode::K, ModifierKey::RightCommand),
            (KeyCode::L, ModifierKey::RightControl),
            (KeyCode::Semicolon, ModifierKey::RightShift),
            (KeyCode::J, ModifierKey::RightOption),
        ])
    }

    /// Control/Option/Command/Shift from the pinky inwards, mirrored.
    pub fn extended() -> Self {
        Self::preset(&[
            (KeyCode::A, ModifierKey::LeftControl),
            (KeyCode::S, ModifierKey::LeftOption),
            (KeyCode::D, ModifierKey::LeftCommand),
            (KeyCode::F, ModifierKey::LeftShift),
            (KeyCode::J, ModifierKey::RightShift),
            (KeyCode::K, ModifierKey::RightCommand),
            (KeyCode::L, ModifierKey::RightOption),
            (KeyCode::Semicolon, ModifierKey::RightControl),
        ])
    }

    // Presets are compile-time tables and always valid.
    fn preset(pairs: &[(KeyCode, ModifierKey)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|&(key, modifier)| HomeRowKey { key, modifier })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HomeRowKey] {
        &self.entries
    }

    pub fn keys(&self) -> Vec<KeyCode> {
        self.entries.iter().map(|e| e.key).collect()
    }

    pub fn modifier_for(&self, key: KeyCode) -> Option<ModifierKey> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.modifier)
    }

    /// Modifiers for a generated group, in group order.
    pub fn modifiers_for(&self, group: &[KeyCode]) -> HrResult<Vec<ModifierKey>> {
        group
            .iter()
            .map(|&key| {
                self.modifier_for(key).ok_or_else(|| {
                    HomerowError::InvalidKeymap(format!("key '{}' is not in the keymap", key))
                })
            })
            .collect()
    }
}

impl<'de> Deserialize<'de> for HomeRowKeymap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<HomeRowKey>::deserialize(deserializer)?;
        Self::new(entries).map_err(serde::de::Error::custom)
    }
}
