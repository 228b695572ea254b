pub mod combos;
pub mod config;
pub mod error;
pub mod keycodes;
pub mod keymap;
pub mod profile;
pub mod rules;
pub mod variants;
pub mod writer;
// cmd and reports are modules of the binary crate (main).
