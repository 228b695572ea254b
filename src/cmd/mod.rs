pub mod combos;
pub mod generate;
