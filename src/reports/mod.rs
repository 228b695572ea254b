mod tables;

pub use self::tables::{groups as print_groups, size_summary as print_size_summary};
