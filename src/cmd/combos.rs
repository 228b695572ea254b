use crate::reports;
use clap::Args;
use homerow::combos::{generate, EnumerationMode};
use homerow::error::HrResult;
use homerow::keymap::HomeRowKeymap;
use homerow::variants::Variant;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct CombosArgs {
    #[arg(short, long, value_enum, default_value_t = Variant::Compiled)]
    pub variant: Variant,

    /// JSON keymap replacing the variant's built-in key table
    #[arg(short, long)]
    pub keymap: Option<PathBuf>,

    /// Override the variant's enumeration mode
    #[arg(short, long, value_enum)]
    pub mode: Option<EnumerationMode>,

    /// Override the variant's largest group size
    #[arg(long)]
    pub max_size: Option<usize>,

    /// Only list the summary table
    #[arg(long, default_value_t = false)]
    pub summary: bool,
}

pub fn run(args: CombosArgs) -> HrResult<()> {
    let keymap = match &args.keymap {
        Some(path) => HomeRowKeymap::load_from_file(path)?,
        None => args.variant.keymap(),
    };
    let mode = args.mode.unwrap_or_else(|| args.variant.mode());
    let max_size = args
        .max_size
        .unwrap_or_else(|| args.variant.max_size(keymap.len()));

    let keys = keymap.keys();
    let groups = generate(&keys, max_size, mode);

    println!(
        "\n🔎 === KEY GROUPS: {} ({}, max {}) === 🔎",
        args.variant, mode, max_size
    );

    if !args.summary {
        reports::print_groups(&groups, &keymap)?;
    }
    reports::print_size_summary(&groups, keys.len(), max_size, mode);
    Ok(())
}
