use clap::{ArgMatches, Args};
use homerow::config::EngineParams;
use homerow::error::HrResult;
use homerow::keymap::HomeRowKeymap;
use homerow::variants::Variant;
use homerow::writer::{self, DRY_RUN_PROFILE};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(short, long, value_enum, default_value_t = Variant::Compiled)]
    pub variant: Variant,

    /// Profile to update; `--dry-run--` prints the rules instead
    #[arg(short, long, allow_hyphen_values = true)]
    pub profile: Option<String>,

    /// Same as `--profile --dry-run--`
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Path to karabiner.json (defaults to ~/.config/karabiner/karabiner.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON keymap replacing the variant's built-in key table
    #[arg(short, long)]
    pub keymap: Option<PathBuf>,

    /// JSON file with timing parameters
    #[arg(long)]
    pub params: Option<PathBuf>,

    #[command(flatten)]
    pub engine: EngineParams,
}

pub fn run(args: GenerateArgs, matches: &ArgMatches) -> HrResult<()> {
    let params = resolve_params(&args, matches)?;

    let keymap = match &args.keymap {
        Some(path) => {
            info!("🔑 Loading keymap: {}", path.display());
            HomeRowKeymap::load_from_file(path)?
        }
        None => args.variant.keymap(),
    };

    let doc = args.variant.build_with_keymap(keymap, &params)?;

    let profile = if args.dry_run {
        DRY_RUN_PROFILE.to_string()
    } else {
        args.profile
            .clone()
            .unwrap_or_else(|| args.variant.default_profile_name().to_string())
    };

    if profile == DRY_RUN_PROFILE {
        print!("{}", writer::render(&doc)?);
        return Ok(());
    }

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => writer::default_config_path()?,
    };
    info!("📂 Writing to {} (profile '{}')", config_path.display(), profile);
    writer::write_to_profile(&config_path, &profile, &doc)
}

fn resolve_params(args: &GenerateArgs, matches: &ArgMatches) -> HrResult<EngineParams> {
    match &args.params {
        Some(path) => {
            info!("⚖️  Loading params from: {}", path.display());
            let mut params = EngineParams::load_from_file(path)?;
            params.merge_from_cli(&args.engine, matches);
            Ok(params)
        }
        None => {
            if args.engine == EngineParams::default() {
                info!("⚖️  Using built-in timings.");
            }
            Ok(args.engine)
        }
    }
}
