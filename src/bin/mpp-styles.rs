use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use mpp_styles::config::Settings;
use mpp_styles::{StyleRecord, StyleRegistry, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mpp-styles",
    version,
    about = "Inspect and export display styles of metrix++ metric diagrams"
)]
struct Cli {
    /// Style override document (.json or .csv). Falls back to $MPP_STYLES,
    /// then <config dir>/mpp-styles/styles.json.
    #[arg(long, global = true)]
    styles: Option<PathBuf>,
    /// Ignore the built-in styles and use only the override document.
    #[arg(long, global = true, default_value_t = false)]
    replace_defaults: bool,
    /// More log output (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Only log errors.
    #[arg(short, long, global = true, default_value_t = false)]
    quiet: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all styles in display order.
    List,
    /// Print the registered criteria, sorted.
    Keys,
    /// Show the style of one criteria.
    Show(ShowArgs),
    /// Write the effective styles to a file.
    Export(ExportArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Criteria identifier, e.g. std.code.complexity.cyclomatic.
    /// Surrounding whitespace is ignored, as in style documents.
    criteria: String,
    /// Print as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Output path.
    #[arg(long)]
    out: PathBuf,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

fn init_logging(verbose: u8, quiet: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    let level = match (quiet, verbose) {
        (true, _) => Some(LevelFilter::Error),
        (false, 0) => None,
        (false, 1) => Some(LevelFilter::Info),
        (false, _) => Some(LevelFilter::Debug),
    };
    if let Some(level) = level {
        builder.filter_level(level);
    } else if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(LevelFilter::Warn);
    }
    builder.format_timestamp(None).init();
}

fn format_record(r: &StyleRecord) -> String {
    format!(
        "{:>4}  {:<34} {:<28} bg={:<12} border={}",
        r.index, r.criteria, r.criteria_label, r.background_color, r.border_color
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let settings = Settings {
        styles: cli.styles,
        replace_defaults: cli.replace_defaults,
    };
    let registry = settings
        .load_registry()
        .context("failed to load style overrides")?;

    match cli.cmd {
        Command::List => cmd_list(&registry),
        Command::Keys => cmd_keys(&registry),
        Command::Show(args) => cmd_show(&registry, args),
        Command::Export(args) => cmd_export(&registry, args),
    }
}

fn cmd_list(registry: &StyleRegistry) -> Result<()> {
    for r in registry.ordered() {
        println!("{}", format_record(r));
    }
    Ok(())
}

fn cmd_keys(registry: &StyleRegistry) -> Result<()> {
    let mut keys: Vec<&str> = registry.keys().collect();
    keys.sort_unstable();
    for k in keys {
        println!("{k}");
    }
    Ok(())
}

fn cmd_show(registry: &StyleRegistry, args: ShowArgs) -> Result<()> {
    let Some(r) = registry.get(args.criteria.trim()) else {
        anyhow::bail!("unknown criteria: {}", args.criteria);
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(r)?);
    } else {
        println!("{}", format_record(r));
    }
    Ok(())
}

fn cmd_export(registry: &StyleRegistry, args: ExportArgs) -> Result<()> {
    let records: Vec<StyleRecord> = registry.ordered().into_iter().cloned().collect();
    let path = &args.out;
    let fmt = match args.format {
        Some(OutFormat::Csv) => "csv",
        Some(OutFormat::Json) => "json",
        None => path.extension().and_then(|e| e.to_str()).unwrap_or("json"),
    }
    .to_ascii_lowercase();
    match fmt.as_str() {
        "csv" => storage::save_csv(&records, path)?,
        "json" => storage::save_json(&records, path)?,
        other => anyhow::bail!("unsupported format: {}", other),
    }
    eprintln!("Saved {} styles to {}", records.len(), path.display());
    Ok(())
}
