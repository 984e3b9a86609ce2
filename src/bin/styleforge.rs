use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "styleforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the utility class names for a style-prop bag as JSON.
    Classes(ClassesArgs),
    /// Compile one bag or an array of bags into a stylesheet.
    Sheet(SheetArgs),
}

#[derive(Parser, Debug)]
struct ClassesArgs {
    /// Input style props JSON (an object or an array of objects).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Style config JSON (registry options, breakpoints, palette).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SheetArgs {
    /// Input style props JSON (an object or an array of objects).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Style config JSON (registry options, breakpoints, palette).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output CSS path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Classes(args) => cmd_classes(args),
        Command::Sheet(args) => cmd_sheet(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<styleforge::StyleConfig> {
    match path {
        Some(p) => Ok(styleforge::StyleConfig::from_json_file(p)?),
        None => Ok(styleforge::StyleConfig::default()),
    }
}

fn read_props(path: &Path) -> anyhow::Result<Vec<styleforge::StyleProps>> {
    let f = File::open(path).with_context(|| format!("open style props '{}'", path.display()))?;
    let value: serde_json::Value = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse style props JSON '{}'", path.display()))?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        other => vec![other],
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            styleforge::StyleProps::from_value(v).with_context(|| format!("style props item {i}"))
        })
        .collect()
}

/// Extract every bag into a fresh registry, returning per-bag class lists.
fn compile(
    cfg: &styleforge::StyleConfig,
    bags: &[styleforge::StyleProps],
    sheet: Option<&styleforge::SheetSurface>,
) -> anyhow::Result<Vec<Vec<String>>> {
    let mut registry = styleforge::UtilityClassManager::new(cfg.registry.clone())?;
    if let Some(sheet) = sheet {
        registry.register_target(styleforge::TargetId(0), Box::new(sheet.clone()));
    }
    let mut extractor = styleforge::StyleExtractor::new(&mut registry, &cfg.palette, &cfg.media);
    Ok(bags.iter().map(|b| extractor.extract(b)).collect())
}

fn cmd_classes(args: ClassesArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let bags = read_props(&args.in_path)?;
    let classes = compile(&cfg, &bags, None)?;

    let json = if classes.len() == 1 {
        serde_json::to_string_pretty(&classes[0])?
    } else {
        serde_json::to_string_pretty(&classes)?
    };
    println!("{json}");
    Ok(())
}

fn cmd_sheet(args: SheetArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let bags = read_props(&args.in_path)?;
    let sheet = styleforge::SheetSurface::new();
    compile(&cfg, &bags, Some(&sheet))?;

    let css = sheet.to_css();
    match args.out {
        Some(out) => {
            std::fs::write(&out, css.as_bytes())
                .with_context(|| format!("write stylesheet '{}'", out.display()))?;
            eprintln!("wrote {} rules to {}", sheet.len(), out.display());
        }
        None => print!("{css}"),
    }
    Ok(())
}
