use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "slidefit", version)]
struct Cli {
    /// Log per-element decisions (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize titles and placeholders and stack pictures, writing a new deck.
    Format(FormatArgs),
    /// List every shape with its geometry in inches.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct FormatArgs {
    /// Input deck JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output deck JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Layout configuration JSON (defaults apply to omitted fields).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Format slides concurrently.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel` (defaults to rayon's choice).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input deck JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Format(args) => cmd_format(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_format(args: FormatArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => slidefit::FormatConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => slidefit::FormatConfig::default(),
    };
    let mut deck = slidefit::Deck::from_path(&args.in_path)
        .with_context(|| format!("load deck '{}'", args.in_path.display()))?;

    let threading = slidefit::Threading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let fitter = slidefit::MetricTextFit::default();
    let report = slidefit::format_deck(&mut deck, &config, &fitter, &threading)?;

    for (slide, diagnostic) in report.diagnostics() {
        match diagnostic {
            slidefit::Diagnostic::TextFit(d) => {
                eprintln!("slide {slide}: shape {}: {}", d.element_id, d.message)
            }
            slidefit::Diagnostic::Layout { message } => eprintln!("slide {slide}: {message}"),
        }
    }

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    deck.write_path(&args.out)
        .with_context(|| format!("write deck '{}'", args.out.display()))?;

    eprintln!(
        "formatted {} slides ({} pictures laid out)",
        report.slides.len(),
        report.pictures_laid_out()
    );
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let deck = slidefit::Deck::from_path(&args.in_path)
        .with_context(|| format!("load deck '{}'", args.in_path.display()))?;
    deck.validate()?;

    let mut current = 0;
    for row in slidefit::inventory(&deck) {
        if row.slide != current {
            current = row.slide;
            println!("slide {current}:");
        }
        println!("  {row}");
    }
    Ok(())
}
