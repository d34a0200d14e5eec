//! secparse - semantic outline of an HTML filing

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use secparse::{ElementKind, KindSet, Pipeline, RenderOptions};

#[derive(Parser)]
#[command(name = "secparse")]
#[command(version, about = "Semantic outline of an SEC filing", long_about = None)]
#[command(after_help = "EXAMPLES:
    secparse 10-k.htm                     Print the semantic tree
    secparse --plain 10-q.htm > tree.txt  Print without colors
    secparse --flat 8-k.htm               List classified elements in order

Set RUST_LOG=debug to trace each processing step.")]
struct Cli {
    /// HTML filing to parse
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Disable ANSI colors
    #[arg(long)]
    plain: bool,

    /// Maximum characters of element text per line (0 for the default)
    #[arg(long, value_name = "N", default_value_t = 0)]
    max_line_length: usize,

    /// Also show irrelevant elements (page numbers, page breaks)
    #[arg(long)]
    show_irrelevant: bool,

    /// Print the flat element sequence instead of the tree
    #[arg(long)]
    flat: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(&cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn run(cli: &Cli) -> secparse::Result<String> {
    let doc = parse_file(&cli.input)?;

    if cli.flat {
        let lines: Vec<String> = doc
            .elements
            .iter()
            .filter(|e| cli.show_irrelevant || !e.is(ElementKind::Irrelevant))
            .map(|e| e.describe(&doc.dom))
            .collect();
        return Ok(lines.join("\n"));
    }

    let ignored = if cli.show_irrelevant {
        KindSet::EMPTY
    } else {
        KindSet::single(ElementKind::Irrelevant)
    };
    let options = RenderOptions::default()
        .pretty(!cli.plain)
        .ignored_types(ignored)
        .max_line_length(cli.max_line_length);

    Ok(doc.tree().render(&options))
}

fn parse_file(path: &Path) -> secparse::Result<secparse::ParsedDocument> {
    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read filing");
    Pipeline::default().parse_bytes(&bytes)
}
