use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "richdoc", version)]
#[command(about = "Render CMS rich text documents to HTML or a view tree")]
struct Cli {
    /// Input JSON: a `{ json, links }` rich text field or a bare document
    input: PathBuf,

    /// Links JSON, replacing any links found in the input
    #[arg(short, long)]
    links: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Config file; bundled defaults are used when it does not exist
    #[arg(short, long, default_value = "richdoc.toml")]
    config: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// HTML markup
    Html,
    /// View tree as JSON
    Tree,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = richdoc::Config::load(&cli.config)
        .with_context(|| format!("load config '{}'", cli.config.display()))?;

    let mut rich_text = read_input(&cli.input)?;
    if let Some(path) = &cli.links {
        let json = fs::read_to_string(path)
            .with_context(|| format!("read links '{}'", path.display()))?;
        rich_text.links = richdoc::parse_links(&json)
            .with_context(|| format!("parse links '{}'", path.display()))?;
    }

    let view = richdoc::render_rich_text(&rich_text, &config);
    let rendered = match cli.format {
        Format::Html => richdoc::to_html(&view, &config),
        Format::Tree => serde_json::to_string_pretty(&view).context("serialize view tree")?,
    };

    match &cli.output {
        Some(output) => {
            fs::write(output, rendered)
                .with_context(|| format!("write '{}'", output.display()))?;
            println!("Created {}", output.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<richdoc::RichText> {
    let json =
        fs::read_to_string(path).with_context(|| format!("read input '{}'", path.display()))?;
    let rich_text =
        richdoc::parse_input(&json).with_context(|| format!("parse input '{}'", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        nodes = rich_text.json.node_count(),
        "read input"
    );
    Ok(rich_text)
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
