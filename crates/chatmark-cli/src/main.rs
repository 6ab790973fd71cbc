use anyhow::{Context, Result};
use chatmark_config::{Config, OutputFormat};
use chatmark_engine::{Document, NavigationContext, outline, render};
use clap::{Parser, ValueEnum};
use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

#[derive(Parser, Debug)]
#[command(name = "chatmark", version, about = "Render a chat message to a document tree")]
struct Cli {
    /// Config file (defaults to ~/.config/chatmark/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Current place identifier, overriding the config file
    #[arg(long)]
    place: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Message file to render; reads stdin when absent
    file: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FormatArg {
    Json,
    Outline,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Outline => OutputFormat::Outline,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = load_config(cli.config.as_deref())?;
    let text = read_input(cli.file.as_deref())?;
    let nav = navigation(&config, cli.place.as_deref());
    let format = cli.format.map(OutputFormat::from).unwrap_or(config.output.format);

    let doc = render(&text, Some(&nav));
    log::debug!("rendered {} blocks", doc.len());

    let mut stdout = io::stdout().lock();
    write_document(&mut stdout, &doc, format)?;
    Ok(())
}

/// Loads the config, falling back to defaults when no file exists.
///
/// An explicit `--config` path must exist.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
            Config::load_from_path(&path)?
                .with_context(|| format!("Config file not found: {}", path.display()))
        }
        None => Ok(Config::load()?.unwrap_or_else(|| {
            log::debug!("no config at {}; using defaults", Config::config_path().display());
            Config::default()
        })),
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read message file {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read message from stdin")?;
            Ok(text)
        }
    }
}

fn navigation(config: &Config, place: Option<&str>) -> NavigationContext {
    let mut config = config.clone();
    if let Some(place) = place {
        config.navigation.place = Some(place.to_string());
    }
    config.navigation_context()
}

fn write_document<W: Write>(out: &mut W, doc: &Document, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, doc)?;
            writeln!(out)?;
        }
        OutputFormat::Outline => write!(out, "{}", outline(doc))?,
    }
    Ok(())
}
