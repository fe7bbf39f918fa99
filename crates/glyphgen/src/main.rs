use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::debug;

use glyphgen::config::DEFAULT_CONFIG_FILE;
use glyphgen::{Config, generate, logger, write_sources};
use led_glyph_alphabet::{ALPHABET, LED_KEY};
use led_glyph_core::{encode_table, preview, render_text};

#[derive(Debug, Parser)]
#[command(
    name = "glyphgen",
    version,
    about = "Compile the LED matrix glyph table into C sources for the display firmware"
)]
struct Args {
    /// TOML config file (defaults to ./glyphgen.toml when present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base name of the generated files
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// Directory to write the generated files to
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Prefix of the generated array and constant names
    #[arg(long, value_name = "PREFIX")]
    prefix: Option<String>,

    /// Draw TEXT as the display would show it instead of writing files
    #[arg(long, value_name = "TEXT")]
    preview: Option<String>,

    /// Print the effective configuration and exit
    #[arg(long, action = clap::ArgAction::SetTrue)]
    print_config: bool,

    /// More log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    logger::init(logger::level_for(args.verbose, args.quiet));

    if let Err(e) = run(args) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            debug!("using {DEFAULT_CONFIG_FILE}");
            Config::load(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => Config::default(),
    };

    if let Some(name) = &args.name {
        config.glyph_name = name.clone();
    }
    if let Some(dir) = &args.out_dir {
        config.glyph_path = dir.clone();
    }
    if let Some(prefix) = &args.prefix {
        config.prefix = prefix.clone();
    }

    config.validate()?;
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;

    if args.print_config {
        print!(
            "{}",
            toml::to_string_pretty(&config).context("failed to serialize config")?
        );
        return Ok(());
    }

    if let Some(text) = &args.preview {
        let encoded = encode_table(&ALPHABET, &LED_KEY).context("failed to encode glyph table")?;
        print!(
            "{}",
            preview(&render_text(&ALPHABET, &encoded, text), &LED_KEY)
        );
        return Ok(());
    }

    let date = Local::now().date_naive();
    let sources = generate(&config, &ALPHABET, &LED_KEY, date)
        .context("failed to generate glyph sources")?;
    write_sources(&config.glyph_path, &sources)?;

    Ok(())
}
