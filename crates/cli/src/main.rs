//! CLI tool for exporting the slide deck to static HTML.

mod assets;

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::{builtin_deck, AssetMap, Deck, Presenter, PresenterConfig, SlideRenderer};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Render slides from the deck as static HTML fragments.
#[derive(Parser, Debug)]
#[command(name = "deck-export")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Deck description (JSON array of slides); the built-in deck if omitted
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// Directory holding slide<N>.png images
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Print only this slide (1-based)
    #[arg(short, long)]
    slide: Option<usize>,

    /// Print the section outline instead of markup
    #[arg(long)]
    outline: bool,

    /// Output directory for slide-NN.html files (default: print to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Caption for slides without an image or visual
    #[arg(long)]
    placeholder: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let deck = load_deck(&args)?;

    if args.verbose {
        eprintln!(
            "Loaded {} slides in {} sections",
            deck.len(),
            deck.sections().len()
        );
    }

    if args.outline {
        print!("{}", format_outline(&deck));
        return Ok(());
    }

    let mut config = PresenterConfig::new();
    if let Some(text) = &args.placeholder {
        config = config.with_placeholder_text(text.as_str());
    }
    let renderer = SlideRenderer::with_config(config);

    if let Some(number) = args.slide {
        let markup = render_slide(&deck, &renderer, number)?;
        println!("{}", markup);
        return Ok(());
    }

    match &args.output {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            for number in 1..=deck.len() {
                let markup = render_slide(&deck, &renderer, number)?;
                let path = dir.join(output_file_name(number));
                write_output(&path, &markup)?;
                if args.verbose {
                    eprintln!("Written to: {}", path.display());
                }
            }
        }
        None => {
            for number in 1..=deck.len() {
                println!("{}\n", render_slide(&deck, &renderer, number)?);
            }
        }
    }

    Ok(())
}

/// Load the deck and attach any images found in the asset directory.
fn load_deck(args: &Args) -> Result<Deck> {
    let deck = match &args.deck {
        Some(path) => {
            log::debug!("Reading deck from {}", path.display());
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Deck::from_json(&json).with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => builtin_deck(),
    };

    let assets = match &args.assets {
        Some(dir) => assets::scan_assets(dir)?,
        None => AssetMap::new(),
    };

    deck.with_assets(&assets)
        .context("Asset directory does not match the deck")
}

/// Render the slide with 1-based `number`.
fn render_slide(deck: &Deck, renderer: &SlideRenderer, number: usize) -> Result<String> {
    let mut presenter = Presenter::new(deck.len());
    if number != presenter.ordinal() && !presenter.jump(number).is_moved() {
        anyhow::bail!("Slide {} is outside the deck (1..={})", number, deck.len());
    }
    Ok(renderer.render(deck, &presenter))
}

/// One line per run of slides: `01-03  The Setup`.
fn format_outline(deck: &Deck) -> String {
    deck.section_spans()
        .iter()
        .map(|span| {
            if span.first == span.last {
                format!("{:02}     {}\n", span.first, span.name)
            } else {
                format!("{:02}-{:02}  {}\n", span.first, span.last, span.name)
            }
        })
        .collect()
}

fn output_file_name(number: usize) -> String {
    format!("slide-{:02}.html", number)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_of_builtin_deck() {
        let outline = format_outline(&builtin_deck());
        let lines: Vec<&str> = outline.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "01     Opening");
        assert_eq!(lines[1], "02-04  The Setup");
        assert_eq!(lines[6], "20     Connect");
    }

    #[test]
    fn test_render_slide_bounds() {
        let deck = builtin_deck();
        let renderer = SlideRenderer::new();

        assert!(render_slide(&deck, &renderer, 1).unwrap().contains("01 / 20"));
        assert!(render_slide(&deck, &renderer, 20).unwrap().contains("20 / 20"));
        assert!(render_slide(&deck, &renderer, 0).is_err());
        assert!(render_slide(&deck, &renderer, 21).is_err());
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name(3), "slide-03.html");
        assert_eq!(output_file_name(20), "slide-20.html");
    }
}
