use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use libslidecast::{logging, Config, Deck, Presentation, Slide, SlidecastError};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "slide-outline")]
#[command(version, about = "Print a slide deck as text or JSON")]
#[command(long_about = r#"Print a slide deck without opening the viewer.

EXAMPLES:
    # Outline of the built-in deck
    slide-outline

    # A deck file
    slide-outline --deck talk.toml

    # Just the third slide
    slide-outline --slide 3

    # JSON for scripting
    slide-outline --format json | jq '.[] | .title'

    # JSONL output (one JSON object per line)
    slide-outline --format jsonl

OUTPUT FORMATS:
    text  - Human-readable outline (default)
    json  - JSON array of slides
    jsonl - JSON lines, one slide per line

EXIT CODES:
    0 - Success
    1 - Error (deck or config could not be read)
    3 - Invalid input (slide number outside the deck)
"#)]
struct Args {
    /// Deck file to print (defaults to the configured or built-in deck)
    #[arg(short, long, value_name = "PATH")]
    deck: Option<PathBuf>,

    /// Print only this slide (1-based)
    #[arg(short, long, value_name = "N")]
    slide: Option<usize>,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json", "jsonl"])]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// One slide with its position in the deck
#[derive(Debug, Serialize)]
struct OutlineEntry<'a> {
    number: usize,
    total: usize,
    progress: u8,
    title: &'a str,
    bullets: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    footnote: Option<&'a str>,
}

impl<'a> OutlineEntry<'a> {
    fn new(slide: &'a Slide, presentation: &Presentation) -> Self {
        let position = presentation.position();
        Self {
            number: position.current,
            total: position.total,
            progress: presentation.progress(),
            title: &slide.title,
            bullets: &slide.bullets,
            footnote: slide.footnote(),
        }
    }
}

/// Entries for the whole deck, or for the one slide asked for
fn outline(deck: &Deck, slide: Option<usize>) -> libslidecast::Result<Vec<OutlineEntry<'_>>> {
    let mut presentation = Presentation::new(deck.len());

    if let Some(number) = slide {
        if number == 0 || number > deck.len() {
            return Err(SlidecastError::InvalidInput(format!(
                "slide {} is outside the deck (1-{})",
                number,
                deck.len()
            )));
        }
        presentation.go_to(number as i64 - 1);
        let slide = &deck.slides()[presentation.index()];
        return Ok(vec![OutlineEntry::new(slide, &presentation)]);
    }

    let mut entries = Vec::with_capacity(deck.len());
    loop {
        let slide = &deck.slides()[presentation.index()];
        entries.push(OutlineEntry::new(slide, &presentation));
        if !presentation.next() {
            break;
        }
    }
    Ok(entries)
}

fn print_text(deck: &Deck, entries: &[OutlineEntry<'_>]) {
    if !deck.eyebrow().is_empty() {
        println!("{}", deck.eyebrow().to_uppercase());
    }
    println!("{}", deck.title());
    if !deck.sources().is_empty() {
        println!("Sources: {}", deck.sources_line(" · "));
    }
    println!();

    for entry in entries {
        println!(
            "Slide {} / {} ({}%) | {}",
            entry.number, entry.total, entry.progress, entry.title
        );
        for bullet in entry.bullets {
            println!("  • {}", bullet);
        }
        if let Some(footnote) = entry.footnote {
            println!("  Note: {}", footnote);
        }
        println!(); // Blank line between slides
    }
}

fn run(args: Args) -> Result<()> {
    tracing::debug!("slide-outline started with args: {:?}", args);

    let deck_path = match args.deck {
        Some(path) => Some(path),
        None => Config::load()
            .context("Failed to load configuration")?
            .deck_path(),
    };

    let deck = Deck::load(deck_path.as_deref()).with_context(|| match deck_path {
        Some(ref path) => format!("Failed to load deck from {}", path.display()),
        None => "Failed to load built-in deck".to_string(),
    })?;

    let entries = outline(&deck, args.slide)?;

    match args.format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&entries)?;
            println!("{}", json);
        }
        "jsonl" => {
            for entry in &entries {
                let json = serde_json::to_string(entry)?;
                println!("{}", json);
            }
        }
        _ => print_text(&deck, &entries),
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    // stderr cannot fail to open
    let _ = logging::config_from_env(args.verbose).init();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<SlidecastError>()
            .map(SlidecastError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
