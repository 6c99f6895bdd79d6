//! resume-pdf CLI - render plain-text résumés as PDF

use std::path::PathBuf;

use chrono::DateTime;
use clap::{ArgAction, Parser, ValueEnum};

use resume_pdf::resume::BulletPolicy;
use resume_pdf::pagesize::{self, PageSize};
use resume_pdf::{convert_batch, default_output_path, ConvertOptions, FontFamily, Info};

#[derive(Parser)]
#[command(name = "resume-pdf")]
#[command(version)]
#[command(about = "Turn plain-text résumés into styled PDF documents", long_about = None)]
struct Cli {
    /// Résumé text files to convert
    #[arg(value_name = "FILE", required = true)]
    inputs: Vec<PathBuf>,

    /// Output file (only with a single input; defaults to FILE with a .pdf extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Paper size
    #[arg(long, value_enum, default_value = "letter")]
    page_size: PaperSize,

    /// Font family used for every paragraph
    #[arg(long, value_enum, default_value = "helvetica")]
    font: Family,

    /// How bullet lines are drawn
    #[arg(long, value_enum, default_value = "glyph")]
    bullet: Bullet,

    /// Keep the text as-is instead of repairing and reducing it to ASCII
    #[arg(long)]
    no_cleanup: bool,

    /// Do not add outline entries for section headers
    #[arg(long)]
    no_bookmarks: bool,

    /// Write uncompressed page content
    #[arg(long)]
    no_compress: bool,

    /// Document title metadata
    #[arg(long)]
    title: Option<String>,

    /// Document author metadata
    #[arg(long)]
    author: Option<String>,

    /// Creation date metadata as RFC 3339, e.g. 2024-05-01T09:00:00+02:00
    #[arg(long, value_name = "DATE")]
    timestamp: Option<String>,

    /// Log more detail (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PaperSize {
    /// US Letter, 8.5 x 11 in
    Letter,
    /// US Legal, 8.5 x 14 in
    Legal,
    /// ISO A4, 210 x 297 mm
    A4,
}

impl From<PaperSize> for PageSize {
    fn from(size: PaperSize) -> Self {
        match size {
            PaperSize::Letter => pagesize::LETTER,
            PaperSize::Legal => pagesize::LEGAL,
            PaperSize::A4 => pagesize::A4,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Family {
    Helvetica,
    Courier,
}

impl From<Family> for FontFamily {
    fn from(family: Family) -> Self {
        match family {
            Family::Helvetica => FontFamily::Helvetica,
            Family::Courier => FontFamily::Courier,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Bullet {
    /// Replace the leading dash with a bullet glyph
    Glyph,
    /// Keep the dash as written
    Dash,
}

impl From<Bullet> for BulletPolicy {
    fn from(bullet: Bullet) -> Self {
        match bullet {
            Bullet::Glyph => BulletPolicy::Glyph,
            Bullet::Dash => BulletPolicy::Dash,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(2);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.output.is_some() && cli.inputs.len() > 1 {
        return Err("--output can only be used with a single input file".into());
    }

    let mut info = Info::new();
    if let Some(title) = &cli.title {
        info.title(title);
    }
    if let Some(author) = &cli.author {
        info.author(author);
    }
    if let Some(timestamp) = &cli.timestamp {
        let date = DateTime::parse_from_rfc3339(timestamp)
            .map_err(|e| format!("invalid --timestamp {timestamp:?}: {e}"))?;
        info.created_at(date);
    }

    let options = ConvertOptions::new()
        .with_page_size(cli.page_size.into())
        .with_font_family(cli.font.into())
        .with_bullets(cli.bullet.into())
        .with_cleanup(!cli.no_cleanup)
        .with_bookmarks(!cli.no_bookmarks)
        .with_compression(!cli.no_compress)
        .with_info(info);

    let jobs: Vec<(PathBuf, PathBuf)> = match cli.output {
        Some(output) => vec![(cli.inputs[0].clone(), output)],
        None => cli
            .inputs
            .into_iter()
            .map(|input| {
                let output = default_output_path(&input);
                (input, output)
            })
            .collect(),
    };

    let results = convert_batch(&jobs, &options);
    let mut failed = 0usize;
    for ((input, output), result) in jobs.iter().zip(results) {
        match result {
            Ok(report) => println!(
                "{} -> {} ({} page(s))",
                input.display(),
                output.display(),
                report.pages
            ),
            // already logged by the batch
            Err(_) => failed += 1,
        }
    }

    if failed > 0 {
        eprintln!("{failed} of {} conversion(s) failed", jobs.len());
        std::process::exit(1);
    }
    Ok(())
}
