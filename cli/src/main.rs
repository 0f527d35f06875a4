//! folio CLI - book content extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use folio::render::{to_json, to_listing_json};
use folio::{
    format_mismatch, ExtractOptions, ExtractionResult, ExtractionStats, Format, JsonFormat,
    PagePosition, SourceDocument,
};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Extract pages, text and images from books", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a book to JSON
    Extract {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Declared format (defaults to the file extension)
        #[arg(short, long, env = "FOLIO_FORMAT")]
        format: Option<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Emit the reader listing with images as data URIs
        #[arg(long)]
        data_uri: bool,

        /// Skip image extraction
        #[arg(long)]
        no_images: bool,
    },

    /// Show page and content statistics
    Info {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Declared format (defaults to the file extension)
        #[arg(short, long, env = "FOLIO_FORMAT")]
        format: Option<String>,
    },

    /// Write embedded images to a directory
    Images {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Pick the MIME type from image bytes instead of stored names
        #[arg(long)]
        sniff: bool,
    },

    /// Encode or decode position tokens
    #[command(subcommand)]
    Position(PositionCommand),

    /// Extract several files in parallel
    Batch {
        /// Input files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Directory for one JSON file per input
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum PositionCommand {
    /// Build a token from a page and offset
    Encode {
        /// Page number (1-indexed)
        page: u32,

        /// Character offset within the page
        offset: u32,
    },

    /// Split a token into page and offset
    Decode {
        /// Token of the form PAGE:OFFSET
        token: String,

        /// Total pages, to report reading progress
        #[arg(long)]
        total: Option<u32>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Extract {
            input,
            format,
            output,
            compact,
            data_uri,
            no_images,
        }) => cmd_extract(
            &input,
            format.as_deref(),
            output.as_deref(),
            compact,
            data_uri,
            no_images,
        ),
        Some(Commands::Info { input, format }) => cmd_info(&input, format.as_deref()),
        Some(Commands::Images {
            input,
            output,
            sniff,
        }) => cmd_images(&input, output.as_deref(), sniff),
        Some(Commands::Position(PositionCommand::Encode { page, offset })) => {
            cmd_position_encode(page, offset)
        }
        Some(Commands::Position(PositionCommand::Decode { token, total })) => {
            cmd_position_decode(&token, total)
        }
        Some(Commands::Batch { inputs, output }) => cmd_batch(&inputs, output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: folio <COMMAND> <FILE>".yellow());
            println!("       folio --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Use the explicit tag if given, otherwise the file extension.
fn resolve_format(input: &Path, tag: Option<&str>) -> folio::Result<Format> {
    match tag {
        Some(tag) => Format::parse(tag),
        None => Format::from_path(input),
    }
}

fn load(
    input: &Path,
    tag: Option<&str>,
    options: &ExtractOptions,
) -> Result<(Format, Vec<u8>, ExtractionResult), Box<dyn std::error::Error>> {
    let format = resolve_format(input, tag)?;
    let bytes = fs::read(input)?;
    log::debug!("{}: {} bytes as {}", input.display(), bytes.len(), format);

    let result = SourceDocument::with_format(&bytes, format).extract(options)?;
    report_faults(&result);
    Ok((format, bytes, result))
}

fn report_faults(result: &ExtractionResult) {
    for fault in &result.faults {
        eprintln!("{}: {}", "Warning".yellow().bold(), fault);
    }
}

fn write_or_print(output: Option<&Path>, content: &str) -> std::io::Result<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_extract(
    input: &Path,
    format: Option<&str>,
    output: Option<&Path>,
    compact: bool,
    data_uri: bool,
    no_images: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ExtractOptions::new().with_images(!no_images);
    let (_, _, result) = load(input, format, &options)?;

    let json_format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = if data_uri {
        to_listing_json(&result, json_format)?
    } else {
        to_json(&result, json_format)?
    };

    write_or_print(output, &json)?;
    Ok(())
}

fn cmd_info(input: &Path, format: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let (format, bytes, result) = load(input, format, &ExtractOptions::default())?;
    let stats = ExtractionStats::from_result(&result);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!("{}: {}", "Size".bold(), bytes.len());

    if let Some(detected) = format_mismatch(format, &bytes) {
        println!(
            "{}: content looks like {}, declared {}",
            "Warning".yellow().bold(),
            detected,
            format
        );
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Pages".bold(), stats.page_count);
    println!("{}: {}", "Empty pages".bold(), stats.empty_page_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);
    println!("{}: {}", "Images".bold(), stats.image_count);
    println!("{}: {}", "Image bytes".bold(), stats.image_bytes);

    if !stats.degraded_pages.is_empty() {
        let pages: Vec<String> = stats.degraded_pages.iter().map(u32::to_string).collect();
        println!("{}: {}", "Degraded pages".bold(), pages.join(", ").yellow());
    }

    Ok(())
}

/// File name for the `ordinal`-th image (1-indexed) on a page.
fn image_filename(page: u32, ordinal: usize, extension: &str) -> String {
    format!("page{}_{}.{}", page, ordinal, extension)
}

fn cmd_images(
    input: &Path,
    output: Option<&Path>,
    sniff: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ExtractOptions::new().with_sniffed_mime(sniff);
    let (_, _, result) = load(input, None, &options)?;

    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let mut count = 0;
    for page in &result.pages {
        for (i, image) in page.images.iter().enumerate() {
            let filename = image_filename(page.index, i + 1, image.extension());
            fs::write(output_dir.join(&filename), &image.data)?;
            println!("{} {}", "Extracted".green(), filename);
            count += 1;
        }
    }

    println!("\n{} {} images extracted", "Done!".green().bold(), count);

    Ok(())
}

fn cmd_position_encode(page: u32, offset: u32) -> Result<(), Box<dyn std::error::Error>> {
    let position = PagePosition::new(page, offset)?;
    println!("{}", position.encode());
    Ok(())
}

fn cmd_position_decode(token: &str, total: Option<u32>) -> Result<(), Box<dyn std::error::Error>> {
    let position = PagePosition::decode(token)?;

    println!("{}: {}", "Page".bold(), position.page());
    println!("{}: {}", "Offset".bold(), position.offset());
    if let Some(total) = total {
        println!("{}: {:.1}%", "Progress".bold(), position.percentage_of(total));
    }

    Ok(())
}

fn cmd_batch(inputs: &[PathBuf], output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = output {
        fs::create_dir_all(dir)?;
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    // Unreadable or untyped inputs are reported without stopping the batch.
    pb.set_message("Reading files...");
    let mut loaded = Vec::new();
    let mut failed = 0;
    for input in inputs {
        match resolve_format(input, None).and_then(|format| Ok((format, fs::read(input)?))) {
            Ok((format, bytes)) => loaded.push((input, format, bytes)),
            Err(e) => {
                pb.println(format!("{} {}: {}", "Skipped".yellow(), input.display(), e));
                failed += 1;
            }
        }
        pb.inc(1);
    }

    pb.set_message("Extracting...");
    let documents: Vec<SourceDocument<'_>> = loaded
        .iter()
        .map(|(_, format, bytes)| SourceDocument::with_format(bytes, *format))
        .collect();
    let results = folio::extract_many(&documents, &ExtractOptions::default());
    pb.finish_with_message("Done!");

    println!();
    for ((input, _, _), result) in loaded.iter().zip(results) {
        match result {
            Ok(result) => {
                let degraded = result.degraded_pages().len();
                let status = if degraded == 0 {
                    "ok".green()
                } else {
                    format!("{} degraded", degraded).yellow()
                };
                println!(
                    "  {} {} ({} pages, {} images) {}",
                    "├─".dimmed(),
                    input.display(),
                    result.page_count(),
                    result.image_count(),
                    status
                );

                if let Some(dir) = output {
                    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
                    let json = to_json(&result, JsonFormat::Compact)?;
                    fs::write(dir.join(format!("{}.json", stem)), json)?;
                }
            }
            Err(e) => {
                println!("  {} {} {}", "├─".dimmed(), input.display(), e.to_string().red());
                failed += 1;
            }
        }
    }

    println!(
        "\n{} {} of {} files extracted",
        "Done!".green().bold(),
        inputs.len() - failed,
        inputs.len()
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "folio".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Book content extraction tool");
    println!();
    println!(
        "Formats: {}",
        Format::ALL
            .iter()
            .map(|f| f.tag())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("License: MIT");
}
