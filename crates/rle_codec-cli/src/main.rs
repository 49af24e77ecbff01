//! rle - Run-length encode text and PNG images
//!
//! A command-line tool for converting text and images to/from RLE format.

use clap::{ArgAction, Parser, Subcommand};
use image::ImageFormat;
use rle_codec::{
    decode_image, decode_text, encode_image, encode_text, has_digits, prepare_text, strip_digits,
    Format,
};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "rle")]
#[command(version)]
#[command(about = "Run-length encode and decode text and PNG images", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text (argument or stdin)
    EncodeText {
        /// Text to encode (default: read stdin)
        text: Option<String>,

        /// Allow digits in the text, using the `count:char,` format
        #[arg(short, long)]
        numbers: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode text produced by encode-text
    DecodeText {
        /// Encoded text (default: read stdin)
        text: Option<String>,

        /// The input uses the `count:char,` format
        #[arg(short, long)]
        numbers: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove digits from text
    Filter {
        /// Text to filter (default: read stdin)
        text: Option<String>,
    },

    /// Encode a PNG image to an RLE envelope
    EncodeImage {
        /// Input PNG file (use - for stdin)
        input: PathBuf,

        /// Output envelope file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode an RLE envelope to PNG
    DecodeImage {
        /// Input envelope text file (use - for stdin)
        input: PathBuf,

        /// Output PNG file (default: input with .png extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::EncodeText {
            text,
            numbers,
            output,
        } => {
            let encoded = encode_text_arg(&text_arg(text)?, numbers);
            write_output(output.as_deref(), encoded.as_bytes())?;
        }

        Commands::DecodeText {
            text,
            numbers,
            output,
        } => {
            let decoded = decode_text_arg(&text_arg(text)?, numbers);
            write_output(output.as_deref(), decoded.as_bytes())?;
        }

        Commands::Filter { text } => {
            let text = text_arg(text)?;
            write_output(None, strip_digits(&text).as_bytes())?;
        }

        Commands::EncodeImage { input, output } => {
            let data = read_input(&input)?;
            if !is_png(&input, &data) {
                return Err(format!("'{}' is not a PNG image", input.display()).into());
            }

            let img = image::load_from_memory_with_format(&data, ImageFormat::Png)
                .map_err(|e| format!("Failed to open '{}': {}", input.display(), e))?;
            let rgba_img = img.to_rgba8();
            let (width, height) = rgba_img.dimensions();
            let pixels = rgba_img.into_raw();

            tracing::info!("Encoding '{}' ({}x{})", input.display(), width, height);

            let envelope = encode_image(&pixels, width as usize, height as usize)?;
            write_output(output.as_deref(), envelope.as_bytes())?;
        }

        Commands::DecodeImage { input, output } => {
            let data = read_input(&input)?;
            let text = String::from_utf8(data)
                .map_err(|_| format!("'{}' is not a text file", input.display()))?;

            tracing::info!("Decoding ({} bytes)", text.len());

            let image = decode_image(&text)
                .map_err(|e| format!("Failed to decode '{}': {}", input.display(), e))?;

            let output_path = output.unwrap_or_else(|| {
                let mut p = if is_stdin(&input) {
                    PathBuf::from("decoded")
                } else {
                    input.clone()
                };
                p.set_extension("png");
                p
            });

            let img = image::RgbaImage::from_raw(
                u32::try_from(image.width)?,
                u32::try_from(image.height)?,
                image.pixels,
            )
            .ok_or("Failed to create image from decoded data")?;
            img.save_with_format(&output_path, ImageFormat::Png)?;

            tracing::info!(
                "Decoded: {}x{} pixels -> '{}'",
                image.width,
                image.height,
                output_path.display()
            );
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(input: &Path) -> io::Result<Vec<u8>> {
    if is_stdin(input) {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        fs::read(input).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Failed to read '{}': {}", input.display(), e),
            )
        })
    }
}

fn encode_text_arg(text: &str, numbers: bool) -> String {
    let format = Format::from_numbers_allowed(numbers);
    if !numbers && has_digits(text) {
        tracing::warn!("digits are not allowed without --numbers and were removed");
    }
    encode_text(&prepare_text(text, format), format)
}

fn decode_text_arg(text: &str, numbers: bool) -> String {
    decode_text(text, Format::from_numbers_allowed(numbers))
}

fn text_arg(text: Option<String>) -> io::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            // A trailing newline from `echo` is not part of the payload
            let trimmed = buf.strip_suffix('\n').unwrap_or(&buf);
            Ok(trimmed.strip_suffix('\r').unwrap_or(trimmed).to_string())
        }
    }
}

/// Sniffs the PNG signature, falling back to the file extension.
fn is_png(path: &Path, data: &[u8]) -> bool {
    match image::guess_format(data) {
        Ok(format) => format == ImageFormat::Png,
        Err(_) => path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png")),
    }
}

fn write_output(output: Option<&Path>, data: &[u8]) -> io::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, data)?;
            tracing::info!("Written {} bytes to '{}'", data.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
