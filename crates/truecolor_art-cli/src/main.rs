//! tcart - Print images as truecolor terminal art
//!
//! A command-line tool that decodes an image, trims its transparent border
//! and prints it as colored character cells.

mod catalog;
mod source;

use catalog::Catalog;
use clap::{Args, Parser, Subcommand};
use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use truecolor_art::{
    encode, gradient, parse_color_text, to_color_text, trim, EncodeOptions, GapPolicy, Ground,
    PixelGrid, TrueColorError,
};

#[derive(Parser)]
#[command(name = "tcart")]
#[command(version)]
#[command(about = "Print images as truecolor terminal art", long_about = None)]
struct Cli {
    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an image file (PNG, JPEG, GIF, WebP)
    Show {
        input: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render a base64-encoded image
    Base64 {
        /// Base64 payload (use - for stdin)
        payload: String,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render an entry of a JSON image catalog
    Catalog {
        /// Catalog file: a JSON array of {"name", "data"} objects
        file: PathBuf,

        /// Entry to render (default: first entry)
        #[arg(short, long)]
        entry: Option<String>,

        /// Print the entry names instead of rendering
        #[arg(short, long)]
        list: bool,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render a diagonal color gradient
    Gradient {
        /// Grid size (N x N, at most 512)
        #[arg(
            short = 'n',
            long,
            default_value = "10",
            value_parser = clap::value_parser!(u16).range(0..=512)
        )]
        size: u16,

        /// Top-left color as R,G,B
        #[arg(long, default_value = "100,20,30", value_parser = parse_rgb)]
        start: (u8, u8, u8),

        /// Bottom-right color as R,G,B
        #[arg(long, default_value = "200,230,180", value_parser = parse_rgb)]
        end: (u8, u8, u8),

        /// Also write the gradient as a color text file
        #[arg(long)]
        save: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render a color text file ("(r,g,b), (r,g,b)" per line)
    Text {
        input: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Keep transparent borders instead of trimming to visible content
    #[arg(long)]
    no_trim: bool,

    /// Color the glyph foreground instead of the cell background
    #[arg(long)]
    foreground: bool,

    /// Text drawn for each visible pixel
    #[arg(long, default_value = "  ")]
    glyph: String,

    /// Text drawn for each transparent pixel
    #[arg(long, default_value = "  ")]
    invisible_glyph: String,

    /// Let a color run continue across transparent pixels
    #[arg(long)]
    continue_runs: bool,

    /// Reset colors before transparent pixels so gaps show the terminal background
    #[arg(long)]
    clear_gaps: bool,
}

impl RenderArgs {
    fn options(&self) -> EncodeOptions {
        EncodeOptions {
            ground: if self.foreground {
                Ground::Foreground
            } else {
                Ground::Background
            },
            glyph: self.glyph.clone(),
            invisible_glyph: self.invisible_glyph.clone(),
            gap_policy: if self.continue_runs {
                GapPolicy::ContinueRun
            } else {
                GapPolicy::ReEmit
            },
            clear_gaps: self.clear_gaps,
        }
    }
}

fn parse_rgb(s: &str) -> Result<(u8, u8, u8), String> {
    let channels: Vec<&str> = s.split(',').map(str::trim).collect();
    let &[r, g, b] = channels.as_slice() else {
        return Err(format!("expected R,G,B, got '{}'", s));
    };
    let parse = |c: &str| {
        c.parse::<u8>()
            .map_err(|_| format!("'{}' is not a channel value (0-255)", c))
    };
    Ok((parse(r)?, parse(g)?, parse(b)?))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Trim (unless disabled), encode and print `grid` followed by a line break.
fn render(grid: PixelGrid, args: &RenderArgs) -> Result<(), Box<dyn Error>> {
    let grid = if args.no_trim {
        grid
    } else {
        match trim(&grid) {
            Ok(trimmed) => {
                debug!(
                    from = ?(grid.width(), grid.height()),
                    to = ?(trimmed.width(), trimmed.height()),
                    "trimmed to visible content"
                );
                trimmed
            }
            Err(TrueColorError::EmptyContent) => {
                warn!("image has no visible pixels, rendering untrimmed");
                grid
            }
            Err(e) => return Err(e.into()),
        }
    };

    let art = encode(&grid, &args.options());
    info!(
        width = grid.width(),
        height = grid.height(),
        bytes = art.len(),
        "encoded"
    );

    let mut stdout = io::stdout().lock();
    stdout.write_all(art.as_bytes())?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}

fn read_text(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e).into())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Show { input, render: r } => {
            let grid = source::open_path(&input)?;
            render(grid, &r)?;
        }

        Commands::Base64 { payload, render: r } => {
            let payload = if payload == "-" {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                payload
            };
            let grid = source::decode_base64(&payload)?;
            render(grid, &r)?;
        }

        Commands::Catalog {
            file,
            entry,
            list,
            render: r,
        } => {
            let catalog = Catalog::load(&file)?;
            if list {
                for name in catalog.names() {
                    println!("{}", name);
                }
                return Ok(());
            }
            let entry = catalog.select(entry.as_deref())?;
            debug!(name = %entry.name, "selected catalog entry");
            let grid = source::decode_base64(&entry.data)
                .map_err(|e| format!("Catalog entry '{}': {}", entry.name, e))?;
            render(grid, &r)?;
        }

        Commands::Gradient {
            size,
            start,
            end,
            save,
            render: r,
        } => {
            let grid = gradient(usize::from(size), start, end);
            if let Some(path) = save {
                fs::write(&path, to_color_text(&grid))?;
                info!(path = %path.display(), "wrote color text");
            }
            render(grid, &r)?;
        }

        Commands::Text { input, render: r } => {
            let text = read_text(&input)?;
            let grid = parse_color_text(&text)
                .map_err(|e| format!("Failed to parse '{}': {}", input.display(), e))?;
            render(grid, &r)?;
        }
    }

    Ok(())
}
