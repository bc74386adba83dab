use clap::{Args, Parser, Subcommand};
use roistat_core::{DisplayRect, Point, Region, StatsReport, ViewTransform};
use roistat_io::DecodedImage;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod args;
mod error;

use args::{parse_pair, parse_quad};
use error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "roistat")]
#[command(version, about = "Colour statistics for a rectangular image region", long_about = None)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute mean, variance, standard deviation and median per channel
    Stats {
        /// Input image
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        #[command(flatten)]
        args: StatsArgs,
    },

    /// Show detected format and dimensions
    Info {
        /// Input image
        input: PathBuf,
    },
}

#[derive(Args, Debug)]
struct StatsArgs {
    /// Region in pixels, used as given (x,y,width,height)
    #[arg(long, value_name = "X,Y,W,H", conflicts_with = "drag", allow_hyphen_values = true)]
    region: Option<String>,

    /// Drag corners in display units, clamped to the image (x0,y0,x1,y1)
    #[arg(long, value_name = "X0,Y0,X1,Y1", allow_hyphen_values = true)]
    drag: Option<String>,

    /// Display zoom factor applied to --drag coordinates
    #[arg(long, value_name = "FLOAT", default_value = "1.0", requires = "drag")]
    scale: f64,

    /// Display offset of the image origin for --drag (dx,dy)
    #[arg(long, value_name = "DX,DY", requires = "drag", allow_hyphen_values = true)]
    offset: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl Default for StatsArgs {
    fn default() -> Self {
        Self {
            region: None,
            drag: None,
            scale: 1.0,
            offset: None,
            json: false,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Stats { input, args } => cmd_stats(&input, &args),
        Commands::Info { input } => info_text(&input),
    };

    match result {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The region named by `--region` or `--drag`, or the whole image.
fn select_region(args: &StatsArgs, width: u32, height: u32) -> CliResult<Region> {
    match (&args.region, &args.drag) {
        (Some(r), _) => {
            let [x, y, w, h] = parse_quad::<i32>(r, "region")?;
            Ok(Region::new(x, y, w, h))
        }
        (None, Some(d)) => {
            let [x0, y0, x1, y1] = parse_quad::<f64>(d, "drag")?;
            let (dx, dy) = match &args.offset {
                Some(o) => parse_pair::<f64>(o, "offset")?,
                None => (0.0, 0.0),
            };
            let view = ViewTransform::new(args.scale, dx, dy)?;
            let rect = DisplayRect::from_points(Point::new(x0, y0), Point::new(x1, y1));
            roistat_core::region_from_selection(rect, &view, width, height)
                .ok_or(CliError::EmptyImage)
        }
        (None, None) => Ok(Region::full(width, height)),
    }
}

fn cmd_stats(input: &Path, args: &StatsArgs) -> CliResult<String> {
    let image = roistat_io::read_image(input)?;
    stats_text(input, &image, args)
}

fn stats_text(input: &Path, image: &DecodedImage, args: &StatsArgs) -> CliResult<String> {
    let (width, height) = (image.width(), image.height());
    let region = select_region(args, width, height)?;
    tracing::debug!(%region, width, height, "selected region");

    let buffer = image.as_buffer()?;
    let stats = roistat_core::region_stats(&buffer, region)?;

    if args.json {
        let out = serde_json::json!({
            "input": input.display().to_string(),
            "region": region,
            "stats": stats,
        });
        Ok(serde_json::to_string_pretty(&out)?)
    } else {
        Ok(StatsReport::new(region, stats).to_string())
    }
}

fn info_text(input: &Path) -> CliResult<String> {
    let format = roistat_io::detect_format(input)?;
    let image = roistat_io::read_image(input)?;
    Ok(format!(
        "File:   {}\nFormat: {:?}\nSize:   {}x{}",
        input.display(),
        format,
        image.width(),
        image.height()
    ))
}
