// Preview CLI for mono-raster.
//
// Usage:
//   raster-preview render <scene.toml> [-o <output.bmp>] [--ascii]
//   raster-preview demo <name> [-o <output.bmp>] [--ascii]
//   raster-preview compare <file_a> <file_b> [-d <diff.bmp>]
//   raster-preview list

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mono_raster::Bitmap;
use raster_preview::demos::{available_demos, demo_scene};
use raster_preview::scene::Scene;
use raster_preview::{compare_bitmaps, generate_diff_image, load_bmp, save_bmp, PreviewError};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "raster-preview", version, about = "Render and compare mono-raster scenes")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a TOML scene to a 1-bit BMP
    Render {
        scene: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also print the bitmap as text
        #[arg(long)]
        ascii: bool,
    },
    /// Render a built-in demo scene
    Demo {
        name: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        ascii: bool,
    },
    /// Compare two 1-bit BMPs; exits with status 1 when they differ
    Compare {
        a: PathBuf,
        b: PathBuf,
        /// Write an image of the differing pixels
        #[arg(short, long)]
        diff: Option<PathBuf>,
    },
    /// List the built-in demo names
    List,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Also installs the `log` bridge, so records from the library show up.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Render {
            scene,
            output,
            ascii,
        } => {
            let loaded =
                Scene::load(&scene).with_context(|| format!("loading {}", scene.display()))?;
            let output = output.unwrap_or_else(|| scene.with_extension("bmp"));
            let bm = loaded.render()?;
            write_output(&bm, &output, ascii)
        }
        Command::Demo {
            name,
            output,
            ascii,
        } => {
            let scene = demo_scene(&name).ok_or_else(|| PreviewError::UnknownDemo(name.clone()))?;
            let output = output.unwrap_or_else(|| {
                PathBuf::from(format!("{}_{}x{}.bmp", name, scene.width, scene.height))
            });
            let bm = scene.render()?;
            write_output(&bm, &output, ascii)
        }
        Command::Compare { a, b, diff } => cmd_compare(&a, &b, diff.as_deref()),
        Command::List => {
            println!("Available demos:");
            for name in available_demos() {
                println!("  {}", name);
            }
            Ok(())
        }
    }
}

fn write_output(bm: &Bitmap, output: &Path, ascii: bool) -> Result<()> {
    let total = u32::from(bm.width()) * u32::from(bm.height());
    debug!("{} of {} pixels on", bm.count_on(), total);
    if ascii {
        print!("{}", bm);
    }
    save_bmp(output, bm).with_context(|| format!("writing {}", output.display()))?;
    info!("saved {}", output.display());
    Ok(())
}

fn cmd_compare(path_a: &Path, path_b: &Path, diff_path: Option<&Path>) -> Result<()> {
    let a = load_bmp(path_a).with_context(|| format!("loading {}", path_a.display()))?;
    let b = load_bmp(path_b).with_context(|| format!("loading {}", path_b.display()))?;

    let result = compare_bitmaps(&a, &b)?;
    println!("{}", result);

    if let Some(dp) = diff_path {
        let diff = generate_diff_image(&a, &b)?;
        save_bmp(dp, &diff).with_context(|| format!("writing {}", dp.display()))?;
        println!("Diff saved: {}", dp.display());
    }

    if !result.identical {
        process::exit(1);
    }
    Ok(())
}
