use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use parabolic_flight::core::constants::{DEFAULT_GRAVITY_MPS2, DEFAULT_SAMPLE_COUNT};
use parabolic_flight::presenter::plot::{auto_file_name, write_planar_svg, write_spatial_svg};
use parabolic_flight::presenter::report::{
    FlightReport, planar_samples_table, planar_table, spatial_samples_table, spatial_table,
};
use parabolic_flight::{
    LaunchParameters2D, LaunchParameters3D, compute_trajectory_2d, compute_trajectory_3d,
};

#[derive(Parser, Debug)]
#[command(name = "parabolic_flight")]
#[command(version)]
#[command(about = "Projectile trajectories with closed-form kinematics", long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. warn, debug, parabolic_flight=trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Planar launch without spin
    #[command(name = "2d")]
    Planar {
        /// Launch speed (m/s)
        #[arg(short = 'v', long, allow_negative_numbers = true)]
        speed: f64,

        /// Launch angle above the horizontal (degrees)
        #[arg(short = 'a', long, allow_negative_numbers = true)]
        angle: f64,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Spatial launch with azimuth and Magnus spin
    #[command(name = "3d")]
    Spatial {
        /// Launch speed (m/s)
        #[arg(short = 'v', long, allow_negative_numbers = true)]
        speed: f64,

        /// Elevation above the ground plane (degrees)
        #[arg(short = 'e', long, allow_negative_numbers = true)]
        elevation: f64,

        /// Heading in the ground plane, from +x towards +y (degrees)
        #[arg(short = 'z', long, default_value_t = 0.0, allow_negative_numbers = true)]
        azimuth: f64,

        /// Spin factor driving the lateral acceleration
        #[arg(short = 's', long, default_value_t = 0.0, allow_negative_numbers = true)]
        spin: f64,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Gravitational acceleration (m/s^2)
    #[arg(short = 'g', long, env = "PARABOLIC_GRAVITY", default_value_t = DEFAULT_GRAVITY_MPS2, allow_negative_numbers = true)]
    gravity: f64,

    /// Number of time samples
    #[arg(short = 'n', long, env = "PARABOLIC_SAMPLES", default_value_t = DEFAULT_SAMPLE_COUNT)]
    samples: NonZeroUsize,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    /// Include every sample in the output
    #[arg(long)]
    full: bool,

    /// Write an SVG chart to this path
    #[arg(long, conflicts_with = "plot_auto")]
    plot: Option<PathBuf>,

    /// Write an SVG chart with a timestamped name in the working directory
    #[arg(long)]
    plot_auto: bool,
}

impl CommonArgs {
    fn plot_path(&self, dimension: &str) -> Option<PathBuf> {
        if self.plot_auto {
            return Some(auto_file_name(dimension, Local::now()));
        }
        self.plot.clone()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_planar(speed: f64, angle: f64, common: &CommonArgs) -> Result<()> {
    let params = LaunchParameters2D::new(speed, angle)
        .with_gravity(common.gravity)
        .with_sample_count(common.samples);
    let (trajectory, summary) = compute_trajectory_2d(&params)?;

    match common.output {
        OutputFormat::Table => {
            print!("{}", planar_table(&params, &summary));
            if common.full {
                println!();
                print!("{}", planar_samples_table(&trajectory));
            }
        }
        OutputFormat::Json => {
            let report =
                FlightReport::new(Utc::now(), &params, &trajectory, &summary, common.full);
            println!("{}", report.to_json()?);
        }
    }

    if let Some(path) = common.plot_path("2d") {
        write_planar_svg(&path, &params, &trajectory, &summary)
            .with_context(|| format!("could not write chart to {}", path.display()))?;
        eprintln!("Chart written to {}", path.display());
    }
    Ok(())
}

fn run_spatial(
    speed: f64,
    elevation: f64,
    azimuth: f64,
    spin: f64,
    common: &CommonArgs,
) -> Result<()> {
    let params = LaunchParameters3D::new(speed, elevation, azimuth)
        .with_spin(spin)
        .with_gravity(common.gravity)
        .with_sample_count(common.samples);
    let (trajectory, summary) = compute_trajectory_3d(&params);

    match common.output {
        OutputFormat::Table => {
            print!("{}", spatial_table(&params, &trajectory, &summary));
            if common.full {
                println!();
                print!("{}", spatial_samples_table(&trajectory));
            }
        }
        OutputFormat::Json => {
            let report =
                FlightReport::new(Utc::now(), &params, &trajectory, &summary, common.full);
            println!("{}", report.to_json()?);
        }
    }

    if let Some(path) = common.plot_path("3d") {
        write_spatial_svg(&path, &params, &trajectory, &summary)
            .with_context(|| format!("could not write chart to {}", path.display()))?;
        eprintln!("Chart written to {}", path.display());
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Planar {
            speed,
            angle,
            common,
        } => run_planar(speed, angle, &common),
        Commands::Spatial {
            speed,
            elevation,
            azimuth,
            spin,
            common,
        } => run_spatial(speed, elevation, azimuth, spin, &common),
    }
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
