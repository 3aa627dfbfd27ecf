//! Command line surface of the `lanes` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::buffer::NumericBuffer;
use crate::compare::{MeasurementSample, SweepConfig, run_sweep};
use crate::element::DataType;
use crate::error::{Error, Result};
use crate::kernels::Op;
use crate::luminance::PixelBuffer;
use crate::report::{Grouping, render_json, render_table};

#[derive(Debug, Parser)]
#[command(
    name = "lanes",
    about = "Times scalar against vectorized elementwise kernels",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log filter when RUST_LOG is unset (e.g. "info", "lanes=debug").
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Also write daily-rolling log files into this directory.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Measure every selected kernel pair across a size sweep.
    Sweep(SweepArgs),

    /// Convert a raw BGRA image to grayscale with both kernels and time them.
    Gray(GrayArgs),
}

#[derive(Debug, Args)]
pub struct SweepArgs {
    /// Comma separated buffer sizes, measured in the given order.
    #[arg(long, value_delimiter = ',')]
    pub sizes: Vec<usize>,

    #[arg(long, default_value_t = bench::DEFAULT_REPETITIONS)]
    pub repetitions: usize,

    /// Operations to measure (add, mul, div, cos, fma, luminance). Default: all.
    #[arg(long, value_delimiter = ',')]
    pub ops: Vec<Op>,

    /// Data types to measure (f32, f64, i32, bgra8). Default: all.
    #[arg(long = "types", value_delimiter = ',')]
    pub data_types: Vec<DataType>,

    /// Print one table per size.
    #[arg(long)]
    pub group_by_size: bool,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct GrayArgs {
    #[arg(long)]
    pub width: usize,

    #[arg(long)]
    pub height: usize,

    /// Raw pixels, 4 bytes per pixel in B, G, R, A order, rows without padding.
    #[arg(long)]
    pub input: PathBuf,

    /// Where the grayscale result is written, same layout as the input.
    #[arg(long)]
    pub output: PathBuf,

    #[arg(long, default_value_t = bench::DEFAULT_REPETITIONS)]
    pub repetitions: usize,

    /// Downscale the written image to fit inside WIDTHxHEIGHT, keeping its aspect ratio.
    #[arg(long, value_name = "WIDTHxHEIGHT", value_parser = parse_fit_box)]
    pub fit: Option<FitBox>,
}

/// Target box for `gray --fit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitBox {
    pub width: usize,
    pub height: usize,
}

fn parse_fit_box(value: &str) -> std::result::Result<FitBox, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let parse = |dim: &str| match dim.trim().parse::<usize>() {
        Ok(0) => Err(format!("fit dimensions must be positive, got '{value}'")),
        Ok(n) => Ok(n),
        Err(err) => Err(format!("invalid fit dimension '{dim}': {err}")),
    };
    Ok(FitBox {
        width: parse(width)?,
        height: parse(height)?,
    })
}

impl SweepArgs {
    /// Empty lists fall back to the defaults of [`SweepConfig`].
    pub fn to_config(&self) -> SweepConfig {
        let mut config = SweepConfig::default().with_repetitions(self.repetitions);
        if !self.sizes.is_empty() {
            config = config.with_sizes(self.sizes.clone());
        }
        if !self.ops.is_empty() {
            config = config.with_ops(self.ops.clone());
        }
        if !self.data_types.is_empty() {
            config = config.with_data_types(self.data_types.clone());
        }
        config
    }
}

/// Runs a subcommand and returns the report destined for stdout.
pub fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Commands::Sweep(args) => run_sweep_command(&args),
        Commands::Gray(args) => run_gray_command(&args),
    }
}

fn run_sweep_command(args: &SweepArgs) -> Result<String> {
    let config = args.to_config();
    tracing::info!(
        backend = crate::BACKEND,
        sizes = ?config.sizes,
        repetitions = config.repetitions,
        "starting sweep"
    );

    let outcome = run_sweep(&config)?;
    for skipped in &outcome.skipped {
        tracing::warn!(size = skipped.size, error = %skipped.error, "size was skipped");
    }

    if args.json {
        return render_json(&outcome.samples);
    }
    let grouping = if args.group_by_size {
        Grouping::BySize
    } else {
        Grouping::None
    };
    Ok(render_table(&outcome.samples, grouping))
}

fn run_gray_command(args: &GrayArgs) -> Result<String> {
    if args.repetitions == 0 {
        return Err(Error::ZeroRepetitions);
    }

    let bytes = std::fs::read(&args.input).map_err(|source| Error::ReadInput {
        path: args.input.clone(),
        source,
    })?;
    let image = PixelBuffer::from_bgra_bytes(args.width, args.height, &bytes)?;
    tracing::info!(
        width = args.width,
        height = args.height,
        input = %args.input.display(),
        "loaded image"
    );

    let mut scalar_out = NumericBuffer::try_filled(image.pixels().len(), 0u32)?;
    let mut vector_out = NumericBuffer::try_filled(image.pixels().len(), 0u32)?;
    let scalar_mean = bench::measure(args.repetitions, || {
        image.grayscale_into_scalar(&mut scalar_out)
    });
    let vector_mean = bench::measure(args.repetitions, || image.grayscale_into(&mut vector_out));

    if let Some((index, (&scalar, &vector))) = scalar_out
        .iter()
        .zip(vector_out.iter())
        .enumerate()
        .find(|(_, (s, v))| s != v)
    {
        return Err(Error::OutputMismatch {
            index,
            scalar,
            vector,
        });
    }

    let mut gray = PixelBuffer::new(args.width, args.height, vector_out.into_vec())?;
    if let Some(fit) = args.fit {
        gray = gray.fit_within(fit.width, fit.height);
    }

    std::fs::write(&args.output, gray.to_bgra_bytes()).map_err(|source| Error::WriteOutput {
        path: args.output.clone(),
        source,
    })?;
    tracing::info!(
        output = %args.output.display(),
        width = gray.width(),
        height = gray.height(),
        "wrote grayscale image"
    );

    let sample = MeasurementSample::new(
        Op::Luminance,
        DataType::Bgra8,
        image.pixels().len(),
        args.repetitions,
        scalar_mean,
        vector_mean,
    );
    let mut report = render_table(&[sample], Grouping::None);
    if args.fit.is_some() {
        report.push_str(&format!("Output {}x{}\n", gray.width(), gray.height()));
    }
    Ok(report)
}
