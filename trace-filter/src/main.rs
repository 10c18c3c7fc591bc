mod loader;
mod report;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use loader::load_trace_file;
use report::Report;
use std::path::PathBuf;
use tracing::{error, info};
use trapezoid_common::{Real, init_tracer, tracer::TracerOptions};
use trapezoidal_filter::{EnergyParameters, FilterResult, TraceFilter, TriggerParameters};

// cargo run --bin trace-filter -- --trace-file trace.txt --trigger-length 10 --trigger-gap 5 --trigger-threshold 50 --energy-length 20 --energy-gap 10 --decay-constant 100

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    /// Human readable summary.
    #[default]
    Summary,
    /// JSON document.
    Json,
}

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Plain-text file of samples separated by whitespace or commas.
    #[clap(long)]
    trace_file: PathBuf,

    /// If set, filter lengths, gaps and the decay constant are given in nanoseconds
    /// and converted to samples using this sample time.
    #[clap(long)]
    sample_time_ns: Option<Real>,

    #[clap(flatten)]
    trigger: TriggerParameters,

    #[clap(flatten)]
    energy: EnergyParameters,

    #[clap(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Include the full trigger and energy filter responses in JSON output.
    #[clap(long)]
    include_filters: bool,
}

impl Cli {
    /// The filter parameters in samples, converted from nanoseconds if a sample time is given.
    fn filter_parameters(&self) -> FilterResult<(TriggerParameters, EnergyParameters)> {
        match self.sample_time_ns {
            Some(sample_time_ns) => Ok((
                self.trigger.to_samples(sample_time_ns)?,
                self.energy.to_samples(sample_time_ns)?,
            )),
            None => Ok((self.trigger, self.energy)),
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let _tracer = init_tracer!(TracerOptions::default());

    let trace = load_trace_file(&args.trace_file)?;
    info!(num_samples = trace.len(), "Trace loaded");

    let (trigger, energy) = args.filter_parameters()?;
    let filter = TraceFilter::new(trigger, energy)?;
    let analysis = filter
        .analyse(&trace)
        .inspect_err(|e| error!(kind = %e.kind(), "{e}"))?;

    let report = Report::new(&filter, &analysis, &trace, args.include_filters)?;
    match args.output {
        OutputFormat::Summary => println!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
