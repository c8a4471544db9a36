use std::process::ExitCode;

use clap::Parser;
use log::error;

use cacheable::cacheable::config::BenchmarkConfigBuilder;
use cacheable::cacheable::harness::Harness;
use cacheable::cacheable::types::{Label, Modulus, Reps, Trials};
use cacheable::cacheable::variant::VariantRegistry;

#[derive(Parser)]
#[command(name = "cacheable-bench")]
#[command(about = "Compares the call overhead of memoizing cache decorators", long_about = None)]
struct Args {
    /// Number of measured runs per variant
    #[arg(long, default_value = "1")]
    trials: Trials,

    /// Calls per measured run
    #[arg(long, default_value = "1000000")]
    reps: Reps,

    /// Number of distinct inputs cycled through by the workload
    #[arg(long, default_value = "16")]
    modulus: Modulus,

    /// Unmeasured calls made before the first trial
    #[arg(long, default_value = "10000")]
    warmup_reps: Reps,

    /// Variant to run, may be repeated; runs every variant if omitted
    #[arg(long = "variant")]
    variants: Vec<Label>,

    /// Print the registered variant labels and exit
    #[arg(long)]
    list: bool,

    /// Count cache hits and misses; the counters add to the measured time
    #[arg(long)]
    stats: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();
    let registry = if args.stats { VariantRegistry::instrumented() } else { VariantRegistry::standard() };

    if args.list {
        for label in registry.labels() {
            println!("{}", label);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = BenchmarkConfigBuilder::new()
        .trials(args.trials)
        .reps(args.reps)
        .modulus(args.modulus)
        .warmup_reps(args.warmup_reps)
        .variants(args.variants)
        .build()?;

    let harness = Harness::new(config, registry)?;
    let report = harness.execute();
    print!("{}", report);

    if report.has_failures() {
        for (label, error) in report.failures() {
            error!("Variant {} did not complete: {}", label, error);
        }
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
