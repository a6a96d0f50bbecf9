use {
    clap::Parser,
    std::{io::Result, path::PathBuf, process::ExitCode},
    testgen::{DivisorInput, OUTPUT_DIR, create_rng, output_path, parse_divisor_range},
    tracing_subscriber::EnvFilter,
};

#[derive(Parser)]
#[command(about = "Generate test data for the divisor-sum problem with random n in range")]
struct Args {
    #[arg(long, allow_hyphen_values = true, help = "Minimum value for n (1 <= min <= 1e18)")]
    min: String,

    #[arg(long, allow_hyphen_values = true, help = "Maximum value for n (1 <= max <= 1e18)")]
    max: String,

    #[arg(long, help = "Output file name (e.g. test_random)")]
    output: String,

    #[arg(long, allow_negative_numbers = true, help = "Random seed (optional)")]
    seed: Option<i64>,

    #[arg(
        long,
        value_parser = clap::value_parser!(PathBuf),
        default_value = OUTPUT_DIR,
        help = "Directory for the output file (created if missing)"
    )]
    dir: PathBuf,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let bounds = match parse_divisor_range(&args.min, &args.max) {
        Ok(bounds) => bounds,
        Err(e) => {
            println!("Error: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Some(seed) = args.seed {
        println!("Using random seed: {seed}");
    }

    let mut rng = create_rng(args.seed.map(|seed| seed as u64));
    let input = DivisorInput::generate(&mut rng, bounds);
    println!(
        "Generating test data for n={} (range: {} to {})...",
        input.n, bounds.min, bounds.max
    );

    let path = output_path(&args.dir, &args.output)?;
    input.write_to_path(&path)?;

    println!("Generated test data: {}", path.display());
    println!("Random n value: {}", input.n);
    Ok(ExitCode::SUCCESS)
}
