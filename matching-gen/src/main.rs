use {
    clap::Parser,
    indicatif::ProgressBar,
    std::{io::Result, path::PathBuf, process::ExitCode},
    testgen::{
        MatchingInput, OUTPUT_DIR, Progress, Sequence, create_rng, output_path, parse_counts,
        sampling::PROGRESS_THRESHOLD,
    },
    tracing_subscriber::EnvFilter,
};

#[derive(Parser)]
#[command(about = "Generate test data for the matching problem")]
struct Args {
    #[arg(long, allow_hyphen_values = true, help = "Number of players (1 <= n <= 5e7)")]
    n: String,

    #[arg(long, allow_hyphen_values = true, help = "Number of problems (1 <= m <= 5e7)")]
    m: String,

    #[arg(long, help = "Output file name (e.g. input01)")]
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

    let (n, m) = match parse_counts(&args.n, &args.m) {
        Ok(counts) => counts,
        Err(e) => {
            println!("Error: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Some(seed) = args.seed {
        println!("Using random seed: {seed}");
    }

    let mut pb: Option<ProgressBar> = None;
    let mut rng = create_rng(args.seed.map(|seed| seed as u64));
    let input = MatchingInput::generate(&mut rng, n, m, |progress| {
        match progress {
            Progress::Started { seq, total } => {
                if let Some(pb) = pb.take() {
                    pb.finish();
                }
                match seq {
                    Sequence::Abilities => println!("Generating abilities for {total} players..."),
                    Sequence::Difficulties => {
                        println!("Generating difficulties for {total} problems...")
                    }
                }
                if total > PROGRESS_THRESHOLD {
                    pb = Some(ProgressBar::new(total as u64));
                }
            }
            Progress::Batch { done, .. } => {
                if let Some(pb) = &pb {
                    pb.set_position(done as u64);
                }
            }
        }
    });
    if let Some(pb) = pb.take() {
        pb.finish();
    }

    let path = output_path(&args.dir, &args.output)?;
    println!("Writing to file: {}", path.display());
    input.write_to_path(&path)?;

    println!("Generated test data: {}", path.display());
    println!("Number of players: {n}, Number of problems: {m}");
    Ok(ExitCode::SUCCESS)
}
