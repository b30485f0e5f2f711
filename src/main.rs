use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use disk_sched::educational::{head_movement_chart, result_summary, seek_comparison_bars};
use disk_sched::scheduler::best;
use disk_sched::workload::{random_position, random_requests};
use disk_sched::{DEFAULT_DISK_SIZE, DiskGeometry, Result, SimulationConfig, Track};

#[derive(Parser, Debug)]
#[command(name = "disk-sched")]
#[command(about = "Simulate disk head scheduling policies")]
struct Args {
    /// Track requests, comma separated (e.g. 98,183,37,122)
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    requests: Vec<Track>,

    /// Initial head position (random with --random, otherwise 0)
    #[arg(short, long, allow_negative_numbers = true)]
    initial: Option<Track>,

    /// Number of tracks on the disk
    #[arg(short, long, default_value_t = DEFAULT_DISK_SIZE)]
    disk_size: Track,

    /// Policy: FCFS, SSTF, SCAN, C-SCAN, LOOK, C-LOOK
    #[arg(short, long, default_value = "FCFS")]
    algorithm: String,

    /// Initial direction for directional policies: right or left
    #[arg(long, default_value = "right")]
    direction: String,

    /// Read the simulation request from a JSON file instead of flags
    #[arg(short, long)]
    config: Option<String>,

    /// Generate this many random requests instead of --requests
    #[arg(long)]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Run every policy and compare
    #[arg(long)]
    compare: bool,

    /// Draw the head movement chart
    #[arg(long)]
    chart: bool,

    /// Print the response as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn simulation_config(&self) -> Result<SimulationConfig> {
        if let Some(path) = &self.config {
            return SimulationConfig::from_json_file(path);
        }

        let (requests, initial) = match self.random {
            Some(count) => (
                random_requests(count, self.disk_size, self.seed),
                self.initial.unwrap_or_else(|| {
                    random_position(DiskGeometry::new(self.disk_size), self.seed)
                }),
            ),
            None => (self.requests.clone(), self.initial.unwrap_or(0)),
        };
        Ok(SimulationConfig::new(requests, initial)
            .algorithm(self.algorithm.as_str())
            .disk_size(self.disk_size)
            .direction(self.direction.as_str()))
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.simulation_config()?;

    if args.compare {
        let direction = config.parsed_direction()?;
        let results = config.scheduler()?.compare(direction);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
            return Ok(());
        }
        println!("{}", seek_comparison_bars(&results, 30));
        if let Some(winner) = best(&results) {
            println!(
                "\nLowest total seek: {} ({})",
                winner.algorithm, winner.total_seek_time
            );
        }
        return Ok(());
    }

    let response = config.run()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("{}", result_summary(&response.result));
    if response.result.algorithm.is_directional() {
        println!("direction: {}", response.request.direction.to_ascii_lowercase());
    }
    if args.chart {
        println!();
        println!(
            "{}",
            head_movement_chart(&response.result, config.disk_size, 60)
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
