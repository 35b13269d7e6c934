use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use algo_visualiser_core::{
    write_trace, ArrayConfig, Element, ElementState, Playback, PlaybackConfig, SearchAlgorithm,
    SearchTrace, SortAlgorithm, SortTrace,
};
use clap::{Parser, Subcommand};
use rand::Rng;
use tracing_subscriber::EnvFilter;

fn main() -> algo_visualiser_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sort(args) => run_sort(args),
        Commands::Search(args) => run_search(args),
        Commands::List => {
            run_list();
            Ok(())
        }
    }
}

fn run_sort(args: SortArgs) -> algo_visualiser_core::Result<()> {
    let input = resolve_input(args.values, args.size);
    tracing::info!(
        algorithm = args.algorithm.name(),
        len = input.len(),
        "recording sort"
    );

    let steps = args.algorithm.record(&input);
    play_frames(steps.len(), playback_interval(args.speed), args.watch, |i| {
        let step = &steps[i];
        println!(
            "{:>4}  {}  c:{} s:{}",
            i,
            render_elements(&step.array),
            step.comparisons,
            step.swaps
        );
    });

    if let Some(last) = steps.last() {
        tracing::info!(
            steps = steps.len(),
            comparisons = last.comparisons,
            swaps = last.swaps,
            "sort complete"
        );
    }

    if let Some(path) = args.export {
        let trace = SortTrace {
            algorithm: args.algorithm.key().to_string(),
            input,
            steps,
        };
        write_trace(&path, &trace)?;
        tracing::info!(?path, "trace exported");
    }

    Ok(())
}

fn run_search(args: SearchArgs) -> algo_visualiser_core::Result<()> {
    let input = resolve_input(args.values, args.size);
    tracing::info!(
        algorithm = args.algorithm.name(),
        target = args.target,
        len = input.len(),
        requires_sorted = args.algorithm.requires_sorted(),
        "recording search"
    );

    let steps = args.algorithm.record(&input, args.target);
    play_frames(steps.len(), playback_interval(args.speed), args.watch, |i| {
        let step = &steps[i];
        println!(
            "{:>4}  {}  c:{}",
            i,
            render_elements(&step.array),
            step.comparisons
        );
    });

    if let Some(last) = steps.last() {
        match last.found_index {
            Some(index) => {
                tracing::info!(index, comparisons = last.comparisons, "target found")
            }
            None => tracing::info!(comparisons = last.comparisons, "target not found"),
        }
    }

    if let Some(path) = args.export {
        let trace = SearchTrace {
            algorithm: args.algorithm.key().to_string(),
            input,
            target: args.target,
            steps,
        };
        write_trace(&path, &trace)?;
        tracing::info!(?path, "trace exported");
    }

    Ok(())
}

fn run_list() {
    println!("Sorting algorithms:");
    for algorithm in SortAlgorithm::ALL {
        print_info(algorithm.info(), None);
    }
    println!("Searching algorithms:");
    for algorithm in SearchAlgorithm::ALL {
        print_info(algorithm.info(), Some(algorithm.requires_sorted()));
    }
}

fn print_info(info: &algo_visualiser_core::AlgorithmInfo, requires_sorted: Option<bool>) {
    let sorted_note = match requires_sorted {
        Some(true) => " (requires sorted input)",
        _ => "",
    };
    println!("  {} [{}]{}", info.name, info.key, sorted_note);
    println!(
        "      time: best {} / average {} / worst {}, space: {}",
        info.time_complexity.best,
        info.time_complexity.average,
        info.time_complexity.worst,
        info.space_complexity
    );
    println!("      {}", info.description);
}

/// Draws the first frame, then advances through the rest via the playback
/// controller. In watch mode each advance waits one frame interval, which
/// keeps all timing out here in the driver.
fn play_frames(count: usize, interval: Duration, watch: bool, mut draw: impl FnMut(usize)) {
    if count == 0 {
        return;
    }

    let mut playback = Playback::new(count);
    draw(playback.index());
    playback.play();
    while let Some(index) = playback.tick() {
        if watch {
            thread::sleep(interval);
        }
        draw(index);
    }
}

fn playback_interval(speed: u32) -> Duration {
    Duration::from_millis(PlaybackConfig { speed }.frame_interval_ms())
}

fn render_elements(elements: &[Element]) -> String {
    elements
        .iter()
        .map(render_element)
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_element(element: &Element) -> String {
    match element.state {
        ElementState::Default => format!(" {} ", element.value),
        ElementState::Comparing => format!("({})", element.value),
        ElementState::Swapping => format!("<{}>", element.value),
        ElementState::Sorted => format!("[{}]", element.value),
        ElementState::Pivot => format!("*{}*", element.value),
    }
}

fn resolve_input(values: Vec<i32>, size: Option<usize>) -> Vec<i32> {
    if !values.is_empty() {
        return values;
    }

    let mut config = ArrayConfig::default();
    if let Some(size) = size {
        config.size = size;
    }
    generate_random_array(&config)
}

fn generate_random_array(config: &ArrayConfig) -> Vec<i32> {
    let mut rng = rand::rng();
    (0..config.size)
        .map(|_| rng.random_range(config.min_value..=config.max_value))
        .collect()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Sorting and searching algorithm visualiser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Record and replay a sorting algorithm over the input values.
    Sort(SortArgs),
    /// Record and replay a searching algorithm over the input values.
    Search(SearchArgs),
    /// Print the algorithm catalog.
    List,
}

#[derive(clap::Args, Debug)]
struct SortArgs {
    /// Algorithm key, e.g. bubbleSort, quickSort, selectionSort.
    #[arg(short, long, default_value = "bubbleSort")]
    algorithm: SortAlgorithm,
    /// Values to sort; a random array is generated when omitted.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i32>,
    /// Size of the generated random array.
    #[arg(short, long, conflicts_with = "values")]
    size: Option<usize>,
    /// Animate the replay at the configured speed instead of dumping frames.
    #[arg(short, long)]
    watch: bool,
    /// Playback speed from 1 (slowest) to 10 (fastest).
    #[arg(long, default_value_t = 5)]
    speed: u32,
    /// Write the recorded trace to this path as JSON.
    #[arg(short, long)]
    export: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct SearchArgs {
    /// Algorithm key, e.g. linearSearch, binarySearch, jumpSearch.
    #[arg(short, long, default_value = "linearSearch")]
    algorithm: SearchAlgorithm,
    /// Value to search for.
    #[arg(short, long, allow_negative_numbers = true)]
    target: i32,
    /// Values to search; a random array is generated when omitted.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i32>,
    /// Size of the generated random array.
    #[arg(short, long, conflicts_with = "values")]
    size: Option<usize>,
    /// Animate the replay at the configured speed instead of dumping frames.
    #[arg(short, long)]
    watch: bool,
    /// Playback speed from 1 (slowest) to 10 (fastest).
    #[arg(long, default_value_t = 5)]
    speed: u32,
    /// Write the recorded trace to this path as JSON.
    #[arg(short, long)]
    export: Option<PathBuf>,
}
