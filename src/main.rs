#![forbid(unsafe_code)]
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use u_timetable::ga::{GaConfig, GenerationReport, SelectionStrategy};
use u_timetable::io::{load_catalog_dir, save_schedule};
use u_timetable::scheduler::TimetableScheduler;
use u_timetable::Result;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Clone the best schedule into every slot of the next generation
    Collapse,
    /// Elite retention, tournament selection and crossover
    Tournament,
}

impl From<Strategy> for SelectionStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Collapse => SelectionStrategy::ElitistCollapse,
            Strategy::Tournament => SelectionStrategy::Tournament,
        }
    }
}

#[derive(Debug, Parser)]
/// Weekly class timetable generator
struct App {
    /// Directory with groups.csv, teachers.csv, courses.csv and rooms.csv
    #[arg(long, default_value = "data")]
    data: PathBuf,

    /// Output CSV file
    #[arg(long, default_value = "output/schedule.csv")]
    output: PathBuf,

    /// TOML file with GA settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    population_size: Option<usize>,

    #[arg(long)]
    mutation_rate: Option<f64>,

    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    #[arg(long)]
    max_generations: Option<usize>,

    /// Teaching days per week, counted from Monday
    #[arg(long)]
    days_per_week: Option<u8>,

    /// Teaching slots per day
    #[arg(long)]
    slots_per_day: Option<u8>,
}

impl App {
    fn ga_config(&self) -> Result<GaConfig> {
        let mut config = match &self.config {
            Some(path) => GaConfig::from_toml_file(path)?,
            None => GaConfig::default(),
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(n) = self.population_size {
            config = config.with_population_size(n);
        }
        if let Some(rate) = self.mutation_rate {
            config = config.with_mutation_rate(rate);
        }
        if let Some(strategy) = self.strategy {
            config = config.with_strategy(strategy.into());
        }
        if let Some(n) = self.max_generations {
            config = config.with_max_generations(n);
        }
        if let Some(days) = self.days_per_week {
            config = config.with_days_per_week(days);
        }
        if let Some(slots) = self.slots_per_day {
            config = config.with_slots_per_day(slots);
        }
        Ok(config)
    }
}

fn print_history(history: &[GenerationReport]) {
    println!(
        "{:>10}  {:>10}  {:>10}  {:>10}",
        "Generation", "Fitness 1", "Fitness 2", "Fitness 3"
    );
    for report in history {
        let cells: Vec<String> = report
            .top_fitness
            .iter()
            .map(|f| format!("{f:>10.6}"))
            .collect();
        println!("{:>10}  {}", report.generation, cells.join("  "));
    }
}

fn run(app: &App) -> Result<()> {
    let catalog = load_catalog_dir(&app.data)?;
    let scheduler = TimetableScheduler::new(catalog, app.ga_config()?);

    let solution = scheduler.solve(&mut |report: &GenerationReport| {
        println!(
            "Generation {}: Best fitness = {}",
            report.generation,
            report.top_fitness.first().copied().unwrap_or(0.0)
        );
    })?;

    print_history(&solution.result.history);

    let kpi = &solution.kpi;
    info!(
        entries = kpi.entry_count,
        fitness = kpi.fitness,
        capacity_penalties = kpi.penalties.capacity,
        eligibility_penalties = kpi.penalties.eligibility,
        fragmentation_penalties = kpi.penalties.fragmentation,
        avg_room_utilization = kpi.avg_room_utilization,
        "final schedule"
    );

    save_schedule(solution.schedule(), &app.output)?;
    info!(path = %app.output.display(), "schedule written");
    Ok(())
}

fn main() -> ExitCode {
    let app = App::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(&app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("An error occurred: {err}");
            ExitCode::FAILURE
        }
    }
}
