mod reports;
mod scenarios;
mod seeds;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::Instant;

use hoopsim_core::{BasketSelector, CourtPosition, SessionConfig, ShotSession};
use reports::ShotReport;
use scenarios::{ScenarioResult, ScenarioRunner, all_scenario_keys, get_scenario, list_scenarios};
use seeds::{DEFAULT_SEED, resolve_seed_inputs, split_csv};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestMode {
    /// Run named court spots through fresh sessions and check invariants
    Scenarios,
    /// Assess and simulate a single shot
    Shot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BasketArg {
    Left,
    Right,
}

impl From<BasketArg> for BasketSelector {
    fn from(value: BasketArg) -> Self {
        match value {
            BasketArg::Left => Self::Left,
            BasketArg::Right => Self::Right,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "hoopsim-tester", version = "0.1.0")]
#[command(about = "Scenario runner and shot simulator for the hoopsim shot engine")]
struct Args {
    /// Test mode: scenario sweeps or a single shot
    #[arg(long, value_enum, default_value_t = TestMode::Scenarios)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, `all` for every spot)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated integers, `0x` hex, or `random`)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Shot x in court feet (shot mode)
    #[arg(long, allow_negative_numbers = true)]
    x: Option<f64>,

    /// Shot y in court feet (shot mode)
    #[arg(long, allow_negative_numbers = true)]
    y: Option<f64>,

    /// Shot x in canvas pixels (shot mode)
    #[arg(long, allow_negative_numbers = true)]
    canvas_x: Option<f64>,

    /// Shot y in canvas pixels (shot mode)
    #[arg(long, allow_negative_numbers = true)]
    canvas_y: Option<f64>,

    /// Target basket (shot mode)
    #[arg(long, value_enum, default_value_t = BasketArg::Left)]
    basket: BasketArg,

    /// Trial count; clamped to the configured range, zero or absent uses the default
    #[arg(long, allow_negative_numbers = true)]
    trials: Option<i64>,

    /// Session configuration JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console", "csv"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    if args.report == "console" {
        announce_banner();
    }

    let start_time = Instant::now();
    let config = load_config(args.config.as_deref())?;
    let seeds = resolve_seed_inputs(&split_csv(&args.seeds))?;

    match args.mode {
        TestMode::Scenarios => {
            let names = expand_scenarios(&args.scenarios);
            let results = run_scenarios(&args, &config, &names, &seeds);
            write_reports(&args, &results, start_time)?;
            if results.iter().any(|r| !r.passed) {
                std::process::exit(1);
            }
        }
        TestMode::Shot => {
            let seed = seeds.first().copied().unwrap_or(DEFAULT_SEED);
            let report = run_shot(&args, config, seed)?;
            write_shot_report(&args, &report)?;
        }
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:25} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🏀 Hoopsim Shot Tester".bright_cyan().bold());
    println!("{}", "======================".cyan());
}

fn load_config(path: Option<&Path>) -> Result<SessionConfig> {
    let Some(path) = path else {
        return Ok(SessionConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = SessionConfig::from_json(&raw)
        .with_context(|| format!("invalid session config in {}", path.display()))?;
    log::debug!("loaded session config from {}", path.display());
    Ok(config)
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s.eq_ignore_ascii_case("all")) {
        scenarios.retain(|s| !s.eq_ignore_ascii_case("all"));
        for key in all_scenario_keys() {
            if !scenarios.contains(&key) {
                scenarios.push(key);
            }
        }
    }
    scenarios
}

fn run_scenarios(
    args: &Args,
    config: &SessionConfig,
    scenarios: &[String],
    seeds: &[u64],
) -> Vec<ScenarioResult> {
    if args.report == "console" {
        println!("{}", "🧠 Running Shot Scenarios".bright_yellow().bold());
        println!("{}", "-".repeat(30).yellow());
    }

    let runner = ScenarioRunner::new(config.clone(), args.verbose);
    let mut results = Vec::new();
    for scenario_name in scenarios {
        if let Some(scenario) = get_scenario(scenario_name) {
            results.extend(runner.run_scenario(scenario, seeds, args.iterations));
        } else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.as_str().yellow());
        }
    }
    results
}

fn resolve_shot_position(args: &Args, session: &ShotSession) -> Result<CourtPosition> {
    match (args.x, args.y, args.canvas_x, args.canvas_y) {
        (Some(x), Some(y), _, _) => Ok(CourtPosition::new(x, y)?),
        (None, None, Some(px), Some(py)) => Ok(session.scale().to_court(px, py)?),
        _ => bail!("shot mode needs both --x and --y, or both --canvas-x and --canvas-y"),
    }
}

fn run_shot(args: &Args, config: SessionConfig, seed: u64) -> Result<ShotReport> {
    let mut session = ShotSession::new(SessionConfig {
        seed: Some(seed),
        ..config
    })
    .context("building session")?;

    let basket = BasketSelector::from(args.basket);
    session.select_basket(basket);
    let position = resolve_shot_position(args, &session)?;
    let assessment = session.place_or_move_shot(position);
    let result = session
        .request_simulation(args.trials)?
        .cloned()
        .context("simulation unavailable after placing a shot")?;

    Ok(ShotReport {
        seed,
        basket,
        position,
        assessment,
        result,
    })
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut output_target, results)?,
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Hoopsim Scenario Results\n\n_No scenarios executed._"
                )?;
            } else {
                reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        "csv" => reports::generate_csv_report(&mut output_target, results)?,
        _ => {
            let duration = start_time.elapsed();
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                reports::generate_console_report(&mut output_target, results, duration)?;
            }
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {duration:?}")?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

fn write_shot_report(args: &Args, report: &ShotReport) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report.as_str() {
        "json" => reports::generate_shot_json_report(&mut output_target, report)?,
        "markdown" => reports::generate_shot_markdown_report(&mut output_target, report)?,
        "csv" => reports::generate_shot_csv_report(&mut output_target, &report.result)?,
        _ => reports::generate_shot_console_report(&mut output_target, report)?,
    }
    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
