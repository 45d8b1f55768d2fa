use clap::{Parser, Subcommand};
use px_app::{AppResult, RunRequest, query, run_service, scenario_service};
use px_sim::{ForceRole, ObjectRole, SimOptions};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "px-cli")]
#[command(about = "Physix CLI - closed-form kinematics scenarios", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax, structure and run declaration
    Validate {
        /// Path to the scenario file (YAML or JSON)
        scenario_path: PathBuf,
    },
    /// Show the entities, events and runs of a scenario
    Show {
        /// Path to the scenario file (YAML or JSON)
        scenario_path: PathBuf,
    },
    /// Run a scenario interactively
    Run {
        /// Path to the scenario file (YAML or JSON)
        scenario_path: PathBuf,
        /// Write the produced charts to this directory
        #[arg(long)]
        export: Option<PathBuf>,
        /// Answer "no" to every prompt
        #[arg(long)]
        no_prompt: bool,
        /// Chart sampling step in seconds
        #[arg(long, default_value_t = px_sim::DEFAULT_STEP)]
        step: f64,
    },
    /// List the charts of an export
    Charts {
        /// Export directory
        export_dir: PathBuf,
    },
    /// Export one chart's series as CSV
    ExportSeries {
        /// Export directory
        export_dir: PathBuf,
        /// Chart index (see `charts`)
        index: usize,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Logs go to stderr; stdout carries the run transcript.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Show { scenario_path } => cmd_show(&scenario_path),
        Commands::Run {
            scenario_path,
            export,
            no_prompt,
            step,
        } => cmd_run(&scenario_path, export.as_deref(), !no_prompt, step),
        Commands::Charts { export_dir } => cmd_charts(&export_dir),
        Commands::ExportSeries {
            export_dir,
            index,
            output,
        } => cmd_export_series(&export_dir, index, output.as_deref()),
    }
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = scenario_service::load_scenario(scenario_path)?;
    scenario_service::validate_scenario(&scenario)?;
    println!("✓ Scenario is valid");
    Ok(())
}

fn cmd_show(scenario_path: &Path) -> AppResult<()> {
    let scenario = scenario_service::load_scenario(scenario_path)?;
    let summary = scenario_service::summarize(&scenario)?;

    println!("Scenario: {}", summary.name);

    println!("Objects:");
    for object in &summary.objects {
        let role = match object.role {
            ObjectRole::Subject => "subject",
            ObjectRole::Ground => "ground",
        };
        println!("  {} ({})", object.name, role);
    }

    println!("Forces:");
    for force in &summary.forces {
        let role = match force.role {
            ForceRole::Gravity => "gravity",
            ForceRole::Other => "other",
        };
        println!("  {} - {} ({})", force.name, force.magnitude, role);
    }

    println!("Events:");
    for event in &summary.events {
        if event.supported {
            println!("  {}", event.name);
        } else {
            println!("  {} (unsupported)", event.name);
        }
    }

    println!("Runs:");
    for run in &summary.runs {
        println!("  {}", run);
    }

    println!(
        "Subject: {}",
        summary.subject.as_deref().unwrap_or("(none)")
    );
    println!(
        "Gravity: {}",
        summary.gravity.as_deref().unwrap_or("(none)")
    );
    match &summary.run_error {
        None => println!("✓ Run declaration accepted"),
        Some(reason) => println!("✗ {}", reason),
    }
    Ok(())
}

fn cmd_run(
    scenario_path: &Path,
    export_dir: Option<&Path>,
    interactive: bool,
    sample_step: f64,
) -> AppResult<()> {
    let request = RunRequest {
        scenario_path,
        options: SimOptions {
            sample_step,
            interactive,
        },
        export_dir,
    };

    info!(scenario = %scenario_path.display(), interactive, sample_step, "starting run");
    let response = run_service::run_on_terminal(&request)?;
    info!(
        scenario = %response.scenario,
        completed = response.summary.completed_events(),
        charts = response.chart_count,
        "run complete"
    );

    if let (Some(dir), Some(manifest)) = (export_dir, &response.export) {
        println!(
            "✓ Exported {} charts to {}",
            manifest.charts.len(),
            dir.display()
        );
    }
    Ok(())
}

fn cmd_charts(export_dir: &Path) -> AppResult<()> {
    let manifest = query::list_charts(export_dir)?;

    println!("Scenario: {}", manifest.scenario);
    println!("Exported: {}", manifest.timestamp);
    if manifest.charts.is_empty() {
        println!("No charts in export");
    } else {
        for chart in &manifest.charts {
            println!(
                "  [{}] {} ({} series, {} points)",
                chart.index, chart.title, chart.series_count, chart.point_count
            );
        }
    }
    Ok(())
}

fn cmd_export_series(export_dir: &Path, index: usize, output: Option<&Path>) -> AppResult<()> {
    let csv = query::chart_csv(export_dir, index)?;

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported to {}", path.display());
    } else {
        print!("{}", csv);
    }
    Ok(())
}
