//! Run execution and chart export service.

use std::io;
use std::path::Path;

use px_results::{ChartManifest, ChartStore};
use px_sim::{ChartSink, Console, RunSummary, SimOptions, SimulationInterpreter, Terminal};
use tracing::info;

use crate::error::AppResult;
use crate::runtime_compile::compile_scenario;
use crate::scenario_service;
use crate::sinks::{ChartSummary, RecordingSink};

/// Request to execute a scenario.
pub struct RunRequest<'a> {
    pub scenario_path: &'a Path,
    pub options: SimOptions,
    /// Write every displayed chart here after the run.
    pub export_dir: Option<&'a Path>,
}

/// Response from a run execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub scenario: String,
    pub summary: RunSummary,
    pub chart_count: usize,
    /// Present when the request asked for an export.
    pub export: Option<ChartManifest>,
}

/// Load, compile and run a scenario against the given console and chart display.
///
/// Domain failures (rejected runs, failed events) are part of the transcript
/// and come back in [`RunResponse::summary`]. Errors are load, validation,
/// console or export failures.
pub fn run_scenario(
    request: &RunRequest,
    console: &mut dyn Console,
    display: &mut dyn ChartSink,
) -> AppResult<RunResponse> {
    let def = scenario_service::load_scenario(request.scenario_path)?;
    let scenario = compile_scenario(&def)?;
    let interpreter = SimulationInterpreter::new(scenario, request.options.clone());

    let mut recorder = RecordingSink::new(display);
    let summary = interpreter.run(console, &mut recorder)?;
    let records = recorder.into_records();

    info!(
        scenario = %def.name,
        events = summary.events.len(),
        completed = summary.completed_events(),
        charts = records.len(),
        "run finished"
    );

    let export = match request.export_dir {
        Some(dir) => {
            let store = ChartStore::new(dir.to_path_buf())?;
            store.clear()?;
            let manifest = ChartManifest::for_charts(def.name.clone(), &records);
            store.save(&manifest, &records)?;
            info!(dir = %dir.display(), charts = records.len(), "charts exported");
            Some(manifest)
        }
        None => None,
    };

    Ok(RunResponse {
        scenario: def.name,
        summary,
        chart_count: records.len(),
        export,
    })
}

/// Run on the process terminal: prompts and results on stdin/stdout, chart
/// summaries on stderr.
pub fn run_on_terminal(request: &RunRequest) -> AppResult<RunResponse> {
    let mut terminal = Terminal::new(io::stdin().lock(), io::stdout());
    let mut display = ChartSummary::new(io::stderr());
    run_scenario(request, &mut terminal, &mut display)
}
