//! End-to-end interpreter runs against in-memory console buffers.

use std::io::Cursor;

use px_sim::{
    ChartLog, EventKind, EventOutcome, Force, PhysicalObject, Run, RunStatus, RunSummary,
    Scenario, SimOptions, SimulationInterpreter, Terminal,
};

fn drop_scenario(events: &[&str], runs: &[&str]) -> Scenario {
    Scenario::new(
        "drop_test",
        vec![
            PhysicalObject::new("ground", 0.0, 0.0, 0.0),
            PhysicalObject::new("ball", 1.0, 0.0, 20.0).with_velocity(5.0, 0.0),
        ],
        vec![Force::new("gravity", 9.81, "down")],
        events.iter().map(|e| EventKind::parse(e)).collect(),
        runs.iter().map(|r| Run::new(*r)).collect(),
    )
}

fn run_with(scenario: Scenario, input: &str, options: SimOptions) -> (RunSummary, String, ChartLog) {
    let interpreter = SimulationInterpreter::new(scenario, options);
    let mut terminal = Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut charts = ChartLog::new();
    let summary = interpreter
        .run(&mut terminal, &mut charts)
        .expect("in-memory console never fails");
    let output = String::from_utf8(terminal.into_output()).expect("utf8 transcript");
    (summary, output, charts)
}

fn run(scenario: Scenario, input: &str) -> (RunSummary, String, ChartLog) {
    run_with(scenario, input, SimOptions::default())
}

#[test]
fn free_fall_reference_transcript() {
    let (summary, output, charts) = run(drop_scenario(&["free_fall"], &["drop_test"]), "no\n");

    let expected = "Running Simulation:\n\
Object ground (mass=0.0, position=(0.0, 0.0))\n\
Object ball (mass=1.0, position=(0.0, 20.0))\n\
Force gravity (magnitude=9.81, direction=down)\n\
Event: free_fall\n\
Running event: free_fall\n\
ball takes 2.0192751 seconds to reach the ground.\n\
The final speed of ball is 19.8090888 m/s.\n\
Are you looking for ball's position? (yes/no): ";
    assert_eq!(output, expected);

    assert!(summary.is_completed());
    assert_eq!(summary.completed_events(), 1);
    assert_eq!(charts.titles(), vec!["Height vs Time", "Speed vs Time"]);
    assert_eq!(charts.charts()[0].point_count(), 202);
    assert_eq!(charts.charts()[0].series[0].points[0], (0.0, 20.0));
}

#[test]
fn free_fall_position_query() {
    let (_, output, _) = run(drop_scenario(&["free_fall"], &["drop_test"]), "YES\n1\n");
    assert!(output.contains("At what time? (in seconds): "));
    assert!(output.contains("Height of ball: 15.0950000 meters at 1.0000000 seconds.\n"));
}

#[test]
fn free_fall_out_of_range_keeps_default_height() {
    let (summary, output, charts) =
        run(drop_scenario(&["free_fall"], &["drop_test"]), "y\n5\n");
    assert!(output.contains("Time must be between 0 and the total fall time.\n"));
    assert!(output.contains("Height of ball: 0.0000000 meters at 5.0000000 seconds.\n"));
    // The refinement failure does not abort the event.
    assert_eq!(summary.completed_events(), 1);
    assert_eq!(charts.charts().len(), 2);
}

#[test]
fn free_fall_unreadable_time_reports_defaults() {
    let (_, output, _) = run(drop_scenario(&["free_fall"], &["drop_test"]), "y\nsoon\n");
    assert!(output.contains("Invalid time value: 'soon'\n"));
    assert!(output.contains("Height of ball: 0.0000000 meters at 0.0000000 seconds.\n"));
}

#[test]
fn empty_run_list_executes_nothing() {
    let (summary, output, charts) = run(drop_scenario(&["free_fall"], &[]), "");
    assert_eq!(
        output,
        "Error: No 'run' command found. Simulation cannot execute.\n"
    );
    assert!(matches!(summary.status, RunStatus::Rejected { .. }));
    assert!(summary.events.is_empty());
    assert!(charts.charts().is_empty());
}

#[test]
fn only_first_run_entry_is_checked() {
    let (summary, output, charts) =
        run(drop_scenario(&["free_fall"], &["other", "drop_test"]), "");
    assert_eq!(output, "Error: Simulation with that name not found.\n");
    assert!(!output.contains("Running Simulation:"));
    assert!(summary.events.is_empty());
    assert!(charts.charts().is_empty());
}

#[test]
fn unsupported_event_does_not_stop_later_events() {
    let (summary, output, charts) = run(
        drop_scenario(&["levitate", "throwing_up"], &["drop_test"]),
        "",
    );
    assert!(output.contains("Event: levitate\n"));
    assert!(output.contains("Event 'levitate' is not supported or does not exist.\n"));
    assert!(output.contains("Running event: throwing_up\n"));
    assert!(output.contains("Maximum height: 20.0000000 meters\n"));

    assert_eq!(summary.events.len(), 2);
    assert_eq!(summary.events[0].outcome, EventOutcome::Unsupported);
    assert_eq!(summary.events[1].outcome, EventOutcome::Completed);
    assert_eq!(charts.titles(), vec!["Vertical Position vs Time"]);
}

#[test]
fn missing_gravity_aborts_only_that_event() {
    let scenario = Scenario::new(
        "weightless",
        vec![PhysicalObject::new("probe", 1.0, 0.0, 10.0).with_launch(5.0, 0.5)],
        vec![Force::new("wind", 2.0, "east")],
        vec![EventKind::FreeFall, EventKind::Throwing, EventKind::ThrowingAngle],
        vec![Run::new("weightless")],
    );
    let (summary, output, charts) = run(scenario, "");

    assert!(output.contains("Could not find gravity force or falling object.\n"));
    assert!(output.contains("Could not find gravity force or throwing object.\n"));
    assert!(output.contains("Could not find gravity force.\n"));
    assert_eq!(summary.events.len(), 3);
    assert!(
        summary
            .events
            .iter()
            .all(|e| matches!(e.outcome, EventOutcome::Failed { .. }))
    );
    assert!(charts.charts().is_empty());
}

#[test]
fn ground_only_scenario_has_no_subject() {
    let scenario = Scenario::new(
        "empty_field",
        vec![PhysicalObject::new("Floor", 0.0, 0.0, 0.0)],
        vec![Force::new("gravity", 9.81, "down")],
        vec![EventKind::ThrowingAngle, EventKind::ThrowingUp],
        vec![Run::new("empty_field")],
    );
    let (summary, output, _) = run(scenario, "");
    assert!(output.contains("Could not find throwing object.\n"));
    assert!(output.contains("Could not find gravity force or throwing object.\n"));
    assert_eq!(summary.completed_events(), 0);
}

#[test]
fn throwing_refinements() {
    let scenario = Scenario::new(
        "cliff_throw",
        vec![
            PhysicalObject::new("floor", 0.0, 0.0, 0.0),
            PhysicalObject::new("stone", 0.5, 0.0, 45.0).with_velocity(12.0, 0.0),
        ],
        vec![Force::new("Gravity", 9.81, "down")],
        vec![EventKind::Throwing],
        vec![Run::new("cliff_throw")],
    );
    let (summary, output, charts) = run(scenario, "yes\n2\ny\n2\nyes\n2\n");

    assert!(output.contains("Total time of flight: 3.0289127 seconds\n"));
    assert!(output.contains(
        "Horinzontal Displacement before hitting the ground is 36.34695 meters\n"
    ));
    assert!(output.contains("Final velocity is 32.04528 m/s\n"));
    assert!(output.contains("X(2.0) = 24.0 meters \n"));
    assert!(output.contains("Vy(2.0) = 19.62 m/s\n"));
    assert!(output.contains("Y(2.0) = 19.62 meters\n"));

    assert_eq!(summary.completed_events(), 1);
    assert_eq!(charts.charts().len(), 5);
    assert!(charts.charts().iter().all(|c| c.point_count() == 303));
}

#[test]
fn throwing_tiny_displacement_keeps_significant_digits() {
    let scenario = Scenario::new(
        "nudge",
        vec![PhysicalObject::new("grain", 1e-6, 0.0, 1e-4).with_velocity(5e-6, 0.0)],
        vec![Force::new("gravity", 9.81, "down")],
        vec![EventKind::Throwing],
        vec![Run::new("nudge")],
    );
    let (_, output, _) = run(scenario, "");

    assert!(output.contains("Total time of flight: 0.0045152 seconds\n"));
    assert!(output.contains(
        "Horinzontal Displacement before hitting the ground is 2.257618e-08 meters\n"
    ));
    assert!(output.contains("Final velocity is 0.04429447 m/s\n"));
}

#[test]
fn throwing_skips_declined_and_unreadable_refinements() {
    let scenario = drop_scenario(&["throwing"], &["drop_test"]);
    let (summary, output, _) = run(scenario, "no\nyes\nlater\nn\n");
    assert!(!output.contains("X("));
    assert!(output.contains("Invalid time value: 'later'\n"));
    assert!(!output.contains("Vy("));
    assert!(!output.contains("Y("));
    assert_eq!(summary.completed_events(), 1);
}

#[test]
fn throwing_angle_requires_launch_inputs() {
    let scenario = drop_scenario(&["throwing_angle", "free_fall"], &["drop_test"]);
    let (summary, output, _) = run(scenario, "n\n");
    assert!(output.contains(
        "Error: For a throwing angle event, the initial velocity (v_initial) and launch angle (theta) must be provided.\n"
    ));
    assert!(output.contains("ball takes 2.0192751 seconds to reach the ground.\n"));
    assert_eq!(summary.completed_events(), 1);
}

#[test]
fn throwing_angle_reports_without_charts() {
    let scenario = Scenario::new(
        "cannon",
        vec![
            PhysicalObject::new("ground", 0.0, 0.0, 0.0),
            PhysicalObject::new("shell", 4.0, 0.0, 10.0)
                .with_launch(30.0, std::f64::consts::FRAC_PI_4),
        ],
        vec![Force::new("gravity", 9.81, "down")],
        vec![EventKind::ThrowingAngle],
        vec![Run::new("cannon")],
    );
    let (summary, output, charts) = run(scenario, "");
    assert!(output.contains("Total time of flight: 4.7536868 seconds\n"));
    assert!(output.contains("Maximum Height: 22.9357798 meters\n"));
    assert!(output.contains("Horizontal Distance: 100.8409254 meters\n"));
    assert_eq!(summary.completed_events(), 1);
    assert!(charts.charts().is_empty());
}

#[test]
fn non_interactive_mode_never_prompts() {
    let options = SimOptions {
        interactive: false,
        ..SimOptions::default()
    };
    let (summary, output, charts) = run_with(
        drop_scenario(&["free_fall", "throwing"], &["drop_test"]),
        "yes\n1\n",
        options,
    );
    assert!(!output.contains("(yes/no)"));
    assert!(!output.contains("At what time?"));
    assert_eq!(summary.completed_events(), 2);
    assert_eq!(charts.charts().len(), 7);
}

#[test]
fn vanishing_gravity_skips_oversized_charts() {
    let scenario = Scenario::new(
        "drift",
        vec![PhysicalObject::new("feather", 0.01, 0.0, 20.0)],
        vec![Force::new("gravity", 1e-300, "down")],
        vec![EventKind::FreeFall],
        vec![Run::new("drift")],
    );
    let (summary, _, charts) = run(scenario, "no\n");

    assert_eq!(summary.completed_events(), 1);
    assert_eq!(charts.charts().len(), 2);
    assert!(charts.charts().iter().all(|c| c.point_count() == 0));
}
