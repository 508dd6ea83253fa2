use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

use hoopsim_core::{BasketSelector, CourtPosition, ShotAssessment, SimulationResult, Zone};

use crate::scenarios::ScenarioResult;

#[allow(clippy::cast_precision_loss)]
fn success_rate(passed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (passed as f64 / total as f64) * 100.0
}

pub fn generate_console_report<W: Write + ?Sized>(
    out: &mut W,
    results: &[ScenarioResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Shot Scenario Results".bright_cyan().bold())?;
    writeln!(out, "{}", "========================".cyan())?;

    let total_tests = results.len();
    let passed_tests = results.iter().filter(|r| r.passed).count();
    let failed_tests = total_tests - passed_tests;

    writeln!(out, "Total scenarios: {total_tests}")?;
    writeln!(out, "Passed: {}", passed_tests.to_string().green())?;
    writeln!(out, "Failed: {}", failed_tests.to_string().red())?;
    writeln!(
        out,
        "Success rate: {:.1}%",
        success_rate(passed_tests, total_tests)
    )?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };

        writeln!(
            out,
            "{status} {} (seed {})",
            result.scenario_name.bold(),
            result.seed
        )?;
        writeln!(
            out,
            "   Iterations: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "   Average time: {:?}", result.average_duration)?;

        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.as_str().red())?;
            }
        }
        writeln!(out)?;
    }

    let fastest = results.iter().min_by_key(|r| r.average_duration);
    let slowest = results.iter().max_by_key(|r| r.average_duration);
    if let (Some(fastest), Some(slowest)) = (fastest, slowest) {
        writeln!(out, "{}", "⚡ Performance Summary".bright_yellow().bold())?;
        writeln!(out, "{}", "=====================".yellow())?;
        writeln!(
            out,
            "Fastest: {} ({:?})",
            fastest.scenario_name.as_str().green(),
            fastest.average_duration
        )?;
        writeln!(
            out,
            "Slowest: {} ({:?})",
            slowest.scenario_name.as_str().yellow(),
            slowest.average_duration
        )?;
    }
    Ok(())
}

pub fn generate_json_report<W: Write + ?Sized>(out: &mut W, results: &[ScenarioResult]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(results)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write + ?Sized>(
    out: &mut W,
    results: &[ScenarioResult],
) -> Result<()> {
    writeln!(out, "# Hoopsim Scenario Results\n")?;

    let total_tests = results.len();
    let passed_tests = results.iter().filter(|r| r.passed).count();
    let failed_tests = total_tests - passed_tests;

    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total scenarios**: {total_tests}")?;
    writeln!(out, "- **Passed**: {passed_tests}")?;
    writeln!(out, "- **Failed**: {failed_tests}")?;
    writeln!(
        out,
        "- **Success rate**: {:.1}%\n",
        success_rate(passed_tests, total_tests)
    )?;

    writeln!(out, "## Detailed Results\n")?;

    for result in results {
        let status = if result.passed { "✅" } else { "❌" };

        writeln!(out, "### {status} {} (seed {})\n", result.scenario_name, result.seed)?;
        writeln!(
            out,
            "- **Iterations**: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "- **Average time**: {:?}", result.average_duration)?;

        if !result.failures.is_empty() {
            writeln!(out, "- **Failures**:")?;
            for failure in &result.failures {
                writeln!(out, "  - {failure}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn generate_csv_report<W: Write + ?Sized>(out: &mut W, results: &[ScenarioResult]) -> Result<()> {
    writeln!(
        out,
        "scenario,seed,passed,iterations_run,successful_iterations,average_ms"
    )?;
    for result in results {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            csv_field(&result.scenario_name),
            result.seed,
            result.passed,
            result.iterations_run,
            result.successful_iterations,
            result.average_duration.as_millis()
        )?;
    }
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// One placed shot, its assessment and the simulation run against it.
#[derive(Debug, Clone, Serialize)]
pub struct ShotReport {
    pub seed: u64,
    pub basket: BasketSelector,
    pub position: CourtPosition,
    pub assessment: ShotAssessment,
    pub result: SimulationResult,
}

impl ShotReport {
    const fn zone(&self) -> Zone {
        self.assessment.zone
    }
}

pub fn generate_shot_console_report<W: Write + ?Sized>(
    out: &mut W,
    report: &ShotReport,
) -> Result<()> {
    let assessment = &report.assessment;
    let result = &report.result;

    writeln!(out, "{}", "🏀 Shot Assessment".bright_cyan().bold())?;
    writeln!(out, "{}", "==================".cyan())?;
    writeln!(
        out,
        "Position: ({:.2}, {:.2}) ft, {} basket",
        report.position.x(),
        report.position.y(),
        report.basket
    )?;
    writeln!(out, "Zone: {}", report.zone().label().bold())?;
    writeln!(out, "Reference rate: {}", report.zone().reference_rate())?;
    writeln!(out, "Distance: {:.1} ft", assessment.distance_feet)?;
    writeln!(
        out,
        "Probability: {}",
        format!("{:.1}%", assessment.probability_percent).green()
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "{}",
        format!("🎯 Simulation ({} trials, seed {})", result.trial_count(), report.seed)
            .bright_yellow()
            .bold()
    )?;
    writeln!(out, "Made: {}", result.total_made().to_string().green())?;
    writeln!(out, "Missed: {}", result.total_missed().to_string().red())?;
    writeln!(out, "Accuracy: {:.1}%", result.accuracy_percent())?;
    Ok(())
}

pub fn generate_shot_json_report<W: Write + ?Sized>(out: &mut W, report: &ShotReport) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_shot_markdown_report<W: Write + ?Sized>(
    out: &mut W,
    report: &ShotReport,
) -> Result<()> {
    let assessment = &report.assessment;
    let result = &report.result;

    writeln!(out, "# Hoopsim Shot Report\n")?;
    writeln!(
        out,
        "- **Position**: ({:.2}, {:.2}) ft",
        report.position.x(),
        report.position.y()
    )?;
    writeln!(out, "- **Basket**: {}", report.basket)?;
    writeln!(out, "- **Zone**: {}", report.zone())?;
    writeln!(out, "- **Distance**: {:.1} ft", assessment.distance_feet)?;
    writeln!(out, "- **Probability**: {:.1}%", assessment.probability_percent)?;
    writeln!(out, "- **Seed**: {}\n", report.seed)?;

    writeln!(out, "## Simulation\n")?;
    writeln!(out, "| Shot | Outcome | Made | Missed | Percentage |")?;
    writeln!(out, "|-----:|---------|-----:|-------:|-----------:|")?;
    for trial in result.trials() {
        writeln!(
            out,
            "| {} | {:?} | {} | {} | {:.1}% |",
            trial.shot, trial.outcome, trial.made, trial.missed, trial.percentage
        )?;
    }
    writeln!(
        out,
        "\n**Accuracy**: {:.1}% ({} / {})",
        result.accuracy_percent(),
        result.total_made(),
        result.trial_count()
    )?;
    Ok(())
}

/// Progression feed for charting: one row per trial.
pub fn generate_shot_csv_report<W: Write + ?Sized>(
    out: &mut W,
    result: &SimulationResult,
) -> Result<()> {
    writeln!(out, "shot,made,missed,percentage")?;
    for trial in result.trials() {
        writeln!(
            out,
            "{},{},{},{:.1}",
            trial.shot, trial.made, trial.missed, trial.percentage
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoopsim_core::{ScriptedDraws, assess, run_trials};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample_result(passed: bool) -> ScenarioResult {
        ScenarioResult {
            scenario_name: "Left Corner Three".to_string(),
            seed: 42,
            passed,
            iterations_run: 2,
            successful_iterations: usize::from(passed) * 2,
            failures: if passed {
                Vec::new()
            } else {
                vec!["Iteration 1 (seed 42): expected Corner Three".to_string()]
            },
            average_duration: Duration::from_millis(3),
        }
    }

    fn sample_shot() -> ShotReport {
        let position = CourtPosition::new(25.0, 25.0).unwrap();
        let assessment = assess(position, BasketSelector::Left);
        let mut draws = ScriptedDraws::new([5.0, 99.0, 5.0]);
        let result = run_trials(assessment.probability_percent, 3, &mut draws).unwrap();
        ShotReport {
            seed: 7,
            basket: BasketSelector::Left,
            position,
            assessment,
            result,
        }
    }

    #[test]
    fn console_report_lists_each_result() {
        let text = render(|out| {
            generate_console_report(
                out,
                &[sample_result(true), sample_result(false)],
                Duration::from_millis(10),
            )
        });
        assert!(text.contains("Total scenarios: 2"));
        assert!(text.contains("Left Corner Three"));
        assert!(text.contains("expected Corner Three"));
        assert!(text.contains("Performance Summary"));
    }

    #[test]
    fn markdown_report_has_summary_and_details() {
        let text = render(|out| generate_markdown_report(out, &[sample_result(false)]));
        assert!(text.contains("# Hoopsim Scenario Results"));
        assert!(text.contains("- **Failed**: 1"));
        assert!(text.contains("  - Iteration 1"));
    }

    #[test]
    fn csv_report_quotes_fields_with_commas() {
        let mut result = sample_result(true);
        result.scenario_name = "Corner, Left".to_string();
        let text = render(|out| generate_csv_report(out, &[result]));
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("scenario,seed,passed,iterations_run,successful_iterations,average_ms")
        );
        assert_eq!(lines.next(), Some("\"Corner, Left\",42,true,2,2,3"));
    }

    #[test]
    fn shot_csv_is_the_progression_feed() {
        let report = sample_shot();
        let text = render(|out| generate_shot_csv_report(out, &report.result));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["shot,made,missed,percentage", "1,1,0,100.0", "2,1,1,50.0", "3,2,1,66.7"]
        );
    }

    #[test]
    fn shot_json_carries_zone_label() {
        let report = sample_shot();
        let text = render(|out| generate_shot_json_report(out, &report));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["assessment"]["zone"], "Long Mid-Range");
        assert_eq!(value["basket"], "left");
        assert_eq!(value["result"]["total_made"], 2);
    }

    #[test]
    fn shot_console_and_markdown_render() {
        let report = sample_shot();
        let console = render(|out| generate_shot_console_report(out, &report));
        assert!(console.contains("Long Mid-Range"));
        assert!(console.contains("Accuracy: 66.7%"));
        let markdown = render(|out| generate_shot_markdown_report(out, &report));
        assert!(markdown.contains("| 3 | Made | 2 | 1 | 66.7% |"));
    }
}
