use std::path::PathBuf;

use anyhow::Result;
use battle_core::Side;
use battle_runtime::{BatchEvaluator, BattleReport};
use clap::Parser;

use super::OutputFormat;

/// Resolve scenarios through the full phase pipeline
#[derive(Parser)]
pub struct Simulate {
    /// Scenario file stems to run (all scenarios when omitted)
    #[arg(value_name = "SCENARIO")]
    scenarios: Vec<String>,

    /// Custom data directory (defaults to BATTLE_DATA_DIR or ./data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Base seed for damage rolls (overrides BATTLE_SEED)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Battles resolved at once (overrides BATTLE_WORKERS)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Print every strike, not just the totals
    #[arg(short, long)]
    verbose: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Simulate {
    pub async fn execute(self) -> Result<()> {
        let mut config = super::runtime_config(self.data_dir)?;
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(workers) = self.workers {
            config = config.with_workers(workers);
        }

        let evaluator = BatchEvaluator::from_content(config)?;
        let jobs = evaluator.load_jobs(&self.scenarios)?;
        tracing::info!(battles = jobs.len(), "Evaluating scenarios");

        let reports = evaluator.evaluate(jobs).await?;

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
            OutputFormat::Summary => {
                for report in &reports {
                    print_report(report, self.verbose);
                }
                let metrics = evaluator.metrics();
                println!(
                    "{} battles, {} strikes, average {:?}",
                    metrics.resolved(),
                    metrics.strikes(),
                    metrics.average_time().unwrap_or_default()
                );
            }
        }
        Ok(())
    }
}

fn print_report(report: &BattleReport, verbose: bool) {
    println!(
        "#{} {} ({}, seed {:#018x})",
        report.index, report.name, report.outcome.descriptor, report.seed
    );
    if verbose {
        for event in report.outcome.events() {
            println!(
                "  {:<18} {:<14} -> {:<14} {:?} power {} dealt {} (hp {})",
                event.phase.as_ref(),
                event.attacker.to_string(),
                event.defender.to_string(),
                event.kind,
                event.power,
                event.damage,
                event.hp_after
            );
        }
    }
    for side in [Side::Friend, Side::Enemy] {
        println!(
            "  {:<6} took {:>4} damage, {} afloat",
            side.as_ref(),
            report.damage_taken(side),
            report.survivors(side)
        );
    }
}
