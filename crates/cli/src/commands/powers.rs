use std::path::PathBuf;

use anyhow::Result;
use battle_content::ContentFactory;
use battle_core::{BattleEnv, HullCapability, PhaseContext, PowerAsDamage, PowerProfile};
use clap::Parser;

use super::OutputFormat;

/// Show every power category of each ship in a scenario
#[derive(Parser)]
pub struct Powers {
    /// Scenario file stem under `scenarios/` (e.g., night_skirmish)
    #[arg(value_name = "SCENARIO")]
    scenario: String,

    /// Custom data directory (defaults to BATTLE_DATA_DIR or ./data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Powers {
    pub fn execute(self) -> Result<()> {
        let config = super::runtime_config(self.data_dir)?;
        let factory = ContentFactory::new(&config.data_dir);

        let master = factory.load_master()?;
        let fallback = factory.load_config()?;
        let spec = factory.load_scenario(&self.scenario)?;
        let engagement = spec.build(&BattleEnv::with_master(&master), fallback)?;

        // Power only; the resolver is never consulted here.
        let ctx = PhaseContext::new(&engagement, spec.battle, &HullCapability, &PowerAsDamage);
        let rows: Vec<_> = engagement
            .participants()
            .map(|(index, ship)| {
                let profile = PowerProfile::of(ship, &ctx.power_context(index.side), &HullCapability);
                (index, ship, profile)
            })
            .collect();

        match self.format {
            OutputFormat::Json => {
                let json: Vec<_> = rows
                    .iter()
                    .map(|(index, ship, profile)| {
                        serde_json::json!({
                            "index": index,
                            "ship": ship.master.name,
                            "hull": ship.hull(),
                            "hp": ship.hp,
                            "power": profile,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            OutputFormat::Summary => {
                println!("{} ({})", spec.name, spec.battle);
                println!(
                    "{:<18} {:<20} {:<16} {:>7} {:>8} {:>8} {:>8} {:>5} {:>6} {:>5}",
                    "slot", "ship", "hull", "hp", "shelling", "aircraft", "torpedo", "asw",
                    "night", "air"
                );
                for (index, ship, profile) in &rows {
                    println!(
                        "{:<18} {:<20} {:<16} {:>7} {:>8} {:>8} {:>8} {:>5} {:>6} {:>5}",
                        index.to_string(),
                        ship.master.name,
                        ship.hull().as_ref(),
                        format!("{}/{}", ship.hp.current(), ship.hp.max()),
                        profile.shelling,
                        profile.aircraft,
                        profile.torpedo,
                        profile.anti_submarine,
                        profile.night,
                        profile.air_battle
                    );
                }
            }
        }
        Ok(())
    }
}
