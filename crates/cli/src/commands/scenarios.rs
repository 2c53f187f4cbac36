use std::path::PathBuf;

use anyhow::Result;
use battle_content::ContentFactory;
use clap::Parser;

/// List the scenarios of the data directory
#[derive(Parser)]
pub struct Scenarios {
    /// Custom data directory (defaults to BATTLE_DATA_DIR or ./data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Scenarios {
    pub fn execute(self) -> Result<()> {
        let config = super::runtime_config(self.data_dir)?;
        let factory = ContentFactory::new(&config.data_dir);

        let names = factory.scenario_names()?;
        if names.is_empty() {
            println!("No scenarios in {}", factory.data_dir().join("scenarios").display());
            return Ok(());
        }

        for name in names {
            let spec = factory.load_scenario(&name)?;
            println!(
                "{:<20} {:<28} {:<16} {} vs {} ships, {} squadrons",
                name,
                spec.name,
                spec.battle.to_string(),
                spec.friend.main.len() + spec.friend.escort.len(),
                spec.enemy.main.len() + spec.enemy.escort.len(),
                spec.squadrons.len()
            );
        }
        Ok(())
    }
}
