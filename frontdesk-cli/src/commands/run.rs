//! `frontdesk run [--config PATH] [--name NAME] [--room N]...`

use std::io;

use anyhow::{Context, Result};
use clap::Args;

use frontdesk_core::HotelRegistry;

use super::config::ConfigSource;
use crate::desk::Desk;

/// Open the interactive front-desk menu on stdin/stdout.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: ConfigSource,
}

impl RunArgs {
    pub fn run(self) -> Result<()> {
        let home = dirs::home_dir().context("could not determine home directory")?;
        let cfg = self.source.resolve(&home)?;
        let registry = HotelRegistry::from_config(&cfg);
        tracing::info!(hotel = %cfg.name, rooms = cfg.rooms.len(), "front desk open");

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut desk = Desk::new(registry, stdin.lock(), stdout.lock());
        desk.run().context("front desk session failed")?;

        let (registry, _) = desk.into_parts();
        tracing::info!(
            reservations = registry.reservations().count(),
            available = registry.list_available_rooms().len(),
            "front desk closed"
        );
        Ok(())
    }
}
