//! `frontdesk config init` and `frontdesk config show`

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use frontdesk_core::{
    config::{self, HotelConfig},
    RoomNumber,
};

/// Manage the hotel configuration file.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write the default configuration to ~/.frontdesk/config.yaml.
    Init(InitArgs),

    /// Print the effective hotel configuration.
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: ConfigSource,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

/// Where the hotel config comes from, plus command-line overrides.
#[derive(Args, Debug, Default)]
pub struct ConfigSource {
    /// Read the hotel config from this file instead of ~/.frontdesk/config.yaml.
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the hotel name.
    #[arg(long)]
    pub name: Option<String>,

    /// Replace the configured rooms (repeatable).
    #[arg(long = "room", value_name = "NUMBER")]
    pub rooms: Vec<i64>,
}

impl ConfigSource {
    /// Load the config file (or defaults) and apply the overrides.
    pub fn resolve(&self, home: &Path) -> Result<HotelConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from(path)
                .with_context(|| format!("failed to load config '{}'", path.display()))?,
            None => config::load_or_default_at(home)
                .context("failed to load ~/.frontdesk/config.yaml")?,
        };
        if let Some(name) = &self.name {
            cfg.name = name.clone();
        }
        if !self.rooms.is_empty() {
            cfg.rooms = self.rooms.iter().copied().map(RoomNumber).collect();
        }
        Ok(cfg)
    }
}

pub fn run(cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Init(args) => init(args),
        ConfigCommand::Show(args) => {
            let home = dirs::home_dir().context("could not determine home directory")?;
            show(&home, args)
        }
    }
}

fn init(args: InitArgs) -> Result<()> {
    let path = config::config_path().context("could not locate ~/.frontdesk/config.yaml")?;
    if path.exists() && !args.force {
        bail!(
            "config already exists at {}; pass --force to overwrite",
            path.display()
        );
    }
    let path = config::save(&HotelConfig::default())
        .with_context(|| format!("failed to write config to '{}'", path.display()))?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}

#[derive(Tabled)]
struct RoomRow {
    #[tabled(rename = "room")]
    room: i64,
}

fn show(home: &Path, args: ShowArgs) -> Result<()> {
    let cfg = args.source.resolve(home)?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&cfg).context("failed to serialize config JSON")?
        );
        return Ok(());
    }

    println!("{} | {} rooms", cfg.name.bold(), cfg.rooms.len());
    if cfg.rooms.is_empty() {
        println!("No rooms configured.");
        return Ok(());
    }
    let rows: Vec<RoomRow> = cfg.rooms.iter().map(|r| RoomRow { room: r.0 }).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    Ok(())
}
