//! Runtime configuration for the command-line evaluator.
//!
//! Settings are layered: a TOML file from the project `config/` directory
//! (`local.toml` when present, otherwise `default.toml`), then environment
//! variables prefixed with `PHASECOMP_`, then command-line overrides.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::material::Material;
use crate::sellmeier::Sellmeier;
use crate::thermal::ROOM_TEMPERATURE;


/// Runtime configuration for the evaluator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub material: Material,
    /// Wavelengths in micrometres.
    pub wavelengths: Vec<f64>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Propagation length at room temperature, in micrometres.
    pub reference_length: f64,
    #[serde(default)]
    pub json: bool,
}

fn default_temperature() -> f64 {
    ROOM_TEMPERATURE
}

/// Loads `config/default.toml` alone, without environment or CLI overrides.
pub fn load_default_config() -> Result<Settings> {
    let root = retrieve_project_root()?;
    let default_config_file = root.join("config/default.toml");

    let settings: Config = Config::builder()
        .add_source(File::from(default_config_file).required(true))
        .build()
        .context("Error loading configuration")?;

    let config: Settings = settings
        .try_deserialize()
        .context("Error deserializing configuration")?;

    validate_config(&config)?;

    Ok(config)
}

/// Loads the full configuration stack and applies command-line arguments.
pub fn load_config() -> Result<Settings> {
    let root = retrieve_project_root()?;

    let default_config_file = root.join("config/default.toml");
    let local_config = root.join("config/local.toml");

    let config_file = if local_config.exists() {
        log::info!("Using local configuration: {:?}", local_config);
        local_config
    } else {
        log::info!("Using default configuration: {:?}", default_config_file);
        default_config_file
    };

    let settings: Config = Config::builder()
        .add_source(File::from(config_file).required(true))
        .add_source(Environment::with_prefix("phasecomp"))
        .build()
        .context("Error loading configuration")?;

    let mut config: Settings = settings
        .try_deserialize()
        .context("Error deserializing configuration")?;

    let args = CliArgs::parse();
    apply_overrides(&mut config, &args)?;

    validate_config(&config)?;

    log::debug!("{:#?}", config);

    Ok(config)
}

/// Applies command-line values on top of loaded settings.
pub fn apply_overrides(config: &mut Settings, args: &CliArgs) -> Result<()> {
    if let Some(wavelengths) = &args.w {
        config.wavelengths = wavelengths.clone();
    }
    if let Some(temperature) = args.t {
        config.temperature = temperature;
    }
    if let Some(length) = args.l {
        config.reference_length = length;
    }
    if let Some(alphas) = &args.alphas {
        config.material.alphas = Sellmeier::try_from(alphas.as_slice())?;
    }
    if let Some(dn_dt) = args.dn_dt {
        config.material.dn_dt = dn_dt;
    }
    if let Some(expansion) = args.expansion {
        config.material.expansion = expansion;
    }
    if let Some(name) = &args.name {
        config.material.name = name.clone();
    }
    if args.json {
        config.json = true;
    }
    Ok(())
}

/// Retrieve the project root directory.
/// This function tries to find the project root directory in different ways:
/// 1. If the CARGO_MANIFEST_DIR environment variable is set, use it.
/// 2. If the PHASECOMP_ROOT_DIR environment variable is set, use it.
/// 3. If the "config" subdirectory is found in the executable directory or any of its parents, use it.
fn retrieve_project_root() -> Result<PathBuf> {
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        return Ok(PathBuf::from(manifest_dir));
    }
    if let Ok(path) = env::var("PHASECOMP_ROOT_DIR") {
        return Ok(PathBuf::from(path));
    }

    let exe_path = env::current_exe().context("Failed to get current executable path")?;
    let mut current_dir = exe_path
        .parent()
        .ok_or_else(|| anyhow!("Failed to get executable directory"))?
        .to_path_buf();

    loop {
        if current_dir.join("config").is_dir() {
            return Ok(current_dir);
        }
        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return Err(anyhow!("Could not find project root directory")),
        }
    }
}

fn validate_config(config: &Settings) -> Result<()> {
    if config.wavelengths.is_empty() {
        return Err(anyhow!("At least one wavelength is required"));
    }
    if let Some(w) = config
        .wavelengths
        .iter()
        .find(|w| !(w.is_finite() && **w > 0.0))
    {
        return Err(anyhow!("Wavelength must be greater than 0, got {}", w));
    }
    if !config.temperature.is_finite() {
        return Err(anyhow!("Temperature must be finite, got {}", config.temperature));
    }
    if !config.reference_length.is_finite() {
        return Err(anyhow!(
            "Reference length must be finite, got {}",
            config.reference_length
        ));
    }
    Ok(())
}

#[derive(Parser, Debug)]
#[command(version, about = "phasecomp - Sellmeier index, propagation phase and thermal expansion")]
pub struct CliArgs {
    /// Wavelengths in micrometres, separated by spaces.
    #[arg(short, long, num_args = 1.., value_delimiter = ' ')]
    w: Option<Vec<f64>>,

    /// Temperature in degrees Celsius.
    #[arg(short, long, allow_negative_numbers = true)]
    t: Option<f64>,

    /// Propagation length at room temperature, in micrometres.
    #[arg(short, long)]
    l: Option<f64>,

    /// Material name used in the report.
    #[arg(long)]
    name: Option<String>,

    /// The four Sellmeier coefficients A B C D, separated by spaces.
    #[arg(long, num_args = 1.., value_delimiter = ' ', allow_negative_numbers = true)]
    alphas: Option<Vec<f64>>,

    /// Thermo-optic coefficient dn/dT (per degree).
    #[arg(long, allow_negative_numbers = true)]
    dn_dt: Option<f64>,

    /// Linear thermal expansion coefficient (per degree).
    #[arg(long, allow_negative_numbers = true)]
    expansion: Option<f64>,

    /// Print the evaluation as JSON.
    #[arg(long)]
    json: bool,
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings:
  - Material: {}
  - Sellmeier Coefficients: {:?}
  - dn/dT: {:.6e}
  - Thermal Expansion: {:.6e}
  - Wavelengths: {:?}
  - Temperature: {:.3}
  - Reference Length: {:.6}
  ",
            self.material.name,
            self.material.alphas.alphas(),
            self.material.dn_dt,
            self.material.expansion,
            self.wavelengths,
            self.temperature,
            self.reference_length,
        )
    }
}
