//! Output configuration for the command line tool and batch processing
//!
//! The library always works in radians and milligauss. [`OutputConfig`] controls how results
//! are presented to users: the angle and strength units, the number of decimals, and whether
//! invalid rows in a batch are skipped. Configurations can be stored as JSON, YAML, or TOML.
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::MagneticField;

/// Unit for declination and inclination
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}
impl AngleUnit {
    /// Express an angle given in radians in this unit
    pub fn express(&self, radians: f64) -> f64 {
        match self {
            AngleUnit::Degrees => radians.to_degrees(),
            AngleUnit::Radians => radians,
        }
    }
}
impl Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::Degrees => write!(f, "deg"),
            AngleUnit::Radians => write!(f, "rad"),
        }
    }
}

/// Unit for total field strength
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StrengthUnit {
    Milligauss,
    Gauss,
    #[default]
    Nanotesla,
}
impl StrengthUnit {
    /// Express the strength of `field` in this unit
    pub fn express(&self, field: &MagneticField) -> f64 {
        match self {
            StrengthUnit::Milligauss => field.strength,
            StrengthUnit::Gauss => field.strength_gauss(),
            StrengthUnit::Nanotesla => field.strength_nanotesla(),
        }
    }
}
impl Display for StrengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthUnit::Milligauss => write!(f, "mG"),
            StrengthUnit::Gauss => write!(f, "G"),
            StrengthUnit::Nanotesla => write!(f, "nT"),
        }
    }
}

fn default_precision() -> usize {
    4
}

/// Presentation settings for lookup results
///
/// # Example
/// ```rust
/// use geomag::config::{AngleUnit, OutputConfig, StrengthUnit};
/// let config = OutputConfig {
///     angle_unit: AngleUnit::Radians,
///     strength_unit: StrengthUnit::Gauss,
///     precision: 6,
///     skip_invalid: true,
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Unit for declination and inclination
    #[serde(default)]
    pub angle_unit: AngleUnit,
    /// Unit for total field strength
    #[serde(default)]
    pub strength_unit: StrengthUnit,
    /// Number of decimals when printing
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Skip batch rows with non-finite coordinates instead of failing the batch
    #[serde(default)]
    pub skip_invalid: bool,
}
impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            angle_unit: AngleUnit::default(),
            strength_unit: StrengthUnit::default(),
            precision: default_precision(),
            skip_invalid: false,
        }
    }
}
impl OutputConfig {
    /// Format a field for display using the configured units and precision
    pub fn format_field(&self, field: &MagneticField) -> String {
        let p = self.precision;
        format!(
            "declination: {:.p$} {unit}, inclination: {:.p$} {unit}, strength: {:.p$} {}",
            self.angle_unit.express(field.declination),
            self.angle_unit.express(field.inclination),
            self.strength_unit.express(field),
            self.strength_unit,
            unit = self.angle_unit,
        )
    }
    /// Write the configuration to a JSON file (pretty-printed).
    pub fn to_json<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self).map_err(io::Error::other)
    }
    /// Read the configuration from a JSON file.
    pub fn from_json<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        serde_json::from_reader(file).map_err(io::Error::other)
    }
    /// Write the configuration as YAML.
    pub fn to_yaml<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut file = File::create(path)?;
        let s = serde_yaml::to_string(self).map_err(io::Error::other)?;
        file.write_all(s.as_bytes())
    }
    /// Read the configuration from YAML.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        serde_yaml::from_reader(file).map_err(io::Error::other)
    }
    /// Write the configuration as TOML.
    pub fn to_toml<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut file = File::create(path)?;
        let s = toml::to_string(self).map_err(io::Error::other)?;
        file.write_all(s.as_bytes())
    }
    /// Read the configuration from TOML.
    pub fn from_toml<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let mut s = String::new();
        let mut file = File::open(path)?;
        file.read_to_string(&mut s)?;
        toml::from_str(&s).map_err(io::Error::other)
    }
    /// Generic write: choose format by file extension (.json/.yaml/.yml/.toml)
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let p = path.as_ref();
        match ConfigFormat::from_path(p)? {
            ConfigFormat::Json => self.to_json(p),
            ConfigFormat::Yaml => self.to_yaml(p),
            ConfigFormat::Toml => self.to_toml(p),
        }
    }
    /// Generic read: choose format by file extension (.json/.yaml/.yml/.toml)
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let p = path.as_ref();
        match ConfigFormat::from_path(p)? {
            ConfigFormat::Json => Self::from_json(p),
            ConfigFormat::Yaml => Self::from_yaml(p),
            ConfigFormat::Toml => Self::from_toml(p),
        }
    }
}

/// Serialization format of a configuration file, selected by extension
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}
impl ConfigFormat {
    /// Format for `path`, matching the extension case-insensitively.
    ///
    /// Fails with [`io::ErrorKind::InvalidInput`] when the extension is missing or unknown.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase());
        match extension.as_deref() {
            Some("json") => Ok(ConfigFormat::Json),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unsupported configuration file extension: {}", path.display()),
            )),
        }
    }
}
