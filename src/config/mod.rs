use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Startup constants for the calculator and its input bounds.
/// Loaded once from a YAML file; nothing reloads mid-run and the
/// calculation core never reads this struct directly.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: f64,
    #[serde(default = "default_working_days")]
    pub working_days: f64,
    #[serde(default = "default_min_week_hours")]
    pub min_week_hours: f64,
    #[serde(default = "default_max_week_hours")]
    pub max_week_hours: f64,
    #[serde(default = "default_warning_trigger_hours")]
    pub warning_trigger_hours: f64,
    #[serde(default = "default_max_meetings")]
    pub max_meetings: u32,
    #[serde(default = "default_max_switch_cost")]
    pub max_switch_cost_mins: f64,
    #[serde(default = "default_rounding")]
    pub rounding: u32,
}

fn default_hours_per_day() -> f64 {
    8.0
}
fn default_working_days() -> f64 {
    5.0
}
fn default_min_week_hours() -> f64 {
    30.0
}
fn default_max_week_hours() -> f64 {
    80.0
}
fn default_warning_trigger_hours() -> f64 {
    50.0
}
fn default_max_meetings() -> u32 {
    50
}
fn default_max_switch_cost() -> f64 {
    30.0
}
fn default_rounding() -> u32 {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hours_per_day: default_hours_per_day(),
            working_days: default_working_days(),
            min_week_hours: default_min_week_hours(),
            max_week_hours: default_max_week_hours(),
            warning_trigger_hours: default_warning_trigger_hours(),
            max_meetings: default_max_meetings(),
            max_switch_cost_mins: default_max_switch_cost(),
            rounding: default_rounding(),
        }
    }
}

impl Config {
    /// Standard working week implied by the configured rhythm.
    pub fn standard_week_hours(&self) -> f64 {
        self.working_days * self.hours_per_day
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("deepweek")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".deepweek")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("deepweek.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration directory and file
    pub fn init_all(is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(())
    }
}
