use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "settings-form")]
#[command(about = "Terminal settings form with debounced autosave")]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to the platform config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Quiet period after the last edit before autosave, in milliseconds
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Simulated backend latency per save, in milliseconds
    #[arg(long)]
    pub save_delay_ms: Option<u64>,

    /// Make every save fail
    #[arg(long)]
    pub fail_saves: bool,

    /// Where to write logs (defaults to settings-form.log in the config dir)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(AppConfig::config_path)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| AppConfig::config_dir().join("settings-form.log"))
    }

    /// Command-line flags win over the config file.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(debounce_ms) = self.debounce_ms {
            config.autosave.debounce_ms = debounce_ms;
        }
        if let Some(delay_ms) = self.save_delay_ms {
            config.backend.delay_ms = delay_ms;
        }
        if self.fail_saves {
            config.backend.fail_saves = true;
        }
    }
}
