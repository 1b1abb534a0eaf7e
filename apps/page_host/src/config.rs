use std::{fs, path::Path};

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub autoplay_interval_ms: u64,
    pub submission_delay_ms: u64,
    pub scroll_threshold: f64,
    pub stagger_step_ms: u64,
    pub idle_shutdown_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 5000,
            submission_delay_ms: 2000,
            scroll_threshold: 50.0,
            stagger_step_ms: 100,
            idle_shutdown_ms: 1500,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    autoplay_interval_ms: Option<u64>,
    submission_delay_ms: Option<u64>,
    scroll_threshold: Option<f64>,
    stagger_step_ms: Option<u64>,
    idle_shutdown_ms: Option<u64>,
}

pub fn load_settings(config_path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();

    let path = config_path.unwrap_or_else(|| Path::new("page_host.toml"));
    if let Ok(raw) = fs::read_to_string(path) {
        apply_file(&mut settings, &raw);
    }

    override_u64("PAGE__AUTOPLAY_INTERVAL_MS", &mut settings.autoplay_interval_ms);
    override_u64("PAGE__SUBMISSION_DELAY_MS", &mut settings.submission_delay_ms);
    override_f64("PAGE__SCROLL_THRESHOLD", &mut settings.scroll_threshold);
    override_u64("PAGE__STAGGER_STEP_MS", &mut settings.stagger_step_ms);
    override_u64("PAGE__IDLE_SHUTDOWN_MS", &mut settings.idle_shutdown_ms);

    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<FileSettings>(raw) {
        if let Some(v) = file_cfg.autoplay_interval_ms {
            settings.autoplay_interval_ms = v;
        }
        if let Some(v) = file_cfg.submission_delay_ms {
            settings.submission_delay_ms = v;
        }
        if let Some(v) = file_cfg.scroll_threshold {
            settings.scroll_threshold = v;
        }
        if let Some(v) = file_cfg.stagger_step_ms {
            settings.stagger_step_ms = v;
        }
        if let Some(v) = file_cfg.idle_shutdown_ms {
            settings.idle_shutdown_ms = v;
        }
    }
}

fn override_u64(key: &str, target: &mut u64) {
    if let Ok(v) = std::env::var(key) {
        if let Ok(parsed) = v.parse::<u64>() {
            *target = parsed;
        }
    }
}

fn override_f64(key: &str, target: &mut f64) {
    if let Ok(v) = std::env::var(key) {
        if let Ok(parsed) = v.parse::<f64>() {
            *target = parsed;
        }
    }
}
