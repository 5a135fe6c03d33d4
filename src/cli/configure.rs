use std::error::Error;

use crate::cli::exit_with_config_error;
use crate::core::config::data::path_display;
use crate::core::config::Config;

/// Fields given to `seek config`; `None` leaves the stored value alone.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConfigUpdate {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub base_url: Option<String>,
}

impl ConfigUpdate {
    pub fn apply(&self, config: &mut Config) {
        if let Some(api_key) = &self.api_key {
            config.api_key = api_key.trim().to_string();
        }
        if let Some(model) = &self.model {
            config.default_model = model.trim().to_string();
        }
        if let Some(temperature) = self.temperature {
            config.temperature = temperature;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.max_tokens = max_tokens;
        }
        if let Some(base_url) = &self.base_url {
            let base_url = base_url.trim();
            config.base_url = (!base_url.is_empty()).then(|| base_url.to_string());
        }
    }
}

pub fn parse_temperature(value: &str) -> Result<f64, String> {
    let temperature: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if (0.0..=2.0).contains(&temperature) {
        Ok(temperature)
    } else {
        Err(format!("temperature must be between 0.0 and 2.0, got {temperature}"))
    }
}

pub fn run_config(update: ConfigUpdate) -> Result<(), Box<dyn Error>> {
    let path = Config::get_config_path().unwrap_or_else(|e| exit_with_config_error(e));
    let mut config = Config::load_from_path(&path).unwrap_or_else(|e| exit_with_config_error(e));

    update.apply(&mut config);
    config.save_to_path(&path)?;

    println!("✅ Configuration updated: {}", path_display(&path));
    config.print_all();
    Ok(())
}
