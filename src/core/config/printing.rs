use crate::core::config::data::Config;

/// Show only the last four characters of a secret.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.is_empty() {
        return "(unset)".to_string();
    }
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), tail)
}

impl Config {
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("  api-key: {}", mask_secret(self.api_key.trim())),
            format!("  model: {}", self.default_model),
            format!("  temperature: {}", self.temperature),
            format!("  max-tokens: {}", self.max_tokens),
            format!("  base-url: {}", self.base_url()),
        ]
    }

    pub fn print_all(&self) {
        println!("Current configuration:");
        for line in self.summary_lines() {
            println!("{line}");
        }
    }
}
