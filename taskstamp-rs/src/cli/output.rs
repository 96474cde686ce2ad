//! Output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::error::Result;
use serde::Serialize;

/// Helper for formatting and printing output.
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Whether results should be rendered as human-readable text.
    pub fn is_text(&self) -> bool {
        self.format == OutputFormat::Text
    }

    /// Print a serializable value in the configured structured format.
    ///
    /// Text mode falls back to pretty JSON; callers render text themselves.
    pub fn print<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", self.render(value)?);
        Ok(())
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let rendered = match self.format {
            OutputFormat::Json | OutputFormat::Text => serde_json::to_string_pretty(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
            OutputFormat::Toml => toml::to_string_pretty(value)?,
        };
        Ok(rendered)
    }

    /// Print raw text (not serialized).
    pub fn print_raw(&self, text: &str) {
        println!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Sample {
        total: usize,
        name: String,
    }

    fn sample() -> Sample {
        Sample {
            total: 2,
            name: "inbox".to_string(),
        }
    }

    #[test]
    fn test_render_formats() {
        let json = Output::new(OutputFormat::Json).render(&sample()).unwrap();
        assert!(json.contains("\"total\": 2"));

        let yaml = Output::new(OutputFormat::Yaml).render(&sample()).unwrap();
        assert!(yaml.contains("name: inbox"));

        let toml = Output::new(OutputFormat::Toml).render(&sample()).unwrap();
        assert!(toml.contains("total = 2"));
    }

    #[test]
    fn test_is_text() {
        assert!(Output::new(OutputFormat::Text).is_text());
        assert!(!Output::new(OutputFormat::Json).is_text());
    }
}
