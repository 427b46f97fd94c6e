use anyhow::{bail, Context, Result};
use std::env;

pub const DEFAULT_CURRENTS_API_URL: &str = "https://api.currentsapi.services/v1/latest-news";

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_PORT: u16 = 8000;

/// How generated text is rendered before it is returned to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Return completions exactly as the model produced them.
    Raw,
    /// Backslash-escape MarkdownV2 special characters in every field.
    MarkdownV2,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "raw" => Ok(OutputFormat::Raw),
            "markdown-v2" => Ok(OutputFormat::MarkdownV2),
            other => bail!("Unknown OUTPUT_FORMAT '{}' (expected 'raw' or 'markdown-v2')", other),
        }
    }
}

/// Process-wide configuration, read from the environment once at startup and
/// passed explicitly into the components that need it.
#[derive(Clone, Debug)]
pub struct Config {
    pub currents_api_key: String,
    pub currents_api_url: String,
    pub openai_api_key: String,
    pub openai_api_base: Option<String>,
    pub model: String,
    pub port: u16,
    pub output_format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let currents_api_key = env::var("CURRENTS_API_KEY")
            .context("CURRENTS_API_KEY environment variable required")?;
        let openai_api_key = env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY environment variable required")?;

        let currents_api_url =
            env::var("CURRENTS_API_URL").unwrap_or(DEFAULT_CURRENTS_API_URL.to_string());
        let openai_api_base = env::var("OPENAI_API_BASE").ok();
        let model = env::var("LLM_MODEL").unwrap_or(DEFAULT_MODEL.to_string());

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("Invalid PORT '{}'", value))?,
            Err(_) => DEFAULT_PORT,
        };

        let output_format = match env::var("OUTPUT_FORMAT") {
            Ok(value) => OutputFormat::parse(&value)?,
            Err(_) => OutputFormat::Raw,
        };

        Ok(Config {
            currents_api_key,
            currents_api_url,
            openai_api_key,
            openai_api_base,
            model,
            port,
            output_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parses_known_values() {
        assert_eq!(OutputFormat::parse("raw").unwrap(), OutputFormat::Raw);
        assert_eq!(
            OutputFormat::parse("markdown-v2").unwrap(),
            OutputFormat::MarkdownV2
        );
    }

    #[test]
    fn output_format_rejects_unknown_values() {
        assert!(OutputFormat::parse("html").is_err());
    }
}
