//! TOML configuration deserialisation for figure report jobs.

use serde::Deserialize;

/// Top-level job configuration.
#[derive(Debug, Deserialize)]
pub struct JobConfig {
    #[serde(default)]
    pub figure: Vec<FigureConfig>,
    #[serde(default)]
    pub output: OutputConfig,
}

/// A single figure entry.
///
/// Measurements are flattened next to `name` and `type`, e.g.
/// `{ name = "R1", type = "rectangle", a = 3, b = 5 }`.
#[derive(Debug, Deserialize)]
pub struct FigureConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub shape_type: String,
    #[serde(flatten)]
    pub params: toml::Value,
}

/// Output configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output directory (default: "./output").
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Whether to write the report lines to `report.txt` (default: false).
    #[serde(default)]
    pub save_report: bool,
    /// Whether to write results to `figures.json` (default: false).
    #[serde(default)]
    pub save_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            save_report: false,
            save_json: false,
        }
    }
}

fn default_output_dir() -> String {
    "./output".into()
}

/// Parse a TOML job configuration from a string.
pub fn parse_config(content: &str) -> anyhow::Result<JobConfig> {
    let config: JobConfig = toml::from_str(content)?;
    Ok(config)
}

/// Load and parse a TOML job configuration file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_figures_and_defaults() {
        let job = parse_config(
            r#"
            [[figure]]
            name = "S1"
            type = "square"
            a = 4

            [[figure]]
            name = "C1"
            type = "circle"
            r = 2.5
            "#,
        )
        .unwrap();

        assert_eq!(job.figure.len(), 2);
        assert_eq!(job.figure[0].name, "S1");
        assert_eq!(job.figure[0].shape_type, "square");
        assert_eq!(job.figure[0].params.get("a").and_then(|v| v.as_integer()), Some(4));
        assert_eq!(job.figure[1].params.get("r").and_then(|v| v.as_float()), Some(2.5));
        assert_eq!(job.output.directory, "./output");
        assert!(!job.output.save_report);
        assert!(!job.output.save_json);
    }

    #[test]
    fn test_parse_output_section() {
        let job = parse_config(
            r#"
            [output]
            directory = "out"
            save_json = true
            "#,
        )
        .unwrap();

        assert!(job.figure.is_empty());
        assert_eq!(job.output.directory, "out");
        assert!(job.output.save_json);
        assert!(!job.output.save_report);
    }

    #[test]
    fn test_missing_type_is_an_error() {
        let result = parse_config(
            r#"
            [[figure]]
            name = "S1"
            a = 4
            "#,
        );
        assert!(result.is_err());
    }
}
