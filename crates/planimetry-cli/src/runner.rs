//! Report runner: turns job entries into figures and writes their results.

use std::path::Path;

use anyhow::{Context, Result};

use planimetry_geometry::{Figure, FigureKind, FigureReport, Planar};

use crate::config::{FigureConfig, JobConfig};

/// Build every figure in the job, stopping at the first invalid entry.
pub fn build_figures(job: &JobConfig) -> Result<Vec<Figure>> {
    if job.figure.is_empty() {
        anyhow::bail!("No figures defined: add at least one [[figure]] table");
    }
    job.figure.iter().map(build_figure).collect()
}

/// Build a Figure from one `[[figure]]` table.
pub fn build_figure(cfg: &FigureConfig) -> Result<Figure> {
    let kind: FigureKind = cfg
        .shape_type
        .parse()
        .with_context(|| format!("Figure '{}'", cfg.name))?;

    let fields = kind.fields();
    let values = fields
        .iter()
        .map(|field| {
            extract_f64(&cfg.params, field).with_context(|| {
                format!(
                    "Figure '{}': {} requires '{}' (fields: {})",
                    cfg.name,
                    kind,
                    field,
                    fields.join(", ")
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if let Some(table) = cfg.params.as_table() {
        for key in table.keys().filter(|k| !fields.contains(&k.as_str())) {
            log::warn!("Figure '{}': ignoring unknown key '{}' for {}", cfg.name, key, kind);
        }
    }

    let figure = Figure::from_measurements(kind, cfg.name.clone(), &values)
        .with_context(|| format!("Figure '{}'", cfg.name))?;
    log::debug!(
        "Built {} '{}': area={}, perimeter={}",
        kind,
        figure.name(),
        figure.area(),
        figure.perimeter()
    );
    Ok(figure)
}

/// Read a number, accepting TOML integers as well as floats.
fn extract_f64(params: &toml::Value, key: &str) -> Option<f64> {
    let value = params.get(key)?;
    value
        .as_float()
        .or_else(|| value.as_integer().map(|i| i as f64))
}

/// Write the report lines to a text file, one figure per line.
pub fn write_report_text(figures: &[Figure], path: &Path) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Cannot create {}", path.display()))?;
    for figure in figures {
        writeln!(file, "{}", figure)?;
    }

    log::info!("Report written to: {}", path.display());
    Ok(())
}

/// Write computed results to a JSON file.
pub fn write_report_json(figures: &[Figure], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let reports: Vec<FigureReport> = figures.iter().map(FigureReport::from).collect();
    let json = serde_json::to_string_pretty(&reports)
        .map_err(|e| anyhow::anyhow!("JSON serialisation error: {}", e))?;
    std::fs::write(path, json)?;

    log::info!("Report (JSON) written to: {}", path.display());
    Ok(())
}
