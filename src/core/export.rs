use crate::errors::{AppError, AppResult};
use crate::models::CheckIn;
use crate::ui::messages::{info, success, warning};
use clap::ValueEnum;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flat CSV row; the photo payload is reduced to a flag.
#[derive(Serialize, Clone, Debug)]
pub struct CheckInRow {
    pub timestamp: String,
    pub drink: String,
    pub units: f64,
    pub notes: String,
    pub has_photo: bool,
}

impl From<&CheckIn> for CheckInRow {
    fn from(c: &CheckIn) -> Self {
        Self {
            timestamp: c.timestamp.to_rfc3339(),
            drink: c.drink_name.clone(),
            units: c.units,
            notes: c.notes.clone().unwrap_or_default(),
            has_photo: c.photo_data.is_some(),
        }
    }
}

/// Check whether a file may be created or overwritten.
///
/// - missing file → Ok
/// - existing file with `force` → Ok
/// - otherwise ask the user
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}

pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        check_ins: &[CheckIn],
        format: ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(file, force)?;

        if let Some(parent) = file.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        match format {
            ExportFormat::Json => export_json(check_ins, file)?,
            ExportFormat::Csv => export_csv(check_ins, file)?,
        }

        success(format!(
            "{} export completed: {} ({} check-ins)",
            format.as_str().to_uppercase(),
            file.display(),
            check_ins.len()
        ));
        Ok(())
    }
}

/// Same document shape as the stored record.
fn export_json(check_ins: &[CheckIn], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json = serde_json::to_string_pretty(check_ins)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

fn export_csv(check_ins: &[CheckIn], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for c in check_ins {
        wtr.serialize(CheckInRow::from(c))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}
