//! CSV export of the 2023 county table.
//!
//! Every cell is double-quoted, population carries thousands separators and
//! metric values are fixed to one decimal place. Rows are joined with `\n`
//! and the text has no trailing newline.

use crate::{
    county::CountyRecord,
    error::{HealthDataError, Result},
    formatting::{format_thousands, parse_thousands},
    metric::MetricKind,
};
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use serde::Serialize;
use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

pub const EXPORT_FILE_NAME: &str = "florida-health-data-2023.csv";

pub const EXPORT_HEADERS: [&str; 6] = [
    "County",
    "Population",
    "Maternal Mortality (2023)",
    "Low Birth Weight % (2023)",
    "Preterm Birth % (2023)",
    "Teen Birth Rate (2023)",
];

/// Metric columns in export order, following `County` and `Population`.
const METRIC_COLUMNS: [MetricKind; 4] = [
    MetricKind::MaternalMortality,
    MetricKind::LowBirthWeight,
    MetricKind::PretermBirth,
    MetricKind::TeenBirthRate,
];

/// Renders one row per record, in the order given.
pub fn export_csv(records: &[CountyRecord]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(EXPORT_HEADERS)?;
    for record in records {
        let mut cells = Vec::with_capacity(EXPORT_HEADERS.len());
        cells.push(record.name.to_string());
        cells.push(format_thousands(u64::from(record.population)));
        for metric in METRIC_COLUMNS {
            cells.push(format!("{:.1}", record.latest(metric)));
        }
        writer.write_record(&cells)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| HealthDataError::Io(io::Error::new(io::ErrorKind::Other, e.to_string())))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| HealthDataError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;

    Ok(text.trim_end_matches('\n').to_string())
}

/// Writes the export into `directory` as [`EXPORT_FILE_NAME`], creating the
/// directory if needed, and returns the file's path.
pub fn write_export(directory: &Path, records: &[CountyRecord]) -> Result<PathBuf> {
    let content = export_csv(records)?;
    fs::create_dir_all(directory)?;
    let path = directory.join(EXPORT_FILE_NAME);
    fs::write(&path, content)?;
    tracing::info!(path = %path.display(), rows = records.len(), "Exported county table");
    Ok(path)
}

/// A row read back from an export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub county: String,
    pub population: u32,
    pub maternal_mortality: f64,
    pub low_birth_weight: f64,
    pub preterm_birth: f64,
    pub teen_birth_rate: f64,
}

impl ExportRow {
    pub fn value(&self, metric: MetricKind) -> f64 {
        match metric {
            MetricKind::MaternalMortality => self.maternal_mortality,
            MetricKind::LowBirthWeight => self.low_birth_weight,
            MetricKind::PretermBirth => self.preterm_birth,
            MetricKind::TeenBirthRate => self.teen_birth_rate,
        }
    }
}

pub fn parse_export(text: &str) -> Result<Vec<ExportRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.iter().ne(EXPORT_HEADERS.iter().copied()) {
        return Err(HealthDataError::MalformedExport {
            row: 0,
            reason: format!("unexpected header {:?}", headers),
        });
    }

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row = index + 1;
        if record.len() != EXPORT_HEADERS.len() {
            return Err(HealthDataError::MalformedExport {
                row,
                reason: format!("expected {} columns, got {}", EXPORT_HEADERS.len(), record.len()),
            });
        }

        let population = parse_thousands(&record[1])
            .and_then(|p| u32::try_from(p).ok())
            .ok_or_else(|| HealthDataError::MalformedExport {
                row,
                reason: format!("invalid population {:?}", &record[1]),
            })?;

        let mut values = [0.0; 4];
        for (slot, cell) in values.iter_mut().zip(record.iter().skip(2)) {
            *slot = cell
                .trim()
                .parse::<f64>()
                .map_err(|e| HealthDataError::MalformedExport {
                    row,
                    reason: format!("invalid value {:?}: {}", cell, e),
                })?;
        }

        rows.push(ExportRow {
            county: record[0].to_string(),
            population,
            maternal_mortality: values[0],
            low_birth_weight: values[1],
            preterm_birth: values[2],
            teen_birth_rate: values[3],
        });
    }

    Ok(rows)
}
