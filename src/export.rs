use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;

use crate::error::Result;
use crate::types::{Dataset, NUM_CLASSES};

/// Formato de salida del dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// Escribe el dataset como `[{"features": [...], "label": [...]}, ...]`
pub fn write_json(dataset: &Dataset, path: impl AsRef<Path>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, dataset)?;
    writer.flush()?;
    Ok(())
}

/// Una fila por ejemplo: f0..fN seguido de los cinco bits de la etiqueta
pub fn write_csv(dataset: &Dataset, path: impl AsRef<Path>) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;

    let feature_len = dataset.first().map(|e| e.features.len()).unwrap_or(0);
    let header: Vec<String> = (0..feature_len)
        .map(|i| format!("f{}", i))
        .chain((0..NUM_CLASSES).map(|i| format!("label{}", i)))
        .collect();
    writer.write_record(&header)?;

    for example in dataset {
        let row: Vec<String> = example
            .features
            .iter()
            .map(|v| v.to_string())
            .chain(example.label.iter().map(|bit| bit.to_string()))
            .collect();
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_dataset(dataset: &Dataset, path: impl AsRef<Path>, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Json => write_json(dataset, path),
        ExportFormat::Csv => write_csv(dataset, path),
    }
}
