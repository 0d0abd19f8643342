//! Argumentos de línea de comandos y ejecución del binario

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use crate::config::PipelineConfig;
use crate::csv_loader::load_recordings;
use crate::export::{write_dataset, ExportFormat};
use crate::pipeline::DatasetBuilder;
use crate::types::{Axis, FeatureSensor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => ExportFormat::Json,
            Format::Csv => ExportFormat::Csv,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gesture-dataset", author, version, about, long_about = None)]
pub struct Args {
    /// Directorio con una carpeta por gesto
    pub data_dir: PathBuf,

    /// Sensor de origen de las features (gyroscope, accelerometer)
    #[arg(short, long, default_value = "gyroscope")]
    pub sensor: FeatureSensor,

    /// Eje único (x, y, z); sin este flag se concatenan los tres
    #[arg(short, long)]
    pub axis: Option<Axis>,

    /// Formato de salida
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: Format,

    /// Archivo de salida
    #[arg(short, long)]
    pub output: PathBuf,

    /// Configuración del pipeline (JSON)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Habilitar salida de depuración
    #[arg(short, long)]
    pub debug: bool,
}

/// Carga las grabaciones, arma el dataset y lo escribe en `args.output`
pub fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            info!("Cargando configuración desde {:?}", path);
            PipelineConfig::from_file(path).with_context(|| format!("Configuración inválida en {:?}", path))?
        }
        None => PipelineConfig::default(),
    };

    let recordings = load_recordings(&args.data_dir)?;
    let builder = DatasetBuilder::new(&recordings, config)?;
    let dataset = builder.process(args.sensor, args.axis)?;

    let feature_len = dataset.first().map(|e| e.features.len()).unwrap_or(0);
    info!(
        "{} ejemplos de {} features cada uno -> {:?}",
        dataset.len(),
        feature_len,
        args.output
    );

    write_dataset(&dataset, &args.output, args.format.into())
        .with_context(|| format!("No se pudo escribir {:?}", args.output))?;

    Ok(())
}
