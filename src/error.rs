//! Tipos de error del pipeline de segmentación.

use std::fmt;

use thiserror::Error;

use crate::types::{GestureClass, SensorKind};

/// Etapa del pipeline en la que falló una clase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    WindowExtraction,
    Normalization,
    Slicing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::WindowExtraction => "window extraction",
            Stage::Normalization => "window normalization",
            Stage::Slicing => "sample slicing",
        })
    }
}

#[derive(Error, Debug)]
pub enum SegmentationError {
    #[error("Malformed {sensor} stream: timestamp={timestamps}, x={x}, y={y}, z={z}")]
    MalformedStream {
        sensor: SensorKind,
        timestamps: usize,
        x: usize,
        y: usize,
        z: usize,
    },

    #[error("Not enough samples to rank the accelerometer threshold: need more than {rank}, got {actual}")]
    NotEnoughSamples { rank: usize, actual: usize },

    #[error("Only {found} candidate windows detected, at least 2 are required")]
    InsufficientWindows { found: usize },

    #[error("Timestamp {timestamp} not found in the {axis} timestamp axis")]
    TimestampNotFound { timestamp: f64, axis: &'static str },

    #[error("Window [{start}, {end}) contains no samples")]
    EmptyWindow { start: f64, end: f64 },

    #[error("Centered window around index {peak_index} (half width {half}) falls outside a stream of {len} samples")]
    WindowOutOfBounds { peak_index: usize, half: usize, len: usize },

    #[error("Invalid sample count: expected {expected} aligned with timestamps, got {actual}")]
    MisalignedSamples { expected: usize, actual: usize },

    #[error("Axis datasets disagree at example {index}")]
    AxisMismatch { index: usize },

    #[error("Gesture '{class}' failed during {stage}: {source}")]
    Stage {
        class: GestureClass,
        stage: Stage,
        #[source]
        source: Box<SegmentationError>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl SegmentationError {
    /// Envuelve el error con la clase y etapa donde ocurrió
    pub fn at(self, class: GestureClass, stage: Stage) -> Self {
        SegmentationError::Stage {
            class,
            stage,
            source: Box::new(self),
        }
    }

    /// Error original, sin el contexto de clase/etapa
    pub fn root(&self) -> &SegmentationError {
        match self {
            SegmentationError::Stage { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Alias de Result con el error del crate
pub type Result<T> = std::result::Result<T, SegmentationError>;
