//! Configuración del pipeline de segmentación

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SegmentationError};
use crate::types::{QUIESCENCE_SKIP, REPETITIONS, THRESHOLD_RANK};

/// Parámetros de todo el pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Repeticiones del gesto por grabación (default: 10)
    pub repetitions: usize,
    /// Posición en el eje `y` del acelerómetro ordenado que fija el umbral (default: 30)
    pub threshold_rank: usize,
    /// Detección de periodos sin cambio en la orientación
    pub quiescence: QuiescenceParams,
}

/// Parámetros del detector de reposo
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuiescenceParams {
    /// Diferencia máxima entre muestras consecutivas; 0.0 = igualdad exacta
    pub tolerance: f64,
    /// Muestras a saltar tras un reposo detectado (default: 3)
    pub skip: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            repetitions: REPETITIONS,
            threshold_rank: THRESHOLD_RANK,
            quiescence: QuiescenceParams::default(),
        }
    }
}

impl Default for QuiescenceParams {
    fn default() -> Self {
        Self {
            tolerance: 0.0,
            skip: QUIESCENCE_SKIP,
        }
    }
}

impl PipelineConfig {
    /// Carga la configuración desde un archivo JSON
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: PipelineConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(SegmentationError::Config(
                "repetitions must be greater than 0".to_string(),
            ));
        }
        if self.quiescence.skip == 0 {
            return Err(SegmentationError::Config(
                "quiescence skip must be greater than 0".to_string(),
            ));
        }
        if !self.quiescence.tolerance.is_finite() || self.quiescence.tolerance < 0.0 {
            return Err(SegmentationError::Config(format!(
                "quiescence tolerance must be a non-negative number, got {}",
                self.quiescence.tolerance
            )));
        }
        Ok(())
    }
}
