use log::{debug, warn};

use crate::config::{PipelineConfig, QuiescenceParams};
use crate::error::{Result, SegmentationError};
use crate::quiescence;
use crate::types::{Axis, GestureGroup, GestureRecording, SensorStream, TimeWindow};

/// Extractor de ventanas gruesas: una por repetición del gesto.
///
/// Usa los periodos de reposo de la orientación como límites candidatos y
/// se queda con los pares de límites entre los que el eje `y` del
/// acelerómetro cae por debajo de un umbral.
#[derive(Debug, Clone)]
pub struct GestureExtractor {
    repetitions: usize,
    threshold_rank: usize,
    quiescence: QuiescenceParams,
}

impl GestureExtractor {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            repetitions: config.repetitions,
            threshold_rank: config.threshold_rank,
            quiescence: config.quiescence,
        }
    }

    /// Límites de repetición: timestamps de reposo de la orientación
    pub fn boundaries(&self, orientation: &SensorStream) -> Vec<f64> {
        quiescence::detect(orientation, &self.quiescence)
    }

    /// Umbral de amplitud sobre el eje vertical del acelerómetro
    pub fn threshold(&self, accelerometer: &SensorStream) -> Result<f64> {
        amplitude_threshold(accelerometer.axis(Axis::Y), self.threshold_rank)
    }

    /// Ejecuta detección de reposo + extracción y devuelve exactamente
    /// `repetitions` ventanas
    pub fn extract(&self, recording: &GestureRecording) -> Result<GestureGroup> {
        let boundaries = self.boundaries(&recording.orientation);
        let peak = self.threshold(&recording.accelerometer)?;
        debug!(
            "{} límites de reposo, umbral de acelerómetro {:.4}",
            boundaries.len(),
            peak
        );

        let candidates = candidate_windows(peak, &boundaries, &recording.accelerometer)?;
        fit_to_repetitions(candidates, self.repetitions)
    }
}

/// Valor en la posición `rank` (0-based) del eje ordenado ascendentemente
pub fn amplitude_threshold(vertical: &[f64], rank: usize) -> Result<f64> {
    if vertical.len() <= rank {
        return Err(SegmentationError::NotEnoughSamples {
            rank,
            actual: vertical.len(),
        });
    }

    let mut sorted = vertical.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    Ok(sorted[rank])
}

/// Acepta cada par consecutivo de límites que encierra al menos una muestra
/// de `y` estrictamente menor que `peak`
pub fn candidate_windows(peak: f64, boundaries: &[f64], accelerometer: &SensorStream) -> Result<GestureGroup> {
    let vertical = accelerometer.axis(Axis::Y);
    let mut groups = Vec::new();

    for pair in boundaries.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let starting_position = accelerometer.index_of(start)?;
        let ending_position = accelerometer.index_of(end)?;

        let has_motion = (starting_position..ending_position)
            .any(|idx| vertical[idx] < peak);
        if has_motion {
            groups.push(TimeWindow::new(start, end));
        }
    }

    Ok(groups)
}

/// Ajusta la lista a `repetitions` ventanas.
///
/// Si sobran se descartan las primeras; si faltan se duplica la ventana en
/// la posición `len - 2`, recalculada tras cada inserción.
pub fn fit_to_repetitions(mut groups: GestureGroup, repetitions: usize) -> Result<GestureGroup> {
    if groups.len() < repetitions && groups.len() < 2 {
        return Err(SegmentationError::InsufficientWindows { found: groups.len() });
    }

    if groups.len() > repetitions {
        let excess = groups.len() - repetitions;
        debug!("Descartando las primeras {} ventanas de {}", excess, groups.len());
        groups.drain(..excess);
    }

    if groups.len() < repetitions {
        warn!(
            "Solo {} ventanas detectadas, duplicando hasta {}",
            groups.len(),
            repetitions
        );
        while groups.len() < repetitions {
            let copy = groups[groups.len() - 2];
            groups.push(copy);
        }
    }

    Ok(groups)
}
