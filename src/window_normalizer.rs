use log::debug;

use crate::error::{Result, SegmentationError};
use crate::types::{GestureGroup, TimeWindow};

/// Índice (en `timestamps`) del valor máximo dentro de la ventana.
///
/// Comparación estricta: ante empates gana el primer máximo. Las muestras NaN
/// no compiten por el pico.
pub fn peak_index(window: &TimeWindow, timestamps: &[f64], samples: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (j, (&t, &value)) in timestamps.iter().zip(samples).enumerate() {
        if !window.contains(t) || value.is_nan() {
            continue;
        }
        match best {
            None => best = Some((j, value)),
            Some((_, max)) if value > max => best = Some((j, value)),
            _ => {}
        }
    }

    best.map(|(j, _)| j)
}

/// Recentra cada ventana en su pico y la lleva a `expected_len` muestras:
/// `(timestamps[p - L/2], timestamps[p + L/2])`
pub fn normalize_groups(
    groups: &[TimeWindow],
    expected_len: usize,
    timestamps: &[f64],
    samples: &[f64],
) -> Result<GestureGroup> {
    if samples.len() != timestamps.len() {
        return Err(SegmentationError::MisalignedSamples {
            expected: timestamps.len(),
            actual: samples.len(),
        });
    }

    let half = expected_len / 2;
    let mut normalized = Vec::with_capacity(groups.len());

    for window in groups {
        let peak = peak_index(window, timestamps, samples).ok_or(SegmentationError::EmptyWindow {
            start: window.start,
            end: window.end,
        })?;

        if peak < half || peak + half >= timestamps.len() {
            return Err(SegmentationError::WindowOutOfBounds {
                peak_index: peak,
                half,
                len: timestamps.len(),
            });
        }

        let centered = TimeWindow::new(timestamps[peak - half], timestamps[peak + half]);
        debug!("Ventana {} -> {} (pico en {})", window, centered, peak);
        normalized.push(centered);
    }

    Ok(normalized)
}
