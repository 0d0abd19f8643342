use std::mem;

use crate::error::{Result, SegmentationError};
use crate::harmonizer::standardize_length;
use crate::types::{index_of, ClassMap, Dataset, GestureClass, LabeledExample, TimeWindow};

/// Recorta las muestras de cada ventana usando sus índices en `timestamps`
pub fn get_data_by_groups(groups: &[TimeWindow], samples: &[f64], timestamps: &[f64]) -> Result<Vec<Vec<f64>>> {
    let mut chosen = Vec::with_capacity(groups.len());

    for window in groups {
        let start = index_of(timestamps, window.start, "recording")?;
        let end = index_of(timestamps, window.end, "recording")?;
        if end > samples.len() {
            return Err(SegmentationError::MisalignedSamples {
                expected: timestamps.len(),
                actual: samples.len(),
            });
        }

        // un rango invertido produce una secuencia vacía
        let slice = if start < end { &samples[start..end] } else { &[][..] };
        chosen.push(slice.to_vec());
    }

    Ok(chosen)
}

/// Intercala las clases por repetición (forward, backward, left, right, enter)
/// y ajusta cada secuencia a `standard_length`
pub fn assemble(mut chosen: ClassMap<Vec<Vec<f64>>>, standard_length: usize) -> Dataset {
    let repetitions = chosen.values().map(Vec::len).min().unwrap_or(0);
    let mut dataset = Vec::with_capacity(repetitions * GestureClass::ALL.len());

    for i in 0..repetitions {
        for class in GestureClass::ALL {
            let samples = mem::take(&mut chosen[class][i]);
            dataset.push(LabeledExample {
                features: standardize_length(samples, standard_length),
                label: class.one_hot(),
            });
        }
    }

    dataset
}

/// Concatena x ++ y ++ z para cada posición, conservando la etiqueta común
pub fn fuse_axes(data_x: Dataset, data_y: Dataset, data_z: Dataset) -> Result<Dataset> {
    if data_x.len() != data_y.len() || data_x.len() != data_z.len() {
        return Err(SegmentationError::AxisMismatch {
            index: data_x.len().min(data_y.len()).min(data_z.len()),
        });
    }

    data_x
        .into_iter()
        .zip(data_y)
        .zip(data_z)
        .enumerate()
        .map(|(index, ((x, y), z))| {
            if x.label != y.label || x.label != z.label {
                return Err(SegmentationError::AxisMismatch { index });
            }

            let mut features = x.features;
            features.extend(y.features);
            features.extend(z.features);
            Ok(LabeledExample { features, label: x.label })
        })
        .collect()
}
