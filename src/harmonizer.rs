use crate::types::{ClassMap, TimeWindow, NUM_CLASSES};

/// Largo promedio (en muestras de `timestamps`) de las ventanas de una clase.
/// División entera; sin ventanas el promedio es 0.
pub fn group_average_length(groups: &[TimeWindow], timestamps: &[f64]) -> usize {
    if groups.is_empty() {
        return 0;
    }

    let total: usize = groups
        .iter()
        .map(|window| timestamps.iter().filter(|&&t| window.contains(t)).count())
        .sum();
    total / groups.len()
}

/// Largo común para las cinco clases: piso de la media de los promedios por clase
pub fn shared_length(per_class: &ClassMap<usize>) -> usize {
    per_class.values().sum::<usize>() / NUM_CLASSES
}

/// Recorta por la cola o rellena con 0.0 hasta `standard_length`
pub fn standardize_length(mut samples: Vec<f64>, standard_length: usize) -> Vec<f64> {
    samples.resize(standard_length, 0.0);
    samples
}
