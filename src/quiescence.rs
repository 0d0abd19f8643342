use crate::config::QuiescenceParams;
use crate::types::{Axis, SensorStream};

/// Extrae los periodos sin cambio en los tres ejes x, y, z.
///
/// Recorre `i` mientras `i < len - 3`; si la muestra `i + 1` es idéntica a la
/// `i` en los tres ejes se registra `timestamp[i]` y se saltan 3 muestras.
pub fn extract_nochange_periods(timestamp: &[f64], x: &[f64], y: &[f64], z: &[f64]) -> Vec<f64> {
    extract_nochange_periods_with(timestamp, x, y, z, &QuiescenceParams::default())
}

/// Variante configurable: tolerancia de comparación y tamaño del salto
pub fn extract_nochange_periods_with(
    timestamp: &[f64],
    x: &[f64],
    y: &[f64],
    z: &[f64],
    params: &QuiescenceParams,
) -> Vec<f64> {
    let len = timestamp.len().min(x.len()).min(y.len()).min(z.len());
    let skip = params.skip.max(1);
    let same = |a: f64, b: f64| {
        if params.tolerance == 0.0 {
            a == b
        } else {
            (a - b).abs() <= params.tolerance
        }
    };

    let mut periods = Vec::new();
    let mut i = 0;
    while i + skip < len {
        if same(x[i + 1], x[i]) && same(y[i + 1], y[i]) && same(z[i + 1], z[i]) {
            periods.push(timestamp[i]);
            i += skip;
        } else {
            i += 1;
        }
    }
    periods
}

/// Detecta los límites de reposo de una serie de orientación
pub fn detect(stream: &SensorStream, params: &QuiescenceParams) -> Vec<f64> {
    extract_nochange_periods_with(
        stream.timestamp(),
        stream.axis(Axis::X),
        stream.axis(Axis::Y),
        stream.axis(Axis::Z),
        params,
    )
}
