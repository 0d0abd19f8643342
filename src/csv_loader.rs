use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, ensure, Context, Result};
use csv::{ReaderBuilder, StringRecord};
use log::{debug, warn};

use crate::types::{ClassMap, GestureClass, GestureRecording, SensorKind, SensorStream};

/// Prefijos de archivo por sensor: `<prefijo>-<epoch>.csv`
pub const ORIENTATION_PREFIX: &str = "orientation";
pub const ACCELEROMETER_PREFIX: &str = "accelerometer";
pub const GYROSCOPE_PREFIX: &str = "gyro";

/// Carga una serie desde un CSV con columnas timestamp,x,y,z (se buscan por
/// nombre; columnas adicionales como `w` se ignoran)
pub fn load_stream_from_csv(path: impl AsRef<Path>, kind: SensorKind) -> Result<SensorStream> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("No se pudo abrir el CSV {:?}", path))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Encabezado inválido en {:?}", path))?
        .clone();
    let ts_col = column(&headers, "timestamp", path)?;
    let x_col = column(&headers, "x", path)?;
    let y_col = column(&headers, "y", path)?;
    let z_col = column(&headers, "z", path)?;

    let mut timestamp = Vec::new();
    let (mut x, mut y, mut z) = (Vec::new(), Vec::new(), Vec::new());

    for (row_idx, result) in reader.records().enumerate() {
        let record =
            result.with_context(|| format!("Fila {} inválida en {:?}", row_idx + 1, path))?;

        timestamp.push(parse_field(&record, ts_col, "timestamp", row_idx)?);
        x.push(parse_field(&record, x_col, "x", row_idx)?);
        y.push(parse_field(&record, y_col, "y", row_idx)?);
        z.push(parse_field(&record, z_col, "z", row_idx)?);
    }

    ensure!(!timestamp.is_empty(), "El CSV {:?} no contiene datos", path);
    debug!("{:?}: {} muestras de {}", path, timestamp.len(), kind);

    Ok(SensorStream::new(kind, timestamp, x, y, z)?)
}

fn column(headers: &StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| anyhow!("El CSV {:?} no tiene la columna '{}'", path, name))
}

fn parse_field(record: &StringRecord, idx: usize, name: &str, row_idx: usize) -> Result<f64> {
    let raw = record
        .get(idx)
        .ok_or_else(|| anyhow!("La fila {} no tiene la columna '{}'", row_idx + 1, name))?;
    let value: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{} inválido en fila {}: '{}'", name, row_idx + 1, raw))?;
    ensure!(
        value.is_finite(),
        "{} no finito en fila {}: '{}'",
        name,
        row_idx + 1,
        raw
    );
    Ok(value)
}

/// Busca `<prefijo>-*.csv` dentro de `dir`; si hay varios toma el primero en orden alfabético
pub fn find_sensor_file(dir: impl AsRef<Path>, prefix: &str) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let pattern = format!("{}-", prefix);

    let mut matches: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("No se pudo leer el directorio {:?}", dir))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.starts_with(&pattern) && name.ends_with(".csv"))
                .unwrap_or(false)
        })
        .collect();
    matches.sort();

    if matches.len() > 1 {
        warn!("Varios archivos '{}' en {:?}, usando {:?}", prefix, dir, matches[0]);
    }
    match matches.into_iter().next() {
        Some(path) => Ok(path),
        None => bail!("No se encontró {}-*.csv en {:?}", prefix, dir),
    }
}

/// Carga las tres series de una clase. Los timestamps de resolución completa
/// son los del acelerómetro.
pub fn load_recording(dir: impl AsRef<Path>) -> Result<GestureRecording> {
    let dir = dir.as_ref();
    let orientation = load_stream_from_csv(find_sensor_file(dir, ORIENTATION_PREFIX)?, SensorKind::Orientation)?;
    let accelerometer =
        load_stream_from_csv(find_sensor_file(dir, ACCELEROMETER_PREFIX)?, SensorKind::Accelerometer)?;
    let gyroscope = load_stream_from_csv(find_sensor_file(dir, GYROSCOPE_PREFIX)?, SensorKind::Gyroscope)?;
    let timestamps = accelerometer.timestamp().to_vec();

    Ok(GestureRecording {
        orientation,
        accelerometer,
        gyroscope,
        timestamps,
    })
}

/// Carga `<root>/<Forward|Backward|Left|Right|Enter>/`
pub fn load_recordings(root: impl AsRef<Path>) -> Result<ClassMap<GestureRecording>> {
    let root = root.as_ref();
    ClassMap::try_from_fn(|class: GestureClass| -> Result<GestureRecording> {
        let dir = root.join(class.dir_name());
        load_recording(&dir).with_context(|| format!("No se pudo cargar la clase '{}' desde {:?}", class, dir))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Axis;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_load_stream_by_header_name() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "orientation-1456704054.csv",
            "timestamp,x,y,z,w\n1456704054000,0.1,0.2,0.3,1.0\n1456704054020, 0.4 ,0.5,0.6,1.0\n",
        );

        let stream =
            load_stream_from_csv(dir.path().join("orientation-1456704054.csv"), SensorKind::Orientation).unwrap();
        assert_eq!(stream.len(), 2);
        assert_eq!(stream.timestamp(), &[1456704054000.0, 1456704054020.0]);
        assert_eq!(stream.axis(Axis::X), &[0.1, 0.4]);
        assert_eq!(stream.axis(Axis::Z), &[0.3, 0.6]);
    }

    #[test]
    fn test_load_stream_errors() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "missing.csv", "timestamp,x,y\n1,2,3\n");
        write(dir.path(), "bad.csv", "timestamp,x,y,z\n1,2,3,4\n2,abc,3,4\n");
        write(dir.path(), "empty.csv", "timestamp,x,y,z\n");

        let err = load_stream_from_csv(dir.path().join("missing.csv"), SensorKind::Gyroscope).unwrap_err();
        assert!(err.to_string().contains("'z'"));

        let err = load_stream_from_csv(dir.path().join("bad.csv"), SensorKind::Gyroscope).unwrap_err();
        assert!(err.to_string().contains("fila 2"));

        assert!(load_stream_from_csv(dir.path().join("empty.csv"), SensorKind::Gyroscope).is_err());
    }

    #[test]
    fn test_load_stream_rejects_non_finite_values() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "nan.csv", "timestamp,x,y,z\n1,0.5,0,0\n2,NaN,0,0\n");
        write(dir.path(), "inf.csv", "timestamp,x,y,z\n1,0,inf,0\n");

        let err = load_stream_from_csv(dir.path().join("nan.csv"), SensorKind::Accelerometer).unwrap_err();
        assert!(err.to_string().contains("no finito en fila 2"));

        let err = load_stream_from_csv(dir.path().join("inf.csv"), SensorKind::Accelerometer).unwrap_err();
        assert!(err.to_string().contains("y no finito en fila 1"));
    }

    #[test]
    fn test_find_sensor_file_prefix() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "orientationEuler-1.csv", "");
        write(dir.path(), "orientation-2.csv", "");
        write(dir.path(), "gyro-3.txt", "");

        let found = find_sensor_file(dir.path(), ORIENTATION_PREFIX).unwrap();
        assert_eq!(found.file_name().unwrap(), "orientation-2.csv");
        assert!(find_sensor_file(dir.path(), GYROSCOPE_PREFIX).is_err());
    }

    #[test]
    fn test_load_recording_uses_accelerometer_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "orientation-1.csv", "timestamp,x,y,z,w\n10,0,0,0,1\n20,0,0,0,1\n");
        write(dir.path(), "accelerometer-1.csv", "timestamp,x,y,z\n11,1,2,3\n21,1,2,3\n31,1,2,3\n");
        write(dir.path(), "gyro-1.csv", "timestamp,x,y,z\n11,4,5,6\n21,4,5,6\n31,4,5,6\n");

        let recording = load_recording(dir.path()).unwrap();
        assert_eq!(recording.timestamps, vec![11.0, 21.0, 31.0]);
        assert_eq!(recording.orientation.len(), 2);
        assert_eq!(recording.gyroscope.axis(Axis::Y), &[5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_load_recordings_reports_missing_class() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_recordings(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("forward"));
    }
}
