use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SegmentationError};

/// Constantes del sistema
pub const NUM_CLASSES: usize = 5;
pub const REPETITIONS: usize = 10; // repeticiones por grabación
pub const THRESHOLD_RANK: usize = 30; // posición (ordenada) del umbral de acelerómetro
pub const QUIESCENCE_SKIP: usize = 3; // muestras a saltar tras detectar reposo

/// Etiqueta one-hot: un 1 en la posición de la clase
pub type OneHot = [u8; NUM_CLASSES];

/// Las cinco clases de gesto, en el orden canónico del dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureClass {
    Forward,
    Backward,
    Left,
    Right,
    Enter,
}

impl GestureClass {
    /// Orden fijo usado tanto para extraer como para intercalar y etiquetar
    pub const ALL: [GestureClass; NUM_CLASSES] = [
        GestureClass::Forward,
        GestureClass::Backward,
        GestureClass::Left,
        GestureClass::Right,
        GestureClass::Enter,
    ];

    pub fn index(self) -> usize {
        match self {
            GestureClass::Forward => 0,
            GestureClass::Backward => 1,
            GestureClass::Left => 2,
            GestureClass::Right => 3,
            GestureClass::Enter => 4,
        }
    }

    pub fn one_hot(self) -> OneHot {
        let mut label = [0; NUM_CLASSES];
        label[self.index()] = 1;
        label
    }

    /// Recupera la clase desde una etiqueta one-hot válida
    pub fn from_one_hot(label: &OneHot) -> Option<Self> {
        if label.iter().map(|&bit| bit as usize).sum::<usize>() != 1 {
            return None;
        }
        label
            .iter()
            .position(|&bit| bit == 1)
            .map(|idx| Self::ALL[idx])
    }

    pub fn name(self) -> &'static str {
        match self {
            GestureClass::Forward => "forward",
            GestureClass::Backward => "backward",
            GestureClass::Left => "left",
            GestureClass::Right => "right",
            GestureClass::Enter => "enter",
        }
    }

    /// Nombre del directorio de la grabación (p. ej. `Backward/gyro-1456704054.csv`)
    pub fn dir_name(self) -> &'static str {
        match self {
            GestureClass::Forward => "Forward",
            GestureClass::Backward => "Backward",
            GestureClass::Left => "Left",
            GestureClass::Right => "Right",
            GestureClass::Enter => "Enter",
        }
    }
}

impl fmt::Display for GestureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Un valor por clase de gesto, indexado por `GestureClass`
#[derive(Debug, Clone, PartialEq)]
pub struct ClassMap<T>([T; NUM_CLASSES]);

impl<T> ClassMap<T> {
    pub fn from_fn(mut f: impl FnMut(GestureClass) -> T) -> Self {
        Self(GestureClass::ALL.map(&mut f))
    }

    /// Igual que `from_fn`, pero corta en el primer error (en orden canónico)
    pub fn try_from_fn<E>(mut f: impl FnMut(GestureClass) -> std::result::Result<T, E>) -> std::result::Result<Self, E> {
        let [forward, backward, left, right, enter] = GestureClass::ALL;
        Ok(Self([f(forward)?, f(backward)?, f(left)?, f(right)?, f(enter)?]))
    }

    pub fn iter(&self) -> impl Iterator<Item = (GestureClass, &T)> {
        GestureClass::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T> Index<GestureClass> for ClassMap<T> {
    type Output = T;

    fn index(&self, class: GestureClass) -> &T {
        &self.0[class.index()]
    }
}

impl<T> IndexMut<GestureClass> for ClassMap<T> {
    fn index_mut(&mut self, class: GestureClass) -> &mut T {
        &mut self.0[class.index()]
    }
}

/// Tipo de sensor de una serie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    Orientation,
    Accelerometer,
    Gyroscope,
}

impl SensorKind {
    pub fn name(self) -> &'static str {
        match self {
            SensorKind::Orientation => "orientation",
            SensorKind::Accelerometer => "accelerometer",
            SensorKind::Gyroscope => "gyroscope",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sensores de los que se extraen features (la orientación solo segmenta)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureSensor {
    Gyroscope,
    Accelerometer,
}

impl FeatureSensor {
    pub fn kind(self) -> SensorKind {
        match self {
            FeatureSensor::Gyroscope => SensorKind::Gyroscope,
            FeatureSensor::Accelerometer => SensorKind::Accelerometer,
        }
    }
}

impl fmt::Display for FeatureSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().name())
    }
}

impl FromStr for FeatureSensor {
    type Err = SegmentationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gyro" | "gyroscope" => Ok(FeatureSensor::Gyroscope),
            "accel" | "accelerometer" => Ok(FeatureSensor::Accelerometer),
            other => Err(SegmentationError::Config(format!(
                "unknown sensor '{other}' (expected gyroscope or accelerometer)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

impl FromStr for Axis {
    type Err = SegmentationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            other => Err(SegmentationError::Config(format!(
                "unknown axis '{other}' (expected x, y or z)"
            ))),
        }
    }
}

/// Serie de un sensor: timestamp y tres ejes alineados por índice
#[derive(Debug, Clone, PartialEq)]
pub struct SensorStream {
    kind: SensorKind,
    timestamp: Vec<f64>,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl SensorStream {
    /// Crea la serie validando que las cuatro columnas tengan el mismo largo
    pub fn new(kind: SensorKind, timestamp: Vec<f64>, x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self> {
        let len = timestamp.len();
        if x.len() != len || y.len() != len || z.len() != len {
            return Err(SegmentationError::MalformedStream {
                sensor: kind,
                timestamps: len,
                x: x.len(),
                y: y.len(),
                z: z.len(),
            });
        }

        Ok(Self { kind, timestamp, x, y, z })
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.timestamp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamp.is_empty()
    }

    pub fn timestamp(&self) -> &[f64] {
        &self.timestamp
    }

    pub fn axis(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Posición de la primera aparición exacta de `timestamp`
    pub fn index_of(&self, timestamp: f64) -> Result<usize> {
        index_of(&self.timestamp, timestamp, self.kind.name())
    }
}

/// Búsqueda lineal de un timestamp usado como clave
pub fn index_of(timestamps: &[f64], timestamp: f64, axis: &'static str) -> Result<usize> {
    timestamps
        .iter()
        .position(|&t| t == timestamp)
        .ok_or(SegmentationError::TimestampNotFound { timestamp, axis })
}

/// Grabación completa de una clase de gesto
#[derive(Debug, Clone, PartialEq)]
pub struct GestureRecording {
    pub orientation: SensorStream,
    pub accelerometer: SensorStream,
    pub gyroscope: SensorStream,
    /// Timestamps de resolución completa, usados para recortar ventanas
    pub timestamps: Vec<f64>,
}

impl GestureRecording {
    pub fn stream(&self, sensor: FeatureSensor) -> &SensorStream {
        match sensor {
            FeatureSensor::Gyroscope => &self.gyroscope,
            FeatureSensor::Accelerometer => &self.accelerometer,
        }
    }

    pub fn axis_samples(&self, sensor: FeatureSensor, axis: Axis) -> &[f64] {
        self.stream(sensor).axis(axis)
    }
}

/// Intervalo semiabierto [start, end) sobre el eje de timestamps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
}

impl TimeWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, timestamp: f64) -> bool {
        self.start <= timestamp && timestamp < self.end
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Ventanas de una clase: una por repetición
pub type GestureGroup = Vec<TimeWindow>;

/// Par (features, etiqueta) listo para el clasificador
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledExample {
    pub features: Vec<f64>,
    pub label: OneHot,
}

impl LabeledExample {
    pub fn class(&self) -> Option<GestureClass> {
        GestureClass::from_one_hot(&self.label)
    }
}

pub type Dataset = Vec<LabeledExample>;

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(len: usize) -> SensorStream {
        let ts: Vec<f64> = (0..len).map(|i| 100.0 + i as f64).collect();
        SensorStream::new(SensorKind::Accelerometer, ts, vec![0.0; len], vec![1.0; len], vec![2.0; len]).unwrap()
    }

    #[test]
    fn test_one_hot_order() {
        assert_eq!(GestureClass::Forward.one_hot(), [1, 0, 0, 0, 0]);
        assert_eq!(GestureClass::Backward.one_hot(), [0, 1, 0, 0, 0]);
        assert_eq!(GestureClass::Left.one_hot(), [0, 0, 1, 0, 0]);
        assert_eq!(GestureClass::Right.one_hot(), [0, 0, 0, 1, 0]);
        assert_eq!(GestureClass::Enter.one_hot(), [0, 0, 0, 0, 1]);

        for class in GestureClass::ALL {
            assert_eq!(GestureClass::from_one_hot(&class.one_hot()), Some(class));
        }
        assert_eq!(GestureClass::from_one_hot(&[1, 1, 0, 0, 0]), None);
        assert_eq!(GestureClass::from_one_hot(&[0; NUM_CLASSES]), None);
    }

    #[test]
    fn test_malformed_stream_rejected() {
        let err = SensorStream::new(
            SensorKind::Gyroscope,
            vec![1.0, 2.0, 3.0],
            vec![0.0; 3],
            vec![0.0; 2],
            vec![0.0; 3],
        )
        .unwrap_err();

        match err {
            SegmentationError::MalformedStream { sensor, timestamps, y, .. } => {
                assert_eq!(sensor, SensorKind::Gyroscope);
                assert_eq!(timestamps, 3);
                assert_eq!(y, 2);
            }
            other => panic!("Expected MalformedStream, got {other:?}"),
        }
    }

    #[test]
    fn test_index_of_lookup() {
        let s = stream(5);
        assert_eq!(s.index_of(102.0).unwrap(), 2);
        assert!(matches!(
            s.index_of(99.5),
            Err(SegmentationError::TimestampNotFound { axis: "accelerometer", .. })
        ));
    }

    #[test]
    fn test_window_is_half_open() {
        let w = TimeWindow::new(10.0, 20.0);
        assert!(w.contains(10.0));
        assert!(w.contains(19.999));
        assert!(!w.contains(20.0));
        assert!(!w.contains(9.0));
    }

    #[test]
    fn test_class_map_order() {
        let map = ClassMap::from_fn(|class| class.index() * 10);
        assert_eq!(map[GestureClass::Right], 30);
        let classes: Vec<GestureClass> = map.iter().map(|(class, _)| class).collect();
        assert_eq!(classes, GestureClass::ALL.to_vec());

        let mut seen = Vec::new();
        let result: std::result::Result<ClassMap<usize>, &str> = ClassMap::try_from_fn(|class| {
            seen.push(class);
            if class == GestureClass::Left { Err("left") } else { Ok(0) }
        });
        assert_eq!(result.unwrap_err(), "left");
        assert_eq!(seen, vec![GestureClass::Forward, GestureClass::Backward, GestureClass::Left]);
    }

    #[test]
    fn test_parse_sensor_and_axis() {
        assert_eq!("gyro".parse::<FeatureSensor>().unwrap(), FeatureSensor::Gyroscope);
        assert_eq!("Accelerometer".parse::<FeatureSensor>().unwrap(), FeatureSensor::Accelerometer);
        assert!("orientation".parse::<FeatureSensor>().is_err());
        assert_eq!("Z".parse::<Axis>().unwrap(), Axis::Z);
        assert!("w".parse::<Axis>().is_err());
    }
}
