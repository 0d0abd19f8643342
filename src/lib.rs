//! Segmentación de grabaciones IMU de gestos en un dataset etiquetado.
//!
//! Pipeline por lotes, en orden:
//! 1. `quiescence`: periodos sin cambio en la orientación (límites entre repeticiones)
//! 2. `gesture_extractor`: una ventana gruesa por repetición, filtrada por el acelerómetro
//! 3. `window_normalizer`: ventanas recentradas en el pico de la señal
//! 4. `harmonizer`: largo común a las cinco clases, con relleno/recorte
//! 5. `dataset`: recorte de muestras, intercalado por clase y etiquetas one-hot
//!
//! ```no_run
//! use gesture_dataset::{csv_loader, DatasetBuilder, FeatureSensor, PipelineConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let recordings = csv_loader::load_recordings("Myo Keyboard Data")?;
//! let builder = DatasetBuilder::new(&recordings, PipelineConfig::default())?;
//! let dataset = builder.process_multi_axes(FeatureSensor::Gyroscope)?;
//! println!("{} ejemplos", dataset.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod csv_loader;
pub mod dataset;
pub mod error;
pub mod export;
pub mod gesture_extractor;
pub mod harmonizer;
pub mod pipeline;
pub mod quiescence;
pub mod types;
pub mod window_normalizer;

pub use config::{PipelineConfig, QuiescenceParams};
pub use error::{Result, SegmentationError, Stage};
pub use pipeline::{DatasetBuilder, Segmentation};
pub use types::{
    Axis, ClassMap, Dataset, FeatureSensor, GestureClass, GestureGroup, GestureRecording, LabeledExample,
    SensorKind, SensorStream, TimeWindow,
};
