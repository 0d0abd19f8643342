//! Orquestación de las cinco etapas sobre las grabaciones de todas las clases.

use log::{debug, info};

use crate::config::PipelineConfig;
use crate::dataset::{assemble, fuse_axes, get_data_by_groups};
use crate::error::{Result, Stage};
use crate::gesture_extractor::GestureExtractor;
use crate::harmonizer::{group_average_length, shared_length};
use crate::types::{Axis, ClassMap, Dataset, FeatureSensor, GestureGroup, GestureRecording};
use crate::window_normalizer::normalize_groups;

/// Ventanas gruesas por clase y el largo común derivado de ellas
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    pub groups: ClassMap<GestureGroup>,
    pub target_len: usize,
}

/// Construye datasets etiquetados a partir de una grabación por clase
pub struct DatasetBuilder<'a> {
    recordings: &'a ClassMap<GestureRecording>,
    config: PipelineConfig,
}

impl<'a> DatasetBuilder<'a> {
    pub fn new(recordings: &'a ClassMap<GestureRecording>, config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { recordings, config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Etapas 1, 2 y parte de la 4: ventanas por clase y largo común.
    ///
    /// No depende del sensor ni del eje, así que se calcula una sola vez.
    pub fn segment(&self) -> Result<Segmentation> {
        let extractor = GestureExtractor::new(&self.config);

        let groups = ClassMap::try_from_fn(|class| -> Result<GestureGroup> {
            let groups = extractor
                .extract(&self.recordings[class])
                .map_err(|e| e.at(class, Stage::WindowExtraction))?;
            debug!("{}: {} ventanas extraídas", class, groups.len());
            Ok(groups)
        })?;

        let per_class = ClassMap::from_fn(|class| {
            group_average_length(&groups[class], &self.recordings[class].timestamps)
        });
        let target_len = shared_length(&per_class);
        info!("Largo común de ventana: {} muestras ({:?})", target_len, per_class);

        Ok(Segmentation { groups, target_len })
    }

    /// Dataset de un único eje de un sensor
    pub fn process_single_axis(&self, sensor: FeatureSensor, axis: Axis) -> Result<Dataset> {
        let segmentation = self.segment()?;
        self.assemble_axis(&segmentation, sensor, axis)
    }

    /// Dataset con los tres ejes concatenados (x ++ y ++ z)
    pub fn process_multi_axes(&self, sensor: FeatureSensor) -> Result<Dataset> {
        info!("Obteniendo datos de los tres ejes x, y, z...");
        let segmentation = self.segment()?;

        let data_x = self.assemble_axis(&segmentation, sensor, Axis::X)?;
        let data_y = self.assemble_axis(&segmentation, sensor, Axis::Y)?;
        let data_z = self.assemble_axis(&segmentation, sensor, Axis::Z)?;
        fuse_axes(data_x, data_y, data_z)
    }

    /// Un eje si se indica; si no, los tres fusionados
    pub fn process(&self, sensor: FeatureSensor, axis: Option<Axis>) -> Result<Dataset> {
        match axis {
            Some(axis) => self.process_single_axis(sensor, axis),
            None => self.process_multi_axes(sensor),
        }
    }

    /// Etapas 3 a 5 para un eje, reutilizando una segmentación ya calculada
    pub fn assemble_axis(&self, segmentation: &Segmentation, sensor: FeatureSensor, axis: Axis) -> Result<Dataset> {
        info!("Obteniendo datos de {} en el eje {}...", sensor, axis);
        let target_len = segmentation.target_len;

        let chosen = ClassMap::try_from_fn(|class| {
            let recording = &self.recordings[class];
            let samples = recording.axis_samples(sensor, axis);

            let normalized = normalize_groups(
                &segmentation.groups[class],
                target_len,
                &recording.timestamps,
                samples,
            )
            .map_err(|e| e.at(class, Stage::Normalization))?;

            get_data_by_groups(&normalized, samples, &recording.timestamps)
                .map_err(|e| e.at(class, Stage::Slicing))
        })?;

        let dataset = assemble(chosen, target_len);
        debug!("{} ejemplos para {} / {}", dataset.len(), sensor, axis);
        Ok(dataset)
    }
}
