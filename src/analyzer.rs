//! Contextual garment-feature analysis of glTF scenes
//!
//! This module contains the screening core: it walks a scene graph's meshes,
//! materials, textures, and nodes, applies keyword heuristics with
//! context-aware confidence scoring, cross-validates signals across
//! independent data sources, and aggregates everything into a single
//! confidence-weighted [`AnalysisReport`].
//!
//! The analysis is synchronous, stateless between invocations, and performs
//! no I/O: the caller deserializes the scene up front and receives the
//! report as an owned value. Malformed individual sub-records (such as an
//! out-of-range texture index) are skipped and never abort the analysis;
//! only a scene with no analyzable collections at all fails.

mod accessibility;
mod aggregate;
mod elements;
mod material;
mod sizes;
mod texture;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::patterns::PatternTables;
use crate::report::AnalysisReport;
use crate::scene::Scene;

/// Contextual glTF scene analyzer
///
/// Holds the pattern tables it classifies with. Construct one per analysis
/// or reuse across analyses; the analyzer carries no per-scene state.
#[derive(Debug, Default)]
pub struct GltfAnalyzer {
    tables: PatternTables,
}

impl GltfAnalyzer {
    /// Create an analyzer with the default pattern tables
    pub fn new() -> Self {
        Self {
            tables: PatternTables::new(),
        }
    }

    /// Create an analyzer with explicitly supplied pattern tables
    pub fn with_tables(tables: PatternTables) -> Self {
        Self { tables }
    }

    /// Analyze a scene graph and produce the full report
    ///
    /// Fails with [`Error::InvalidInput`] only when the document carries
    /// none of the collections the analyzer consumes (meshes, materials,
    /// nodes). A present-but-empty scene yields a valid report with zero
    /// overall confidence and empty collections.
    ///
    /// # Example
    ///
    /// ```
    /// use stylescan::{GltfAnalyzer, Scene};
    ///
    /// # fn main() -> stylescan::Result<()> {
    /// let scene = Scene::from_slice(br#"{"meshes": [{"name": "front_zipper"}]}"#)?;
    /// let report = GltfAnalyzer::new().analyze(&scene)?;
    /// assert_eq!(report.garment_elements.len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn analyze(&self, scene: &Scene) -> Result<AnalysisReport> {
        if !scene.has_analyzable_collections() {
            return Err(Error::invalid_input(
                "scene declares no meshes, materials, or nodes; \
                 the document does not look like a glTF scene",
            ));
        }

        debug!(
            version = scene.gltf_version(),
            generator = scene.generator(),
            meshes = scene.meshes().len(),
            materials = scene.materials().len(),
            nodes = scene.nodes().len(),
            "starting scene analysis"
        );

        let garment_elements = elements::detect_garment_elements(&self.tables, scene);
        debug!(detected = garment_elements.len(), "garment elements");

        let materials = material::analyze_materials(&self.tables, scene);
        debug!(retained = materials.len(), "materials classified");

        let size_variations = sizes::detect_size_variations(&self.tables, scene);
        debug!(detected = size_variations.len(), "size variations");

        let accessibility_features = accessibility::evaluate(&self.tables, &garment_elements);
        debug!(features = accessibility_features.len(), "accessibility");

        let overall_confidence = aggregate::overall_confidence(
            &garment_elements,
            &materials,
            &size_variations,
            &accessibility_features,
        );
        let validation_sources =
            aggregate::collect_validation_sources(&materials, &garment_elements);
        let false_positive_flags =
            aggregate::detect_false_positives(&self.tables, scene, &garment_elements, &materials);

        info!(
            confidence = overall_confidence,
            flags = false_positive_flags.len(),
            "scene analysis complete"
        );

        Ok(AnalysisReport {
            gltf_version: scene.gltf_version().to_string(),
            generator: scene.generator().to_string(),
            overall_confidence,
            garment_elements,
            materials,
            size_variations,
            accessibility_features,
            validation_sources,
            false_positive_flags,
        })
    }
}

/// Analyze a scene with the default pattern tables
///
/// Convenience wrapper around [`GltfAnalyzer::analyze`].
pub fn analyze_scene(scene: &Scene) -> Result<AnalysisReport> {
    GltfAnalyzer::new().analyze(scene)
}
