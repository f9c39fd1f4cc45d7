//! # stylescan
//!
//! Heuristic screening of 3D garment design files for inclusivity and
//! accessibility signals.
//!
//! This library inspects glTF JSON scenes exported from fashion design
//! tools, walks their meshes, materials, textures, and nodes, and applies
//! keyword and PBR heuristics with context-aware confidence scoring. The
//! result is a confidence-weighted [`AnalysisReport`] plus a
//! [`ScreeningOutcome`] with coarse scores, recommendations, and a human
//! validation checklist.
//!
//! ## Features
//!
//! - Pure Rust with no unsafe code
//! - Contextual garment element detection (closures, body parts,
//!   construction features) across English and Spanish keyword tables
//! - Fabric classification from PBR parameters, vendor fabric extensions,
//!   and texture cross-validation
//! - Size-grading detection with geometric scale corroboration
//! - Explicit false-positive flags for human reviewers
//! - Stub handling for CLO3D `.zprj`/`.zpac` containers and Wavefront OBJ
//!
//! All scores are heuristic screening aids, not ground truth; every report
//! carries the checklist of findings that still need expert validation.
//!
//! ## Example
//!
//! ```
//! use stylescan::{Scene, analyze_scene};
//!
//! # fn main() -> stylescan::Result<()> {
//! let scene = Scene::from_slice(
//!     br#"{
//!         "asset": {"version": "2.0", "generator": "CLO Standalone"},
//!         "meshes": [{"name": "front_zipper_closure"}],
//!         "materials": [],
//!         "nodes": [{"name": "size_m", "scale": [1.0, 1.0, 1.0]}]
//!     }"#,
//! )?;
//!
//! let report = analyze_scene(&scene)?;
//! println!("confidence: {:.2}", report.overall_confidence);
//! println!("elements: {}", report.garment_elements.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod analyzer;
pub mod error;
pub mod format;
pub mod patterns;
pub mod report;
pub mod scene;
pub mod screening;

pub use analyzer::{GltfAnalyzer, analyze_scene};
pub use error::{Error, Result};
pub use format::{DesignFormat, FileReport, analyze_bytes, analyze_path};
pub use patterns::{FiberClass, GarmentCategory, PatternTables, SizeTokenFamily};
pub use report::{
    AccessibilityFeature, AnalysisReport, CategoryDetection, ElementMatch, FabricType,
    FalsePositiveFlag, GeometricValidation, MaterialAnalysis, MaterialProperties, MeshDetection,
    SizeIndicator, SizeVariation, TextureIndicator, TextureSlotKind, ValidationSource,
};
pub use scene::Scene;
pub use screening::{
    Adaptability, ClosureMetrics, Expert, Priority, ReviewArea, RiskFlag, ScreeningOutcome,
    SizingMetrics, ValidationItem,
};

use std::io::Read;

impl Scene {
    /// Deserialize a glTF JSON scene from a byte slice
    ///
    /// Unknown glTF fields are ignored; only the sub-collections the
    /// analyzer consumes are kept. Structural validation happens at
    /// analysis time, so any well-formed JSON object deserializes.
    ///
    /// # Example
    ///
    /// ```
    /// use stylescan::Scene;
    ///
    /// # fn main() -> stylescan::Result<()> {
    /// let scene = Scene::from_slice(br#"{"meshes": [{"name": "sleeve"}]}"#)?;
    /// assert_eq!(scene.meshes().len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Deserialize a glTF JSON scene from a reader
    ///
    /// # Example
    ///
    /// ```no_run
    /// use stylescan::Scene;
    /// use std::fs::File;
    ///
    /// # fn main() -> stylescan::Result<()> {
    /// let file = File::open("jacket.gltf")?;
    /// let scene = Scene::from_reader(file)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}
