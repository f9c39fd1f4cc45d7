//! Design file format detection and analysis dispatch
//!
//! The entry point for file-based screening: detects the design format
//! from the file extension, reads the file once, fingerprints it, and
//! dispatches to the glTF analyzer or to placeholder handling. Only glTF
//! gets real analysis; the CLO3D container formats are verified to be
//! readable ZIP archives and the rest receive a stub outcome asking for
//! manual review.

use std::io::Cursor;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::info;
use zip::ZipArchive;

use crate::analyzer::GltfAnalyzer;
use crate::error::{Error, Result};
use crate::report::AnalysisReport;
use crate::scene::Scene;
use crate::screening::ScreeningOutcome;

/// Supported design file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignFormat {
    /// glTF 2.0 JSON scene
    Gltf,
    /// CLO3D project container (ZIP-based)
    CloProject,
    /// CLO3D garment package container (ZIP-based)
    CloPackage,
    /// Wavefront OBJ geometry
    WavefrontObj,
}

impl DesignFormat {
    /// Detect the format from a file extension (without the dot)
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "gltf" => Some(DesignFormat::Gltf),
            "zprj" => Some(DesignFormat::CloProject),
            "zpac" => Some(DesignFormat::CloPackage),
            "obj" => Some(DesignFormat::WavefrontObj),
            _ => None,
        }
    }

    /// Detect the format from a file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::unsupported_format("<none>"))?;
        Self::from_extension(extension).ok_or_else(|| Error::unsupported_format(extension))
    }

    /// Get a human-readable label for this format
    pub fn label(&self) -> &'static str {
        match self {
            DesignFormat::Gltf => "glTF 3D Model (.gltf)",
            DesignFormat::CloProject => "CLO3D Project (.zprj)",
            DesignFormat::CloPackage => "CLO3D Package (.zpac)",
            DesignFormat::WavefrontObj => "Wavefront OBJ (.obj)",
        }
    }

    /// Whether this format gets full analysis rather than a stub outcome
    pub fn has_full_support(&self) -> bool {
        matches!(self, DesignFormat::Gltf)
    }
}

/// Screening result for one design file
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FileReport {
    /// Detected file format
    pub format: DesignFormat,
    /// SHA-256 fingerprint of the file contents, lowercase hex
    pub fingerprint: String,
    /// File size in bytes
    pub size_bytes: u64,
    /// Number of container entries, for ZIP-based formats
    pub container_entries: Option<usize>,
    /// The screening outcome for human review
    pub screening: ScreeningOutcome,
    /// The full analysis report; present only for glTF
    pub analysis: Option<AnalysisReport>,
}

/// Screen a design file on disk
///
/// Reads the file once, fingerprints it, and dispatches by format. For
/// glTF this runs the full contextual analysis; for CLO containers it
/// verifies the ZIP structure and returns a placeholder outcome; OBJ gets
/// the placeholder outcome directly.
///
/// # Example
///
/// ```no_run
/// # fn main() -> stylescan::Result<()> {
/// let report = stylescan::analyze_path("jacket.gltf")?;
/// println!("inclusivity: {}/100", report.screening.inclusivity_score);
/// # Ok(())
/// # }
/// ```
pub fn analyze_path(path: impl AsRef<Path>) -> Result<FileReport> {
    let path = path.as_ref();
    let format = DesignFormat::from_path(path)?;
    let bytes = std::fs::read(path)?;
    analyze_bytes(format, &bytes)
}

/// Screen an in-memory design file of a known format
pub fn analyze_bytes(format: DesignFormat, bytes: &[u8]) -> Result<FileReport> {
    let fingerprint = fingerprint(bytes);
    info!(
        format = format.label(),
        size = bytes.len(),
        fingerprint = %&fingerprint[..16],
        "screening design file"
    );

    let (container_entries, screening, analysis) = match format {
        DesignFormat::Gltf => {
            let scene = Scene::from_slice(bytes)?;
            let report = GltfAnalyzer::new().analyze(&scene)?;
            (None, ScreeningOutcome::from_report(&report), Some(report))
        }
        DesignFormat::CloProject | DesignFormat::CloPackage => {
            let archive = ZipArchive::new(Cursor::new(bytes))?;
            (
                Some(archive.len()),
                ScreeningOutcome::stub(format.label()),
                None,
            )
        }
        DesignFormat::WavefrontObj => (None, ScreeningOutcome::stub(format.label()), None),
    };

    Ok(FileReport {
        format,
        fingerprint,
        size_bytes: bytes.len() as u64,
        container_entries,
        screening,
        analysis,
    })
}

/// SHA-256 fingerprint of the file contents, lowercase hex
fn fingerprint(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection_is_case_insensitive() {
        assert_eq!(DesignFormat::from_extension("GLTF"), Some(DesignFormat::Gltf));
        assert_eq!(
            DesignFormat::from_extension("zprj"),
            Some(DesignFormat::CloProject)
        );
        assert_eq!(
            DesignFormat::from_extension("Zpac"),
            Some(DesignFormat::CloPackage)
        );
        assert_eq!(
            DesignFormat::from_extension("obj"),
            Some(DesignFormat::WavefrontObj)
        );
        assert_eq!(DesignFormat::from_extension("fbx"), None);
    }

    #[test]
    fn test_from_path_rejects_unknown_extensions() {
        let err = DesignFormat::from_path(Path::new("model.stl")).unwrap_err();
        assert!(err.to_string().contains("[E4001]"));
        let err = DesignFormat::from_path(Path::new("model")).unwrap_err();
        assert!(err.to_string().contains("[E4001]"));
    }

    #[test]
    fn test_fingerprint_is_stable_sha256() {
        // SHA-256 of the empty input is a fixed vector
        assert_eq!(
            fingerprint(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(fingerprint(b"abc"), fingerprint(b"abc"));
        assert_ne!(fingerprint(b"abc"), fingerprint(b"abd"));
    }

    #[test]
    fn test_obj_gets_stub_outcome() {
        let report = analyze_bytes(DesignFormat::WavefrontObj, b"v 0 0 0\n").unwrap();
        assert!(report.analysis.is_none());
        assert!(report.container_entries.is_none());
        assert_eq!(report.screening.inclusivity_score, 25);
    }

    #[test]
    fn test_invalid_container_is_rejected() {
        let err = analyze_bytes(DesignFormat::CloProject, b"not a zip").unwrap_err();
        assert!(err.to_string().contains("[E1002]"));
    }
}
