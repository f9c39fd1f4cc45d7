//! Screening outcome assembly for human expert review
//!
//! Converts an [`AnalysisReport`] into the externally visible review shape:
//! coarse 0-100 scores, sizing and closure summaries, recommendations, and
//! a checklist of findings that need human validation with time and expert
//! estimates. The scores are deliberately coarse — the whole system is a
//! screening aid, and anything the automation is unsure about lands on the
//! checklist rather than in the score.

use serde::Serialize;

use crate::report::{AnalysisReport, FalsePositiveFlag};

/// Maximum number of recommendations surfaced to the reviewer
const MAX_RECOMMENDATIONS: usize = 6;

/// How adaptable the design is across body sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Adaptability {
    /// Three or more size variants detected
    High,
    /// At least one size variant detected
    Medium,
    /// Single-size model
    Limited,
}

/// Summary of detected size grading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingMetrics {
    /// Number of detected size variants
    pub size_count: usize,
    /// Adaptability tier derived from the variant count
    pub adaptability: Adaptability,
    /// Whether the design counts as inclusively graded (3+ variants)
    pub inclusive_design: bool,
    /// Node names of the detected variants
    pub detected_sizes: Vec<String>,
    /// Whether any variant carried geometric scale data
    pub grading_system: bool,
}

/// Summary of detected closures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosureMetrics {
    /// Deduplicated closure keywords, in detection order
    pub closure_types: Vec<String>,
    /// Number of button-family closures detected
    pub button_count: usize,
    /// Number of zipper-family closures detected
    pub zipper_count: usize,
}

/// Priority of a human validation item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Must be validated before the report is used
    High,
    /// Should be validated
    Medium,
    /// Validate if time allows
    Low,
}

/// Kind of expert recommended for a validation item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expert {
    /// Garment designer
    Designer,
    /// Accessibility specialist
    Accessibility,
    /// Materials specialist
    Materials,
}

/// Review area a checklist item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewArea {
    /// Garment element detections
    GarmentElements,
    /// Material classifications
    Materials,
    /// The whole analysis (stub formats)
    FullAnalysis,
}

/// One finding that requires human validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationItem {
    /// Review area the finding belongs to
    pub area: ReviewArea,
    /// Priority of the validation
    pub priority: Priority,
    /// What the automation found
    pub finding: String,
    /// What the human should verify
    pub validation_needed: String,
    /// Estimated validation effort in minutes
    pub estimated_minutes: u32,
    /// Recommended expert type
    pub expert: Expert,
}

/// Risk flag surfaced on a screening outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFlag {
    /// A false-positive detector fired during analysis
    FalsePositive(FalsePositiveFlag),
    /// The file format only has stub support; the outcome is a placeholder
    FormatNotFullySupported,
}

impl From<FalsePositiveFlag> for RiskFlag {
    fn from(flag: FalsePositiveFlag) -> Self {
        RiskFlag::FalsePositive(flag)
    }
}

/// The externally visible screening outcome for one design file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningOutcome {
    /// Inclusivity score, 0-100
    pub inclusivity_score: u32,
    /// Accessibility score, 0-100
    pub accessibility_score: u32,
    /// Sustainability score, 0-100
    pub sustainability_score: u32,
    /// Overall analysis confidence carried through from the analyzer
    pub overall_confidence: f64,
    /// Sizing summary
    pub sizing: SizingMetrics,
    /// Closure summary
    pub closures: ClosureMetrics,
    /// Recommendations for the designer, at most six
    pub recommendations: Vec<String>,
    /// Findings requiring human validation
    pub validation_checklist: Vec<ValidationItem>,
    /// Total estimated validation effort in minutes
    pub estimated_validation_minutes: u32,
    /// Review areas with open checklist items
    pub priority_areas: Vec<ReviewArea>,
    /// Experts recommended for the validation pass
    pub recommended_experts: Vec<Expert>,
    /// Advisory risk flags
    pub risk_flags: Vec<RiskFlag>,
}

impl ScreeningOutcome {
    /// Assemble the screening outcome from a full glTF analysis
    pub fn from_report(report: &AnalysisReport) -> Self {
        let sizing = sizing_metrics(report);
        let closures = closure_metrics(report);
        let validation_checklist = build_checklist(report);
        let estimated_validation_minutes = validation_checklist
            .iter()
            .map(|item| item.estimated_minutes)
            .sum();

        let mut priority_areas = Vec::new();
        if validation_checklist
            .iter()
            .any(|i| i.area == ReviewArea::GarmentElements)
        {
            priority_areas.push(ReviewArea::GarmentElements);
        }
        if validation_checklist
            .iter()
            .any(|i| i.area == ReviewArea::Materials)
        {
            priority_areas.push(ReviewArea::Materials);
        }

        Self {
            inclusivity_score: score(
                report.overall_confidence * 60.0 + sizing.size_count as f64 * 10.0,
            ),
            accessibility_score: score(
                report.accessibility_features.len() as f64 * 15.0
                    + report.overall_confidence * 40.0,
            ),
            sustainability_score: score(
                report.materials.len() as f64 * 5.0 + report.overall_confidence * 50.0,
            ),
            overall_confidence: report.overall_confidence,
            sizing,
            closures,
            recommendations: recommendations(report),
            validation_checklist,
            estimated_validation_minutes,
            priority_areas,
            recommended_experts: vec![Expert::Designer, Expert::Materials],
            risk_flags: report
                .false_positive_flags
                .iter()
                .copied()
                .map(RiskFlag::from)
                .collect(),
        }
    }

    /// Placeholder outcome for formats with stub support only
    ///
    /// Carries deliberately low scores and a single high-priority item
    /// asking for a complete manual review.
    pub fn stub(format_label: &str) -> Self {
        Self {
            inclusivity_score: 25,
            accessibility_score: 20,
            sustainability_score: 30,
            overall_confidence: 0.2,
            sizing: SizingMetrics {
                size_count: 0,
                adaptability: Adaptability::Limited,
                inclusive_design: false,
                detected_sizes: Vec::new(),
                grading_system: false,
            },
            closures: ClosureMetrics {
                closure_types: Vec::new(),
                button_count: 0,
                zipper_count: 0,
            },
            recommendations: vec![
                "Perform a complete manual analysis of this file".to_string(),
                "Consider converting the design to glTF for automated analysis".to_string(),
            ],
            validation_checklist: vec![ValidationItem {
                area: ReviewArea::FullAnalysis,
                priority: Priority::High,
                finding: format!("Format {} only has placeholder support", format_label),
                validation_needed: "Perform a complete manual analysis of the file".to_string(),
                estimated_minutes: 45,
                expert: Expert::Designer,
            }],
            estimated_validation_minutes: 45,
            priority_areas: vec![ReviewArea::FullAnalysis],
            recommended_experts: vec![Expert::Designer, Expert::Accessibility, Expert::Materials],
            risk_flags: vec![RiskFlag::FormatNotFullySupported],
        }
    }
}

fn score(raw: f64) -> u32 {
    (raw.max(0.0) as u32).min(100)
}

fn sizing_metrics(report: &AnalysisReport) -> SizingMetrics {
    let size_count = report.size_variations.len();
    SizingMetrics {
        size_count,
        adaptability: match size_count {
            n if n >= 3 => Adaptability::High,
            n if n >= 1 => Adaptability::Medium,
            _ => Adaptability::Limited,
        },
        inclusive_design: size_count >= 3,
        detected_sizes: report
            .size_variations
            .iter()
            .map(|v| v.node_name.clone())
            .collect(),
        grading_system: report.size_variations.iter().any(|v| v.has_scale()),
    }
}

fn closure_metrics(report: &AnalysisReport) -> ClosureMetrics {
    // Counts run over every detected closure element; the type list alone
    // is deduplicated
    let mut closure_types: Vec<String> = Vec::new();
    let mut button_count = 0;
    let mut zipper_count = 0;
    for keyword in report
        .garment_elements
        .iter()
        .flat_map(|m| &m.detections)
        .filter(|d| d.category == crate::patterns::GarmentCategory::Closures)
        .flat_map(|d| &d.elements)
        .map(|e| &e.keyword)
    {
        if keyword.contains("button") || keyword.contains("botón") {
            button_count += 1;
        }
        if keyword.contains("zipper") || keyword.contains("cremallera") {
            zipper_count += 1;
        }
        if !closure_types.contains(keyword) {
            closure_types.push(keyword.clone());
        }
    }

    ClosureMetrics {
        closure_types,
        button_count,
        zipper_count,
    }
}

fn recommendations(report: &AnalysisReport) -> Vec<String> {
    let mut recs = Vec::new();

    if report.overall_confidence < 0.5 {
        recs.push(
            "Consider additional manual validation due to low automated analysis confidence"
                .to_string(),
        );
    }
    if report.size_variations.is_empty() {
        recs.push("Consider creating size variations to improve inclusivity".to_string());
    }
    if report.accessibility_features.len() < 3 {
        recs.push(
            "Evaluate adding more accessibility features (easy closures, soft materials)"
                .to_string(),
        );
    }
    if !report.false_positive_flags.is_empty() {
        recs.push("Manually review the raised false-positive alerts".to_string());
    }
    if report.materials.len() > 50 {
        recs.push(
            "Consider simplifying the material variety to improve sustainability".to_string(),
        );
    }

    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}

fn build_checklist(report: &AnalysisReport) -> Vec<ValidationItem> {
    let mut checklist = Vec::new();

    for element in &report.garment_elements {
        if element.confidence < 0.8 {
            checklist.push(ValidationItem {
                area: ReviewArea::GarmentElements,
                priority: Priority::Medium,
                finding: format!(
                    "Element {} detected with confidence {:.2}",
                    element.mesh_name, element.confidence
                ),
                validation_needed: "Verify manually that this is really a garment element"
                    .to_string(),
                estimated_minutes: 5,
                expert: Expert::Designer,
            });
        }
    }

    for material in report.materials.values() {
        if material.confidence < 0.7 {
            checklist.push(ValidationItem {
                area: ReviewArea::Materials,
                priority: Priority::Low,
                finding: format!(
                    "Material {} classified with confidence {:.2}",
                    material.name, material.confidence
                ),
                validation_needed: "Verify the material properties and classification".to_string(),
                estimated_minutes: 3,
                expert: Expert::Materials,
            });
        }
    }

    checklist
}
