//! Texture cross-validation for material classification
//!
//! A side-channel validator: fiber keywords found in the image names (or
//! URIs) behind a material's texture slots corroborate a fabric
//! classification but never classify on their own. Diffuse evidence is
//! weighted higher than metallic-roughness or normal maps, since the base
//! color texture best reflects the visible fabric.
//!
//! Broken cross-references — a slot without an index, an index past the
//! texture table, a texture without a resolvable image — are skipped
//! silently; one bad reference must not abort the scene's analysis.

use crate::patterns::PatternTables;
use crate::report::{TextureIndicator, TextureSlotKind};
use crate::scene::{Scene, SceneMaterial};

/// Result of scanning a material's texture slots for fiber keywords
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct TextureCorroboration {
    /// Maximum confidence across all indicators; 0.0 when none were found
    pub confidence: f64,
    /// All fiber indicators found, in slot order
    pub indicators: Vec<TextureIndicator>,
}

/// Scan the material's texture slots against the scene's image table
pub(crate) fn cross_validate(
    tables: &PatternTables,
    material: &SceneMaterial,
    scene: &Scene,
) -> TextureCorroboration {
    let mut indicators = Vec::new();

    for (slot, index) in texture_slots(material) {
        let Some(identifier) = resolve_image_identifier(scene, index) else {
            continue;
        };
        for fiber in tables.fibers() {
            if fiber.keywords.iter().any(|kw| identifier.contains(kw)) {
                indicators.push(TextureIndicator {
                    fiber: fiber.name.to_string(),
                    slot,
                    confidence: slot.confidence(),
                    image_identifier: identifier.clone(),
                });
            }
        }
    }

    let confidence = indicators
        .iter()
        .map(|i| i.confidence)
        .fold(0.0, f64::max);
    TextureCorroboration {
        confidence,
        indicators,
    }
}

/// The populated texture slots of a material, in scan order
fn texture_slots(material: &SceneMaterial) -> Vec<(TextureSlotKind, usize)> {
    let mut slots = Vec::new();
    if let Some(pbr) = &material.pbr_metallic_roughness {
        if let Some(index) = pbr.base_color_texture.as_ref().and_then(|t| t.index) {
            slots.push((TextureSlotKind::Diffuse, index));
        }
        if let Some(index) = pbr
            .metallic_roughness_texture
            .as_ref()
            .and_then(|t| t.index)
        {
            slots.push((TextureSlotKind::MetallicRoughness, index));
        }
    }
    if let Some(index) = material.normal_texture.as_ref().and_then(|t| t.index) {
        slots.push((TextureSlotKind::Normal, index));
    }
    slots
}

/// Resolve texture index to a lowercased image name or URI
fn resolve_image_identifier(scene: &Scene, texture_index: usize) -> Option<String> {
    let texture = scene.textures().get(texture_index)?;
    let image = scene.images().get(texture.source?)?;
    let identifier = image
        .name
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| image.uri.as_deref().filter(|s| !s.is_empty()))?;
    Some(identifier.to_lowercase())
}
