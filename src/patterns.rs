//! Keyword and token pattern tables driving the garment heuristics
//!
//! All trigger terms live here as plain data so that new locales or keywords
//! can be added without touching classifier logic. The tables cover English
//! and Spanish throughout, plus the French fiber synonyms common in fashion
//! tooling exports. Classifiers depend only on the lookup methods of
//! [`PatternTables`], never on the literal word lists.

use regex::Regex;

/// Semantic category of a garment element keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentCategory {
    /// Fastening elements: zippers, buttons, snaps, velcro
    Closures,
    /// Garment body regions: sleeves, collars, cuffs, hems
    BodyParts,
    /// Construction features: seams, stitches, linings, darts
    Construction,
}

impl GarmentCategory {
    /// All categories, in detection order
    pub const ALL: [GarmentCategory; 3] = [
        GarmentCategory::Closures,
        GarmentCategory::BodyParts,
        GarmentCategory::Construction,
    ];

    /// Get a human-readable name for this category
    pub fn name(&self) -> &'static str {
        match self {
            GarmentCategory::Closures => "closures",
            GarmentCategory::BodyParts => "body_parts",
            GarmentCategory::Construction => "construction",
        }
    }
}

/// Keyword sets for one garment category
///
/// `primary` terms trigger a detection; `context` terms raise its confidence
/// when they co-occur in the same name; `exclusions` lower it, flagging the
/// hit as likely coincidental (a zipper *texture* is not a zipper).
#[derive(Debug, Clone, Copy)]
pub struct CategoryPatterns {
    /// Terms that trigger a detection
    pub primary: &'static [&'static str],
    /// Terms that corroborate a detection (+0.1 confidence each)
    pub context: &'static [&'static str],
    /// Terms that discredit a detection (-0.3 confidence each)
    pub exclusions: &'static [&'static str],
}

const CLOSURES: CategoryPatterns = CategoryPatterns {
    primary: &[
        "zipper",
        "button",
        "snap",
        "velcro",
        "closure",
        "fastener",
        "cremallera",
        "botón",
    ],
    context: &[
        "front", "back", "side", "pocket", "cuff", "collar", "frontal", "lateral",
    ],
    exclusions: &[
        "texture",
        "pattern",
        "decoration",
        "logo",
        "textura",
        "patrón",
        "decoración",
    ],
};

const BODY_PARTS: CategoryPatterns = CategoryPatterns {
    primary: &[
        "sleeve", "collar", "cuff", "hem", "waist", "chest", "back", "front", "manga", "cuello",
    ],
    context: &[
        "left",
        "right",
        "upper",
        "lower",
        "main",
        "body",
        "izquierda",
        "derecha",
    ],
    exclusions: &[
        "texture", "shadow", "light", "camera", "textura", "sombra", "luz",
    ],
};

const CONSTRUCTION: CategoryPatterns = CategoryPatterns {
    primary: &[
        "seam", "stitch", "binding", "trim", "lining", "dart", "pleat", "costura", "puntada",
    ],
    context: &[
        "construction",
        "sewing",
        "assembly",
        "join",
        "construcción",
        "cosido",
    ],
    exclusions: &[
        "decoration",
        "pattern",
        "print",
        "decoración",
        "patrón",
        "estampado",
    ],
};

/// Broad class of a fiber for reporting purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FiberClass {
    /// Plant or animal fibers (cotton, wool, silk, linen)
    NaturalFibers,
    /// Manufactured fibers (polyester, nylon, acrylic)
    SyntheticFibers,
    /// Elastic fibers and stretch blends
    StretchMaterials,
}

/// One named fiber with its multi-locale trigger terms
#[derive(Debug, Clone, Copy)]
pub struct FiberEntry {
    /// Canonical fiber name used in classifications
    pub name: &'static str,
    /// Fiber class
    pub class: FiberClass,
    /// Trigger terms across locales
    pub keywords: &'static [&'static str],
}

/// Fiber table in match-priority order: natural, synthetic, stretch
const FIBERS: &[FiberEntry] = &[
    FiberEntry {
        name: "cotton",
        class: FiberClass::NaturalFibers,
        keywords: &["cotton", "algodón", "coton"],
    },
    FiberEntry {
        name: "wool",
        class: FiberClass::NaturalFibers,
        keywords: &["wool", "lana", "laine"],
    },
    FiberEntry {
        name: "silk",
        class: FiberClass::NaturalFibers,
        keywords: &["silk", "seda", "soie"],
    },
    FiberEntry {
        name: "linen",
        class: FiberClass::NaturalFibers,
        keywords: &["linen", "lino", "lin"],
    },
    FiberEntry {
        name: "polyester",
        class: FiberClass::SyntheticFibers,
        keywords: &["polyester", "poliéster"],
    },
    FiberEntry {
        name: "nylon",
        class: FiberClass::SyntheticFibers,
        keywords: &["nylon", "nilón"],
    },
    FiberEntry {
        name: "acrylic",
        class: FiberClass::SyntheticFibers,
        keywords: &["acrylic", "acrílico"],
    },
    FiberEntry {
        name: "elastane",
        class: FiberClass::StretchMaterials,
        keywords: &["elastane", "elastano", "spandex", "lycra"],
    },
    FiberEntry {
        name: "elastic",
        class: FiberClass::StretchMaterials,
        keywords: &["elastic", "elástico", "stretch", "estirable"],
    },
];

/// Generator-string fragments that identify fashion/textile authoring tools
const FASHION_GENERATORS: &[&str] = &["clo", "fashion", "textile", "garment"];

/// Size token pattern family
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeTokenFamily {
    /// Standardized size letters and words: xs, m, xl, small, grande, ...
    ExplicitSizes,
    /// Numeric size declarations: "size 12", "talla 38"
    NumericSizes,
    /// Scale or variant suffixes: "scale 1.5", "variant 2"
    ScaleVariants,
}

impl SizeTokenFamily {
    /// Get a human-readable name for this family
    pub fn name(&self) -> &'static str {
        match self {
            SizeTokenFamily::ExplicitSizes => "explicit_sizes",
            SizeTokenFamily::NumericSizes => "numeric_sizes",
            SizeTokenFamily::ScaleVariants => "scale_variants",
        }
    }

    /// Confidence conferred by a match from this family
    ///
    /// Standardized tokens are less ambiguous than numeric or variant
    /// forms, which can collide with unrelated numbers in node names.
    pub fn confidence(&self) -> f64 {
        match self {
            SizeTokenFamily::ExplicitSizes => 0.8,
            SizeTokenFamily::NumericSizes | SizeTokenFamily::ScaleVariants => 0.6,
        }
    }
}

/// Compiled size token regexes, one per family
#[derive(Debug)]
pub struct SizePatterns {
    explicit: Regex,
    numeric: Regex,
    scale_variant: Regex,
}

impl SizePatterns {
    fn new() -> Self {
        // Patterns run against lowercased names with underscores folded to
        // spaces, so word boundaries split "size_m" into separate tokens.
        Self {
            explicit: Regex::new(
                r"\b(xs|s|m|l|xl|xxl|xxxl|small|medium|large|chico|mediano|grande)\b",
            )
            .expect("explicit size pattern is valid"),
            numeric: Regex::new(r"\b(size[_\s]*\d+|talla[_\s]*\d+|\d+[_\s]*size)\b")
                .expect("numeric size pattern is valid"),
            scale_variant: Regex::new(r"\b(scale[_\s]*[\d.]+|variant[_\s]*\d+|escala[_\s]*[\d.]+)\b")
                .expect("scale variant pattern is valid"),
        }
    }

    /// All families paired with their compiled regexes, in scan order
    pub fn families(&self) -> [(SizeTokenFamily, &Regex); 3] {
        [
            (SizeTokenFamily::ExplicitSizes, &self.explicit),
            (SizeTokenFamily::NumericSizes, &self.numeric),
            (SizeTokenFamily::ScaleVariants, &self.scale_variant),
        ]
    }
}

/// All pattern tables used by the analyzer, constructed per instance
///
/// Holding the tables in a value (rather than module-level globals) keeps
/// the analyzer free of process-wide state and lets future versions load
/// alternative tables without touching classification code.
#[derive(Debug)]
pub struct PatternTables {
    size_patterns: SizePatterns,
}

impl PatternTables {
    /// Create the default pattern tables
    pub fn new() -> Self {
        Self {
            size_patterns: SizePatterns::new(),
        }
    }

    /// Keyword sets for a garment category
    pub fn category(&self, category: GarmentCategory) -> &CategoryPatterns {
        match category {
            GarmentCategory::Closures => &CLOSURES,
            GarmentCategory::BodyParts => &BODY_PARTS,
            GarmentCategory::Construction => &CONSTRUCTION,
        }
    }

    /// The full fiber table in match-priority order
    pub fn fibers(&self) -> &'static [FiberEntry] {
        FIBERS
    }

    /// First fiber whose trigger terms occur in `text` (already lowercased)
    pub fn match_fiber(&self, text: &str) -> Option<&'static FiberEntry> {
        FIBERS
            .iter()
            .find(|entry| entry.keywords.iter().any(|kw| text.contains(kw)))
    }

    /// Accessibility-friendliness of a closure keyword, in [0, 1]
    ///
    /// Fixed expert-derived scale; keywords without an entry score 0 and
    /// are dropped from the accessibility feature list.
    pub fn closure_accessibility(&self, keyword: &str) -> f64 {
        match keyword {
            "velcro" | "magnetic" => 0.9,
            "snap" => 0.7,
            "zipper" | "cremallera" => 0.6,
            "toggle" => 0.5,
            "button" | "botón" => 0.4,
            "tie" => 0.3,
            _ => 0.0,
        }
    }

    /// Whether a generator string names a known fashion/textile tool
    pub fn is_fashion_generator(&self, generator: &str) -> bool {
        let generator = generator.to_lowercase();
        FASHION_GENERATORS.iter().any(|g| generator.contains(g))
    }

    /// The compiled size token patterns
    pub fn size_patterns(&self) -> &SizePatterns {
        &self.size_patterns
    }
}

impl Default for PatternTables {
    fn default() -> Self {
        Self::new()
    }
}
