use serde::Serialize;

/// Industry rule-of-thumb coverage levels for estimating when no
/// separation data is available.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CoverageGuideline {
    pub coverage_pct: u32,
    pub level: &'static str,
    pub typical_use: &'static str,
}

pub const COVERAGE_GUIDELINES: &[CoverageGuideline] = &[
    CoverageGuideline {
        coverage_pct: 100,
        level: "Solid area",
        typical_use: "Backgrounds, solid colors",
    },
    CoverageGuideline {
        coverage_pct: 80,
        level: "Heavy coverage",
        typical_use: "Deep colors, graphics",
    },
    CoverageGuideline {
        coverage_pct: 50,
        level: "Medium coverage",
        typical_use: "Halftones, photographs",
    },
    CoverageGuideline {
        coverage_pct: 40,
        level: "Light-medium",
        typical_use: "Pastel colors",
    },
    CoverageGuideline {
        coverage_pct: 25,
        level: "Light coverage",
        typical_use: "Highlights, tints",
    },
    CoverageGuideline {
        coverage_pct: 10,
        level: "Very light",
        typical_use: "Shadows, gradients",
    },
];
