//! Region-name resolution for the slide template.
//!
//! Region names are string identities baked into the template by its
//! designer. They are resolved to a closed [`RegionKind`] once per region,
//! so every handled case is an explicit match arm and unknown names are a
//! checked outcome rather than a default branch.

use phf::phf_map;
use serde::Serialize;

/// The closed set of template regions the exporter knows how to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionKind {
    /// Work item key
    Key,
    /// One-line summary
    Summary,
    /// Due date
    Date,
    /// Delivery phase
    Phase,
    /// Status name, tinted by status category
    Status,
    /// Overall health flag, tinted by its value
    OverallHealth,
    /// Structured four-section summary
    StructuredSummary,
    /// Contact / CTA / SW-lead table
    TopTable,
    /// Bounded milestone grid
    Milestones,
}

static REGIONS: phf::Map<&'static str, RegionKind> = phf_map! {
    "Key Placeholder" => RegionKind::Key,
    "Summary Placeholder" => RegionKind::Summary,
    "Date Placeholder" => RegionKind::Date,
    "Phase Placeholder" => RegionKind::Phase,
    "Status Placeholder" => RegionKind::Status,
    "Overall Health Placeholder" => RegionKind::OverallHealth,
    "PXT Summary Placeholder" => RegionKind::StructuredSummary,
    "Top Table" => RegionKind::TopTable,
    "Milestone Table" => RegionKind::Milestones,
};

/// Resolve a template region name. Lookup is exact and case-sensitive.
pub fn resolve(name: &str) -> Option<RegionKind> {
    REGIONS.get(name).copied()
}
