//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! The names below are the column names of the training data, in the
//! order the model consumes them.
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the vector
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Message metadata (0-3) ===
    "Trust Score",                  // 0: Sender trust, copied from input
    "Suspicion Score",              // 1: Raw suspicion, copied from input
    "Adjusted Suspicion Score",     // 2: Suspicion + level boost, capped at 1.0
    "Suspicion Encoded",            // 3: Ordinal level (none=0 .. high=3)

    // === Readability (4-8) ===
    "flesch_reading_ease",          // 4
    "gunning_fog",                  // 5
    "smog_index",                   // 6
    "automated_readability_index",  // 7
    "dale_chall_score",             // 8
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 9;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 of the version and ordered names.
/// Used to detect layout mismatches at runtime
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Complete layout information for serialization/logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_COUNT, 9);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_layout_hash_consistency() {
        let hash1 = layout_hash();
        let hash2 = layout_hash();
        assert_eq!(hash1, hash2);
        assert_ne!(hash1, 0);
    }

    #[test]
    fn test_layout_hash_covers_version_and_names() {
        let mut hasher = Hasher::new();
        hasher.update(&[FEATURE_VERSION]);
        for name in FEATURE_LAYOUT {
            hasher.update(name.as_bytes());
            hasher.update(&[0]);
        }
        assert_eq!(layout_hash(), hasher.finalize());

        let mut reordered = Hasher::new();
        reordered.update(&[FEATURE_VERSION]);
        for name in FEATURE_LAYOUT.iter().rev() {
            reordered.update(name.as_bytes());
            reordered.update(&[0]);
        }
        assert_ne!(layout_hash(), reordered.finalize());
    }

    #[test]
    fn test_layout_positions() {
        assert_eq!(FEATURE_LAYOUT[0], "Trust Score");
        assert_eq!(FEATURE_LAYOUT[3], "Suspicion Encoded");
        assert_eq!(FEATURE_LAYOUT[8], "dale_chall_score");
    }

    #[test]
    fn test_layout_info() {
        let info = LayoutInfo::current();
        assert_eq!(info.version, FEATURE_VERSION);
        assert_eq!(info.hash, layout_hash());
        assert_eq!(info.feature_names.len(), FEATURE_COUNT);
    }
}
