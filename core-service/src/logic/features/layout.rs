//! Feature Layout - Classifier Input Schema
//!
//! **This file controls the order of fields fed to the classifier.**
//!
//! ## Rules:
//! 1. Add / remove / reorder a field → increment FEATURE_VERSION
//! 2. The schema artifact shipped with the model must list the same names
//!    in the same order, otherwise startup is refused.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Field names in the exact order the classifier consumes them
pub const FEATURE_LAYOUT: &[&str] = &[
    "Type_Encoded",      // 0: L=0, M=1, H=2
    "Rotational speed",  // 1: rpm
    "Torque",            // 2: Nm
    "Tool wear",         // 3: min
    "Air_Temp_C",        // 4: air temperature
    "Proc_Temp_C",       // 5: process temperature
    "Power_W",           // 6: torque * angular velocity
];

/// Total number of classifier input fields
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 7;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute CRC32 hash of a layout (version byte + NUL-separated names)
pub fn compute_layout_hash<S: AsRef<str>>(names: &[S]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[FEATURE_VERSION]);

    for name in names {
        hasher.update(name.as_ref().as_bytes());
        hasher.update(&[0]);
    }

    hasher.finalize()
}

/// Hash of the built-in layout
pub fn layout_hash() -> u32 {
    compute_layout_hash(FEATURE_LAYOUT)
}

/// Layout summary for startup logging and status reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
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

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when a schema artifact doesn't match the built-in layout
#[derive(Debug, Clone)]
pub struct LayoutMismatchError {
    pub expected_hash: u32,
    pub actual_hash: u32,
    pub expected: Vec<String>,
    pub actual: Vec<String>,
}

impl std::fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Feature layout mismatch: expected {:?} (hash: {:08x}), got {:?} (hash: {:08x})",
            self.expected, self.expected_hash, self.actual, self.actual_hash
        )
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Validate that a schema (field names, in order) equals the built-in layout
pub fn validate_layout<S: AsRef<str>>(names: &[S]) -> Result<(), LayoutMismatchError> {
    let same = names.len() == FEATURE_COUNT
        && names.iter().zip(FEATURE_LAYOUT).all(|(a, b)| a.as_ref() == *b);

    if !same {
        return Err(LayoutMismatchError {
            expected_hash: layout_hash(),
            actual_hash: compute_layout_hash(names),
            expected: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
            actual: names.iter().map(|s| s.as_ref().to_string()).collect(),
        });
    }

    Ok(())
}

/// Get field index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

// ============================================================================
// TESTS
// ============================================================================
