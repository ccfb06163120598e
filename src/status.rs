//! Inspection and fix status labeling
//!
//! Typed views of the integer status codes the application persists for
//! inspection steps and defect fixes, plus the localized display label for
//! each. Codes outside the known set decode to an explicit `Unknown`
//! variant instead of failing, so reports written by newer versions of the
//! application still render.

use crate::traits::Translate;
use serde::{Deserialize, Serialize};

/// Outcome of a single inspection step
///
/// Stored as a bare integer code in step records; `Unknown` keeps any
/// unrecognized code verbatim so it round-trips through serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum InspectionStatus {
    NotStarted,
    Completed,
    DamageFound,
    Skipped,
    /// Code outside the known set, kept verbatim
    Unknown(i32),
}

impl InspectionStatus {
    /// Decodes a persisted integer code; never fails
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => InspectionStatus::NotStarted,
            1 => InspectionStatus::Completed,
            2 => InspectionStatus::DamageFound,
            3 => InspectionStatus::Skipped,
            other => InspectionStatus::Unknown(other),
        }
    }

    /// The integer code this status is persisted as
    pub fn code(self) -> i32 {
        match self {
            InspectionStatus::NotStarted => 0,
            InspectionStatus::Completed => 1,
            InspectionStatus::DamageFound => 2,
            InspectionStatus::Skipped => 3,
            InspectionStatus::Unknown(code) => code,
        }
    }

    /// Untranslated source-language label
    pub fn label(self) -> &'static str {
        match self {
            InspectionStatus::NotStarted => "Not started",
            InspectionStatus::Completed => "Completed",
            InspectionStatus::DamageFound => "Damage found",
            InspectionStatus::Skipped => "Skipped",
            InspectionStatus::Unknown(_) => "Unknown",
        }
    }
}

impl From<i32> for InspectionStatus {
    fn from(code: i32) -> Self {
        InspectionStatus::from_code(code)
    }
}

impl From<InspectionStatus> for i32 {
    fn from(status: InspectionStatus) -> Self {
        status.code()
    }
}

/// Resolution of a defect found during inspection
///
/// Same persistence contract as [`InspectionStatus`]: bare integer codes,
/// unrecognized values kept in `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum FixStatus {
    Fixed,
    Postponed,
    NotRequired,
    NotFixed,
    /// Code outside the known set, kept verbatim
    Unknown(i32),
}

impl FixStatus {
    /// Decodes a persisted integer code; never fails
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => FixStatus::Fixed,
            1 => FixStatus::Postponed,
            2 => FixStatus::NotRequired,
            3 => FixStatus::NotFixed,
            other => FixStatus::Unknown(other),
        }
    }

    /// The integer code this status is persisted as
    pub fn code(self) -> i32 {
        match self {
            FixStatus::Fixed => 0,
            FixStatus::Postponed => 1,
            FixStatus::NotRequired => 2,
            FixStatus::NotFixed => 3,
            FixStatus::Unknown(code) => code,
        }
    }

    /// Untranslated source-language label
    pub fn label(self) -> &'static str {
        match self {
            FixStatus::Fixed => "Fixed",
            FixStatus::Postponed => "Postponed",
            FixStatus::NotRequired => "Not required",
            FixStatus::NotFixed => "Not fixed",
            FixStatus::Unknown(_) => "Unknown",
        }
    }
}

impl From<i32> for FixStatus {
    fn from(code: i32) -> Self {
        FixStatus::from_code(code)
    }
}

impl From<FixStatus> for i32 {
    fn from(status: FixStatus) -> Self {
        status.code()
    }
}

/// Returns the localized display label for an inspection status
///
/// # Arguments
/// - `status` - The status to label (use `code.into()` for a raw code)
/// - `translator` - Localization capability supplied by the host
pub fn status_text<T: Translate + ?Sized>(status: InspectionStatus, translator: &T) -> String {
    translator.translate(status.label())
}

/// Returns the localized display label for a fix status
///
/// # Arguments
/// - `status` - The status to label (use `code.into()` for a raw code)
/// - `translator` - Localization capability supplied by the host
pub fn fix_status_text<T: Translate + ?Sized>(status: FixStatus, translator: &T) -> String {
    translator.translate(status.label())
}

/// Returns the localized labels for the selectable fix statuses, in code order
///
/// Populates the fix-status dropdown in the defect editor. `Unknown` is a
/// decoding fallback, not a choice, and is not offered.
pub fn fix_status_options<T: Translate + ?Sized>(translator: &T) -> Vec<String> {
    [
        FixStatus::Fixed,
        FixStatus::Postponed,
        FixStatus::NotRequired,
        FixStatus::NotFixed,
    ]
    .iter()
    .map(|status| translator.translate(status.label()))
    .collect()
}
