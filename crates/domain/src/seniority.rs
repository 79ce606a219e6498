// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seniority classification and rank resolution.
//!
//! A person's seniority is stored by the directory as a free tag
//! (`"C_LEVEL"`, `"DIRECTOR"`, ...). Everything downstream works on the
//! ordinal rank resolved from that tag, where a lower number means a more
//! senior person.
//!
//! ## Rank Table
//!
//! | Rank | Tags |
//! |------|------|
//! | 0 | `FOUNDER_OWNER`, `C_LEVEL` |
//! | 1 | `EVP` |
//! | 2 | `SVP` |
//! | 3 | `VP` |
//! | 4 | `SENIOR_DIRECTOR` |
//! | 5 | `DIRECTOR` |
//! | 6 | `SENIOR_MANAGER` |
//! | 7 | `MANAGER` |
//! | 8 | `SENIOR_SPECIALIST`, `SPECIALIST` |
//! | 9 | `ASSOCIATE`, `COORDINATOR` |
//! | 10 | unknown or missing |
//! | 11 | `INTERN` |
//!
//! Resolution is total: it never fails and never touches I/O.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ordinal seniority rank. Lower is more senior.
pub type SeniorityRank = u8;

/// Rank assigned to a missing or unrecognized classification.
pub const UNKNOWN_RANK: SeniorityRank = 10;

/// Highest rank that still counts as executive.
///
/// Executives may stand as roots without a manager and are expanded by
/// default when rendered.
pub const EXECUTIVE_RANK_CUTOFF: SeniorityRank = 2;

/// The closed set of seniority classifications known to the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeniorityLevel {
    /// Company founder or owner.
    FounderOwner,
    /// Chief officers (CEO, CTO, CMO, ...).
    CLevel,
    /// Executive vice president.
    Evp,
    /// Senior vice president.
    Svp,
    /// Vice president.
    Vp,
    /// Senior director.
    SeniorDirector,
    /// Director.
    Director,
    /// Senior manager.
    SeniorManager,
    /// Manager.
    Manager,
    /// Senior individual contributor.
    SeniorSpecialist,
    /// Individual contributor.
    Specialist,
    /// Associate.
    Associate,
    /// Coordinator.
    Coordinator,
    /// Intern.
    Intern,
}

impl SeniorityLevel {
    /// Every classification, most senior first.
    pub const ALL: [Self; 14] = [
        Self::FounderOwner,
        Self::CLevel,
        Self::Evp,
        Self::Svp,
        Self::Vp,
        Self::SeniorDirector,
        Self::Director,
        Self::SeniorManager,
        Self::Manager,
        Self::SeniorSpecialist,
        Self::Specialist,
        Self::Associate,
        Self::Coordinator,
        Self::Intern,
    ];

    /// Returns the canonical tag for this classification.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FounderOwner => "FOUNDER_OWNER",
            Self::CLevel => "C_LEVEL",
            Self::Evp => "EVP",
            Self::Svp => "SVP",
            Self::Vp => "VP",
            Self::SeniorDirector => "SENIOR_DIRECTOR",
            Self::Director => "DIRECTOR",
            Self::SeniorManager => "SENIOR_MANAGER",
            Self::Manager => "MANAGER",
            Self::SeniorSpecialist => "SENIOR_SPECIALIST",
            Self::Specialist => "SPECIALIST",
            Self::Associate => "ASSOCIATE",
            Self::Coordinator => "COORDINATOR",
            Self::Intern => "INTERN",
        }
    }

    /// Returns the ordinal rank for this classification.
    #[must_use]
    pub const fn rank(&self) -> SeniorityRank {
        match self {
            Self::FounderOwner | Self::CLevel => 0,
            Self::Evp => 1,
            Self::Svp => 2,
            Self::Vp => 3,
            Self::SeniorDirector => 4,
            Self::Director => 5,
            Self::SeniorManager => 6,
            Self::Manager => 7,
            Self::SeniorSpecialist | Self::Specialist => 8,
            Self::Associate | Self::Coordinator => 9,
            Self::Intern => 11,
        }
    }

    /// Parses a stored tag leniently.
    ///
    /// Matching ignores case and surrounding whitespace, and reads `-` and
    /// spaces as `_` (so `"c-level"` and `"Senior Director"` both match).
    /// Returns `None` for anything outside the closed set.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let normalized: String = tag
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();

        Self::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == normalized)
    }
}

impl FromStr for SeniorityLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::UnknownSeniority(s.to_string()))
    }
}

impl std::fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolves an optional classification tag to its rank.
///
/// Missing and unrecognized tags resolve to [`UNKNOWN_RANK`], which sits
/// just above intern: an unclassified person is treated as junior.
#[must_use]
pub fn resolve_rank(classification: Option<&str>) -> SeniorityRank {
    classification
        .and_then(SeniorityLevel::parse)
        .map_or(UNKNOWN_RANK, |level| level.rank())
}

/// Returns whether a rank is within the executive tiers.
#[must_use]
pub const fn is_executive(rank: SeniorityRank) -> bool {
    rank <= EXECUTIVE_RANK_CUTOFF
}
