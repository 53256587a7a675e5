//! Static reference data for the disease classes the classifier can emit.
//!
//! The table is compiled into the binary and never changes at runtime, so
//! [`lookup`] is a pure function of its key. Unknown labels are not an error;
//! they simply have no entry.

mod table;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use table::ENTRIES;

/// How much damage a condition does if left untreated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

impl FromStr for Severity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            _ => anyhow::bail!("Unknown severity: {}. Expected low, medium, or high.", s),
        }
    }
}

/// Reference entry for one classification label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiseaseInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub symptoms: &'static [&'static str],
    pub treatment: &'static [&'static str],
    pub prevention: &'static [&'static str],
    pub severity: Severity,
}

impl DiseaseInfo {
    /// Healthy-plant entries carry no symptoms.
    pub fn is_healthy(&self) -> bool {
        self.symptoms.is_empty()
    }
}

static INDEX: LazyLock<HashMap<&'static str, &'static DiseaseInfo>> =
    LazyLock::new(|| ENTRIES.iter().map(|(label, info)| (*label, info)).collect());

/// Looks up the reference entry for a label. Matching is exact.
pub fn lookup(label: &str) -> Option<&'static DiseaseInfo> {
    INDEX.get(label).copied()
}

/// All known labels, in table order.
pub fn labels() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|(label, _)| *label)
}
