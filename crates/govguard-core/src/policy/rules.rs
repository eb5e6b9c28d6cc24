//! Restriction rule set.

use serde::Serialize;

/// Terms matched against proposal title/summary and parameter-change payloads.
pub const LEVERAGE_RESTRICTED_KEYWORDS: &[&str] = &[
    "perpetual",
    "margin",
    "leverage",
    "futures",
    "derivatives",
    "perp",
    "leveraged",
    "borrow",
    "lending",
    "collateral",
];

/// Module identifiers matched against software-upgrade payloads.
pub const LEVERAGE_RESTRICTED_MODULES: &[&str] = &[
    "perpetuals",
    "margins",
    "leverage",
    "futures",
    "derivatives",
    "lending",
    "borrowing",
];

/// Restriction rule set.
///
/// Entries are expected lower-case; the evaluator lower-cases the scanned
/// content, not the entries. List order is the check order, so the first
/// listed term that matches is the one reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Policy {
    /// Master switch. When false every proposal is allowed.
    pub enabled: bool,
    pub restricted_keywords: Vec<String>,
    pub restricted_modules: Vec<String>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            enabled: true,
            restricted_keywords: to_owned_list(LEVERAGE_RESTRICTED_KEYWORDS),
            restricted_modules: to_owned_list(LEVERAGE_RESTRICTED_MODULES),
        }
    }
}

impl Policy {
    /// Default lists with enforcement switched off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Append keywords after the existing ones.
    pub fn with_extra_keywords<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.restricted_keywords.extend(extra.into_iter().map(Into::into));
        self
    }

    /// Append module identifiers after the existing ones.
    pub fn with_extra_modules<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.restricted_modules.extend(extra.into_iter().map(Into::into));
        self
    }
}

fn to_owned_list(src: &[&str]) -> Vec<String> {
    src.iter().map(|s| s.to_string()).collect()
}
