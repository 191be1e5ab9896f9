//! Canonical label tokens and the exported column title.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Which labeling control a stored label value corresponds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// The slot holds the unset sentinel (empty string).
    Unset,

    /// The first canonical token.
    Primary,

    /// The second canonical token.
    Secondary,

    /// Any other non-empty label text.
    Custom,
}

/// The two canonical label tokens plus the title of the exported column.
///
/// The tokens are user-configurable; the defaults label rows as natural vs.
/// conventional phrasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    /// Label applied by the primary control (key `1`).
    pub primary: CompactString,

    /// Label applied by the secondary control (key `2`).
    pub secondary: CompactString,

    /// Title written into the header row of exports.
    pub column_title: CompactString,
}

impl Default for LabelSet {
    fn default() -> Self {
        Self {
            primary: CompactString::const_new("natural"),
            secondary: CompactString::const_new("conventional"),
            column_title: CompactString::const_new("annotation"),
        }
    }
}

impl LabelSet {
    /// Classify a stored label value against the canonical tokens.
    pub fn classify(&self, label: &str) -> LabelKind {
        if label.is_empty() {
            LabelKind::Unset
        } else if label == self.primary {
            LabelKind::Primary
        } else if label == self.secondary {
            LabelKind::Secondary
        } else {
            LabelKind::Custom
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_against_default_tokens() {
        let set = LabelSet::default();

        assert_eq!(set.classify(""), LabelKind::Unset);
        assert_eq!(set.classify("natural"), LabelKind::Primary);
        assert_eq!(set.classify("conventional"), LabelKind::Secondary);
        assert_eq!(set.classify("slang"), LabelKind::Custom);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        let set = LabelSet::default();
        assert_eq!(set.classify("Natural"), LabelKind::Custom);
    }
}
