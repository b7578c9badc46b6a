//! Report model shared by the extractors and renderers.

use serde::{Serialize, Serializer};
use strum_macros::EnumIter;

/// The four attribute groups of a report, in display order.
///
/// Serializes as the group's human-readable heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum GroupKind {
    /// Hostname, protocol, port, path, query and fragment summary.
    Basic,
    /// Structural breakdown of the serialized URL.
    Components,
    /// Hostname split into subdomain, main domain, and TLD.
    Domain,
    /// Heuristic security flags.
    Security,
}

impl GroupKind {
    /// Human-readable group heading.
    pub fn title(&self) -> &'static str {
        match self {
            GroupKind::Basic => "Basic Info",
            GroupKind::Components => "URL Components",
            GroupKind::Domain => "Domain Info",
            GroupKind::Security => "Security Check",
        }
    }
}

impl Serialize for GroupKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.title())
    }
}

/// Tri-state status tag attached to rendered values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueStatus {
    /// The value indicates a safe or expected condition.
    Good,
    /// The value indicates something worth a second look.
    Warning,
    /// The value indicates an insecure condition.
    Bad,
}

impl ValueStatus {
    /// Derives the status tag from a rendered value.
    ///
    /// First match wins: `✅`/`Secure` is good, `⚠️`/`Custom` is warning,
    /// `❌`/`Insecure` is bad. Values matching none of these carry no tag.
    pub fn from_value(value: &str) -> Option<Self> {
        if value.contains("✅") || value.contains("Secure") {
            Some(ValueStatus::Good)
        } else if value.contains("⚠️") || value.contains("Custom") {
            Some(ValueStatus::Warning)
        } else if value.contains("❌") || value.contains("Insecure") {
            Some(ValueStatus::Bad)
        } else {
            None
        }
    }
}

/// A single label/value row of a report group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Fixed human-readable label.
    pub label: &'static str,
    /// Computed display value.
    pub value: String,
    /// Status tag derived from the value, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ValueStatus>,
}

impl Attribute {
    /// Builds a row, deriving the status tag from the value.
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        let status = ValueStatus::from_value(&value);
        Attribute {
            label,
            value,
            status,
        }
    }
}

/// One labeled group of attribute rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeGroup {
    /// Which of the four groups this is.
    #[serde(rename = "group")]
    pub kind: GroupKind,
    /// Rows in display order.
    pub entries: Vec<Attribute>,
}

/// The complete result of one analysis run.
///
/// Immutable once constructed; a new run produces a fresh report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// The normalized URL string the parser consumed.
    #[serde(rename = "url")]
    pub normalized: String,
    /// The four attribute groups in display order: basic info, components,
    /// domain info, security.
    pub groups: Vec<AttributeGroup>,
}

impl AnalysisReport {
    /// Returns the group of the given kind.
    pub fn group(&self, kind: GroupKind) -> Option<&AttributeGroup> {
        self.groups.iter().find(|g| g.kind == kind)
    }

    /// Looks up a value by group and label.
    pub fn value(&self, kind: GroupKind, label: &str) -> Option<&str> {
        self.group(kind)?
            .entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.as_str())
    }

    /// Looks up the status tag of a value by group and label.
    pub fn status(&self, kind: GroupKind, label: &str) -> Option<ValueStatus> {
        self.group(kind)?
            .entries
            .iter()
            .find(|e| e.label == label)
            .and_then(|e| e.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_good_from_check_mark() {
        assert_eq!(ValueStatus::from_value("✅ Yes"), Some(ValueStatus::Good));
    }

    #[test]
    fn test_status_good_from_secure_word() {
        assert_eq!(ValueStatus::from_value("Secure"), Some(ValueStatus::Good));
    }

    #[test]
    fn test_status_warning() {
        assert_eq!(
            ValueStatus::from_value("⚠️ Detected"),
            Some(ValueStatus::Warning)
        );
        assert_eq!(
            ValueStatus::from_value("⚠️ Custom"),
            Some(ValueStatus::Warning)
        );
    }

    #[test]
    fn test_status_bad() {
        assert_eq!(ValueStatus::from_value("❌ No"), Some(ValueStatus::Bad));
    }

    #[test]
    fn test_status_insecure_is_bad_not_good() {
        // "Insecure" must not be classified as good: the "Secure" substring
        // check is capitalized, so it does not match inside "Insecure"
        assert_eq!(
            ValueStatus::from_value("❌ Insecure"),
            Some(ValueStatus::Bad)
        );
        assert_eq!(
            ValueStatus::from_value("Insecure"),
            Some(ValueStatus::Bad)
        );
    }

    #[test]
    fn test_status_untagged() {
        assert_eq!(ValueStatus::from_value("example.com"), None);
        assert_eq!(ValueStatus::from_value("443"), None);
        assert_eq!(ValueStatus::from_value("🌐 Present"), None);
    }

    #[test]
    fn test_attribute_new_derives_status() {
        let attr = Attribute::new("HTTPS", "✅ Secure");
        assert_eq!(attr.status, Some(ValueStatus::Good));

        let attr = Attribute::new("Website", "example.com");
        assert_eq!(attr.status, None);
    }

    #[test]
    fn test_group_kind_titles() {
        assert_eq!(GroupKind::Basic.title(), "Basic Info");
        assert_eq!(GroupKind::Components.title(), "URL Components");
        assert_eq!(GroupKind::Domain.title(), "Domain Info");
        assert_eq!(GroupKind::Security.title(), "Security Check");
    }
}
