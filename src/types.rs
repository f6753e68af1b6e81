//! Core types for listing-site search results and source identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum title length in a rendered menu label before truncation.
const LABEL_TITLE_LIMIT: usize = 50;

/// Configured upstream listing sources.
///
/// Priority is determined by position in [`crate::SearchConfig::sources`],
/// not by the enum itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceId {
    /// Primary listing site with the current card markup.
    Scloud,
    /// Mirror still serving the older result-card markup.
    ScloudMirror,
}

impl SourceId {
    /// Returns the human-readable name of this source.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scloud => "scloud",
            Self::ScloudMirror => "scloud-mirror",
        }
    }

    /// Returns all available source variants.
    pub fn all() -> &'static [SourceId] {
        &[Self::Scloud, Self::ScloudMirror]
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single search result extracted from a listing source.
///
/// Immutable once cached. `detail_ref` is an opaque pointer (path or
/// absolute URL) to the result's detail page, resolved only on selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Result title as shown on the listing page.
    pub title: String,
    /// Human-readable file size, when the source exposes one.
    pub size: Option<String>,
    /// Detail-page reference; may be relative to the source base URL.
    pub detail_ref: String,
    /// Which source produced this record.
    pub source: SourceId,
}

impl ResultRecord {
    /// Render a menu label for this record: `"N. Title (size)"`.
    ///
    /// Titles longer than 50 characters are cut to 47 plus an ellipsis so
    /// labels fit on an inline keyboard button. `position` is 1-based.
    pub fn label(&self, position: usize) -> String {
        let title: String = if self.title.chars().count() > LABEL_TITLE_LIMIT {
            let cut: String = self.title.chars().take(LABEL_TITLE_LIMIT - 3).collect();
            format!("{cut}...")
        } else {
            self.title.clone()
        };

        match &self.size {
            Some(size) => format!("{position}. {title} ({size})"),
            None => format!("{position}. {title}"),
        }
    }
}

/// Final outcome of a resolved selection: the actionable download link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Download {
    /// Title of the selected result.
    pub title: String,
    /// File size, when known.
    pub size: Option<String>,
    /// Absolute download URL.
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, size: Option<&str>) -> ResultRecord {
        ResultRecord {
            title: title.into(),
            size: size.map(Into::into),
            detail_ref: "/file/abc".into(),
            source: SourceId::Scloud,
        }
    }

    #[test]
    fn source_id_display() {
        assert_eq!(SourceId::Scloud.to_string(), "scloud");
        assert_eq!(SourceId::ScloudMirror.to_string(), "scloud-mirror");
    }

    #[test]
    fn source_id_all() {
        let all = SourceId::all();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&SourceId::Scloud));
        assert!(all.contains(&SourceId::ScloudMirror));
    }

    #[test]
    fn source_id_serde_round_trip() {
        let json = serde_json::to_string(&SourceId::ScloudMirror).expect("serialize");
        let decoded: SourceId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, SourceId::ScloudMirror);
    }

    #[test]
    fn result_record_serde_round_trip() {
        let rec = record("Inception 2010 1080p", Some("2.1 GB"));
        let json = serde_json::to_string(&rec).expect("serialize");
        let decoded: ResultRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded.title, "Inception 2010 1080p");
        assert_eq!(decoded.size.as_deref(), Some("2.1 GB"));
        assert_eq!(decoded.source, SourceId::Scloud);
    }

    #[test]
    fn label_with_size() {
        let rec = record("Inception", Some("2.1 GB"));
        assert_eq!(rec.label(1), "1. Inception (2.1 GB)");
    }

    #[test]
    fn label_without_size() {
        let rec = record("Inception", None);
        assert_eq!(rec.label(3), "3. Inception");
    }

    #[test]
    fn label_truncates_long_titles() {
        let long = "A".repeat(80);
        let rec = record(&long, None);
        let label = rec.label(1);
        assert!(label.starts_with("1. "));
        assert!(label.ends_with("..."));
        // "1. " + 47 chars + "..."
        assert_eq!(label.chars().count(), 3 + 47 + 3);
    }

    #[test]
    fn label_keeps_exactly_fifty_chars() {
        let exact = "B".repeat(50);
        let rec = record(&exact, None);
        assert_eq!(rec.label(2), format!("2. {exact}"));
    }
}
