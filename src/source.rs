//! Source descriptors and the pluggable extractor seam.
//!
//! A [`Source`] pairs an immutable [`SourceDescriptor`] (endpoint layout)
//! with an [`Extractor`] (markup rules). The pairing is composed statically
//! by [`sources_for`]; there is no runtime name-based dispatch. Sites change
//! their markup, so the extractor contract is stable while the concrete
//! selector rules in [`crate::extractors`] are expected to churn.

use crate::extractors::{ScloudExtractor, ScloudMirrorExtractor};
use crate::types::{ResultRecord, SourceId};
use url::Url;

/// Immutable description of one upstream listing endpoint.
///
/// Defined at process start; the priority of a source is its position in
/// the configured source list.
#[derive(Debug, Clone)]
pub struct SourceDescriptor {
    /// Which source this descriptor belongs to.
    pub id: SourceId,
    /// Base endpoint, e.g. `https://new3.scloud.ninja`.
    pub base_url: String,
    /// Search path template appended to the base, e.g. `/?search=`.
    pub search_path: String,
}

impl SourceDescriptor {
    /// Render the search URL for a query, percent-encoding the query text.
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}{}{}",
            self.base_url,
            self.search_path,
            urlencoding::encode(query)
        )
    }

    /// Resolve a possibly-relative detail reference against the base URL.
    ///
    /// Absolute references pass through untouched. Relative ones are joined
    /// with [`Url::join`]; if the base itself does not parse, falls back to
    /// plain concatenation with slash normalisation.
    pub fn absolutize(&self, reference: &str) -> String {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return reference.to_string();
        }

        match Url::parse(&self.base_url).and_then(|base| base.join(reference)) {
            Ok(joined) => joined.to_string(),
            Err(_) => format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                reference.trim_start_matches('/')
            ),
        }
    }
}

/// Markup-extraction rules for one listing source.
///
/// Implementations must be total: malformed or unexpected markup yields an
/// empty (or partial) result list, never an error. Entries that cannot be
/// parsed are skipped individually.
pub trait Extractor: Send + Sync {
    /// Extract result records from a fetched search page.
    fn extract_results(&self, html: &str, descriptor: &SourceDescriptor) -> Vec<ResultRecord>;

    /// Find the single qualifying download anchor on a fetched detail page.
    ///
    /// Returns `None` when the page parsed but no such anchor was present.
    fn extract_download_link(&self, html: &str) -> Option<String>;
}

/// A statically composed descriptor/extractor pair.
pub struct Source {
    /// Endpoint layout for this source.
    pub descriptor: SourceDescriptor,
    /// Markup rules for this source.
    pub extractor: Box<dyn Extractor>,
}

impl Source {
    /// Pair a descriptor with its extractor.
    pub fn new(descriptor: SourceDescriptor, extractor: Box<dyn Extractor>) -> Self {
        Self {
            descriptor,
            extractor,
        }
    }
}

/// Build the source list for the given ids, in the given priority order.
pub fn sources_for(ids: &[SourceId]) -> Vec<Source> {
    ids.iter().map(|id| build_source(*id)).collect()
}

/// Construct the default descriptor/extractor pair for one source.
fn build_source(id: SourceId) -> Source {
    match id {
        SourceId::Scloud => Source::new(
            SourceDescriptor {
                id,
                base_url: "https://new3.scloud.ninja".into(),
                search_path: "/?search=".into(),
            },
            Box::new(ScloudExtractor),
        ),
        SourceId::ScloudMirror => Source::new(
            SourceDescriptor {
                id,
                base_url: "https://mirror.scloud.ninja".into(),
                search_path: "/?search=".into(),
            },
            Box::new(ScloudMirrorExtractor),
        ),
    }
}
