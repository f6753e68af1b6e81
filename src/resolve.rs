//! Second-stage resolution: detail-page fetch and download-link extraction.
//!
//! Given a cached [`ResultRecord`], fetch its detail page and run the
//! source's link rule. The two failure modes stay distinct so callers can
//! message them differently: [`ResolveError::NotFound`] (page loaded, no
//! qualifying anchor, pick another result) versus [`ResolveError::Fetch`]
//! (transient network trouble, retry later).

use crate::error::ResolveError;
use crate::http;
use crate::source::Source;
use crate::types::{Download, ResultRecord};

/// Resolve a record's detail reference to the final download link.
///
/// Performs exactly one fetch. The detail reference is absolutized against
/// the source base first; a relative download href on the detail page is
/// absolutized the same way.
///
/// # Errors
///
/// [`ResolveError::Fetch`] if the detail page cannot be fetched,
/// [`ResolveError::NotFound`] if it loads but has no qualifying anchor.
pub async fn resolve_download(
    client: &reqwest::Client,
    source: &Source,
    record: &ResultRecord,
) -> Result<Download, ResolveError> {
    let detail_url = source.descriptor.absolutize(&record.detail_ref);
    tracing::trace!(url = %detail_url, "fetching detail page");

    let html = http::fetch_html(client, &detail_url)
        .await
        .map_err(|e| ResolveError::Fetch(e.to_string()))?;

    let link = source
        .extractor
        .extract_download_link(&html)
        .ok_or(ResolveError::NotFound)?;

    let link = source.descriptor.absolutize(&link);
    tracing::debug!(title = %record.title, "download link resolved");

    Ok(Download {
        title: record.title.clone(),
        size: record.size.clone(),
        link,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::http::build_client;
    use crate::source::{sources_for, SourceDescriptor};
    use crate::types::SourceId;

    #[tokio::test]
    async fn fetch_failure_maps_to_fetch_variant() {
        let config = SearchConfig {
            timeout_seconds: 1,
            ..Default::default()
        };
        let client = build_client(&config).expect("client");

        let mut sources = sources_for(&[SourceId::Scloud]);
        let source = &mut sources[0];
        // Reserved TEST-NET-1 address; nothing listens there.
        source.descriptor = SourceDescriptor {
            id: SourceId::Scloud,
            base_url: "http://192.0.2.1:9".into(),
            search_path: "/?search=".into(),
        };

        let record = ResultRecord {
            title: "Inception".into(),
            size: None,
            detail_ref: "/file/abc".into(),
            source: SourceId::Scloud,
        };

        let result = resolve_download(&client, &sources[0], &record).await;
        assert!(matches!(result, Err(ResolveError::Fetch(_))));
    }
}
