//! Mirror source with the older result-card markup.
//!
//! The mirror wraps each result in `a.block` around a
//! `div.result-card.rounded-lg.p-4` card with the title in `div.mb-3`.
//! No size badge in this layout. Detail pages use a full-width
//! `a.block.w-full` anchor for the download link, whose href may be
//! base-relative.

use crate::source::{Extractor, SourceDescriptor};
use crate::types::{ResultRecord, SourceId};
use scraper::{Html, Selector};

/// Extractor for the mirror's legacy markup.
pub struct ScloudMirrorExtractor;

impl Extractor for ScloudMirrorExtractor {
    fn extract_results(&self, html: &str, descriptor: &SourceDescriptor) -> Vec<ResultRecord> {
        parse_search_page(html, descriptor)
    }

    fn extract_download_link(&self, html: &str) -> Option<String> {
        parse_download_page(html)
    }
}

/// Parse the legacy search layout. Cards without the inner result-card
/// wrapper or without a title are skipped.
pub(crate) fn parse_search_page(html: &str, descriptor: &SourceDescriptor) -> Vec<ResultRecord> {
    let document = Html::parse_document(html);

    let Ok(anchor_sel) = Selector::parse("a.block") else {
        return Vec::new();
    };
    let Ok(card_sel) = Selector::parse("div.result-card.rounded-lg.p-4") else {
        return Vec::new();
    };
    let Ok(title_sel) = Selector::parse("div.mb-3") else {
        return Vec::new();
    };

    let mut records = Vec::new();

    for anchor in document.select(&anchor_sel) {
        let card = match anchor.select(&card_sel).next() {
            Some(el) => el,
            None => continue,
        };

        let title = match card.select(&title_sel).next() {
            Some(el) => el.text().collect::<String>().trim().to_string(),
            None => continue,
        };
        if title.is_empty() {
            continue;
        }

        let detail_ref = match anchor.value().attr("href") {
            Some(href) if !href.is_empty() => href.to_string(),
            _ => continue,
        };

        records.push(ResultRecord {
            title,
            size: None,
            detail_ref,
            source: descriptor.id,
        });
    }

    tracing::debug!(count = records.len(), source = %SourceId::ScloudMirror, "results parsed");
    records
}

/// Find the full-width download anchor on a legacy detail page.
pub(crate) fn parse_download_page(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let link_sel = Selector::parse("a.block.w-full").ok()?;

    document
        .select(&link_sel)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
        .filter(|href| !href.is_empty())
}
