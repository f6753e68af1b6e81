//! Primary listing source, current card markup.
//!
//! Result cards are `a.block` anchors carrying the detail path in `href`,
//! with the title in `div.mb-3` and a size badge in `span.px-3`. The detail
//! page exposes the download link as the single `a[target="_blank"]` anchor.

use crate::source::{Extractor, SourceDescriptor};
use crate::types::{ResultRecord, SourceId};
use scraper::{Html, Selector};

/// Extractor for the primary source's card markup.
pub struct ScloudExtractor;

impl Extractor for ScloudExtractor {
    fn extract_results(&self, html: &str, descriptor: &SourceDescriptor) -> Vec<ResultRecord> {
        parse_search_page(html, descriptor)
    }

    fn extract_download_link(&self, html: &str) -> Option<String> {
        parse_download_page(html)
    }
}

/// Parse a search-results page into records.
///
/// Total: entries missing a title or href are skipped, anything else
/// unexpected yields an empty list. Extracted as a free function for
/// testability with mock HTML.
pub(crate) fn parse_search_page(html: &str, descriptor: &SourceDescriptor) -> Vec<ResultRecord> {
    let document = Html::parse_document(html);

    let Ok(card_sel) = Selector::parse("a.block") else {
        return Vec::new();
    };
    let Ok(title_sel) = Selector::parse("div.mb-3") else {
        return Vec::new();
    };
    let Ok(size_sel) = Selector::parse("span.px-3") else {
        return Vec::new();
    };

    let mut records = Vec::new();

    for card in document.select(&card_sel) {
        let title = match card.select(&title_sel).next() {
            Some(el) => el.text().collect::<String>().trim().to_string(),
            None => continue,
        };
        if title.is_empty() {
            continue;
        }

        let detail_ref = match card.value().attr("href") {
            Some(href) if !href.is_empty() => href.to_string(),
            _ => continue,
        };

        let size = card
            .select(&size_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty());

        records.push(ResultRecord {
            title,
            size,
            detail_ref,
            source: descriptor.id,
        });
    }

    tracing::debug!(count = records.len(), source = %SourceId::Scloud, "results parsed");
    records
}

/// Find the download anchor on a detail page.
pub(crate) fn parse_download_page(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let link_sel = Selector::parse(r#"a[target="_blank"]"#).ok()?;

    document
        .select(&link_sel)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
        .filter(|href| !href.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> SourceDescriptor {
        SourceDescriptor {
            id: SourceId::Scloud,
            base_url: "https://new3.scloud.ninja".into(),
            search_path: "/?search=".into(),
        }
    }

    const MOCK_SEARCH_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<a class="block" href="/file/abc123">
    <div class="result-card rounded-lg p-4">
        <div class="mb-3">Inception 2010 1080p BluRay</div>
        <span class="px-3">2.1 GB</span>
    </div>
</a>
<a class="block" href="/file/def456">
    <div class="result-card rounded-lg p-4">
        <div class="mb-3">Inception 2010 720p WEBRip</div>
        <span class="px-3">950 MB</span>
    </div>
</a>
<a class="block" href="/file/ghi789">
    <div class="result-card rounded-lg p-4">
        <div class="mb-3">Inception Soundtrack</div>
    </div>
</a>
</body>
</html>"#;

    #[test]
    fn parse_mock_search_page() {
        let records = parse_search_page(MOCK_SEARCH_HTML, &descriptor());
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].title, "Inception 2010 1080p BluRay");
        assert_eq!(records[0].size.as_deref(), Some("2.1 GB"));
        assert_eq!(records[0].detail_ref, "/file/abc123");
        assert_eq!(records[0].source, SourceId::Scloud);

        // Third card has no size badge; size is best-effort.
        assert_eq!(records[2].size, None);
        assert_eq!(records[2].detail_ref, "/file/ghi789");
    }

    #[test]
    fn parse_preserves_page_order() {
        let records = parse_search_page(MOCK_SEARCH_HTML, &descriptor());
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Inception 2010 1080p BluRay",
                "Inception 2010 720p WEBRip",
                "Inception Soundtrack"
            ]
        );
    }

    #[test]
    fn parse_skips_cards_without_title() {
        let html = r#"
<a class="block" href="/file/x"><div class="result-card"></div></a>
<a class="block" href="/file/y"><div class="mb-3">Valid</div></a>"#;
        let records = parse_search_page(html, &descriptor());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Valid");
    }

    #[test]
    fn parse_skips_cards_without_href() {
        let html = r#"<a class="block"><div class="mb-3">No href</div></a>"#;
        assert!(parse_search_page(html, &descriptor()).is_empty());
    }

    #[test]
    fn parse_empty_page_returns_empty() {
        assert!(parse_search_page("<html><body></body></html>", &descriptor()).is_empty());
    }

    #[test]
    fn parse_garbage_returns_empty() {
        assert!(parse_search_page("not html at all %%%", &descriptor()).is_empty());
    }

    const MOCK_DETAIL_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<a href="/back">Back</a>
<a target="_blank" href="https://cdn.example.com/inception.mkv">Download</a>
</body>
</html>"#;

    #[test]
    fn parse_download_page_finds_anchor() {
        assert_eq!(
            parse_download_page(MOCK_DETAIL_HTML),
            Some("https://cdn.example.com/inception.mkv".to_string())
        );
    }

    #[test]
    fn parse_download_page_none_when_absent() {
        let html = r#"<html><body><a href="/other">Other</a></body></html>"#;
        assert_eq!(parse_download_page(html), None);
    }

    #[test]
    fn extractor_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScloudExtractor>();
    }
}
