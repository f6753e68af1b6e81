//! Per-source markup extractors.
//!
//! One extractor per upstream source. Selector rules live here and nowhere
//! else; when a site changes its markup, only its extractor file changes.

mod scloud;
mod scloud_mirror;

pub use scloud::ScloudExtractor;
pub use scloud_mirror::ScloudMirrorExtractor;
