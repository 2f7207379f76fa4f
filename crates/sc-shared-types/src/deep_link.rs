//! # Verify Deep Links
//!
//! QR codes printed on a batch carry `{app_base_url}/verify/{batch_id}`. A
//! scanner hands the decoded text back here and the batch id is the final
//! path segment. Text that is not a URL is treated as a bare batch id.

use crate::entities::BatchId;
use url::Url;

/// Path component that precedes the batch id in a verify link.
pub const VERIFY_PATH: &str = "verify";

/// Build the verify link encoded into a batch's QR code.
pub fn generate_deep_link(app_base_url: &str, batch_id: &BatchId) -> String {
    format!(
        "{}/{}/{}",
        app_base_url.trim_end_matches('/'),
        VERIFY_PATH,
        batch_id
    )
}

/// Extract the batch id from scanned or typed text.
pub fn parse_batch_id_from_link(text: &str) -> BatchId {
    let text = text.trim();
    let segment = Url::parse(text).ok().and_then(|url| {
        url.path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(str::to_string)
    });

    match segment {
        Some(id) => BatchId::new(id),
        None => BatchId::new(text),
    }
}
