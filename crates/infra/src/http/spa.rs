//! Static SPA serving
//!
//! Files that exist under the static directory are served with a long-lived
//! immutable cache policy (bundles are content-hashed). Any other path falls
//! back to the entry document, which must always be revalidated so a new
//! deployment is picked up on the next navigation.

use std::path::Path;

use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::Router;
use helpdesk_domain::constants::SPA_ENTRY_DOCUMENT;
use helpdesk_domain::{HelpdeskError, Result};
use tower::ServiceBuilder;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::{SetResponseHeader, SetResponseHeaderLayer};

/// `Cache-Control` applied to the entry document
pub const ENTRY_CACHE_CONTROL: &str = "no-cache";

/// `Cache-Control` value for static assets.
pub fn asset_cache_control(max_age_secs: u64) -> String {
    format!("public, max-age={max_age_secs}, immutable")
}

/// Router serving the SPA bundle in `static_dir`.
///
/// Mount it as the fallback of the application router so API routes take
/// precedence.
///
/// # Errors
/// Returns `HelpdeskError::Config` if the cache header cannot be encoded.
pub fn spa_router<S>(static_dir: &Path, asset_max_age_secs: u64) -> Result<Router<S>>
where
    S: Clone + Send + Sync + 'static,
{
    let asset_policy = HeaderValue::try_from(asset_cache_control(asset_max_age_secs))
        .map_err(|e| HelpdeskError::Config(format!("Invalid asset cache header: {e}")))?;

    let entry = SetResponseHeader::overriding(
        ServeFile::new(static_dir.join(SPA_ENTRY_DOCUMENT)),
        CACHE_CONTROL,
        HeaderValue::from_static(ENTRY_CACHE_CONTROL),
    );

    let files = ServeDir::new(static_dir)
        .append_index_html_on_directories(false)
        .fallback(entry.clone());

    let assets = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(CACHE_CONTROL, asset_policy))
        .service(files);

    // Served by name too, without the asset policy
    Ok(Router::new()
        .route_service("/", entry.clone())
        .route_service(&format!("/{SPA_ENTRY_DOCUMENT}"), entry)
        .fallback_service(assets))
}

/// Whether the entry document is present, for startup diagnostics.
pub fn entry_document_exists(static_dir: &Path) -> bool {
    static_dir.join(SPA_ENTRY_DOCUMENT).is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_cache_control_one_year() {
        assert_eq!(
            asset_cache_control(helpdesk_domain::constants::ONE_YEAR_SECS),
            "public, max-age=31536000, immutable"
        );
    }
}
