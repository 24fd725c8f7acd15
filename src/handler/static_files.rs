//! Static file serving module
//!
//! Resolves request paths inside the asset root, applies the SPA routing
//! fallback, and builds the file responses.

use crate::config::AssetsConfig;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve a request path from the asset root
///
/// Resolution order: the file itself, the index document for directory
/// paths, then the SPA fallback for extension-less paths that resolve to
/// nothing. Misses become 404.
pub async fn serve(ctx: &RequestContext<'_>, assets: &AssetsConfig) -> Response<Full<Bytes>> {
    match load_asset(assets, ctx.path).await {
        Some((content, content_type)) => respond_with_content(&content, content_type, ctx),
        None => http::build_404_response(),
    }
}

/// Build the 200/304 response for resolved content
fn respond_with_content(
    content: &[u8],
    content_type: &'static str,
    ctx: &RequestContext<'_>,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(content);
    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }
    http::build_file_response(content, content_type, &etag, ctx.is_head)
}

/// Load content for a request path, applying index and SPA fallback rules
pub async fn load_asset(
    assets: &AssetsConfig,
    path: &str,
) -> Option<(Vec<u8>, &'static str)> {
    let root = Path::new(&assets.root);

    // The root must resolve; without it nothing can be served
    let root_canonical = match root.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Asset root not found or inaccessible '{}': {e}",
                assets.root
            ));
            return None;
        }
    };

    let relative = clean_request_path(path);
    let mut file_path = root.join(&relative);

    // Directory requests resolve through the index document
    if relative.is_empty() || file_path.is_dir() {
        file_path = file_path.join(&assets.index_file);
    }

    match read_within_root(&root_canonical, &file_path, path).await {
        Some(content) => {
            let content_type =
                mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
            Some((content, content_type))
        }
        None if assets.spa_fallback && wants_spa_fallback(path) => {
            // Unresolvable extension-less path: hand the index document to
            // the client so its router can take over
            let index_path = root.join(&assets.index_file);
            let content = read_within_root(&root_canonical, &index_path, path).await?;
            Some((content, mime::get_content_type(Some("html"))))
        }
        None => None,
    }
}

/// Read a file after verifying it stays inside the asset root
async fn read_within_root(
    root_canonical: &Path,
    file_path: &Path,
    request_path: &str,
) -> Option<Vec<u8>> {
    // Missing files are ordinary 404s; canonicalize doubles as the
    // existence check
    let file_canonical = file_path.canonicalize().ok()?;
    if !file_canonical.starts_with(root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            request_path,
            file_canonical.display()
        ));
        return None;
    }

    match fs::read(&file_canonical).await {
        Ok(content) => Some(content),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_canonical.display()
            ));
            None
        }
    }
}

/// Strip the leading slash and neutralize parent-directory segments
pub fn clean_request_path(path: &str) -> String {
    path.trim_start_matches('/').replace("..", "")
}

/// SPA fallback applies only to paths without any `.` character
///
/// Asset requests (`/static/app.js`, `/favicon.ico`) always contain a dot;
/// client-side routes (`/dashboard`, `/settings/profile`) do not.
pub fn wants_spa_fallback(path: &str) -> bool {
    !path.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_request_path() {
        assert_eq!(clean_request_path("/index.html"), "index.html");
        assert_eq!(clean_request_path("/static/app.js"), "static/app.js");
        assert_eq!(clean_request_path("/"), "");
        assert_eq!(clean_request_path("/../etc/passwd"), "/etc/passwd");
        assert_eq!(clean_request_path("/a/../../b"), "a///b");
    }

    #[test]
    fn test_wants_spa_fallback_routes() {
        assert!(wants_spa_fallback("/dashboard"));
        assert!(wants_spa_fallback("/settings/profile"));
        assert!(wants_spa_fallback("/"));
    }

    #[test]
    fn test_wants_spa_fallback_assets() {
        assert!(!wants_spa_fallback("/static/app.js"));
        assert!(!wants_spa_fallback("/favicon.ico"));
        assert!(!wants_spa_fallback("/manifest.json"));
        // A dot anywhere in the path disables the fallback, matching the
        // whole-path rule rather than a filename-only rule
        assert!(!wants_spa_fallback("/v1.2/dashboard"));
    }

    fn build_fixture(name: &str) -> (std::path::PathBuf, AssetsConfig) {
        let root = std::env::temp_dir().join(format!(
            "content-facade-test-{}-{name}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(root.join("static")).unwrap();
        std::fs::write(root.join("index.html"), b"<!DOCTYPE html><title>app</title>").unwrap();
        std::fs::write(root.join("static/app.js"), b"console.log(1);").unwrap();
        let assets = AssetsConfig {
            root: root.to_string_lossy().into_owned(),
            index_file: "index.html".to_string(),
            spa_fallback: true,
        };
        (root, assets)
    }

    #[tokio::test]
    async fn test_load_asset_resolves_files_and_index() {
        let (root, assets) = build_fixture("resolve");

        let (content, content_type) = load_asset(&assets, "/static/app.js").await.unwrap();
        assert_eq!(content, b"console.log(1);");
        assert_eq!(content_type, "application/javascript");

        let (content, content_type) = load_asset(&assets, "/").await.unwrap();
        assert!(content.starts_with(b"<!DOCTYPE html>"));
        assert_eq!(content_type, "text/html; charset=utf-8");

        let _ = std::fs::remove_dir_all(root);
    }

    #[tokio::test]
    async fn test_load_asset_spa_fallback() {
        let (root, assets) = build_fixture("fallback");

        // Extension-less miss resolves to the index document
        let (content, content_type) = load_asset(&assets, "/dashboard").await.unwrap();
        assert!(content.starts_with(b"<!DOCTYPE html>"));
        assert_eq!(content_type, "text/html; charset=utf-8");

        // A missing asset with an extension stays a miss
        assert!(load_asset(&assets, "/static/gone.js").await.is_none());

        // Fallback disabled: extension-less misses 404 as well
        let no_fallback = AssetsConfig {
            spa_fallback: false,
            ..assets
        };
        assert!(load_asset(&no_fallback, "/dashboard").await.is_none());

        let _ = std::fs::remove_dir_all(root);
    }

    #[tokio::test]
    async fn test_load_asset_blocks_traversal() {
        let (root, assets) = build_fixture("traversal");

        assert!(load_asset(&assets, "/../../etc/passwd").await.is_none());

        // Encoded dots are not decoded: the raw path has no `.`, so the
        // miss lands on the SPA fallback instead of the filesystem
        let (content, _) = load_asset(&assets, "/%2e%2e/secret").await.unwrap();
        assert!(content.starts_with(b"<!DOCTYPE html>"));

        let _ = std::fs::remove_dir_all(root);
    }
}
