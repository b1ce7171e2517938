//! Fetching raw source bytes: local files, or HTTP with an on-disk cache

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use nucdata_config::ResolvedSource;

use crate::error::{source_err, Result};

/// Read the raw document text for a resolved source
///
/// Local paths are read directly. URLs are served from the on-disk download
/// cache (spec §6 "Persisted state") when present, otherwise fetched over
/// HTTP and written into the cache keyed by URL.
pub fn fetch(source: &ResolvedSource) -> Result<String> {
    match source {
        ResolvedSource::Path(path) => Ok(fs::read_to_string(path)?),
        ResolvedSource::Url(url) => fetch_url(url),
    }
}

fn fetch_url(url: &str) -> Result<String> {
    let cache_path = download_cache_path(url);

    if let Some(path) = &cache_path {
        if let Ok(cached) = fs::read_to_string(path) {
            log::debug!("nuclide source cache hit for {url}");
            return Ok(cached);
        }
    }

    log::debug!("fetching nuclide source from {url}");
    let response = minreq::get(url).send().map_err(|e| source_err(url, e))?;
    let body = response
        .as_str()
        .map_err(|e| source_err(url, e))?
        .to_string();

    if let Some(path) = &cache_path {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let _ = fs::write(path, &body);
    }

    Ok(body)
}

/// The on-disk cache location for a given URL, keyed by a filesystem-safe
/// encoding of the URL itself
fn download_cache_path(url: &str) -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "nucdata")?;
    let key = url.replace(['/', ':', '?', '&', '='], "_");
    Some(dirs.cache_dir().join("nuclide-sources").join(key))
}
