//! URL decomposition and path arithmetic

use serde::{Deserialize, Serialize};
use url::Url;

/// Structured pieces of an absolute URL.
///
/// Only the pieces the inspector compares and displays are kept: scheme,
/// host, explicit port, and path. Query and fragment are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlComponents {
    /// URL scheme, without the trailing `://`
    pub scheme: String,
    /// Host name
    pub host: String,
    /// Explicit port, if the URL carries one
    pub port: Option<u16>,
    /// Absolute path, always starting with `/`
    pub path: String,
}

impl UrlComponents {
    /// Decompose an absolute URL.
    ///
    /// Returns `None` when the string does not parse as an absolute URL or
    /// has no host (e.g. `data:` or `webpack:///` URLs).
    pub fn parse(url: &str) -> Option<Self> {
        let parsed = Url::parse(url).ok()?;
        let host = parsed.host_str().filter(|host| !host.is_empty())?;
        Some(UrlComponents {
            scheme: parsed.scheme().to_string(),
            host: host.to_string(),
            port: parsed.port(),
            path: parsed.path().to_string(),
        })
    }

    /// The host with its explicit port appended, as shown to users.
    pub fn host_with_port(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{}", self.host, port),
            None => self.host.clone(),
        }
    }
}

/// Compute the relative path from `base_path` to `path`.
///
/// Both arguments must be absolute (`/`-rooted) paths. Shared leading
/// components are removed, then one `..` is emitted per remaining
/// non-empty base component, then the remaining `path` components follow.
pub fn relative_path(path: &str, base_path: &str) -> String {
    let path_components: Vec<&str> = path.split('/').collect();
    let base_components: Vec<&str> = base_path.split('/').collect();

    let shared = path_components
        .iter()
        .zip(base_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut final_components: Vec<&str> = Vec::new();
    for component in &base_components[shared..] {
        if !component.is_empty() {
            final_components.push("..");
        }
    }
    final_components.extend(&path_components[shared..]);
    final_components.join("/")
}

/// Extract the file extension from a URL's last path component.
///
/// Returns `None` when the last component has no dot or ends with one.
/// Query string and fragment are ignored.
pub fn file_extension_for_url(url: &str) -> Option<String> {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        // Not an absolute URL; treat everything before '?' / '#' as the path.
        Err(_) => {
            let end = url.find(['?', '#']).unwrap_or(url.len());
            url[..end].to_string()
        }
    };

    let last_component = path.rsplit('/').next().unwrap_or("");
    let dot = last_component.rfind('.')?;
    if dot == last_component.len() - 1 {
        return None;
    }
    Some(last_component[dot + 1..].to_string())
}
