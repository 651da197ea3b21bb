//! Backend endpoint configuration.
//!
//! The base URL is resolved once, at compile time, from the `API_URL`
//! environment variable with a local-development fallback. Everything that
//! talks to the backend goes through [`endpoint`] or [`join_download_url`]
//! rather than hardcoding addresses.

/// Base URL of the calculation backend.
pub fn api_base() -> &'static str {
    option_env!("API_URL").unwrap_or("http://localhost:8000")
}

/// Resolves an API path (starting with `/`) against the configured base.
pub fn endpoint(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Resolves a backend-returned file fragment against a base URL.
///
/// The backend sometimes returns fragments with a leading slash while the
/// base may or may not carry a trailing one; both are normalized so the
/// joined URL never contains a doubled slash.
pub fn join_download_url(base: &str, fragment: &str) -> String {
    let clean = fragment.strip_prefix('/').unwrap_or(fragment);
    if base.ends_with('/') {
        format!("{base}{clean}")
    } else {
        format!("{base}/{clean}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_dedupes_leading_slash() {
        assert_eq!(
            join_download_url("http://localhost:8000", "/files/erros.xlsx"),
            "http://localhost:8000/files/erros.xlsx"
        );
    }

    #[test]
    fn join_handles_trailing_slash_base() {
        assert_eq!(
            join_download_url("http://localhost:8000/", "/files/erros.xlsx"),
            "http://localhost:8000/files/erros.xlsx"
        );
    }

    #[test]
    fn join_handles_bare_fragment() {
        assert_eq!(
            join_download_url("http://localhost:8000", "files/erros.xlsx"),
            "http://localhost:8000/files/erros.xlsx"
        );
    }
}
