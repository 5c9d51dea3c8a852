use url::Url;

// ---------------------------------------------------------------------------
// SiteConfig — env-var driven configuration with defaults
// ---------------------------------------------------------------------------

pub const ENV_PORT: &str = "TESELA_PORT";
pub const ENV_FORM_ENDPOINT: &str = "FORM_ENDPOINT";
pub const ENV_SITE_URL: &str = "SITE_URL";
pub const ENV_MIN_DWELL_MS: &str = "ANTIBOT_MIN_DWELL_MS";
pub const ENV_ASSETS_DIR: &str = "ASSETS_DIR";

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SITE_URL: &str = "https://tesela40.es";
/// The waitlist form posts to the site origin by default, Netlify-forms style.
pub const DEFAULT_FORM_ENDPOINT: &str = "https://tesela40.es/";
/// Submissions arriving faster than this after the form was rendered are
/// treated as automated.
pub const DEFAULT_MIN_DWELL_MS: i64 = 3_000;
pub const DEFAULT_ASSETS_DIR: &str = "assets";

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub port: u16,
    /// External form-backend endpoint accepting urlencoded POSTs.
    pub form_endpoint: Url,
    /// Canonical site URL, embedded in share links.
    pub site_url: String,
    pub min_dwell_ms: i64,
    pub assets_dir: String,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self {
            port: port_from_env().unwrap_or(DEFAULT_PORT),
            form_endpoint: form_endpoint_from_env(),
            site_url: site_url_from_env(),
            min_dwell_ms: min_dwell_ms_from_env(),
            assets_dir: std::env::var(ENV_ASSETS_DIR)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_string()),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Listen port: `TESELA_PORT` → `PORT` → `None`.
pub fn port_from_env() -> Option<u16> {
    for k in [ENV_PORT, "PORT"] {
        if let Ok(v) = std::env::var(k) {
            if let Ok(p) = v.trim().parse::<u16>() {
                return Some(p);
            }
        }
    }
    None
}

/// Form-backend endpoint: `FORM_ENDPOINT` → site default.
///
/// An unparseable value logs a warning and falls back to the default; the
/// site still serves without the form path.
fn form_endpoint_from_env() -> Url {
    if let Ok(raw) = std::env::var(ENV_FORM_ENDPOINT) {
        let raw = raw.trim();
        if !raw.is_empty() {
            match Url::parse(raw) {
                Ok(url) => return url,
                Err(e) => {
                    tracing::warn!(
                        "invalid {} value {:?}: {} — using default endpoint",
                        ENV_FORM_ENDPOINT,
                        raw,
                        e
                    );
                }
            }
        }
    }
    // The default is a compile-time constant and always parses.
    Url::parse(DEFAULT_FORM_ENDPOINT).unwrap()
}

/// Canonical site URL: `SITE_URL` → `https://tesela40.es`.
fn site_url_from_env() -> String {
    std::env::var(ENV_SITE_URL)
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
}

/// Minimum dwell time: `ANTIBOT_MIN_DWELL_MS` → 3000.
fn min_dwell_ms_from_env() -> i64 {
    std::env::var(ENV_MIN_DWELL_MS)
        .ok()
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_MIN_DWELL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_parses() {
        let url = Url::parse(DEFAULT_FORM_ENDPOINT).unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn default_config_is_complete() {
        let cfg = SiteConfig::from_env();
        assert!(!cfg.site_url.is_empty());
        assert!(cfg.min_dwell_ms > 0);
        assert!(!cfg.assets_dir.is_empty());
    }
}
