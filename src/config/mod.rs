use serde::{Deserialize, Serialize};

/// Runtime configuration injected by the hosting page.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// Reads `window.ENV.API_URL`, then `window.ENV.api_url`, then falls back
    /// to the page origin (the app is normally served next to its backend).
    pub fn from_window() -> Self {
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    for key in ["API_URL", "api_url"] {
                        if let Ok(api_url) = js_sys::Reflect::get(&env, &key.into()) {
                            if let Some(url_str) = api_url.as_string() {
                                return Self::with_api_url(url_str);
                            }
                        }
                    }
                }
            }

            if let Ok(origin) = window.location().origin() {
                return Self::with_api_url(origin);
            }
        }

        Self::default()
    }

    /// Full URL of an API resource, e.g. `endpoint_for("api/grafikons")`.
    pub fn endpoint_for(&self, path: &str) -> String {
        let base = self.api_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_for_default_is_same_origin() {
        let cfg = EnvConfig::default();
        assert_eq!(cfg.endpoint_for("api/grafikons"), "/api/grafikons");
    }

    #[test]
    fn test_endpoint_for_joins_with_single_slash() {
        let cfg = EnvConfig::with_api_url("http://localhost:8080/");
        assert_eq!(
            cfg.endpoint_for("/api/tabelas"),
            "http://localhost:8080/api/tabelas"
        );

        let cfg = EnvConfig::with_api_url("http://localhost:8080");
        assert_eq!(
            cfg.endpoint_for("api/tabelas"),
            "http://localhost:8080/api/tabelas"
        );
    }
}
