/// Key under which the auth layer stores the JWT.
pub(crate) const AUTH_TOKEN_KEY: &str = "jhi-authenticationToken";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// The auth layer may persist the token JSON-encoded (`"\"abc\""`) or raw.
pub(crate) fn normalize_token(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let token = serde_json::from_str::<String>(raw).unwrap_or_else(|_| raw.to_string());
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Bearer token from "remember me" (local) storage, falling back to the session.
pub(crate) fn load_auth_token() -> Option<String> {
    [local_storage(), session_storage()]
        .into_iter()
        .flatten()
        .find_map(|s| s.get_item(AUTH_TOKEN_KEY).ok().flatten())
        .and_then(|raw| normalize_token(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_token_accepts_json_quoted_value() {
        assert_eq!(normalize_token("\"abc.def\""), Some("abc.def".to_string()));
    }

    #[test]
    fn test_normalize_token_accepts_raw_value() {
        assert_eq!(normalize_token(" abc.def "), Some("abc.def".to_string()));
    }

    #[test]
    fn test_normalize_token_rejects_empty() {
        assert_eq!(normalize_token(""), None);
        assert_eq!(normalize_token("\"\""), None);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_load_auth_token_prefers_local_storage() {
        let local = local_storage().expect("localStorage");
        let session = session_storage().expect("sessionStorage");
        let _ = local.remove_item(AUTH_TOKEN_KEY);
        let _ = session.remove_item(AUTH_TOKEN_KEY);
        assert!(load_auth_token().is_none());

        session.set_item(AUTH_TOKEN_KEY, "\"s1\"").expect("set session token");
        assert_eq!(load_auth_token().as_deref(), Some("s1"));

        local.set_item(AUTH_TOKEN_KEY, "l1").expect("set local token");
        assert_eq!(load_auth_token().as_deref(), Some("l1"));

        let _ = local.remove_item(AUTH_TOKEN_KEY);
        let _ = session.remove_item(AUTH_TOKEN_KEY);
    }
}
