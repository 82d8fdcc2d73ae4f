//! User agent and accept headers

/// User agent identifying this tool and its version
pub fn default_user_agent() -> String {
    format!("people-search/{}", crate::VERSION)
}

/// Standard accept header for JSON requests
pub fn accept_json() -> &'static str {
    "application/json"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_agent() {
        let ua = default_user_agent();
        assert!(ua.starts_with("people-search/"));
        assert!(ua.ends_with(crate::VERSION));
    }
}
