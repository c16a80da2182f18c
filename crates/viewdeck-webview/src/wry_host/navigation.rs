//! Per-view navigation policy.
//!
//! Privileged views may only stay on local content (plus the origin of the
//! URL they were opened with). Sandboxed views may also browse http(s).
//! Script, data and file URLs are never followed.

use viewdeck_common::TrustLevel;

/// Local origins every view may load.
pub const LOCAL_PREFIXES: &[&str] = &[
    "viewdeck://",
    // WebView2 rewrites viewdeck://localhost/... to http://viewdeck.localhost/...
    "http://viewdeck.localhost",
    "about:blank",
];

const BLOCKED_SCHEMES: &[&str] = &["javascript:", "data:", "file:", "vbscript:"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPolicy {
    trust: TrustLevel,
    home_origin: Option<String>,
}

impl NavigationPolicy {
    /// Policy for a view built with `trust` whose first page is `initial_url`.
    pub fn new(trust: TrustLevel, initial_url: &str) -> Self {
        let initial = initial_url.trim().to_ascii_lowercase();
        let home_origin = origin_of(&initial)
            .filter(|o| o.starts_with("https://") || o.starts_with("http://"))
            .map(str::to_string);
        Self { trust, home_origin }
    }

    pub fn allows(&self, url: &str) -> bool {
        let url = url.trim();
        let lower = url.to_ascii_lowercase();
        if url.is_empty() || BLOCKED_SCHEMES.iter().any(|s| lower.starts_with(s)) {
            return false;
        }
        if LOCAL_PREFIXES.iter().any(|p| lower.starts_with(p)) {
            return true;
        }
        match self.trust {
            TrustLevel::Sandboxed => lower.starts_with("https://") || lower.starts_with("http://"),
            TrustLevel::Privileged => {
                self.home_origin.is_some() && origin_of(&lower) == self.home_origin.as_deref()
            }
        }
    }
}

/// `scheme://host[:port]` of a URL that has an authority.
fn origin_of(url: &str) -> Option<&str> {
    let scheme_end = url.find("://")?;
    let rest = &url[scheme_end + 3..];
    let host_len = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    if host_len == 0 {
        return None;
    }
    Some(&url[..scheme_end + 3 + host_len])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sandboxed() -> NavigationPolicy {
        NavigationPolicy::new(TrustLevel::Sandboxed, "https://example.com/start")
    }

    fn privileged() -> NavigationPolicy {
        NavigationPolicy::new(TrustLevel::Privileged, "viewdeck://localhost/loader/leftTabs.html")
    }

    #[test]
    fn local_content_is_always_allowed() {
        for policy in [sandboxed(), privileged()] {
            assert!(policy.allows("viewdeck://localhost/loader/gutter.html"));
            assert!(policy.allows("http://viewdeck.localhost/loader/gutter.html"));
            assert!(policy.allows("about:blank"));
        }
    }

    #[test]
    fn sandboxed_may_browse_the_web() {
        let policy = sandboxed();
        assert!(policy.allows("https://news.example.org/a?b=c"));
        assert!(policy.allows("http://localhost:8080"));
    }

    #[test]
    fn privileged_is_pinned_to_local_content() {
        let policy = privileged();
        assert!(!policy.allows("https://evil.com"));
        assert!(!policy.allows("http://localhost:8080"));
    }

    #[test]
    fn privileged_may_stay_on_its_home_origin() {
        let policy = NavigationPolicy::new(TrustLevel::Privileged, "https://chrome.example.com/tabs");
        assert!(policy.allows("https://chrome.example.com/other"));
        assert!(!policy.allows("https://chrome.example.com.evil.net/"));
        assert!(!policy.allows("https://other.example.com/"));
    }

    #[test]
    fn dangerous_schemes_are_blocked_for_everyone() {
        for policy in [sandboxed(), privileged()] {
            assert!(!policy.allows("javascript:alert(1)"));
            assert!(!policy.allows("JavaScript:alert(1)"));
            assert!(!policy.allows("data:text/html,<h1>x</h1>"));
            assert!(!policy.allows("file:///etc/passwd"));
            assert!(!policy.allows(""));
            assert!(!policy.allows("   "));
        }
    }

    #[test]
    fn other_schemes_are_blocked() {
        assert!(!sandboxed().allows("ftp://files.example.com"));
        assert!(!sandboxed().allows("not-a-url"));
    }

    #[test]
    fn origin_extraction() {
        assert_eq!(origin_of("https://a.com/x/y"), Some("https://a.com"));
        assert_eq!(origin_of("https://a.com:8443?q"), Some("https://a.com:8443"));
        assert_eq!(origin_of("https://a.com"), Some("https://a.com"));
        assert_eq!(origin_of("viewdeck:///x"), None);
        assert_eq!(origin_of("about:blank"), None);
    }
}
