// src/links/resolve.rs
// =============================================================================
// This module turns free-text profile fields into safe, typed links.
//
// The "website" field on a profile is unvalidated text: it may be a full
// URL, a bare domain, a LinkedIn address, or garbage. The resolvers here
// classify it with an ordered rule list - first match wins, no backtracking:
//
// 1. Empty/whitespace website text  -> both resolvers return None
// 2. Coerce the text to an absolute URL (scheme present; known-host prefix
//    like "github.com/..."; bare domain with a dot and no whitespace)
// 3. LinkedIn host wins over portfolio classification; extract a handle
//    from the path (/in/<handle>, else first segment, else "Profile")
// 4. Any other valid coerced URL is the portfolio link
// 5. Only if the website text held no LinkedIn reference, scan the bio for
//    an embedded LinkedIn URL (optional scheme and www., case-insensitive)
// 6. Nothing found -> None; other fields are never used for guessing
//
// Every function here is total: malformed input yields None, never an error.
// =============================================================================

use std::fmt;
use url::Url;

// Social networks we can recognize in profile text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Linkedin,
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SocialProvider::Linkedin => write!(f, "linkedin"),
        }
    }
}

// A detected social-network profile reference
#[derive(Debug, Clone, PartialEq)]
pub struct SocialRef {
    pub provider: SocialProvider,
    /// Link target, coerced to an absolute URL but otherwise as written
    pub url: String,
    /// Account handle, or "Profile" when the URL has no usable path
    pub handle: String,
}

/// Resolves the profile's website text to a portfolio URL.
///
/// Returns the text coerced to an absolute URL, unchanged beyond an added
/// `https://` prefix where needed. LinkedIn addresses are never a portfolio;
/// they belong to `resolve_social_ref`.
pub fn resolve_portfolio_url(website_text: &str) -> Option<String> {
    let text = website_text.trim();
    if text.is_empty() {
        return None;
    }

    let (display, url) = coerce_url(text)?;
    if is_linkedin_host(&url) {
        return None;
    }
    Some(display)
}

/// Extracts a LinkedIn reference from the website text, falling back to a
/// scan of the bio.
///
/// Empty website text short-circuits to None without scanning the bio, and
/// `company` is deliberately not consulted - only these two fields may
/// produce a social link.
pub fn resolve_social_ref(website_text: &str, bio: Option<&str>) -> Option<SocialRef> {
    let text = website_text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some((display, url)) = coerce_url(text) {
        if is_linkedin_host(&url) {
            return Some(linkedin_ref(display, &url));
        }
    }

    // The website text held no LinkedIn reference; try the bio
    let token = find_linkedin_token(bio?)?;
    let (display, url) = coerce_url(&token)?;
    if is_linkedin_host(&url) {
        return Some(linkedin_ref(display, &url));
    }
    None
}

/// Company field rule: a value starting with '@' names a GitHub organization
/// and links to it; anything else renders as plain text (None here).
///
/// Independent of the LinkedIn/portfolio resolution above.
pub fn company_link(company: &str) -> Option<String> {
    let org = company.strip_prefix('@')?;
    if org.is_empty() {
        return None;
    }
    Some(format!("https://github.com/{}", org))
}

// Coerces URL-ish text to an absolute URL
//
// Returns the display string (the text as written, plus an added scheme
// where needed) together with its parsed form. The parsed form is only used
// for validation and host/path inspection - re-serializing a Url would
// alter the text (e.g. add a trailing slash), breaking the contract that
// already-absolute URLs pass through unchanged.
fn coerce_url(text: &str) -> Option<(String, Url)> {
    if has_http_scheme(text) {
        // Malformed despite the scheme: unusable
        let url = Url::parse(text).ok()?;
        return Some((text.to_string(), url));
    }

    let known_host = text.starts_with("github.com/") || text.starts_with("linkedin.com/");
    let domain_like = text.contains('.') && !text.contains(char::is_whitespace);
    if known_host || domain_like {
        let candidate = format!("https://{}", text);
        let url = Url::parse(&candidate).ok()?;
        return Some((candidate, url));
    }

    None
}

fn has_http_scheme(text: &str) -> bool {
    let lowered = text.to_ascii_lowercase();
    lowered.starts_with("http://") || lowered.starts_with("https://")
}

fn is_linkedin_host(url: &Url) -> bool {
    url.host_str()
        .map(|host| host.to_ascii_lowercase().contains("linkedin.com"))
        .unwrap_or(false)
}

fn linkedin_ref(display: String, url: &Url) -> SocialRef {
    SocialRef {
        provider: SocialProvider::Linkedin,
        handle: linkedin_handle(url),
        url: display,
    }
}

// Handle extraction from a LinkedIn URL path
//
// "/in/<handle>" profiles yield <handle>; other formats yield the first
// path segment; a bare host yields the "Profile" sentinel (show the link,
// no handle known). Query and fragment never leak into the handle.
fn linkedin_handle(url: &Url) -> String {
    let segments: Vec<&str> = url
        .path_segments()
        .map(|parts| parts.filter(|segment| !segment.is_empty()).collect())
        .unwrap_or_default();

    if let Some(position) = segments.iter().position(|s| s.eq_ignore_ascii_case("in")) {
        if let Some(handle) = segments.get(position + 1) {
            return (*handle).to_string();
        }
    }

    segments
        .first()
        .map(|segment| (*segment).to_string())
        .unwrap_or_else(|| "Profile".to_string())
}

// Finds a LinkedIn URL embedded in free text
//
// Looks for a whitespace-delimited token containing "linkedin.com/" plus at
// least one path character, keeping an optional scheme and "www." prefix.
// Surrounding punctuation (parentheses, trailing periods) is stripped.
fn find_linkedin_token(text: &str) -> Option<String> {
    for word in text.split_whitespace() {
        let trimmed = word.trim_matches(|c: char| {
            matches!(c, '(' | ')' | '[' | ']' | '<' | '>' | '"' | '\'' | ',' | ';' | '!' | '?' | '.')
        });

        // ASCII lowering keeps byte offsets aligned with `trimmed`
        let lowered = trimmed.to_ascii_lowercase();
        let at = match lowered.find("linkedin.com/") {
            Some(index) => index,
            None => continue,
        };

        // Require at least one character after "linkedin.com/"
        if at + "linkedin.com/".len() >= lowered.len() {
            continue;
        }

        let mut start = at;
        if lowered[..start].ends_with("www.") {
            start -= "www.".len();
        }
        for scheme in ["https://", "http://"] {
            if lowered[..start].ends_with(scheme) {
                start -= scheme.len();
                break;
            }
        }

        return Some(trimmed[start..].to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- portfolio resolution -----------------------------------------------

    #[test]
    fn test_absolute_url_passes_through_unchanged() {
        let url = "https://jane.dev/portfolio?tab=projects";
        assert_eq!(resolve_portfolio_url(url), Some(url.to_string()));

        let http = "http://example.com/page";
        assert_eq!(resolve_portfolio_url(http), Some(http.to_string()));
    }

    #[test]
    fn test_bare_domain_is_coerced() {
        assert_eq!(
            resolve_portfolio_url("example.com"),
            Some("https://example.com".to_string())
        );
        assert_eq!(
            resolve_portfolio_url("jane.dev/about"),
            Some("https://jane.dev/about".to_string())
        );
    }

    #[test]
    fn test_github_prefix_is_coerced() {
        assert_eq!(
            resolve_portfolio_url("github.com/octocat"),
            Some("https://github.com/octocat".to_string())
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert_eq!(resolve_portfolio_url("not a url"), None);
        assert_eq!(resolve_portfolio_url("no-dots-here"), None);
        assert_eq!(resolve_portfolio_url("has spaces.com oops"), None);
    }

    #[test]
    fn test_empty_input_resolves_to_nothing() {
        assert_eq!(resolve_portfolio_url(""), None);
        assert_eq!(resolve_portfolio_url("   "), None);
        assert_eq!(resolve_social_ref("", None), None);
        assert_eq!(resolve_social_ref("   ", Some("see linkedin.com/in/x")), None);
    }

    #[test]
    fn test_linkedin_is_never_a_portfolio() {
        assert_eq!(resolve_portfolio_url("https://www.linkedin.com/in/janedoe"), None);
        assert_eq!(resolve_portfolio_url("linkedin.com/in/janedoe"), None);
    }

    // --- social resolution --------------------------------------------------

    #[test]
    fn test_bare_linkedin_path_yields_exact_ref() {
        let social = resolve_social_ref("linkedin.com/in/janedoe", None).unwrap();
        assert_eq!(social.provider, SocialProvider::Linkedin);
        assert_eq!(social.handle, "janedoe");
        assert_eq!(social.url, "https://linkedin.com/in/janedoe");
    }

    #[test]
    fn test_in_path_handle_extraction() {
        let social =
            resolve_social_ref("https://www.linkedin.com/in/jane-doe-123/?trk=nav", None).unwrap();
        assert_eq!(social.handle, "jane-doe-123");
        // URL is kept as written, query string and all
        assert_eq!(social.url, "https://www.linkedin.com/in/jane-doe-123/?trk=nav");
    }

    #[test]
    fn test_non_in_path_uses_first_segment() {
        let social = resolve_social_ref("https://linkedin.com/company/acme", None).unwrap();
        assert_eq!(social.handle, "company");
    }

    #[test]
    fn test_host_only_linkedin_uses_sentinel_handle() {
        let social = resolve_social_ref("linkedin.com", None).unwrap();
        assert_eq!(social.handle, "Profile");
    }

    #[test]
    fn test_bio_scan_finds_embedded_linkedin() {
        let bio = "Rust developer. Say hi: https://www.linkedin.com/in/janedoe!";
        let social = resolve_social_ref("example.com", Some(bio)).unwrap();
        assert_eq!(social.handle, "janedoe");
        assert_eq!(social.url, "https://www.linkedin.com/in/janedoe");

        // The same profile still gets its portfolio link
        assert_eq!(
            resolve_portfolio_url("example.com"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_bio_scan_without_scheme() {
        let bio = "Find me on linkedin.com/in/someone around the web";
        let social = resolve_social_ref("jane.dev", Some(bio)).unwrap();
        assert_eq!(social.handle, "someone");
        assert_eq!(social.url, "https://linkedin.com/in/someone");
    }

    #[test]
    fn test_bio_scan_requires_a_path() {
        // A bare host mention in prose is not a profile reference
        let bio = "I spend too much time on linkedin.com these days";
        assert_eq!(resolve_social_ref("example.com", Some(bio)), None);
    }

    #[test]
    fn test_direct_field_wins_over_bio() {
        let bio = "Also at linkedin.com/in/from-bio";
        let social = resolve_social_ref("linkedin.com/in/from-website", Some(bio)).unwrap();
        assert_eq!(social.handle, "from-website");
    }

    #[test]
    fn test_no_linkedin_anywhere() {
        assert_eq!(resolve_social_ref("example.com", Some("just a bio")), None);
        assert_eq!(resolve_social_ref("example.com", None), None);
    }

    // --- company rule -------------------------------------------------------

    #[test]
    fn test_company_org_reference_links() {
        assert_eq!(
            company_link("@github"),
            Some("https://github.com/github".to_string())
        );
    }

    #[test]
    fn test_company_plain_text_does_not_link() {
        assert_eq!(company_link("GitHub Inc."), None);
        assert_eq!(company_link("@"), None);
        assert_eq!(company_link(""), None);
    }
}
