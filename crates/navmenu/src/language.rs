//! Language negotiation for menu requests.
//!
//! Resolution order: explicit `lang` query parameter → Accept-Language →
//! default language. Every candidate is validated against the languages the
//! provider knows.

use axum::http::HeaderMap;
use axum::http::header::ACCEPT_LANGUAGE;

use crate::locale::normalize_language;

/// Parse an Accept-Language header value into (language, quality) pairs,
/// sorted by quality descending (stable sort preserves original order for ties).
fn parse_accept_language(header: &str) -> Vec<(String, f32)> {
    let mut langs: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|part| {
            let part = part.trim();
            if part.is_empty() {
                return None;
            }

            let mut segments = part.split(';');
            let lang = normalize_language(segments.next()?);

            let quality = segments
                .find_map(|s| {
                    let s = s.trim();
                    s.strip_prefix("q=")
                        .and_then(|q| q.trim().parse::<f32>().ok())
                })
                .unwrap_or(1.0)
                .clamp(0.0, 1.0); // RFC 7231 §5.3.1: quality values are 0.000–1.000

            Some((lang, quality))
        })
        .collect();

    langs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    langs
}

/// Pick the best known language from an Accept-Language header.
///
/// Tries each entry by quality, first as written and then by its primary
/// subtag (`en-US` → `en`). Entries with `q=0` are refused.
pub fn negotiate_accept_language(header: &str, known: &[String]) -> Option<String> {
    for (lang, quality) in parse_accept_language(header) {
        if quality <= 0.0 {
            continue;
        }
        if known.iter().any(|k| *k == lang) {
            return Some(lang);
        }
        if let Some(primary) = lang.split('-').next()
            && known.iter().any(|k| k == primary)
        {
            return Some(primary.to_string());
        }
    }
    None
}

/// Select the language for a request.
pub fn select_language(
    query_lang: Option<&str>,
    headers: &HeaderMap,
    known: &[String],
    default_language: &str,
) -> String {
    if let Some(lang) = query_lang {
        let lang = normalize_language(lang);
        if known.iter().any(|k| *k == lang) {
            return lang;
        }
        tracing::debug!(query_language = %lang, "unknown query language, ignoring");
    }

    if let Some(header) = headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok())
        && let Some(lang) = negotiate_accept_language(header, known)
    {
        return lang;
    }

    default_language.to_string()
}

/// Whether `code` looks like a language tag (`en`, `zh-CN`, `zh_cn`).
pub fn is_valid_language_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= 35
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn known() -> Vec<String> {
        vec!["en".to_string(), "zh-cn".to_string()]
    }

    #[test]
    fn parse_orders_by_quality() {
        let parsed = parse_accept_language("en;q=0.5, zh-CN, fr;q=0.8");
        let langs: Vec<&str> = parsed.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(langs, ["zh-cn", "fr", "en"]);
    }

    #[test]
    fn parse_skips_empty_parts() {
        assert!(parse_accept_language(" , ").is_empty());
    }

    #[test]
    fn negotiate_exact_match() {
        assert_eq!(
            negotiate_accept_language("zh-CN,zh;q=0.9", &known()),
            Some("zh-cn".to_string())
        );
    }

    #[test]
    fn negotiate_primary_subtag() {
        assert_eq!(
            negotiate_accept_language("en-US,fr;q=0.5", &known()),
            Some("en".to_string())
        );
    }

    #[test]
    fn negotiate_refuses_zero_quality() {
        assert_eq!(negotiate_accept_language("en;q=0", &known()), None);
    }

    #[test]
    fn negotiate_no_match() {
        assert_eq!(negotiate_accept_language("de, fr", &known()), None);
    }

    #[test]
    fn select_prefers_query() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en"));
        assert_eq!(select_language(Some("zh_CN"), &headers, &known(), "en"), "zh-cn");
    }

    #[test]
    fn select_ignores_unknown_query() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("zh-CN"));
        assert_eq!(select_language(Some("de"), &headers, &known(), "en"), "zh-cn");
    }

    #[test]
    fn select_falls_back_to_default() {
        assert_eq!(select_language(None, &HeaderMap::new(), &known(), "en"), "en");
    }

    #[test]
    fn language_code_shape() {
        assert!(is_valid_language_code("zh-CN"));
        assert!(is_valid_language_code("zh_cn"));
        assert!(!is_valid_language_code(""));
        assert!(!is_valid_language_code("en/../x"));
        assert!(!is_valid_language_code("中文"));
    }
}
