// src/loader/source.rs
use percent_encoding::percent_decode_str;

/// Query parameter that carries a board code.
pub const CODE_PARAM: &str = "code";

fn decode_component(raw: &str) -> Option<String> {
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    let trimmed = decoded.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Extract a board code from a share URL.
///
/// The fragment (`#...`) wins; otherwise the `code` query parameter is used.
/// Returns `None` when neither is present, in which case the caller uses the
/// default board.
pub fn code_from_url(url: &str) -> Option<String> {
    let (before_fragment, fragment) = match url.split_once('#') {
        Some((head, frag)) => (head, Some(frag)),
        None => (url, None),
    };

    if let Some(code) = fragment.and_then(decode_component) {
        return Some(code);
    }

    let (_, query) = before_fragment.split_once('?')?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == CODE_PARAM {
            // `+` is a space in form-encoded queries.
            decode_component(&value.replace('+', " "))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_wins_over_query() {
        let url = "https://example.test/view?code=fromquery#fromfragment";
        assert_eq!(code_from_url(url).as_deref(), Some("fromfragment"));
    }

    #[test]
    fn falls_back_to_query_param() {
        let url = "https://example.test/view?lang=en&code=%5Bstgy%3Aabc%5D";
        assert_eq!(code_from_url(url).as_deref(), Some("[stgy:abc]"));
    }

    #[test]
    fn empty_fragment_is_ignored() {
        let url = "https://example.test/view?code=abc#";
        assert_eq!(code_from_url(url).as_deref(), Some("abc"));
    }

    #[test]
    fn missing_code_is_none() {
        assert_eq!(code_from_url("https://example.test/view"), None);
        assert_eq!(code_from_url("https://example.test/view?lang=en"), None);
    }

    #[test]
    fn fragment_is_percent_decoded() {
        let url = "https://example.test/#%7B%22objects%22%3A%5B%5D%7D";
        assert_eq!(code_from_url(url).as_deref(), Some(r#"{"objects":[]}"#));
    }
}
