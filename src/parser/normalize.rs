use url::Url;

/// Trims surrounding whitespace and drops every embedded newline and tab.
/// Internal spaces are kept as they are.
pub fn normalize_text(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| *c != '\n' && *c != '\t')
        .collect()
}

/// Network location of an absolute or scheme-relative link: the authority
/// exactly as written (host and any explicit port, default ports included),
/// minus userinfo. Anything without a host yields an empty string.
pub fn network_location(href: &str) -> String {
    let parsed = if href.starts_with("//") {
        Url::parse(&format!("http:{}", href))
    } else {
        Url::parse(href)
    };

    match parsed {
        Ok(url) if url.host_str().is_some() => {}
        _ => return String::new(),
    }

    let Some(start) = href.find("//") else {
        return String::new();
    };
    let rest = &href[start + 2..];
    let end = rest
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());
    let authority = &rest[..end];

    match authority.rsplit_once('@') {
        Some((_, host)) => host.to_string(),
        None => authority.to_string(),
    }
}
