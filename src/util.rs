use url::Url;

/// Undo JSON-style `\/` escaping, as emitted by PHP's `json_encode`.
pub fn unescape_slashes(raw: &str) -> String {
    raw.replace("\\/", "/")
}

/// Join base url with another (possibly relative) url
pub fn join_url(base_url: &str, url: &str) -> Result<Url, url::ParseError> {
    Url::parse(base_url)?.join(url)
}

/// Join base url with a path segment verbatim, without percent-encoding it.
pub fn join_path(base_url: &str, segment: &str) -> String {
    let mut joined = String::with_capacity(base_url.len() + segment.len() + 1);
    joined.push_str(base_url.trim_end_matches('/'));
    joined.push('/');
    joined.push_str(segment.trim_start_matches('/'));
    joined
}
