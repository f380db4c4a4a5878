//! Endpoint URLs
//!
//! Every path segment and query value is percent-encoded.

use urlencoding::encode;

/// `GET /activities`, or `GET /activities?search=...` when a search is given.
///
/// An empty search string targets the unscoped endpoint.
pub fn activities_url(base: &str, search: Option<&str>) -> String {
    match search {
        Some(query) if !query.is_empty() => {
            format!("{}/activities?search={}", base, encode(query))
        }
        _ => format!("{}/activities", base),
    }
}

/// `GET /activities/{name}/participants`
pub fn participants_url(base: &str, activity: &str) -> String {
    format!("{}/activities/{}/participants", base, encode(activity))
}

/// `POST /activities/{name}/signup?email=...` (also used by `DELETE` to unregister)
pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/signup?email={}",
        base,
        encode(activity),
        encode(email)
    )
}

/// Strip trailing slashes so the builders can append `/activities`
pub fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
