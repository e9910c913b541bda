//! Origin allow-listing for both sides of the frame boundary.

/// Whether a message from `origin` may drive local state.
///
/// An empty allow-list is demo mode: any origin is accepted, which is
/// the documented weakening of this proof of concept. A non-empty list
/// requires an exact match.
pub fn origin_allowed(allow: &[String], origin: &str) -> bool {
    allow.is_empty() || allow.iter().any(|allowed| allowed == origin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_accepts_anything() {
        assert!(origin_allowed(&[], "https://evil.example.com"));
    }

    #[test]
    fn non_empty_list_requires_exact_match() {
        let allow = vec!["https://host.example.com".to_string()];
        assert!(origin_allowed(&allow, "https://host.example.com"));
        assert!(!origin_allowed(&allow, "https://host.example.com.evil.com"));
        assert!(!origin_allowed(&allow, "http://host.example.com"));
    }
}
