//! Speaker selection

/// Pick the speaker the backend should voice: the requested one when the
/// backend lists it, otherwise the backend's first speaker, otherwise none
/// (single-voice backend).
pub fn resolve_speaker(requested: &str, available: &[String]) -> Option<String> {
    if available.iter().any(|s| s == requested) {
        return Some(requested.to_string());
    }
    available.first().cloned()
}
