//! Timestamp parsing and platform-aware deep links.
//!
//! Converts human-readable clock strings ("MM:SS" or "HH:MM:SS") into elapsed
//! seconds and builds URLs that seek playback to that moment on the hosting
//! platform.

/// How a platform encodes a seek offset in its URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkStrategy {
    /// `t=<seconds>` as a query parameter (`?` or `&` depending on the URL).
    QueryParam,
    /// `#t=<seconds>` media fragment (HTML5 audio/video, Spotify).
    Fragment,
}

/// Platform dispatch table: first host substring that matches wins.
/// New platforms are added here without touching any call site.
const PLATFORMS: &[(&str, LinkStrategy)] = &[
    ("youtube.com", LinkStrategy::QueryParam),
    ("youtu.be", LinkStrategy::QueryParam),
    ("spotify.com", LinkStrategy::Fragment),
];

/// Parse a clock string into elapsed seconds.
///
/// Accepts `"MM:SS"` or `"HH:MM:SS"`. Any other shape (wrong component
/// count, non-numeric components) yields `0`. The zero fallback is
/// intentional: timestamps are a best-effort citation enhancement and a
/// malformed one should degrade to "start of episode", not fail the answer.
pub fn parse_clock(s: &str) -> u64 {
    let parts: Vec<&str> = s.split(':').collect();
    let nums: Option<Vec<u64>> = parts.iter().map(|p| p.parse().ok()).collect();

    match nums.as_deref() {
        Some([minutes, seconds]) => minutes * 60 + seconds,
        Some([hours, minutes, seconds]) => hours * 3600 + minutes * 60 + seconds,
        _ => 0,
    }
}

/// Build a deep link that seeks `base_url` to the moment named by `clock`.
///
/// Returns an empty string when `base_url` is empty (no link to build).
pub fn deep_link(base_url: &str, clock: &str) -> String {
    if base_url.is_empty() {
        return String::new();
    }

    let seconds = parse_clock(clock);

    let strategy = PLATFORMS
        .iter()
        .find(|(host, _)| base_url.contains(host))
        .map(|(_, strategy)| *strategy)
        .unwrap_or(LinkStrategy::Fragment);

    match strategy {
        LinkStrategy::QueryParam => {
            let separator = if base_url.contains('?') { '&' } else { '?' };
            format!("{}{}t={}", base_url, separator, seconds)
        }
        LinkStrategy::Fragment => format!("{}#t={}", base_url, seconds),
    }
}

/// Format elapsed seconds as a clock string for display.
pub fn format_clock(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}
