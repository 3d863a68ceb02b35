//! Decides whether a video link can play inline or must open externally.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

static HOST_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*://)?([^/?#:@\s]+)").ok());

/// A URL suitable for inline (iframe-style) playback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedTarget {
    pub video_id: String,
    pub url: String,
}

impl EmbedTarget {
    fn youtube(video_id: &str) -> Self {
        Self {
            video_id: video_id.to_string(),
            url: format!("{}{}?autoplay=1", EMBED_BASE, video_id),
        }
    }
}

impl fmt::Display for EmbedTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Resolve a video link to an embeddable player URL.
///
/// Recognised shapes, first match wins:
/// 1. `youtube.com/watch?...v=ID&...`
/// 2. `youtu.be/ID?...`
/// 3. `youtube.com/shorts/ID?...`
///
/// Anything else, or a recognised shape with an empty id, is `None`.
pub fn resolve_embed(link: &str) -> Option<EmbedTarget> {
    let id = if link.contains("youtube.com/watch") {
        watch_param(link)
    } else if link.contains("youtu.be/") {
        segment_after(link, "youtu.be/")
    } else if link.contains("youtube.com/shorts/") {
        segment_after(link, "shorts/")
    } else {
        None
    };

    match id {
        Some(id) if !id.is_empty() => Some(EmbedTarget::youtube(id)),
        _ => None,
    }
}

/// Value of the `v` query parameter, up to the next `&`
fn watch_param(link: &str) -> Option<&str> {
    let (_, query) = link.split_once('?')?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("v="))
}

/// Text after `marker`, up to the next `?`
fn segment_after<'a>(link: &'a str, marker: &str) -> Option<&'a str> {
    let (_, rest) = link.split_once(marker)?;
    rest.split('?').next()
}

/// How the video modal presents a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackMode {
    Inline(EmbedTarget),
    /// Not embeddable; offer an "open externally" action for this link
    External(String),
}

impl PlaybackMode {
    pub fn for_link(link: &str) -> Self {
        match resolve_embed(link) {
            Some(target) => {
                log::debug!("inline playback for {} -> {}", link, target);
                PlaybackMode::Inline(target)
            }
            None => {
                log::debug!("external playback for {}", link);
                PlaybackMode::External(link.to_string())
            }
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, PlaybackMode::Inline(_))
    }

    /// The URL the player (or browser) should load
    pub fn target_url(&self) -> &str {
        match self {
            PlaybackMode::Inline(target) => &target.url,
            PlaybackMode::External(link) => link,
        }
    }
}

/// Where a video link is hosted. Display only; embeddability is decided by
/// [`resolve_embed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoHost {
    YouTube,
    YouTubeShorts,
    Instagram,
    GoogleDrive,
    LinkedIn,
    Other,
}

impl VideoHost {
    pub fn classify(link: &str) -> Self {
        let host = match host_of(link) {
            Some(h) => h,
            None => return VideoHost::Other,
        };
        let host = host.strip_prefix("www.").unwrap_or(&host);
        let host = host.strip_prefix("m.").unwrap_or(host);

        match host {
            "youtube.com" if link.contains("/shorts/") => VideoHost::YouTubeShorts,
            "youtube.com" | "youtu.be" => VideoHost::YouTube,
            "instagram.com" => VideoHost::Instagram,
            "drive.google.com" => VideoHost::GoogleDrive,
            "linkedin.com" => VideoHost::LinkedIn,
            _ => VideoHost::Other,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VideoHost::YouTube => "YouTube",
            VideoHost::YouTubeShorts => "YouTube Shorts",
            VideoHost::Instagram => "Instagram Reel",
            VideoHost::GoogleDrive => "Google Drive",
            VideoHost::LinkedIn => "LinkedIn",
            VideoHost::Other => "External",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            VideoHost::YouTube => "YT",
            VideoHost::YouTubeShorts => "SH",
            VideoHost::Instagram => "IG",
            VideoHost::GoogleDrive => "GD",
            VideoHost::LinkedIn => "IN",
            VideoHost::Other => "EXT",
        }
    }
}

/// Lower-cased host part of a link, if it has one
pub fn host_of(link: &str) -> Option<String> {
    let re = HOST_RE.as_ref()?;
    re.captures(link.trim())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(link: &str) -> Option<String> {
        resolve_embed(link).map(|t| t.url)
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            url("https://www.youtube.com/watch?v=ABC123&foo=bar").as_deref(),
            Some("https://www.youtube.com/embed/ABC123?autoplay=1")
        );
        assert_eq!(
            resolve_embed("https://www.youtube.com/watch?v=8_nLrahoR1Q&ab_channel=LifeChampionsEcosystem")
                .unwrap()
                .video_id,
            "8_nLrahoR1Q"
        );
    }

    #[test]
    fn test_watch_url_v_not_first() {
        assert_eq!(
            url("https://www.youtube.com/watch?feature=share&v=QQQ").as_deref(),
            Some("https://www.youtube.com/embed/QQQ?autoplay=1")
        );
    }

    #[test]
    fn test_short_link() {
        assert_eq!(
            url("https://youtu.be/XYZ987?si=xyz").as_deref(),
            Some("https://www.youtube.com/embed/XYZ987?autoplay=1")
        );
        assert_eq!(
            url("https://youtu.be/XYZ987").as_deref(),
            Some("https://www.youtube.com/embed/XYZ987?autoplay=1")
        );
    }

    #[test]
    fn test_shorts() {
        assert_eq!(
            url("https://youtube.com/shorts/SHORT1?si=abc").as_deref(),
            Some("https://www.youtube.com/embed/SHORT1?autoplay=1")
        );
    }

    #[test]
    fn test_not_embeddable() {
        assert_eq!(resolve_embed("https://www.instagram.com/reel/abc/"), None);
        assert_eq!(
            resolve_embed("https://drive.google.com/file/d/1ijo/view?usp=drive_link"),
            None
        );
        assert_eq!(resolve_embed(""), None);
        assert_eq!(resolve_embed("not a url at all"), None);
    }

    #[test]
    fn test_malformed_youtube_is_not_embeddable() {
        assert_eq!(resolve_embed("youtube.com/watch?"), None);
        assert_eq!(resolve_embed("https://www.youtube.com/watch"), None);
        assert_eq!(resolve_embed("https://www.youtube.com/watch?v=&t=4"), None);
        assert_eq!(resolve_embed("https://youtu.be/"), None);
        assert_eq!(resolve_embed("https://youtu.be/?si=abc"), None);
        assert_eq!(resolve_embed("https://youtube.com/shorts/?si=abc"), None);
    }

    #[test]
    fn test_watch_wins_over_other_shapes() {
        let t = resolve_embed("https://www.youtube.com/watch?v=W1&list=youtu.be/X").unwrap();
        assert_eq!(t.video_id, "W1");
    }

    #[test]
    fn test_playback_mode() {
        let inline = PlaybackMode::for_link("https://youtu.be/HNSK0KMB938?si=HeFql6ghl6pFgVjz");
        assert!(inline.is_inline());
        assert_eq!(
            inline.target_url(),
            "https://www.youtube.com/embed/HNSK0KMB938?autoplay=1"
        );

        let link = "https://www.linkedin.com/posts/abc";
        let external = PlaybackMode::for_link(link);
        assert_eq!(external, PlaybackMode::External(link.to_string()));
        assert_eq!(external.target_url(), link);
    }

    #[test]
    fn test_host_classification() {
        assert_eq!(VideoHost::classify("https://youtu.be/abc"), VideoHost::YouTube);
        assert_eq!(
            VideoHost::classify("https://youtube.com/shorts/x7DI-9brdRg?si=1"),
            VideoHost::YouTubeShorts
        );
        assert_eq!(
            VideoHost::classify("https://www.instagram.com/reel/DF5EZgcyXJm/"),
            VideoHost::Instagram
        );
        assert_eq!(
            VideoHost::classify("https://drive.google.com/file/d/x/view"),
            VideoHost::GoogleDrive
        );
        assert_eq!(
            VideoHost::classify("https://www.linkedin.com/posts/x"),
            VideoHost::LinkedIn
        );
        assert_eq!(VideoHost::classify("https://vimeo.com/1"), VideoHost::Other);
        assert_eq!(VideoHost::classify(""), VideoHost::Other);
    }

    #[test]
    fn test_host_of() {
        assert_eq!(host_of("HTTPS://WWW.YouTube.com/watch?v=1").as_deref(), Some("www.youtube.com"));
        assert_eq!(host_of("youtu.be/abc").as_deref(), Some("youtu.be"));
        assert_eq!(host_of(""), None);
    }
}
