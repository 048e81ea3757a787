//! Video ID extraction from YouTube URLs

/// Extract the video ID from a watch URL, short URL, or bare ID
pub fn extract_video_id(url: &str) -> &str {
    if let Some((_, rest)) = url.split_once("youtube.com/watch?v=") {
        rest.split('&').next().unwrap_or(rest)
    } else if let Some((_, rest)) = url.split_once("youtu.be/") {
        rest.split('?').next().unwrap_or(rest)
    } else {
        // already an ID
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_short_url() {
        assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ?si=abc"), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_bare_id() {
        assert_eq!(extract_video_id("dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    }
}
