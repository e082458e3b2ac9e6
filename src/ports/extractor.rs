use crate::domain::video::VideoInfo;
use async_trait::async_trait;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Failed to run yt-dlp: {0}")]
    Launch(io::Error),

    #[error("yt-dlp timed out after {0} seconds")]
    Timeout(u64),

    #[error("yt-dlp failed: {0}")]
    Failed(String),

    #[error("Unreadable video metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("No subtitles available (manual or auto-generated)")]
    NoSubtitles,

    #[error("Subtitles were listed but not downloaded")]
    NotDownloaded,

    #[error("Failed to read subtitles: {0}")]
    Io(#[from] io::Error),
}

impl ExtractError {
    /// Failures on our side rather than caused by the requested video.
    pub fn is_internal(&self) -> bool {
        matches!(self, ExtractError::Launch(_) | ExtractError::Io(_))
    }
}

/// Source of video metadata and subtitle tracks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubtitleSource: Send + Sync {
    async fn video_info(&self, url: &str) -> Result<VideoInfo, ExtractError>;

    /// Download the subtitle track for `info` and return the raw WebVTT text.
    async fn fetch_subtitles(&self, url: &str, info: &VideoInfo) -> Result<String, ExtractError>;
}
