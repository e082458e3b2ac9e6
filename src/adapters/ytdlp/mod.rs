//! yt-dlp adapter: video metadata and subtitle download.

pub mod cmd;

use crate::domain::video::VideoInfo;
use crate::ports::extractor::{ExtractError, SubtitleSource};
use async_trait::async_trait;
use cmd::YtDlpRunner;
use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::process::Output;
use std::time::Duration;
use tracing::{debug, warn};

/// `SubtitleSource` backed by the yt-dlp command line tool.
pub struct YtDlpExtractor<R> {
    runner: R,
    lang: String,
    work_dir: PathBuf,
    timeout: Duration,
}

impl<R: YtDlpRunner> YtDlpExtractor<R> {
    pub fn new(runner: R, lang: impl Into<String>, work_dir: PathBuf, timeout: Duration) -> Self {
        Self {
            runner,
            lang: lang.into(),
            work_dir,
            timeout,
        }
    }

    async fn run<F>(&self, invocation: F) -> Result<Output, ExtractError>
    where
        F: Future<Output = io::Result<Output>>,
    {
        let output = tokio::time::timeout(self.timeout, invocation)
            .await
            .map_err(|_| ExtractError::Timeout(self.timeout.as_secs()))?
            .map_err(ExtractError::Launch)?;

        if !output.status.success() {
            return Err(ExtractError::Failed(failure_reason(&output)));
        }
        Ok(output)
    }
}

/// The most useful line of yt-dlp's stderr.
fn failure_reason(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    lines
        .iter()
        .rev()
        .find(|line| line.starts_with("ERROR"))
        .or_else(|| lines.last())
        .map(|line| line.to_string())
        .unwrap_or_else(|| format!("exited with {}", output.status))
}

#[async_trait]
impl<R: YtDlpRunner> SubtitleSource for YtDlpExtractor<R> {
    async fn video_info(&self, url: &str) -> Result<VideoInfo, ExtractError> {
        let output = self.run(self.runner.dump_info(url)).await?;
        Ok(serde_json::from_slice(&output.stdout)?)
    }

    async fn fetch_subtitles(&self, url: &str, info: &VideoInfo) -> Result<String, ExtractError> {
        let candidates = info
            .subtitle_files(&self.lang)
            .ok_or(ExtractError::NoSubtitles)?;

        // Removed again when `dir` drops
        tokio::fs::create_dir_all(&self.work_dir).await?;
        let dir = tempfile::Builder::new()
            .prefix("subtitles-")
            .tempdir_in(&self.work_dir)?;
        let template = dir.path().join("%(id)s.%(ext)s");

        self.run(self.runner.download_subtitles(url, &self.lang, &template))
            .await?;

        for name in &candidates {
            let path = dir.path().join(name);
            if tokio::fs::try_exists(&path).await? {
                debug!(video_id = %info.id, file = %name, "subtitles downloaded");
                return Ok(tokio::fs::read_to_string(&path).await?);
            }
        }

        warn!(video_id = %info.id, "yt-dlp listed subtitles but wrote none");
        Err(ExtractError::NotDownloaded)
    }
}
