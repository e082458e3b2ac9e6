use async_trait::async_trait;
use std::io;
use std::path::Path;
use std::process::Output;
use tokio::process::Command as TokioCommand;

/// Subprocess seam around the yt-dlp executable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait YtDlpRunner: Send + Sync {
    /// Print the video's metadata as one JSON document on stdout.
    async fn dump_info(&self, url: &str) -> io::Result<Output>;

    /// Write the `lang` subtitle track (manual or automatic) as WebVTT
    /// using yt-dlp's `output_template`.
    async fn download_subtitles(
        &self,
        url: &str,
        lang: &str,
        output_template: &Path,
    ) -> io::Result<Output>;
}

pub struct RealYtDlpRunner {
    bin: String,
}

impl RealYtDlpRunner {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }
}

#[async_trait]
impl YtDlpRunner for RealYtDlpRunner {
    async fn dump_info(&self, url: &str) -> io::Result<Output> {
        TokioCommand::new(&self.bin)
            .arg("--dump-single-json")
            .arg("--skip-download")
            .arg("--no-playlist")
            .arg("--no-warnings")
            .arg(url)
            .kill_on_drop(true)
            .output()
            .await
    }

    async fn download_subtitles(
        &self,
        url: &str,
        lang: &str,
        output_template: &Path,
    ) -> io::Result<Output> {
        TokioCommand::new(&self.bin)
            .arg("--skip-download")
            .arg("--write-subs")
            .arg("--write-auto-subs")
            .arg("--sub-langs").arg(lang)
            .arg("--sub-format").arg("vtt")
            .arg("--no-progress")
            .arg("--no-playlist")
            .arg("-o").arg(output_template)
            .arg(url)
            .kill_on_drop(true)
            .output()
            .await
    }
}
