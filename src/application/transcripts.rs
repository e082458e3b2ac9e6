use super::VideoService;
use crate::domain::transcript::{clean_subtitles, Transcript};
use crate::domain::video::VideoUrl;
use crate::error::ServiceError;
use crate::ports::extractor::SubtitleSource;
use crate::ports::llm::LanguageModel;
use crate::ports::repository::VideoRepository;
use tracing::{debug, info};

impl<X, R, L> VideoService<X, R, L>
where
    X: SubtitleSource,
    R: VideoRepository,
    L: LanguageModel,
{
    /// Return the cleaned transcript for `url`, extracting it on first request.
    pub async fn generate_transcript(&self, url: &VideoUrl) -> Result<Transcript, ServiceError> {
        // 1. Resolve the video id
        let info = self.extractor.video_info(url.as_str()).await?;

        // 2. Cached?
        if let Some(existing) = self
            .repo
            .find_transcript(&info.id)
            .await
            .map_err(ServiceError::storage)?
        {
            debug!(video_id = %info.id, "transcript served from cache");
            return Ok(existing);
        }

        // 3. Download and clean subtitles
        let raw = self.extractor.fetch_subtitles(url.as_str(), &info).await?;
        let transcript = Transcript {
            video_id: info.id,
            transcript: clean_subtitles(&raw),
        };

        // 4. Save
        self.repo
            .save_transcript(&transcript)
            .await
            .map_err(ServiceError::storage)?;

        info!(
            video_id = %transcript.video_id,
            words = transcript.transcript.split_whitespace().count(),
            "transcript extracted"
        );
        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::video::VideoInfo;
    use crate::ports::extractor::{ExtractError, MockSubtitleSource};
    use crate::ports::llm::MockLanguageModel;
    use crate::ports::repository::MockVideoRepository;

    const URL: &str = "https://www.youtube.com/watch?v=abc123";

    fn info() -> VideoInfo {
        serde_json::from_str(r#"{"id":"abc123","subtitles":{"en":[]}}"#).unwrap()
    }

    fn url() -> VideoUrl {
        VideoUrl::parse(URL).unwrap()
    }

    #[tokio::test]
    async fn test_cached_transcript_skips_download() {
        let mut extractor = MockSubtitleSource::new();
        extractor
            .expect_video_info()
            .withf(|u| u == URL)
            .times(1)
            .returning(|_| Ok(info()));
        extractor.expect_fetch_subtitles().never();

        let mut repo = MockVideoRepository::new();
        repo.expect_find_transcript()
            .withf(|id| id == "abc123")
            .returning(|_| {
                Ok(Some(Transcript {
                    video_id: "abc123".to_string(),
                    transcript: "cached text".to_string(),
                }))
            });
        repo.expect_save_transcript().never();

        let service = VideoService::new(extractor, repo, MockLanguageModel::new());
        let transcript = service.generate_transcript(&url()).await.unwrap();

        assert_eq!(transcript.transcript, "cached text");
    }

    #[tokio::test]
    async fn test_new_transcript_is_cleaned_and_saved() {
        let mut extractor = MockSubtitleSource::new();
        extractor.expect_video_info().returning(|_| Ok(info()));
        extractor
            .expect_fetch_subtitles()
            .withf(|u, info| u == URL && info.id == "abc123")
            .times(1)
            .returning(|_, _| {
                Ok("WEBVTT\n\n00:00:00.000 --> 00:00:01.000\n<c>plants</c> need light [Music]\n"
                    .to_string())
            });

        let mut repo = MockVideoRepository::new();
        repo.expect_find_transcript().returning(|_| Ok(None));
        repo.expect_save_transcript()
            .withf(|t| t.video_id == "abc123" && t.transcript == "plants need light")
            .times(1)
            .returning(|_| Ok(()));

        let service = VideoService::new(extractor, repo, MockLanguageModel::new());
        let transcript = service.generate_transcript(&url()).await.unwrap();

        assert_eq!(transcript.video_id, "abc123");
        assert_eq!(transcript.transcript, "plants need light");
    }

    #[tokio::test]
    async fn test_missing_subtitles_not_saved() {
        let mut extractor = MockSubtitleSource::new();
        extractor.expect_video_info().returning(|_| Ok(info()));
        extractor
            .expect_fetch_subtitles()
            .returning(|_, _| Err(ExtractError::NoSubtitles));

        let mut repo = MockVideoRepository::new();
        repo.expect_find_transcript().returning(|_| Ok(None));
        repo.expect_save_transcript().never();

        let service = VideoService::new(extractor, repo, MockLanguageModel::new());
        let result = service.generate_transcript(&url()).await;

        assert!(matches!(
            result,
            Err(ServiceError::Extraction(ExtractError::NoSubtitles))
        ));
    }

    #[tokio::test]
    async fn test_storage_failure() {
        let mut extractor = MockSubtitleSource::new();
        extractor.expect_video_info().returning(|_| Ok(info()));

        let mut repo = MockVideoRepository::new();
        repo.expect_find_transcript()
            .returning(|_| Err("server selection timeout".into()));

        let service = VideoService::new(extractor, repo, MockLanguageModel::new());
        let result = service.generate_transcript(&url()).await;

        assert!(matches!(result, Err(ServiceError::Storage(msg)) if msg.contains("timeout")));
    }
}
