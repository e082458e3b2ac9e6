use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use url::Url;

/// A validated absolute http(s) URL pointing at a video page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoUrl(Url);

impl VideoUrl {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let url = Url::parse(raw.trim()).map_err(|e| format!("invalid URL: {}", e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "URL scheme should be 'http' or 'https', got '{}'",
                url.scheme()
            ));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err("URL host is missing".to_string());
        }
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for VideoUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// The subset of yt-dlp's metadata dump this service relies on.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoInfo {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subtitles: HashMap<String, Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub automatic_captions: HashMap<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<HashMap<String, Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<HashMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl VideoInfo {
    /// File names yt-dlp may have written the `lang` track to, most likely first.
    ///
    /// Returns `None` when the video has neither a manual nor an automatic
    /// track in that language.
    pub fn subtitle_files(&self, lang: &str) -> Option<Vec<String>> {
        let manual = format!("{}.{}.vtt", self.id, lang);
        let automatic = format!("{}.{}.auto.vtt", self.id, lang);

        if self.subtitles.contains_key(lang) {
            Some(vec![manual, automatic])
        } else if self.automatic_captions.contains_key(lang) {
            Some(vec![automatic, manual])
        } else {
            None
        }
    }
}
