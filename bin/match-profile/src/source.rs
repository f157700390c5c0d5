use async_trait::async_trait;
use std::fmt::Debug;
use std::path::PathBuf;
use tokio::fs::read_to_string;

/// Where the raw match record table comes from. Fetched once per process.
#[async_trait]
pub trait TableSource: Debug + Send + Sync {
    async fn fetch(&self) -> anyhow::Result<String>;
}

#[derive(Debug)]
pub struct HttpSource {
    url: String,
}

#[async_trait]
impl TableSource for HttpSource {
    async fn fetch(&self) -> anyhow::Result<String> {
        Ok(reqwest::get(&self.url)
            .await?
            .error_for_status()?
            .text()
            .await?)
    }
}

#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
}

#[async_trait]
impl TableSource for FileSource {
    async fn fetch(&self) -> anyhow::Result<String> {
        Ok(read_to_string(&self.path).await?)
    }
}

/// Pick the source type from the configured location.
pub fn from_location(location: &str) -> Box<dyn TableSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource {
            url: location.to_string(),
        })
    } else {
        Box::new(FileSource {
            path: PathBuf::from(location),
        })
    }
}
