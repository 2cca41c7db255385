//! Media upload resource.

use super::{ApiClient, TextWaveError};
use crate::domain::MediaFile;

/// Media uploads (`/media`).
#[derive(Clone)]
pub struct Media {
    api: ApiClient,
}

impl Media {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Upload a file as a multipart form.
    pub async fn upload(
        &self,
        file: Vec<u8>,
        content_type: &str,
        filename: &str,
    ) -> Result<MediaFile, TextWaveError> {
        let raw = self
            .api
            .post_multipart("/media", file, content_type, filename)
            .await?;
        Ok(MediaFile::from_value(&raw))
    }
}
