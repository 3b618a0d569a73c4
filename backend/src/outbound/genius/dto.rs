//! Wire shape of the Genius `/search` response.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct SearchEnvelopeDto {
    pub(super) response: SearchResponseDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchResponseDto {
    #[serde(default)]
    pub(super) hits: Vec<HitDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct HitDto {
    pub(super) result: HitResultDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct HitResultDto {
    pub(super) url: Option<String>,
}

impl SearchEnvelopeDto {
    /// URL of the first hit, if any.
    pub(super) fn first_url(self) -> Option<String> {
        self.response
            .hits
            .into_iter()
            .next()
            .and_then(|hit| hit.result.url)
            .filter(|url| !url.is_empty())
    }
}
