// SPDX-License-Identifier: MPL-2.0
//! Asynchronous slide image fetching.
//!
//! One task per fetch, no queue, no retry and no cancellation: a completion
//! for a slide that was scrolled away from is still cached, while one for a
//! reassigned slide list is discarded by its stale generation tag.

use crate::error::{Error, Result};
use crate::media::image::{decode, ImageData};

/// A fetch instruction emitted by the carousel for the host to run as an
/// Iced task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Slide-list generation this request belongs to.
    pub generation: u64,
    /// Index of the slide whose image is missing.
    pub index: usize,
    /// Source URL for the image.
    pub url: String,
}

/// Completed fetch handed back to the carousel.
///
/// `result` is `Err` on transport or decode failure; the carousel swallows
/// the error and keeps showing the loading placeholder.
#[derive(Debug, Clone)]
pub struct FetchedSlide {
    pub generation: u64,
    pub index: usize,
    pub result: Result<ImageData>,
}

/// Builds the shared HTTP client used for all slide fetches.
///
/// # Errors
///
/// Returns [`Error::Http`] if the TLS backend cannot be initialized.
pub fn client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("iced_carousel/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::Http(e.to_string()))
}

/// Fetches and decodes a single image.
///
/// The body download happens on the async runtime; decoding moves onto a
/// blocking worker so it never stalls the UI thread.
///
/// # Errors
///
/// Returns [`Error::Http`] for transport failures and non-success statuses,
/// [`Error::Decode`] if the body is not a decodable image.
pub async fn fetch_image(client: reqwest::Client, url: String) -> Result<ImageData> {
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::Http(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Http(format!("HTTP status: {}", response.status())));
    }

    let bytes = response.bytes().await.map_err(|e| Error::Http(e.to_string()))?;

    tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .unwrap_or_else(|e| Err(Error::Decode(format!("decode task failed: {e}"))))
}

/// Runs a [`FetchRequest`] to completion, tagging the outcome so the
/// carousel can drop stale results.
pub async fn fetch_slide(client: reqwest::Client, request: FetchRequest) -> FetchedSlide {
    let FetchRequest {
        generation,
        index,
        url,
    } = request;

    let result = fetch_image(client, url).await;

    FetchedSlide {
        generation,
        index,
        result,
    }
}
