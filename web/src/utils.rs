use gloo::net::http::Request;
use thiserror::Error;
use wordchain_core::{GameData, GameError};

#[derive(Error, Debug)]
pub(crate) enum LoadError {
    #[error("Could not fetch word data: {0}")]
    Fetch(#[from] gloo::net::Error),
    #[error("Word data request failed with HTTP {0}")]
    Status(u16),
    #[error("{0}")]
    Data(#[from] GameError),
}

/// Fetches and validates the word-set document at `url`.
pub(crate) async fn fetch_game_data(url: &str) -> Result<GameData, LoadError> {
    log::debug!("fetching word data from {}", url);
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }
    let body = response.text().await?;
    Ok(GameData::from_json(&body)?)
}
