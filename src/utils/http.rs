// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header;
use scraper::Html;
use serde::de::DeserializeOwned;

use crate::config::SESSION_COOKIE_NAME;
use crate::error::Result;
use crate::models::HttpConfig;

/// Create a configured blocking HTTP client.
pub fn create_client(config: &HttpConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a page and parse it as HTML, sending the session cookie if given.
pub fn fetch_page(client: &Client, url: &str, credential: Option<&str>) -> Result<Html> {
    let request = with_session(client.get(url), credential);
    let text = request.send()?.text()?;
    Ok(Html::parse_document(&text))
}

/// Fetch a JSON endpoint and deserialize the body.
pub fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    let value = client.get(url).send()?.json()?;
    Ok(value)
}

fn with_session(request: RequestBuilder, credential: Option<&str>) -> RequestBuilder {
    match credential {
        Some(credential) => request.header(
            header::COOKIE,
            format!("{SESSION_COOKIE_NAME}={credential}"),
        ),
        None => request,
    }
}
