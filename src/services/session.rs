//! Session gating against the Atlas admin surface.

use reqwest::blocking::Client;

use crate::config;
use crate::error::{AppError, Result};
use crate::selectors;
use crate::utils::http::fetch_page;

/// Run-wide session mode, fixed once the gate has run.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub is_admin: bool,
    credential: Option<String>,
}

impl SessionContext {
    /// Probe the configured credential against the moderation page.
    ///
    /// A credential whose session lacks the moderator nav marker is a
    /// fatal misconfiguration; the caller gets a typed error with a
    /// corrective message.
    pub fn establish(client: &Client, credential: Option<String>) -> Result<Self> {
        let Some(credential) = credential else {
            return Ok(Self::anonymous());
        };

        let document = fetch_page(client, &config::moderate_url(), Some(credential.as_str()))?;
        let marker = selectors::admin_nav_item();

        if document.select(&marker).next().is_some() {
            Ok(Self {
                is_admin: true,
                credential: Some(credential),
            })
        } else {
            Err(AppError::credential(
                "session cookie is not an admin/moderator session; \
                 remove it from the config or replace it",
            ))
        }
    }

    /// Anonymous session, no privileged visibility.
    pub fn anonymous() -> Self {
        Self {
            is_admin: false,
            credential: None,
        }
    }

    /// Cookie value to attach to Atlas requests.
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    #[cfg(test)]
    pub fn admin_for_tests() -> Self {
        Self {
            is_admin: true,
            credential: Some("test-cookie".to_string()),
        }
    }
}
