//! REST client for the blocked-agenda endpoint.
//!
//! Decoding is lenient by contract: records whose date cannot be parsed
//! are dropped (with a warning), and missing or malformed time fields
//! degrade to inert blocks. A fetch failure is returned to the caller —
//! the booking form historically treated that as "no restrictions", and
//! whether to keep that fail-open stance is the caller's call, not this
//! client's.

use std::time::Duration;

use tracing::{debug, warn};

use agenda_engine::block::{AgendaBlockRecord, BlockedInterval};

use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::selection::{FetchTicket, SelectionWatcher};

/// Client for the reclamos backend's blocked-agenda endpoint.
#[derive(Debug)]
pub struct AgendaApi {
    http: reqwest::Client,
    base_url: String,
}

impl AgendaApi {
    /// Builds a client from the given configuration.
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(AgendaApi {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn blocked_agenda_url(&self) -> String {
        format!("{}/agenda/bloqueos", self.base_url)
    }

    /// Fetches the blocked intervals for one professional.
    pub async fn fetch_blocked(&self, professional_id: i64) -> ClientResult<Vec<BlockedInterval>> {
        let url = self.blocked_agenda_url();
        debug!(professional_id, %url, "fetching blocked agenda");

        let response = self
            .http
            .get(&url)
            .query(&[("profesional_id", professional_id)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let records: Vec<AgendaBlockRecord> =
            serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        let total = records.len();
        let blocks: Vec<BlockedInterval> = records
            .into_iter()
            .filter_map(AgendaBlockRecord::into_blocked_interval)
            .collect();
        if blocks.len() < total {
            warn!(
                professional_id,
                dropped = total - blocks.len(),
                "discarded blocked-agenda records without a usable date"
            );
        }
        debug!(professional_id, count = blocks.len(), "blocked agenda loaded");

        Ok(blocks)
    }

    /// Fetches for the professional named by `ticket`, discarding the
    /// result when the selection moved on while the request was in
    /// flight.
    ///
    /// `Ok(None)` means the fetch succeeded but is stale; the caller must
    /// not apply it.
    pub async fn fetch_blocked_for(
        &self,
        watcher: &SelectionWatcher,
        ticket: &FetchTicket,
    ) -> ClientResult<Option<Vec<BlockedInterval>>> {
        let blocks = self.fetch_blocked(ticket.professional_id()).await?;
        Ok(watcher.accept(ticket, blocks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_in_base_url_is_normalized() {
        let api = AgendaApi::new(&ApiConfig::new("https://api.example.com/")).unwrap();
        assert_eq!(
            api.blocked_agenda_url(),
            "https://api.example.com/agenda/bloqueos"
        );
    }
}
