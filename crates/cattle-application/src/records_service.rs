//! Scan history use case.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use cattle_core::api::BreedApi;
use cattle_core::error::Result;
use cattle_core::media::resolve_media_url;
use cattle_core::record::{RecordQuery, ScanRecord};

use crate::store::SessionStore;

pub struct RecordsService {
    api: Arc<dyn BreedApi>,
    session_store: Arc<SessionStore>,
}

impl RecordsService {
    pub fn new(api: Arc<dyn BreedApi>, session_store: Arc<SessionStore>) -> Self {
        Self { api, session_store }
    }

    /// All saved scans of the current user, most recent first, image URLs resolved.
    pub async fn list(&self) -> Result<Vec<ScanRecord>> {
        let mobile = self.session_store.effective_mobile();
        let records = self.api.get_scans(&mobile).await?;
        tracing::debug!("[RecordsService] Fetched {} records", records.len());

        let base_url = self.api.base_url();
        Ok(records
            .into_iter()
            .map(|mut record| {
                record.image = resolve_media_url(base_url, &record.image);
                record
            })
            .collect())
    }

    /// Fetches and filters against today's local date.
    pub async fn search(&self, query: &RecordQuery) -> Result<Vec<ScanRecord>> {
        self.search_on(query, Local::now().date_naive()).await
    }

    pub async fn search_on(&self, query: &RecordQuery, today: NaiveDate) -> Result<Vec<ScanRecord>> {
        Ok(query.apply(self.list().await?, today))
    }
}
