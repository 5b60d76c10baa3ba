//! Volume API operations.

use lifequest_core::volume::{CatalogueEntry, CreateVolumeRequest, SearchResult, Volume};

use super::LifequestClient;
use crate::error::Result;

impl LifequestClient {
    /// List every volume, newest number first (admin).
    pub async fn list_volumes(&self) -> Result<Vec<Volume>> {
        let response = self.get("/api/admin/volumes").send().await?;
        Ok(self.handle_response(response).await?.data)
    }

    /// Create a volume from raw greentext (admin).
    pub async fn create_volume(&self, req: &CreateVolumeRequest) -> Result<Volume> {
        let response = self.post("/api/admin/volumes").json(req).send().await?;
        Ok(self.handle_response(response).await?.data)
    }

    /// Search volumes (admin).
    pub async fn search_volumes(&self, query: &str) -> Result<Vec<SearchResult>> {
        let response = self
            .get("/api/admin/volumes/search")
            .query(&[("q", query)])
            .send()
            .await?;
        Ok(self.handle_response(response).await?.data)
    }

    /// Download the plain-text export of published volumes (admin).
    pub async fn export_volumes(&self) -> Result<String> {
        let response = self.get("/api/admin/volumes/export").send().await?;
        self.handle_text(response).await
    }

    /// Public catalogue of published volumes.
    pub async fn catalogue(&self) -> Result<Vec<CatalogueEntry>> {
        let response = self.get("/api/public/volumes/catalogue").send().await?;
        Ok(self.handle_response(response).await?.data)
    }
}
