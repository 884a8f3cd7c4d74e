//! Province lookup
//!
//! Public catalogue of provinces and districts used to fill listing locations.

use crate::models::{Province, ProvinceApiResponse};
use crate::services::ApiClient;
use crate::utils::error::{helpers::unexpected_error, AppResult};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct LocationApi {
    client: ApiClient,
}

impl LocationApi {
    /// `client` must point at the province service, not the marketplace API
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /provinces`
    pub async fn get_provinces(&self) -> AppResult<Vec<Province>> {
        let response: ProvinceApiResponse = self.client.get("/provinces").await?;

        if response.status != "OK" {
            return Err(unexpected_error(format!(
                "province service returned status {}",
                response.status
            )));
        }

        debug!("Loaded {} provinces", response.data.len());
        Ok(response.data)
    }
}
