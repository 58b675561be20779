use crate::shared::api_client::{self, ApiError};
use crate::shared::api_utils::{api_base, join_url, resource_url};
use crate::shared::resource_page::ResourceApi;
use async_trait::async_trait;
use contracts::domain::a002_table::aggregate::{Table, TableDto};

const COLLECTION: &str = "api/tables";

/// REST client for `/api/tables`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTablesApi {
    base: String,
}

impl HttpTablesApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn collection_url(&self) -> String {
        join_url(&self.base, COLLECTION)
    }

    fn item_url(&self, id: &str) -> String {
        resource_url(&self.base, COLLECTION, id)
    }
}

impl Default for HttpTablesApi {
    fn default() -> Self {
        Self::new(api_base())
    }
}

#[async_trait(?Send)]
impl ResourceApi for HttpTablesApi {
    type Entity = Table;

    async fn fetch_all(&self) -> Result<Vec<Table>, ApiError> {
        api_client::get_enveloped_list(&self.collection_url()).await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Table, ApiError> {
        api_client::get_enveloped(&self.item_url(id)).await
    }

    async fn create(&self, draft: &TableDto) -> Result<(), ApiError> {
        api_client::post_json(&self.collection_url(), draft).await
    }

    async fn update(&self, id: &str, draft: &TableDto) -> Result<(), ApiError> {
        api_client::put_json(&self.item_url(id), draft).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        api_client::delete(&self.item_url(id)).await
    }
}
