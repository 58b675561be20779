use crate::shared::api_client::{self, ApiError};
use crate::shared::api_utils::{api_base, join_url, resource_url};
use crate::shared::resource_page::ResourceApi;
use async_trait::async_trait;
use chrono::NaiveDate;
use contracts::domain::a001_booking::aggregate::{
    Booking, BookingDto, BookingStats, DateRangeQuery,
};

const COLLECTION: &str = "api/bookings";

/// Booking endpoints beyond plain CRUD
#[async_trait(?Send)]
pub trait BookingsApi: ResourceApi<Entity = Booking> {
    /// Bookings overlapping the inclusive date range
    async fn fetch_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Booking>, ApiError>;

    async fn fetch_stats(&self) -> Result<BookingStats, ApiError>;
}

/// REST client for `/api/bookings`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpBookingsApi {
    base: String,
}

impl HttpBookingsApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn collection_url(&self) -> String {
        join_url(&self.base, COLLECTION)
    }

    fn item_url(&self, id: &str) -> String {
        resource_url(&self.base, COLLECTION, id)
    }

    pub fn date_range_url(&self, start: NaiveDate, end: NaiveDate) -> Result<String, ApiError> {
        let query = serde_qs::to_string(&DateRangeQuery {
            start_date: start,
            end_date: end,
        })
        .map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(format!("{}/date-range?{}", self.collection_url(), query))
    }

    pub fn stats_url(&self) -> String {
        format!("{}/stats", self.collection_url())
    }
}

impl Default for HttpBookingsApi {
    fn default() -> Self {
        Self::new(api_base())
    }
}

#[async_trait(?Send)]
impl ResourceApi for HttpBookingsApi {
    type Entity = Booking;

    async fn fetch_all(&self) -> Result<Vec<Booking>, ApiError> {
        api_client::get_enveloped_list(&self.collection_url()).await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Booking, ApiError> {
        api_client::get_enveloped(&self.item_url(id)).await
    }

    async fn create(&self, draft: &BookingDto) -> Result<(), ApiError> {
        api_client::post_json(&self.collection_url(), draft).await
    }

    async fn update(&self, id: &str, draft: &BookingDto) -> Result<(), ApiError> {
        api_client::put_json(&self.item_url(id), draft).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        api_client::delete(&self.item_url(id)).await
    }
}

#[async_trait(?Send)]
impl BookingsApi for HttpBookingsApi {
    async fn fetch_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Booking>, ApiError> {
        let url = self.date_range_url(start, end)?;
        api_client::get_enveloped_list(&url).await
    }

    async fn fetch_stats(&self) -> Result<BookingStats, ApiError> {
        api_client::get_enveloped(&self.stats_url()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_urls() {
        let api = HttpBookingsApi::new("http://localhost:3000/");
        assert_eq!(api.collection_url(), "http://localhost:3000/api/bookings");
        assert_eq!(api.item_url("b-1"), "http://localhost:3000/api/bookings/b-1");
        assert_eq!(api.stats_url(), "http://localhost:3000/api/bookings/stats");
    }

    #[test]
    fn test_date_range_query() {
        let api = HttpBookingsApi::new("http://h");
        let url = api
            .date_range_url(date(2024, 3, 1), date(2024, 3, 31))
            .unwrap();
        assert_eq!(
            url,
            "http://h/api/bookings/date-range?startDate=2024-03-01&endDate=2024-03-31"
        );
    }
}
