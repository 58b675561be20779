//! Thin HTTP layer over `gloo-net` shared by all resource APIs.
//!
//! Every response body is wrapped in the backend envelope
//! (`{"data": {"data": ...}}`); helpers here unwrap it.

use contracts::domain::common::Envelope;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Any failed API call. Pages collapse all variants into one banner message;
/// the detail only goes to the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("failed to send request: {0}")]
    Network(String),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("failed to serialize request: {0}")]
    Encode(String),

    #[error("failed to parse response: {0}")]
    Decode(String),
}

fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response)
}

async fn send_json<B: Serialize + ?Sized>(
    builder: RequestBuilder,
    body: &B,
) -> Result<Response, ApiError> {
    let request: Request = builder
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response)
}

/// GET and unwrap the envelope
pub async fn get_enveloped<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {url}");
    let response = send(Request::get(url)).await?;
    response
        .json::<Envelope<T>>()
        .await
        .map(Envelope::into_inner)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET a list and unwrap the envelope. Records that fail to decode are
/// logged and left out instead of failing the whole page.
pub async fn get_enveloped_list<T: DeserializeOwned>(url: &str) -> Result<Vec<T>, ApiError> {
    let raw: Vec<serde_json::Value> = get_enveloped(url).await?;
    Ok(decode_items(url, raw))
}

fn decode_items<T: DeserializeOwned>(url: &str, raw: Vec<serde_json::Value>) -> Vec<T> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("{url}: skipping record {index}: {e}");
                None
            }
        })
        .collect()
}

/// POST a JSON body; the response body is not needed, callers re-fetch
pub async fn post_json<B: Serialize + ?Sized>(url: &str, body: &B) -> Result<(), ApiError> {
    log::debug!("POST {url}");
    send_json(Request::post(url), body).await.map(|_| ())
}

pub async fn put_json<B: Serialize + ?Sized>(url: &str, body: &B) -> Result<(), ApiError> {
    log::debug!("PUT {url}");
    send_json(Request::put(url), body).await.map(|_| ())
}

pub async fn delete(url: &str) -> Result<(), ApiError> {
    log::debug!("DELETE {url}");
    send(Request::delete(url)).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_table::aggregate::Table;
    use serde_json::json;

    #[test]
    fn test_undecodable_records_are_dropped() {
        let raw = vec![
            json!({ "_id": "t-1", "tableNumber": "1", "capacity": 2 }),
            json!({ "_id": "t-2", "tableNumber": "2", "capacity": 4, "location": "roof" }),
            json!("not a table"),
            json!({ "_id": "t-3", "tableNumber": "3", "capacity": 6 }),
        ];
        let tables: Vec<Table> = decode_items("/api/tables", raw);
        let ids: Vec<&str> = tables.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t-1", "t-3"]);
    }

    #[test]
    fn test_empty_list_decodes_to_empty() {
        let tables: Vec<Table> = decode_items("/api/tables", Vec::new());
        assert!(tables.is_empty());
    }
}
