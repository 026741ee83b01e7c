//! Declarative resource descriptors and the generic request/decode routines
//! shared by every resource client.
//!
//! The vendor API repeats one marshaling shape across its resource groups:
//! pagination via `limit`/`skip`, an envelope key per entity and per list,
//! and a per-endpoint delete-success status set. Each client declares those
//! facts once in a [`ResourceDescriptor`] and delegates the mechanics here;
//! only genuinely resource-specific sub-operations get dedicated code.

use super::transport::{ApiError, ApiTransport, QueryParams, RequestDescriptor};
use crate::models::Page;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Wire-level facts about one vendor resource group.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResourceDescriptor {
    /// Exact collection path for list/create. Some groups carry a trailing
    /// slash on the live API; it is preserved verbatim.
    pub collection: &'static str,
    /// Path prefix for item operations (`{item}/{id}`).
    pub item: &'static str,
    /// Envelope key wrapping a single entity.
    pub singular: &'static str,
    /// Envelope key wrapping a page of entities.
    pub plural: &'static str,
    /// Status codes this endpoint treats as a successful delete. The sets
    /// differ per resource on the live API and must not be normalized.
    pub delete_success: &'static [u16],
}

pub(crate) async fn read_json(response: Response) -> Result<Value, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Envelope unwrap rule: prefer the expected wrapper key; when it is absent,
/// treat the whole body as the entity. The live API is inconsistent about
/// wrapping across endpoints, so the fallback is load-bearing.
pub(crate) fn unwrap_entity<T: DeserializeOwned>(body: Value, key: &str) -> Result<T, ApiError> {
    let inner = match body {
        Value::Object(mut map) => match map.remove(key) {
            Some(value) => value,
            None => Value::Object(map),
        },
        other => other,
    };
    serde_json::from_value(inner).map_err(|e| ApiError::Decode(e.to_string()))
}

/// List unwrap rule: items under the plural key (missing key decodes as an
/// empty page), `count` always the page length, `total` from `meta.total`,
/// then a top-level `total`, then `count`.
pub(crate) fn unwrap_page<T: DeserializeOwned>(
    mut body: Value,
    key: &str,
) -> Result<Page<T>, ApiError> {
    let items: Vec<T> = match body.get_mut(key) {
        Some(value) => {
            serde_json::from_value(value.take()).map_err(|e| ApiError::Decode(e.to_string()))?
        }
        None => Vec::new(),
    };
    let count = items.len();
    let total = body
        .pointer("/meta/total")
        .and_then(Value::as_u64)
        .or_else(|| body.get("total").and_then(Value::as_u64))
        .map(|total| total as usize)
        .unwrap_or(count);

    Ok(Page {
        items,
        count,
        total,
    })
}

pub(crate) async fn decode_entity<T: DeserializeOwned>(
    response: Response,
    key: &str,
) -> Result<T, ApiError> {
    unwrap_entity(read_json(response).await?, key)
}

pub(crate) async fn decode_page<T: DeserializeOwned>(
    response: Response,
    key: &str,
) -> Result<Page<T>, ApiError> {
    unwrap_page(read_json(response).await?, key)
}

pub(crate) fn to_body<B: Serialize>(payload: &B) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

impl ApiTransport {
    pub(crate) async fn list_resource<T: DeserializeOwned>(
        &self,
        resource: &ResourceDescriptor,
        query: QueryParams,
        location_id: Option<&str>,
    ) -> Result<Page<T>, ApiError> {
        let response = self
            .request(
                RequestDescriptor::new(Method::GET, resource.collection)
                    .query(query)
                    .location_opt(location_id),
            )
            .await?;
        decode_page(response, resource.plural).await
    }

    pub(crate) async fn get_resource<T: DeserializeOwned>(
        &self,
        resource: &ResourceDescriptor,
        id: &str,
        location_id: Option<&str>,
    ) -> Result<T, ApiError> {
        let response = self
            .request(
                RequestDescriptor::new(Method::GET, format!("{}/{id}", resource.item))
                    .location_opt(location_id),
            )
            .await?;
        decode_entity(response, resource.singular).await
    }

    pub(crate) async fn create_resource<T: DeserializeOwned, B: Serialize>(
        &self,
        resource: &ResourceDescriptor,
        payload: &B,
        location_id: Option<&str>,
    ) -> Result<T, ApiError> {
        let response = self
            .request(
                RequestDescriptor::new(Method::POST, resource.collection)
                    .body(to_body(payload)?)
                    .location_opt(location_id),
            )
            .await?;
        decode_entity(response, resource.singular).await
    }

    pub(crate) async fn update_resource<T: DeserializeOwned, B: Serialize>(
        &self,
        resource: &ResourceDescriptor,
        id: &str,
        payload: &B,
        location_id: Option<&str>,
    ) -> Result<T, ApiError> {
        let response = self
            .request(
                RequestDescriptor::new(Method::PUT, format!("{}/{id}", resource.item))
                    .body(to_body(payload)?)
                    .location_opt(location_id),
            )
            .await?;
        decode_entity(response, resource.singular).await
    }

    /// Success is membership of the response status in this resource's
    /// `delete_success` set; a 4xx/5xx has already become an error upstream.
    pub(crate) async fn delete_resource(
        &self,
        resource: &ResourceDescriptor,
        id: &str,
        location_id: Option<&str>,
    ) -> Result<bool, ApiError> {
        let response = self
            .request(
                RequestDescriptor::new(Method::DELETE, format!("{}/{id}", resource.item))
                    .location_opt(location_id),
            )
            .await?;
        Ok(resource.delete_success.contains(&response.status().as_u16()))
    }
}
