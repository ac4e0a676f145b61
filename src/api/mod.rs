//! Resource API client layer.
//!
//! This module defines the interface every resource source implements, the error
//! types for fetching, and the one place where wire records become [`Resource`]s.
//! The upstream endpoint has shipped records with both capitalised CSV headers
//! (`Name`, `_Location_latitude`) and lower-case JSON keys (`name`, `latitude`);
//! [`WireResource`] accepts either spelling and [`parse_resources`] maps them onto
//! the canonical schema.

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::entities::{GeoPoint, Resource};

pub mod file;
pub mod http;

pub use file::FileResourceSource;
pub use http::HttpResourceSource;

/// Errors that fail a whole fetch.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with HTTP {0}")]
    Status(u16),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

/// Why a single record was left out of a fetch.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' is not a number: {value}")]
    InvalidCoordinate { field: &'static str, value: String },

    #[error("coordinates out of range: {0}")]
    OutOfRange(GeoPoint),

    #[error("malformed record: {0}")]
    Malformed(String),
}

/// A record that was dropped during mapping, with its position in the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: RecordError,
}

/// Result of a successful fetch: the usable resources plus anything skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOutcome {
    pub resources: Vec<Resource>,
    pub skipped: Vec<SkippedRecord>,
}

/// Source of points of interest.
#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// Short description used in logs (e.g. the URL being fetched).
    fn describe(&self) -> String;

    async fn fetch_resources(&self) -> Result<FetchOutcome, ApiError>;
}

/// Build the resource source described by the API configuration.
///
/// `file://` base URLs read a local JSON file; anything else goes over HTTP.
pub fn create_source(config: &ApiConfig) -> anyhow::Result<Box<dyn ResourceSource>> {
    if let Some(path) = config.base_url.strip_prefix("file://") {
        return Ok(Box::new(FileResourceSource::new(path)));
    }

    let source = HttpResourceSource::from_config(config)?;
    Ok(Box::new(source))
}

/// A scalar that upstream sends either as a JSON string or a JSON number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl WireValue {
    fn as_text(&self) -> String {
        match self {
            WireValue::Text(text) => text.trim().to_string(),
            WireValue::Integer(value) => value.to_string(),
            WireValue::Float(value) => value.to_string(),
        }
    }

    fn as_f64(&self, field: &'static str) -> Result<f64, RecordError> {
        match self {
            WireValue::Integer(value) => Ok(*value as f64),
            WireValue::Float(value) => Ok(*value),
            WireValue::Text(text) => text.trim().parse::<f64>().map_err(|_| RecordError::InvalidCoordinate {
                field,
                value: text.clone(),
            }),
        }
    }
}

/// A resource record exactly as it appears on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireResource {
    #[serde(default, alias = "ID", alias = "_id")]
    pub id: Option<WireValue>,
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "Location_Type", alias = "type")]
    pub category: Option<String>,
    #[serde(default, alias = "_Location_latitude", alias = "lat")]
    pub latitude: Option<WireValue>,
    #[serde(default, alias = "_Location_longitude", alias = "lng", alias = "lon")]
    pub longitude: Option<WireValue>,
    #[serde(default, alias = "Description")]
    pub description: Option<String>,
    #[serde(default, alias = "Images", alias = "mainImage")]
    pub image: Option<String>,
}

impl WireResource {
    /// Map onto the canonical schema.
    pub fn into_resource(self) -> Result<Resource, RecordError> {
        let name = self
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or(RecordError::MissingField("name"))?;

        let latitude = self
            .latitude
            .ok_or(RecordError::MissingField("latitude"))?
            .as_f64("latitude")?;
        let longitude = self
            .longitude
            .ok_or(RecordError::MissingField("longitude"))?
            .as_f64("longitude")?;
        let location = GeoPoint::new(latitude, longitude);
        if !location.is_valid() {
            return Err(RecordError::OutOfRange(location));
        }

        let id = self
            .id
            .map(|id| id.as_text())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| synthesize_id(&name, &location));

        Ok(Resource {
            id,
            name,
            category: self.category.map(|c| c.trim().to_string()).unwrap_or_default(),
            location,
            description: self.description.map(|d| d.trim().to_string()).unwrap_or_default(),
            image: self.image.map(|i| i.trim().to_string()).filter(|i| !i.is_empty()),
        })
    }
}

/// Deterministic rendering key for records that arrive without an identifier.
fn synthesize_id(name: &str, location: &GeoPoint) -> String {
    let key = format!("{}|{}|{}", name, location.latitude, location.longitude);
    Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()).to_string()
}

/// Parse a response body into resources.
///
/// The body must be a JSON array. Elements that cannot be mapped are skipped and
/// reported in [`FetchOutcome::skipped`]; they never fail the fetch.
pub fn parse_resources(body: &str) -> Result<FetchOutcome, ApiError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| ApiError::InvalidPayload(e.to_string()))?;

    let mut outcome = FetchOutcome::default();
    for (index, value) in values.into_iter().enumerate() {
        let mapped = serde_json::from_value::<WireResource>(value)
            .map_err(|e| RecordError::Malformed(e.to_string()))
            .and_then(WireResource::into_resource);

        match mapped {
            Ok(resource) => outcome.resources.push(resource),
            Err(reason) => {
                log::warn!("Skipping resource record #{}: {}", index, reason);
                outcome.skipped.push(SkippedRecord { index, reason });
            }
        }
    }

    Ok(outcome)
}
