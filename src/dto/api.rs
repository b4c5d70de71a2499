//! DTOs exposed by the clients API endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::client::Client;
use crate::pagination::PageMeta;

/// Query parameters accepted by `GET /clients`.
///
/// Values are kept as raw strings so that unparsable numbers fall back to
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientsQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub search: Option<String>,
}

/// Result payload returned by [`crate::services::api::list_clients`].
#[derive(Debug, Serialize)]
pub struct ClientsResponse {
    /// Page of clients requested by the caller.
    pub clients: Vec<Client>,
    pub meta: PageMeta,
}

/// Payload of a successful create.
#[derive(Debug, Serialize)]
pub struct ClientData {
    pub client: Client,
}

/// Envelope wrapping every JSON body returned by the API.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}
