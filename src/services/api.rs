//! Services backing the `/clients` JSON API.

use crate::domain::client::Client;
use crate::domain::types::ClientId;
pub use crate::dto::api::{ClientsQuery, ClientsResponse};
use crate::forms::client::{ClientForm, ClientPayload};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_PAGE, PageMeta, parse_positive};
use crate::repository::errors::RepositoryError;
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

fn not_found(client_id: &str) -> ServiceError {
    ServiceError::NotFound(format!("No client with the given id={client_id} found"))
}

/// Resolves a path identifier; blank identifiers can never match a record.
fn parse_client_id(client_id: &str) -> ServiceResult<ClientId> {
    ClientId::try_from(client_id.to_string()).map_err(|_| not_found(client_id))
}

fn map_missing(client_id: &ClientId) -> impl FnOnce(RepositoryError) -> ServiceError + '_ {
    move |err| match err {
        RepositoryError::NotFound => not_found(client_id.as_str()),
        other => {
            log::error!("Failed to change client {client_id}: {other}");
            other.into()
        }
    }
}

/// Returns one page of clients matching the optional search term.
pub fn list_clients<R>(repo: &R, params: ClientsQuery) -> ServiceResult<ClientsResponse>
where
    R: ClientReader + ?Sized,
{
    let page = parse_positive(params.page.as_deref(), DEFAULT_PAGE);
    let page_size = parse_positive(params.page_size.as_deref(), DEFAULT_ITEMS_PER_PAGE);

    let mut query = ClientListQuery::new().paginate(page, page_size);

    if let Some(term) = params.search.filter(|s| !s.is_empty()) {
        query = query.search(term);
    }

    let (total, clients) = repo.list_clients(query).map_err(|err| {
        log::error!("Failed to list clients: {err}");
        err
    })?;

    Ok(ClientsResponse {
        clients,
        meta: PageMeta::new(page, page_size, total),
    })
}

/// Validates the form and stores a new client under a fresh identifier.
pub fn create_client<R>(repo: &R, form: ClientForm) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    let payload = ClientPayload::try_from(form)?;

    let client = repo
        .create_client(&payload.into_new_client())
        .map_err(|err| {
            log::error!("Failed to add a client: {err}");
            err
        })?;

    log::info!("Created client {}", client.id);

    Ok(client)
}

/// Replaces every field of an existing client.
pub fn update_client<R>(repo: &R, client_id: &str, form: ClientForm) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    let payload = ClientPayload::try_from(form)?;
    let client_id = parse_client_id(client_id)?;

    let client = repo
        .update_client(&client_id, &payload.into_update())
        .map_err(map_missing(&client_id))?;

    log::info!("Updated client {client_id}");

    Ok(client)
}

/// Removes a client from the store.
pub fn delete_client<R>(repo: &R, client_id: &str) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    let client_id = parse_client_id(client_id)?;

    repo.delete_client(&client_id)
        .map_err(map_missing(&client_id))?;

    log::info!("Deleted client {client_id}");

    Ok(())
}
