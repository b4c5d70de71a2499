use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    domain::{
        client::{Client, NewClient, UpdateClient},
        types::{ClientEmail, ClientId, ClientName, PhoneNumber},
    },
    repository::{
        ClientListQuery, ClientReader, ClientWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

/// Demo records loaded at start-up: `(id, first name)`. All share the same
/// last name, email and phone.
const SEED_CLIENTS: [(&str, &str); 5] = [
    ("xx-aa-bb", "John"),
    ("xx-aa-bc", "AJohn"),
    ("xx-aa-bd", "BJohn"),
    ("xx-aa-be", "CJohn"),
    ("xx-aa-bf", "DJohn"),
];
const SEED_LAST_NAME: &str = "Smitherin";
const SEED_EMAIL: &str = "john@gmail.com";
const SEED_PHONE: &str = "+6192099102";

/// Process-local client store shared between HTTP workers.
///
/// Cloning the repository yields another handle to the same records. Reads
/// share the lock, mutations take it exclusively.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    clients: Arc<RwLock<BTreeMap<ClientId, Client>>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository pre-populated with the demo clients.
    pub fn seeded() -> RepositoryResult<Self> {
        let repo = Self::new();
        {
            let mut clients = repo.clients.write();
            for (id, first_name) in SEED_CLIENTS {
                let client = NewClient::new(
                    ClientName::new(first_name)?,
                    ClientName::new(SEED_LAST_NAME)?,
                    ClientEmail::new(SEED_EMAIL)?,
                    PhoneNumber::new(SEED_PHONE)?,
                )
                .into_client(ClientId::new(id)?);
                clients.insert(client.id.clone(), client);
            }
        }
        Ok(repo)
    }

    /// Number of stored clients.
    pub fn len(&self) -> usize {
        self.clients.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.read().is_empty()
    }
}

impl ClientReader for InMemoryRepository {
    fn get_client_by_id(&self, id: &ClientId) -> RepositoryResult<Option<Client>> {
        Ok(self.clients.read().get(id).cloned())
    }

    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)> {
        let needle = query
            .search
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();

        let mut items = self
            .clients
            .read()
            .values()
            .filter(|client| client.matches(&needle))
            .cloned()
            .collect::<Vec<Client>>();

        let total = items.len();

        items.sort_by(|a, b| a.first_name.cmp(&b.first_name));

        let items = match query.pagination {
            Some(pagination) => pagination.apply(items),
            None => items,
        };

        Ok((total, items))
    }
}

impl ClientWriter for InMemoryRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        let mut clients = self.clients.write();

        let mut id = ClientId::generate();
        while clients.contains_key(&id) {
            id = ClientId::generate();
        }

        let client = new_client.clone().into_client(id);
        clients.insert(client.id.clone(), client.clone());
        log::debug!("Created client {}", client.id);

        Ok(client)
    }

    fn update_client(
        &self,
        client_id: &ClientId,
        updates: &UpdateClient,
    ) -> RepositoryResult<Client> {
        let mut clients = self.clients.write();
        let client = clients.get_mut(client_id).ok_or(RepositoryError::NotFound)?;
        updates.apply_to(client);
        log::debug!("Updated client {client_id}");

        Ok(client.clone())
    }

    fn delete_client(&self, client_id: &ClientId) -> RepositoryResult<()> {
        self.clients
            .write()
            .remove(client_id)
            .ok_or(RepositoryError::NotFound)?;
        log::debug!("Deleted client {client_id}");

        Ok(())
    }
}
