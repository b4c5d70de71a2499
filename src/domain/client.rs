use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientEmail, ClientId, ClientName, PhoneNumber};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub first_name: ClientName,
    pub last_name: ClientName,
    pub email: ClientEmail,
    pub phone_number: PhoneNumber,
}

impl Client {
    /// Returns `true` when the lower-cased `needle` occurs in the first name,
    /// last name or email, ignoring case.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Client data supplied on creation; the store assigns the identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewClient {
    pub first_name: ClientName,
    pub last_name: ClientName,
    pub email: ClientEmail,
    pub phone_number: PhoneNumber,
}

impl NewClient {
    #[must_use]
    pub fn new(
        first_name: ClientName,
        last_name: ClientName,
        email: ClientEmail,
        phone_number: PhoneNumber,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            phone_number,
        }
    }

    /// Attach an identifier producing the stored record.
    pub fn into_client(self, id: ClientId) -> Client {
        Client {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
        }
    }
}

/// Full replacement of an existing client's fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateClient {
    pub first_name: ClientName,
    pub last_name: ClientName,
    pub email: ClientEmail,
    pub phone_number: PhoneNumber,
}

impl UpdateClient {
    #[must_use]
    pub fn new(
        first_name: ClientName,
        last_name: ClientName,
        email: ClientEmail,
        phone_number: PhoneNumber,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            phone_number,
        }
    }

    pub fn apply_to(&self, client: &mut Client) {
        client.first_name = self.first_name.clone();
        client.last_name = self.last_name.clone();
        client.email = self.email.clone();
        client.phone_number = self.phone_number.clone();
    }
}
