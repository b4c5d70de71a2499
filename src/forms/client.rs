use serde::Deserialize;
use validator::Validate;

use crate::domain::client::{NewClient, UpdateClient};
use crate::domain::types::{ClientEmail, ClientName, PhoneNumber};
use crate::forms::FormError;

/// JSON body for creating or replacing a client.
///
/// Any `id` sent by the caller is ignored: new clients get a server-assigned
/// identifier and updates take theirs from the path.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientForm {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone_number: String,
}

/// Validated client fields ready to be turned into domain values.
#[derive(Debug)]
pub struct ClientPayload {
    pub first_name: ClientName,
    pub last_name: ClientName,
    pub email: ClientEmail,
    pub phone_number: PhoneNumber,
}

impl TryFrom<ClientForm> for ClientPayload {
    type Error = FormError;

    fn try_from(form: ClientForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            first_name: ClientName::try_from(form.first_name)
                .map_err(|_| FormError::InvalidName)?,
            last_name: ClientName::try_from(form.last_name).map_err(|_| FormError::InvalidName)?,
            email: ClientEmail::try_from(form.email).map_err(|_| FormError::InvalidEmail)?,
            phone_number: PhoneNumber::try_from(form.phone_number)
                .map_err(|_| FormError::InvalidPhoneNumber)?,
        })
    }
}

impl ClientPayload {
    pub fn into_new_client(self) -> NewClient {
        NewClient::new(
            self.first_name,
            self.last_name,
            self.email,
            self.phone_number,
        )
    }

    pub fn into_update(self) -> UpdateClient {
        UpdateClient::new(
            self.first_name,
            self.last_name,
            self.email,
            self.phone_number,
        )
    }
}
