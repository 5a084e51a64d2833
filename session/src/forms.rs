//! Request bodies for credential and profile submissions, with the minimal
//! validation that gates the auth flow.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use serde::{Deserialize, Serialize};

use crate::user::{Availability, ManagerialDivision, TechnicalDivision};

/// `POST /auth/signin` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl SignInRequest {
    /// Trim the email and require both fields.
    ///
    /// # Errors
    ///
    /// Returns the inline message to show when a field is blank.
    pub fn from_form(email: &str, password: &str) -> Result<Self, &'static str> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err("Enter your email and password.");
        }
        Ok(Self { email: email.to_owned(), password: password.to_owned() })
    }
}

/// `POST /auth/signup` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignUpRequest {
    /// Trim name/email, require every field and matching passwords.
    ///
    /// # Errors
    ///
    /// Returns the inline message to show for the first failing check.
    pub fn from_form(name: &str, email: &str, password: &str, confirm: &str) -> Result<Self, &'static str> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err("Fill in your name, email and password.");
        }
        if password != confirm {
            return Err("Passwords do not match.");
        }
        Ok(Self { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
    }
}

/// `{ token }` answer from sign-in, sign-up and the OAuth exchange.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub token: Option<String>,
}

/// `PUT /profile` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub main_division: TechnicalDivision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managerial_division: Option<ManagerialDivision>,
    pub available_times: Vec<Availability>,
}

/// In-progress profile-completion form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub main_division: Option<TechnicalDivision>,
    pub managerial_division: Option<ManagerialDivision>,
    pub available_times: Vec<Availability>,
}

impl ProfileDraft {
    /// Toggle one availability slot, keeping display order.
    pub fn toggle_availability(&mut self, slot: Availability, checked: bool) {
        self.available_times.retain(|s| *s != slot);
        if checked {
            self.available_times.push(slot);
            self.available_times
                .sort_by_key(|s| Availability::ALL.iter().position(|a| a == s));
        }
    }

    /// Produce the request body once a technical division is chosen.
    ///
    /// # Errors
    ///
    /// Returns the inline message when the technical division is missing.
    pub fn finish(&self) -> Result<ProfileUpdate, &'static str> {
        let main_division = self.main_division.ok_or("Select your technical division.")?;
        Ok(ProfileUpdate {
            main_division,
            managerial_division: self.managerial_division,
            available_times: self.available_times.clone(),
        })
    }
}
