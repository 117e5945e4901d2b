//! # Local Accounts
//!
//! Sign-up and sign-in against a user list kept in the key-value store. There is no
//! server: the "database" is a JSON array under [`USERS_DB_KEY`] and the signed-in
//! account is copied to [`USER_KEY`]. Passwords are stored as entered.

use chrono::{Datelike, Local};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::localization::t;
use crate::profile::{default_bio, format_join_date, Preferences, UserProfile};
use crate::storage::{
    load_json, load_json_or_default, save_json, KeyValueStore, USERS_DB_KEY, USER_KEY,
};

/// A profile plus its password, as persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(flatten)]
    pub profile: UserProfile,
    #[serde(default)]
    pub password: String,
}

/// Values from the sign-up form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub password: String,
    pub confirm_password: String,
    pub preferences: Preferences,
}

#[derive(Debug)]
pub enum AuthError {
    /// Password and confirmation differ
    PasswordMismatch,
    /// No account with this email and password
    InvalidCredentials,
    /// The store could not be read or written
    Storage(anyhow::Error),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::PasswordMismatch => write!(f, "Passwords do not match"),
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthError::Storage(err) => write!(f, "Account storage error: {err:#}"),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Storage(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        AuthError::Storage(err)
    }
}

impl AuthError {
    /// Message to show the user
    pub fn user_message(&self) -> String {
        match self {
            AuthError::PasswordMismatch => t("auth-password-mismatch"),
            AuthError::InvalidCredentials => t("auth-invalid-credentials"),
            AuthError::Storage(_) => t("auth-storage-failed"),
        }
    }
}

impl SignupForm {
    fn into_account<D: Datelike>(self, joined: &D) -> UserAccount {
        UserAccount {
            profile: UserProfile {
                bio: default_bio(&self.name),
                name: self.name,
                email: self.email,
                phone: self.phone,
                location: self.location,
                join_date: format_join_date(joined),
                preferences: Preferences {
                    allergies: Vec::new(),
                    ..self.preferences
                },
            },
            password: self.password,
        }
    }
}

/// Create an account and sign it in.
///
/// The user list is replaced by a list holding only the new account.
pub fn signup<S: KeyValueStore + ?Sized>(
    store: &mut S,
    form: SignupForm,
) -> Result<UserAccount, AuthError> {
    if form.password != form.confirm_password {
        return Err(AuthError::PasswordMismatch);
    }

    let account = form.into_account(&Local::now().date_naive());
    save_json(store, USER_KEY, &account)?;
    save_json(store, USERS_DB_KEY, std::slice::from_ref(&account))?;
    info!("Signed up {}", account.profile.email);
    Ok(account)
}

/// Sign in with email and password
pub fn login<S: KeyValueStore + ?Sized>(
    store: &mut S,
    email: &str,
    password: &str,
) -> Result<UserAccount, AuthError> {
    let accounts = load_accounts(&*store)?;
    let account = accounts
        .into_iter()
        .find(|a| a.profile.email == email && a.password == password)
        .ok_or(AuthError::InvalidCredentials)?;

    save_json(store, USER_KEY, &account)?;
    info!("Signed in {}", account.profile.email);
    Ok(account)
}

/// Forget the signed-in account. The user list is kept.
pub fn logout<S: KeyValueStore + ?Sized>(store: &mut S) -> anyhow::Result<()> {
    store.remove(USER_KEY)
}

/// The signed-in account, if any
pub fn current_user<S: KeyValueStore + ?Sized>(store: &S) -> anyhow::Result<Option<UserAccount>> {
    let account: Option<UserAccount> = load_json_or_default(store, USER_KEY)?;
    Ok(account.map(|mut account| {
        account.profile = account.profile.with_default_bio();
        account
    }))
}

/// Every stored account. A corrupt list reads as empty.
pub fn load_accounts<S: KeyValueStore + ?Sized>(store: &S) -> anyhow::Result<Vec<UserAccount>> {
    Ok(load_json_or_default(store, USERS_DB_KEY)?.unwrap_or_default())
}

/// Write an edited profile back to the signed-in account and to its entry in the
/// user list. The entry is found by the email the account had before the edit.
pub fn save_profile<S: KeyValueStore + ?Sized>(
    store: &mut S,
    profile: &UserProfile,
) -> anyhow::Result<()> {
    let current: Option<UserAccount> = load_json(&*store, USER_KEY).unwrap_or_else(|err| {
        warn!("Replacing unreadable signed-in account: {err:#}");
        None
    });
    let (previous_email, password) = match current {
        Some(account) => (account.profile.email, account.password),
        None => (String::new(), String::new()),
    };

    let updated = UserAccount {
        profile: profile.clone(),
        password,
    };
    save_json(store, USER_KEY, &updated)?;

    let mut accounts = load_accounts(&*store)?;
    if let Some(entry) = accounts
        .iter_mut()
        .find(|a| a.profile.email == previous_email)
    {
        *entry = updated;
        save_json(store, USERS_DB_KEY, &accounts)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn form(email: &str, password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            name: "Asha".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            ..SignupForm::default()
        }
    }

    #[test]
    fn test_signup_then_login() {
        let mut store = MemoryStore::new();
        let account = signup(&mut store, form("asha@example.com", "masala", "masala")).unwrap();
        assert_eq!(account.profile.bio, "Welcome to Cooksy! I'm Asha and I love cooking.");

        logout(&mut store).unwrap();
        assert!(current_user(&store).unwrap().is_none());

        let again = login(&mut store, "asha@example.com", "masala").unwrap();
        assert_eq!(again, account);
        assert_eq!(current_user(&store).unwrap(), Some(account));
    }

    #[test]
    fn test_password_mismatch() {
        let mut store = MemoryStore::new();
        let err = signup(&mut store, form("a@b.c", "one", "two")).unwrap_err();
        assert!(matches!(err, AuthError::PasswordMismatch));
        assert_eq!(err.user_message(), "Passwords do not match!");
        assert!(store.is_empty());
    }

    #[test]
    fn test_wrong_password() {
        let mut store = MemoryStore::new();
        signup(&mut store, form("a@b.c", "right", "right")).unwrap();

        let err = login(&mut store, "a@b.c", "wrong").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(err.user_message(), "Invalid email or password!");
    }

    #[test]
    fn test_signup_replaces_user_list() {
        let mut store = MemoryStore::new();
        signup(&mut store, form("first@x.in", "pw", "pw")).unwrap();
        signup(&mut store, form("second@x.in", "pw", "pw")).unwrap();

        let accounts = load_accounts(&store).unwrap();
        assert_eq!(accounts.len(), 1);
        assert!(matches!(
            login(&mut store, "first@x.in", "pw"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_save_profile_keeps_password() {
        let mut store = MemoryStore::new();
        let account = signup(&mut store, form("asha@example.com", "pw", "pw")).unwrap();

        let mut profile = account.profile.clone();
        profile.email = "asha@cooksy.in".to_string();
        profile.location = "Kochi".to_string();
        save_profile(&mut store, &profile).unwrap();

        let signed_in = current_user(&store).unwrap().unwrap();
        assert_eq!(signed_in.profile.location, "Kochi");
        assert_eq!(signed_in.password, "pw");

        let again = login(&mut store, "asha@cooksy.in", "pw").unwrap();
        assert_eq!(again.profile.location, "Kochi");
    }

    #[test]
    fn test_account_json_is_flat() {
        let account = form("a@b.c", "pw", "pw").into_account(&Local::now().date_naive());
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["email"], "a@b.c");
        assert_eq!(json["password"], "pw");
        assert_eq!(json["preferences"]["dietType"], "Vegetarian");
    }
}
