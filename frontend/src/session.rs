//! Client-held session identity.
//!
//! [`SessionStore`] is an explicit service over the browser's
//! `localStorage`, passed to pages as a prop instead of being read
//! ambiently. Writes happen only at login and logout; reads happen from the
//! route guards and the pages. The admin flag is stored as the strings
//! `"true"`/`"false"` and parsed exactly once, here at the store boundary.

use common::model::session::SessionIdentity;
use web_sys::Storage;

const KEY_TOKEN: &str = "token";
const KEY_IS_ADMIN: &str = "isAdmin";
const KEY_NOME: &str = "nome";
const KEY_EMAIL: &str = "email";

/// Handle over the browser key-value storage holding the session identity.
///
/// Cloneable and comparable so it can travel through component props; all
/// clones observe the same underlying storage (last-writer-wins).
#[derive(Clone, PartialEq, Default)]
pub struct SessionStore;

impl SessionStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// Persists the identity established at login.
    pub fn save(&self, identity: &SessionIdentity) {
        if let Some(storage) = self.storage() {
            for (key, value) in entries(identity) {
                let _ = storage.set_item(key, &value);
            }
        }
    }

    pub fn token(&self) -> Option<String> {
        self.storage()?.get_item(KEY_TOKEN).ok()?
    }

    pub fn nome(&self) -> String {
        self.storage()
            .and_then(|s| s.get_item(KEY_NOME).ok().flatten())
            .unwrap_or_else(|| "Usuário".to_string())
    }

    pub fn email(&self) -> Option<String> {
        self.storage()?.get_item(KEY_EMAIL).ok()?
    }

    pub fn is_admin(&self) -> bool {
        let raw = self
            .storage()
            .and_then(|s| s.get_item(KEY_IS_ADMIN).ok().flatten());
        parse_admin_flag(raw.as_deref())
    }

    /// Clears every stored key. Used at logout and on authentication
    /// rejection.
    pub fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.clear();
        }
    }
}

/// The storage key/value pairs for an identity. The camelCase keys are the
/// client vocabulary; the backend's snake_case never reaches storage.
fn entries(identity: &SessionIdentity) -> [(&'static str, String); 4] {
    [
        (KEY_TOKEN, identity.token.clone()),
        (KEY_IS_ADMIN, identity.is_admin.to_string()),
        (KEY_NOME, identity.nome.clone()),
        (KEY_EMAIL, identity.email.clone()),
    ]
}

/// Exact string equality, as the consumers of the stored flag expect.
fn parse_admin_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::session::{LoginResponse, SessionIdentity};

    fn identity() -> SessionIdentity {
        let resp = LoginResponse {
            access_token: "t".to_string(),
            token_type: "bearer".to_string(),
            is_admin: true,
            nome: "Ana".to_string(),
            must_change_password: false,
        };
        SessionIdentity::from_login(&resp, "ana@hc.br")
    }

    #[test]
    fn entries_use_camel_case_keys() {
        let pairs = entries(&identity());
        assert_eq!(pairs[0], ("token", "t".to_string()));
        assert_eq!(pairs[1], ("isAdmin", "true".to_string()));
        assert_eq!(pairs[2], ("nome", "Ana".to_string()));
        assert_eq!(pairs[3], ("email", "ana@hc.br".to_string()));
    }

    #[test]
    fn admin_flag_requires_exact_true() {
        assert!(parse_admin_flag(Some("true")));
        assert!(!parse_admin_flag(Some("True")));
        assert!(!parse_admin_flag(Some("1")));
        assert!(!parse_admin_flag(None));
    }
}
