use serde::{Deserialize, Serialize};

/// Raw authentication response of `POST /token`, exactly as the backend
/// sends it (snake_case field names).
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub is_admin: bool,
    pub nome: String,
    pub must_change_password: bool,
}

/// The client-held identity bundle established at login.
///
/// This is the camelCase vocabulary the rest of the client speaks; the
/// rename from the backend's snake_case happens exactly once, in
/// [`SessionIdentity::from_login`]. The email is not part of the backend
/// response — it is the value the user typed into the login form.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionIdentity {
    pub token: String,
    pub nome: String,
    pub is_admin: bool,
    pub must_change_password: bool,
    pub email: String,
}

impl SessionIdentity {
    /// Adapts the backend login response into the client vocabulary.
    /// Pure data-shape adapter, no other logic.
    pub fn from_login(resp: &LoginResponse, email: &str) -> Self {
        Self {
            token: resp.access_token.clone(),
            nome: resp.nome.clone(),
            is_admin: resp.is_admin,
            must_change_password: resp.must_change_password,
            email: email.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_field_renaming() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{
                "access_token": "t",
                "token_type": "bearer",
                "is_admin": true,
                "nome": "Ana",
                "must_change_password": false
            }"#,
        )
        .unwrap();
        let identity = SessionIdentity::from_login(&resp, "ana@hc.br");
        assert_eq!(identity.token, "t");
        assert_eq!(identity.nome, "Ana");
        assert!(identity.is_admin);
        assert!(!identity.must_change_password);
        assert_eq!(identity.email, "ana@hc.br");
    }
}
