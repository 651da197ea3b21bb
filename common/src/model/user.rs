use serde::{Deserialize, Serialize};

/// A registered account as listed by `GET /admin/users`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct UserAccount {
    pub id: u32,
    pub nome: String,
    pub email: String,
    pub matricula: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub must_change_password: bool,
}

/// A pre-approved registration id, as listed by `GET /admin/whitelist`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct WhitelistEntry {
    pub id: u32,
    pub matricula: String,
}

/// Response of `POST /admin/users/{id}/reset-password`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ResetPasswordResponse {
    pub temp_password: String,
}
