use serde::{Deserialize, Serialize};

/// Request payload for the registration endpoint.
/// The matrícula must have been pre-approved by an admin.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct RegisterRequest {
    pub nome: String,
    pub matricula: String,
    pub email: String,
    pub senha: String,
}

/// Request payload for `POST /users/change-password`.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ChangePasswordRequest {
    pub new_password: String,
}

/// Request payload for `POST /admin/whitelist`.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct AddWhitelistRequest {
    pub matricula: String,
}
