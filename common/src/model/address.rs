use serde::{Deserialize, Serialize};

/// Origin address for a route calculation run.
///
/// All five fields are mandatory free-form strings; the backend is the
/// authority on address validity, the client only checks for non-empty
/// values before submitting. The struct is copied into the outbound
/// multipart payload with each field prefixed by `base_` (e.g. `base_rua`).
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct BaseAddress {
    pub rua: String,
    pub numero: String,
    pub bairro: String,
    pub municipio: String,
    pub cep: String,
}

impl BaseAddress {
    /// The clinic's own address, used to pre-populate the form.
    pub fn default_origin() -> Self {
        Self {
            rua: "Av. Dr. Enéas Carvalho de Aguiar".to_string(),
            numero: "44".to_string(),
            bairro: "Cerqueira César".to_string(),
            municipio: "São Paulo".to_string(),
            cep: "05403-900".to_string(),
        }
    }

    /// True when every field has a value. Convenience guard only; the
    /// backend re-validates.
    pub fn is_complete(&self) -> bool {
        !self.rua.is_empty()
            && !self.numero.is_empty()
            && !self.bairro.is_empty()
            && !self.municipio.is_empty()
            && !self.cep.is_empty()
    }

    /// Field values in submission order, paired with their multipart names.
    pub fn form_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("base_rua", &self.rua),
            ("base_numero", &self.numero),
            ("base_bairro", &self.bairro),
            ("base_municipio", &self.municipio),
            ("base_cep", &self.cep),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_origin_is_complete() {
        assert!(BaseAddress::default_origin().is_complete());
    }

    #[test]
    fn blank_field_is_incomplete() {
        let mut address = BaseAddress::default_origin();
        address.cep = String::new();
        assert!(!address.is_complete());
    }

    #[test]
    fn form_fields_carry_base_prefix() {
        let address = BaseAddress::default_origin();
        let fields = address.form_fields();
        assert_eq!(fields[0].0, "base_rua");
        assert_eq!(fields[4], ("base_cep", "05403-900"));
    }
}
