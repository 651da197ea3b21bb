use serde::{Deserialize, Serialize};

/// One patient's computed distance/time outcome, as produced by the
/// calculation backend.
///
/// The two distance columns are numeric kilometres; the backend may omit
/// them for rows it could only partially resolve, so they deserialize
/// defensively into `Option<f64>`. The transport time is deliberately kept
/// as the formatted `HH:MM:SS` text the backend sends — it is displayed and
/// sorted as text, never parsed into a duration.
///
/// `id_paciente` is unique within a result set and serves as the stable
/// row key in the results table.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ResultRow {
    pub id_paciente: String,
    pub cep: String,
    #[serde(default)]
    pub distancia_rota_carro_km: Option<f64>,
    #[serde(default)]
    pub distancia_transporte_km: Option<f64>,
    #[serde(default)]
    pub tempo_transporte_hh_mm_ss: String,
}

/// Response of `POST /api/calculate-distances/`.
///
/// Both fields may be present at once: a partially successful run returns
/// the rows it could resolve in `success_data` plus a reference to a
/// generated error-report file listing the rows it could not.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct CalculationResponse {
    #[serde(default)]
    pub success_data: Vec<ResultRow>,
    #[serde(default)]
    pub error_file_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_with_missing_distances_deserializes() {
        let row: ResultRow = serde_json::from_str(
            r#"{"id_paciente":"P-07","cep":"01310-100"}"#,
        )
        .unwrap();
        assert_eq!(row.id_paciente, "P-07");
        assert_eq!(row.distancia_rota_carro_km, None);
        assert_eq!(row.tempo_transporte_hh_mm_ss, "");
    }

    #[test]
    fn full_response_deserializes() {
        let resp: CalculationResponse = serde_json::from_str(
            r#"{
                "success_data": [{
                    "id_paciente": "P-01",
                    "cep": "05403-900",
                    "distancia_rota_carro_km": 12.4,
                    "distancia_transporte_km": 15.1,
                    "tempo_transporte_hh_mm_ss": "00:42:00"
                }],
                "error_file_url": "/files/erros_123.xlsx"
            }"#,
        )
        .unwrap();
        assert_eq!(resp.success_data.len(), 1);
        assert_eq!(
            resp.error_file_url.as_deref(),
            Some("/files/erros_123.xlsx")
        );
    }

    #[test]
    fn empty_body_yields_empty_response() {
        let resp: CalculationResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.success_data.is_empty());
        assert!(resp.error_file_url.is_none());
    }
}
