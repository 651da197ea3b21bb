//! Pure classification of a calculation response.
//!
//! Separating this from the update logic keeps the state transition and
//! the download side effect decidable (and testable) without a browser:
//! `classify` says which terminal state to enter, which banner to show and
//! whether the error report must be downloaded; the update module merely
//! executes that decision.

use common::model::calculation::CalculationResponse;

use super::state::CalcState;

/// Visual weight of the banner message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
    Info,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Warning => "alert-warning",
            Severity::Error => "alert-error",
            Severity::Info => "alert-info",
        }
    }
}

/// What a classified response asks the orchestrator to do.
#[derive(Debug, PartialEq)]
pub struct Outcome {
    pub state: CalcState,
    pub message: Option<(Severity, String)>,
    /// Error-report fragment to download, at most once per submission.
    pub download: Option<String>,
}

const PARTIAL_MESSAGE: &str =
    "Atenção: Alguns endereços não foram localizados. Verifique o arquivo de erros baixado.";
const EMPTY_MESSAGE: &str =
    "Nenhum endereço válido foi processado. Verifique a formatação da planilha.";

/// Classifies a calculation response.
///
/// A partial success still has usable output: the rows are rendered and
/// the warning shown side by side, never discarded in favour of the error.
/// An empty result without an error file is informational, distinct from
/// both the warning and a failure.
pub fn classify(response: &CalculationResponse) -> Outcome {
    let has_rows = !response.success_data.is_empty();
    match (&response.error_file_url, has_rows) {
        (None, true) => Outcome {
            state: CalcState::Success,
            message: None,
            download: None,
        },
        (Some(url), true) => Outcome {
            state: CalcState::PartialSuccess,
            message: Some((Severity::Warning, PARTIAL_MESSAGE.to_string())),
            download: Some(url.clone()),
        },
        (Some(url), false) => Outcome {
            state: CalcState::Empty,
            message: Some((Severity::Warning, PARTIAL_MESSAGE.to_string())),
            download: Some(url.clone()),
        },
        (None, false) => Outcome {
            state: CalcState::Empty,
            message: Some((Severity::Info, EMPTY_MESSAGE.to_string())),
            download: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::calculation::ResultRow;

    fn row() -> ResultRow {
        ResultRow {
            id_paciente: "P-01".to_string(),
            cep: "05403-900".to_string(),
            distancia_rota_carro_km: Some(12.4),
            distancia_transporte_km: Some(15.1),
            tempo_transporte_hh_mm_ss: "00:42:00".to_string(),
        }
    }

    #[test]
    fn rows_without_error_file_is_success_with_no_download() {
        let outcome = classify(&CalculationResponse {
            success_data: vec![row()],
            error_file_url: None,
        });
        assert_eq!(outcome.state, CalcState::Success);
        assert_eq!(outcome.message, None);
        assert_eq!(outcome.download, None);
    }

    #[test]
    fn rows_with_error_file_is_partial_success_with_one_download() {
        let outcome = classify(&CalculationResponse {
            success_data: vec![row()],
            error_file_url: Some("/files/erros.xlsx".to_string()),
        });
        assert_eq!(outcome.state, CalcState::PartialSuccess);
        assert_eq!(outcome.download.as_deref(), Some("/files/erros.xlsx"));
        let (severity, _) = outcome.message.unwrap();
        assert_eq!(severity, Severity::Warning);
    }

    #[test]
    fn no_rows_and_no_error_file_is_empty_with_no_download() {
        let outcome = classify(&CalculationResponse {
            success_data: vec![],
            error_file_url: None,
        });
        assert_eq!(outcome.state, CalcState::Empty);
        assert_eq!(outcome.download, None);
        let (severity, _) = outcome.message.unwrap();
        assert_eq!(severity, Severity::Info);
    }

    #[test]
    fn no_rows_but_error_file_still_downloads_the_report() {
        let outcome = classify(&CalculationResponse {
            success_data: vec![],
            error_file_url: Some("/files/erros.xlsx".to_string()),
        });
        assert_eq!(outcome.state, CalcState::Empty);
        assert_eq!(outcome.download.as_deref(), Some("/files/erros.xlsx"));
    }
}
