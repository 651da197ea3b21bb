//! Client-side export pipeline.
//!
//! Two independent download paths, neither involving a server round-trip
//! beyond fetching the already-generated error report:
//!
//! - the success export serializes the in-memory result rows into an XLSX
//!   workbook with `rust_xlsxwriter` and hands the bytes to the browser as
//!   an object URL behind a simulated anchor click;
//! - the error-report download resolves the backend-returned fragment
//!   against the configured base URL and anchor-clicks it under a fixed
//!   file name.

use rust_xlsxwriter::{Workbook, XlsxError};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use common::model::calculation::ResultRow;

use crate::config;

const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const ERROR_REPORT_NAME: &str = "relatorio_erros.xlsx";

/// Column headers of the exported sheet, matching the backend field names
/// so a re-import round-trips.
const HEADERS: [&str; 5] = [
    "id_paciente",
    "cep",
    "distancia_rota_carro_km",
    "distancia_transporte_km",
    "tempo_transporte_hh_mm_ss",
];

/// Serializes the result rows into a single-sheet workbook named
/// `Resultados` and returns the XLSX bytes.
pub fn build_workbook(rows: &[ResultRow]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Resultados")?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_string(r, 0, &row.id_paciente)?;
        worksheet.write_string(r, 1, &row.cep)?;
        if let Some(km) = row.distancia_rota_carro_km {
            worksheet.write_number(r, 2, km)?;
        }
        if let Some(km) = row.distancia_transporte_km {
            worksheet.write_number(r, 3, km)?;
        }
        worksheet.write_string(r, 4, &row.tempo_transporte_hh_mm_ss)?;
    }

    workbook.save_to_buffer()
}

/// File name for a success export generated on the given date, e.g.
/// `CardioGeriatria_Rotas_05-03-2024.xlsx`.
pub fn export_file_name(day: u32, month: u32, year: u32) -> String {
    format!("CardioGeriatria_Rotas_{day:02}-{month:02}-{year:04}.xlsx")
}

/// Builds the workbook for the current results and triggers the browser
/// download, date-stamped with today's date.
pub fn export_results(rows: &[ResultRow]) -> Result<(), XlsxError> {
    let bytes = build_workbook(rows)?;
    let now = js_sys::Date::new_0();
    let name = export_file_name(now.get_date(), now.get_month() + 1, now.get_full_year());
    download_bytes(&bytes, &name);
    Ok(())
}

/// Downloads the backend-generated error report under its fixed name.
pub fn download_error_file(fragment: &str) {
    let url = config::join_download_url(config::api_base(), fragment);
    trigger_download(&url, ERROR_REPORT_NAME);
}

/// Wraps raw bytes in a Blob object URL and anchor-clicks it.
fn download_bytes(bytes: &[u8], file_name: &str) {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(XLSX_MIME);
    if let Ok(blob) = Blob::new_with_u8_array_sequence_and_options(&parts, &options) {
        if let Ok(url) = Url::create_object_url_with_blob(&blob) {
            trigger_download(&url, file_name);
            let _ = Url::revoke_object_url(&url);
        }
    }
}

/// Simulates a click on a transient `<a download>` element. A download, not
/// a navigation.
fn trigger_download(href: &str, file_name: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(element) = document.create_element("a") else {
        return;
    };
    let anchor: HtmlAnchorElement = element.unchecked_into();
    anchor.set_href(href);
    anchor.set_download(file_name);
    if let Some(body) = document.body() {
        if body.append_child(&anchor).is_ok() {
            anchor.click();
        }
        anchor.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_uses_zero_padded_day_month_year() {
        assert_eq!(
            export_file_name(5, 3, 2024),
            "CardioGeriatria_Rotas_05-03-2024.xlsx"
        );
    }

    #[test]
    fn file_name_keeps_two_digit_fields() {
        assert_eq!(
            export_file_name(28, 11, 2025),
            "CardioGeriatria_Rotas_28-11-2025.xlsx"
        );
    }

    #[test]
    fn workbook_builds_for_rows_with_gaps() {
        let rows = vec![ResultRow {
            id_paciente: "P-01".to_string(),
            cep: "05403-900".to_string(),
            distancia_rota_carro_km: Some(12.4),
            distancia_transporte_km: None,
            tempo_transporte_hh_mm_ss: "00:42:00".to_string(),
        }];
        let bytes = build_workbook(&rows).unwrap();
        // XLSX files are ZIP containers; check the magic bytes.
        assert_eq!(&bytes[..2], b"PK");
    }
}
