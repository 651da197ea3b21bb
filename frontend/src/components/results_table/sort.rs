//! Client-side ordering of result rows.
//!
//! The comparator reproduces the table's contract exactly: numeric columns
//! compare as `f64` with missing or NaN values pushed to positive infinity
//! (last ascending, first descending), textual columns compare as plain
//! strings. The transport-time column is textual on purpose — `"9:00:00"`
//! sorts after `"10:00:00"` ascending — and the sort is stable, so equal
//! keys keep their original relative order.

use std::cmp::Ordering;

use common::model::calculation::ResultRow;

/// The five table columns, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    IdPaciente,
    Cep,
    DistanciaCarro,
    DistanciaTransporte,
    TempoTransporte,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::IdPaciente,
        Column::Cep,
        Column::DistanciaCarro,
        Column::DistanciaTransporte,
        Column::TempoTransporte,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Column::IdPaciente => "ID Paciente",
            Column::Cep => "CEP",
            Column::DistanciaCarro => "Distancia (Carro)",
            Column::DistanciaTransporte => "Distancia (Transporte)",
            Column::TempoTransporte => "Tempo de Transporte (HH:MM:SS)",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Column::DistanciaCarro | Column::DistanciaTransporte)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// Returns a new ordering of `rows` without mutating the input.
pub fn sorted(rows: &[ResultRow], column: Column, direction: Direction) -> Vec<ResultRow> {
    let mut out = rows.to_vec();
    // Vec::sort_by is stable, so ties keep their original relative order.
    out.sort_by(|a, b| {
        let ordering = compare(a, b, column);
        match direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });
    out
}

fn compare(a: &ResultRow, b: &ResultRow, column: Column) -> Ordering {
    if column.is_numeric() {
        numeric_key(a, column).total_cmp(&numeric_key(b, column))
    } else {
        text_value(a, column).cmp(text_value(b, column))
    }
}

/// Missing and NaN values sort as positive infinity.
fn numeric_key(row: &ResultRow, column: Column) -> f64 {
    let value = match column {
        Column::DistanciaCarro => row.distancia_rota_carro_km,
        Column::DistanciaTransporte => row.distancia_transporte_km,
        _ => None,
    };
    value.filter(|v| !v.is_nan()).unwrap_or(f64::INFINITY)
}

fn text_value(row: &ResultRow, column: Column) -> &str {
    match column {
        Column::IdPaciente => &row.id_paciente,
        Column::Cep => &row.cep,
        Column::TempoTransporte => &row.tempo_transporte_hh_mm_ss,
        Column::DistanciaCarro | Column::DistanciaTransporte => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, carro: Option<f64>, tempo: &str) -> ResultRow {
        ResultRow {
            id_paciente: id.to_string(),
            cep: "05403-900".to_string(),
            distancia_rota_carro_km: carro,
            distancia_transporte_km: None,
            tempo_transporte_hh_mm_ss: tempo.to_string(),
        }
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let rows = vec![
            row("c", Some(3.0), "01:00:00"),
            row("a", Some(1.0), "00:20:00"),
            row("b", Some(2.0), "00:40:00"),
        ];
        let once = sorted(&rows, Column::DistanciaCarro, Direction::Asc);
        let twice = sorted(&once, Column::DistanciaCarro, Direction::Asc);
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_distance_sorts_as_positive_infinity() {
        let rows = vec![
            row("sem-rota", None, ""),
            row("perto", Some(2.5), ""),
            row("longe", Some(40.0), ""),
        ];
        let asc = sorted(&rows, Column::DistanciaCarro, Direction::Asc);
        assert_eq!(asc.last().unwrap().id_paciente, "sem-rota");
        let desc = sorted(&rows, Column::DistanciaCarro, Direction::Desc);
        assert_eq!(desc.first().unwrap().id_paciente, "sem-rota");
    }

    #[test]
    fn nan_distance_sorts_as_positive_infinity() {
        let rows = vec![
            row("nan", Some(f64::NAN), ""),
            row("ok", Some(10.0), ""),
        ];
        let asc = sorted(&rows, Column::DistanciaCarro, Direction::Asc);
        assert_eq!(asc.first().unwrap().id_paciente, "ok");
    }

    #[test]
    fn transport_time_sorts_lexicographically() {
        // "10:00:00" < "9:00:00" as strings even though 9h < 10h.
        let rows = vec![
            row("nove", None, "9:00:00"),
            row("dez", None, "10:00:00"),
        ];
        let asc = sorted(&rows, Column::TempoTransporte, Direction::Asc);
        assert_eq!(asc[0].id_paciente, "dez");
        assert_eq!(asc[1].id_paciente, "nove");
    }

    #[test]
    fn zero_padded_times_coincide_with_chronological_order() {
        let rows = vec![
            row("b", None, "01:00:00"),
            row("a", None, "00:09:00"),
        ];
        let asc = sorted(&rows, Column::TempoTransporte, Direction::Asc);
        assert_eq!(asc[0].id_paciente, "a");
    }

    #[test]
    fn ties_keep_original_relative_order() {
        let rows = vec![
            row("primeiro", Some(5.0), ""),
            row("segundo", Some(5.0), ""),
            row("terceiro", Some(1.0), ""),
        ];
        let asc = sorted(&rows, Column::DistanciaCarro, Direction::Asc);
        assert_eq!(asc[1].id_paciente, "primeiro");
        assert_eq!(asc[2].id_paciente, "segundo");
    }

    #[test]
    fn input_is_not_mutated() {
        let rows = vec![row("b", Some(2.0), ""), row("a", Some(1.0), "")];
        let _ = sorted(&rows, Column::DistanciaCarro, Direction::Asc);
        assert_eq!(rows[0].id_paciente, "b");
    }

    #[test]
    fn direction_toggles() {
        assert_eq!(Direction::Asc.toggled(), Direction::Desc);
        assert_eq!(Direction::Desc.toggled(), Direction::Asc);
    }
}
