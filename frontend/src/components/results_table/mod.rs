//! Sortable results table.
//!
//! Holds only the active sort column and direction; the rows come in as a
//! prop and are re-ordered on render through [`sort::sorted`], never
//! mutated. Clicking the active column's header toggles the direction,
//! clicking another column activates it ascending.

mod sort;

pub use sort::{Column, Direction};

use yew::html::Scope;
use yew::prelude::*;

use common::model::calculation::ResultRow;

pub enum Msg {
    SortBy(Column),
}

#[derive(Properties, PartialEq)]
pub struct ResultsTableProps {
    pub data: Vec<ResultRow>,
}

pub struct ResultsTable {
    order_by: Column,
    order: Direction,
}

impl Component for ResultsTable {
    type Message = Msg;
    type Properties = ResultsTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        // Default sort: car-route distance, ascending.
        Self {
            order_by: Column::DistanciaCarro,
            order: Direction::Asc,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SortBy(column) => {
                if self.order_by == column {
                    self.order = self.order.toggled();
                } else {
                    self.order_by = column;
                    self.order = Direction::Asc;
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let rows = sort::sorted(&ctx.props().data, self.order_by, self.order);

        html! {
            <table class="results-table">
                <thead>
                    <tr>
                        {
                            Column::ALL.iter().map(|&column| {
                                self.header_cell(link, column)
                            }).collect::<Html>()
                        }
                    </tr>
                </thead>
                <tbody>
                    {
                        rows.iter().map(|row| {
                            html! {
                                <tr key={row.id_paciente.clone()}>
                                    <td>{ &row.id_paciente }</td>
                                    <td>{ &row.cep }</td>
                                    <td class="numeric">{ format_km(row.distancia_rota_carro_km) }</td>
                                    <td class="numeric">{ format_km(row.distancia_transporte_km) }</td>
                                    <td>{ &row.tempo_transporte_hh_mm_ss }</td>
                                </tr>
                            }
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
        }
    }
}

impl ResultsTable {
    fn header_cell(&self, link: &Scope<Self>, column: Column) -> Html {
        let active = self.order_by == column;
        let arrow = match (active, self.order) {
            (false, _) => "",
            (true, Direction::Asc) => " ▲",
            (true, Direction::Desc) => " ▼",
        };
        let class = classes!(
            "sortable",
            column.is_numeric().then_some("numeric"),
            active.then_some("active"),
        );
        html! {
            <th {class} onclick={link.callback(move |_| Msg::SortBy(column))}>
                { column.label() }{ arrow }
            </th>
        }
    }
}

fn format_km(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::new(),
    }
}
