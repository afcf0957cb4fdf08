use dioxus::prelude::*;

use crate::domain::entities::dataset::RowRecord;

const CELL_STYLE: &str = "border: 1px solid #ddd; padding: 4px;";
const HEADER_STYLE: &str =
    "border: 1px solid #ddd; padding: 6px 8px; background: #f5f5f5; position: sticky; top: 0; text-align: left;";

/// Editable table. Every row shows one input per header column; a row
/// without a value for a column shows an empty input.
#[component]
pub fn DataGrid(
    columns: Vec<String>,
    rows: Vec<RowRecord>,
    on_edit: EventHandler<(usize, String, String)>,
    on_delete: EventHandler<usize>,
) -> Element {
    rsx! {
        div {
            style: "overflow: auto; margin-bottom: 12px; border: 1px solid #ddd; border-radius: 6px;",
            table {
                style: "border-collapse: collapse; width: 100%;",
                thead {
                    tr {
                        for column in columns.iter() {
                            th { key: "{column}", style: HEADER_STYLE, "{column}" }
                        }
                        th { style: HEADER_STYLE, "Actions" }
                    }
                }
                tbody {
                    {rows.iter().enumerate().map(|(row_idx, row)| {
                        rsx!(
                            tr {
                                key: "{row_idx}",
                                {columns.iter().map(|column| {
                                    let value = row.get(column).cloned().unwrap_or_default();
                                    let column = column.clone();
                                    rsx!(
                                        td {
                                            key: "{column}",
                                            style: CELL_STYLE,
                                            input {
                                                style: "width: 100%; box-sizing: border-box; border: 1px solid #ccc; border-radius: 4px; padding: 4px;",
                                                value: "{value}",
                                                oninput: move |event| {
                                                    on_edit.call((row_idx, column.clone(), event.value()));
                                                },
                                            }
                                        }
                                    )
                                })}
                                td {
                                    style: CELL_STYLE,
                                    button {
                                        style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                                        onclick: move |_| on_delete.call(row_idx),
                                        "Delete"
                                    }
                                }
                            }
                        )
                    })}
                }
            }
        }
    }
}
