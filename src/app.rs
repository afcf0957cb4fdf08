use dioxus::prelude::*;
use rfd::FileDialog;

use crate::config::{AppPaths, CSV_FILTER_EXTENSIONS};
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::components::grid::DataGrid;
use crate::ui::components::toast::Toast;
use crate::ui::state::app_state::{AppState, NOTICE_DURATION};

const BUTTON_STYLE: &str =
    "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;";

#[component]
pub fn App() -> Element {
    let paths = use_context::<AppPaths>();

    let AppState {
        mut session,
        mut notice,
        mut status,
    } = AppState::new(paths.download_dir);

    let (columns, rows, selected_label) = {
        let current = session.read();
        let selected_label = current
            .selected_file()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "No file chosen".to_string());
        (
            current.columns(),
            current.dataset().rows().to_vec(),
            selected_label,
        )
    };
    let current_notice = notice.read().current().cloned();

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 12px; background: #fff; min-height: 100vh;",

            h2 { "CSV Manager" }

            div {
                style: "display: flex; gap: 8px; align-items: center; margin-bottom: 12px;",
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| {
                        let picked = FileDialog::new()
                            .add_filter("CSV", CSV_FILTER_EXTENSIONS)
                            .add_filter("All files", &["*"])
                            .pick_file();
                        if let Some(path) = picked {
                            session.write().select_file(path);
                        }
                    },
                    "Choose File"
                }
                span { "{selected_label}" }
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| {
                        let outcome = run_blocking("upload", || session.write().upload());
                        *status.write() = match &outcome.result {
                            Ok(row_count) => format!("Loaded {row_count} rows"),
                            Err(err) => format!("Upload failed: {err}"),
                        };
                        let ticket = notice.write().show(outcome.notice);
                        spawn(async move {
                            tokio::time::sleep(NOTICE_DURATION).await;
                            notice.write().expire(ticket);
                        });
                    },
                    "Upload"
                }
            }

            DataGrid {
                columns,
                rows,
                on_edit: move |(row_idx, column, value): (usize, String, String)| {
                    session.write().edit_cell(row_idx, &column, value);
                },
                on_delete: move |row_idx: usize| {
                    session.write().delete_row(row_idx);
                },
            }

            div {
                style: "display: flex; gap: 8px; align-items: center;",
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| session.write().add_row(),
                    "Add Row"
                }
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| {
                        let result = run_blocking("download", || session.read().download());
                        *status.write() = match result {
                            Ok(path) => format!("Saved {}", path.display()),
                            Err(err) => {
                                tracing::error!(error = ?err, "download failed");
                                format!("Download failed: {err:#}")
                            }
                        };
                    },
                    "Download CSV"
                }
            }

            p {
                style: "color: #666; margin-top: 12px;",
                "{status}"
            }

            if let Some(current) = current_notice {
                Toast {
                    notice: current,
                    on_dismiss: move |_| notice.write().dismiss(),
                }
            }
        }
    }
}
