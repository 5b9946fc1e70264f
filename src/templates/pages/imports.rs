use crate::db::import_runs::ImportRun;
use crate::templates::{card, desktop_layout};
use chrono::DateTime;
use maud::{html, Markup};

pub fn imports_page(runs: &[ImportRun]) -> Markup {
    desktop_layout(
        "Imports",
        html! {
            h1 { "Imports" }

            (card("Recent Runs", html! {
                @if runs.is_empty() {
                    p class="muted" { "No imports yet. Run `listings import <file.csv>`." }
                } @else {
                    div style="overflow-x: auto;" {
                        table style="font-size: 0.9em;" {
                            thead {
                                tr {
                                    th { "ID" }
                                    th { "Source" }
                                    th { "Started" }
                                    th { "Status" }
                                    th { "Processed" }
                                    th { "Added" }
                                    th { "Skipped" }
                                }
                            }
                            tbody {
                                @for run in runs {
                                    tr {
                                        td { (run.id) }
                                        td { code { (run.source_path) } }
                                        td { (format_timestamp(run.started_at)) }
                                        td {
                                            @if run.success {
                                                span style="color: #059669;" { "Completed" }
                                            } @else if run.finished_at.is_none() {
                                                span class="muted" { "Running" }
                                            } @else {
                                                span style="color: #dc2626;" title=[run.error_message.as_deref()] { "Failed" }
                                            }
                                        }
                                        td { (run.rows_processed.unwrap_or(0)) }
                                        td { (run.rows_added.unwrap_or(0)) }
                                        td { (run.rows_skipped.unwrap_or(0)) }
                                    }
                                }
                            }
                        }
                    }
                }
            }))
        },
    )
}

fn format_timestamp(unix: i64) -> String {
    DateTime::from_timestamp(unix, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| unix.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_runs_are_marked() {
        let runs = vec![ImportRun {
            id: 7,
            source_path: "trulia1.csv".into(),
            started_at: 1_743_465_600,
            finished_at: Some(1_743_465_660),
            rows_processed: Some(12),
            rows_added: Some(0),
            rows_skipped: Some(12),
            success: false,
            error_message: Some("disk I/O error".into()),
        }];
        let html = imports_page(&runs).into_string();
        assert!(html.contains("trulia1.csv"));
        assert!(html.contains("Failed"));
        assert!(html.contains("disk I/O error"));
        assert!(html.contains("2025-04-01 00:00 UTC"));
    }
}
