use std::fmt::Write;

use laundry_api::models::{Board, Machine};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::configs::Dashboard;

/// Turns boards into the dashboard markup.
pub struct RenderService {
    dashboard: Dashboard,
}

impl RenderService {
    pub fn new(dashboard: Dashboard) -> Self {
        Self { dashboard }
    }

    /// Full page; the script swaps `#board` on every `board` event.
    pub fn page(&self, board: &Board) -> String {
        let title = escape(&self.dashboard.title);
        let subtitle = escape(&self.dashboard.subtitle);
        let accent = escape(&self.dashboard.accent);
        let backdrop = escape(&self.dashboard.backdrop);
        let fragment = self.board(board);

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ background-color: {backdrop}; font-family: sans-serif; margin: 0; padding: 1rem; }}
.header {{ text-align: center; background-color: white; padding: 1.5rem; border-radius: 10px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); margin-bottom: 1.5rem; }}
.header h1 {{ color: {accent}; margin: 0 0 0.5rem 0; font-size: 2.5rem; }}
.header p {{ color: {accent}; opacity: 0.8; font-size: 1rem; margin: 0; }}
.columns {{ display: flex; gap: 1rem; }}
.column {{ flex: 1; }}
.column h2 {{ color: {accent}; font-size: 1.5rem; margin-bottom: 0.75rem; padding-left: 0.5rem; }}
.machine {{ padding: 1rem; border-radius: 10px; margin-bottom: 0.5rem; box-shadow: 0 2px 4px rgba(0,0,0,0.1); height: 100px; box-sizing: border-box; }}
.machine h4 {{ margin: 0 0 0.25rem 0; font-size: 0.9rem; }}
.machine div {{ font-size: 1.2rem; font-weight: bold; }}
.notice {{ padding: 1rem; border-radius: 10px; margin-bottom: 1rem; background-color: #f8d7da; color: #721c24; }}
.updated {{ text-align: center; color: {accent}; font-size: 1rem; margin-top: 1rem; opacity: 0.7; }}
</style>
</head>
<body>
<div class="header"><h1>{title}</h1><p>{subtitle}</p></div>
<div id="board">{fragment}</div>
<script>
const source = new EventSource("/api/event");
source.addEventListener("board", (event) => {{
  document.getElementById("board").innerHTML = event.data;
}});
</script>
</body>
</html>
"#
        )
    }

    /// Everything below the header: error notice, both columns, timestamp.
    pub fn board(&self, board: &Board) -> String {
        let mut html = String::new();

        if board.is_pending() {
            html.push_str(r#"<div class="updated">Waiting for the first update</div>"#);
            return html;
        }

        if let Some(error) = &board.error {
            let _ = write!(html, r#"<div class="notice">{}</div>"#, escape(error));
        }

        html.push_str(r#"<div class="columns">"#);
        html.push_str(&column("Washers", &board.washers));
        html.push_str(&column("Dryers", &board.dryers));
        html.push_str("</div>");

        if let Some(updated_at) = board.updated_at {
            let _ = write!(
                html,
                r#"<div class="updated">Last updated: {}</div>"#,
                self.clock(updated_at)
            );
        }

        html
    }

    fn clock(&self, at: OffsetDateTime) -> String {
        let format = format_description!("[hour repr:12]:[minute]:[second] [period]");

        at.to_offset(self.dashboard.offset())
            .format(&format)
            .unwrap_or_else(|_| at.to_string())
    }
}

fn column(heading: &str, machines: &[Machine]) -> String {
    let mut html = format!(r#"<div class="column"><h2>{heading}</h2>"#);

    for machine in machines {
        html.push_str(&card(machine));
    }

    html.push_str("</div>");
    html
}

fn card(machine: &Machine) -> String {
    let text_color = machine.status.text_color();

    format!(
        r#"<div class="machine" style="background: {}; color: {text_color};"><h4>{}</h4><div>{}</div></div>"#,
        machine.status.background(),
        escape(&machine.title()),
        escape(&machine.label),
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            // SSE frames cannot carry carriage returns
            '\r' => {}
            c => escaped.push(c),
        }
    }

    escaped
}
