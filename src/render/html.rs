//! HTML page output
//!
//! Serializes a rendered table and footnote list into a complete document.
//! The embedded script wires the same behavior `update` models: theme
//! toggle with `localStorage`, column hover and footnote click.

use serde::Serialize;

use super::footnotes::{FootnoteList, Inline};
use super::palette::Palette;
use super::table::{BodyCell, HoverBinding, MarkerBinding, RenderedTable};
use crate::model::NOTE_ACTIVE_DURATION;
use crate::theme::ThemeMode;

/// Everything needed to write the page
#[derive(Debug, Clone, Copy)]
pub struct PageContent<'a> {
    pub title: &'a str,
    pub table: &'a RenderedTable,
    pub footnotes: &'a FootnoteList,
    /// Theme baked into the document before the script runs
    pub theme: ThemeMode,
}

#[derive(Serialize)]
struct PageBindings<'a> {
    hover: &'a [HoverBinding],
    markers: &'a [MarkerBinding],
}

/// Convert page content to a complete HTML document
pub fn render_page(page: &PageContent<'_>) -> String {
    let title = escape_html(page.title);
    format!(
        r#"<!DOCTYPE html>
<html data-theme="{theme}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="theme-color" content="{theme_color}">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <header>
        <h1>{title}</h1>
        <button id="theme-toggle" type="button" aria-label="Toggle theme">{glyph}</button>
    </header>
    <table id="compare-table">{table}</table>
    <section class="notes">
        <h2>Notes</h2>
        <ol id="notes-list">{notes}</ol>
    </section>
    <script id="page-bindings" type="application/json">{bindings}</script>
    <script>{script}</script>
</body>
</html>"#,
        theme = page.theme.as_str(),
        theme_color = Palette::for_mode(page.theme).background,
        title = title,
        css = generate_css(),
        glyph = page.theme.indicator_glyph(),
        table = table_to_html(page.table),
        notes = footnotes_to_html(page.footnotes),
        bindings = bindings_json(page.table),
        script = page_script(),
    )
}

/// `<thead>` and `<tbody>` markup for the table
pub fn table_to_html(table: &RenderedTable) -> String {
    let mut html = String::from("<thead><tr>");
    for header in &table.header {
        html.push_str("<th>");
        html.push_str(&escape_html(header));
        html.push_str("</th>");
    }
    html.push_str("</tr></thead><tbody>");

    for row in &table.body {
        html.push_str("<tr>");
        for cell in row {
            push_body_cell(&mut html, cell);
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody>");
    html
}

fn push_body_cell(html: &mut String, cell: &BodyCell) {
    html.push_str(&format!(r#"<td class="{}">"#, escape_html(&cell.class)));
    for inline in &cell.content {
        match inline {
            Inline::Text(text) => html.push_str(&escape_html(text)),
            Inline::Marker(marker) => match &marker.tooltip {
                Some(tooltip) => html.push_str(&format!(
                    r#"<sup data-note="{id}" title="{title}">{id}</sup>"#,
                    id = escape_html(&marker.id),
                    title = escape_html(tooltip),
                )),
                None => html.push_str(&format!("<sup>{}</sup>", escape_html(&marker.id))),
            },
        }
    }
    html.push_str("</td>");
}

/// `<li>` entries for the footnote list
pub fn footnotes_to_html(list: &FootnoteList) -> String {
    list.entries
        .iter()
        .map(|entry| {
            format!(
                r#"<li id="{}">{}</li>"#,
                escape_html(&entry.element_id),
                escape_html(&entry.text)
            )
        })
        .collect()
}

/// Bindings as JSON safe to embed in a `<script>` element
fn bindings_json(table: &RenderedTable) -> String {
    let bindings = PageBindings {
        hover: &table.hover_bindings,
        markers: &table.marker_bindings,
    };
    match serde_json::to_string(&bindings) {
        Ok(json) => json.replace("</", "<\\/"),
        Err(e) => {
            tracing::warn!("Failed to serialize page bindings: {}", e);
            "{}".to_string()
        }
    }
}

/// Escape HTML special characters
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Generate CSS for both palettes
fn generate_css() -> String {
    format!(
        r#"
:root {{
    {light}
}}

[data-theme="dark"] {{
    {dark}
}}

* {{
    box-sizing: border-box;
}}

body {{
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    font-size: 14px;
    line-height: 1.6;
    color: var(--text);
    background: var(--bg);
    padding: 20px;
    max-width: 960px;
    margin: 0 auto;
    transition: background 0.2s, color 0.2s;
}}

header {{
    display: flex;
    align-items: center;
    justify-content: space-between;
}}

h1, h2 {{
    color: var(--heading);
    font-weight: 600;
    line-height: 1.25;
}}

#theme-toggle {{
    font-size: 1.25em;
    background: none;
    border: 1px solid var(--border);
    border-radius: 6px;
    padding: 4px 10px;
    cursor: pointer;
    color: var(--text);
}}

table {{
    border-collapse: collapse;
    border-spacing: 0;
    margin-bottom: 16px;
    width: 100%;
}}

th, td {{
    padding: 6px 13px;
    border: 1px solid var(--border);
    text-align: left;
}}

th {{
    font-weight: 600;
    background: var(--header-bg);
}}

tbody tr:nth-child(2n) {{
    background: var(--stripe);
}}

.hover-col {{
    background: var(--hover) !important;
}}

td.good {{
    color: var(--good);
}}

td.warn {{
    color: var(--warn);
}}

td.bad {{
    color: var(--bad);
}}

sup {{
    color: var(--muted);
    margin-left: 1px;
}}

sup[data-note] {{
    color: var(--accent);
    cursor: pointer;
}}

#notes-list li {{
    color: var(--muted);
    border-radius: 4px;
    padding: 2px 6px;
    transition: background 0.3s;
}}

#notes-list li.note-active {{
    background: var(--hover);
    color: var(--text);
}}
"#,
        light = Palette::LIGHT.css_variables(),
        dark = Palette::DARK.css_variables(),
    )
}

fn page_script() -> String {
    PAGE_JS
        .replace("__NOTE_ACTIVE_MS__", &NOTE_ACTIVE_DURATION.as_millis().to_string())
        .replace("__GLYPH_DARK__", ThemeMode::Dark.indicator_glyph())
        .replace("__GLYPH_LIGHT__", ThemeMode::Light.indicator_glyph())
}

/// JavaScript wiring theme toggle, column hover and footnote clicks
const PAGE_JS: &str = r#"
(function () {
    const root = document.documentElement;
    const toggleBtn = document.getElementById('theme-toggle');
    const table = document.getElementById('compare-table');
    const bindings = JSON.parse(document.getElementById('page-bindings').textContent || '{}');

    function storedTheme() {
        try { return localStorage.getItem('theme'); } catch (_) { return null; }
    }

    function setTheme(theme) {
        root.setAttribute('data-theme', theme);
        try { localStorage.setItem('theme', theme); } catch (_) {}
        toggleBtn.textContent = theme === 'dark' ? '__GLYPH_DARK__' : '__GLYPH_LIGHT__';
    }

    const prefersDark = window.matchMedia &&
        window.matchMedia('(prefers-color-scheme: dark)').matches;
    setTheme(storedTheme() || (prefersDark ? 'dark' : 'light'));

    toggleBtn.addEventListener('click', function () {
        setTheme(root.getAttribute('data-theme') === 'dark' ? 'light' : 'dark');
    });

    function cellAt(pos) {
        const row = table.rows[pos.row];
        return row ? row.cells[pos.col] : null;
    }

    (bindings.hover || []).forEach(function (b) {
        const cell = cellAt(b.cell);
        if (!cell) return;
        cell.addEventListener('mouseenter', function () {
            for (const row of table.rows) {
                if (row.cells[b.column]) row.cells[b.column].classList.add('hover-col');
            }
        });
        cell.addEventListener('mouseleave', function () {
            table.querySelectorAll('.hover-col').forEach(function (c) {
                c.classList.remove('hover-col');
            });
        });
    });

    const pending = {};
    (bindings.markers || []).forEach(function (b) {
        const cell = cellAt(b.marker.cell);
        const sup = cell ? cell.querySelectorAll('sup')[b.marker.index] : null;
        if (!sup) return;
        sup.addEventListener('click', function () {
            const target = document.getElementById('note-' + b.note_id);
            if (!target) return;
            target.scrollIntoView({ behavior: 'smooth', block: 'center' });
            target.classList.add('note-active');
            clearTimeout(pending[b.note_id]);
            pending[b.note_id] = setTimeout(function () {
                target.classList.remove('note-active');
            }, __NOTE_ACTIVE_MS__);
        });
    });
})();
"#;
