//! HTML listing with collapsible folders.

use bt_error::Result;
use bt_traits::PresentationSink;
use bt_types::{Entry, RenderEvent, TreeView};
use tracing::debug;

use crate::escape::escape_html;
use crate::format::{DEFAULT_TIME_FORMAT, format_size, format_timestamp};
use crate::PLACEHOLDER_TEXT;

const TOGGLE_SCRIPT: &str = r#"document.addEventListener("click", function (event) {
  var row = event.target.closest("[data-toggle-folder]");
  if (!row) return;
  var path = row.getAttribute("data-toggle-folder");
  var contents = document.querySelector('[data-folder="' + CSS.escape(path) + '"]');
  if (!contents) return;
  var open = contents.style.display !== "none";
  contents.style.display = open ? "none" : "block";
  row.classList.toggle("ib-open", !open);
});"#;

const STYLESHEET: &str = r#".ib-header, .ib-folder, .ib-file { display: flex; padding: 0.25rem 0.5rem; }
.ib-header { font-weight: bold; border-bottom: 1px solid #ccc; }
.ib-folder { cursor: pointer; }
.ib-folder-contents { padding-left: 1rem; }
.ib-folder-icon::before { content: "\25B8"; display: inline-block; margin-right: 0.25rem; }
.ib-open .ib-folder-icon::before { transform: rotate(90deg); }
.flex-grow { flex-grow: 1; }
.ib-modified { width: 12rem; }
.ib-size { width: 6rem; text-align: right; }
.text-center { text-align: center; }
.p-3 { padding: 1rem; }"#;

/// Renders a listing as HTML.
///
/// The fragment consists of a header row and a content block. Each folder
/// becomes a clickable row (`data-toggle-folder`) followed by a hidden
/// contents block (`data-folder`), both keyed by the escaped folder path.
/// Files link to `base_url + "/" + key`, with each key segment
/// percent-encoded.
///
/// With [`HtmlSink::with_document`] the fragment is wrapped in a complete
/// page carrying the stylesheet and the toggle script.
#[derive(Debug, Clone)]
pub struct HtmlSink {
    base_url: String,
    time_format: String,
    placeholder: String,
    document_title: Option<String>,
}

impl Default for HtmlSink {
    fn default() -> Self {
        Self::new("")
    }
}

impl HtmlSink {
    /// Create a sink linking files under `base_url`.
    ///
    /// An empty base URL produces relative links.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            placeholder: PLACEHOLDER_TEXT.to_string(),
            document_title: None,
        }
    }

    /// Set the `chrono` strftime layout for modification times.
    pub fn with_time_format(mut self, time_format: impl Into<String>) -> Self {
        self.time_format = time_format.into();
        self
    }

    /// Set the text shown when there is nothing to list.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Emit a standalone page with the given title instead of a fragment.
    pub fn with_document(mut self, title: impl Into<String>) -> Self {
        self.document_title = Some(title.into());
        self
    }

    /// Download link for an entry.
    pub fn file_url(&self, entry: &Entry) -> String {
        let encoded = entry
            .key()
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        let base = self.base_url.trim_end_matches('/');
        if base.is_empty() {
            encoded
        } else {
            format!("{base}/{encoded}")
        }
    }

    fn render_fragment(&self, view: &TreeView<'_>) -> Result<String> {
        let mut html = String::new();
        html.push_str("<div class=\"ib-header\">\n");
        html.push_str("  <div class=\"flex-grow ib-name\">Name</div>\n");
        html.push_str("  <div class=\"ib-modified\">Modified</div>\n");
        html.push_str("  <div class=\"ib-size\">Size</div>\n");
        html.push_str("</div>\n");
        html.push_str("<div class=\"ib-content\">\n");

        match view {
            TreeView::Empty => {
                html.push_str(&format!(
                    "<div class=\"text-center p-3\"><b>{}</b></div>\n",
                    escape_html(&self.placeholder)
                ));
            }
            TreeView::Tree(events) => {
                let mut level = 1usize;
                for event in events {
                    match event {
                        RenderEvent::FolderStart {
                            name,
                            path,
                            child_count,
                            ..
                        } => {
                            self.push_folder(&mut html, level, name, path, *child_count);
                            level += 1;
                        }
                        RenderEvent::File { entry } => self.push_file(&mut html, level, entry)?,
                        RenderEvent::FolderEnd { .. } => {
                            level = level.saturating_sub(1).max(1);
                            push_line(&mut html, level, "</div>");
                        }
                    }
                }
            }
        }

        html.push_str("</div>\n");
        Ok(html)
    }

    fn push_folder(&self, html: &mut String, level: usize, name: &str, path: &str, items: usize) {
        let path = escape_html(path);
        push_line(
            html,
            level,
            &format!("<div class=\"ib-folder\" data-toggle-folder=\"{path}\">"),
        );
        push_line(
            html,
            level + 1,
            &format!(
                "<div class=\"flex-grow ib-name\"><span class=\"ib-folder-icon\"></span>{}</div>",
                escape_html(name)
            ),
        );
        push_line(html, level + 1, "<div class=\"ib-modified\"></div>");
        push_line(
            html,
            level + 1,
            &format!("<div class=\"ib-size\">{items} items</div>"),
        );
        push_line(html, level, "</div>");
        push_line(
            html,
            level,
            &format!(
                "<div class=\"ib-folder-contents\" data-folder=\"{path}\" style=\"display: none;\">"
            ),
        );
    }

    fn push_file(&self, html: &mut String, level: usize, entry: &Entry) -> Result<()> {
        let modified = format_timestamp(&entry.last_modified(), &self.time_format)?;

        push_line(html, level, "<div class=\"ib-file\">");
        push_line(
            html,
            level + 1,
            &format!(
                "<div class=\"flex-grow ib-name\"><a href=\"{}\">{}</a></div>",
                escape_html(&self.file_url(entry)),
                escape_html(entry.name())
            ),
        );
        push_line(
            html,
            level + 1,
            &format!("<div class=\"ib-modified\">{}</div>", escape_html(&modified)),
        );
        push_line(
            html,
            level + 1,
            &format!("<div class=\"ib-size\">{}</div>", format_size(entry.size())),
        );
        push_line(html, level, "</div>");
        Ok(())
    }
}

fn push_line(html: &mut String, level: usize, line: &str) {
    for _ in 0..level {
        html.push_str("  ");
    }
    html.push_str(line);
    html.push('\n');
}

impl PresentationSink for HtmlSink {
    fn present(&self, view: &TreeView<'_>) -> Result<String> {
        let fragment = self.render_fragment(view)?;

        debug!(
            events = view.events().len(),
            bytes = fragment.len(),
            standalone = self.document_title.is_some(),
            "Rendered HTML listing"
        );

        let Some(title) = &self.document_title else {
            return Ok(fragment);
        };

        Ok(format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
             <style>\n{STYLESHEET}\n</style>\n</head>\n<body>\n<div class=\"ib-browser\">\n\
             {fragment}</div>\n<script>\n{TOGGLE_SCRIPT}\n</script>\n</body>\n</html>\n",
            escape_html(title)
        ))
    }

    fn format_name(&self) -> &'static str {
        "html"
    }
}
