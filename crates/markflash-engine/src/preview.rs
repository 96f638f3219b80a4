//! Rendered preview of the shared markdown buffer.
//!
//! Markdown goes through pulldown-cmark with the GitHub flavoured extensions
//! switched on. Fenced code is handed to a [`Highlighter`] so the front end
//! can plug in real syntax highlighting.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};

/// Hook that turns a fenced code block into HTML
pub trait Highlighter {
    /// `language` is the first word of the fence info string, if any
    fn highlight(&self, code: &str, language: Option<&str>) -> String;
}

/// Escapes code without colouring it
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str, language: Option<&str>) -> String {
        let code = html_escape::encode_text(code);
        match language {
            Some(lang) => format!(
                "<pre><code class=\"language-{}\">{code}</code></pre>\n",
                html_escape::encode_double_quoted_attribute(lang)
            ),
            None => format!("<pre><code>{code}</code></pre>\n"),
        }
    }
}

fn gfm_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_GFM
}

/// Render markdown to HTML, routing fenced code through `highlighter`
pub fn render_html(markdown: &str, highlighter: &dyn Highlighter) -> String {
    let mut events = Vec::new();
    let mut fence: Option<(Option<String>, String)> = None;

    for event in Parser::new_ext(markdown, gfm_options()) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                let language = info.split_whitespace().next().map(str::to_string);
                fence = Some((language, String::new()));
            }
            Event::Text(text) if fence.is_some() => {
                if let Some((_, code)) = fence.as_mut() {
                    code.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) if fence.is_some() => {
                if let Some((language, code)) = fence.take() {
                    let rendered = highlighter.highlight(&code, language.as_deref());
                    events.push(Event::Html(rendered.into()));
                }
            }
            other => events.push(other),
        }
    }

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    out
}
