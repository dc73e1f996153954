//! Views - Rendering html delle pagine
//!
//! Le pagine sono piccole e statiche, quindi vengono composte direttamente con `format!`.
//! Tutto il testo che arriva dall'utente passa da `escape_html`.

pub mod chat;

pub use chat::{chat_page, message_list};

use axum::http::StatusCode;

/// Escape dei caratteri speciali html
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
{content}
</body>
</html>
"#,
        title = escape_html(title),
        content = content
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let content = format!(
        "<h1>{}</h1>\n<p>{}</p>",
        status.as_u16(),
        escape_html(message)
    );
    layout("Error", &content)
}
