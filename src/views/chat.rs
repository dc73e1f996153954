//! Chat views - Pagina della chat e frammento con la lista dei messaggi

use super::{escape_html, layout};
use crate::entities::Message;

/// Intervallo di polling del frammento `/chat/messages` lato browser
const POLL_INTERVAL_MS: u32 = 3000;

/// Renderizza solo la lista dei messaggi (frammento usato anche dal polling)
pub fn message_list(messages: &[Message]) -> String {
    let mut html = String::from("<ul id=\"messages\">\n");
    for message in messages {
        html.push_str(&format!(
            "<li data-id=\"{}\"><time datetime=\"{}\">{}</time> {}</li>\n",
            message.message_id,
            message.created_at.to_rfc3339(),
            message.created_at.format("%H:%M:%S"),
            escape_html(&message.body)
        ));
    }
    html.push_str("</ul>\n");
    html
}

/// Renderizza la pagina completa: lista dei messaggi più il form di invio.
///
/// `body` è il valore da rimettere nel form (vuoto dopo un GET, quello inviato
/// quando la validazione fallisce), `errors` gli errori da mostrare.
pub fn chat_page(messages: &[Message], body: &str, errors: &[String]) -> String {
    let mut errors_html = String::new();
    if !errors.is_empty() {
        errors_html.push_str("<ul class=\"form-errors\">\n");
        for err in errors {
            errors_html.push_str(&format!("<li>{}</li>\n", escape_html(err)));
        }
        errors_html.push_str("</ul>\n");
    }

    let content = format!(
        r#"<h1>Chat</h1>
<div id="message-list">
{list}</div>
<form method="post" action="/chat" name="message">
{errors}<textarea id="message_body" name="message[body]" required>{body}</textarea>
<button type="submit">Send</button>
</form>
<script>
setInterval(function () {{
  fetch("/chat/messages")
    .then(function (r) {{ return r.text(); }})
    .then(function (html) {{ document.getElementById("message-list").innerHTML = html; }});
}}, {interval});
</script>"#,
        list = message_list(messages),
        errors = errors_html,
        body = escape_html(body),
        interval = POLL_INTERVAL_MS
    );
    layout("Chat", &content)
}
