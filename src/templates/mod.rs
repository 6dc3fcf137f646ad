//! HTML pages for the poll views.

use crate::models::poll_models::{Choice, Question};
use crate::routes::poll_routes::{detail_path, vote_path};

/// Context handed to the detail page, both on a plain GET and when a vote is
/// redisplayed with an error.
pub struct DetailContext<'a> {
    pub question: &'a Question,
    pub choices: &'a [Choice],
    pub error_message: Option<&'a str>,
}

pub fn render_index(latest_question_list: &[Question]) -> String {
    let mut body = String::new();

    if latest_question_list.is_empty() {
        body.push_str("<p>No polls are available.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for question in latest_question_list {
            body.push_str(&format!(
                "  <li><a href=\"{}\">{}</a></li>\n",
                detail_path(question.id),
                escape(&question.question_text)
            ));
        }
        body.push_str("</ul>\n");
    }

    page("Polls", &body)
}

pub fn render_detail(context: &DetailContext<'_>) -> String {
    let question = context.question;
    let mut body = String::new();

    body.push_str(&format!(
        "<form action=\"{}\" method=\"post\">\n",
        vote_path(question.id)
    ));
    body.push_str("<fieldset>\n");
    body.push_str(&format!(
        "  <legend><h1>{}</h1></legend>\n",
        escape(&question.question_text)
    ));

    if let Some(message) = context.error_message {
        body.push_str(&format!("  <p><strong>{}</strong></p>\n", escape(message)));
    }

    for (counter, choice) in context.choices.iter().enumerate() {
        let input_id = format!("choice{}", counter + 1);
        body.push_str(&format!(
            "  <input type=\"radio\" name=\"choice\" id=\"{}\" value=\"{}\">\n",
            input_id, choice.id
        ));
        body.push_str(&format!(
            "  <label for=\"{}\">{}</label><br>\n",
            input_id,
            escape(&choice.choice_text)
        ));
    }

    body.push_str("</fieldset>\n");
    body.push_str("<input type=\"submit\" value=\"Vote\">\n");
    body.push_str("</form>\n");

    page(&question.question_text, &body)
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        body
    )
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
