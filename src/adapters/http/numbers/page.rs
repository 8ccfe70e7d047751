//! HTML rendering of the number form page.

use std::fmt::Write;

use crate::application::NumbersView;
use crate::domain::numbers::{ResultRecord, AVERAGE_DECIMALS};

/// Renders the complete page for a view.
pub fn render_page(view: &NumbersView) -> String {
    let mut body = String::new();

    body.push_str("<h1>Number Statistics</h1>\n");
    if let Some(error) = &view.error {
        let _ = writeln!(body, "<p class=\"error\">{}</p>", escape_html(error));
    }

    body.push_str("<form method=\"post\" action=\"/\">\n");
    for (name, value) in view.form.fields() {
        let _ = writeln!(
            body,
            "  <label>{name} <input type=\"text\" name=\"{name}\" value=\"{}\" required></label><br>",
            escape_html(value.unwrap_or_default()),
        );
    }
    body.push_str("  <button type=\"submit\">Calculate</button>\n</form>\n");

    if let Some(result) = &view.result {
        render_result(&mut body, result);
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Number Statistics</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        body
    )
}

fn render_result(body: &mut String, result: &ResultRecord) {
    let rows = [
        ("Original", join_numbers(result.original.iter())),
        (
            "Filtered (&gt; 10, sorted)",
            join_numbers(result.filtered.iter().copied()),
        ),
        (
            "Average",
            format!("{:.*}", AVERAGE_DECIMALS as usize, result.average),
        ),
        ("Average above 50", yes_no(result.avg_above_50)),
        ("Positive count", result.positive_count.to_string()),
        ("Positive count is even", yes_no(result.is_even)),
        ("Has negative", yes_no(result.has_negative)),
    ];

    body.push_str("<h2>Result</h2>\n<table class=\"result\">\n");
    for (label, value) in rows {
        let _ = writeln!(body, "  <tr><th>{}</th><td>{}</td></tr>", label, value);
    }
    body.push_str("</table>\n");
}

fn join_numbers(values: impl Iterator<Item = f64>) -> String {
    let joined: Vec<String> = values.map(|v| v.to_string()).collect();
    if joined.is_empty() {
        "none".to_string()
    } else {
        format!("[{}]", joined.join(", "))
    }
}

fn yes_no(flag: bool) -> String {
    let label = if flag { "Yes" } else { "No" };
    label.to_string()
}

/// Escapes text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
