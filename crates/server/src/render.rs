//! Minimal HTML page rendering.
//!
//! The response page is a hand-built document: a genre filter form, then
//! either the ranked movie table or an error banner. All dynamic text is
//! HTML-escaped.

use crate::service::RecommendOutcome;

/// Escape text for safe interpolation into HTML.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Render the response page for one request.
pub fn render_page(genres_input: &str, outcome: &RecommendOutcome) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Movie Recommendations</title>\n</head>\n<body>\n\
         <h1>Movie Recommendations</h1>\n",
    );

    page.push_str(&format!(
        "<form method=\"post\" action=\"/\">\n\
         <input type=\"text\" name=\"genres\" value=\"{}\" \
         placeholder=\"e.g. Action|Comedy\">\n\
         <button type=\"submit\">Recommend</button>\n</form>\n",
        escape(genres_input)
    ));

    match outcome {
        RecommendOutcome::Failed(message) => {
            page.push_str(&format!(
                "<div class=\"error\">{}</div>\n",
                escape(message)
            ));
        }
        RecommendOutcome::Ranked(results) if results.is_empty() => {
            page.push_str("<p>No movies matched the filter.</p>\n");
        }
        RecommendOutcome::Ranked(results) => {
            page.push_str(
                "<table>\n<tr><th>Title</th><th>Genres</th>\
                 <th>Historical</th><th>Predicted</th></tr>\n",
            );
            for result in results {
                page.push_str(&format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    escape(&result.title),
                    escape(&result.genres),
                    escape(&result.score),
                    escape(&result.pred_rating),
                ));
            }
            page.push_str("</table>\n");
        }
    }

    page.push_str("</body>\n</html>\n");
    page
}
