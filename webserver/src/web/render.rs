//! HTML rendering for the comparison and admin pages

use shared::{Item, Report};

/// Shown in place of a pair when the item set is too small
pub const NOT_ENOUGH_ITEMS: &str = "Not enough tweets to compare. Please check the item ledger.";

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto}\
.pair{display:flex;gap:1rem}.tweet{flex:1;border:1px solid #ccc;border-radius:6px;padding:1rem}\
table{border-collapse:collapse}td,th{border:1px solid #ccc;padding:.3rem .6rem}";

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

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape_html(title),
    )
}

fn tweet_card(item: &Item, opponent: &Item) -> String {
    format!(
        "<div class=\"tweet\">\n<p>{text}</p>\n\
         <form method=\"post\" action=\"/vote\">\n\
         <input type=\"hidden\" name=\"winner\" value=\"{id}\">\n\
         <input type=\"hidden\" name=\"loser\" value=\"{opponent}\">\n\
         <button type=\"submit\">This one</button>\n</form>\n</div>",
        text = escape_html(&item.text),
        id = escape_html(&item.id),
        opponent = escape_html(&opponent.id),
    )
}

/// Two items side by side with win and tie forms
pub fn comparison_page(left: &Item, right: &Item) -> String {
    let body = format!(
        "<h1>Which tweet is better?</h1>\n<div class=\"pair\">\n{left_card}\n{right_card}\n</div>\n\
         <form method=\"post\" action=\"/tie\">\n\
         <input type=\"hidden\" name=\"id1\" value=\"{id1}\">\n\
         <input type=\"hidden\" name=\"id2\" value=\"{id2}\">\n\
         <button type=\"submit\">It's a tie</button>\n</form>",
        left_card = tweet_card(left, right),
        right_card = tweet_card(right, left),
        id1 = escape_html(&left.id),
        id2 = escape_html(&right.id),
    );
    page("Hot or Not: Tweets", &body)
}

pub fn degraded_page(message: &str) -> String {
    page("Hot or Not: Tweets", &format!("<p>{}</p>", escape_html(message)))
}

/// Score table plus the opponents each item has beaten
pub fn report_page(report: &Report) -> String {
    let mut body = String::from("<h1>Rankings</h1>\n");
    if report.scores.is_empty() {
        body.push_str("<p>No decisive votes recorded yet.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>Tweet</th><th>Wins</th><th>Beat</th></tr>\n");
        for score in &report.scores {
            let beaten = report
                .pairwise_wins
                .get(&score.item_id)
                .map(|ids| ids.iter().map(|id| escape_html(id)).collect::<Vec<_>>().join(", "))
                .unwrap_or_default();
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&score.item_id),
                score.wins,
                beaten
            ));
        }
        body.push_str("</table>\n");
    }
    body.push_str(&format!(
        "<p>{} votes, {} ties. Generated {}.</p>",
        report.total_votes,
        report.ties,
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    page("Hot or Not: Rankings", &body)
}
