//! Result cards - terminal and HTML rendering.
//!
//! The score on a card is for display only and never affects which
//! conditions are shown.

use owo_colors::OwoColorize;
use rand::Rng;
use serde::Serialize;
use symptoscan_common::ResultSource;

pub const DISCLAIMER: &str = "This information is for educational purposes only. Always consult a certified doctor for proper diagnosis.";

const SEARCH_URL: &str = "https://medlineplus.gov/search/";

/// Symptoms shown as tags on each card
const MAX_TAGS: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct ResultCard {
    pub title: String,
    pub score: u8,
    pub link: String,
    pub tags: Vec<String>,
}

impl ResultCard {
    pub fn new(title: &str, symptoms: &[String], rng: &mut impl Rng) -> Self {
        Self {
            title: title.to_string(),
            score: rng.gen_range(60..=99),
            link: learn_more_link(title),
            tags: symptoms.iter().take(MAX_TAGS).cloned().collect(),
        }
    }
}

pub fn build_cards(titles: &[String], symptoms: &[String]) -> Vec<ResultCard> {
    let mut rng = rand::thread_rng();
    titles
        .iter()
        .map(|title| ResultCard::new(title, symptoms, &mut rng))
        .collect()
}

/// MedlinePlus search link for a topic
pub fn learn_more_link(title: &str) -> String {
    reqwest::Url::parse_with_params(SEARCH_URL, &[("query", title)])
        .map(|url| url.to_string())
        .unwrap_or_else(|_| SEARCH_URL.to_string())
}

/// Escape text for HTML element and attribute content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_text(cards: &[ResultCard], source: ResultSource) -> String {
    let mut out = String::new();
    let origin = match source {
        ResultSource::Remote => "health topics search",
        ResultSource::Fallback => "offline symptom table",
    };
    out.push_str(&format!(
        "{}  ({})\n\n",
        "Possible Related Health Topics".bold(),
        origin.dimmed()
    ));

    for card in cards {
        let filled = card.score as usize / 10;
        let bar = format!("{}{}", "#".repeat(filled), ".".repeat(10 - filled));
        out.push_str(&format!(
            "  {}  [{}] {}%\n",
            card.title.bright_cyan().bold(),
            bar.green(),
            card.score
        ));
        if !card.tags.is_empty() {
            out.push_str(&format!("    tags: {}\n", card.tags.join(", ").yellow()));
        }
        out.push_str(&format!("    learn more: {}\n\n", card.link.underline()));
    }

    out.push_str(&format!("{} {}\n", "[DISCLAIMER]".bright_red(), DISCLAIMER));
    out
}

pub fn render_html(cards: &[ResultCard]) -> String {
    let mut out = String::from("<h3>Possible Related Health Topics</h3>\n");

    for card in cards {
        let title = escape_html(&card.title);
        let tags: String = card
            .tags
            .iter()
            .map(|t| format!("<div class=\"tag\">{}</div>", escape_html(t)))
            .collect();
        out.push_str(&format!(
            concat!(
                "<div class=\"result-card\" role=\"article\" aria-label=\"Possible topic {title}\">\n",
                "  <div class=\"card-header\">\n",
                "    <div class=\"card-title\">{title}</div>\n",
                "    <div class=\"card-sub\">Possible related topic</div>\n",
                "    <div class=\"result-progress\"><span style=\"width:{score}%\"></span></div>\n",
                "    <div class=\"result-score\">{score}%</div>\n",
                "  </div>\n",
                "  <div class=\"result-tags\">{tags}</div>\n",
                "  <a href=\"{link}\" target=\"_blank\" rel=\"noopener noreferrer\">Learn More</a>\n",
                "  <p class=\"disclaimer\"><b>Disclaimer:</b> {disclaimer}</p>\n",
                "</div>\n"
            ),
            title = title,
            score = card.score,
            tags = tags,
            link = escape_html(&card.link),
            disclaimer = DISCLAIMER,
        ));
    }
    out
}
