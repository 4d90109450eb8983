//! Server-rendered HTML for the predictor page.

use premium_api::models::{ApplicantRecord, Occupation, PremiumCategory, MAX_AGE, MIN_AGE};
use premium_api::scoring::FACTORS;
use std::fmt::Write;

use crate::client::ClientError;
use crate::form::{MAX_HEIGHT, MIN_HEIGHT, MIN_INCOME_LPA, MIN_WEIGHT};

pub const TITLE: &str = "Insurance Premium Category Predictor";

/// What the page reports after a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Predicted(PremiumCategory),
    Unreachable,
    Invalid(String),
    Failed(String),
}

impl From<Result<PremiumCategory, ClientError>> for Outcome {
    fn from(result: Result<PremiumCategory, ClientError>) -> Self {
        match result {
            Ok(category) => Outcome::Predicted(category),
            Err(ClientError::Connect(_)) => Outcome::Unreachable,
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Predicted(category) => format!(
            concat!(
                "<div class=\"alert success\">Predicted Insurance Premium Category: <strong>{}</strong></div>\n",
                "<div class=\"alert info\"><strong>Factors considered:</strong> {}</div>\n"
            ),
            category,
            FACTORS.join(", ")
        ),
        Outcome::Unreachable => concat!(
            "<div class=\"alert error\">Could not connect to the scoring service.</div>\n",
            "<div class=\"alert info\">The server may still be starting. Please wait a moment and try again.</div>\n"
        )
        .to_string(),
        Outcome::Invalid(message) => format!(
            "<div class=\"alert error\">Please correct the form: {}</div>\n",
            escape_html(message)
        ),
        Outcome::Failed(message) => format!(
            "<div class=\"alert error\">An unexpected error occurred: {}</div>\n",
            escape_html(message)
        ),
    }
}

fn render_form(record: &ApplicantRecord) -> String {
    let mut occupations = String::new();
    for occupation in Occupation::ALL {
        let selected = if occupation == record.occupation { " selected" } else { "" };
        // Writing to a String cannot fail.
        let _ = writeln!(
            occupations,
            "        <option value=\"{0}\"{1}>{0}</option>",
            occupation, selected
        );
    }

    let (smoker_yes, smoker_no) = if record.smoker {
        (" selected", "")
    } else {
        ("", " selected")
    };

    format!(
        r#"<form method="post" action="/predict">
  <label for="age">Age</label>
  <input id="age" name="age" type="number" step="1" min="{min_age}" max="{max_age}" value="{age}" required>
  <label for="weight">Weight (kg)</label>
  <input id="weight" name="weight" type="number" step="any" min="{min_weight:.1}" value="{weight}" required>
  <label for="height">Height (m)</label>
  <input id="height" name="height" type="number" step="any" min="{min_height:.1}" max="{max_height:.1}" value="{height}" required>
  <label for="income_lpa">Annual Income (LPA)</label>
  <input id="income_lpa" name="income_lpa" type="number" step="any" min="{min_income:.1}" value="{income}" required>
  <label for="smoker">Are you a smoker?</label>
  <select id="smoker" name="smoker">
    <option value="true"{smoker_yes}>Yes</option>
    <option value="false"{smoker_no}>No</option>
  </select>
  <label for="city">City</label>
  <input id="city" name="city" type="text" value="{city}">
  <label for="occupation">Occupation</label>
  <select id="occupation" name="occupation">
{occupations}  </select>
  <button type="submit">Predict Premium Category</button>
</form>
"#,
        min_age = MIN_AGE,
        max_age = MAX_AGE,
        age = record.age,
        min_weight = MIN_WEIGHT,
        weight = record.weight,
        min_height = MIN_HEIGHT,
        max_height = MAX_HEIGHT,
        height = record.height,
        min_income = MIN_INCOME_LPA,
        income = record.income_lpa,
        smoker_yes = smoker_yes,
        smoker_no = smoker_no,
        city = escape_html(&record.city),
        occupations = occupations,
    )
}

/// Full page: the form keeps the submitted values, followed by the outcome if any.
pub fn render_page(record: &ApplicantRecord, outcome: Option<&Outcome>) -> String {
    let result = outcome.map(render_outcome).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<main>
<h1>{title}</h1>
<p>Enter your details below:</p>
{form}<section id="result">
{result}</section>
</main>
</body>
</html>
"#,
        title = TITLE,
        form = render_form(record),
        result = result,
    )
}
