//! Spelling and grammar — lightweight heuristics, not a dictionary spellchecker.
//!
//! Checks: a table of common misspellings, doubled words, lowercase bullet
//! openings, a lowercase standalone "i", stray spacing, fragment bullets, and
//! inconsistent terminal punctuation across bullets. Each detected issue costs
//! a fixed number of points. A resume with no non-blank experience bullet
//! scores 0: a summary alone is too little text to grade.

use std::sync::OnceLock;

use regex::Regex;

use crate::ats::text::{excerpt, tokenize};
use crate::ats::CategoryScore;
use crate::models::ResumeDocument;

const POINTS_PER_ISSUE: u32 = 10;
/// Bullets with fewer words than this read as fragments.
const MIN_BULLET_WORDS: usize = 3;
const MAX_EXAMPLES: usize = 3;

const MISSPELLINGS: &[(&str, &str)] = &[
    ("acheive", "achieve"),
    ("acheived", "achieved"),
    ("accomodate", "accommodate"),
    ("begining", "beginning"),
    ("buisness", "business"),
    ("calender", "calendar"),
    ("comittee", "committee"),
    ("definately", "definitely"),
    ("developement", "development"),
    ("enviroment", "environment"),
    ("goverment", "government"),
    ("independant", "independent"),
    ("managment", "management"),
    ("occured", "occurred"),
    ("occurence", "occurrence"),
    ("persue", "pursue"),
    ("recieve", "receive"),
    ("recieved", "received"),
    ("reccomend", "recommend"),
    ("responsibile", "responsible"),
    ("seperate", "separate"),
    ("succesful", "successful"),
    ("sucessful", "successful"),
    ("teh", "the"),
    ("thier", "their"),
    ("untill", "until"),
    ("wich", "which"),
];

fn space_before_punct_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+[,.;:!?]").expect("static regex"))
}

fn double_space_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\S {2,}\S").expect("static regex"))
}

/// Issues found in one block of text (summary or a single bullet).
fn check_block(text: &str, issues: &mut Vec<String>) {
    let tokens = tokenize(text);

    for token in &tokens {
        if let Some((_, fix)) = MISSPELLINGS.iter().find(|(wrong, _)| *wrong == token.as_str()) {
            issues.push(format!("\"{token}\" looks misspelled (did you mean \"{fix}\"?)"));
        }
    }

    for pair in tokens.windows(2) {
        if pair[0] == pair[1] && pair[0].chars().all(char::is_alphabetic) {
            issues.push(format!("Repeated word \"{} {}\"", pair[0], pair[1]));
        }
    }

    if text
        .split_whitespace()
        .any(|w| w.trim_matches(|c: char| !c.is_alphanumeric()) == "i")
    {
        issues.push(format!("Capitalize \"I\" in \"{}\"", excerpt(text, 40)));
    }

    if space_before_punct_re().is_match(text) {
        issues.push(format!("Extra space before punctuation in \"{}\"", excerpt(text, 40)));
    }
    if double_space_re().is_match(text) {
        issues.push(format!("Double space in \"{}\"", excerpt(text, 40)));
    }
}

fn check_bullet(bullet: &str, issues: &mut Vec<String>) {
    check_block(bullet, issues);

    if bullet.trim().chars().next().is_some_and(char::is_lowercase) {
        issues.push(format!(
            "Start bullet with a capital letter: \"{}\"",
            excerpt(bullet, 40)
        ));
    }
    if bullet.split_whitespace().count() < MIN_BULLET_WORDS {
        issues.push(format!(
            "Bullet reads as a fragment: \"{}\"",
            excerpt(bullet, 40)
        ));
    }
}

/// Returns every detected issue in document order.
pub fn find_issues(doc: &ResumeDocument) -> Vec<String> {
    let mut issues = Vec::new();

    if !doc.summary.trim().is_empty() {
        check_block(&doc.summary, &mut issues);
    }

    let bullets: Vec<&str> = doc.all_bullets().filter(|b| !b.trim().is_empty()).collect();
    for bullet in &bullets {
        check_bullet(bullet, &mut issues);
    }

    let with_period = bullets.iter().filter(|b| b.trim_end().ends_with('.')).count();
    if with_period > 0 && with_period < bullets.len() {
        issues.push(format!(
            "Inconsistent punctuation: {with_period} of {} bullets end with a period",
            bullets.len()
        ));
    }

    issues
}

pub fn score(doc: &ResumeDocument) -> CategoryScore {
    if !doc.experience_bullets().any(|b| !b.trim().is_empty()) {
        return CategoryScore {
            score: 0,
            advice: Some(
                "Add experience bullet points so spelling and grammar can be checked"
                    .to_string(),
            ),
        };
    }

    let issues = find_issues(doc);
    let penalty = (issues.len() as u32).saturating_mul(POINTS_PER_ISSUE);
    let score = 100u32.saturating_sub(penalty) as u8;

    let advice = (!issues.is_empty()).then(|| {
        let examples: Vec<&str> = issues.iter().take(MAX_EXAMPLES).map(String::as_str).collect();
        format!(
            "Fix {} spelling or grammar issue(s): {}",
            issues.len(),
            examples.join("; ")
        )
    });

    CategoryScore { score, advice }
}
