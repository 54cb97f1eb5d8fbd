//! LinkedIn text importer — best-effort extraction of a partial resume from
//! the text of a LinkedIn "Save to PDF" profile export.
//!
//! Date ranges are the load-bearing anchor: every experience and education
//! block in an export ends with one ("Jan 2020 - Present", "2016 - 2020").
//! The importer scans for all of them once, then carves the text into
//! per-entry windows positioned relative to those anchors. Everything else
//! is regex and line heuristics. A field that cannot be located degrades to
//! empty; malformed text never produces an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::{
    BasicsPatch, EducationEntry, ExperienceEntry, Links, ResumePatch,
};

/// Lookback is capped so a long description before an entry cannot pollute
/// its header lines.
const LOOKBACK_CAP_CHARS: usize = 300;
const MIN_HEADER_LINE_CHARS: usize = 3;
const MIN_BULLET_CHARS: usize = 6;
const MAX_BULLETS_PER_ENTRY: usize = 6;
const MIN_NAME_CHARS: usize = 3;
const SKILLS_WINDOW_CHARS: usize = 600;
const SUMMARY_WINDOW_CHARS: usize = 1000;
const MIN_SKILL_CHARS: usize = 2;
const MAX_SKILL_CHARS: usize = 50;
const MAX_SKILLS: usize = 20;

/// An entry whose header lines contain any of these is education; anything
/// else is experience. Purely keyword membership, no structure.
const EDUCATION_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "school",
    "institute",
    "academy",
    "degree",
    "diploma",
    "certificate",
    "student",
    "bachelor",
    "master",
    "phd",
    "mba",
    "b.sc",
    "bsc",
    "b.tech",
    "btech",
    "m.sc",
    "msc",
    "m.tech",
    "mtech",
    "b.a.",
    "m.a.",
    "b.e.",
];

/// Section headers LinkedIn prints on their own line. Used to trim entry
/// windows and to bound the skills/summary extraction windows.
const SECTION_HEADERS: &[&str] = &[
    "Contact",
    "Summary",
    "Experience",
    "Education",
    "Languages",
    "Certifications",
    "Top Skills",
    "Skills & Endorsements",
    "Skills",
    "Honors-Awards",
    "Publications",
];

const SKILLS_HEADERS: &[&str] = &["Top Skills", "Skills & Endorsements", "Skills"];

static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    // "Jan 2020 - Present", "January 2019 - March 2021", "2016 - 2020",
    // "01/2019 - 12/2021". Dashes are already normalized to '-'.
    Regex::new(
        r"(?i)\b((?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{4}|\d{1,2}/\d{4}|\d{4})\s*-\s*((?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{4}|\d{1,2}/\d{4}|\d{4}|present|current)\b",
    )
    .expect("date range regex is valid")
});

static PAGE_FOOTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*page\s+\d+\s+of\s+\d+\s*$").expect("footer regex is valid"));

// Duration annotations LinkedIn prints under a role: "(1 month)",
// "2 years 3 months", "5 yrs".
static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\(?\s*\d+\s*(?:years?|yrs?|months?|mos?)(?:\s+\d+\s*(?:months?|mos?))?\s*\)?$")
        .expect("duration regex is valid")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email regex is valid")
});

static LINKEDIN_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"www\.linkedin\.com/in/[A-Za-z0-9_%\-]+").expect("profile url regex is valid")
});

/// One date-range match, with byte offsets into the normalized text.
/// Produced once by [`scan_date_ranges`] and consumed functionally by the
/// segmentation step so window boundaries never drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    pub start: usize,
    pub end: usize,
    pub start_token: String,
    pub end_token: String,
    /// The full matched range text, stored verbatim into `year` fields.
    pub raw: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Experience,
    Education,
}

/// One date-anchored block: cleaned header lines above the date, raw body
/// text below it (up to the next date match).
#[derive(Debug, Clone)]
pub struct Entry {
    pub kind: EntryKind,
    pub header_lines: Vec<String>,
    pub body: String,
    pub date: DateMatch,
}

/// Parses extracted LinkedIn PDF text into a partial resume.
pub fn parse_profile_text(raw_text: &str) -> ResumePatch {
    let text = normalize(raw_text);
    let matches = scan_date_ranges(&text);
    let entries = segment_entries(&text, &matches);

    let mut experience = Vec::new();
    let mut education = Vec::new();
    for entry in &entries {
        match entry.kind {
            EntryKind::Experience => experience.push(experience_from(entry)),
            EntryKind::Education => education.push(education_from(entry)),
        }
    }

    let name = extract_name(&text);
    let email = extract_email(&text);
    let linkedin = extract_linkedin_url(&text);
    let skills = extract_skills(&text);
    let summary = extract_summary(&text);

    let basics = if name.is_some() || email.is_some() || linkedin.is_some() {
        Some(BasicsPatch {
            name,
            email,
            links: linkedin.map(|url| Links {
                linkedin: Some(url),
                ..Links::default()
            }),
            ..BasicsPatch::default()
        })
    } else {
        None
    };

    ResumePatch {
        basics,
        summary,
        skills: (!skills.is_empty()).then_some(skills),
        experience: (!experience.is_empty()).then_some(experience),
        projects: None,
        education: (!education.is_empty()).then_some(education),
    }
}

/// Collapses line-ending and dash variants, strips non-breaking spaces,
/// drops page-footer noise and blank lines. Idempotent.
pub fn normalize(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut cleaned = String::with_capacity(unified.len());
    for ch in unified.chars() {
        match ch {
            // hyphen variants through horizontal bar, plus minus sign
            '\u{2010}'..='\u{2015}' | '\u{2212}' => cleaned.push('-'),
            '\u{00a0}' | '\u{2007}' | '\u{202f}' => cleaned.push(' '),
            _ => cleaned.push(ch),
        }
    }
    cleaned
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !PAGE_FOOTER_RE.is_match(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Scans the whole text once, returning all non-overlapping date-range
/// matches in document order.
pub fn scan_date_ranges(text: &str) -> Vec<DateMatch> {
    DATE_RANGE_RE
        .captures_iter(text)
        .map(|caps| {
            let whole = caps.get(0).expect("group 0 is the whole match");
            DateMatch {
                start: whole.start(),
                end: whole.end(),
                start_token: caps[1].to_string(),
                end_token: caps[2].to_string(),
                raw: whole.as_str().to_string(),
            }
        })
        .collect()
}

/// Carves the text into one entry per date match. The lookback window (text
/// since the previous match, capped) supplies header lines; the lookahead
/// window (text until the next match) supplies the body.
pub fn segment_entries(text: &str, matches: &[DateMatch]) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(matches.len());
    for (i, m) in matches.iter().enumerate() {
        let prev_end = if i == 0 { 0 } else { matches[i - 1].end };
        let lookback = tail_chars(&text[prev_end..m.start], LOOKBACK_CAP_CHARS);
        let next_start = matches.get(i + 1).map_or(text.len(), |n| n.start);
        let header_lines = clean_header_lines(lookback);
        let kind = classify(&header_lines);
        entries.push(Entry {
            kind,
            header_lines,
            body: text[m.end..next_start].to_string(),
            date: m.clone(),
        });
    }
    entries
}

/// Education vs. experience is a pure keyword-membership test over the
/// joined header lines. An education entry that mentions no keyword is
/// silently misclassified as experience; that is the accepted limit of this
/// heuristic, not something to patch here.
pub fn classify(header_lines: &[String]) -> EntryKind {
    let joined = header_lines.join(" ").to_lowercase();
    if EDUCATION_KEYWORDS.iter().any(|kw| joined.contains(kw)) {
        EntryKind::Education
    } else {
        EntryKind::Experience
    }
}

fn clean_header_lines(window: &str) -> Vec<String> {
    let mut lines: Vec<&str> = window.lines().map(str::trim).collect();
    // A section header inside the lookback means everything before it
    // belongs to the previous section.
    if let Some(pos) = lines.iter().rposition(|l| is_section_header(l)) {
        lines.drain(..=pos);
    }
    lines
        .into_iter()
        .filter(|l| l.chars().count() >= MIN_HEADER_LINE_CHARS)
        .filter(|l| !DURATION_RE.is_match(l))
        .filter(|l| !PAGE_FOOTER_RE.is_match(l))
        .map(str::to_string)
        .collect()
}

fn is_section_header(line: &str) -> bool {
    SECTION_HEADERS.iter().any(|h| line.eq_ignore_ascii_case(h))
}

fn experience_from(entry: &Entry) -> ExperienceEntry {
    let headers = &entry.header_lines;
    let (company, role) = match headers.len() {
        0 => (String::new(), String::new()),
        1 => split_single_header(&headers[0]),
        n => (headers[n - 2].clone(), headers[n - 1].clone()),
    };
    ExperienceEntry {
        company,
        role,
        start_date: entry.date.start_token.clone(),
        end_date: Some(entry.date.end_token.clone()),
        bullets: bullets_from(&entry.body),
    }
}

/// A lone header line is tried as "Company - Role", then "Role at Company",
/// and otherwise kept as a company with no role.
fn split_single_header(line: &str) -> (String, String) {
    if let Some((company, role)) = line.split_once(" - ") {
        return (company.trim().to_string(), role.trim().to_string());
    }
    if let Some((role, company)) = line.split_once(" at ") {
        return (company.trim().to_string(), role.trim().to_string());
    }
    (line.to_string(), String::new())
}

fn bullets_from(body: &str) -> Vec<String> {
    let mut bullets = Vec::new();
    for line in body.lines().map(str::trim) {
        // The body runs until the next date match, so a section header
        // marks the start of the next entry's territory.
        if is_section_header(line) {
            break;
        }
        if line.chars().count() < MIN_BULLET_CHARS || line.contains('\u{b7}') {
            continue;
        }
        // The remainder of the date line is often a duration annotation.
        if DURATION_RE.is_match(line) {
            continue;
        }
        let lower = line.to_lowercase();
        if lower.contains("see less") || lower.contains("page of") {
            continue;
        }
        bullets.push(line.to_string());
        if bullets.len() == MAX_BULLETS_PER_ENTRY {
            break;
        }
    }
    bullets
}

fn education_from(entry: &Entry) -> EducationEntry {
    let (institute, degree) = match entry.header_lines.as_slice() {
        [] => (String::new(), String::new()),
        [only] => match only.split_once(',') {
            Some((institute, degree)) => {
                (institute.trim().to_string(), degree.trim().to_string())
            }
            None => (only.clone(), String::new()),
        },
        [first, second, ..] => (first.clone(), second.clone()),
    };
    EducationEntry {
        institute,
        degree,
        year: entry.date.raw.clone(),
    }
}

/// The first non-trivial line that does not itself look like an email.
fn extract_name(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|l| l.chars().count() >= MIN_NAME_CHARS && !EMAIL_RE.is_match(l))
        .map(str::to_string)
}

fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

fn extract_linkedin_url(text: &str) -> Option<String> {
    LINKEDIN_URL_RE
        .find(text)
        .map(|m| format!("https://{}", m.as_str()))
}

fn extract_skills(text: &str) -> Vec<String> {
    let Some(after) = window_after_header(text, SKILLS_HEADERS) else {
        return Vec::new();
    };
    let window = truncate_at_section_header(head_chars(after, SKILLS_WINDOW_CHARS));
    window
        .split(|c: char| matches!(c, ',' | '\n' | '\u{2022}' | '\u{b7}' | '|'))
        .map(str::trim)
        .filter(|token| {
            let len = token.chars().count();
            (MIN_SKILL_CHARS..=MAX_SKILL_CHARS).contains(&len)
        })
        .map(str::to_string)
        .take(MAX_SKILLS)
        .collect()
}

fn extract_summary(text: &str) -> Option<String> {
    let after = window_after_header(text, &["Summary"])?;
    let window = truncate_at_section_header(head_chars(after, SUMMARY_WINDOW_CHARS));
    let collapsed = window.split_whitespace().collect::<Vec<_>>().join(" ");
    (!collapsed.is_empty()).then_some(collapsed)
}

/// Returns the text immediately after the first line that equals one of
/// `headers` (case-insensitive).
fn window_after_header<'a>(text: &'a str, headers: &[&str]) -> Option<&'a str> {
    let mut offset = 0;
    for line in text.split('\n') {
        let end = offset + line.len();
        if headers.iter().any(|h| line.trim().eq_ignore_ascii_case(h)) {
            return Some(text.get(end + 1..).unwrap_or(""));
        }
        offset = end + 1;
    }
    None
}

/// Cuts a window short at the first line that is a known section header.
fn truncate_at_section_header(window: &str) -> &str {
    let mut offset = 0;
    for line in window.split('\n') {
        if is_section_header(line.trim()) {
            return &window[..offset];
        }
        offset += line.len() + 1;
    }
    window
}

/// Last `max_chars` characters of `s`, on a char boundary.
fn tail_chars(s: &str, max_chars: usize) -> &str {
    let count = s.chars().count();
    if count <= max_chars {
        return s;
    }
    s.char_indices()
        .nth(count - max_chars)
        .map(|(i, _)| &s[i..])
        .unwrap_or(s)
}

/// First `max_chars` characters of `s`, on a char boundary.
fn head_chars(s: &str, max_chars: usize) -> &str {
    s.char_indices()
        .nth(max_chars)
        .map(|(i, _)| &s[..i])
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "Jane Doe\n\
jane@x.com\n\
Experience\n\
Acme Corp\n\
Senior Engineer\n\
Jan 2020 - Present\n\
Built thing one\n\
Built thing two\n\
Education\n\
State University\n\
B.Sc Computer Science\n\
2016 - 2020";

    #[test]
    fn test_normalize_is_idempotent() {
        let messy = "Line one\r\nLine\u{00a0}two \u{2013} dash\r\rPage 1 of 3\nLine three\n\n";
        let once = normalize(messy);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalize_unifies_dashes_and_drops_noise() {
        let messy = "Jan 2020 \u{2013} Present\r\nPage 2 of 4\n\n \nNext\u{00a0}line";
        assert_eq!(normalize(messy), "Jan 2020 - Present\nNext line");
    }

    #[test]
    fn test_scan_finds_month_year_ranges() {
        let matches = scan_date_ranges("Jan 2020 - Present\nMarch 2018 - September 2019");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].start_token, "Jan 2020");
        assert_eq!(matches[0].end_token, "Present");
        assert_eq!(matches[1].start_token, "March 2018");
        assert_eq!(matches[1].end_token, "September 2019");
    }

    #[test]
    fn test_scan_finds_bare_year_and_numeric_month_ranges() {
        let matches = scan_date_ranges("2016 - 2020\n01/2019 - 12/2021\n2022 - Current");
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].raw, "2016 - 2020");
        assert_eq!(matches[1].start_token, "01/2019");
        assert_eq!(matches[2].end_token, "Current");
    }

    #[test]
    fn test_scan_matches_are_ordered_with_stable_offsets() {
        let text = "header\nJan 2020 - Present\nbody\n2016 - 2020\ntail";
        let matches = scan_date_ranges(text);
        assert_eq!(matches.len(), 2);
        assert!(matches[0].end <= matches[1].start);
        for m in &matches {
            assert_eq!(&text[m.start..m.end], m.raw);
        }
    }

    #[test]
    fn test_segmentation_yields_one_entry_per_date_range() {
        let text = normalize(
            "Experience\nAcme\nEngineer\nJan 2020 - Present\nDid things here\n\
             Globex\nManager\nFeb 2017 - Dec 2019\nManaged things here\n\
             Education\nState University\nB.Sc\n2013 - 2017",
        );
        let matches = scan_date_ranges(&text);
        assert_eq!(matches.len(), 3);
        let entries = segment_entries(&text, &matches);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].kind, EntryKind::Experience);
        assert_eq!(entries[1].kind, EntryKind::Experience);
        assert_eq!(entries[2].kind, EntryKind::Education);
        // document order follows the anchors
        assert_eq!(entries[0].date.start_token, "Jan 2020");
        assert_eq!(entries[1].date.start_token, "Feb 2017");
        assert_eq!(entries[2].date.start_token, "2013");
    }

    #[test]
    fn test_classification_is_pure_keyword_membership() {
        let education = vec!["State University".to_string(), "B.Sc".to_string()];
        let experience = vec!["Acme Corp".to_string(), "Senior Engineer".to_string()];
        for _ in 0..3 {
            assert_eq!(classify(&education), EntryKind::Education);
            assert_eq!(classify(&experience), EntryKind::Experience);
        }
        assert_eq!(classify(&[]), EntryKind::Experience);
    }

    #[test]
    fn test_no_date_ranges_still_extracts_scalars() {
        let patch = parse_profile_text(
            "Jane Doe\njane@x.com\nwww.linkedin.com/in/janedoe\nTop Skills\nRust, SQL, Tokio",
        );
        assert!(patch.experience.is_none());
        assert!(patch.education.is_none());
        let basics = patch.basics.expect("basics extracted");
        assert_eq!(basics.name.as_deref(), Some("Jane Doe"));
        assert_eq!(basics.email.as_deref(), Some("jane@x.com"));
        assert_eq!(
            basics.links.and_then(|l| l.linkedin).as_deref(),
            Some("https://www.linkedin.com/in/janedoe")
        );
        assert_eq!(
            patch.skills,
            Some(vec!["Rust".to_string(), "SQL".to_string(), "Tokio".to_string()])
        );
    }

    #[test]
    fn test_skills_are_capped() {
        let tokens: Vec<String> = (1..=30).map(|i| format!("Skill{i:02}")).collect();
        let text = format!("Jane Doe\nTop Skills\n{}", tokens.join(", "));
        let skills = parse_profile_text(&text).skills.expect("skills extracted");
        assert_eq!(skills.len(), MAX_SKILLS);
        assert_eq!(skills[0], "Skill01");
    }

    #[test]
    fn test_skill_tokens_outside_length_range_are_dropped() {
        let long = "x".repeat(60);
        let text = format!("Top Skills\nRust, a, {long}, Go");
        let skills = parse_profile_text(&text).skills.expect("skills extracted");
        assert_eq!(skills, vec!["Rust".to_string(), "Go".to_string()]);
    }

    #[test]
    fn test_bullets_are_capped() {
        let bullets: Vec<String> = (1..=10).map(|i| format!("Accomplished item number {i}")).collect();
        let text = format!("Acme Corp\nEngineer\nJan 2020 - Present\n{}", bullets.join("\n"));
        let patch = parse_profile_text(&text);
        let experience = patch.experience.expect("one experience entry");
        assert_eq!(experience[0].bullets.len(), MAX_BULLETS_PER_ENTRY);
    }

    #[test]
    fn test_linkedin_export_end_to_end() {
        let patch = parse_profile_text(EXPORT);

        let basics = patch.basics.expect("basics extracted");
        assert_eq!(basics.name.as_deref(), Some("Jane Doe"));
        assert_eq!(basics.email.as_deref(), Some("jane@x.com"));

        let experience = patch.experience.expect("experience extracted");
        assert_eq!(experience.len(), 1);
        assert_eq!(experience[0].company, "Acme Corp");
        assert_eq!(experience[0].role, "Senior Engineer");
        assert_eq!(experience[0].start_date, "Jan 2020");
        assert_eq!(experience[0].end_date.as_deref(), Some("Present"));
        assert_eq!(
            experience[0].bullets,
            vec!["Built thing one".to_string(), "Built thing two".to_string()]
        );

        let education = patch.education.expect("education extracted");
        assert_eq!(education.len(), 1);
        assert_eq!(education[0].institute, "State University");
        assert_eq!(education[0].degree, "B.Sc Computer Science");
        assert_eq!(education[0].year, "2016 - 2020");
    }

    #[test]
    fn test_single_header_hyphen_split() {
        let patch = parse_profile_text("Acme Corp - Staff Engineer\nJan 2020 - Present");
        let experience = patch.experience.expect("experience extracted");
        assert_eq!(experience[0].company, "Acme Corp");
        assert_eq!(experience[0].role, "Staff Engineer");
    }

    #[test]
    fn test_single_header_at_split() {
        let patch = parse_profile_text("Staff Engineer at Acme Corp\nJan 2020 - Present");
        let experience = patch.experience.expect("experience extracted");
        assert_eq!(experience[0].company, "Acme Corp");
        assert_eq!(experience[0].role, "Staff Engineer");
    }

    #[test]
    fn test_single_header_fallback_is_company_with_empty_role() {
        let patch = parse_profile_text("Acme Corporation\nJan 2020 - Present");
        let experience = patch.experience.expect("experience extracted");
        assert_eq!(experience[0].company, "Acme Corporation");
        assert_eq!(experience[0].role, "");
    }

    #[test]
    fn test_education_single_line_splits_on_first_comma() {
        let patch = parse_profile_text("State University, B.Sc Computer Science\n2016 - 2020");
        let education = patch.education.expect("education extracted");
        assert_eq!(education[0].institute, "State University");
        assert_eq!(education[0].degree, "B.Sc Computer Science");
        assert_eq!(education[0].year, "2016 - 2020");
    }

    #[test]
    fn test_duration_lines_dropped_from_headers() {
        let patch = parse_profile_text(
            "Acme Corp\nSenior Engineer\n(1 year 6 months)\nJan 2020 - Present",
        );
        let experience = patch.experience.expect("experience extracted");
        assert_eq!(experience[0].company, "Acme Corp");
        assert_eq!(experience[0].role, "Senior Engineer");
    }

    #[test]
    fn test_lookback_cap_bounds_header_window() {
        // An education keyword further back than the cap must not leak into
        // this entry's classification.
        let filler: Vec<String> = (0..10)
            .map(|i| format!("Unrelated preceding description line number {i:02}"))
            .collect();
        let text = format!(
            "University of Somewhere\n{}\nAcme Corp\nSenior Engineer\nJan 2020 - Present",
            filler.join("\n")
        );
        let patch = parse_profile_text(&text);
        let experience = patch.experience.expect("experience extracted");
        assert_eq!(experience.len(), 1);
        assert_eq!(experience[0].company, "Acme Corp");
        assert_eq!(experience[0].role, "Senior Engineer");
        assert!(patch.education.is_none());
    }

    #[test]
    fn test_skills_window_truncates_at_next_section_header() {
        let patch = parse_profile_text(
            "Top Skills\nRust, Postgres\nLanguages\nEnglish, French\nJan 2020 - Present",
        );
        let skills = patch.skills.expect("skills extracted");
        assert_eq!(skills, vec!["Rust".to_string(), "Postgres".to_string()]);
    }

    #[test]
    fn test_summary_collapses_newlines_and_stops_at_section() {
        let patch = parse_profile_text(
            "Summary\nBackend engineer focused on\nstorage and reliability.\nExperience\nAcme\nEngineer\nJan 2020 - Present",
        );
        assert_eq!(
            patch.summary.as_deref(),
            Some("Backend engineer focused on storage and reliability.")
        );
    }

    #[test]
    fn test_name_skips_email_only_line() {
        let patch = parse_profile_text("jane@x.com\nJane Doe");
        let basics = patch.basics.expect("basics extracted");
        assert_eq!(basics.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_bullets_skip_separator_and_footer_lines() {
        let text = "Acme Corp\nEngineer\nJan 2020 - Present\n\
                    Shipped the payments service\nskills \u{b7} more \u{b7} stuff\n\
                    see less\nReduced costs by a third";
        let patch = parse_profile_text(text);
        let experience = patch.experience.expect("experience extracted");
        assert_eq!(
            experience[0].bullets,
            vec![
                "Shipped the payments service".to_string(),
                "Reduced costs by a third".to_string()
            ]
        );
    }
}
