//! Resume validation — one canonical type, one validator parameterized by
//! strictness.
//!
//! A draft being edited is transiently invalid (half-typed email, empty
//! company) and must never be rejected, so `Draft` accepts any well-typed
//! document. `Strict` gates everything that leaves the system: exported
//! JSON and rendered PDFs must be well-formed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::models::resume::Resume;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    /// Autosave-time: structural checks only, nothing fails.
    Draft,
    /// Export-time: required strings non-empty, email/URL formats valid.
    Strict,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email regex is valid")
});

const MIN_NAME_CHARS: usize = 2;

/// Validates a resume under the given regime. Returns all failures at once
/// so the caller can surface a complete report.
pub fn validate_resume(resume: &Resume, strictness: Strictness) -> Result<(), Vec<FieldError>> {
    if strictness == Strictness::Draft {
        // Anything that deserialized into the canonical type is an
        // acceptable draft.
        return Ok(());
    }

    let mut errors = Vec::new();

    if resume.basics.name.trim().chars().count() < MIN_NAME_CHARS {
        push(&mut errors, "basics.name", "must be at least 2 characters");
    }
    if !EMAIL_RE.is_match(resume.basics.email.trim()) {
        push(&mut errors, "basics.email", "must be a valid email address");
    }

    let links = [
        ("basics.links.linkedin", &resume.basics.links.linkedin),
        ("basics.links.github", &resume.basics.links.github),
        ("basics.links.twitter", &resume.basics.links.twitter),
        ("basics.links.portfolio", &resume.basics.links.portfolio),
    ];
    for (field, value) in links {
        if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            check_url(&mut errors, field, value);
        }
    }

    for (i, entry) in resume.experience.iter().enumerate() {
        require(&mut errors, &format!("experience[{i}].company"), &entry.company);
        require(&mut errors, &format!("experience[{i}].role"), &entry.role);
        require(
            &mut errors,
            &format!("experience[{i}].startDate"),
            &entry.start_date,
        );
    }

    for (i, project) in resume.projects.iter().enumerate() {
        require(&mut errors, &format!("projects[{i}].title"), &project.title);
    }

    for (i, entry) in resume.education.iter().enumerate() {
        require(
            &mut errors,
            &format!("education[{i}].institute"),
            &entry.institute,
        );
        require(&mut errors, &format!("education[{i}].degree"), &entry.degree);
        require(&mut errors, &format!("education[{i}].year"), &entry.year);
    }

    for (i, cert) in resume.certifications.iter().enumerate() {
        require(&mut errors, &format!("certifications[{i}].name"), &cert.name);
        require(
            &mut errors,
            &format!("certifications[{i}].issuer"),
            &cert.issuer,
        );
        require(&mut errors, &format!("certifications[{i}].date"), &cert.date);
        if let Some(url) = cert.url.as_deref().filter(|u| !u.trim().is_empty()) {
            check_url(&mut errors, &format!("certifications[{i}].url"), url);
        }
    }

    for (i, section) in resume.custom_sections.iter().enumerate() {
        require(
            &mut errors,
            &format!("customSections[{i}].title"),
            &section.title,
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn require(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        push(errors, field, "must not be empty");
    }
}

fn check_url(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => push(errors, field, "must be a valid http(s) URL"),
    }
}

fn push(errors: &mut Vec<FieldError>, field: &str, message: &str) {
    errors.push(FieldError {
        field: field.to_string(),
        message: message.to_string(),
    });
}
