//! HTML rendering of a resume for the print pipeline. Layout is a plain
//! single-column A4 document; styling lives in the embedded stylesheet.

use crate::models::resume::{Links, Resume};

const STYLE: &str = r#"
    body { font-family: sans-serif; padding: 40px; color: #333; line-height: 1.5; }
    h1 { margin-bottom: 5px; text-transform: uppercase; }
    .contact { font-size: 14px; color: #666; margin-bottom: 20px; }
    .section { margin-bottom: 20px; }
    .section-title { font-weight: bold; border-bottom: 1px solid #ccc; margin-bottom: 10px; text-transform: uppercase; }
    .item { margin-bottom: 15px; }
    .item-header { font-weight: bold; display: flex; justify-content: space-between; }
    .item-sub { font-style: italic; font-size: 0.9em; margin-bottom: 5px; }
    ul { margin-top: 5px; padding-left: 20px; }
    li { margin-bottom: 2px; }
"#;

/// Renders the resume as a standalone printable HTML document. All
/// user-supplied text is escaped; empty sections are skipped entirely.
pub fn render_resume_html(resume: &Resume) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");

    let name = if resume.basics.name.trim().is_empty() {
        "Your Name"
    } else {
        resume.basics.name.trim()
    };
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(name)));

    let contact: Vec<&str> = [
        Some(resume.basics.email.as_str()),
        resume.basics.phone.as_deref(),
        resume.basics.location.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|part| !part.is_empty())
    .collect();
    if !contact.is_empty() {
        let joined = contact
            .iter()
            .map(|part| escape_html(part))
            .collect::<Vec<_>>()
            .join(" | ");
        html.push_str(&format!("<div class=\"contact\">{joined}</div>\n"));
    }

    let links = link_list(&resume.basics.links);
    if !links.is_empty() || !resume.basics.custom_fields.is_empty() {
        let mut parts: Vec<String> = links
            .iter()
            .map(|(label, url)| format!("{label}: {}", escape_html(url)))
            .collect();
        parts.extend(
            resume
                .basics
                .custom_fields
                .iter()
                .filter(|f| !f.value.trim().is_empty())
                .map(|f| format!("{}: {}", escape_html(&f.label), escape_html(&f.value))),
        );
        html.push_str(&format!("<div class=\"contact\">{}</div>\n", parts.join(" | ")));
    }

    if !resume.summary.trim().is_empty() {
        open_section(&mut html, "Summary");
        html.push_str(&format!("<div>{}</div>\n", escape_html(resume.summary.trim())));
        close_section(&mut html);
    }

    let skills: Vec<&str> = resume
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if !skills.is_empty() {
        open_section(&mut html, "Skills");
        let joined = skills
            .iter()
            .map(|s| escape_html(s))
            .collect::<Vec<_>>()
            .join(", ");
        html.push_str(&format!("<div>{joined}</div>\n"));
        close_section(&mut html);
    }

    if !resume.experience.is_empty() {
        open_section(&mut html, "Experience");
        for entry in &resume.experience {
            let dates = format!(
                "{} - {}",
                entry.start_date.trim(),
                entry.end_date.as_deref().map(str::trim).filter(|e| !e.is_empty()).unwrap_or("Present")
            );
            html.push_str("<div class=\"item\">\n");
            html.push_str(&format!(
                "<div class=\"item-header\"><span>{}</span><span>{}</span></div>\n",
                escape_html(&entry.company),
                escape_html(&dates)
            ));
            html.push_str(&format!(
                "<div class=\"item-sub\">{}</div>\n",
                escape_html(&entry.role)
            ));
            push_bullets(&mut html, &entry.bullets);
            html.push_str("</div>\n");
        }
        close_section(&mut html);
    }

    if !resume.projects.is_empty() {
        open_section(&mut html, "Projects");
        for project in &resume.projects {
            html.push_str("<div class=\"item\">\n");
            html.push_str(&format!(
                "<div class=\"item-header\"><span>{}</span><span>{}</span></div>\n",
                escape_html(&project.title),
                escape_html(&project.tech.join(", "))
            ));
            push_bullets(&mut html, &project.bullets);
            html.push_str("</div>\n");
        }
        close_section(&mut html);
    }

    if !resume.education.is_empty() {
        open_section(&mut html, "Education");
        for entry in &resume.education {
            html.push_str("<div class=\"item\">\n");
            html.push_str(&format!(
                "<div class=\"item-header\"><span>{}</span><span>{}</span></div>\n",
                escape_html(&entry.institute),
                escape_html(&entry.year)
            ));
            html.push_str(&format!(
                "<div class=\"item-sub\">{}</div>\n",
                escape_html(&entry.degree)
            ));
            html.push_str("</div>\n");
        }
        close_section(&mut html);
    }

    if !resume.certifications.is_empty() {
        open_section(&mut html, "Certifications");
        for cert in &resume.certifications {
            html.push_str("<div class=\"item\">\n");
            html.push_str(&format!(
                "<div class=\"item-header\"><span>{}</span><span>{}</span></div>\n",
                escape_html(&cert.name),
                escape_html(&cert.date)
            ));
            html.push_str(&format!(
                "<div class=\"item-sub\">{}</div>\n",
                escape_html(&cert.issuer)
            ));
            html.push_str("</div>\n");
        }
        close_section(&mut html);
    }

    for section in &resume.custom_sections {
        if section.items.is_empty() {
            continue;
        }
        open_section(&mut html, section.title.trim());
        for item in &section.items {
            html.push_str("<div class=\"item\">\n");
            html.push_str(&format!(
                "<div class=\"item-header\"><span>{}</span></div>\n",
                escape_html(&item.name)
            ));
            if !item.description.trim().is_empty() {
                html.push_str(&format!("<div>{}</div>\n", escape_html(&item.description)));
            }
            html.push_str("</div>\n");
        }
        close_section(&mut html);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn link_list(links: &Links) -> Vec<(&'static str, &str)> {
    [
        ("LinkedIn", links.linkedin.as_deref()),
        ("GitHub", links.github.as_deref()),
        ("Twitter", links.twitter.as_deref()),
        ("Portfolio", links.portfolio.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, url)| {
        url.map(str::trim)
            .filter(|u| !u.is_empty())
            .map(|u| (label, u))
    })
    .collect()
}

fn open_section(html: &mut String, title: &str) {
    html.push_str("<div class=\"section\">\n");
    html.push_str(&format!(
        "<div class=\"section-title\">{}</div>\n",
        escape_html(title)
    ));
}

fn close_section(html: &mut String) {
    html.push_str("</div>\n");
}

fn push_bullets(html: &mut String, bullets: &[String]) {
    let bullets: Vec<&str> = bullets
        .iter()
        .map(|b| b.trim())
        .filter(|b| !b.is_empty())
        .collect();
    if bullets.is_empty() {
        return;
    }
    html.push_str("<ul>\n");
    for bullet in bullets {
        html.push_str(&format!("<li>{}</li>\n", escape_html(bullet)));
    }
    html.push_str("</ul>\n");
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
