//! ATS score — a deterministic weighted checklist over resume field counts
//! and lengths. Pure function, always returns a score in 0..=100 plus a
//! per-category breakdown in a fixed order.

use serde::{Deserialize, Serialize};

use crate::ats::action_verbs::ACTION_VERBS;
use crate::models::resume::Resume;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    pub label: String,
    pub points: u32,
    pub max: u32,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: u32,
    pub breakdown: Vec<CategoryScore>,
}

fn present(s: &str) -> bool {
    !s.trim().is_empty()
}

fn opt_present(s: Option<&str>) -> bool {
    s.is_some_and(present)
}

/// Scores a resume against the fixed ATS rubric.
///
/// Category order is part of the contract: Basics, Summary, Skills,
/// Experience, Projects, Length, Action Verbs. Each category picks one of
/// two fixed messages depending on whether its threshold was met.
pub fn calculate_ats_score(resume: &Resume) -> AtsReport {
    let mut breakdown = Vec::with_capacity(7);
    let mut score = 0u32;

    // Basics: 4 points per present field, capped at 15.
    let basics_fields = [
        present(&resume.basics.name),
        present(&resume.basics.email),
        opt_present(resume.basics.phone.as_deref()),
        opt_present(resume.basics.location.as_deref()),
    ]
    .iter()
    .filter(|&&p| p)
    .count() as u32;
    let basics_points = (basics_fields * 4).min(15);
    score += basics_points;
    breakdown.push(CategoryScore {
        label: "Basics".to_string(),
        points: basics_points,
        max: 15,
        message: if basics_points == 15 {
            "All basic details present".to_string()
        } else {
            "Add phone or location for better ATS parsing".to_string()
        },
    });

    // Summary: rewarded by length.
    let summary_len = resume.summary.trim().chars().count();
    let summary_points = if summary_len >= 200 {
        10
    } else if summary_len >= 100 {
        6
    } else {
        0
    };
    score += summary_points;
    breakdown.push(CategoryScore {
        label: "Summary".to_string(),
        points: summary_points,
        max: 10,
        message: if summary_points == 10 {
            "Summary length is optimal".to_string()
        } else {
            "Summary should be at least 100-200 characters".to_string()
        },
    });

    // Skills: count thresholds.
    let skill_count = resume.skills.len();
    let skills_points = if skill_count >= 12 {
        20
    } else if skill_count >= 8 {
        14
    } else if skill_count >= 5 {
        8
    } else {
        0
    };
    score += skills_points;
    breakdown.push(CategoryScore {
        label: "Skills".to_string(),
        points: skills_points,
        max: 20,
        message: if skill_count >= 8 {
            "Good number of skills listed".to_string()
        } else {
            "Add more relevant skills (8+ recommended)".to_string()
        },
    });

    // Experience: total bullet count across all jobs, with a 5-point floor.
    let bullet_count: usize = resume.experience.iter().map(|e| e.bullets.len()).sum();
    let experience_points = if bullet_count >= 10 {
        25
    } else if bullet_count >= 5 {
        15
    } else {
        5
    };
    score += experience_points;
    breakdown.push(CategoryScore {
        label: "Experience".to_string(),
        points: experience_points,
        max: 25,
        message: if bullet_count >= 5 {
            "Experience section looks strong".to_string()
        } else {
            "Add more quantified experience bullets".to_string()
        },
    });

    // Projects: count thresholds.
    let project_count = resume.projects.len();
    let project_points = if project_count >= 3 {
        10
    } else if project_count >= 1 {
        5
    } else {
        0
    };
    score += project_points;
    breakdown.push(CategoryScore {
        label: "Projects".to_string(),
        points: project_points,
        max: 10,
        message: if project_count > 0 {
            "Projects add value".to_string()
        } else {
            "Projects help ATS ranking for freshers".to_string()
        },
    });

    // Length sanity over summary + experience bullets + project bullets.
    let combined = combined_text(resume);
    let word_count = combined.split_whitespace().count();
    let length_points = if (300..=800).contains(&word_count) {
        10
    } else {
        5
    };
    score += length_points;
    breakdown.push(CategoryScore {
        label: "Length".to_string(),
        points: length_points,
        max: 10,
        message: if length_points == 10 {
            "Resume length is ATS-friendly".to_string()
        } else {
            "Ideal resume length is 300-800 words".to_string()
        },
    });

    // Action verbs: case-insensitive substring hits from a fixed vocabulary.
    let combined_lower = combined.to_lowercase();
    let verb_count = ACTION_VERBS
        .iter()
        .filter(|verb| combined_lower.contains(*verb))
        .count();
    let verb_points = if verb_count >= 6 {
        10
    } else if verb_count >= 3 {
        5
    } else {
        0
    };
    score += verb_points;
    breakdown.push(CategoryScore {
        label: "Action Verbs".to_string(),
        points: verb_points,
        max: 10,
        message: if verb_points == 10 {
            "Strong action verbs detected".to_string()
        } else {
            "Use more action verbs (built, optimized, led)".to_string()
        },
    });

    AtsReport {
        score: score.min(100),
        breakdown,
    }
}

fn combined_text(resume: &Resume) -> String {
    let mut parts = vec![resume.summary.clone()];
    parts.extend(resume.experience.iter().map(|e| e.bullets.join(" ")));
    parts.extend(resume.projects.iter().map(|p| p.bullets.join(" ")));
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Basics, ExperienceEntry, Project};

    fn labels(report: &AtsReport) -> Vec<&str> {
        report.breakdown.iter().map(|c| c.label.as_str()).collect()
    }

    fn category<'a>(report: &'a AtsReport, label: &str) -> &'a CategoryScore {
        report
            .breakdown
            .iter()
            .find(|c| c.label == label)
            .unwrap_or_else(|| panic!("missing category {label}"))
    }

    #[test]
    fn test_breakdown_order_is_fixed() {
        let report = calculate_ats_score(&Resume::empty());
        assert_eq!(
            labels(&report),
            vec![
                "Basics",
                "Summary",
                "Skills",
                "Experience",
                "Projects",
                "Length",
                "Action Verbs"
            ]
        );
    }

    #[test]
    fn test_empty_resume_keeps_floor_points_only() {
        let report = calculate_ats_score(&Resume::empty());
        // Experience floors at 5 and Length scores 5 outside the ideal
        // band; every other category is zero.
        assert_eq!(category(&report, "Experience").points, 5);
        assert_eq!(category(&report, "Length").points, 5);
        assert_eq!(report.score, 10);
    }

    #[test]
    fn test_sparse_resume_scores_eighteen() {
        // Name and email only, 3 skills, 2 experience bullets, no projects,
        // ~40 words, exactly one action verb.
        let resume = Resume {
            basics: Basics {
                name: "Jane Doe".into(),
                email: "jane@x.com".into(),
                ..Basics::default()
            },
            skills: vec!["Rust".into(), "SQL".into(), "Git".into()],
            experience: vec![ExperienceEntry {
                company: "Acme".into(),
                role: "Engineer".into(),
                start_date: "2020".into(),
                end_date: None,
                bullets: vec![
                    "Built the payments service and kept it running through two busy seasons without downtime"
                        .into(),
                    "Wrote runbooks and on-call notes so the whole team could answer pages with confidence every week"
                        .into(),
                ],
            }],
            ..Resume::default()
        };

        let report = calculate_ats_score(&resume);
        assert_eq!(category(&report, "Basics").points, 8);
        assert_eq!(category(&report, "Summary").points, 0);
        assert_eq!(category(&report, "Skills").points, 0);
        assert_eq!(category(&report, "Experience").points, 5);
        assert_eq!(category(&report, "Projects").points, 0);
        assert_eq!(category(&report, "Length").points, 5);
        assert_eq!(category(&report, "Action Verbs").points, 0);
        assert_eq!(report.score, 18);
    }

    #[test]
    fn test_full_resume_reaches_the_cap() {
        let bullet = "Designed and shipped improved pipelines that reduced costs and increased throughput for customers".to_string();
        let resume = Resume {
            basics: Basics {
                name: "Jane Doe".into(),
                email: "jane@x.com".into(),
                phone: Some("555-0100".into()),
                location: Some("Berlin".into()),
                ..Basics::default()
            },
            summary: "word ".repeat(160).trim().to_string(),
            skills: (0..12).map(|i| format!("Skill{i}")).collect(),
            experience: vec![ExperienceEntry {
                company: "Acme".into(),
                role: "Engineer".into(),
                start_date: "2020".into(),
                end_date: None,
                bullets: vec![bullet; 10],
            }],
            projects: (0..3)
                .map(|i| Project {
                    title: format!("Project {i}"),
                    bullets: vec!["Built and launched an automated, optimized tool".into()],
                    tech: vec!["Rust".into()],
                    github: None,
                    website: None,
                })
                .collect(),
            ..Resume::default()
        };

        let report = calculate_ats_score(&resume);
        assert_eq!(category(&report, "Basics").points, 15);
        assert_eq!(category(&report, "Summary").points, 10);
        assert_eq!(category(&report, "Skills").points, 20);
        assert_eq!(category(&report, "Experience").points, 25);
        assert_eq!(category(&report, "Projects").points, 10);
        assert_eq!(category(&report, "Length").points, 10);
        assert_eq!(category(&report, "Action Verbs").points, 10);
        assert_eq!(report.score, 100);
    }

    #[test]
    fn test_basics_cap_applies_before_fifteen() {
        let resume = Resume {
            basics: Basics {
                name: "Jane".into(),
                email: "jane@x.com".into(),
                phone: Some("555".into()),
                location: Some("Berlin".into()),
                ..Basics::default()
            },
            ..Resume::default()
        };
        // 4 fields x 4 points = 16, capped at 15.
        let report = calculate_ats_score(&resume);
        assert_eq!(category(&report, "Basics").points, 15);
    }

    #[test]
    fn test_blank_optional_fields_do_not_count_as_present() {
        let resume = Resume {
            basics: Basics {
                name: "Jane".into(),
                email: "jane@x.com".into(),
                phone: Some("   ".into()),
                location: Some(String::new()),
                ..Basics::default()
            },
            ..Resume::default()
        };
        let report = calculate_ats_score(&resume);
        assert_eq!(category(&report, "Basics").points, 8);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let resume = Resume {
            summary: "Built systems.".into(),
            ..Resume::default()
        };
        let a = calculate_ats_score(&resume);
        let b = calculate_ats_score(&resume);
        assert_eq!(a.score, b.score);
        assert_eq!(
            a.breakdown.iter().map(|c| c.points).collect::<Vec<_>>(),
            b.breakdown.iter().map(|c| c.points).collect::<Vec<_>>()
        );
    }
}
