use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// The canonical resume document, stored as JSONB in the `resumes` table.
///
/// Every top-level key is always present once a resume is materialized: a
/// section the user has not touched is an empty collection, never a missing
/// one. Dates are kept as free-form strings exactly as the user (or an
/// importer) supplied them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub basics: Basics,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<Project>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<Certification>,
    pub custom_sections: Vec<CustomSection>,
}

impl Resume {
    /// The all-empty document created on a user's first visit.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Basics {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub links: Links,
    /// Extra labelled links ("Portfolio", "Blog", ...) shown with the basics.
    pub custom_fields: Vec<CustomField>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Links {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub portfolio: Option<String>,
}

/// `id` is a caller-generated opaque token used only for list identity in
/// the editing UI. It carries no meaning server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomField {
    pub id: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: String,
    pub bullets: Vec<String>,
    pub tech: Vec<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub institute: String,
    pub degree: String,
    /// The full date range as matched ("2016 - 2020"), not decomposed.
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSection {
    pub id: String,
    pub title: String,
    pub items: Vec<CustomItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomItem {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// A partial resume, as produced by the importers. Absent fields mean
/// "nothing was confidently extracted"; the client merges a patch into the
/// active resume rather than replacing it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basics: Option<BasicsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<ExperienceEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<EducationEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomField>>,
}

/// One row of the `resumes` table. Exactly one row per user has
/// `is_active = TRUE`; the store layer enforces this.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub data: Json<Resume>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_resume_has_all_sections_present() {
        let resume = Resume::empty();
        let value = serde_json::to_value(&resume).unwrap();
        for key in [
            "basics",
            "summary",
            "skills",
            "experience",
            "projects",
            "education",
            "certifications",
            "customSections",
        ] {
            assert!(value.get(key).is_some(), "missing top-level key {key}");
        }
    }

    #[test]
    fn test_partial_json_materializes_missing_sections_as_empty() {
        // A draft mid-edit may omit whole sections; deserialization fills
        // them in so there is no "missing section" state downstream.
        let resume: Resume =
            serde_json::from_str(r#"{"basics": {"name": "Jane"}, "skills": ["Rust"]}"#).unwrap();
        assert_eq!(resume.basics.name, "Jane");
        assert_eq!(resume.skills, vec!["Rust".to_string()]);
        assert!(resume.experience.is_empty());
        assert!(resume.custom_sections.is_empty());
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let mut resume = Resume::empty();
        resume.experience.push(ExperienceEntry {
            company: "Acme".into(),
            role: "Engineer".into(),
            start_date: "Jan 2020".into(),
            end_date: Some("Present".into()),
            bullets: vec![],
        });
        let value = serde_json::to_value(&resume).unwrap();
        let entry = &value["experience"][0];
        assert_eq!(entry["startDate"], "Jan 2020");
        assert_eq!(entry["endDate"], "Present");
    }

    #[test]
    fn test_patch_omits_absent_fields() {
        let patch = ResumePatch {
            summary: Some("Imported".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert!(value.get("basics").is_none());
        assert!(value.get("experience").is_none());
        assert_eq!(value["summary"], "Imported");
    }
}
