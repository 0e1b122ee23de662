//! Structured results produced from generator output.
//!
//! Generators drift from the requested schema in small, predictable ways (numeric
//! experience, comma-joined skills, title-cased keys). Deserialization absorbs those;
//! anything further is a shape error.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A job posting extracted from a careers page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub role: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub experience: String,
    #[serde(default, deserialize_with = "list_or_comma_text")]
    pub skills: Vec<String>,
    pub description: String,
}

/// One proposed resume edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(alias = "Original Text", alias = "originalText", alias = "original")]
    pub original_text: String,
    #[serde(
        alias = "Suggested Improvement",
        alias = "suggestedImprovement",
        alias = "improvement",
        alias = "suggestion"
    )]
    pub suggested_improvement: String,
    #[serde(alias = "Reason")]
    pub reason: String,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => scalar_text(&other),
    })
}

fn list_or_comma_text<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => scalar_text(other),
            })
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect(),
        other => vec![scalar_text(&other)],
    })
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_posting_exact_schema() {
        let json = r#"{
            "role": "Backend Engineer",
            "experience": "3+ years",
            "skills": ["Rust", "PostgreSQL"],
            "description": "Build APIs."
        }"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(job.role, "Backend Engineer");
        assert_eq!(job.experience, "3+ years");
        assert_eq!(job.skills, vec!["Rust", "PostgreSQL"]);
        assert_eq!(job.description, "Build APIs.");
    }

    #[test]
    fn test_job_posting_numeric_experience_and_comma_skills() {
        let json = r#"{"role": "SRE", "experience": 5, "skills": "Go, Terraform ,, AWS", "description": "On-call."}"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(job.experience, "5");
        assert_eq!(job.skills, vec!["Go", "Terraform", "AWS"]);
    }

    #[test]
    fn test_job_posting_missing_optional_fields_default_empty() {
        let json = r#"{"role": "Intern", "experience": null, "description": "Learn."}"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert!(job.experience.is_empty());
        assert!(job.skills.is_empty());
    }

    #[test]
    fn test_job_posting_without_role_is_rejected() {
        let json = r#"{"experience": "2 years", "skills": [], "description": "x"}"#;
        assert!(serde_json::from_str::<JobPosting>(json).is_err());
    }

    #[test]
    fn test_job_posting_stringifies_non_string_skills() {
        let json = r#"{"role": "r", "skills": ["C", 11, true], "description": "d"}"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(job.skills, vec!["C", "11", "true"]);
    }

    #[test]
    fn test_suggestion_accepts_title_case_keys() {
        let json = r#"{
            "Original Text": "Worked on backend",
            "Suggested Improvement": "Built Rust services handling 10k rps",
            "Reason": "Quantifies impact"
        }"#;
        let s: Suggestion = serde_json::from_str(json).unwrap();
        assert_eq!(s.original_text, "Worked on backend");
        assert_eq!(s.suggested_improvement, "Built Rust services handling 10k rps");
        assert_eq!(s.reason, "Quantifies impact");
    }

    #[test]
    fn test_suggestion_accepts_camel_case_keys() {
        let json = r#"{"originalText": "a", "suggestedImprovement": "b", "reason": "c"}"#;
        let s: Suggestion = serde_json::from_str(json).unwrap();
        assert_eq!(s.suggested_improvement, "b");
    }
}
