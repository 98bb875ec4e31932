use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::core::error::AppError;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: role, skills";

/// Skills arrive either as the raw comma-separated form field or as an
/// already split list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExperienceInput {
    Text(String),
    Number(serde_json::Number),
}

/// Body of `POST /api/generate` as sent by the form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub years_of_experience: Option<ExperienceInput>,
    #[serde(default)]
    pub skills: Option<SkillsInput>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Bold,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Professional, Tone::Friendly, Tone::Bold];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Bold => "bold",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Target {
    #[default]
    Headline,
    Bio,
    About,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Headline, Target::Bio, Target::About];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Headline => "headline",
            Target::Bio => "bio",
            Target::About => "about",
        }
    }
}

macro_rules! enum_text {
    ($ty:ident, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = AppError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let normalized = value.trim().to_ascii_lowercase();
                $ty::ALL
                    .into_iter()
                    .find(|variant| variant.as_str() == normalized)
                    .ok_or_else(|| {
                        let allowed = $ty::ALL.map(|variant| variant.as_str()).join(", ");
                        AppError::Validation(format!(
                            "Invalid {}: \"{}\" (expected one of: {})",
                            $field, value, allowed
                        ))
                    })
            }
        }
    };
}

enum_text!(Tone, "tone");
enum_text!(Target, "target");

/// A validated request, ready for prompt construction.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub name: Option<String>,
    pub role: String,
    pub years_of_experience: Option<String>,
    pub skills: Vec<String>,
    pub tone: Tone,
    pub target: Target,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub text: String,
}

pub fn normalize_skills(skills: &SkillsInput) -> Vec<String> {
    let entries: Vec<&str> = match skills {
        SkillsInput::Text(raw) => raw.split(',').collect(),
        SkillsInput::List(items) => items.iter().map(String::as_str).collect(),
    };

    entries
        .into_iter()
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn parse_or_default<T>(value: Option<&str>) -> Result<T, AppError>
where
    T: FromStr<Err = AppError> + Default,
{
    match non_blank(value) {
        Some(value) => value.parse(),
        None => Ok(T::default()),
    }
}

impl TryFrom<GenerationPayload> for GenerationRequest {
    type Error = AppError;

    fn try_from(payload: GenerationPayload) -> Result<Self, Self::Error> {
        let role = non_blank(payload.role.as_deref());
        let skills = payload
            .skills
            .as_ref()
            .map(normalize_skills)
            .unwrap_or_default();

        let role = match role {
            Some(role) if !skills.is_empty() => role,
            _ => return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
        };

        let years_of_experience = match payload.years_of_experience {
            Some(ExperienceInput::Text(text)) => non_blank(Some(text.as_str())),
            Some(ExperienceInput::Number(number)) => Some(number.to_string()),
            None => None,
        };

        Ok(Self {
            name: non_blank(payload.name.as_deref()),
            role,
            years_of_experience,
            skills,
            tone: parse_or_default(payload.tone.as_deref())?,
            target: parse_or_default(payload.target.as_deref())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> GenerationPayload {
        serde_json::from_value(value).unwrap()
    }

    fn validation_message(result: Result<GenerationRequest, AppError>) -> String {
        match result {
            Err(AppError::Validation(message)) => message,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn skills_string_is_split_trimmed_and_filtered_in_order() {
        let skills = normalize_skills(&SkillsInput::Text(" Rust, ,Tokio ,, axum,".into()));
        assert_eq!(skills, vec!["Rust", "Tokio", "axum"]);
    }

    #[test]
    fn skills_list_drops_blank_entries() {
        let skills = normalize_skills(&SkillsInput::List(vec![
            "  SQL ".into(),
            "".into(),
            "Go".into(),
        ]));
        assert_eq!(skills, vec!["SQL", "Go"]);
    }

    #[test]
    fn minimal_payload_gets_defaults() {
        let request = GenerationRequest::try_from(payload(json!({
            "role": "  Software Engineer ",
            "skills": "Node.js, MySQL, REST APIs"
        })))
        .unwrap();

        assert_eq!(request.name, None);
        assert_eq!(request.role, "Software Engineer");
        assert_eq!(request.years_of_experience, None);
        assert_eq!(request.skills, vec!["Node.js", "MySQL", "REST APIs"]);
        assert_eq!(request.tone, Tone::Professional);
        assert_eq!(request.target, Target::Headline);
    }

    #[test]
    fn numeric_experience_is_accepted() {
        let request = GenerationRequest::try_from(payload(json!({
            "role": "Designer",
            "skills": ["Figma"],
            "yearsOfExperience": 4,
            "name": "   ",
            "tone": "Bold",
            "target": "about"
        })))
        .unwrap();

        assert_eq!(request.years_of_experience.as_deref(), Some("4"));
        assert_eq!(request.name, None);
        assert_eq!(request.tone, Tone::Bold);
        assert_eq!(request.target, Target::About);
    }

    #[test]
    fn missing_role_or_skills_is_rejected() {
        for body in [
            json!({ "skills": "Rust" }),
            json!({ "role": "   ", "skills": "Rust" }),
            json!({ "role": "Engineer" }),
            json!({ "role": "Engineer", "skills": " , ,," }),
            json!({ "role": "Engineer", "skills": [] }),
        ] {
            let message = validation_message(GenerationRequest::try_from(payload(body)));
            assert_eq!(message, MISSING_FIELDS_MESSAGE);
        }
    }

    #[test]
    fn unknown_tone_or_target_is_rejected() {
        let message = validation_message(GenerationRequest::try_from(payload(json!({
            "role": "Engineer",
            "skills": "Rust",
            "tone": "sarcastic"
        }))));
        assert!(message.contains("Invalid tone"));
        assert!(message.contains("professional, friendly, bold"));

        let message = validation_message(GenerationRequest::try_from(payload(json!({
            "role": "Engineer",
            "skills": "Rust",
            "target": "tweet"
        }))));
        assert!(message.contains("Invalid target"));
    }

    #[test]
    fn blank_tone_and_target_fall_back_to_defaults() {
        let request = GenerationRequest::try_from(payload(json!({
            "role": "Engineer",
            "skills": "Rust",
            "tone": "",
            "target": " "
        })))
        .unwrap();
        assert_eq!(request.tone, Tone::Professional);
        assert_eq!(request.target, Target::Headline);
    }
}
