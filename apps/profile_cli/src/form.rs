use serde::Serialize;

pub const SKILLS_PREVIEW_LIMIT: usize = 12;

/// Raw form values as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub name: String,
    pub role: String,
    pub years_of_experience: String,
    pub skills: String,
    pub tone: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePayload {
    pub name: String,
    pub role: String,
    pub years_of_experience: String,
    pub skills: Vec<String>,
    pub tone: String,
    pub target: String,
}

fn split_skills(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
}

impl ProfileForm {
    pub fn can_submit(&self) -> bool {
        !self.role.trim().is_empty() && !self.skills.trim().is_empty()
    }

    pub fn skills_preview(&self) -> Vec<String> {
        split_skills(&self.skills).take(SKILLS_PREVIEW_LIMIT).collect()
    }

    pub fn to_payload(&self) -> GeneratePayload {
        GeneratePayload {
            name: self.name.trim().to_string(),
            role: self.role.trim().to_string(),
            years_of_experience: self.years_of_experience.trim().to_string(),
            skills: split_skills(&self.skills).collect(),
            tone: self.tone.clone(),
            target: self.target.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(role: &str, skills: &str) -> ProfileForm {
        ProfileForm {
            role: role.to_string(),
            skills: skills.to_string(),
            tone: "professional".to_string(),
            target: "headline".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn requires_role_and_skills() {
        assert!(form("Engineer", "Rust").can_submit());
        assert!(!form("  ", "Rust").can_submit());
        assert!(!form("Engineer", "   ").can_submit());
    }

    #[test]
    fn preview_is_capped() {
        let skills = (1..=20).map(|i| format!("s{i}")).collect::<Vec<_>>().join(", ");
        let preview = form("Engineer", &skills).skills_preview();
        assert_eq!(preview.len(), SKILLS_PREVIEW_LIMIT);
        assert_eq!(preview.first().map(String::as_str), Some("s1"));
        assert_eq!(preview.last().map(String::as_str), Some("s12"));
    }

    #[test]
    fn payload_is_trimmed_and_skills_are_split() {
        let mut form = form(" Engineer ", "Rust, , Tokio ");
        form.name = " Ada ".to_string();
        form.years_of_experience = " 5 ".to_string();

        let payload = form.to_payload();
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.role, "Engineer");
        assert_eq!(payload.years_of_experience, "5");
        assert_eq!(payload.skills, vec!["Rust", "Tokio"]);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["yearsOfExperience"], "5");
    }
}
