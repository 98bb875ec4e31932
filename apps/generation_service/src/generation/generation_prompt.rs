use super::generation_model::GenerationRequest;

pub const SYSTEM_INSTRUCTION: &str = "You write LinkedIn content. Follow the requested target format strictly. Keep it crisp, modern, and human. Avoid clichés and emojis unless asked.";

pub const TEMPERATURE: f32 = 0.7;

const MISSING_VALUE: &str = "N/A";

const EXAMPLE_INPUT: &str = "Target: headline
Name: Mohamed
Role: Software Engineer
Experience: 2 years
Skills: Node.js, MySQL, REST APIs
Tone: professional";

const EXAMPLE_OUTPUT: &str =
    "Software Engineer | Node.js & MySQL | Building scalable APIs & reliable systems";

pub const HEADLINE_RULE: &str = "If Target=headline: 1 line, max 120 chars.";
pub const BIO_RULE: &str = "If Target=bio: 2-3 lines.";
pub const ABOUT_RULE: &str = "If Target=about: 5-8 lines, with 3 bullet points at the end.";
pub const PLACEHOLDER_RULE: &str = "No placeholders like [Your Name].";

pub struct LinkedInPrompt;

impl LinkedInPrompt {
    /// The block describing the profile being written for, one field per line.
    pub fn request_block(request: &GenerationRequest) -> String {
        format!(
            "Target: {}\nName: {}\nRole: {}\nExperience: {}\nSkills: {}\nTone: {}",
            request.target,
            request.name.as_deref().unwrap_or(MISSING_VALUE),
            request.role,
            request
                .years_of_experience
                .as_deref()
                .unwrap_or(MISSING_VALUE),
            request.skills.join(", "),
            request.tone,
        )
    }

    pub fn get_prompt(request: &GenerationRequest) -> String {
        let rules = [HEADLINE_RULE, BIO_RULE, ABOUT_RULE, PLACEHOLDER_RULE]
            .map(|rule| format!("- {}", rule))
            .join("\n");

        format!(
            r#"
Example Input:
{}

Example Output:
{}

Now generate for:
{}

Rules:
{}
"#,
            EXAMPLE_INPUT,
            EXAMPLE_OUTPUT,
            Self::request_block(request),
            rules
        )
        .trim()
        .to_string()
    }
}
