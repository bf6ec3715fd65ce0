//! Prompt templates for the panel flow

use crate::core::specialist::Specialist;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for a single specialist
    pub fn specialist_system(specialist: &Specialist) -> String {
        format!(
            r#"Act like a {role}. You will receive a medical report of a patient.
Task: Review the patient's medical report and provide your assessment from the perspective of a {role}.
Focus: Determine if there are any {focus}.
Be concise and ground every conclusion in the report."#,
            role = specialist.as_str(),
            focus = specialist.focus(),
        )
    }

    /// User prompt carrying the shared input document
    pub fn specialist_prompt(document: &str) -> String {
        format!(
            r#"Medical Report:
{}

Recommendation: Provide guidance on any further testing, monitoring or management needed.
Please only return the possible causes of the patient's symptoms and the recommended next steps."#,
            document
        )
    }

    /// System prompt for the multidisciplinary synthesis
    pub fn team_system() -> &'static str {
        r#"Act like a multidisciplinary team of healthcare professionals.
You will receive reports written by individual specialists about the same patient.
Task: Review the reports, analyze them together and come up with a list of 3 possible health issues.
For each issue, give the reason it fits the findings reported by the specialists.
If a specialist report states that it could not be generated, work with the remaining reports and say so."#
    }

    /// User prompt listing every specialist opinion by name
    pub fn team_prompt<'a>(opinions: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
        let mut prompt = String::from("Specialist reports:\n");
        for (name, opinion) in opinions {
            prompt.push_str(&format!("\n--- {} Report ---\n{}\n", name, opinion));
        }
        prompt.push_str(
            "\nReturn the 3 possible health issues as bullet points, each with its reasoning.",
        );
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialist_system_names_role() {
        let prompt = PromptTemplate::specialist_system(&Specialist::Pulmonologist);
        assert!(prompt.contains("Pulmonologist"));
        assert!(prompt.contains("asthma"));
    }

    #[test]
    fn test_specialist_prompt_embeds_document() {
        let prompt = PromptTemplate::specialist_prompt("Chest pain after exercise.");
        assert!(prompt.contains("Chest pain after exercise."));
    }

    #[test]
    fn test_team_prompt_lists_every_opinion() {
        let prompt = PromptTemplate::team_prompt([
            ("Cardiologist", "No arrhythmia."),
            ("Psychologist", "Signs of panic disorder."),
        ]);
        assert!(prompt.contains("--- Cardiologist Report ---"));
        assert!(prompt.contains("Signs of panic disorder."));
    }
}
