//! Script Generator — turns a resume, a job description and a target length
//! into a timed narration script via the LLM.

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::scripting::prompts::{FALLBACK_QUESTION, SCRIPT_PROMPT_TEMPLATE, SCRIPT_SYSTEM};

/// Inclusive bounds on the requested video duration, in minutes.
pub const MIN_DURATION_MINUTES: u32 = 1;
pub const MAX_DURATION_MINUTES: u32 = 10;

/// Builds the narration prompt. Resume and job description are embedded
/// verbatim; a blank guiding question falls back to the stock pitch question.
pub fn build_script_prompt(
    resume_text: &str,
    job_description: &str,
    question: &str,
    duration_minutes: u32,
) -> String {
    let question = if question.trim().is_empty() {
        FALLBACK_QUESTION
    } else {
        question
    };

    SCRIPT_PROMPT_TEMPLATE
        .replace("{cv_text}", resume_text)
        .replace("{job_description}", job_description)
        .replace("{question}", question)
        .replace("{duration}", &duration_minutes.to_string())
}

/// Requests a narration script from the LLM.
/// Any transport or API failure is reported as a generation error; the caller
/// receives no script and must not proceed to submission.
pub async fn generate_script(
    llm: &LlmClient,
    resume_text: &str,
    job_description: &str,
    question: &str,
    duration_minutes: u32,
) -> Result<String, AppError> {
    let prompt = build_script_prompt(resume_text, job_description, question, duration_minutes);

    let script = llm
        .call_text(&prompt, SCRIPT_SYSTEM)
        .await
        .map_err(|e| AppError::Generation(format!("Error generating script: {e}")))?;

    Ok(script.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_question_uses_fallback_phrase() {
        let prompt = build_script_prompt("resume", "job", "", 2);
        assert!(prompt.contains("why this person is the best fit for the role."));
    }

    #[test]
    fn test_whitespace_question_uses_fallback_phrase() {
        let prompt = build_script_prompt("resume", "job", "   \n", 2);
        assert!(prompt.contains(FALLBACK_QUESTION));
    }

    #[test]
    fn test_explicit_question_embedded_verbatim() {
        let prompt = build_script_prompt("resume", "job", "What drives this candidate?", 2);
        assert!(prompt.contains("Specific question: What drives this candidate?"));
        assert!(!prompt.contains(FALLBACK_QUESTION));
    }

    #[test]
    fn test_resume_and_description_embedded_verbatim() {
        let prompt = build_script_prompt(
            "Ten years shipping backend services.",
            "Backend Engineer at Acme, Rust preferred.",
            "",
            3,
        );
        assert!(prompt.contains("CV: Ten years shipping backend services."));
        assert!(prompt.contains("Job description: Backend Engineer at Acme, Rust preferred."));
    }

    #[test]
    fn test_duration_embedded_in_minutes() {
        let prompt = build_script_prompt("resume", "job", "", 3);
        assert!(prompt.contains("approximately 3 minutes long"));
    }
}
