// All LLM prompt constants for narration script generation.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// System prompt for script generation.
pub const SCRIPT_SYSTEM: &str =
    "You are a creative assistant who writes narration scripts for videos.";

/// Question embedded when the user leaves the guiding question blank.
pub const FALLBACK_QUESTION: &str = "why this person is the best fit for the role.";

/// Script generation prompt template.
/// Replace: {cv_text}, {job_description}, {question}, {duration}
pub const SCRIPT_PROMPT_TEMPLATE: &str = r#"Generate a script for a video based on:

CV: {cv_text}

Job description: {job_description}

Specific question: {question}

The video should be approximately {duration} minutes long.
The script should follow a rhythmic pattern based on a sine or cosine wave, where the length of the sentences varies smoothly and naturally instead of staying uniform.
Each sentence should be separated by a line break, and the script should be clear, concise, and emotionally resonant.
Do not respond with anything other than the narration text, one sentence per line. Do not add image cues, stage directions, or any other formatting.
The total spoken length of your response must match the specified time, with a margin of error of 10 seconds.
If the input is in English, the script should be in English; if it is in Spanish, the script should be in Spanish. When the language is ambiguous, default to English.
Also, keep in mind not to make it rhyme too much; it should not sound like a song."#;
