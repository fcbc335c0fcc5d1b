//! Prompt templates for the interview flow

use crate::evaluation::categories_for;
use crate::interview::{InterviewContext, QaPair};

const NO_ANSWER: &str = "(no answer given)";

const QUESTION_ONLY_INSTRUCTION: &str =
    "Return only the question text, without numbering, quotes or commentary.";

/// Templates for generating prompts at each turn
pub struct InterviewPromptTemplate;

impl InterviewPromptTemplate {
    /// Prompt for the opening question (`start`)
    pub fn question_prompt(context: &InterviewContext, level: &str, focus: Option<&str>) -> String {
        let mut ask = format!("Ask the candidate ONE {}-level interview question", level);
        if let Some(focus) = focus {
            ask.push_str(&format!(" focused on {}", focus));
        }
        if context.has_job_description() {
            ask.push_str(" that reflects the responsibilities in the job description");
        }
        ask.push('.');

        format!(
            "{}\n\n{}\n{}",
            context.preamble(),
            ask,
            QUESTION_ONLY_INSTRUCTION
        )
    }

    /// Prompt for the next question after an answer (`respond`)
    pub fn followup_prompt(
        context: &InterviewContext,
        level: &str,
        focus: Option<&str>,
        previous_question: &str,
        answer: &str,
    ) -> String {
        let answer = match answer.trim() {
            "" => NO_ANSWER,
            trimmed => trimmed,
        };

        let mut ask = format!(
            "Ask ONE {}-level follow-up question that digs deeper into the candidate's answer",
            level
        );
        if let Some(focus) = focus {
            ask.push_str(&format!(", staying focused on {}", focus));
        }
        ask.push_str(
            ". If the answer was weak or missing, ask a simpler related question instead.",
        );

        format!(
            r#"{}

Previous question: {}
Candidate's answer: {}

{}
{}"#,
            context.preamble(),
            previous_question.trim(),
            answer,
            ask,
            QUESTION_ONLY_INSTRUCTION
        )
    }

    /// Prompt for the structured end-of-session summary (`end`)
    pub fn summary_prompt(context: &InterviewContext, pairs: &[QaPair]) -> String {
        let mut prompt = format!(
            "{}\n\nThe interview has finished. Transcript:\n",
            context.preamble()
        );

        if pairs.is_empty() {
            prompt.push_str("\n(no questions were answered)\n");
        }
        for (i, pair) in pairs.iter().enumerate() {
            let answer = match pair.answer.trim() {
                "" => NO_ANSWER,
                trimmed => trimmed,
            };
            prompt.push_str(&format!(
                "\nQ{n}: {}\nA{n}: {}\n",
                pair.question.trim(),
                answer,
                n = i + 1
            ));
        }

        let categories = categories_for(context.role())
            .iter()
            .map(|key| format!("\"{}\": <1-10>", key))
            .collect::<Vec<_>>()
            .join(", ");

        prompt.push_str(&format!(
            r#"
Evaluate the candidate and respond with ONLY a JSON object of this shape:
{{
  "summary": "<2-3 sentence overall assessment>",
  "strengths": ["<strength>", "..."],
  "improvements": ["<area to improve>", "..."],
  "categories": {{{}}}
}}
Rate every category as an integer from 1 to 10."#,
            categories
        ));

        prompt
    }
}

/// Remove one surrounding quote character from each end of a provider reply.
///
/// Only a single layer is stripped; inner quotes are preserved.
pub fn strip_quotes(text: &str) -> String {
    const QUOTES: [char; 4] = ['"', '\'', '\u{201C}', '\u{201D}'];

    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix(QUOTES).unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(QUOTES).unwrap_or(trimmed);
    trimmed.trim().to_string()
}
