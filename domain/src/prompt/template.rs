//! Prompt templates for the debate flow

/// Templates for generating prompts for each role
pub struct PromptBuilder;

impl PromptBuilder {
    /// Default system prompt for the Proposer
    pub fn proposer_system() -> &'static str {
        r#"You are the PROPOSER in a structured debate with a critical reviewer.
Your task is to produce the best possible answer to the user's request and to refine it
each time the reviewer sends feedback.

Always respond with a single JSON object using these fields:
- "draft": the complete current version of your answer (never a diff or a summary)
- "response": a short note to the reviewer explaining what you changed and why
- "status": "ONGOING" while the draft still needs work, "READY" once it is final
- "sources": an optional list of references you relied on

Only mark the draft READY when you are confident the reviewer's concerns are addressed."#
    }

    /// Default system prompt for the Challenger
    pub fn challenger_system() -> &'static str {
        r#"You are the CHALLENGER in a structured debate with an author.
Your task is to review each draft critically and help the author improve it.
Be specific, point out errors and gaps, and prefer actionable feedback over praise.

Always respond with a single JSON object using these fields:
- "critique": your overall assessment of the draft
- "questions": a list of open questions the author should answer
- "suggestions": a list of concrete improvements"#
    }

    /// User prompt for the Proposer.
    ///
    /// `iteration_index` is 0-based: the first iteration asks for an initial
    /// draft, later iterations hand over the latest Challenger feedback.
    pub fn proposer_prompt(task: &str, feedback: &str, iteration_index: usize) -> String {
        if iteration_index == 0 {
            format!(
                "Create an initial draft for the following request:\n\n{}\n\n\
                 Remember to respond in JSON format with 'draft', 'response', and 'status' fields.",
                task
            )
        } else {
            format!(
                "Original request: {}\n\n\
                 The CHALLENGER provided this feedback:\n{}\n\n\
                 Please refine your draft based on this feedback. \
                 Respond in JSON format with 'draft', 'response', and 'status' fields.",
                task, feedback
            )
        }
    }

    /// User prompt for the Challenger reviewing the current draft
    pub fn challenger_prompt(task: &str, draft: &str) -> String {
        format!(
            "Original request: {}\n\n\
             Current draft:\n{}\n\n\
             Please provide constructive criticism and suggestions for improvement. \
             Respond in JSON format with 'critique', 'questions', and 'suggestions' fields.",
            task, draft
        )
    }
}
