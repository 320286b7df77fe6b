pub const ANALYSIS_PROMPT: &str = r#"You are an expert AI Resume Analyzer and Recruiter.

Task:
1. Analyze the provided resume document.
2. Compare it strictly against the provided Job Description text.
3. Extract key skills, experience, and keywords.
4. Evaluate the match percentage and resume quality.
5. Provide actionable feedback.

Job Description:"#;

/// The full instruction sent to the model: the fixed task description with
/// the job description appended verbatim, neither sanitized nor length-capped.
pub fn analysis_prompt(job_description: &str) -> String {
    format!("{}\n{}", ANALYSIS_PROMPT, job_description)
}
