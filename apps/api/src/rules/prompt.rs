//! Prompt templates for the external rewriting step.
//!
//! The analysis core never calls a model; these builders only assemble the
//! instruction text from the cached rule files and a processed JD.

use crate::jd::ProcessedJd;
use crate::rules::cache::{RuleCache, RuleError, RuleFile};

/// Resume tailoring prompt.
/// Replace: {rules}, {job_title}, {hard_skills}, {soft_skills}, {jd_text},
///          {resume_text}, {feedback}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"You are tailoring a resume to a specific job description.

WRITING RULES (follow every rule):
{rules}

TARGET ROLE: {job_title}

REQUIRED HARD SKILLS: {hard_skills}
SOFT SKILLS: {soft_skills}

Only surface skills, numbers and responsibilities that already appear in the original resume.
Do NOT invent metrics, inflate the candidate's role, or add headings outside the standard set
(Summary, Skills, Experience, Projects, Education, Certifications).

USER FEEDBACK TO APPLY:
{feedback}

JOB DESCRIPTION (relevant sections):
{jd_text}

ORIGINAL RESUME:
{resume_text}"#;

/// Cover letter prompt.
/// Replace: {rules}, {job_title}, {hard_skills}, {soft_skills}, {jd_text},
///          {resume_text}, {feedback}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"You are writing a cover letter for the role below.

WRITING RULES (follow every rule):
{rules}

TARGET ROLE: {job_title}

Reinforce these skills where the resume supports them: {hard_skills}
Show these qualities through examples, not adjectives: {soft_skills}

Write 3 to 5 paragraphs and 250 to 400 words. Address the employer's stated needs directly.
Do not repeat resume bullets verbatim and avoid stock phrases.

USER FEEDBACK TO APPLY:
{feedback}

JOB DESCRIPTION (relevant sections):
{jd_text}

CANDIDATE RESUME:
{resume_text}"#;

const NO_FEEDBACK: &str = "(none)";

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none listed)".to_string()
    } else {
        items.join(", ")
    }
}

fn format_feedback(feedback: &[String]) -> String {
    let lines: Vec<String> = feedback
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .map(|f| format!("- {f}"))
        .collect();
    if lines.is_empty() {
        NO_FEEDBACK.to_string()
    } else {
        lines.join("\n")
    }
}

fn fill(template: &str, rules: &str, jd: &ProcessedJd, resume_text: &str, feedback: &[String]) -> String {
    let jd_text = if jd.sections.full_relevant_text.trim().is_empty() {
        jd.cleaned_text.as_str()
    } else {
        jd.sections.full_relevant_text.as_str()
    };
    let job_title = if jd.job_title.is_empty() {
        "(not specified)"
    } else {
        jd.job_title.as_str()
    };

    template
        .replace("{rules}", rules.trim())
        .replace("{job_title}", job_title)
        .replace("{hard_skills}", &join_or_none(&jd.extracted_skills.hard))
        .replace("{soft_skills}", &join_or_none(&jd.extracted_skills.soft))
        .replace("{feedback}", &format_feedback(feedback))
        .replace("{jd_text}", jd_text)
        .replace("{resume_text}", resume_text.trim())
}

pub fn build_resume_prompt(
    rules: &RuleCache,
    jd: &ProcessedJd,
    resume_text: &str,
    feedback: &[String],
) -> Result<String, RuleError> {
    let rule_text = rules.get(RuleFile::Resume)?;
    Ok(fill(RESUME_PROMPT_TEMPLATE, &rule_text, jd, resume_text, feedback))
}

pub fn build_cover_letter_prompt(
    rules: &RuleCache,
    jd: &ProcessedJd,
    resume_text: &str,
    feedback: &[String],
) -> Result<String, RuleError> {
    let rule_text = rules.get(RuleFile::CoverLetter)?;
    Ok(fill(COVER_LETTER_PROMPT_TEMPLATE, &rule_text, jd, resume_text, feedback))
}
