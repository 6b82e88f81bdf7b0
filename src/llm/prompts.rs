//! Prompt templates for an external ATS (Applicant Tracking System) scorer

use serde::{Deserialize, Serialize};

/// System and user templates for the ATS scoring request
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub system: String,
    pub ats_analysis: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            system: ATS_SYSTEM_PROMPT.to_string(),
            ats_analysis: ATS_ANALYSIS_TEMPLATE.to_string(),
        }
    }
}

/// Parameters for prompt template substitution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptParams {
    pub resume_content: String,
    pub job_content: String,
}

/// A rendered chat prompt, ready to hand to whichever client the caller uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedPrompt {
    pub system: String,
    pub user: String,
}

impl PromptTemplates {
    pub fn render_ats_analysis(&self, params: &PromptParams) -> RenderedPrompt {
        log::debug!(
            "Rendering ATS prompt: resume {} chars, job {} chars",
            params.resume_content.len(),
            params.job_content.len()
        );

        let user = self
            .ats_analysis
            .replace("{resume}", &params.resume_content)
            .replace("{job}", &params.job_content);

        RenderedPrompt {
            system: self.system.clone(),
            user,
        }
    }
}

const ATS_SYSTEM_PROMPT: &str = "You are an expert ATS (Applicant Tracking System) resume analyzer. \
Provide a numerical score out of 100 and specific feedback.";

const ATS_ANALYSIS_TEMPLATE: &str = r#"Analyze this resume against the job description and provide:
1. ATS Score (0-100)
2. Key matching keywords found (from job description to Resume only matched keywords)
3. Missing important keywords in resume
4. Brief improvement suggestions

Resume:
{resume}

Job Description:
{job}

Format your response as:
Score: [number]/100
Matches: [keywords]
Missing: [keywords]
Suggestions: [brief tips]"#;
