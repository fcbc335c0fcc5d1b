//! Interview context (role, target framework, job description)
//!
//! The context is the conditioning preamble shared by every prompt of a
//! turn. It is immutable once built.

use crate::core::string::{non_blank, truncate_chars};
use serde::{Deserialize, Serialize};

/// Maximum number of job-description characters embedded in prompts
pub const JOB_DESCRIPTION_MAX_CHARS: usize = 1200;

/// Role the candidate is interviewing for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Frontend,
    Product,
    Business,
    Qa,
    Hr,
    Backend,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Frontend,
        Role::Product,
        Role::Business,
        Role::Qa,
        Role::Hr,
        Role::Backend,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Frontend => "frontend",
            Role::Product => "product",
            Role::Business => "business",
            Role::Qa => "qa",
            Role::Hr => "hr",
            Role::Backend => "backend",
        }
    }

    /// Human-readable position title used in prompts
    pub fn title(&self) -> &'static str {
        match self {
            Role::Frontend => "Frontend Developer",
            Role::Product => "Product Manager",
            Role::Business => "Business Analyst",
            Role::Qa => "QA Engineer",
            Role::Hr => "HR Specialist",
            Role::Backend => "Backend Developer",
        }
    }

    /// Parse a caller-supplied role, falling back to the default role.
    ///
    /// Matching is case-insensitive; missing or unknown values map to
    /// [`Role::Frontend`].
    pub fn parse_lenient(value: Option<&str>) -> Role {
        value
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown role '{}'", s))
    }
}

/// Conditioning context for every prompt of a turn
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InterviewContext {
    role: Role,
    framework: Option<String>,
    job_description_excerpt: Option<String>,
}

impl InterviewContext {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    /// Build the context from raw caller-supplied fields.
    ///
    /// Blank strings are treated as absent and the job description is cut
    /// to [`JOB_DESCRIPTION_MAX_CHARS`] characters.
    pub fn from_request(
        role: Option<&str>,
        framework: Option<&str>,
        job_description: Option<&str>,
    ) -> Self {
        Self {
            role: Role::parse_lenient(role),
            framework: non_blank(framework).map(str::to_string),
            job_description_excerpt: non_blank(job_description)
                .map(|jd| truncate_chars(jd, JOB_DESCRIPTION_MAX_CHARS).to_string()),
        }
    }

    pub fn with_framework(mut self, framework: impl Into<String>) -> Self {
        self.framework = Some(framework.into());
        self
    }

    pub fn with_job_description(mut self, job_description: &str) -> Self {
        self.job_description_excerpt =
            Some(truncate_chars(job_description.trim(), JOB_DESCRIPTION_MAX_CHARS).to_string());
        self
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn framework(&self) -> Option<&str> {
        self.framework.as_deref()
    }

    pub fn job_description_excerpt(&self) -> Option<&str> {
        self.job_description_excerpt.as_deref()
    }

    pub fn has_job_description(&self) -> bool {
        self.job_description_excerpt.is_some()
    }

    /// What the interview is "about": the framework when given, the role otherwise
    pub fn subject(&self) -> &str {
        self.framework().unwrap_or_else(|| self.role.title())
    }

    /// Short preamble prepended to every prompt
    pub fn preamble(&self) -> String {
        let mut preamble = format!(
            "You are an experienced technical interviewer hiring for a {} position.",
            self.role.title()
        );

        if let Some(framework) = self.framework() {
            preamble.push_str(&format!("\nTarget framework or stack: {}.", framework));
        }

        if let Some(jd) = self.job_description_excerpt() {
            preamble.push_str(&format!(
                "\nJob description (excerpt):\n\"\"\"\n{}\n\"\"\"",
                jd
            ));
        }

        preamble
    }
}
