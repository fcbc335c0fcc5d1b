//! Request and response bodies

use interview_application::{InterviewRequest, QuestionReply, SessionReport};
use interview_domain::{
    Action, DomainError, EndAction, InterviewContext, RespondAction, SessionOutcome, StartAction,
    Turn,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of an interview turn
///
/// Every field except `action` is optional; what each action reads is
/// documented on [`InterviewRequestDto::into_request`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRequestDto {
    pub action: String,
    pub role: Option<String>,
    pub framework: Option<String>,
    #[serde(alias = "jobDescriptionExcerpt")]
    pub job_description: Option<String>,
    pub level: Option<String>,
    pub focus: Option<String>,
    pub previous_question: Option<String>,
    pub answer: Option<String>,
    /// Kept raw so malformed entries can be skipped rather than rejected
    pub qa_pairs: Option<Vec<Value>>,
}

impl InterviewRequestDto {
    /// Convert to the use-case input.
    ///
    /// - `start` reads `level`, `focus`
    /// - `respond` reads `previousQuestion`, `answer`, `level`, `focus`
    /// - `end` reads `qaPairs`
    ///
    /// All actions read `role`, `framework` and `jobDescription`.
    pub fn into_request(self) -> Result<InterviewRequest, DomainError> {
        let action: Action = self.action.parse()?;
        let context = InterviewContext::from_request(
            self.role.as_deref(),
            self.framework.as_deref(),
            self.job_description.as_deref(),
        );

        let turn = match action {
            Action::Start => Turn::Start(StartAction::new(
                self.level.as_deref(),
                self.focus.as_deref(),
            )),
            Action::Respond => Turn::Respond(RespondAction::new(
                self.previous_question.unwrap_or_default(),
                self.answer.unwrap_or_default(),
                self.level.as_deref(),
                self.focus.as_deref(),
            )),
            Action::End => Turn::End(EndAction::from_raw_pairs(
                self.qa_pairs.as_deref().unwrap_or_default(),
            )),
        };

        Ok(InterviewRequest::new(context, turn))
    }
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// `start` / `respond` response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponseDto {
    pub session_id: String,
    pub message: String,
    #[serde(skip_serializing_if = "is_false")]
    pub fallback: bool,
}

impl From<QuestionReply> for QuestionResponseDto {
    fn from(reply: QuestionReply) -> Self {
        Self {
            session_id: reply.session_id,
            message: reply.message,
            fallback: reply.fallback,
        }
    }
}

/// `end` response
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponseDto {
    #[serde(flatten)]
    pub outcome: SessionOutcome,
    #[serde(skip_serializing_if = "is_false")]
    pub fallback: bool,
}

impl From<SessionReport> for ReportResponseDto {
    fn from(report: SessionReport) -> Self {
        Self {
            outcome: report.outcome,
            fallback: report.fallback,
        }
    }
}
