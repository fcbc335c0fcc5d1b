//! Conduct Interview use case
//!
//! Dispatches one interview turn. The "state machine" is a pure function of
//! `(action, payload)`: nothing is stored between requests, so any worker
//! can serve any turn and a conversation survives restarts.
//!
//! | Action | Provider path | Degraded path |
//! |--------|---------------|---------------|
//! | `start` | question prompt | [`FallbackSynthesizer::question`] |
//! | `respond` | follow-up prompt | [`FallbackSynthesizer::followup`] |
//! | `end` | summary prompt | [`SummaryPayload::neutral`] |
//!
//! The heuristic scorer runs on every `end` regardless of the provider.

use crate::ports::llm_gateway::LlmGateway;
use crate::ports::session_id::SessionIdGenerator;
use crate::use_cases::generate_text::GenerationClient;
use interview_domain::{
    EndAction, FallbackSynthesizer, InterviewContext, InterviewPromptTemplate, RespondAction,
    SessionOutcome, StartAction, SummaryPayload, Turn, strip_quotes, try_parse,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Input for the ConductInterview use case
#[derive(Debug, Clone)]
pub struct InterviewRequest {
    pub context: InterviewContext,
    pub turn: Turn,
}

impl InterviewRequest {
    pub fn new(context: InterviewContext, turn: Turn) -> Self {
        Self { context, turn }
    }
}

/// Reply to `start` and `respond`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReply {
    pub session_id: String,
    pub message: String,
    /// Set when the question came from the fallback templates
    pub fallback: bool,
}

/// Reply to `end`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    /// Set when the neutral summary replaced the provider's
    pub fallback: bool,
}

/// Output of the ConductInterview use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnResponse {
    Question(QuestionReply),
    Report(SessionReport),
}

impl TurnResponse {
    pub fn is_fallback(&self) -> bool {
        match self {
            TurnResponse::Question(reply) => reply.fallback,
            TurnResponse::Report(report) => report.fallback,
        }
    }
}

/// Use case for dispatching interview turns
pub struct ConductInterviewUseCase<G: LlmGateway + 'static> {
    client: GenerationClient<G>,
    session_ids: Arc<dyn SessionIdGenerator>,
}

impl<G: LlmGateway + 'static> ConductInterviewUseCase<G> {
    pub fn new(client: GenerationClient<G>, session_ids: Arc<dyn SessionIdGenerator>) -> Self {
        Self {
            client,
            session_ids,
        }
    }

    pub fn client(&self) -> &GenerationClient<G> {
        &self.client
    }

    /// Execute one turn.
    ///
    /// Never fails: provider trouble downgrades to the deterministic
    /// substitutes and is reported through the `fallback` flag.
    pub async fn execute(&self, request: InterviewRequest) -> TurnResponse {
        let InterviewRequest { context, turn } = request;
        info!(
            "Handling '{}' turn (role: {}, framework: {})",
            turn.action(),
            context.role(),
            context.framework().unwrap_or("-")
        );

        match turn {
            Turn::Start(start) => TurnResponse::Question(self.start(&context, &start).await),
            Turn::Respond(respond) => {
                TurnResponse::Question(self.respond(&context, &respond).await)
            }
            Turn::End(end) => TurnResponse::Report(self.end(&context, &end).await),
        }
    }

    /// `start`: opening question
    async fn start(&self, context: &InterviewContext, start: &StartAction) -> QuestionReply {
        let prompt = InterviewPromptTemplate::question_prompt(context, &start.level, start.focus());
        let generated = self.generate_question(&prompt).await;

        self.question_reply(generated, || {
            FallbackSynthesizer::question(context, start.focus())
        })
    }

    /// `respond`: next question from the previous exchange
    async fn respond(&self, context: &InterviewContext, respond: &RespondAction) -> QuestionReply {
        let prompt = InterviewPromptTemplate::followup_prompt(
            context,
            &respond.level,
            respond.focus(),
            &respond.previous_question,
            &respond.answer,
        );
        let generated = self.generate_question(&prompt).await;

        self.question_reply(generated, || {
            FallbackSynthesizer::followup(context, respond.focus())
        })
    }

    /// `end`: merge the qualitative summary with the heuristic scores
    async fn end(&self, context: &InterviewContext, end: &EndAction) -> SessionReport {
        let (feedback, fallback) = self.generate_summary(context, end).await;
        let outcome = SessionOutcome::assemble(feedback, end);

        info!(
            "Session scored {}/10 over {} answered question(s)",
            outcome.score,
            outcome.question_analysis.len()
        );

        SessionReport { outcome, fallback }
    }

    /// Provider question with quotes stripped; `None` when unusable
    async fn generate_question(&self, prompt: &str) -> Option<String> {
        match self.client.generate(prompt).await {
            Ok(text) => {
                let question = strip_quotes(&text);
                if question.is_empty() {
                    warn!("Provider returned a blank question");
                    None
                } else {
                    Some(question)
                }
            }
            Err(e) => {
                warn!("Question generation failed: {}", e);
                None
            }
        }
    }

    fn question_reply(
        &self,
        generated: Option<String>,
        fallback: impl FnOnce() -> String,
    ) -> QuestionReply {
        let session_id = self.session_ids.next_id();
        match generated {
            Some(message) => QuestionReply {
                session_id,
                message,
                fallback: false,
            },
            None => {
                info!("Serving fallback question");
                QuestionReply {
                    session_id,
                    message: fallback(),
                    fallback: true,
                }
            }
        }
    }

    /// Summary payload, and whether the neutral payload was substituted
    async fn generate_summary(
        &self,
        context: &InterviewContext,
        end: &EndAction,
    ) -> (SummaryPayload, bool) {
        let prompt = InterviewPromptTemplate::summary_prompt(context, &end.qa_pairs);

        match self.client.generate(&prompt).await {
            Ok(text) => {
                let outcome = try_parse(&text);
                debug!("Summary parse outcome: {:?}", outcome);
                let (payload, neutral) = outcome.into_payload();
                if neutral {
                    warn!("Provider summary was unusable, using neutral summary");
                }
                (payload, neutral)
            }
            Err(e) => {
                warn!("Summary generation failed, using neutral summary: {}", e);
                (SummaryPayload::neutral(), true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryPolicy;
    use crate::ports::llm_gateway::GatewayError;
    use crate::ports::session_id::FixedSessionId;
    use async_trait::async_trait;
    use interview_domain::{AnswerFeedback, Model, QaPair, Role};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Gateway that replays scripted results and captures prompts
    struct MockGateway {
        results: Mutex<VecDeque<Result<String, GatewayError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl MockGateway {
        fn new(results: Vec<Result<String, GatewayError>>) -> Arc<Self> {
            Arc::new(Self {
                results: Mutex::new(VecDeque::from(results)),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn replying(text: &str) -> Arc<Self> {
            Self::new(vec![Ok(text.to_string())])
        }

        fn down() -> Arc<Self> {
            Self::new(vec![])
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn call(&self, _model: &Model, prompt: &str) -> Result<String, GatewayError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::ConnectionError("down".to_string())))
        }
    }

    fn use_case(gateway: Arc<MockGateway>) -> ConductInterviewUseCase<MockGateway> {
        let policy = RetryPolicy::from_settings(3, 500, None);
        let client = GenerationClient::new(gateway, vec![Model::Gemini20Flash]).with_policy(policy);
        ConductInterviewUseCase::new(client, Arc::new(FixedSessionId("session-1".to_string())))
    }

    fn frontend() -> InterviewContext {
        InterviewContext::new(Role::Frontend).with_framework("React")
    }

    fn start(focus: Option<&str>) -> InterviewRequest {
        InterviewRequest::new(frontend(), Turn::Start(StartAction::new(Some("senior"), focus)))
    }

    fn expect_question(response: TurnResponse) -> QuestionReply {
        match response {
            TurnResponse::Question(reply) => reply,
            other => panic!("expected question, got {other:?}"),
        }
    }

    fn expect_report(response: TurnResponse) -> SessionReport {
        match response {
            TurnResponse::Report(report) => report,
            other => panic!("expected report, got {other:?}"),
        }
    }

    // ==================== start / respond ====================

    #[tokio::test(start_paused = true)]
    async fn test_start_returns_generated_question_without_quotes() {
        let gateway = MockGateway::replying("\"How does React reconcile the virtual DOM?\"");
        let reply = expect_question(use_case(gateway.clone()).execute(start(None)).await);

        assert_eq!(reply.message, "How does React reconcile the virtual DOM?");
        assert_eq!(reply.session_id, "session-1");
        assert!(!reply.fallback);
        assert!(gateway.prompts()[0].contains("React"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_falls_back_when_provider_down() {
        let gateway = MockGateway::down();
        let reply = expect_question(
            use_case(gateway.clone())
                .execute(start(Some("performance")))
                .await,
        );

        assert!(reply.fallback);
        assert!(reply.message.contains("performance"));
        assert!(reply.message.contains("React"));
        assert_eq!(reply.session_id, "session-1");
        // Full retry matrix was used before falling back
        assert_eq!(gateway.prompts().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_generation_falls_back() {
        let gateway = MockGateway::replying("  \"\"  ");
        let reply = expect_question(use_case(gateway).execute(start(None)).await);
        assert!(reply.fallback);
        assert!(!reply.message.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_respond_embeds_previous_exchange() {
        let gateway = MockGateway::replying("What about memoization?");
        let request = InterviewRequest::new(
            frontend(),
            Turn::Respond(RespondAction::new(
                "How do you avoid re-renders?",
                "I use React.memo",
                None,
                Some("hooks"),
            )),
        );

        let reply = expect_question(use_case(gateway.clone()).execute(request).await);

        assert_eq!(reply.message, "What about memoization?");
        let prompt = &gateway.prompts()[0];
        assert!(prompt.contains("How do you avoid re-renders?"));
        assert!(prompt.contains("I use React.memo"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_respond_falls_back_with_focus() {
        let request = InterviewRequest::new(
            frontend(),
            Turn::Respond(RespondAction::new("Q", "A", None, Some("accessibility"))),
        );
        let response = use_case(MockGateway::down()).execute(request).await;
        assert!(response.is_fallback());
        let reply = expect_question(response);
        assert!(reply.message.contains("accessibility"));
    }

    // ==================== end ====================

    #[tokio::test(start_paused = true)]
    async fn test_end_with_no_pairs_still_reports() {
        let request = InterviewRequest::new(frontend(), Turn::End(EndAction::default()));
        let report = expect_report(use_case(MockGateway::down()).execute(request).await);

        assert!(report.fallback);
        assert_eq!(report.outcome.score, 7);
        assert!(report.outcome.question_analysis.is_empty());
        assert_eq!(report.outcome.feedback, SummaryPayload::neutral());
    }

    #[tokio::test(start_paused = true)]
    async fn test_end_merges_summary_and_heuristics() {
        let gateway = MockGateway::replying(
            r#"Here you go: {"summary": "Solid", "strengths": ["Clear"], "improvements": [], "categories": {"javascript": 8}}"#,
        );
        let long_answer = "a".repeat(850);
        let request = InterviewRequest::new(
            frontend(),
            Turn::End(EndAction::new(vec![
                QaPair::new("Q1", long_answer),
                QaPair::new("Q2", ""),
            ])),
        );

        let report = expect_report(use_case(gateway.clone()).execute(request).await);

        assert!(!report.fallback);
        assert_eq!(report.outcome.feedback.summary, "Solid");
        assert_eq!(report.outcome.question_analysis.len(), 2);
        assert_eq!(
            report.outcome.question_analysis[0].feedback,
            AnswerFeedback::Strong
        );
        // avg = round((8 + 0) / 2) = 4, coverage 0.5 -> round(4 * 0.8) = 3
        assert_eq!(report.outcome.score, 3);
        assert!(gateway.prompts()[0].contains("Q1"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_end_malformed_summary_uses_neutral_payload() {
        let gateway = MockGateway::replying("I'd rather not produce JSON today.");
        let request = InterviewRequest::new(
            InterviewContext::new(Role::Backend),
            Turn::End(EndAction::new(vec![QaPair::new("Q1", "An answer")])),
        );

        let report = expect_report(use_case(gateway).execute(request).await);

        assert!(report.fallback);
        assert_eq!(report.outcome.feedback, SummaryPayload::neutral());
        assert_eq!(report.outcome.question_analysis.len(), 1);
    }
}
