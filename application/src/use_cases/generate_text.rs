//! Retrying generation client
//!
//! Wraps the [`LlmGateway`] port with the model × attempt retry matrix. The
//! client knows nothing about interviews: it turns a prompt into text or a
//! [`GenerationFailure`].

use crate::config::RetryPolicy;
use crate::ports::generation_notifier::{GenerationNotifier, NoProgress};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use interview_domain::{GenerationAttempt, Model};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Raised only after the full retry matrix is exhausted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationFailure {
    #[error("No candidate models configured")]
    NoModels,

    #[error("All {calls} provider calls failed; last error: {last_error}")]
    Exhausted {
        calls: usize,
        last_error: GatewayError,
    },
}

/// Provider client that iterates candidate models with exponential backoff.
///
/// Within a round, models are tried sequentially in order; the first success
/// short-circuits everything. Backoff happens only between rounds.
pub struct GenerationClient<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    models: Vec<Model>,
    policy: RetryPolicy,
    notifier: Arc<dyn GenerationNotifier>,
}

impl<G: LlmGateway + 'static> GenerationClient<G> {
    pub fn new(gateway: Arc<G>, models: Vec<Model>) -> Self {
        Self {
            gateway,
            models,
            policy: RetryPolicy::default(),
            notifier: Arc::new(NoProgress),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn GenerationNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Generate text for `prompt`.
    ///
    /// Performs at most `max_attempts × models.len()` provider calls.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationFailure> {
        if self.models.is_empty() {
            return Err(GenerationFailure::NoModels);
        }

        let max_attempts = self.policy.max_attempts.max(1);
        let mut calls = 0usize;
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            for model in &self.models {
                calls += 1;
                match self.call_once(model, prompt).await {
                    Ok(text) => {
                        debug!("Model {} succeeded on attempt {}", model, attempt);
                        self.notifier
                            .on_attempt(&GenerationAttempt::succeeded(model.clone(), attempt));
                        return Ok(text);
                    }
                    Err(e) => {
                        warn!(
                            "Model {} failed on attempt {}/{} (transient: {}): {}",
                            model,
                            attempt,
                            max_attempts,
                            e.is_transient(),
                            e
                        );
                        self.notifier.on_attempt(&GenerationAttempt::failed(
                            model.clone(),
                            attempt,
                            e.to_string(),
                        ));
                        last_error = Some(e);
                    }
                }
            }

            if attempt < max_attempts {
                let delay = self.policy.backoff_after(attempt);
                debug!("Backing off {:?} before attempt {}", delay, attempt + 1);
                tokio::time::sleep(delay).await;
            }
        }

        let last_error =
            last_error.unwrap_or_else(|| GatewayError::Other("no provider call made".to_string()));
        warn!("All {} provider calls failed: {}", calls, last_error);
        self.notifier.on_exhausted(calls, &last_error.to_string());

        Err(GenerationFailure::Exhausted { calls, last_error })
    }

    /// One provider call, bounded by the per-call timeout when configured
    async fn call_once(&self, model: &Model, prompt: &str) -> Result<String, GatewayError> {
        let call = self.gateway.call(model, prompt);
        match self.policy.call_timeout {
            Some(timeout) => tokio::time::timeout(timeout, call)
                .await
                .unwrap_or(Err(GatewayError::Timeout)),
            None => call.await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::time::Instant;

    // ==================== Test Mocks ====================

    /// Gateway that replays scripted results and records every call
    struct ScriptedGateway {
        results: Mutex<VecDeque<Result<String, GatewayError>>>,
        calls: Mutex<Vec<(Model, Instant)>>,
    }

    impl ScriptedGateway {
        fn new(results: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                results: Mutex::new(VecDeque::from(results)),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn always_failing() -> Self {
            Self::new(vec![])
        }

        fn calls(&self) -> Vec<(Model, Instant)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        async fn call(&self, model: &Model, _prompt: &str) -> Result<String, GatewayError> {
            self.calls
                .lock()
                .unwrap()
                .push((model.clone(), Instant::now()));
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::HttpStatus {
                    status: 503,
                    message: "unavailable".to_string(),
                }))
        }
    }

    /// Gateway that never answers
    struct HangingGateway;

    #[async_trait]
    impl LlmGateway for HangingGateway {
        async fn call(&self, _model: &Model, _prompt: &str) -> Result<String, GatewayError> {
            std::future::pending::<Result<String, GatewayError>>().await
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        attempts: Mutex<Vec<GenerationAttempt>>,
        exhausted: Mutex<Option<usize>>,
    }

    impl GenerationNotifier for RecordingNotifier {
        fn on_attempt(&self, attempt: &GenerationAttempt) {
            self.attempts.lock().unwrap().push(attempt.clone());
        }

        fn on_exhausted(&self, calls: usize, _last_error: &str) {
            *self.exhausted.lock().unwrap() = Some(calls);
        }
    }

    fn two_models() -> Vec<Model> {
        vec![Model::Gemini20Flash, Model::Gemini15Flash]
    }

    // ==================== Tests ====================

    #[tokio::test(start_paused = true)]
    async fn test_first_success_short_circuits() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok("question".to_string())]));
        let client = GenerationClient::new(Arc::clone(&gateway), two_models());

        assert_eq!(client.generate("p").await.unwrap(), "question");
        assert_eq!(gateway.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_model_tried_within_same_round() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Err(GatewayError::RateLimited("quota".to_string())),
            Ok("from second".to_string()),
        ]));
        let client = GenerationClient::new(Arc::clone(&gateway), two_models());
        let start = Instant::now();

        assert_eq!(client.generate("p").await.unwrap(), "from second");

        let calls = gateway.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].0, Model::Gemini15Flash);
        // No backoff inside a round
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_makes_attempts_times_models_calls() {
        let gateway = Arc::new(ScriptedGateway::always_failing());
        let notifier = Arc::new(RecordingNotifier::default());
        let client = GenerationClient::new(Arc::clone(&gateway), two_models())
            .with_notifier(notifier.clone());

        let err = client.generate("p").await.unwrap_err();

        match err {
            GenerationFailure::Exhausted { calls, last_error } => {
                assert_eq!(calls, 6);
                assert!(matches!(last_error, GatewayError::HttpStatus { status: 503, .. }));
            }
            other => panic!("unexpected failure: {other:?}"),
        }
        assert_eq!(gateway.calls().len(), 6);
        assert_eq!(*notifier.exhausted.lock().unwrap(), Some(6));

        let attempts = notifier.attempts.lock().unwrap();
        let rounds: Vec<u32> = attempts.iter().map(|a| a.attempt).collect();
        assert_eq!(rounds, vec![1, 1, 2, 2, 3, 3]);
        assert!(attempts.iter().all(|a| !a.is_success()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_only_between_rounds() {
        let gateway = Arc::new(ScriptedGateway::always_failing());
        let client = GenerationClient::new(Arc::clone(&gateway), two_models());
        let start = Instant::now();

        let _ = client.generate("p").await;

        let offsets: Vec<Duration> = gateway
            .calls()
            .iter()
            .map(|(_, at)| at.duration_since(start))
            .collect();
        let ms = Duration::from_millis;
        assert_eq!(
            offsets,
            vec![ms(0), ms(0), ms(500), ms(500), ms(1500), ms(1500)]
        );
        // No sleep after the final round
        assert_eq!(start.elapsed(), ms(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_model_roster() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Err(GatewayError::Timeout),
            Err(GatewayError::EmptyResponse),
            Ok("third time".to_string()),
        ]));
        let client = GenerationClient::new(Arc::clone(&gateway), vec![Model::Gpt4oMini]);

        assert_eq!(client.generate("p").await.unwrap(), "third time");
        assert_eq!(gateway.calls().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_models() {
        let gateway = Arc::new(ScriptedGateway::always_failing());
        let client = GenerationClient::new(Arc::clone(&gateway), vec![]);

        assert_eq!(
            client.generate("p").await.unwrap_err(),
            GenerationFailure::NoModels
        );
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_timeout_counts_as_failure() {
        let policy = RetryPolicy::from_settings(2, 100, Some(1));
        let client = GenerationClient::new(Arc::new(HangingGateway), vec![Model::Gemini15Pro])
            .with_policy(policy);
        let start = Instant::now();

        let err = client.generate("p").await.unwrap_err();

        assert_eq!(
            err,
            GenerationFailure::Exhausted {
                calls: 2,
                last_error: GatewayError::Timeout
            }
        );
        // 1s timeout + 100ms backoff + 1s timeout
        assert_eq!(start.elapsed(), Duration::from_millis(2100));
    }
}
