//! Run Debate use case
//!
//! Orchestrates the Proposer/Challenger critique loop.
//!
//! # Flow
//!
//! ```text
//! Start
//!   └─ for each iteration (1..=max_iterations)
//!        ├─ IterationStart
//!        ├─ Proposer: prompt → agent → extract → fold → ProposerTurn | Error
//!        │     └─ READY or ERROR halts the loop
//!        └─ Challenger: prompt → agent → extract → fold → ChallengerTurn | Error
//!              └─ ERROR halts the loop
//! Complete(DebateResult)
//! ```
//!
//! Agent and extraction failures never escape as errors: they become an
//! ERROR-status turn in the transcript and the run still completes. The only
//! error this use case returns is [`RunDebateError::Cancelled`].

use crate::ports::agent::{Agent, AgentError};
use crate::ports::event_sink::{EventSink, NoopSink, SinkError};
use crossfire_domain::{
    Critique, DebateEvent, DebateRequest, DebateResult, DebateSession, DebateStatus,
    ExtractionError, PromptBuilder, Proposal, Role, TurnOutcome, extract,
};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that end a debate run without a result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunDebateError {
    #[error("Debate cancelled")]
    Cancelled,
}

/// Failure of a single agent exchange, recorded in the transcript
#[derive(Error, Debug)]
pub enum TurnError {
    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// An agent bound to one debate role together with its system prompt
pub struct DebateParticipant {
    agent: Arc<dyn Agent>,
    system_prompt: String,
}

impl DebateParticipant {
    pub fn new(agent: Arc<dyn Agent>, system_prompt: impl Into<String>) -> Self {
        Self {
            agent,
            system_prompt: system_prompt.into(),
        }
    }

    pub fn label(&self) -> &str {
        self.agent.label()
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Call the agent, abandoning the call as soon as `token` is cancelled.
    async fn ask(
        &self,
        user_prompt: &str,
        token: &CancellationToken,
    ) -> Result<Result<String, AgentError>, RunDebateError> {
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(RunDebateError::Cancelled),
            reply = self.agent.complete(&self.system_prompt, user_prompt) => Ok(reply),
        }
    }
}

/// Input for the RunDebate use case
#[derive(Debug, Clone)]
pub struct RunDebateInput {
    /// The task the debate works on
    pub prompt: String,
    /// Upper bound on Proposer/Challenger iterations (assumed already validated)
    pub max_iterations: usize,
    /// Observed at every turn boundary and during agent calls
    pub cancellation: Option<CancellationToken>,
}

impl RunDebateInput {
    pub fn new(prompt: impl Into<String>, max_iterations: usize) -> Self {
        Self {
            prompt: prompt.into(),
            max_iterations,
            cancellation: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}

impl From<DebateRequest> for RunDebateInput {
    fn from(request: DebateRequest) -> Self {
        Self::new(request.prompt, request.max_iterations)
    }
}

/// Use case for running a debate
///
/// Holds no per-run state, so one instance can serve any number of
/// concurrent runs.
#[derive(Clone)]
pub struct RunDebateUseCase {
    proposer: Arc<DebateParticipant>,
    challenger: Arc<DebateParticipant>,
}

impl RunDebateUseCase {
    pub fn new(proposer: DebateParticipant, challenger: DebateParticipant) -> Self {
        Self {
            proposer: Arc::new(proposer),
            challenger: Arc::new(challenger),
        }
    }

    pub fn proposer(&self) -> &DebateParticipant {
        &self.proposer
    }

    pub fn challenger(&self) -> &DebateParticipant {
        &self.challenger
    }

    fn participant(&self, role: Role) -> &DebateParticipant {
        match role {
            Role::Proposer => &self.proposer,
            Role::Challenger => &self.challenger,
        }
    }

    /// Execute the use case without progress events
    pub async fn execute(&self, input: RunDebateInput) -> Result<DebateResult, RunDebateError> {
        self.execute_with_sink(input, &NoopSink).await
    }

    /// Execute the use case, reporting progress to `sink`
    ///
    /// If the sink fails, the loop stops where it is and no further events
    /// are emitted. The failure is recorded as an ERROR turn for the role
    /// whose event was refused, and the result is returned as usual.
    pub async fn execute_with_sink(
        &self,
        input: RunDebateInput,
        sink: &dyn EventSink,
    ) -> Result<DebateResult, RunDebateError> {
        let token = input.cancellation.unwrap_or_default();
        let mut session = DebateSession::new(input.prompt, input.max_iterations);
        let max_iterations = session.max_iterations();

        info!(
            proposer = self.proposer.label(),
            challenger = self.challenger.label(),
            max_iterations,
            "Starting debate"
        );

        if let Err(e) = sink.accept(DebateEvent::Start).await {
            return Ok(abandon(session, Role::Proposer, 1, self.proposer.label(), e));
        }

        for index in 0..max_iterations {
            let iteration = index + 1;

            if token.is_cancelled() {
                info!(iteration, "Debate cancelled before iteration");
                return Err(RunDebateError::Cancelled);
            }

            info!("=== Iteration {}/{} ===", iteration, max_iterations);
            if let Err(e) = sink.accept(DebateEvent::IterationStart { iteration }).await {
                let label = self.proposer.label();
                return Ok(abandon(session, Role::Proposer, iteration, label, e));
            }

            // Proposer
            let outcome = self.proposer_turn(&session, index, &token).await?;
            session = session.apply(outcome.clone());
            if let Err(e) = emit_turn(sink, &session, &outcome).await {
                let label = self.participant(outcome.role()).label();
                return Ok(abandon(session, outcome.role(), iteration, label, e));
            }
            if session.is_halted() {
                break;
            }

            if token.is_cancelled() {
                info!(iteration, "Debate cancelled before challenger turn");
                return Err(RunDebateError::Cancelled);
            }

            // Challenger
            let outcome = self.challenger_turn(&session, iteration, &token).await?;
            session = session.apply(outcome.clone());
            if let Err(e) = emit_turn(sink, &session, &outcome).await {
                let label = self.participant(outcome.role()).label();
                return Ok(abandon(session, outcome.role(), iteration, label, e));
            }
            if session.is_halted() {
                break;
            }
        }

        if session.status() == DebateStatus::Error {
            warn!("Debate halted after a failed turn");
        }

        let result = session.finish();
        info!(
            final_status = %result.final_status,
            total_iterations = result.total_iterations,
            sources = result.sources.len(),
            "Debate complete"
        );
        debug!("Final draft:\n{}", result.final_draft);

        if let Err(e) = sink.accept(DebateEvent::Complete(result.clone())).await {
            warn!(error = %e, "Event sink failed to accept completion");
        }

        Ok(result)
    }

    async fn proposer_turn(
        &self,
        session: &DebateSession,
        index: usize,
        token: &CancellationToken,
    ) -> Result<TurnOutcome, RunDebateError> {
        let iteration = index + 1;
        info!(iteration, "PROPOSER generating draft");

        let prompt =
            PromptBuilder::proposer_prompt(session.prompt(), session.pending_feedback(), index);
        let reply = self.proposer.ask(&prompt, token).await?;
        let agent_label = self.proposer.label().to_string();

        let outcome = match reply.map_err(TurnError::from).and_then(|raw| {
            debug!("PROPOSER raw response: {}", raw);
            parse_proposal(&raw)
        }) {
            Ok(proposal) => {
                info!(
                    iteration,
                    status = %proposal.status,
                    draft_len = proposal.draft.len(),
                    sources = proposal.sources.len(),
                    "PROPOSER responded"
                );
                TurnOutcome::Proposed {
                    iteration,
                    agent_label,
                    proposal,
                }
            }
            Err(e) => {
                warn!(iteration, error = %e, "PROPOSER turn failed");
                TurnOutcome::Failed {
                    role: Role::Proposer,
                    iteration,
                    agent_label,
                    reason: e.to_string(),
                }
            }
        };

        Ok(outcome)
    }

    async fn challenger_turn(
        &self,
        session: &DebateSession,
        iteration: usize,
        token: &CancellationToken,
    ) -> Result<TurnOutcome, RunDebateError> {
        info!(iteration, "CHALLENGER reviewing draft");

        let prompt = PromptBuilder::challenger_prompt(session.prompt(), session.current_draft());
        let reply = self.challenger.ask(&prompt, token).await?;
        let agent_label = self.challenger.label().to_string();

        let outcome = match reply.map_err(TurnError::from).and_then(|raw| {
            debug!("CHALLENGER raw response: {}", raw);
            parse_critique(&raw)
        }) {
            Ok(critique) => {
                info!(
                    iteration,
                    questions = critique.questions.len(),
                    suggestions = critique.suggestions.len(),
                    "CHALLENGER responded"
                );
                TurnOutcome::Critiqued {
                    iteration,
                    agent_label,
                    critique,
                }
            }
            Err(e) => {
                warn!(iteration, error = %e, "CHALLENGER turn failed");
                TurnOutcome::Failed {
                    role: Role::Challenger,
                    iteration,
                    agent_label,
                    reason: e.to_string(),
                }
            }
        };

        Ok(outcome)
    }
}

fn parse_proposal(raw: &str) -> Result<Proposal, TurnError> {
    let record = extract(raw)?;
    Ok(Proposal::from_record(&record)?)
}

fn parse_critique(raw: &str) -> Result<Critique, TurnError> {
    let record = extract(raw)?;
    Ok(Critique::from_record(&record)?)
}

/// Emit the event for the turn just folded into `session`.
async fn emit_turn(
    sink: &dyn EventSink,
    session: &DebateSession,
    outcome: &TurnOutcome,
) -> Result<(), SinkError> {
    let Some(turn) = session.last_turn().cloned() else {
        return Ok(());
    };

    let event = match outcome {
        TurnOutcome::Failed { reason, .. } => DebateEvent::Error {
            message: reason.clone(),
            turn: Some(turn),
        },
        TurnOutcome::Proposed { .. } => DebateEvent::ProposerTurn(turn),
        TurnOutcome::Critiqued { .. } => DebateEvent::ChallengerTurn(turn),
    };

    sink.accept(event).await
}

/// Record a refused event as an ERROR turn and close the session.
///
/// Nothing is emitted: the sink has already failed once.
fn abandon(
    session: DebateSession,
    role: Role,
    iteration: usize,
    agent_label: &str,
    error: SinkError,
) -> DebateResult {
    warn!(error = %error, role = %role, iteration, "Event sink failed, halting debate");
    if session.is_halted() {
        return session.finish();
    }
    session
        .apply(TurnOutcome::Failed {
            role,
            iteration,
            agent_label: agent_label.to_string(),
            reason: error.to_string(),
        })
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::event_sink::BufferingSink;
    use async_trait::async_trait;
    use crossfire_domain::FinalStatus;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    // === Mock implementations ===

    struct ScriptedAgent {
        label: String,
        replies: Mutex<VecDeque<Result<String, AgentError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedAgent {
        fn new(label: &str, replies: Vec<Result<String, AgentError>>) -> Arc<Self> {
            Arc::new(Self {
                label: label.to_string(),
                replies: Mutex::new(VecDeque::from(replies)),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn texts(label: &str, replies: &[&str]) -> Arc<Self> {
            Self::new(label, replies.iter().map(|r| Ok(r.to_string())).collect())
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }

        fn prompt(&self, index: usize) -> String {
            self.prompts.lock().unwrap()[index].clone()
        }
    }

    #[async_trait]
    impl Agent for ScriptedAgent {
        fn label(&self) -> &str {
            &self.label
        }

        async fn complete(&self, _system: &str, user_prompt: &str) -> Result<String, AgentError> {
            self.prompts.lock().unwrap().push(user_prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(AgentError::InvalidResponse("script exhausted".into())))
        }
    }

    /// Agent whose call never returns
    struct StalledAgent;

    #[async_trait]
    impl Agent for StalledAgent {
        fn label(&self) -> &str {
            "stalled"
        }

        async fn complete(&self, _system: &str, _user: &str) -> Result<String, AgentError> {
            std::future::pending().await
        }
    }

    /// Sink that accepts `remaining` events, then reports the consumer as gone
    struct FailingSink {
        inner: BufferingSink,
        remaining: Mutex<usize>,
    }

    impl FailingSink {
        fn after(remaining: usize) -> Self {
            Self {
                inner: BufferingSink::new(),
                remaining: Mutex::new(remaining),
            }
        }
    }

    #[async_trait]
    impl EventSink for FailingSink {
        async fn accept(&self, event: DebateEvent) -> Result<(), SinkError> {
            {
                let mut remaining = self.remaining.lock().unwrap();
                if *remaining == 0 {
                    return Err(SinkError::Closed);
                }
                *remaining -= 1;
            }
            self.inner.accept(event).await
        }
    }

    fn use_case(proposer: Arc<dyn Agent>, challenger: Arc<dyn Agent>) -> RunDebateUseCase {
        RunDebateUseCase::new(
            DebateParticipant::new(proposer, "proposer system"),
            DebateParticipant::new(challenger, "challenger system"),
        )
    }

    fn proposal(draft: &str, status: &str, response: &str) -> String {
        serde_json::json!({"draft": draft, "status": status, "response": response}).to_string()
    }

    fn critique(text: &str) -> String {
        serde_json::json!({"critique": text}).to_string()
    }

    fn event_names(events: &[DebateEvent]) -> Vec<&'static str> {
        events.iter().map(DebateEvent::name).collect()
    }

    // === Scenarios ===

    #[tokio::test]
    async fn test_ready_on_second_iteration() {
        let proposer = ScriptedAgent::texts(
            "proposer",
            &[
                &proposal("An old pond, a frog jumps in, the sound of water", "ONGOING", "v1"),
                &proposal("Old pond / frog leaps / splash", "READY", "v2"),
            ],
        );
        let challenger = ScriptedAgent::texts("challenger", &[&critique("too long")]);
        let sink = BufferingSink::new();

        let result = use_case(proposer.clone(), challenger.clone())
            .execute_with_sink(RunDebateInput::new("Write a haiku", 3), &sink)
            .await
            .unwrap();

        assert_eq!(result.transcript.len(), 3);
        assert_eq!(result.final_status, FinalStatus::Ready);
        assert_eq!(result.total_iterations, 1);
        assert_eq!(result.final_draft, "Old pond / frog leaps / splash");
        assert_eq!(result.transcript[2].content, "v2");
        assert_eq!(challenger.calls(), 1);

        assert_eq!(
            event_names(&sink.events()),
            vec![
                "start",
                "iteration_start",
                "proposer_turn",
                "challenger_turn",
                "iteration_start",
                "proposer_turn",
                "complete",
            ]
        );
    }

    #[tokio::test]
    async fn test_exhausts_iterations() {
        let ongoing = proposal("d", "ONGOING", "r");
        let proposer = ScriptedAgent::texts("proposer", &[&ongoing, &ongoing, &ongoing]);
        let challenger = ScriptedAgent::texts(
            "challenger",
            &[&critique("a"), &critique("b"), &critique("c")],
        );

        let result = use_case(proposer.clone(), challenger)
            .execute(RunDebateInput::new("Write a haiku", 3))
            .await
            .unwrap();

        assert_eq!(result.transcript.len(), 6);
        assert_eq!(result.final_status, FinalStatus::MaxIterations);
        assert_eq!(result.total_iterations, 3);
        assert_eq!(proposer.calls(), 3);
    }

    #[tokio::test]
    async fn test_unparsable_first_reply() {
        let proposer = ScriptedAgent::texts("proposer", &["I am not sure what you mean."]);
        let challenger = ScriptedAgent::texts("challenger", &[]);
        let sink = BufferingSink::new();

        let result = use_case(proposer, challenger.clone())
            .execute_with_sink(RunDebateInput::new("Write a haiku", 3), &sink)
            .await
            .unwrap();

        assert_eq!(result.transcript.len(), 1);
        assert_eq!(result.transcript[0].status, DebateStatus::Error);
        assert_eq!(result.transcript[0].role, Role::Proposer);
        assert!(
            result.transcript[0]
                .content
                .starts_with("Error processing response: malformed structured response")
        );
        assert_eq!(result.final_status, FinalStatus::MaxIterations);
        assert!(result.sources.is_empty());
        assert_eq!(result.total_iterations, 0);
        assert_eq!(challenger.calls(), 0);

        let events = sink.events();
        assert_eq!(
            event_names(&events),
            vec!["start", "iteration_start", "error", "complete"]
        );
        match &events[2] {
            DebateEvent::Error { turn: Some(turn), message } => {
                assert_eq!(turn.status, DebateStatus::Error);
                assert!(message.starts_with("malformed structured response"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ready_in_any_case_halts() {
        for status in ["ready", "READY", "Ready"] {
            let proposer = ScriptedAgent::texts("proposer", &[&proposal("d", status, "r")]);
            let challenger = ScriptedAgent::texts("challenger", &[]);

            let result = use_case(proposer, challenger.clone())
                .execute(RunDebateInput::new("p", 5))
                .await
                .unwrap();

            assert_eq!(result.final_status, FinalStatus::Ready, "status {}", status);
            assert_eq!(result.transcript.len(), 1);
            assert_eq!(challenger.calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_sources_merged_without_duplicates() {
        let first = r#"{"draft": "d1", "status": "ONGOING", "sources": ["a", "", "b"]}"#;
        let second = r#"```json
{"draft": "d2", "status": "READY", "sources": ["b", "c", "a"]}
```"#;
        let proposer = ScriptedAgent::texts("proposer", &[first, second]);
        let challenger = ScriptedAgent::texts("challenger", &[&critique("cite more")]);

        let result = use_case(proposer, challenger)
            .execute(RunDebateInput::new("p", 3))
            .await
            .unwrap();

        assert_eq!(result.sources, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_feedback_flows_into_next_proposer_prompt() {
        let proposer = ScriptedAgent::texts(
            "proposer",
            &[&proposal("d1", "ONGOING", "v1"), &proposal("d2", "READY", "v2")],
        );
        let challenger = ScriptedAgent::texts(
            "challenger",
            &[r#"Here you go: {"critique": "too long", "questions": ["why?"], "suggestions": ["cut"]}"#],
        );

        use_case(proposer.clone(), challenger.clone())
            .execute(RunDebateInput::new("Write a haiku", 3))
            .await
            .unwrap();

        assert!(proposer.prompt(0).starts_with("Create an initial draft"));
        assert!(challenger.prompt(0).contains("Current draft:\nd1"));
        assert!(
            proposer
                .prompt(1)
                .contains("too long\n\nQuestions:\n- why?\n\nSuggestions:\n- cut")
        );
    }

    #[tokio::test]
    async fn test_agent_failure_becomes_error_turn() {
        let proposer = ScriptedAgent::new("proposer", vec![Err(AgentError::Timeout)]);
        let challenger = ScriptedAgent::texts("challenger", &[]);

        let result = use_case(proposer, challenger)
            .execute(RunDebateInput::new("p", 2))
            .await
            .unwrap();

        assert_eq!(result.transcript.len(), 1);
        assert_eq!(result.transcript[0].content, "Error processing response: Timeout");
        assert_eq!(result.final_status, FinalStatus::MaxIterations);
    }

    #[tokio::test]
    async fn test_challenger_failure_keeps_partial_transcript() {
        let proposer = ScriptedAgent::texts(
            "proposer",
            &[r#"{"draft": "d1", "status": "ONGOING", "sources": ["s"]}"#],
        );
        let challenger = ScriptedAgent::texts("challenger", &[r#"{"questions": ["?"]}"#]);

        let result = use_case(proposer, challenger)
            .execute(RunDebateInput::new("p", 3))
            .await
            .unwrap();

        assert_eq!(result.transcript.len(), 2);
        assert_eq!(result.transcript[1].role, Role::Challenger);
        assert_eq!(result.transcript[1].status, DebateStatus::Error);
        assert_eq!(
            result.transcript[1].content,
            "Error processing response: missing required field 'critique'"
        );
        assert_eq!(result.final_draft, "d1");
        assert_eq!(result.sources, vec!["s"]);
        assert_eq!(result.total_iterations, 1);
    }

    #[tokio::test]
    async fn test_turn_labels_come_from_agents() {
        let proposer = ScriptedAgent::texts("openai:gpt-4o-mini", &[&proposal("d", "ONGOING", "r")]);
        let challenger = ScriptedAgent::texts("gemini:gemini-2.0-flash", &[&critique("c")]);

        let result = use_case(proposer, challenger)
            .execute(RunDebateInput::new("p", 1))
            .await
            .unwrap();

        assert_eq!(result.transcript[0].agent_label, "openai:gpt-4o-mini");
        assert_eq!(result.transcript[1].agent_label, "gemini:gemini-2.0-flash");
        assert_eq!(result.transcript[0].iteration, 1);
        assert_eq!(result.transcript[1].iteration, 1);
    }

    // === Cancellation and sink failure ===

    #[tokio::test]
    async fn test_pre_cancelled_run() {
        let proposer = ScriptedAgent::texts("proposer", &[&proposal("d", "READY", "r")]);
        let challenger = ScriptedAgent::texts("challenger", &[]);
        let token = CancellationToken::new();
        token.cancel();
        let sink = BufferingSink::new();

        let result = use_case(proposer.clone(), challenger)
            .execute_with_sink(RunDebateInput::new("p", 3).with_cancellation(token), &sink)
            .await;

        assert_eq!(result, Err(RunDebateError::Cancelled));
        assert_eq!(proposer.calls(), 0);
        assert_eq!(event_names(&sink.events()), vec!["start"]);
    }

    #[tokio::test]
    async fn test_cancel_during_agent_call() {
        let challenger = ScriptedAgent::texts("challenger", &[]);
        let token = CancellationToken::new();
        let sink = BufferingSink::new();

        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let result = use_case(Arc::new(StalledAgent), challenger)
            .execute_with_sink(RunDebateInput::new("p", 3).with_cancellation(token), &sink)
            .await;

        assert_eq!(result, Err(RunDebateError::Cancelled));
        assert_eq!(
            event_names(&sink.events()),
            vec!["start", "iteration_start"]
        );
    }

    #[tokio::test]
    async fn test_sink_failure_halts_without_completion() {
        let ongoing = proposal("d", "ONGOING", "r");
        let proposer = ScriptedAgent::texts("proposer", &[&ongoing, &ongoing, &ongoing]);
        let challenger = ScriptedAgent::texts(
            "challenger",
            &[&critique("a"), &critique("b"), &critique("c")],
        );
        // start, iteration_start, proposer_turn; the challenger turn is refused
        let sink = FailingSink::after(3);

        let result = use_case(proposer.clone(), challenger)
            .execute_with_sink(RunDebateInput::new("p", 3), &sink)
            .await
            .unwrap();

        assert_eq!(proposer.calls(), 1);
        assert_eq!(result.transcript.len(), 3);
        assert_eq!(result.total_iterations, 1);
        assert_eq!(result.final_status, FinalStatus::MaxIterations);

        let last = result.transcript.last().unwrap();
        assert_eq!(last.role, Role::Challenger);
        assert_eq!(last.iteration, 1);
        assert_eq!(last.status, DebateStatus::Error);
        assert_eq!(last.agent_label, "challenger");
        assert_eq!(last.content, "Error processing response: Event consumer closed");

        assert_eq!(
            event_names(&sink.inner.events()),
            vec!["start", "iteration_start", "proposer_turn"]
        );
    }

    #[tokio::test]
    async fn test_sink_refusing_start_records_proposer_error() {
        let proposer = ScriptedAgent::texts("proposer", &[&proposal("d", "ONGOING", "r")]);
        let challenger = ScriptedAgent::texts("challenger", &[&critique("a")]);
        let sink = FailingSink::after(0);

        let result = use_case(proposer.clone(), challenger)
            .execute_with_sink(RunDebateInput::new("p", 2), &sink)
            .await
            .unwrap();

        assert_eq!(proposer.calls(), 0);
        assert_eq!(result.transcript.len(), 1);
        assert_eq!(result.total_iterations, 0);
        assert_eq!(result.final_status, FinalStatus::MaxIterations);

        let turn = &result.transcript[0];
        assert_eq!(turn.role, Role::Proposer);
        assert_eq!(turn.iteration, 1);
        assert_eq!(turn.status, DebateStatus::Error);
        assert!(turn.content.starts_with("Error processing response: "));
        assert!(sink.inner.events().is_empty());
    }

    #[tokio::test]
    async fn test_never_exceeds_max_iterations() {
        for max in 1..=4 {
            let replies: Vec<String> = (0..10).map(|_| proposal("d", "ONGOING", "r")).collect();
            let critiques: Vec<String> = (0..10).map(|_| critique("more")).collect();
            let proposer = ScriptedAgent::texts(
                "proposer",
                &replies.iter().map(String::as_str).collect::<Vec<_>>(),
            );
            let challenger = ScriptedAgent::texts(
                "challenger",
                &critiques.iter().map(String::as_str).collect::<Vec<_>>(),
            );

            let result = use_case(proposer.clone(), challenger)
                .execute(RunDebateInput::new("p", max))
                .await
                .unwrap();

            assert_eq!(proposer.calls(), max);
            assert_eq!(result.total_iterations, max);
            assert_eq!(result.total_iterations, result.transcript.len() / 2);
        }
    }

    #[test]
    fn test_input_from_request() {
        let input = RunDebateInput::from(DebateRequest::new("Write a haiku").with_max_iterations(4));
        assert_eq!(input.prompt, "Write a haiku");
        assert_eq!(input.max_iterations, 4);
        assert!(input.cancellation.is_none());
    }
}
