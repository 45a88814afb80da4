// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Top-level request handler.
//!
//! Every utterance produces a reply string. Path failures become an
//! `An error occurred: ...` reply and the session history is kept intact.

use std::sync::Arc;

use teachassist_config::TeachAssistConfig;
use teachassist_core::{KnowledgeBaseAdapter, ProviderAdapter, Route, TeachAssistError};
use teachassist_memory::Summarizer;
use teachassist_router::{
    ActionClassifier, ClassifierSettings, IntentRouter, RouteSource, RoutingDecision,
};
use tracing::{Instrument, info, info_span, warn};

use crate::knowledge::KnowledgePipeline;
use crate::session::SessionContext;
use crate::teacher::TeacherAgent;

/// Routes each utterance to the teacher or the knowledge-base pipeline.
pub struct Orchestrator {
    router: IntentRouter,
    teacher: TeacherAgent,
    knowledge: KnowledgePipeline,
}

impl Orchestrator {
    pub fn new(router: IntentRouter, teacher: TeacherAgent, knowledge: KnowledgePipeline) -> Self {
        Self {
            router,
            teacher,
            knowledge,
        }
    }

    /// Wire every component from configuration.
    pub fn from_config(
        provider: Arc<dyn ProviderAdapter>,
        kb: Arc<dyn KnowledgeBaseAdapter>,
        config: &TeachAssistConfig,
    ) -> Self {
        let settings = ClassifierSettings::from_config(&config.anthropic, &config.routing);
        let router = IntentRouter::new(provider.clone(), settings.clone())
            .with_llm_fallback(config.routing.llm_fallback);
        let actions = ActionClassifier::new(provider.clone(), settings);
        let summarizer = Summarizer::new(
            provider.clone(),
            config.anthropic.default_model.clone(),
            config.anthropic.max_tokens,
        )
        .with_temperature(config.anthropic.temperature);

        Self {
            router,
            teacher: TeacherAgent::new(provider, config),
            knowledge: KnowledgePipeline::new(kb, actions, summarizer, &config.memory),
        }
    }

    /// Handle one utterance, recording both turns in `session`.
    pub async fn handle(&self, session: &mut SessionContext, utterance: &str) -> String {
        let span = info_span!("handle", turn = session.history.len() / 2);
        async {
            session.push_user(utterance);
            let prior = session.history.len() - 1;

            let reply = match self.respond(session, prior, utterance).await {
                Ok(reply) => reply,
                Err(e) => {
                    warn!(error = %e, "request failed");
                    format!("An error occurred: {e}")
                }
            };

            session.push_assistant(reply.clone());
            reply
        }
        .instrument(span)
        .await
    }

    async fn respond(
        &self,
        session: &SessionContext,
        prior: usize,
        utterance: &str,
    ) -> Result<String, TeachAssistError> {
        let decision = self.route(utterance).await;
        match decision.route {
            Route::Teacher => {
                self.teacher
                    .answer(utterance, &session.history[..prior])
                    .await
            }
            Route::Knowledgebase => self.knowledge.handle(utterance, session).await,
        }
    }

    /// Classification failures fall back to the teacher path.
    async fn route(&self, utterance: &str) -> RoutingDecision {
        match self.router.decide(utterance).await {
            Ok(decision) => {
                match decision.source {
                    RouteSource::Keyword(keyword) => {
                        info!(route = %decision.route, keyword, "route decided by keyword")
                    }
                    RouteSource::Model | RouteSource::Default => {
                        info!(route = %decision.route, source = ?decision.source, "route decided")
                    }
                }
                decision
            }
            Err(e) => {
                warn!(error = %e, "intent classification failed; using teacher");
                RoutingDecision {
                    route: Route::Teacher,
                    source: RouteSource::Default,
                }
            }
        }
    }
}
