//! Compliance checks and the pipeline that runs them
//!
//! A check is one pass/fail verification against the triggering event. The
//! pipeline evaluates the gating conditions once, then runs every registered
//! check in order, honoring the configured skip and enable lists. A failing
//! check is recorded and the remaining checks still run; the run as a whole
//! fails when any executed check failed.

pub mod conditions;
pub mod pii_detection;

pub use pii_detection::PiiDetectionCheck;

use crate::adapters::github::RepoSource;
use crate::config::VigilConfig;
use crate::domain::{EventContext, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;

/// Everything a check may consult while running
#[derive(Clone)]
pub struct CheckContext {
    /// The event under review
    pub event: EventContext,

    /// Read access to the repository under review
    pub source: Arc<dyn RepoSource>,

    /// Full configuration
    pub config: VigilConfig,

    /// Cooperative shutdown signal
    pub shutdown: watch::Receiver<bool>,
}

impl CheckContext {
    /// Creates a check context
    pub fn new(
        event: EventContext,
        source: Arc<dyn RepoSource>,
        config: VigilConfig,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            event,
            source,
            config,
            shutdown,
        }
    }
}

/// One compliance check
#[async_trait]
pub trait Check: Send + Sync {
    /// Stable name used in skip and enable lists and in diagnostics
    fn name(&self) -> &str;

    /// Optional checks only run when the enable list names them
    fn optional(&self) -> bool {
        false
    }

    /// Runs the check
    ///
    /// `Err` is the check failure; the error message must carry the whole
    /// diagnosis, since it is what the report and the CI log show.
    async fn run(&self, ctx: &CheckContext) -> Result<()>;
}

/// One recorded check failure
#[derive(Debug, Clone)]
pub struct CheckFailure {
    /// Name of the failed check
    pub check: String,

    /// The failure message
    pub message: String,
}

/// Report of one pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    /// Names of the checks that ran, in run order
    pub executed: Vec<String>,

    /// Names of the checks that were skipped
    pub skipped: Vec<String>,

    /// Failures recorded by executed checks
    pub failures: Vec<CheckFailure>,

    /// When set, a gating condition skipped the entire run
    pub gated: Option<String>,
}

impl PipelineReport {
    /// Whether every executed check passed
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    fn gated_by(reason: impl Into<String>) -> Self {
        Self {
            gated: Some(reason.into()),
            ..Self::default()
        }
    }
}

/// Runs registered checks against one event
pub struct CheckPipeline {
    checks: Vec<Box<dyn Check>>,
}

impl CheckPipeline {
    /// Creates an empty pipeline
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// The standard pipeline with every built-in check registered
    pub fn standard() -> Self {
        let mut pipeline = Self::new();
        pipeline.register(Box::new(PiiDetectionCheck));
        pipeline
    }

    /// Registers a check at the end of the run order
    pub fn register(&mut self, check: Box<dyn Check>) {
        self.checks.push(check);
    }

    /// Evaluates the gating conditions, then runs the checks in order
    ///
    /// Errors from the gating conditions propagate and abort the run. A
    /// check failure does not: it is recorded in the report and the next
    /// check still runs.
    pub async fn run(&self, ctx: &CheckContext) -> Result<PipelineReport> {
        let checks_config = &ctx.config.checks;

        if !conditions::owner_allowed(&ctx.config.github.owner, &checks_config.allowed_owners) {
            tracing::info!(
                owner = %ctx.config.github.owner,
                "Repository owner is not in the allow-list, skipping all checks"
            );
            return Ok(PipelineReport::gated_by("owner not in allow-list"));
        }

        if conditions::triggered_by_bot(ctx.source.as_ref(), &ctx.event, &checks_config.bot_users)
            .await?
        {
            tracing::info!("Run triggered by a bot, skipping all checks");
            return Ok(PipelineReport::gated_by("triggered by bot"));
        }

        if conditions::is_draft_pull_request(ctx.source.as_ref(), &ctx.event).await? {
            tracing::info!("Pull request is a draft, skipping all checks");
            return Ok(PipelineReport::gated_by("draft pull request"));
        }

        let mut report = PipelineReport::default();

        for check in &self.checks {
            let name = check.name();

            if checks_config.skip.iter().any(|s| s == name) {
                tracing::info!(check = name, "Check skipped in configuration");
                report.skipped.push(name.to_string());
                continue;
            }

            if check.optional() && !checks_config.enable.iter().any(|e| e == name) {
                tracing::info!(check = name, "Optional check not enabled, skipping");
                report.skipped.push(name.to_string());
                continue;
            }

            tracing::info!(check = name, "Running check");
            report.executed.push(name.to_string());

            match check.run(ctx).await {
                Ok(()) => {
                    tracing::info!(check = name, "Check passed");
                }
                Err(e) => {
                    tracing::error!(check = name, error = %e, "Check failed");
                    report.failures.push(CheckFailure {
                        check: name.to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}

impl Default for CheckPipeline {
    fn default() -> Self {
        Self::new()
    }
}
