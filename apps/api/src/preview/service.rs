//! Preview orchestrator.
//!
//! A single task owns the [`PreviewCache`] and every piece of bookkeeping.
//! Callers talk to it through a cloneable [`PreviewHandle`]; renders run on
//! the blocking pool via [`worker::dispatch`] and report back on a private
//! channel. The cache is written only when a worker response arrives.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::resume::Resume;
use crate::models::site::RenderedAssets;
use crate::models::template::Template;
use crate::preview::cache::PreviewCache;
use crate::preview::fingerprint::Fingerprint;
use crate::preview::worker::{self, PreviewPipeline, WorkerRequest, WorkerResponse};

#[derive(Debug, Error)]
pub enum PreviewError {
    /// Worker-side failure, message carried verbatim.
    #[error("{0}")]
    Generation(String),

    #[error("Preview service has shut down")]
    ServiceStopped,

    #[error("Failed to fingerprint preview input: {0}")]
    Fingerprint(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy)]
pub struct PreviewConfig {
    pub capacity: usize,
    pub queue_depth: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            capacity: 5,
            queue_depth: 64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewOutcome {
    pub fingerprint: Fingerprint,
    pub cached: bool,
    pub assets: RenderedAssets,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub generations: u64,
    pub failures: u64,
    pub in_flight: usize,
}

type Reply<T> = oneshot::Sender<T>;

enum Command {
    Render {
        fingerprint: Fingerprint,
        resume: Resume,
        template: Template,
        reply: Reply<Result<PreviewOutcome, PreviewError>>,
    },
    Invalidate {
        fingerprint: Fingerprint,
        reply: Reply<bool>,
    },
    Clear {
        reply: Reply<usize>,
    },
    Stats {
        reply: Reply<CacheStats>,
    },
    Shutdown {
        reply: Reply<()>,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Handle
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct PreviewHandle {
    tx: mpsc::Sender<Command>,
}

impl PreviewHandle {
    async fn call<T>(&self, build: impl FnOnce(Reply<T>) -> Command) -> Result<T, PreviewError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(build(reply))
            .await
            .map_err(|_| PreviewError::ServiceStopped)?;
        rx.await.map_err(|_| PreviewError::ServiceStopped)
    }

    /// Renders `(resume, template)`, answering from the cache when possible.
    pub async fn render(
        &self,
        resume: Resume,
        template: Template,
    ) -> Result<PreviewOutcome, PreviewError> {
        let fingerprint = Fingerprint::of(&resume, &template)?;
        self.call(|reply| Command::Render {
            fingerprint,
            resume,
            template,
            reply,
        })
        .await?
    }

    /// Drops one cache entry. Returns whether it existed.
    pub async fn invalidate(&self, fingerprint: Fingerprint) -> Result<bool, PreviewError> {
        self.call(|reply| Command::Invalidate { fingerprint, reply })
            .await
    }

    pub async fn clear(&self) -> Result<usize, PreviewError> {
        self.call(|reply| Command::Clear { reply }).await
    }

    pub async fn stats(&self) -> Result<CacheStats, PreviewError> {
        self.call(|reply| Command::Stats { reply }).await
    }

    /// Stops the orchestrator and drops the cache. Renders still in flight
    /// are answered with [`PreviewError::ServiceStopped`].
    pub async fn shutdown(&self) -> Result<(), PreviewError> {
        self.call(|reply| Command::Shutdown { reply }).await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestrator
// ────────────────────────────────────────────────────────────────────────────

struct Orchestrator {
    cache: PreviewCache,
    pipeline: Arc<dyn PreviewPipeline>,
    waiting: HashMap<Uuid, Reply<Result<PreviewOutcome, PreviewError>>>,
    replies: mpsc::UnboundedSender<WorkerResponse>,
    stats: CacheStats,
}

impl Orchestrator {
    fn on_render(
        &mut self,
        fingerprint: Fingerprint,
        resume: Resume,
        template: Template,
        reply: Reply<Result<PreviewOutcome, PreviewError>>,
    ) {
        if let Some(assets) = self.cache.get(&fingerprint) {
            self.stats.hits += 1;
            debug!(fingerprint = %fingerprint, "Preview cache hit");
            let _ = reply.send(Ok(PreviewOutcome {
                fingerprint,
                cached: true,
                assets: assets.clone(),
            }));
            return;
        }

        self.stats.misses += 1;
        debug!(fingerprint = %fingerprint, "Preview cache miss, dispatching worker");
        let request_id = Uuid::new_v4();
        self.waiting.insert(request_id, reply);
        worker::dispatch(
            self.pipeline.clone(),
            WorkerRequest {
                request_id,
                fingerprint,
                resume,
                template,
            },
            self.replies.clone(),
        );
    }

    fn on_response(&mut self, response: WorkerResponse) {
        let reply = self.waiting.remove(&response.request_id());
        let result = match response {
            WorkerResponse::PreviewGenerated {
                fingerprint,
                assets,
                ..
            } => {
                self.stats.generations += 1;
                if let Some(evicted) = self.cache.insert(fingerprint.clone(), assets.clone()) {
                    self.stats.evictions += 1;
                    debug!(fingerprint = %fingerprint, evicted = %evicted, "Preview cache eviction");
                }
                Ok(PreviewOutcome {
                    fingerprint,
                    cached: false,
                    assets,
                })
            }
            WorkerResponse::Failed {
                fingerprint, error, ..
            } => {
                self.stats.failures += 1;
                warn!(fingerprint = %fingerprint, error = %error, "Preview generation failed");
                Err(PreviewError::Generation(error))
            }
        };

        // The caller may have given up (timeout); the cache is still updated.
        if let Some(reply) = reply {
            let _ = reply.send(result);
        }
    }

    fn snapshot(&self) -> CacheStats {
        CacheStats {
            entries: self.cache.len(),
            capacity: self.cache.capacity(),
            in_flight: self.waiting.len(),
            ..self.stats
        }
    }
}

/// Starts the orchestrator task.
pub fn spawn(
    config: PreviewConfig,
    pipeline: Arc<dyn PreviewPipeline>,
) -> (PreviewHandle, JoinHandle<()>) {
    let (tx, mut commands) = mpsc::channel(config.queue_depth.max(1));
    let (replies, mut responses) = mpsc::unbounded_channel();

    let mut orchestrator = Orchestrator {
        cache: PreviewCache::new(config.capacity),
        pipeline,
        waiting: HashMap::new(),
        replies,
        stats: CacheStats::default(),
    };

    let task = tokio::spawn(async move {
        info!(capacity = orchestrator.cache.capacity(), "Preview service started");
        loop {
            tokio::select! {
                command = commands.recv() => {
                    let Some(command) = command else { break };
                    match command {
                        Command::Render { fingerprint, resume, template, reply } => {
                            orchestrator.on_render(fingerprint, resume, template, reply);
                        }
                        Command::Invalidate { fingerprint, reply } => {
                            let _ = reply.send(orchestrator.cache.remove(&fingerprint).is_some());
                        }
                        Command::Clear { reply } => {
                            let _ = reply.send(orchestrator.cache.clear());
                        }
                        Command::Stats { reply } => {
                            let _ = reply.send(orchestrator.snapshot());
                        }
                        Command::Shutdown { reply } => {
                            if !orchestrator.cache.is_empty() {
                                debug!(dropped = orchestrator.cache.clear(), "Preview cache cleared");
                            }
                            let _ = reply.send(());
                            break;
                        }
                    }
                }
                // The orchestrator holds a sender, so this never yields None.
                Some(response) = responses.recv() => orchestrator.on_response(response),
            }
        }
        // Dropping pending repliers resolves their callers with ServiceStopped.
        orchestrator.waiting.clear();
        info!("Preview service stopped");
    });

    (PreviewHandle { tx }, task)
}
