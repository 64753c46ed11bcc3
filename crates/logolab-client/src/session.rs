//! Two-slot design session.
//!
//! `submit` runs the analysis with backoff, then renders both variants
//! concurrently and applies each image as it lands. Every submission bumps
//! the epoch; image completions issued under an older epoch are dropped so
//! a slow render from a previous design never overwrites the current one.
//!
//! State is published on a `watch` channel for renderers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use logolab_types::{DesignRequest, DesignResult, ImageResponse, VARIANT_COUNT};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::ClientError;
use crate::retry::retry_with_backoff;
use crate::source::{AnalysisSource, ImageSource};
use crate::types::RetryConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    GeneratingText,
    /// User-facing message.
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SlotState {
    #[default]
    Idle,
    GeneratingImage,
    ImageReady(ImageResponse),
    Error(String),
}

impl SlotState {
    pub fn image(&self) -> Option<&ImageResponse> {
        match self {
            Self::ImageReady(image) => Some(image),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub epoch: u64,
    pub form: FormState,
    pub result: Option<DesignResult>,
    pub slots: [SlotState; VARIANT_COUNT],
}

pub struct DesignSession {
    analysis: Arc<dyn AnalysisSource>,
    images: Arc<dyn ImageSource>,
    retry: RetryConfig,
    epoch: AtomicU64,
    state: watch::Sender<SessionSnapshot>,
}

impl DesignSession {
    pub fn new(analysis: Arc<dyn AnalysisSource>, images: Arc<dyn ImageSource>, retry: RetryConfig) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::default());
        Self { analysis, images, retry, epoch: AtomicU64::new(0), state }
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    pub fn current_epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Validate the form, generate the design, then render both variants.
    ///
    /// The project name is upper-cased. Invalid input leaves the previous
    /// result in place and only sets the form error.
    pub async fn submit(&self, project_name: &str, description: &str) -> Result<DesignResult, ClientError> {
        let request = match normalize(project_name, description) {
            Ok(request) => request,
            Err(e) => {
                self.state.send_modify(|s| s.form = FormState::Error(e.user_message().to_string()));
                return Err(e);
            }
        };

        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(SessionSnapshot {
            epoch,
            form: FormState::GeneratingText,
            ..Default::default()
        });

        let result = retry_with_backoff(&self.retry, || self.analysis.analyze(&request)).await;

        let design = match result {
            Ok(design) => design,
            Err(e) => {
                warn!("Analysis failed for {}: {}", request.project_name, e);
                let message = e.user_message().to_string();
                if !self.update_if_current(epoch, |s| s.form = FormState::Error(message)) {
                    debug!("Discarding analysis error for superseded epoch {}", epoch);
                }
                return Err(e);
            }
        };
        info!("Design ready for {} ({} variants)", request.project_name, design.variants.len());

        let prompts: Vec<(usize, String)> = design
            .variants
            .iter()
            .take(VARIANT_COUNT)
            .enumerate()
            .map(|(slot, v)| (slot, v.prompt.clone()))
            .collect();

        if prompts.len() < VARIANT_COUNT {
            warn!("Design has {} of {} variants", prompts.len(), VARIANT_COUNT);
        }

        let applied = self.update_if_current(epoch, |s| {
            s.form = FormState::Idle;
            s.result = Some(design.clone());
            for (slot, state) in s.slots.iter_mut().enumerate() {
                *state = if slot < prompts.len() {
                    SlotState::GeneratingImage
                } else {
                    SlotState::Error(
                        ClientError::InvalidResponse(format!("no variant for slot {}", slot))
                            .user_message()
                            .to_string(),
                    )
                };
            }
        });
        if !applied {
            debug!("Discarding analysis for superseded epoch {}", epoch);
            return Ok(design);
        }

        let mut pending: FuturesUnordered<_> = prompts
            .into_iter()
            .map(|(slot, prompt)| {
                let images = Arc::clone(&self.images);
                async move { (slot, images.render(&prompt).await) }
            })
            .collect();

        while let Some((slot, outcome)) = pending.next().await {
            self.apply_image(epoch, slot, &outcome);
        }

        Ok(design)
    }

    /// Re-render one slot from its existing prompt under the current epoch.
    pub async fn regenerate(&self, slot: usize) -> Result<ImageResponse, ClientError> {
        let (epoch, prompt) = {
            let snapshot = self.state.borrow();
            let prompt = snapshot
                .result
                .as_ref()
                .and_then(|r| r.variant(slot))
                .filter(|_| slot < VARIANT_COUNT)
                .map(|v| v.prompt.clone())
                .ok_or_else(|| ClientError::Validation(format!("no variant in slot {}", slot)))?;
            (snapshot.epoch, prompt)
        };

        if !self.update_if_current(epoch, |s| s.slots[slot] = SlotState::GeneratingImage) {
            let reason = format!("design was replaced before slot {} could be regenerated", slot);
            return Err(ClientError::Validation(reason));
        }
        let outcome = self.images.render(&prompt).await;
        self.apply_image(epoch, slot, &outcome);
        outcome
    }

    /// Apply an image outcome if `epoch` is still current.
    fn apply_image(&self, epoch: u64, slot: usize, outcome: &Result<ImageResponse, ClientError>) -> bool {
        let next = match outcome {
            Ok(image) => {
                info!("Slot {} image ready from {}", slot, image.source);
                SlotState::ImageReady(image.clone())
            }
            Err(e) => {
                warn!("Slot {} image failed: {}", slot, e);
                SlotState::Error(e.user_message().to_string())
            }
        };
        let applied = self.update_if_current(epoch, |s| s.slots[slot] = next);
        if !applied {
            debug!("Discarding slot {} image from stale epoch {}", slot, epoch);
        }
        applied
    }

    // The epoch is compared while the watch lock is held, so a submission
    // that starts concurrently either sees this write or replaces it.
    fn update_if_current(&self, epoch: u64, update: impl FnOnce(&mut SessionSnapshot)) -> bool {
        self.state.send_if_modified(|s| {
            if epoch != self.current_epoch() {
                return false;
            }
            update(s);
            true
        })
    }
}

fn normalize(project_name: &str, description: &str) -> Result<DesignRequest, ClientError> {
    let project_name = project_name.trim().to_uppercase();
    let input_text = description.trim().to_string();
    if project_name.is_empty() || input_text.is_empty() {
        return Err(ClientError::Validation("project name and description are required".to_string()));
    }
    Ok(DesignRequest { project_name, input_text })
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
