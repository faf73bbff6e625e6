//! UI message dispatch.
//!
//! The plugin UI posts one [`UiMessage`] at a time; each is handled to
//! completion and answered with at most one [`PluginMessage`].

use std::sync::Arc;

use modegrid_domain::{Collection, CollectionId, CollectionRef, LegacyRequest, PlanError};
use modegrid_shared::dto::{CollectionSummary, ModeSummary};
use modegrid_shared::messages::{ErrorCode, PluginMessage, UiMessage};

use crate::app::App;
use crate::use_cases::{DetectedCollections, GenerateError};

/// Shown instead of host internals, which are only logged
const HOST_FAILURE_MESSAGE: &str = "Something went wrong while updating the canvas. No changes were kept.";

pub struct UiBridge {
    app: Arc<App>,
}

impl UiBridge {
    pub fn new(app: Arc<App>) -> Self {
        Self { app }
    }

    /// Parse and handle a raw UI message.
    pub fn handle_json(&self, raw: &str) -> Option<PluginMessage> {
        match UiMessage::from_json(raw) {
            Ok(message) => self.handle(message),
            Err(e) => {
                tracing::warn!(error = %e, "Rejected malformed UI message");
                Some(PluginMessage::error(ErrorCode::BadMessage, e.to_string()))
            }
        }
    }

    /// Handle one UI message. Unknown messages get no reply.
    pub fn handle(&self, message: UiMessage) -> Option<PluginMessage> {
        let reply = match message {
            UiMessage::Create { theme, dynamic } => self
                .app
                .use_cases
                .generation
                .variations
                .execute(LegacyRequest { theme, dynamic })
                .map(|clones| PluginMessage::Generated {
                    count: clones.len(),
                    labels: Vec::new(),
                })
                .unwrap_or_else(|e| self.generation_failed(e)),
            UiMessage::Generate { collection_ids } => {
                let refs: Vec<CollectionRef> = collection_ids
                    .into_iter()
                    .map(|id| CollectionId::from_uuid(id).into())
                    .collect();
                self.app
                    .use_cases
                    .generation
                    .mode_grid
                    .execute(&refs)
                    .map(|grid| PluginMessage::Generated {
                        count: grid.count(),
                        labels: grid.labels,
                    })
                    .unwrap_or_else(|e| self.generation_failed(e))
            }
            UiMessage::GenerateConventional {
                theme,
                dynamic_type,
            } => {
                let config = &self.app.config;
                let names: Vec<String> = [
                    (theme, &config.theme_collection),
                    (dynamic_type, &config.dynamic_type_collection),
                ]
                .into_iter()
                .filter(|(enabled, _)| *enabled)
                .map(|(_, name)| name.clone())
                .collect();
                self.app
                    .use_cases
                    .generation
                    .mode_grid
                    .execute_named(&names)
                    .map(|grid| PluginMessage::Generated {
                        count: grid.count(),
                        labels: grid.labels,
                    })
                    .unwrap_or_else(|e| self.generation_failed(e))
            }
            UiMessage::Detect => self.detect(),
            UiMessage::Unknown => {
                tracing::debug!("Ignoring unknown UI message type");
                return None;
            }
        };
        Some(reply)
    }

    /// Selection changed in the host: recompute the collection list.
    pub fn selection_changed(&self) -> PluginMessage {
        self.detect()
    }

    fn detect(&self) -> PluginMessage {
        match self.app.use_cases.detection.execute() {
            Ok(DetectedCollections {
                detected,
                available,
            }) => PluginMessage::Collections {
                detected: detected.iter().map(summarize).collect(),
                available: available.iter().map(summarize).collect(),
            },
            Err(e) => {
                tracing::error!(error = %e, "Collection detection failed");
                PluginMessage::error(ErrorCode::HostFailure, HOST_FAILURE_MESSAGE)
            }
        }
    }

    /// Notify the user and build the error reply.
    fn generation_failed(&self, error: GenerateError) -> PluginMessage {
        let code = error_code(&error);
        let message = match &error {
            GenerateError::Host(e) => {
                tracing::error!(error = %e, "Generation failed in the host");
                HOST_FAILURE_MESSAGE.to_string()
            }
            other => {
                tracing::info!(error = %other, "Generation refused");
                other.to_string()
            }
        };
        self.app.scene.notify(&message);
        PluginMessage::error(code, message)
    }
}

fn error_code(error: &GenerateError) -> ErrorCode {
    match error {
        GenerateError::NothingSelected => ErrorCode::NothingSelected,
        GenerateError::UnsupportedArtifactType { .. } => ErrorCode::UnsupportedArtifactType,
        GenerateError::CollectionNotFound { .. } => ErrorCode::CollectionNotFound,
        GenerateError::Plan(PlanError::NoAxesSelected) => ErrorCode::NoAxesSelected,
        GenerateError::Plan(PlanError::EmptyAxis { .. }) => ErrorCode::EmptyAxis,
        GenerateError::Host(_) => ErrorCode::HostFailure,
    }
}

fn summarize(collection: &Collection) -> CollectionSummary {
    CollectionSummary {
        id: collection.id().to_uuid(),
        name: collection.name().to_string(),
        modes: collection
            .modes()
            .iter()
            .map(|m| ModeSummary {
                id: m.id().to_uuid(),
                name: m.name().to_string(),
            })
            .collect(),
    }
}
