//! Trait definitions for model backends.

use async_trait::async_trait;
use vasari_core::{GenerateRequest, StageResponse};
use vasari_error::VasariResult;

/// Core trait that all model backends must implement.
///
/// The driver is a pass-through to the remote generation API: it sends a
/// fully-formed request and hands back the raw stage response, normalizing
/// every transport or API failure into the workspace error type. It performs
/// no retries; a caller that wants retry policy wraps the driver.
#[async_trait]
pub trait ModelDriver: Send + Sync {
    /// Send one generation request and return the raw stage response.
    async fn generate(&self, req: &GenerateRequest) -> VasariResult<StageResponse>;

    /// Provider name (e.g., "anthropic").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-3-opus-20240229").
    fn model_name(&self) -> &str;
}
