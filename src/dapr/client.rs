use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use prost::Message;

use crate::error::RemoteError;

use super::channel::GrpcChannel;
use super::proto::{GetStateRequest, InvokeRequest, InvokeServiceRequest, PublishEventRequest};

pub const INVOKE_SERVICE_PATH: &str = "/dapr.proto.runtime.v1.Dapr/InvokeService";
pub const GET_STATE_PATH: &str = "/dapr.proto.runtime.v1.Dapr/GetState";
pub const PUBLISH_EVENT_PATH: &str = "/dapr.proto.runtime.v1.Dapr/PublishEvent";
pub const ON_INVOKE_PATH: &str = "/dapr.proto.runtime.v1.AppCallback/OnInvoke";

/// Stub for the Dapr runtime API.
#[derive(Clone)]
pub struct DaprClient {
    channel: Arc<dyn GrpcChannel>,
}

impl DaprClient {
    #[must_use]
    pub fn new(channel: Arc<dyn GrpcChannel>) -> Self {
        Self { channel }
    }

    /// # Errors
    ///
    /// Returns the channel's error unchanged.
    pub async fn invoke_service(&self, request: &InvokeServiceRequest) -> Result<Bytes, RemoteError> {
        self.channel
            .unary(INVOKE_SERVICE_PATH, request.encode_to_vec())
            .await
    }

    /// # Errors
    ///
    /// Returns the channel's error unchanged.
    pub async fn get_state(&self, request: &GetStateRequest) -> Result<Bytes, RemoteError> {
        self.channel
            .unary(GET_STATE_PATH, request.encode_to_vec())
            .await
    }

    /// # Errors
    ///
    /// Returns the channel's error unchanged.
    pub async fn publish_event(&self, request: &PublishEventRequest) -> Result<Bytes, RemoteError> {
        self.channel
            .unary(PUBLISH_EVENT_PATH, request.encode_to_vec())
            .await
    }
}

impl fmt::Debug for DaprClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DaprClient").finish_non_exhaustive()
    }
}

/// Stub for an application's `AppCallback` service.
#[derive(Clone)]
pub struct AppCallbackClient {
    channel: Arc<dyn GrpcChannel>,
}

impl AppCallbackClient {
    #[must_use]
    pub fn new(channel: Arc<dyn GrpcChannel>) -> Self {
        Self { channel }
    }

    /// # Errors
    ///
    /// Returns the channel's error unchanged.
    pub async fn on_invoke(&self, request: &InvokeRequest) -> Result<Bytes, RemoteError> {
        self.channel
            .unary(ON_INVOKE_PATH, request.encode_to_vec())
            .await
    }
}

impl fmt::Debug for AppCallbackClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppCallbackClient").finish_non_exhaustive()
    }
}
