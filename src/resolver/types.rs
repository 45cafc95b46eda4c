use crate::dapr::proto::{GetStateRequest, InvokeRequest, InvokeServiceRequest, PublishEventRequest};
use crate::dapr::{AppCallbackClient, DaprClient};

/// The request built for one (capability, target) pair.
#[derive(Debug, Clone, PartialEq)]
pub enum PreparedRequest {
    /// `noop` target: nothing to send.
    Empty,
    Invoke(InvokeServiceRequest),
    InvokeCallback(InvokeRequest),
    GetState(GetStateRequest),
    Publish(PublishEventRequest),
}

#[derive(Debug, Clone)]
pub(super) enum Stub {
    Detached,
    Dapr(DaprClient),
    AppCallback(AppCallbackClient),
}

/// A prepared request together with the stub it is sent through.
///
/// Built once by [`prepare`](super::prepare) and only read afterwards.
#[derive(Debug, Clone)]
pub struct PreparedCall {
    pub(super) request: PreparedRequest,
    pub(super) stub: Stub,
}

impl PreparedCall {
    #[must_use]
    pub const fn request(&self) -> &PreparedRequest {
        &self.request
    }

    /// A call with nothing to send and no stub, as built for `noop`.
    #[must_use]
    pub const fn detached() -> Self {
        Self {
            request: PreparedRequest::Empty,
            stub: Stub::Detached,
        }
    }
}
