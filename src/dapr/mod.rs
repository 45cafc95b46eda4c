//! Dapr gRPC surface consumed by the resolver.
//!
//! Only the four unary methods the load test exercises are modelled:
//! `Dapr/InvokeService`, `Dapr/GetState`, `Dapr/PublishEvent` and
//! `AppCallback/OnInvoke`. Messages carry just the fields the requests set;
//! protobuf tags match the upstream Dapr definitions.

mod channel;
mod client;
pub mod proto;


pub use channel::{GrpcChannel, HttpGrpcChannel, grpc_frame};
pub use client::{
    AppCallbackClient, DaprClient, GET_STATE_PATH, INVOKE_SERVICE_PATH, ON_INVOKE_PATH,
    PUBLISH_EVENT_PATH,
};
