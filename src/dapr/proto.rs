//! Hand-declared subset of `dapr.proto.common.v1` and `dapr.proto.runtime.v1`.

/// `google.protobuf.Any`. The load test only ever fills `value`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Any {
    #[prost(string, tag = "1")]
    pub type_url: String,
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

/// `dapr.proto.common.v1.InvokeRequest`
#[derive(Clone, PartialEq, prost::Message)]
pub struct InvokeRequest {
    #[prost(string, tag = "1")]
    pub method: String,
    #[prost(message, optional, tag = "2")]
    pub data: Option<Any>,
    #[prost(string, tag = "3")]
    pub content_type: String,
}

/// `dapr.proto.runtime.v1.InvokeServiceRequest`
#[derive(Clone, PartialEq, prost::Message)]
pub struct InvokeServiceRequest {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(message, optional, tag = "3")]
    pub message: Option<InvokeRequest>,
}

/// `dapr.proto.runtime.v1.GetStateRequest`
#[derive(Clone, PartialEq, prost::Message)]
pub struct GetStateRequest {
    #[prost(string, tag = "1")]
    pub store_name: String,
    #[prost(string, tag = "2")]
    pub key: String,
}

/// `dapr.proto.runtime.v1.PublishEventRequest`
#[derive(Clone, PartialEq, prost::Message)]
pub struct PublishEventRequest {
    #[prost(string, tag = "1")]
    pub pubsub_name: String,
    #[prost(string, tag = "2")]
    pub topic: String,
    #[prost(bytes = "vec", tag = "3")]
    pub data: Vec<u8>,
    #[prost(string, tag = "4")]
    pub data_content_type: String,
}
