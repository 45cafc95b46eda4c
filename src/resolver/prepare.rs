use std::sync::Arc;

use crate::dapr::proto::{
    Any, GetStateRequest, InvokeRequest, InvokeServiceRequest, PublishEventRequest,
};
use crate::dapr::{AppCallbackClient, DaprClient, GrpcChannel};
use crate::error::ResolveError;
use crate::params::{Capability, ParameterSet, Target};

use super::matrix::{Route, route};
use super::types::{PreparedCall, PreparedRequest, Stub};

/// Content type stamped on invoke requests.
pub const PLAIN_TEXT_CONTENT_TYPE: &str = "text/plain";

const STATE_GET: &str = "get";
const PUBSUB_PUBLISH: &str = "publish";

/// Validates `params` and builds the request for its (capability, target)
/// pair, bound to a stub over `channel`.
///
/// `payload` is used verbatim as the body of invoke and publish requests; an
/// empty payload yields zero-length data, never a missing body. The `noop`
/// target builds nothing and needs no channel.
///
/// # Errors
///
/// Returns `UnsupportedCombination` for a pair outside the matrix,
/// `MissingField` for the first empty required value, `UnsupportedMethod`
/// for a method the capability does not know, and `MissingChannel` when a
/// remote target is prepared without a channel.
pub fn prepare(
    params: &ParameterSet,
    payload: &[u8],
    channel: Option<&Arc<dyn GrpcChannel>>,
) -> Result<PreparedCall, ResolveError> {
    let Some(route) = route(params.capability(), params.target()) else {
        return Err(ResolveError::unsupported(
            params.capability(),
            params.target(),
        ));
    };

    let (request, stub) = match route {
        Route::Noop => return Ok(PreparedCall::detached()),
        Route::DaprInvoke => (
            PreparedRequest::Invoke(invoke_service_request(params, payload)?),
            Stub::Dapr(DaprClient::new(bind(channel, Target::Dapr)?)),
        ),
        Route::DaprState => (
            PreparedRequest::GetState(get_state_request(params)?),
            Stub::Dapr(DaprClient::new(bind(channel, Target::Dapr)?)),
        ),
        Route::DaprPubSub => (
            PreparedRequest::Publish(publish_event_request(params, payload)?),
            Stub::Dapr(DaprClient::new(bind(channel, Target::Dapr)?)),
        ),
        Route::AppCallbackInvoke => (
            PreparedRequest::InvokeCallback(invoke_callback_request(params, payload)?),
            Stub::AppCallback(AppCallbackClient::new(bind(
                channel,
                Target::AppCallback,
            )?)),
        ),
    };

    Ok(PreparedCall { request, stub })
}

fn bind(
    channel: Option<&Arc<dyn GrpcChannel>>,
    target: Target,
) -> Result<Arc<dyn GrpcChannel>, ResolveError> {
    channel
        .map(Arc::clone)
        .ok_or(ResolveError::MissingChannel { target })
}

fn require<'params>(
    capability: Capability,
    field: &'static str,
    value: &'params str,
) -> Result<&'params str, ResolveError> {
    if value.is_empty() {
        Err(ResolveError::MissingField { capability, field })
    } else {
        Ok(value)
    }
}

fn plain_text_invoke(method: &str, payload: &[u8]) -> InvokeRequest {
    InvokeRequest {
        method: method.to_owned(),
        data: Some(Any {
            type_url: String::new(),
            value: payload.to_vec(),
        }),
        content_type: PLAIN_TEXT_CONTENT_TYPE.to_owned(),
    }
}

fn invoke_service_request(
    params: &ParameterSet,
    payload: &[u8],
) -> Result<InvokeServiceRequest, ResolveError> {
    let method = require(Capability::Invoke, "method", params.method())?;
    Ok(InvokeServiceRequest {
        id: params.app_id().to_owned(),
        message: Some(plain_text_invoke(method, payload)),
    })
}

fn invoke_callback_request(
    params: &ParameterSet,
    payload: &[u8],
) -> Result<InvokeRequest, ResolveError> {
    let method = require(Capability::Invoke, "method", params.method())?;
    Ok(plain_text_invoke(method, payload))
}

fn get_state_request(params: &ParameterSet) -> Result<GetStateRequest, ResolveError> {
    let method = require(Capability::State, "method", params.method())?;
    let store = require(Capability::State, "store", params.store())?;
    let key = require(Capability::State, "key", params.extension("key"))?;

    if method != STATE_GET {
        return Err(ResolveError::UnsupportedMethod {
            capability: Capability::State,
            method: method.to_owned(),
        });
    }
    Ok(GetStateRequest {
        store_name: store.to_owned(),
        key: key.to_owned(),
    })
}

fn publish_event_request(
    params: &ParameterSet,
    payload: &[u8],
) -> Result<PublishEventRequest, ResolveError> {
    let method = require(Capability::PubSub, "method", params.method())?;
    let pubsub_name = require(Capability::PubSub, "store", params.store())?;
    let topic = require(Capability::PubSub, "topic", params.extension("topic"))?;

    if method != PUBSUB_PUBLISH {
        return Err(ResolveError::UnsupportedMethod {
            capability: Capability::PubSub,
            method: method.to_owned(),
        });
    }
    Ok(PublishEventRequest {
        pubsub_name: pubsub_name.to_owned(),
        topic: topic.to_owned(),
        data: payload.to_vec(),
        data_content_type: params.extension("contenttype").to_owned(),
    })
}
