use crate::error::{AppResult, ResolveError};
use crate::params::ParameterSet;

use super::matrix::{Route, route};
use super::types::{PreparedCall, PreparedRequest, Stub};

/// Issues the single remote call for a prepared request.
///
/// The (capability, target) pair is looked up again and must agree with
/// what `prepared` holds, so a call prepared for other parameters is refused
/// instead of sent. The response body is dropped; only success matters.
/// Deadlines and cancellation come from the channel and from the caller
/// dropping the future.
///
/// # Errors
///
/// Returns `UnsupportedCombination` when the pair is outside the matrix or
/// does not match `prepared`, and the remote error unchanged when the call
/// fails.
pub async fn execute(params: &ParameterSet, prepared: &PreparedCall) -> AppResult<()> {
    let unsupported = || ResolveError::unsupported(params.capability(), params.target());
    let Some(route) = route(params.capability(), params.target()) else {
        return Err(unsupported().into());
    };

    match (route, &prepared.request, &prepared.stub) {
        (Route::Noop, _, _) => {}
        (Route::DaprInvoke, PreparedRequest::Invoke(request), Stub::Dapr(client)) => {
            client.invoke_service(request).await?;
        }
        (
            Route::AppCallbackInvoke,
            PreparedRequest::InvokeCallback(request),
            Stub::AppCallback(client),
        ) => {
            client.on_invoke(request).await?;
        }
        (Route::DaprState, PreparedRequest::GetState(request), Stub::Dapr(client)) => {
            client.get_state(request).await?;
        }
        (Route::DaprPubSub, PreparedRequest::Publish(request), Stub::Dapr(client)) => {
            client.publish_event(request).await?;
        }
        _ => return Err(unsupported().into()),
    }

    Ok(())
}
