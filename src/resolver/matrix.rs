use crate::params::{Capability, Target};

/// A supported (capability, target) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Noop,
    DaprInvoke,
    DaprState,
    DaprPubSub,
    AppCallbackInvoke,
}

/// Looks the pair up in the compatibility matrix.
///
/// `noop` accepts any capability, an unset one included. Every other target
/// needs a capability it supports.
#[must_use]
pub const fn route(capability: Option<Capability>, target: Option<Target>) -> Option<Route> {
    match (target, capability) {
        (Some(Target::Noop), _) => Some(Route::Noop),
        (Some(Target::Dapr), Some(Capability::Invoke)) => Some(Route::DaprInvoke),
        (Some(Target::Dapr), Some(Capability::State)) => Some(Route::DaprState),
        (Some(Target::Dapr), Some(Capability::PubSub)) => Some(Route::DaprPubSub),
        (Some(Target::AppCallback), Some(Capability::Invoke)) => Some(Route::AppCallbackInvoke),
        (Some(Target::AppCallback), Some(Capability::State | Capability::PubSub))
        | (Some(Target::Dapr | Target::AppCallback), None)
        | (None, _) => None,
    }
}
