use std::collections::BTreeMap;
use std::fmt;

use crate::error::ParamError;

/// Kind of remote operation under load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// Service invocation of `method` on an app.
    Invoke,
    /// A state store read.
    State,
    /// A pub/sub publish.
    PubSub,
}

impl Capability {
    pub const ALL: [Self; 3] = [Self::Invoke, Self::State, Self::PubSub];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Capability::Invoke => "invoke",
            Capability::State => "state",
            Capability::PubSub => "pubsub",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Capability {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|capability| capability.as_str() == s)
            .ok_or_else(|| ParamError::UnknownCapability {
                value: s.to_owned(),
            })
    }
}

/// Endpoint flavour that receives the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    /// Builds nothing and calls nothing; measures harness overhead.
    Noop,
    /// The Dapr runtime (sidecar) API.
    Dapr,
    /// The application's callback service, called directly.
    AppCallback,
}

impl Target {
    pub const ALL: [Self; 3] = [Self::Noop, Self::Dapr, Self::AppCallback];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Target::Noop => "noop",
            Target::Dapr => "dapr",
            Target::AppCallback => "appcallback",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Target {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = match s {
            "dapr-runtime" => "dapr",
            "app-callback" => "appcallback",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|target| target.as_str() == canonical)
            .ok_or_else(|| ParamError::UnknownTarget {
                value: s.to_owned(),
            })
    }
}

/// Parsed load-test parameters.
///
/// Immutable once built. Unset `capability`/`target` stay `None`; string
/// fields that were never given are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    pub(super) capability: Option<Capability>,
    pub(super) target: Option<Target>,
    pub(super) method: String,
    pub(super) app_id: String,
    pub(super) store: String,
    pub(super) extensions: BTreeMap<String, String>,
}

impl ParameterSet {
    #[must_use]
    pub const fn capability(&self) -> Option<Capability> {
        self.capability
    }

    #[must_use]
    pub const fn target(&self) -> Option<Target> {
        self.target
    }

    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Invoked application id (`appid`).
    #[must_use]
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// State store or pub/sub component name, depending on the capability.
    #[must_use]
    pub fn store(&self) -> &str {
        &self.store
    }

    #[must_use]
    pub const fn extensions(&self) -> &BTreeMap<String, String> {
        &self.extensions
    }

    /// Extension value for `key`, or `""` when the key was not given.
    #[must_use]
    pub fn extension(&self, key: &str) -> &str {
        self.extensions.get(key).map_or("", String::as_str)
    }
}

impl std::str::FromStr for ParameterSet {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_parameters(s)
    }
}

/// Renders the set back into the flat `key=value,...` form.
///
/// Target and capability use their canonical names. The output parses back
/// into an equal set as long as no value contains a `,`.
impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let named = [
            ("capability", self.capability.map_or("", Capability::as_str)),
            ("target", self.target.map_or("", Target::as_str)),
            ("method", self.method.as_str()),
            ("appid", self.app_id.as_str()),
            ("store", self.store.as_str()),
        ];
        let mut first = true;
        let entries = named
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .chain(
                self.extensions
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            );
        for (key, value) in entries {
            if !first {
                f.write_str(",")?;
            }
            first = false;
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}
