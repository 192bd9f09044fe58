// Component identity record and its interface adapter
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use system_facade_core::domain::ComponentVersion;
use system_facade_core::error::FacadeError;
use system_facade_core::port::ComponentIdentity;

const NEUTRAL_CULTURE: &str = "neutral";
const NULL_TOKEN: &str = "null";

/// Concrete identity record of a component
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComponentName {
    pub name: String,
    pub version: Option<ComponentVersion>,
    /// `None` is culture-neutral
    pub culture: Option<String>,
    pub public_key_token: Option<Vec<u8>>,
}

impl ComponentName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Identity of a Cargo package
    ///
    /// # Example
    /// ```ignore
    /// let me = ComponentName::from_package(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
    /// ```
    pub fn from_package(name: &str, version: &str) -> Result<Self, FacadeError> {
        // Drop pre-release and build metadata: "1.2.3-beta+sha" -> "1.2.3"
        let numeric = version
            .split(['-', '+'])
            .next()
            .unwrap_or(version);
        Ok(Self {
            name: name.to_string(),
            version: Some(numeric.parse()?),
            ..Self::default()
        })
    }
}

impl FromStr for ComponentName {
    type Err = FacadeError;

    /// Parse `Name[, Version=..][, Culture=..][, PublicKeyToken=..]`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(str::trim);
        let name = parts.next().unwrap_or_default();
        if name.is_empty() || name.contains('=') {
            return Err(FacadeError::InvalidIdentity(format!(
                "'{}' does not start with a component name",
                s
            )));
        }

        let mut identity = ComponentName::new(name);
        let mut seen = HashSet::new();
        for part in parts {
            let (key, value) = part.split_once('=').ok_or_else(|| {
                FacadeError::InvalidIdentity(format!("expected key=value, found '{}'", part))
            })?;
            let key = key.trim().to_ascii_lowercase();
            let value = value.trim();
            if !seen.insert(key.clone()) {
                return Err(FacadeError::InvalidIdentity(format!(
                    "duplicate attribute '{}'",
                    key
                )));
            }

            match key.as_str() {
                "version" => identity.version = Some(value.parse()?),
                "culture" => {
                    identity.culture = (!value.eq_ignore_ascii_case(NEUTRAL_CULTURE)
                        && !value.is_empty())
                    .then(|| value.to_string());
                }
                "publickeytoken" => {
                    identity.public_key_token = if value.eq_ignore_ascii_case(NULL_TOKEN) {
                        None
                    } else {
                        Some(hex::decode(value).map_err(|e| {
                            FacadeError::InvalidIdentity(format!(
                                "invalid public key token '{}': {}",
                                value, e
                            ))
                        })?)
                    };
                }
                other => debug!(attribute = %other, "Ignoring unknown identity attribute"),
            }
        }

        Ok(identity)
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_interface().full_name())
    }
}

/// Interface view over a borrowed `ComponentName`
#[derive(Debug, Clone, Copy)]
pub struct ComponentNameWrap<'a> {
    inner: &'a ComponentName,
}

impl<'a> ComponentNameWrap<'a> {
    pub fn new(inner: &'a ComponentName) -> Self {
        Self { inner }
    }
}

impl ComponentIdentity for ComponentNameWrap<'_> {
    fn name(&self) -> &str {
        &self.inner.name
    }

    fn version(&self) -> Option<ComponentVersion> {
        self.inner.version
    }

    fn culture(&self) -> Option<&str> {
        self.inner.culture.as_deref()
    }

    fn public_key_token(&self) -> Option<&[u8]> {
        self.inner.public_key_token.as_deref()
    }
}

/// Conversion helpers from concrete records to their interface form
pub trait ComponentNameExt {
    fn to_interface(&self) -> ComponentNameWrap<'_>;
}

impl ComponentNameExt for ComponentName {
    fn to_interface(&self) -> ComponentNameWrap<'_> {
        ComponentNameWrap::new(self)
    }
}
