// Component Version - dotted numeric version used by identity records

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::FacadeError;

/// Version with 2 to 4 numeric components (`major.minor[.build[.revision]]`)
///
/// Missing trailing components stay `None` so that display is lossless:
/// `"1.2"` parses and prints back as `"1.2"`, not `"1.2.0.0"`. A revision
/// is only ever present together with a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ComponentVersion {
    major: u32,
    minor: u32,
    build: Option<u32>,
    revision: Option<u32>,
}

impl ComponentVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            build: None,
            revision: None,
        }
    }

    pub fn with_build(mut self, build: u32) -> Self {
        self.build = Some(build);
        self
    }

    /// Set the revision; implies a build component of 0 if absent
    pub fn with_revision(mut self, revision: u32) -> Self {
        self.build = Some(self.build.unwrap_or(0));
        self.revision = Some(revision);
        self
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn build(&self) -> Option<u32> {
        self.build
    }

    pub fn revision(&self) -> Option<u32> {
        self.revision
    }
}

impl fmt::Display for ComponentVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(build) = self.build {
            write!(f, ".{}", build)?;
            if let Some(revision) = self.revision {
                write!(f, ".{}", revision)?;
            }
        }
        Ok(())
    }
}

impl FromStr for ComponentVersion {
    type Err = FacadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .trim()
            .split('.')
            .map(|part| {
                part.parse::<u32>().map_err(|_| {
                    FacadeError::InvalidIdentity(format!("invalid version component '{}'", part))
                })
            })
            .collect::<Result<Vec<u32>, _>>()?;

        match parts.as_slice() {
            [major, minor] => Ok(Self::new(*major, *minor)),
            [major, minor, build] => Ok(Self::new(*major, *minor).with_build(*build)),
            [major, minor, build, revision] => Ok(Self::new(*major, *minor)
                .with_build(*build)
                .with_revision(*revision)),
            _ => Err(FacadeError::InvalidIdentity(format!(
                "version '{}' must have 2 to 4 components",
                s
            ))),
        }
    }
}
