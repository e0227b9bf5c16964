//! Generator configuration.
//!
//! Configuration is resolved once at process startup and passed into [`Generator`] construction.
//! This crate never reads environment variables itself; binaries use [`BACKEND_ENV_VAR`] to
//! look up an override.
//!
//! [`Generator`]: crate::Generator

use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// Environment variable a binary may consult to pick the random backend.
pub const BACKEND_ENV_VAR: &str = "UUIDGEN_BACKEND";

/// Random source backend used by a generator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Backend {
    /// ISAAC-64 seeded from the operating system.
    #[default]
    Isaac64,
    /// ChaCha20 keystream keyed from the operating system.
    ChaCha20,
}

impl Backend {
    pub const ALL: [Backend; 2] = [Backend::Isaac64, Backend::ChaCha20];

    pub fn name(self) -> &'static str {
        match self {
            Backend::Isaac64 => "isaac64",
            Backend::ChaCha20 => "chacha20",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = UuidError;

    /// Parses a backend name, ignoring ASCII case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidConfig`] for an unknown name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Backend::ALL
            .into_iter()
            .find(|backend| backend.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                UuidError::InvalidConfig(format!(
                    "unknown backend '{}', expected one of: isaac64, chacha20",
                    name
                ))
            })
    }
}

/// Generator configuration resolved at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    backend: Backend,
}

impl GeneratorConfig {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Resolve configuration from an optional backend name.
    ///
    /// `None` or an empty name selects the default backend.
    pub fn from_backend_name(name: Option<&str>) -> UuidResult<Self> {
        match name.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(name) => Ok(Self::new(name.parse()?)),
        }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backend_is_isaac64() {
        assert_eq!(Backend::default(), Backend::Isaac64);
        assert_eq!(GeneratorConfig::default().backend(), Backend::Isaac64);
    }

    #[test]
    fn test_parse_backend_names() {
        assert_eq!("isaac64".parse::<Backend>().unwrap(), Backend::Isaac64);
        assert_eq!("ChaCha20".parse::<Backend>().unwrap(), Backend::ChaCha20);
        assert_eq!(" CHACHA20 ".parse::<Backend>().unwrap(), Backend::ChaCha20);
    }

    #[test]
    fn test_parse_unknown_backend() {
        match "mt19937".parse::<Backend>() {
            Err(UuidError::InvalidConfig(msg)) => {
                assert!(msg.contains("unknown backend 'mt19937'"));
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_display_round_trips() {
        for backend in Backend::ALL {
            assert_eq!(backend.to_string().parse::<Backend>().unwrap(), backend);
        }
    }

    #[test]
    fn test_from_backend_name() {
        assert_eq!(
            GeneratorConfig::from_backend_name(None).unwrap(),
            GeneratorConfig::default()
        );
        assert_eq!(
            GeneratorConfig::from_backend_name(Some("  ")).unwrap(),
            GeneratorConfig::default()
        );
        assert_eq!(
            GeneratorConfig::from_backend_name(Some("chacha20"))
                .unwrap()
                .backend(),
            Backend::ChaCha20
        );
        assert!(GeneratorConfig::from_backend_name(Some("xorshift")).is_err());
    }
}
