use serde::Deserialize;

/// Runtime configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct RuntimeConf {
    /// How native functions report malformed calls
    pub native_arg_errors: NativeArgErrorPolicy,
}

impl RuntimeConf {
    /// Parse a configuration from TOML
    pub fn from_toml(source: &str) -> Result<Self, ConfError> {
        Ok(toml::from_str(source)?)
    }
}

/// Policy for native function calls with a wrong arity or wrong argument types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NativeArgErrorPolicy {
    /// Raise an argument error
    #[default]
    Raise,

    /// Return the function's fallback value instead, if it has one
    ///
    /// Functions without a fallback value still raise an argument error
    Fallback,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfError {
    #[error("invalid runtime configuration: {0}")]
    Parsing(#[from] toml::de::Error),
}
