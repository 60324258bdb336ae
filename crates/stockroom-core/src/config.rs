/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize` (use `#[serde(default = ...)]` for
/// optional keys) and call `Config::from_env()` at startup. Field `foo_bar`
/// is read from env var `FOO_BAR`.
pub trait Config: Sized + serde::de::DeserializeOwned {
    /// # Panics
    ///
    /// Panics if any required env var is missing or cannot be deserialized.
    fn from_env() -> Self {
        envy::from_env().expect("failed to load config from environment")
    }

    /// Load from explicit key/value pairs using the same rules as `from_env`.
    fn from_vars<I, K, V>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        envy::from_iter(vars.into_iter().map(|(k, v)| (k.into(), v.into())))
    }
}
