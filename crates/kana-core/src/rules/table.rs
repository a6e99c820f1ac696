/// Embedded default rule dataset.
pub(crate) const DEFAULT_TOML: &str = include_str!("default_rules.toml");
