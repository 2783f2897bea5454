//! Environment variable source: FILECAT__* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses FILECAT prefix and __ as separator for nested keys,
/// e.g. `FILECAT__CATALOG__SEED_SAMPLES=false`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("FILECAT")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
