use clap::Parser;
use filecat::config::FilecatConfig;
use filecat::store::FileRecord;
use filecat::tooling::cli::{Cli, CliContext};

/// Context seeded with the sample catalog.
pub fn sample_context() -> CliContext {
    CliContext::new(FilecatConfig::default()).unwrap()
}

/// Context holding exactly the given records.
pub fn context_with(records: &[(&str, &str, u64, &str)]) -> CliContext {
    let mut config = FilecatConfig::default();
    config.catalog.seed_samples = false;
    for (name, ext, size, path) in records {
        config
            .catalog
            .records
            .push(FileRecord::new(name, ext, *size, path));
    }
    CliContext::new(config).unwrap()
}

/// The A/B/C catalog used across scenario tests.
pub fn scenario_context() -> CliContext {
    context_with(&[("A", "txt", 5, "/x"), ("B", "txt", 10, "/y"), ("C", "pdf", 3, "/z")])
}

/// Parse args and fold their catalog flags into a default config.
pub fn context_from_args(args: &[&str]) -> (Cli, CliContext) {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut config = FilecatConfig::default();
    if cli.no_samples {
        config.catalog.seed_samples = false;
    }
    config.catalog.records.extend(cli.add.iter().cloned());
    let ctx = CliContext::new(config).unwrap();
    (cli, ctx)
}

pub fn names(records: &[FileRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}
