use anyhow::Context;
use housegen_config::HousegenConfig;

use crate::cli::Cli;

/// Load layered configuration and apply command-line overrides on top.
pub fn load_config(cli: &Cli) -> anyhow::Result<HousegenConfig> {
    let mut config = HousegenConfig::load_with_dotenv(cli.config.as_deref())
        .context("failed to load housegen configuration")?;
    apply_overrides(&mut config, cli);
    Ok(config)
}

fn apply_overrides(config: &mut HousegenConfig, cli: &Cli) {
    if let Some(seed) = cli.seed {
        config.generation.seed = seed;
    }
    if let Some(dir) = &cli.data_dir {
        config.paths.data_dir.clone_from(dir);
    }
    if let Some(dir) = &cli.store_dir {
        config.paths.store_dir.clone_from(dir);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;

    #[test]
    fn flags_override_loaded_values() {
        let cli = Cli::try_parse_from(["housegen", "--seed", "9", "--data-dir", "corpora", "3"])
            .expect("cli should parse");
        let mut config = HousegenConfig::default();
        apply_overrides(&mut config, &cli);

        assert_eq!(config.generation.seed, 9);
        assert_eq!(config.paths.data_dir, PathBuf::from("corpora"));
        assert_eq!(config.paths.store_dir, PathBuf::from("data"));
    }
}
