use clap::Parser;
use hubgen::config::domain::{resolve_domain_from_env, DomainPolicy};
use hubgen::core::Storage;
use hubgen::utils::bootstrap::{exit_with, load_settings};
use hubgen::utils::logger;
use hubgen::{
    DiscoveryCliConfig, DiscoveryPipeline, GeneratorConfig, GeneratorEngine, LocalStorage,
    StdoutStorage,
};

fn main() -> anyhow::Result<()> {
    // A missing .env is fine.
    dotenvy::dotenv().ok();

    let args = DiscoveryCliConfig::parse();

    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI config: {:?}", args);

    let domain = resolve_domain_from_env(args.domain.clone(), DomainPolicy::Trimmed)
        .unwrap_or_else(|e| exit_with(e));

    let settings = load_settings(args.config.as_deref())?;
    let config = GeneratorConfig::new(domain, settings);

    let result = if args.dry_run {
        run(StdoutStorage, config, &args.root)
    } else {
        run(LocalStorage::new(args.output_dir()), config, &args.root)
    };

    if let Err(e) = result {
        exit_with(e);
    }

    Ok(())
}

fn run<S: Storage>(storage: S, config: GeneratorConfig, root: &str) -> hubgen::Result<()> {
    let engine = GeneratorEngine::new(DiscoveryPipeline::new(storage, config, root));
    engine.run()?;
    Ok(())
}
