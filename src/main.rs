use clap::Parser;
use hubgen::config::domain::{resolve_domain_from_env, DomainPolicy};
use hubgen::core::Storage;
use hubgen::utils::bootstrap::{exit_with, load_settings};
use hubgen::utils::logger;
use hubgen::{
    CliConfig, GeneratorConfig, GeneratorEngine, LocalStorage, StaticPipeline, StdoutStorage,
};

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI config: {:?}", args);

    // The static generator uses the domain exactly as given.
    let domain = resolve_domain_from_env(args.domain.clone(), DomainPolicy::Verbatim)
        .unwrap_or_else(|e| exit_with(e));

    let settings = load_settings(args.config.as_deref())?;
    let config = GeneratorConfig::new(domain, settings);

    let result = if args.dry_run {
        run(StdoutStorage, config)
    } else {
        run(LocalStorage::new(&args.output_dir), config)
    };

    if let Err(e) = result {
        exit_with(e);
    }

    Ok(())
}

fn run<S: Storage>(storage: S, config: GeneratorConfig) -> hubgen::Result<()> {
    let engine = GeneratorEngine::new(StaticPipeline::new(storage, config));
    engine.run()?;
    Ok(())
}
