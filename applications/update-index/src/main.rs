/// Update Index - regroup media folders by artist
use clap::Parser;
use update_index::{report, AppConfig, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "update_index=info,folder_index=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.merge_cli(&cli);
    config.validate()?;

    let root = config.resolve_root()?;
    let options = config.index_options();
    tracing::info!("Root: {}", root.display());
    tracing::info!("Various artists folder: {}", options.various_artists_name);
    tracing::info!("Collision policy: {}", options.collision_policy.as_str());

    if cli.dry_run {
        let mapping = folder_index::plan_index(&root, &options)?;
        let plan = report::PlanReport::new(&root, &mapping);
        if cli.json {
            println!("{}", plan.to_json()?);
        } else {
            println!("{}", plan.render());
        }
        return Ok(());
    }

    let summary = folder_index::update_index(&root, &options)?;
    if cli.json {
        println!("{}", report::summary_json(&summary)?);
    } else {
        println!("{}", report::render_summary(&summary));
    }

    Ok(())
}
