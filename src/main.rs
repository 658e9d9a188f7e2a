use dotenv::dotenv;
use jobfeed::{FetchConfig, FetchTask, RequestClient, print_summary};
use log::{LevelFilter, error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();

    if let Err(err) = run().await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = FetchConfig::new()?;
    info!(
        "fetching {} into {} ({:?} mode)",
        config.url,
        config.output_path.display(),
        config.mode
    );

    let client = RequestClient::new()?;
    let task = FetchTask::new(config);

    match task.run(&client).await {
        Ok(report) => {
            println!("Data has been saved to {}!", report.output_path.display());
            if let Some(document) = &report.document {
                print_summary(document);
            }
            Ok(())
        }
        Err(err) => {
            if let Some(excerpt) = err.body_excerpt() {
                error!("raw response excerpt: {excerpt}");
            }
            Err(err.into())
        }
    }
}
