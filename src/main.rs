mod config;
mod db;
mod ledger;
mod logger;
mod modules;
mod scan;
mod utils;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let _guard = logger::init_logging();

    modules::menu().await
}
