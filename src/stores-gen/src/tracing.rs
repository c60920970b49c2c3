use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Parser)]
pub struct TracingCliArgs {
    #[arg(long, default_value = "info")]
    pub log_level: Level,
}

impl TracingCliArgs {
    pub fn init(&self) -> Result<(), anyhow::Error> {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(self.log_level)
            .finish();

        Ok(tracing::subscriber::set_global_default(subscriber)?)
    }
}
