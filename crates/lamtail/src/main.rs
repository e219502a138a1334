mod prompt;
mod target;

use clap::Parser;
use lamtail_cloudwatch::{CloudWatchLogs, Screen, Tailer};

#[derive(Parser)]
#[command(name = "lamtail", version)]
#[command(about = "Tail the CloudWatch logs of a Lambda function", long_about = None)]
struct Cli {
    /// Function ARN or function name. When omitted, the function is
    /// discovered from the Terraform state in the current directory.
    function: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let target = target::resolve(cli.function).await?;

    tracing::info!(
        function = %target.function_name,
        region = target.region.as_deref().unwrap_or("<default>"),
        "tailing"
    );

    let source = CloudWatchLogs::new(target.region).await;
    Tailer::new(source, Screen, &target.function_name).run().await?;
    Ok(())
}
