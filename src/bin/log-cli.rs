use clap::Parser;

use function_logging::observability::logging::init_tracing;
use function_logging::{Context, Logging, Metadata, Operand, Severity};

#[derive(Parser)]
#[command(name = "log-cli")]
#[command(about = "Write a single entry through the function logger", long_about = None)]
struct Cli {
    /// Severity of the entry (default, debug, info, notice, warning, error, critical, alert, emergency)
    #[arg(short, long, default_value = "info")]
    severity: Severity,

    /// Execution id to tag the entry with
    #[arg(short, long)]
    execution_id: Option<String>,

    /// Message words, joined by spaces
    #[arg(required = true)]
    message: Vec<String>,
}

#[tokio::main]
async fn main() {
    init_tracing("function_logging=warn");
    let cli = Cli::parse();

    let logging = Logging::init();
    let ctx = cli
        .execution_id
        .map(|id| Context::new().with_metadata(Metadata::new(id)));

    let operands: Vec<&dyn Operand> = cli.message.iter().map(|word| word as &dyn Operand).collect();
    logging.logger(ctx.as_ref(), cli.severity).println(&operands);

    if let Err(e) = logging.flush().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
