use anyhow::Context;
use clap::Parser;
use small_calc::utils::logger;
use small_calc::{CliConfig, Evaluation, Evaluator, OutputFormat};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入並驗證配置
    let settings = match cli.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    if settings.log_json {
        logger::init_json_logger(cli.verbose, &settings.log_level);
    } else {
        logger::init_cli_logger(cli.verbose, &settings.log_level);
    }
    tracing::debug!("Resolved settings: {:?}", settings);

    let evaluator = Evaluator::from_config(&settings);

    match evaluator.evaluate(&cli.operation) {
        Ok(result) => match settings.format {
            OutputFormat::Plain => println!("{}", result),
            OutputFormat::Json => {
                let evaluation = Evaluation {
                    operation: cli.operation.clone(),
                    policy: evaluator.policy(),
                    result,
                };
                let json = serde_json::to_string(&evaluation)
                    .context("Failed to serialize evaluation result")?;
                println!("{}", json);
            }
        },
        Err(e) => {
            tracing::error!(
                "{} failed: {} (Category: {:?}, Severity: {:?})",
                cli.operation.name(),
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
