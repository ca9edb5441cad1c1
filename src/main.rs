use clap::Parser;
use devcracks::utils::{logger, validation::Validate};
use devcracks::{CliConfig, DevcracksError, Dispatcher, PipDelegate, PypiClient, PythonRuntime};

fn fail(e: DevcracksError) -> ! {
    tracing::error!(
        "❌ devcracks failed: {} (Category: {:?})",
        e,
        e.category()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(e);
    }

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => fail(e),
    };
    if let Err(e) = settings.validate() {
        fail(e);
    }
    tracing::debug!("Effective settings: {:?}", settings);

    let registry = match PypiClient::new(settings.registry_url()) {
        Ok(registry) => registry,
        Err(e) => fail(e),
    };
    let python = settings.python_executable();
    let dispatcher = Dispatcher::new(
        registry,
        PipDelegate::new(python),
        PythonRuntime::new(python),
    );

    let action = config.action();
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = dispatcher.run(&action, &mut stdout).await {
        fail(e);
    }
}
