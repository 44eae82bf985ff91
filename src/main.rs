use clap::Parser;
use tower_lsp::{LspService, Server};
use tracing::{debug, info};

use japy_language_server::dialect::{all_tables, coverage};
use japy_language_server::logging::init_logger;
use japy_language_server::lsp::backend::JapyBackend;
use japy_language_server::lsp::config::ServerConfig;
use japy_language_server::wire_logger_middleware::{LoggingReader, LoggingWriter};

/// Language server offering JaPy completions over stdio
#[derive(Debug, Parser)]
#[command(name = "japy-language-server", version, about)]
struct Args {
    /// Accepted for clients that pass it; stdin/stdout is the only transport
    #[arg(long)]
    stdio: bool,

    /// Log level for stderr, e.g. "debug" or "japy_language_server=trace" (defaults to RUST_LOG, then "info")
    #[arg(long)]
    log_level: Option<String>,

    /// Disable ANSI colors in stderr output
    #[arg(long)]
    no_color: bool,

    /// Do not write a session log to the user cache directory
    #[arg(long)]
    no_file_logging: bool,

    /// Record every JSON-RPC message in a wire log next to the session log
    #[arg(long)]
    wire_log: bool,

    /// Language identifier to register completions for (env: JAPY_LANGUAGE_ID)
    #[arg(long)]
    language_id: Option<String>,

    /// Glob of JaPy files to register completions for (env: JAPY_FILE_PATTERN)
    #[arg(long)]
    file_pattern: Option<String>,

    /// Check the dialect tables against Python's keywords and built-ins, then exit
    #[arg(long)]
    validate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (_guard, wire_logger) = init_logger(
        args.no_color,
        args.log_level.as_deref(),
        !args.no_file_logging && !args.validate,
        args.wire_log,
    )?;

    if args.validate {
        let code = coverage::run_validation(all_tables());
        if code != 0 {
            std::process::exit(code);
        }
        return Ok(());
    }

    if args.stdio {
        debug!("--stdio given; stdin/stdout is already the transport");
    }

    let config = ServerConfig::from_env_or_default().with_overrides(args.language_id, args.file_pattern);
    info!(
        "Starting JaPy language server {} for '{}' ({}) on stdio",
        env!("CARGO_PKG_VERSION"),
        config.language_id,
        config.file_pattern
    );

    let stdin = LoggingReader::new(tokio::io::stdin(), wire_logger.clone());
    let stdout = LoggingWriter::new(tokio::io::stdout(), wire_logger);

    let (service, socket) = LspService::new(|client| JapyBackend::new(client, config));
    Server::new(stdin, stdout, socket).serve(service).await;

    info!("JaPy language server exited");
    Ok(())
}
