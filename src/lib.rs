pub mod dialect;
pub mod logging;
pub mod lsp;
pub mod wire_logger;
pub mod wire_logger_middleware;
