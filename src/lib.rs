//! logif - 差し替え可能なロガーと条件付きエラーログ
//!
//! ```
//! use logif::{log_if_error, set_logger, StdoutLogger};
//!
//! set_logger(StdoutLogger);
//! let result: Result<u32, std::num::ParseIntError> = "x".parse::<u32>();
//! log_if_error!(result.as_ref().err(), "ポート番号 {} の解析", "x");
//! ```

pub mod caller;
pub mod config;
pub mod error;
pub mod global;
pub mod log_if;
pub mod logger;
pub mod logging;

pub use caller::{caller, caller_at, file_name, function_name, simple_name, NOT_AVAILABLE};
pub use global::{base_dir, logger, set_base_dir, set_logger, set_shared_logger};
pub use log_if::{format_line, log_if, log_if_error, log_if_to, log_if_warn};
pub use logger::{Logger, Severity, StdoutLogger, TracingLogger};
