//! CLIモジュール

use anyhow::Result;
use clap::{Parser, Subcommand};
use logif::config::{Backend, CliArgs, Config};
use logif::{logging, Severity};
use thiserror::Error;
use tracing::debug;

/// logif - 条件付きエラーログのデモ
#[derive(Parser, Debug)]
#[command(name = "logif")]
#[command(about = "エラーがある時だけログを出力する", long_about = None)]
pub struct Cli {
    /// 出力バックエンド
    #[arg(short, long, global = true, value_enum)]
    pub backend: Option<Backend>,

    /// tracingのフィルタ（RUST_LOG未設定時）
    #[arg(short, long, global = true)]
    pub filter: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// サブコマンド
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// エラーがあれば1行出力
    Emit {
        /// エラーメッセージ（省略時は何も出力しない）
        #[arg(short, long)]
        error: Option<String>,

        /// 文脈メッセージ
        #[arg(short, long)]
        context: Option<String>,

        /// Warnとして出力
        #[arg(short, long)]
        warn: bool,
    },
    /// 有効な設定を表示
    Config,
}

/// CLIから渡されたエラー
#[derive(Error, Debug)]
#[error("{0}")]
struct CliError(String);

/// CLIエントリポイント
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let cli_args = CliArgs {
        backend: cli.backend,
        filter: cli.filter,
    };
    let config = Config::load(&cli_args)?;
    logging::init(&config.filter);

    match cli.command {
        Commands::Emit {
            error,
            context,
            warn,
        } => {
            config.install();

            let severity = if warn { Severity::Warn } else { Severity::Error };
            let err = error.map(CliError);
            debug!("emit: severity={} error={:?}", severity, err);

            match context {
                Some(ref context) => {
                    logif::log_if(severity, err.as_ref(), Some(format_args!("{}", context)))
                }
                None => logif::log_if(severity, err.as_ref(), None),
            }
        }
        Commands::Config => {
            println!("config_file = {}", Config::config_file_path().display());
            println!("backend     = {}", config.backend);
            println!("filter      = {}", config.filter);
            println!("base_dir    = {}", config.base_dir.display());
        }
    }

    Ok(())
}
