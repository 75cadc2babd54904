//! 設定モジュール

use crate::error::ConfigError;
use crate::global;
use crate::logger::{Logger, StdoutLogger, TracingLogger};
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 出力バックエンドの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// 標準出力へそのまま書き出す
    #[default]
    Stdout,
    /// tracingへ転送する
    Tracing,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Stdout => f.write_str("stdout"),
            Backend::Tracing => f.write_str("tracing"),
        }
    }
}

/// アプリケーション設定
#[derive(Debug, Clone)]
pub struct Config {
    /// 出力バックエンド
    pub backend: Backend,
    /// tracingのフィルタ（RUST_LOG未設定時に使用）
    pub filter: String,
    /// ベースディレクトリ
    pub base_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::Stdout,
            filter: "info".to_string(),
            base_dir: global::default_base_dir(),
        }
    }
}

/// TOML設定ファイル用構造体
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    backend: Option<Backend>,
    filter: Option<String>,
    base_dir: Option<String>,
}

/// CLI引数
#[derive(Debug, Default)]
pub struct CliArgs {
    pub backend: Option<Backend>,
    pub filter: Option<String>,
}

impl Config {
    /// 設定を読み込む
    ///
    /// 優先順位: CLI引数 > 設定ファイル > デフォルト値
    pub fn load(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_file_path(), cli_args)
    }

    /// 指定パスの設定ファイルから読み込む（存在しなければデフォルト値）
    pub fn load_from(config_path: &Path, cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if config_path.exists() {
            let content = fs::read_to_string(config_path)?;
            let file_config: FileConfig = toml::from_str(&content)?;
            config.merge_file_config(&file_config);
        }

        config.merge_cli_args(cli_args);
        config.validate()?;

        Ok(config)
    }

    /// 設定ファイルのパスを取得
    pub fn config_file_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".logif").join("config.toml")
    }

    /// ファイル設定をマージ
    fn merge_file_config(&mut self, file_config: &FileConfig) {
        if let Some(backend) = file_config.backend {
            self.backend = backend;
        }
        if let Some(ref filter) = file_config.filter {
            self.filter = filter.clone();
        }
        if let Some(ref path) = file_config.base_dir {
            self.base_dir = PathBuf::from(path);
        }
    }

    /// CLI引数をマージ
    fn merge_cli_args(&mut self, cli_args: &CliArgs) {
        if let Some(backend) = cli_args.backend {
            self.backend = backend;
        }
        if let Some(ref filter) = cli_args.filter {
            self.filter = filter.clone();
        }
    }

    /// 設定値をバリデート
    fn validate(&self) -> Result<(), ConfigError> {
        if self.filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "filter must not be empty".to_string(),
            ));
        }
        if let Err(e) = EnvFilter::try_new(&self.filter) {
            return Err(ConfigError::InvalidValue(format!(
                "invalid filter '{}': {}",
                self.filter, e
            )));
        }
        if self.base_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue(
                "base_dir must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// 設定に対応するロガーを生成
    pub fn build_logger(&self) -> Arc<dyn Logger> {
        match self.backend {
            Backend::Stdout => Arc::new(StdoutLogger),
            Backend::Tracing => Arc::new(TracingLogger),
        }
    }

    /// プロセス全体のロガーとベースディレクトリに反映
    pub fn install(&self) {
        global::set_base_dir(self.base_dir.clone());
        global::set_shared_logger(self.build_logger());
        info!("ロガーを設定しました（バックエンド: {}）", self.backend);
    }
}
