//! ロガー抽象モジュール

use std::fmt;
use std::io::{self, Write};
use tracing::{error, warn};

/// ログの重要度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warn,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warn => f.write_str("warn"),
        }
    }
}

/// ログ出力バックエンド
///
/// 出力先と整形はバックエンドに任せる。出力に失敗しても呼び出し元には伝えない。
pub trait Logger: Send + Sync {
    /// 文字列の並びを出力
    fn print(&self, severity: Severity, parts: &[&str]);
}

/// 標準出力へそのまま書き出すデフォルトバックエンド
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutLogger;

impl StdoutLogger {
    /// 任意のWriterへ書き出す
    fn write_to<W: Write>(writer: &mut W, parts: &[&str]) -> io::Result<()> {
        for part in parts {
            writer.write_all(part.as_bytes())?;
        }
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

impl Logger for StdoutLogger {
    fn print(&self, _severity: Severity, parts: &[&str]) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = Self::write_to(&mut handle, parts);
    }
}

/// tracingへ転送するバックエンド
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn print(&self, severity: Severity, parts: &[&str]) {
        let line = parts.concat();
        match severity {
            Severity::Error => error!(target: "logif", "{}", line),
            Severity::Warn => warn!(target: "logif", "{}", line),
        }
    }
}
