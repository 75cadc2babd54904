//! 条件付きエラーログモジュール
//!
//! エラーがある時だけ `[<file>:<line>] ...` 形式の1行をロガーへ渡す。
//! 呼び出し位置は `#[track_caller]` で取得する。

use crate::caller::file_name;
use crate::global;
use crate::logger::{Logger, Severity};
use std::fmt;
use std::panic::Location;

/// エラーがあれば現在のロガーへ出力
///
/// `message` が `None` または空文字列に整形される場合はエラーのみを出力する。
#[track_caller]
pub fn log_if<E>(severity: Severity, err: Option<&E>, message: Option<fmt::Arguments<'_>>)
where
    E: fmt::Display + ?Sized,
{
    if let Some(err) = err {
        let location = Location::caller();
        let line = format_line(file_name(location.file()), location.line(), err, message);
        global::logger().print(severity, &[&line]);
    }
}

/// 指定したロガーへ出力する版
#[track_caller]
pub fn log_if_to<E>(
    logger: &dyn Logger,
    severity: Severity,
    err: Option<&E>,
    message: Option<fmt::Arguments<'_>>,
) where
    E: fmt::Display + ?Sized,
{
    if let Some(err) = err {
        let location = Location::caller();
        let line = format_line(file_name(location.file()), location.line(), err, message);
        logger.print(severity, &[&line]);
    }
}

/// エラーがあればErrorとして出力
#[track_caller]
pub fn log_if_error<E>(err: Option<&E>, message: Option<fmt::Arguments<'_>>)
where
    E: fmt::Display + ?Sized,
{
    log_if(Severity::Error, err, message);
}

/// エラーがあればWarnとして出力
#[track_caller]
pub fn log_if_warn<E>(err: Option<&E>, message: Option<fmt::Arguments<'_>>)
where
    E: fmt::Display + ?Sized,
{
    log_if(Severity::Warn, err, message);
}

/// 出力行を組み立てる
///
/// - メッセージなし: `[<file>:<line>] <err>`
/// - メッセージあり: `[<file>:<line>] <message> Error: <err>`
pub fn format_line<E>(file: &str, line: u32, err: &E, message: Option<fmt::Arguments<'_>>) -> String
where
    E: fmt::Display + ?Sized,
{
    let message = message.map(|args| args.to_string()).unwrap_or_default();

    if message.is_empty() {
        format!("[{}:{}] {}", file, line, err)
    } else {
        format!("[{}:{}] {} Error: {}", file, line, message, err)
    }
}

/// エラーがあればErrorとして出力するマクロ
///
/// ```
/// let result: Result<(), std::io::Error> = Ok(());
/// logif::log_if_error!(result.as_ref().err());
/// logif::log_if_error!(result.as_ref().err(), "ファイル {} の読み込み", "a.toml");
/// ```
#[macro_export]
macro_rules! log_if_error {
    ($err:expr $(,)?) => {
        $crate::log_if($crate::Severity::Error, $err, ::core::option::Option::None)
    };
    ($err:expr, $($arg:tt)+) => {
        $crate::log_if(
            $crate::Severity::Error,
            $err,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// エラーがあればWarnとして出力するマクロ
#[macro_export]
macro_rules! log_if_warn {
    ($err:expr $(,)?) => {
        $crate::log_if($crate::Severity::Warn, $err, ::core::option::Option::None)
    };
    ($err:expr, $($arg:tt)+) => {
        $crate::log_if(
            $crate::Severity::Warn,
            $err,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}
