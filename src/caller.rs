//! 呼び出し元解析モジュール
//!
//! スタックを辿って関数名を得るのは診断用のベストエフォート。
//! 解決できない場合は常に `"n/a"` を返し、パニックしない。
//! 最適化ビルドでは末尾呼び出しやインライン化でフレームが消えるため、
//! スタック解析は `debug_assertions` 有効時のみ行い、それ以外は `"n/a"`。
//! 呼び出し位置が分かっている場合は `function_name!` や
//! `std::panic::Location` を使う方が確実。

use tracing::trace;

/// 解決できなかった場合の番兵値
pub const NOT_AVAILABLE: &str = "n/a";

/// `caller_at` 自身のシンボル名の末尾
const ANCHOR_SUFFIX: &str = "caller::caller_at";

/// 囲んでいる関数の完全修飾名をコンパイル時に得る
///
/// ```
/// fn handler() -> &'static str {
///     logif::function_name!()
/// }
/// assert!(handler().ends_with("handler"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __logif_marker() {}
        fn __logif_type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __logif_type_name_of(__logif_marker);
        name.strip_suffix("::__logif_marker").unwrap_or(name)
    }};
}

/// 呼び出し元の呼び出し元の完全修飾名を取得
///
/// ヘルパー関数の中から呼ぶと、そのヘルパーを呼んだ関数の名前を返す。
#[inline(never)]
pub fn caller() -> String {
    caller_at(2)
}

/// 呼び出し元の関数名（パスを除いた名前）を取得
#[inline(never)]
pub fn function_name() -> String {
    simple_name(&caller_at(1)).to_string()
}

/// 指定した深さのフレームの完全修飾名を取得
///
/// 深さ0は `caller_at` を呼んだ関数、1はその呼び出し元。
/// フレームが足りない、シンボルが解決できない、
/// またはデバッグビルドでなければ `"n/a"`。
#[inline(never)]
pub fn caller_at(depth: usize) -> String {
    if !cfg!(debug_assertions) {
        return NOT_AVAILABLE.to_string();
    }

    let names = frame_names();

    let Some(anchor) = names
        .iter()
        .position(|name| name.as_deref().is_some_and(|n| n.ends_with(ANCHOR_SUFFIX)))
    else {
        trace!("スタック上に基準フレームが見つかりません");
        return NOT_AVAILABLE.to_string();
    };

    match depth
        .checked_add(anchor + 1)
        .and_then(|index| names.get(index))
    {
        Some(Some(name)) if !name.is_empty() => name.clone(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// 現在のスタックを論理フレーム単位の名前に展開
///
/// インライン展開されたシンボルはそれぞれ1フレームとして数える。
/// シンボルを持たないフレームは `None`。
fn frame_names() -> Vec<Option<String>> {
    let mut names = Vec::new();

    backtrace::trace(|frame| {
        let before = names.len();
        backtrace::resolve_frame(frame, |symbol| {
            names.push(symbol.name().map(|name| format!("{:#}", name)));
        });
        if names.len() == before {
            names.push(None);
        }
        true
    });

    names
}

/// 完全修飾名から最後の要素だけを取り出す
///
/// クロージャの場合は囲んでいる関数名を返す。`::` を含まなければそのまま。
pub fn simple_name(full: &str) -> &str {
    full.rsplit("::")
        .find(|segment| !segment.is_empty() && *segment != "{{closure}}")
        .unwrap_or(full)
}

/// パスからファイル名部分を取り出す
pub fn file_name(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline(never)]
    fn diagnostic_helper() -> String {
        caller()
    }

    #[inline(never)]
    fn outer_function() -> String {
        diagnostic_helper()
    }

    #[inline(never)]
    fn named_function() -> String {
        function_name()
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("/a/b/c.ext"), "c.ext");
        assert_eq!(file_name("noslash"), "noslash");
        assert_eq!(file_name(""), "");
        assert_eq!(file_name("dir/"), "");
    }

    #[test]
    fn test_file_name_backslash() {
        assert_eq!(file_name(r"src\bin\main.rs"), "main.rs");
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(simple_name("logif::caller::tests::outer"), "outer");
        assert_eq!(simple_name("main"), "main");
        assert_eq!(simple_name(""), "");
        assert_eq!(simple_name(NOT_AVAILABLE), NOT_AVAILABLE);
    }

    #[test]
    fn test_simple_name_skips_closure() {
        assert_eq!(simple_name("app::run::{{closure}}"), "run");
        assert_eq!(simple_name("app::run::{{closure}}::{{closure}}"), "run");
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_caller_returns_callers_caller() {
        let name = outer_function();
        assert!(name.ends_with("tests::outer_function"), "got: {}", name);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_function_name_returns_simple_name() {
        assert_eq!(named_function(), "named_function");
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn test_stack_walk_disabled_in_release() {
        assert_eq!(outer_function(), NOT_AVAILABLE);
        assert_eq!(named_function(), NOT_AVAILABLE);
        assert_eq!(caller_at(0), NOT_AVAILABLE);
    }

    #[test]
    fn test_caller_at_too_deep_returns_sentinel() {
        assert_eq!(caller_at(100_000), NOT_AVAILABLE);
    }

    #[test]
    fn test_function_name_macro() {
        let name = crate::function_name!();
        assert!(name.ends_with("tests::test_function_name_macro"), "got: {}", name);
        assert_eq!(simple_name(name), "test_function_name_macro");
    }

    #[test]
    fn test_function_name_macro_in_closure() {
        let name = (|| crate::function_name!())();
        assert_eq!(simple_name(name), "test_function_name_macro_in_closure");
    }
}
