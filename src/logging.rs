//! ログインフラモジュール

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログシステムを初期化
///
/// RUST_LOG環境変数が設定されていればそちらを優先し、
/// なければ `default_filter`（設定ファイルの `filter`）を使う。
/// `TracingLogger` の出力もここで設定した先（stderr）へ流れる。
pub fn init(default_filter: &str) {
    tracing_subscriber::registry()
        .with(build_filter(default_filter))
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn build_filter(default_filter: &str) -> EnvFilter {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(env_directives.as_deref(), default_filter)
}

/// 環境変数の値 > 設定値 > `info` の順で最初に解釈できたものを使う
fn filter_from(env_directives: Option<&str>, default_filter: &str) -> EnvFilter {
    env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(default_filter).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    // ログ初期化は1回しか呼べないため、フィルタ構築のみ確認
    #[test]
    fn test_filter_uses_default_directive() {
        let filter = filter_from(None, "logif=warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_filter_falls_back_to_info_on_invalid() {
        let filter = filter_from(None, "logif=notalevel");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_filter_env_overrides_default() {
        let filter = filter_from(Some("debug"), "logif=warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_filter_invalid_env_uses_default() {
        let filter = filter_from(Some("logif=notalevel"), "warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }
}
