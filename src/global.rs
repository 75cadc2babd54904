//! プロセス全体で共有するロガーとベースディレクトリ
//!
//! どちらも同期化されたホルダーに保持する。差し替えは後勝ちで、
//! 差し替え完了後に発行された呼び出しから新しいインスタンスが使われる。

use crate::logger::{Logger, StdoutLogger};
use std::path::PathBuf;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

static LOGGER: OnceLock<RwLock<Arc<dyn Logger>>> = OnceLock::new();
static BASE_DIR: OnceLock<RwLock<PathBuf>> = OnceLock::new();

fn logger_slot() -> &'static RwLock<Arc<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Arc::new(StdoutLogger)))
}

fn base_dir_slot() -> &'static RwLock<PathBuf> {
    BASE_DIR.get_or_init(|| RwLock::new(default_base_dir()))
}

/// 実行ファイルのあるディレクトリ（取得できなければカレント）
pub(crate) fn default_base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// 現在のロガーを取得
///
/// ロックはArcの複製後すぐに解放されるため、出力中に差し替えを妨げない。
pub fn logger() -> Arc<dyn Logger> {
    let guard = logger_slot()
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&guard)
}

/// ロガーを差し替える
pub fn set_logger<L: Logger + 'static>(logger: L) {
    set_shared_logger(Arc::new(logger));
}

/// 共有済みのロガーに差し替える
pub fn set_shared_logger(logger: Arc<dyn Logger>) {
    let mut guard = logger_slot()
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = logger;
}

/// ベースディレクトリを取得
pub fn base_dir() -> PathBuf {
    base_dir_slot()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// ベースディレクトリを設定
pub fn set_base_dir<P: Into<PathBuf>>(dir: P) {
    let mut guard = base_dir_slot()
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = dir.into();
}
