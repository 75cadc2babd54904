//! logif - 条件付きエラーログのデモCLI

mod cli;

use anyhow::Result;

fn main() -> Result<()> {
    cli::run()
}
