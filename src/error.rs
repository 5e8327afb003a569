use std::path::PathBuf;

use thiserror::Error;

// 呼び出し側で区別したいエラー
// それ以外は anyhow の context で包む
#[derive(Debug, Error)]
pub enum ClippingError {
    #[error("Failed to decode {path} as UTF-8")]
    Decode { path: PathBuf },

    #[error("Pattern for clipping:\n\n{0}\n\nis not defined")]
    MalformedRecord(String),

    #[error("Unknown type of clipping: {0}")]
    UnknownAnnotationType(String),

    #[error("{0} is not a directory")]
    TargetNotDirectory(PathBuf),
}
