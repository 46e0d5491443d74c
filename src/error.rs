//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

use crate::api::ParserId;

/// tabparseクレート全体で使用するエラー型
///
/// ファイルの読み込み、各バックエンドによる解析、レジストリ経由の
/// ディスパッチ中に発生するすべてのエラーを統一的に扱います。
///
/// # エラーの種類
///
/// - `InvalidArgument`: 必須オプションの欠落、またはオプション値が不正
/// - `Format`: 入力データが想定フォーマットに適合しない
/// - `UnsupportedOperation`: バックエンドが対応していない操作
/// - `Io`: ファイルの読み書き・削除の失敗
///
/// # 使用例
///
/// ```rust
/// use tabparse::{FixedWidthParser, ParseOptions, Parser, TabParseError};
///
/// let result = FixedWidthParser.parse(b"abc", &ParseOptions::new());
/// assert!(matches!(result, Err(TabParseError::InvalidArgument(_))));
/// ```
#[derive(Error, Debug)]
pub enum TabParseError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 必須オプションが指定されていない、または値が不正
    ///
    /// 例: 固定長パーサーに`widths`を指定しなかった場合
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// 入力データがバックエンドのフォーマットに適合しない
    ///
    /// 不正なCSV、破損したワークブック、UTF-8として不正なテキストなど。
    #[error("Format error: {0}")]
    Format(String),

    /// バックエンドが対応していない操作が呼び出された
    #[error("Parser '{parser}' does not support {operation}")]
    UnsupportedOperation {
        /// 呼び出されたパーサー
        parser: ParserId,
        /// 操作名（`parse`、`load`）
        operation: &'static str,
    },

    /// 指定されたパーサーがレジストリに登録されていない
    ///
    /// 対応するCargo featureが無効化されている場合に発生します。
    #[error("Parser '{0}' is not available")]
    ParserUnavailable(ParserId),

    /// 未知のフォーマット識別子
    #[error("Unknown parser identifier: '{0}'")]
    InvalidParserId(String),
}

#[cfg(feature = "csv")]
impl From<csv::Error> for TabParseError {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => TabParseError::Io(e),
            _ => TabParseError::Format(message),
        }
    }
}

#[cfg(feature = "xls")]
impl From<calamine::Error> for TabParseError {
    fn from(err: calamine::Error) -> Self {
        // フォーマット別エラーに包まれたI/Oエラーも取り出す
        match err {
            calamine::Error::Io(e)
            | calamine::Error::Xls(calamine::XlsError::Io(e))
            | calamine::Error::Xlsx(calamine::XlsxError::Io(e))
            | calamine::Error::Xlsb(calamine::XlsbError::Io(e))
            | calamine::Error::Ods(calamine::OdsError::Io(e)) => TabParseError::Io(e),
            other => TabParseError::Format(other.to_string()),
        }
    }
}
