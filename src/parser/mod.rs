//! Parser Module
//!
//! すべてのフォーマットバックエンドが実装する`Parser`トレイトと、
//! 各バックエンドの実装を提供します。

#[cfg(feature = "csv")]
mod delimited;
mod fixed_width;
#[cfg(feature = "xls")]
mod workbook;

#[cfg(feature = "csv")]
pub use delimited::{CsvParser, FastCsvParser};
pub use fixed_width::FixedWidthParser;
#[cfg(feature = "xls")]
pub use workbook::ExcelParser;

use std::path::Path;
use tracing::debug;

use crate::api::ParserId;
use crate::builder::ParseOptions;
use crate::error::TabParseError;
use crate::types::Table;

/// フォーマットバックエンドの共通インターフェース
///
/// 各呼び出しは入力とオプションだけに依存する純粋関数で、
/// 呼び出しのたびに新しい`Table`を返します。
///
/// # 実装例
///
/// `parse`だけを実装すれば、`load`はファイル全体を読み込んで`parse`に渡します。
///
/// ```rust
/// use tabparse::{ParseOptions, Parser, ParserId, Table, TabParseError};
///
/// struct LinesParser;
///
/// impl Parser for LinesParser {
///     fn id(&self) -> ParserId {
///         ParserId::FixedWidth
///     }
///
///     fn parse(&self, data: &[u8], _options: &ParseOptions) -> Result<Table, TabParseError> {
///         let text = String::from_utf8_lossy(data);
///         Ok(text.lines().map(|l| vec![l.to_string()]).collect())
///     }
/// }
///
/// let table = LinesParser.parse(b"a\nb", &ParseOptions::new()).unwrap();
/// assert_eq!(table, vec![vec!["a"], vec!["b"]]);
/// ```
pub trait Parser: Send + Sync {
    /// このバックエンドのフォーマット識別子
    fn id(&self) -> ParserId;

    /// ファイルを読み込んで解析する
    ///
    /// デフォルト実装はファイル全体をバイト列として読み込み、`parse`に渡します。
    /// ネイティブなファイルアクセスが必要なフォーマットはオーバーライドします。
    ///
    /// # 戻り値
    ///
    /// * `Ok(Table)` - 解析結果
    /// * `Err(TabParseError::Io)` - ファイルの読み込みに失敗した場合
    /// * その他 - `parse`が返すエラー
    fn load(&self, path: &Path, options: &ParseOptions) -> Result<Table, TabParseError> {
        debug!(parser = %self.id(), path = %path.display(), "loading file");
        let data = std::fs::read(path)?;
        self.parse(&data, options)
    }

    /// メモリ上のデータを解析する
    ///
    /// デフォルト実装は`TabParseError::UnsupportedOperation`を返します。
    ///
    /// # 戻り値
    ///
    /// * `Ok(Table)` - 解析結果
    /// * `Err(TabParseError::InvalidArgument)` - 必須オプションの欠落・不正
    /// * `Err(TabParseError::Format)` - データがフォーマットに適合しない
    fn parse(&self, _data: &[u8], _options: &ParseOptions) -> Result<Table, TabParseError> {
        Err(TabParseError::UnsupportedOperation {
            parser: self.id(),
            operation: "parse",
        })
    }
}

/// テキスト系バックエンド用のUTF-8デコード
pub(crate) fn decode_text(id: ParserId, data: &[u8]) -> Result<&str, TabParseError> {
    std::str::from_utf8(data).map_err(|e| {
        TabParseError::Format(format!("{} input is not valid UTF-8: {}", id, e))
    })
}
