//! Builder Module
//!
//! 解析オプション`ParseOptions`を段階的に構築するFluent Builder APIを提供する。
//! JSON設定からの読み込みにも対応する。

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::TabParseError;

/// 解析オプション
///
/// 各バックエンドは自分が認識するキーだけを読み、それ以外は無視します。
///
/// | バックエンド | キー |
/// | --- | --- |
/// | csv / fastcsv | `field_separator`, `row_separator` |
/// | fixed_width | `widths`（必須）, `row_separator` |
/// | excel | `worksheet`, `tempfile_name`, `tempfile_dir` |
///
/// # 使用例
///
/// ```rust
/// use tabparse::ParseOptions;
///
/// let options = ParseOptions::new()
///     .with_widths(vec![3, 2, 5])
///     .with_row_separator(";");
/// assert_eq!(options.widths(), Some(&[3, 2, 5][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// フィールド区切り文字（csv）
    field_separator: Option<String>,

    /// 行区切り文字（csv, fixed_width）
    row_separator: Option<String>,

    /// 各列の文字数（fixed_width）
    widths: Option<Vec<usize>>,

    /// シートインデックス（excel、0始まり）
    worksheet: Option<usize>,

    /// 一時ファイル名のプレフィックス（excel）
    tempfile_name: Option<String>,

    /// 一時ファイルを作成するディレクトリ（excel）
    tempfile_dir: Option<PathBuf>,
}

impl ParseOptions {
    /// すべてのキーが未指定のオプションを生成する
    pub fn new() -> Self {
        Self::default()
    }

    /// JSONオブジェクトからオプションを読み込む
    ///
    /// 未知のキーは無視されます。JSONとして不正な場合は
    /// `TabParseError::InvalidArgument`を返します。
    ///
    /// ```rust
    /// use tabparse::ParseOptions;
    ///
    /// # fn main() -> Result<(), tabparse::TabParseError> {
    /// let options = ParseOptions::from_json(r#"{"widths": [4, 4], "comment": "ignored"}"#)?;
    /// assert_eq!(options.widths(), Some(&[4, 4][..]));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, TabParseError> {
        serde_json::from_str(json)
            .map_err(|e| TabParseError::InvalidArgument(format!("Invalid options JSON: {}", e)))
    }

    pub fn with_field_separator(mut self, separator: impl Into<String>) -> Self {
        self.field_separator = Some(separator.into());
        self
    }

    pub fn with_row_separator(mut self, separator: impl Into<String>) -> Self {
        self.row_separator = Some(separator.into());
        self
    }

    /// 固定長パーサーの列幅を指定する
    ///
    /// 各要素は1以上でなければなりません（0は解析時に`InvalidArgument`）。
    pub fn with_widths(mut self, widths: Vec<usize>) -> Self {
        self.widths = Some(widths);
        self
    }

    pub fn with_worksheet(mut self, index: usize) -> Self {
        self.worksheet = Some(index);
        self
    }

    pub fn with_tempfile_name(mut self, name: impl Into<String>) -> Self {
        self.tempfile_name = Some(name.into());
        self
    }

    pub fn with_tempfile_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.tempfile_dir = Some(dir.into());
        self
    }

    pub fn field_separator(&self) -> Option<&str> {
        self.field_separator.as_deref()
    }

    pub fn row_separator(&self) -> Option<&str> {
        self.row_separator.as_deref()
    }

    pub fn widths(&self) -> Option<&[usize]> {
        self.widths.as_deref()
    }

    pub fn worksheet(&self) -> Option<usize> {
        self.worksheet
    }

    pub fn tempfile_name(&self) -> Option<&str> {
        self.tempfile_name.as_deref()
    }

    pub fn tempfile_dir(&self) -> Option<&Path> {
        self.tempfile_dir.as_deref()
    }
}
