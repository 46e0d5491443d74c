//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

use std::fmt;
use std::str::FromStr;

use crate::error::TabParseError;

/// フォーマット識別子
///
/// レジストリからバックエンドを引くためのキーです。
/// 識別子自体は常に存在しますが、対応するバックエンドが登録されているかは
/// 有効なCargo featureに依存します（[`crate::available_parsers`]を参照）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum ParserId {
    /// 区切り文字テキスト（基本実装）
    ///
    /// 1行ごとに`csv::StringRecord`を生成します。
    Csv,

    /// 区切り文字テキスト（高速実装）
    ///
    /// 単一の`csv::ByteRecord`を使い回します。`Csv`と同じ結果を返します。
    FastCsv,

    /// スプレッドシート（XLSなどのバイナリワークブック）
    Excel,

    /// 固定長テキスト
    FixedWidth,
}

impl ParserId {
    /// すべての識別子
    pub const ALL: [ParserId; 4] = [
        ParserId::Csv,
        ParserId::FastCsv,
        ParserId::Excel,
        ParserId::FixedWidth,
    ];

    /// 識別子の文字列表現
    ///
    /// ```rust
    /// use tabparse::ParserId;
    ///
    /// assert_eq!(ParserId::FixedWidth.as_str(), "fixed_width");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ParserId::Csv => "csv",
            ParserId::FastCsv => "fastcsv",
            ParserId::Excel => "excel",
            ParserId::FixedWidth => "fixed_width",
        }
    }
}

impl fmt::Display for ParserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParserId {
    type Err = TabParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParserId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| TabParseError::InvalidParserId(s.to_string()))
    }
}
