//! Parser Registry Module
//!
//! バックエンドを識別子で引くためのレジストリ。
//! 各バックエンドはファクトリ関数として登録され、ファクトリが`None`を返した
//! バックエンド（Cargo featureで無効化されたもの）はレジストリに現れない。

use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::api::ParserId;
use crate::builder::ParseOptions;
use crate::error::TabParseError;
use crate::parser::{FixedWidthParser, Parser};
use crate::types::Table;

/// バックエンドのファクトリ
///
/// 依存クレートが利用できない場合は`None`を返します。
pub type ParserFactory = fn() -> Option<Box<dyn Parser>>;

/// 組み込みバックエンドのファクトリ一覧
const BUILTIN_FACTORIES: &[ParserFactory] = &[
    csv_factory,
    fast_csv_factory,
    excel_factory,
    fixed_width_factory,
];

#[cfg(feature = "csv")]
fn csv_factory() -> Option<Box<dyn Parser>> {
    Some(Box::new(crate::parser::CsvParser))
}

#[cfg(not(feature = "csv"))]
fn csv_factory() -> Option<Box<dyn Parser>> {
    None
}

#[cfg(feature = "csv")]
fn fast_csv_factory() -> Option<Box<dyn Parser>> {
    Some(Box::new(crate::parser::FastCsvParser))
}

#[cfg(not(feature = "csv"))]
fn fast_csv_factory() -> Option<Box<dyn Parser>> {
    None
}

#[cfg(feature = "xls")]
fn excel_factory() -> Option<Box<dyn Parser>> {
    Some(Box::new(crate::parser::ExcelParser))
}

#[cfg(not(feature = "xls"))]
fn excel_factory() -> Option<Box<dyn Parser>> {
    None
}

fn fixed_width_factory() -> Option<Box<dyn Parser>> {
    Some(Box::new(FixedWidthParser))
}

/// プロセス全体のレジストリ（初回アクセス時に一度だけ構築）
static REGISTRY: Lazy<ParserRegistry> = Lazy::new(ParserRegistry::builtin);

/// 識別子からバックエンドを引くレジストリ
///
/// 構築後は不変なので、複数スレッドから同時に参照できます。
///
/// # 使用例
///
/// ```rust
/// use tabparse::{ParserId, ParserRegistry};
///
/// let registry = ParserRegistry::builtin();
/// assert!(registry.contains(ParserId::FixedWidth));
/// ```
pub struct ParserRegistry {
    parsers: BTreeMap<ParserId, Box<dyn Parser>>,
}

impl ParserRegistry {
    /// ファクトリ一覧からレジストリを構築する
    ///
    /// `None`を返したファクトリは無視されます。同じ識別子が複数回現れた場合は
    /// 最初の登録が残ります。
    pub fn from_factories(factories: &[ParserFactory]) -> Self {
        let mut parsers: BTreeMap<ParserId, Box<dyn Parser>> = BTreeMap::new();
        let mut skipped = 0usize;

        for factory in factories {
            match factory() {
                Some(parser) => {
                    parsers.entry(parser.id()).or_insert(parser);
                }
                None => skipped += 1,
            }
        }

        debug!(
            registered = ?parsers.keys().collect::<Vec<_>>(),
            skipped,
            "parser registry built"
        );
        Self { parsers }
    }

    /// 組み込みバックエンドからレジストリを構築する
    pub fn builtin() -> Self {
        Self::from_factories(BUILTIN_FACTORIES)
    }

    /// 登録済みの識別子一覧（順序は保証しない）
    pub fn available(&self) -> Vec<ParserId> {
        self.parsers.keys().copied().collect()
    }

    pub fn contains(&self, id: ParserId) -> bool {
        self.parsers.contains_key(&id)
    }

    /// 識別子に対応するバックエンドを取得する
    pub fn get(&self, id: ParserId) -> Option<&dyn Parser> {
        self.parsers.get(&id).map(|parser| parser.as_ref())
    }

    fn require(&self, id: ParserId) -> Result<&dyn Parser, TabParseError> {
        self.get(id).ok_or(TabParseError::ParserUnavailable(id))
    }

    /// 指定したバックエンドでファイルを読み込む
    pub fn load(
        &self,
        id: ParserId,
        path: &Path,
        options: &ParseOptions,
    ) -> Result<Table, TabParseError> {
        self.require(id)?.load(path, options)
    }

    /// 指定したバックエンドでメモリ上のデータを解析する
    pub fn parse(
        &self,
        id: ParserId,
        data: &[u8],
        options: &ParseOptions,
    ) -> Result<Table, TabParseError> {
        self.require(id)?.parse(data, options)
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("parsers", &self.available())
            .finish()
    }
}

/// プロセス全体のレジストリに登録されているバックエンドの識別子一覧
///
/// 依存クレートが無効化されたバックエンドは含まれません。このメソッドは失敗しません。
///
/// ```rust
/// use tabparse::{available_parsers, ParserId};
///
/// assert!(available_parsers().contains(&ParserId::FixedWidth));
/// ```
pub fn available_parsers() -> Vec<ParserId> {
    REGISTRY.available()
}

/// プロセス全体のレジストリからバックエンドを取得する
pub fn parser(id: ParserId) -> Option<&'static dyn Parser> {
    REGISTRY.get(id)
}

/// 識別子を指定してファイルを読み込む
///
/// # 戻り値
///
/// * `Err(TabParseError::ParserUnavailable)` - バックエンドが登録されていない場合
/// * その他 - バックエンドの`load`の結果
pub fn load(id: ParserId, path: &Path, options: &ParseOptions) -> Result<Table, TabParseError> {
    REGISTRY.load(id, path, options)
}

/// 識別子を指定してメモリ上のデータを解析する
///
/// ```rust
/// use tabparse::{parse, ParseOptions, ParserId};
///
/// # fn main() -> Result<(), tabparse::TabParseError> {
/// let options = ParseOptions::new().with_widths(vec![4, 4]);
/// let table = parse(ParserId::FixedWidth, b"ab", &options)?;
/// assert_eq!(table, vec![vec!["ab", ""]]);
/// # Ok(())
/// # }
/// ```
pub fn parse(id: ParserId, data: &[u8], options: &ParseOptions) -> Result<Table, TabParseError> {
    REGISTRY.parse(id, data, options)
}
