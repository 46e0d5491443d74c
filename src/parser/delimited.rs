//! Delimited-Text Parsers
//!
//! `csv`クレートにトークナイズを委譲する区切り文字テキストのバックエンド。
//! このモジュールは汎用オプション名を`csv::ReaderBuilder`の設定に変換するだけで、
//! クォートやエスケープの規則はすべて`csv`クレートに従う。

use csv::{ByteRecord, ReaderBuilder, Terminator};
use tracing::debug;

use crate::api::ParserId;
use crate::builder::ParseOptions;
use crate::error::TabParseError;
use crate::parser::{decode_text, Parser};
use crate::types::Table;

/// オプションから`ReaderBuilder`を構築する
///
/// 未指定のキーは`csv`クレートのデフォルト（`,`とCRLF/LF）のまま。
fn reader_builder(options: &ParseOptions) -> Result<ReaderBuilder, TabParseError> {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true);

    if let Some(separator) = options.field_separator() {
        match separator.as_bytes() {
            [byte] => {
                builder.delimiter(*byte);
            }
            _ => {
                return Err(TabParseError::InvalidArgument(format!(
                    "field_separator must be a single byte, got {:?}",
                    separator
                )))
            }
        }
    }

    if let Some(separator) = options.row_separator() {
        let terminator = match separator.as_bytes() {
            b"\r\n" => Terminator::CRLF,
            [byte] => Terminator::Any(*byte),
            _ => {
                return Err(TabParseError::InvalidArgument(format!(
                    "row_separator must be a single byte or \"\\r\\n\", got {:?}",
                    separator
                )))
            }
        };
        builder.terminator(terminator);
    }

    Ok(builder)
}

/// 区切り文字テキストパーサー（基本実装）
///
/// 1行ごとに`StringRecord`を生成します。
///
/// ```rust
/// use tabparse::{CsvParser, ParseOptions, Parser};
///
/// let table = CsvParser.parse(b"a,b\n\"c,d\",e\n", &ParseOptions::new()).unwrap();
/// assert_eq!(table, vec![vec!["a", "b"], vec!["c,d", "e"]]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvParser;

impl Parser for CsvParser {
    fn id(&self) -> ParserId {
        ParserId::Csv
    }

    fn parse(&self, data: &[u8], options: &ParseOptions) -> Result<Table, TabParseError> {
        let builder = reader_builder(options)?;
        let text = decode_text(self.id(), data)?;
        debug!(parser = %self.id(), bytes = data.len(), "parsing delimited text");

        let mut reader = builder.from_reader(text.as_bytes());
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(|field| field.to_string()).collect());
        }
        Ok(rows)
    }
}

/// 区切り文字テキストパーサー（高速実装）
///
/// 単一の`ByteRecord`を使い回し、UTF-8検証はフィールド単位で行います。
/// 正しい入力に対しては`CsvParser`と同じ結果を返します。
#[derive(Debug, Clone, Copy, Default)]
pub struct FastCsvParser;

impl Parser for FastCsvParser {
    fn id(&self) -> ParserId {
        ParserId::FastCsv
    }

    fn parse(&self, data: &[u8], options: &ParseOptions) -> Result<Table, TabParseError> {
        let builder = reader_builder(options)?;
        debug!(parser = %self.id(), bytes = data.len(), "parsing delimited text");

        let mut reader = builder.from_reader(data);
        let mut record = ByteRecord::new();
        let mut rows = Vec::new();
        while reader.read_byte_record(&mut record)? {
            let mut row = Vec::with_capacity(record.len());
            for field in record.iter() {
                row.push(decode_text(self.id(), field)?.to_string());
            }
            rows.push(row);
        }
        Ok(rows)
    }
}
