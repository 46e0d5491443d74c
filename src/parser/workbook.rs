//! Spreadsheet Parser
//!
//! calamineを使用したワークブック解析のバックエンド。
//! デコーダーはファイルパスを入口とするため、メモリ上のデータは一時ファイル経由で読み込む。

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::{Cursor, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, trace};

use crate::api::ParserId;
use crate::builder::ParseOptions;
use crate::error::TabParseError;
use crate::parser::Parser;
use crate::types::Table;

/// `tempfile_name`未指定時の一時ファイル名プレフィックス
const DEFAULT_TEMPFILE_NAME: &str = "tabparse-xls";

/// スプレッドシートパーサー
///
/// XLS形式のほか、calamineが判別できるワークブック形式（XLSX、XLSB、ODS）を読み込みます。
/// 形式はファイル内容からcalamineが判別します（XLSはcalamineのBIFFデコーダーに依存し、
/// クレート内のテストフィクスチャはXLSXのみです）。
/// 各セルはcalamineの表示形式で文字列化され、空セルは空文字列になります。
///
/// # 認識するオプション
///
/// * `worksheet` - シートインデックス（0始まり、デフォルト0）
/// * `tempfile_name` - `parse`時の一時ファイル名プレフィックス
/// * `tempfile_dir` - `parse`時の一時ファイル作成先（デフォルトはシステムの一時ディレクトリ）
///
/// # 使用例
///
/// ```rust,no_run
/// use std::path::Path;
/// use tabparse::{ExcelParser, ParseOptions, Parser};
///
/// # fn main() -> Result<(), tabparse::TabParseError> {
/// let options = ParseOptions::new().with_worksheet(1);
/// let table = ExcelParser.load(Path::new("report.xls"), &options)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExcelParser;

impl Parser for ExcelParser {
    fn id(&self) -> ParserId {
        ParserId::Excel
    }

    /// ワークブックを開き、選択したシートを行ごとに文字列化する
    ///
    /// # 戻り値
    ///
    /// * `Ok(Table)` - A1セルを起点とするシート全体（使用範囲より前の行・列は空文字列）
    /// * `Err(TabParseError::Io)` - ファイルの読み込みに失敗した場合
    /// * `Err(TabParseError::Format)` - ワークブックとして解析できない場合
    /// * `Err(TabParseError::InvalidArgument)` - シートインデックスが範囲外の場合
    fn load(&self, path: &Path, options: &ParseOptions) -> Result<Table, TabParseError> {
        let index = options.worksheet().unwrap_or(0);
        debug!(parser = %self.id(), path = %path.display(), worksheet = index, "loading workbook");

        let buffer = std::fs::read(path)?;
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(buffer))?;

        let sheet_count = workbook.sheet_names().len();
        let range = workbook.worksheet_range_at(index).ok_or_else(|| {
            TabParseError::InvalidArgument(format!(
                "Sheet index {} is out of range (total: {})",
                index, sheet_count
            ))
        })??;

        // 使用範囲の外側（先頭の空行・空列）も空セルで埋め、A1基準の位置を保つ
        let (first_row, first_col) = match range.start() {
            Some((row, col)) => (row as usize, col as usize),
            None => return Ok(Vec::new()),
        };
        let width = first_col + range.width();

        let mut table: Table = vec![vec![String::new(); width]; first_row];
        for row in range.rows() {
            let mut cells = Vec::with_capacity(width);
            cells.resize(first_col, String::new());
            cells.extend(row.iter().map(cell_text));
            table.push(cells);
        }
        Ok(table)
    }

    /// メモリ上のワークブックを一時ファイルに書き出して`load`する
    ///
    /// 一時ファイルは成功・失敗にかかわらず必ず削除されます。
    fn parse(&self, data: &[u8], options: &ParseOptions) -> Result<Table, TabParseError> {
        let file = materialize(data, options)?;

        let result = self.load(file.path(), options);
        let closed = file.close();
        if closed.is_ok() {
            trace!("removed temporary workbook");
        }

        let table = result?;
        closed?;
        Ok(table)
    }
}

/// データを一時ファイルに書き出す
///
/// ファイル名は`tempfile_name`（デフォルト`tabparse-xls`）で始まり、
/// `tempfile_dir`（デフォルトはシステムの一時ディレクトリ）に作成されます。
/// 返り値の`NamedTempFile`はDropでも削除されるため、途中の`?`で抜けても残りません。
fn materialize(data: &[u8], options: &ParseOptions) -> Result<NamedTempFile, TabParseError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(options.tempfile_name().unwrap_or(DEFAULT_TEMPFILE_NAME));
    let mut file = match options.tempfile_dir() {
        Some(dir) => builder.tempfile_in(dir)?,
        None => builder.tempfile()?,
    };
    trace!(path = %file.path().display(), bytes = data.len(), "created temporary workbook");

    file.write_all(data)?;
    file.flush()?;
    Ok(file)
}

/// セル値の文字列表現
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
