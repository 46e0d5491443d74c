//! Fixed-Width Parser
//!
//! 列幅の配列に従って各行を切り出す固定長テキストのバックエンド。
//! 外部クレートに依存しない。

use tracing::debug;

use crate::api::ParserId;
use crate::builder::ParseOptions;
use crate::error::TabParseError;
use crate::parser::{decode_text, Parser};
use crate::types::{Row, Table};

/// `row_separator`未指定時の行区切り
const DEFAULT_ROW_SEPARATOR: &str = "\n";

/// 固定長テキストパーサー
///
/// `widths`（必須）の各要素が1列分の文字数を表します。
/// 行が短い場合、足りない列は空文字列になります（後続列の位置はずれません）。
/// 列幅の合計を超える末尾の文字は捨てられます。
///
/// ```rust
/// use tabparse::{FixedWidthParser, ParseOptions, Parser};
///
/// let options = ParseOptions::new().with_widths(vec![3, 2, 5]);
/// let table = FixedWidthParser.parse(b"abcdexyz", &options).unwrap();
/// assert_eq!(table, vec![vec!["abc", "de", "xyz"]]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedWidthParser;

impl Parser for FixedWidthParser {
    fn id(&self) -> ParserId {
        ParserId::FixedWidth
    }

    fn parse(&self, data: &[u8], options: &ParseOptions) -> Result<Table, TabParseError> {
        let widths = options.widths().ok_or_else(|| {
            TabParseError::InvalidArgument("fixed_width parser requires the option 'widths'".to_string())
        })?;
        if let Some(index) = widths.iter().position(|&w| w == 0) {
            return Err(TabParseError::InvalidArgument(format!(
                "column width at index {} must be positive",
                index
            )));
        }

        let separator = options.row_separator().unwrap_or(DEFAULT_ROW_SEPARATOR);
        if separator.is_empty() {
            return Err(TabParseError::InvalidArgument(
                "row_separator must not be empty".to_string(),
            ));
        }

        let text = decode_text(self.id(), data)?;
        debug!(bytes = data.len(), columns = widths.len(), "parsing fixed-width text");

        Ok(split_lines(text, separator)
            .map(|line| split_columns(line, widths))
            .collect())
    }
}

/// 行区切りで分割する
///
/// 末尾の空要素は取り除く（`"a\nb\n"`は2行、空文字列は0行）。
/// 途中の空行は残す。
fn split_lines<'a>(text: &'a str, separator: &str) -> impl Iterator<Item = &'a str> {
    let mut lines: Vec<&str> = text.split(separator).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.into_iter()
}

/// 1行を列幅に従って切り出す
fn split_columns(line: &str, widths: &[usize]) -> Row {
    // 文字境界のバイト位置（末尾にline.len()を含む）
    let bounds: Vec<usize> = line
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()))
        .collect();
    let byte_at = |chars: usize| bounds.get(chars).copied().unwrap_or(line.len());

    let mut offset: usize = 0;
    let mut row = Vec::with_capacity(widths.len());
    for &width in widths {
        let end = offset.saturating_add(width);
        row.push(line[byte_at(offset)..byte_at(end)].trim().to_string());
        offset = end;
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parse(data: &str, options: &ParseOptions) -> Result<Table, TabParseError> {
        FixedWidthParser.parse(data.as_bytes(), options)
    }

    fn widths(w: &[usize]) -> ParseOptions {
        ParseOptions::new().with_widths(w.to_vec())
    }

    #[test]
    fn test_exact_split_drops_overflow() {
        let table = parse("abcdexyz", &widths(&[3, 2, 5])).unwrap();
        assert_eq!(table, vec![vec!["abc", "de", "xyz"]]);

        let table = parse("abcdefgh", &widths(&[2, 2])).unwrap();
        assert_eq!(table, vec![vec!["ab", "cd"]]);
    }

    #[test]
    fn test_short_line() {
        let table = parse("ab", &widths(&[4, 4])).unwrap();
        assert_eq!(table, vec![vec!["ab", ""]]);
    }

    #[test]
    fn test_short_line_does_not_shift_columns() {
        let table = parse("aaaabb\naaaabbbbcc", &widths(&[4, 4, 2])).unwrap();
        assert_eq!(
            table,
            vec![vec!["aaaa", "bb", ""], vec!["aaaa", "bbbb", "cc"]]
        );
    }

    #[test]
    fn test_huge_width_saturates() {
        let table = parse("abc", &widths(&[usize::MAX, 2])).unwrap();
        assert_eq!(table, vec![vec!["abc", ""]]);
    }

    #[test]
    fn test_cells_are_trimmed() {
        let table = parse(" a  b    c\t", &widths(&[3, 3, 5])).unwrap();
        assert_eq!(table, vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_missing_widths() {
        let result = parse("abc", &ParseOptions::new());
        assert!(matches!(result, Err(TabParseError::InvalidArgument(_))));
    }

    #[test]
    fn test_zero_width_rejected() {
        let result = parse("abc", &widths(&[1, 0]));
        assert!(matches!(result, Err(TabParseError::InvalidArgument(_))));
    }

    #[test]
    fn test_empty_row_separator_rejected() {
        let result = parse("abc", &widths(&[1]).with_row_separator(""));
        assert!(matches!(result, Err(TabParseError::InvalidArgument(_))));
    }

    #[test]
    fn test_custom_row_separator() {
        let options = widths(&[1, 1, 1]).with_row_separator(";");
        let table = parse("a,b;c,d", &options).unwrap();
        assert_eq!(table, vec![vec!["a", ",", "b"], vec!["c", ",", "d"]]);
    }

    #[test]
    fn test_trailing_separator_dropped() {
        let table = parse("ab\ncd\n\n", &widths(&[1, 1])).unwrap();
        assert_eq!(table, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_inner_empty_line_kept() {
        let table = parse("ab\n\ncd", &widths(&[1, 1])).unwrap();
        assert_eq!(
            table,
            vec![vec!["a", "b"], vec!["", ""], vec!["c", "d"]]
        );
    }

    #[test]
    fn test_empty_input() {
        let table = parse("", &widths(&[3])).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_crlf_is_trimmed_from_last_column() {
        let table = parse("ab\r\ncd\r\n", &widths(&[1, 1])).unwrap();
        assert_eq!(table, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_multibyte_characters_count_as_one() {
        let table = parse("日本語ab", &widths(&[2, 1, 2])).unwrap();
        assert_eq!(table, vec![vec!["日本", "語", "ab"]]);
    }

    #[test]
    fn test_invalid_utf8() {
        let result = FixedWidthParser.parse(&[0xc3, 0x28], &widths(&[1]));
        assert!(matches!(result, Err(TabParseError::Format(_))));
    }

    proptest! {
        #[test]
        fn prop_every_row_has_one_cell_per_width(
            lines in prop::collection::vec("[a-z ]{0,12}", 1..8),
            w in prop::collection::vec(1usize..5, 1..5),
        ) {
            let data = lines.join("\n");
            let table = parse(&data, &widths(&w)).unwrap();
            for row in &table {
                prop_assert_eq!(row.len(), w.len());
            }
        }

        #[test]
        fn prop_parse_is_idempotent(
            data in "[a-z \n]{0,40}",
            w in prop::collection::vec(1usize..5, 1..4),
        ) {
            let options = widths(&w);
            prop_assert_eq!(parse(&data, &options).unwrap(), parse(&data, &options).unwrap());
        }
    }
}
