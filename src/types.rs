//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

/// 1行分のセル（0始まりの列順）
///
/// セルは常にテキストです。型推論は行いません。
pub type Row = Vec<String>;

/// 解析結果のテーブル
///
/// ヘッダー行の判定は行わず、先頭行も通常のデータ行として扱います。
pub type Table = Vec<Row>;
