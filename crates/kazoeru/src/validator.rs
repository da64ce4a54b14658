// crates/kazoeru/src/validator.rs

//! ペイロード検証モジュール
//!
//! analyze エンドポイントに届いた生のペイロードを検証し、
//! 解析対象の文字列を取り出す。
//!
//! # 検証順序
//!
//! エラーメッセージを再現可能にするため、チェックは常に固定順で実行する：
//! 1. ペイロード形状（JSON オブジェクトであること）
//! 2. "text" フィールドの存在
//! 3. 未知キーの検出（昇順ソートして報告）
//! 4. 値の型（文字列、または文字列へ変換可能な数値）
//! 5. 空文字列の拒否（空白のみの文字列は拒否しない）
//! 6. 最大長（変換後の文字数で判定）
//!
//! 最初に失敗したチェックのエラーだけを返す。

use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::{ValidationError, ValidationResult};
use crate::models::AnalyzePayload;

/// 唯一の認識対象フィールド名
pub const TEXT_FIELD: &str = "text";

/// 特定フィールドに紐付かないエラー用のレスポンスキー
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// 受け付けるテキストの最大長（文字数、数値変換後に判定）
pub const MAX_TEXT_LENGTH: usize = 200;

/// ペイロードを検証し、解析対象の文字列を返す
///
/// 成功時はテキストをそのまま返す（空白・大文字小文字は保持）。
///
/// # Errors
/// モジュールドキュメントに記載の固定順で最初に失敗したチェックの
/// [`ValidationError`] を返す。
pub fn validate(payload: &AnalyzePayload) -> ValidationResult<String> {
  match payload {
    AnalyzePayload::Object(fields) => validate_fields(fields),
    AnalyzePayload::Other(value) => {
      let got = json_type_name(value);
      debug!(got, "ペイロードがオブジェクトではないため拒否");
      Err(ValidationError::InvalidPayloadShape { got })
    }
  }
}

/// オブジェクトペイロードのフィールドレベル検証
fn validate_fields(fields: &Map<String, Value>) -> ValidationResult<String> {
  // "text" の存在チェックは未知キーより先（キー欠落が主因のため）
  let Some(value) = fields.get(TEXT_FIELD) else {
    return Err(ValidationError::MissingField);
  };

  let mut unknown: Vec<String> =
    fields.keys().filter(|key| key.as_str() != TEXT_FIELD).cloned().collect();
  if !unknown.is_empty() {
    // Map のキー順は内部実装に依存するため、メッセージ安定化のため明示的にソート
    unknown.sort();
    debug!(fields = ?unknown, "未知のフィールドを検出");
    return Err(ValidationError::UnknownFields { fields: unknown });
  }

  let text = match value {
    Value::String(text) => text.clone(),
    // 数値は文字列表現に変換して受け付ける（整数・小数とも）
    Value::Number(number) => number.to_string(),
    other => {
      debug!(got = json_type_name(other), "text の値が文字列でも数値でもないため拒否");
      return Err(ValidationError::InvalidType);
    }
  };

  if text.is_empty() {
    return Err(ValidationError::Blank);
  }

  // バイト数ではなく文字数で判定する
  let length = text.chars().count();
  if length > MAX_TEXT_LENGTH {
    debug!(length, max_length = MAX_TEXT_LENGTH, "テキストが最大長を超過");
    return Err(ValidationError::TooLong { length, max_length: MAX_TEXT_LENGTH });
  }

  Ok(text)
}

/// エラーメッセージ用の JSON 型名を返す
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// テストモジュール
// ─────────────────────────────────────────────────────────────────────────────
