//! エラー定義

use thiserror::Error;

use crate::validator::{NON_FIELD_ERRORS, TEXT_FIELD};

/// ペイロード検証エラー
///
/// `Display` はクライアントにそのまま返す英語メッセージを生成する
/// （メッセージ文言は API 契約の一部なので変更しないこと）。
/// [`field`](Self::field) はエラーを紐付けるレスポンスキーを返す。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
  /// ペイロードが JSON オブジェクトでない（配列、スカラー等）
  #[error("Invalid data. Expected a JSON object, but got {got}.")]
  InvalidPayloadShape {
    /// 実際に受け取った JSON 型名
    got: &'static str,
  },

  /// "text" フィールドが存在しない
  #[error("This field is required.")]
  MissingField,

  /// "text" 以外のフィールドが含まれている
  #[error("Unknown field(s): {}", .fields.join(", "))]
  UnknownFields {
    /// 余分なキー（昇順ソート済み）
    fields: Vec<String>,
  },

  /// "text" の値が文字列でも数値でもない
  #[error("Not a valid string.")]
  InvalidType,

  /// 変換後の文字列が空
  #[error("This field may not be blank.")]
  Blank,

  /// 変換後の文字列が最大長を超過
  #[error("Ensure this field has no more than {max_length} characters.")]
  TooLong {
    /// 実際の長さ（文字数）
    length: usize,
    /// 許容される最大長（文字数）
    max_length: usize,
  },
}

impl ValidationError {
  /// エラーを報告するレスポンスキーを返す
  ///
  /// ペイロード形状と未知キーのエラーは特定フィールドに紐付かないため
  /// `non_field_errors`、それ以外は `text` に紐付ける。
  #[must_use]
  pub fn field(&self) -> &'static str {
    match self {
      Self::InvalidPayloadShape { .. } | Self::UnknownFields { .. } => NON_FIELD_ERRORS,
      Self::MissingField | Self::InvalidType | Self::Blank | Self::TooLong { .. } => TEXT_FIELD,
    }
  }
}

/// kazoeru クレートの標準 Result 型エイリアス
pub type ValidationResult<T> = Result<T, ValidationError>;
