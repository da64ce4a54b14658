//! APIエラー定義

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

// kazoeru クレートのエラー型をインポート
use kazoeru::errors::ValidationError;

/// エラーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// ペイロード検証エラー
  Validation,
  /// 内部エラー
  Internal,
  /// 設定エラー
  Config,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::Validation => "validation_error",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::Validation => StatusCode::BAD_REQUEST,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// APIエラー
#[derive(Debug, Error)]
pub enum ApiError {
  /// ペイロード検証エラー（メッセージはクライアント向け契約文言）
  #[error(transparent)]
  Validation(#[from] ValidationError),

  /// 内部エラー
  #[error("内部エラー: {0}")]
  Internal(String),

  /// 設定エラー
  #[error("設定エラー: {0}")]
  Config(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::Validation(_) => ApiErrorKind::Validation,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// 検証エラー以外のエラーレスポンスのJSON構造
#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

/// 検証エラー用の 400 レスポンスボディを構築する
///
/// 形式は `{"<field>": ["<message>"]}`。フィールドに紐付かないエラーは
/// `non_field_errors` キーに入る。検証は固定順で最初の失敗を返すため
/// メッセージは常に 1 件だが、ボディ形状はリストで固定する。
fn field_error_body(err: &ValidationError) -> Value {
  let mut body = serde_json::Map::new();
  body.insert(err.field().to_string(), Value::Array(vec![Value::String(err.to_string())]));
  Value::Object(body)
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      Self::Validation(err) => {
        (StatusCode::BAD_REQUEST, Json(field_error_body(&err))).into_response()
      }
      other => {
        let body = ErrorResponse {
          error: ErrorBody {
            code: other.code(),
            message: other.to_string(),
          },
        };

        (other.status(), Json(body)).into_response()
      }
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;
