//! HTTPハンドラー定義

use axum::{Json, extract::State};
use tracing::{debug, info};

use kazoeru::models::{AnalyzePayload, TextStats};

use crate::errors::ApiError;

use super::state::AppState;

/// POST /analyze エンドポイント
///
/// テキストの統計量（文字数・単語数・文字頻度）を計算する。
///
/// # Request Body
/// ```json
/// { "text": "解析対象のテキスト" }
/// ```
///
/// # Response
/// - 200 OK: 解析成功
/// - 400 Bad Request: 検証エラー（フィールドごとのメッセージリスト）
pub async fn post_analyze(
  State(state): State<AppState>,
  Json(payload): Json<AnalyzePayload>,
) -> Result<Json<TextStats>, ApiError> {
  debug!("テキスト解析リクエストを受信");

  // 検証も集計も軽量な純粋計算のため、spawn_blocking は介さずそのまま実行する
  let stats = state.service.analyze(payload)?;

  info!(
    with_spaces = stats.text_length.with_spaces,
    word_count = stats.word_count,
    distinct_letters = stats.character_count.len(),
    "テキスト解析完了"
  );

  Ok(Json(stats))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use serde_json::json;

  use super::*;
  use crate::config::Config;
  use crate::service::{AnalyzeService, AnalyzeServiceFull};

  // ─── テスト用ヘルパー関数 ───────────────────────────────────────────────────

  fn test_state() -> AppState {
    let config = Config {
      bind_addr: "127.0.0.1:0".to_string(),
    };

    let service: Arc<dyn AnalyzeService> = Arc::new(AnalyzeServiceFull::new());
    AppState::new(config, service)
  }

  fn test_payload(value: serde_json::Value) -> AnalyzePayload {
    serde_json::from_value(value).expect("ペイロードの変換失敗")
  }

  // ─── ハンドラー直接呼び出しテスト ──────────────────────────────────────────

  #[tokio::test]
  async fn post_analyze_returns_statistics() {
    let payload = test_payload(json!({ "text": "hello world" }));

    let Json(stats) =
      post_analyze(State(test_state()), Json(payload)).await.expect("解析に成功すること");

    assert_eq!(stats.text_length.with_spaces, 11);
    assert_eq!(stats.word_count, 2);
  }

  #[tokio::test]
  async fn post_analyze_rejects_invalid_payload() {
    let payload = test_payload(json!({ "text": "" }));

    let result = post_analyze(State(test_state()), Json(payload)).await;
    assert!(result.is_err());
  }

  #[tokio::test]
  async fn health_check_returns_ok_body() {
    assert_eq!(health_check().await, "OK");
  }
}
