//! kazoeru-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kazoeru_api::ApiError;
use kazoeru_api::api::AppState;
use kazoeru_api::api::run_server;
use kazoeru_api::config::Config;
use kazoeru_api::service::AnalyzeServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // ロギングの初期化
  tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()).init();

  // 設定の読み込み
  let config = Config::from_env();
  tracing::info!(bind_addr = %config.bind_addr, "設定を読み込みました");

  // サービスの初期化
  let service = Arc::new(AnalyzeServiceFull::new());
  tracing::info!("テキスト解析サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
