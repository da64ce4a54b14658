//! kazoeru テキスト統計ライブラリー
//!
//! 短いテキストの文字数・単語数・アルファベット頻度を計算する

/// 解析モジュール - 文字数・単語数・文字頻度を計算する純粋関数を提供
pub mod analyzer;

/// エラーモジュール - ValidationError, ValidationResult等のエラー型を定義
pub mod errors;

/// データモデルモジュール - AnalyzePayload, TextStats等のデータ構造を定義
pub mod models;

/// 検証モジュール - analyzeエンドポイントのペイロード検証契約を実装
pub mod validator;

/// 再エクスポート
pub use analyzer::analyze;
pub use errors::{ValidationError, ValidationResult};
pub use models::{AnalyzePayload, CharCount, TextLength, TextStats};
pub use validator::{MAX_TEXT_LENGTH, NON_FIELD_ERRORS, TEXT_FIELD, validate};
