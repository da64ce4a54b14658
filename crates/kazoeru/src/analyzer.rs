// crates/kazoeru/src/analyzer.rs

//! テキスト統計解析モジュール
//!
//! 検証済みテキストの統計量を計算する純粋関数を提供します。
//!
//! # 処理内容
//! - 空白込み・空白抜きの文字数
//! - 空白区切りの単語数
//! - アルファベット文字ごとの出現頻度（小文字化後、文字コード昇順）
//!
//! 副作用を持たず、同じ入力に対して常に同じ結果を返します。

use std::collections::BTreeMap;

use crate::models::{CharCount, TextLength, TextStats};

/// 検証済みテキストの統計量を計算する
///
/// # 処理内容
/// 1. `with_spaces`: 入力そのままの文字数
/// 2. `collapsed`: 空白をすべて除去して小文字化した文字列
/// 3. `without_spaces`: `collapsed` の文字数
/// 4. `word_count`: 空白区切りの単語数（連続空白・前後空白は無視）
/// 5. `character_count`: `collapsed` 中のアルファベット文字の出現頻度
///
/// # 引数
/// - `text`: 解析対象のテキスト（空文字列も可）
///
/// # 戻り値
/// 統計量をまとめた [`TextStats`]
#[must_use]
pub fn analyze(text: &str) -> TextStats {
  let collapsed = collapse(text);

  TextStats {
    text_length: TextLength {
      with_spaces: text.chars().count(),
      without_spaces: collapsed.chars().count(),
    },
    word_count: text.split_whitespace().count(),
    character_count: count_letters(&collapsed),
  }
}

/// 空白をすべて除去し、残りを小文字化する
///
/// 除去対象は前後の空白だけでなく文中の空白も含む（タブ・改行等の
/// Unicode 空白すべて）。小文字化は除去後に行う。
fn collapse(text: &str) -> String {
  text.split_whitespace().collect::<String>().to_lowercase()
}

/// 空白除去済み文字列中のアルファベット文字を数える
///
/// 数字・記号・句読点は対象外。`BTreeMap` に集計するため、
/// 結果は文字コード昇順で返り、同じ文字が重複して現れることはない。
fn count_letters(collapsed: &str) -> Vec<CharCount> {
  let mut counts: BTreeMap<char, usize> = BTreeMap::new();

  for ch in collapsed.chars().filter(|ch| ch.is_alphabetic()) {
    *counts.entry(ch).or_insert(0) += 1;
  }

  counts.into_iter().map(|(character, count)| CharCount { character, count }).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// テストモジュール
// ─────────────────────────────────────────────────────────────────────────────
