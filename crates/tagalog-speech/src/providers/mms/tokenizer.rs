//! Character tokenizer for MMS VITS models.

use serde::Deserialize;
use std::collections::HashMap;

/// Options from `tokenizer_config.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenizerConfig {
    /// Put the id-0 token between and around the character ids
    #[serde(default = "default_true")]
    pub add_blank: bool,
    /// Lowercase characters that are not themselves in the vocabulary
    #[serde(default = "default_true")]
    pub normalize: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            add_blank: true,
            normalize: true,
        }
    }
}

/// Maps text to the `input_ids` a VITS model expects.
#[derive(Debug, Clone)]
pub struct VitsTokenizer {
    vocab: HashMap<char, i64>,
    config: TokenizerConfig,
}

/// Id interspersed between characters when `add_blank` is set.
const BLANK_ID: i64 = 0;

impl VitsTokenizer {
    /// Build from the raw `vocab.json` map. Multi-character entries (special
    /// tokens) never match single input characters and are skipped.
    pub fn new(vocab: HashMap<String, i64>, config: TokenizerConfig) -> Self {
        let vocab = vocab
            .into_iter()
            .filter_map(|(token, id)| {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some((ch, id)),
                    _ => None,
                }
            })
            .collect();
        Self { vocab, config }
    }

    pub fn vocab_len(&self) -> usize {
        self.vocab.len()
    }

    /// Lowercase (if configured) and drop everything outside the vocabulary.
    pub fn normalize(&self, text: &str) -> String {
        let lowered: String = if self.config.normalize {
            text.chars()
                .flat_map(|ch| {
                    if self.vocab.contains_key(&ch) {
                        vec![ch]
                    } else {
                        ch.to_lowercase().collect()
                    }
                })
                .collect()
        } else {
            text.to_string()
        };

        lowered
            .chars()
            .filter(|ch| self.vocab.contains_key(ch))
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// Token ids for `text`; empty when no character is in the vocabulary.
    pub fn encode(&self, text: &str) -> Vec<i64> {
        let ids: Vec<i64> = self
            .normalize(text)
            .chars()
            .filter_map(|ch| self.vocab.get(&ch).copied())
            .collect();

        if !self.config.add_blank || ids.is_empty() {
            return ids;
        }

        let mut interspersed = vec![BLANK_ID; ids.len() * 2 + 1];
        for (idx, id) in ids.into_iter().enumerate() {
            interspersed[idx * 2 + 1] = id;
        }
        interspersed
    }
}
