use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use doc_similarity::{compare, CompareConfig, CompareError, SentencePair};

// Set up panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Serializable comparison for the browser demo.
///
/// Field names follow the upload form the demo page posts to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasmComparison {
    /// Overall similarity percentage rounded to 2 decimals, e.g. `64.73` or `100.0`
    pub result: String,
    /// Human-readable verdict label
    pub verdict: String,
    /// Document A with matched sentences wrapped in `<mark>`
    pub highlighted1: String,
    /// Document B with matched sentences wrapped in `<mark>`
    pub highlighted2: String,
    /// Percentage of document A's sentences with a match
    pub sent_match_pct: f64,
    pub pairs: Vec<WasmPair>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasmPair {
    pub a_index: usize,
    pub b_index: usize,
    pub score: f64,
}

impl From<&SentencePair> for WasmPair {
    fn from(pair: &SentencePair) -> Self {
        Self {
            a_index: pair.a_index,
            b_index: pair.b_index,
            score: pair.score,
        }
    }
}

/// Error payload returned instead of a comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasmError {
    pub error: String,
}

/// Compare two texts.
///
/// `threshold` overrides the default sentence match threshold. Returns a
/// `WasmComparison` object, or `{ error }` when either text is blank or the
/// threshold is out of range.
#[wasm_bindgen]
pub fn compare_texts(text_a: &str, text_b: &str, threshold: Option<f64>) -> JsValue {
    match compare_texts_internal(text_a, text_b, threshold) {
        Ok(result) => serde_wasm_bindgen::to_value(&result).unwrap_or_else(|e| {
            let error = WasmError {
                error: format!("Serialization error: {}", e),
            };
            serde_wasm_bindgen::to_value(&error).unwrap_or(JsValue::NULL)
        }),
        Err(error) => serde_wasm_bindgen::to_value(&error).unwrap_or(JsValue::NULL),
    }
}

/// Same as [`compare_texts`], serialized to a JSON string.
#[wasm_bindgen]
pub fn compare_texts_json(text_a: &str, text_b: &str, threshold: Option<f64>) -> String {
    let serialized = match compare_texts_internal(text_a, text_b, threshold) {
        Ok(result) => serde_json::to_string(&result),
        Err(error) => serde_json::to_string(&error),
    };
    serialized.unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
}

fn compare_texts_internal(
    text_a: &str,
    text_b: &str,
    threshold: Option<f64>,
) -> Result<WasmComparison, WasmError> {
    let mut config = CompareConfig::default();
    if let Some(threshold) = threshold {
        config = config.with_threshold(threshold);
    }

    let result = compare(text_a, text_b, &config).map_err(to_wasm_error)?;
    let rendered = result.render();

    Ok(WasmComparison {
        result: rendered.result,
        verdict: rendered.verdict,
        highlighted1: rendered.highlighted1,
        highlighted2: rendered.highlighted2,
        sent_match_pct: rendered.sent_match_pct,
        pairs: result.pairs.iter().map(WasmPair::from).collect(),
    })
}

fn to_wasm_error(error: CompareError) -> WasmError {
    let message = match error {
        CompareError::EmptyInput { .. } => {
            "Could not extract text from one of the documents.".to_string()
        }
        other => other.to_string(),
    };
    WasmError { error: message }
}
