use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderOptions {
    sanitized: Option<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderResult {
    html: String,
    confidence: Option<JsConfidence>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsConfidence {
    level: String,
    percentage: Option<String>,
    rank: String,
}

#[wasm_bindgen]
pub fn render_comment(source: &str, is_ai: bool) -> Result<JsValue, JsValue> {
    render_comment_with_options(source, is_ai, JsValue::UNDEFINED)
}

#[wasm_bindgen]
pub fn render_comment_with_options(
    source: &str,
    is_ai: bool,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    let sanitized = sanitized_from_js(options)?;

    // Human-authored comments never go through the pipeline.
    if !is_ai {
        return to_js(&RenderResult {
            html: annotext_core::comment_html(source, false),
            confidence: None,
        });
    }

    let document = annotext_core::render(source);
    let html = if sanitized {
        annotext_core::emit_html_sanitized(&document)
    } else {
        annotext_core::emit_html(&document)
    };
    let confidence = document.confidence.map(|confidence| {
        let rank = confidence.rank().as_str().to_string();
        JsConfidence {
            level: confidence.level,
            percentage: confidence.percentage,
            rank,
        }
    });

    to_js(&RenderResult { html, confidence })
}

/// Version tag of the normalization rules, for result caching on the
/// JavaScript side keyed by raw text plus version.
#[wasm_bindgen]
pub fn rules_version() -> u32 {
    annotext_core::RULES_VERSION
}

fn sanitized_from_js(value: JsValue) -> Result<bool, JsValue> {
    if value.is_null() || value.is_undefined() {
        // The web client injects the fragment into the DOM; default safe.
        return Ok(true);
    }
    let parsed: RenderOptions =
        serde_wasm_bindgen::from_value(value).map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(parsed.sanitized.unwrap_or(true))
}

fn to_js(result: &RenderResult) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(result).map_err(|err| JsValue::from_str(&err.to_string()))
}
