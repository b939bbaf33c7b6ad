use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCharInfo {
    code_point: u32,
    classes: Vec<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsLine {
    text: String,
    start: usize,
    end: usize,
    ending: Option<&'static str>,
}

#[wasm_bindgen]
pub fn is_valid_scheme(candidate: &str) -> bool {
    marklex_core::is_valid_scheme(candidate)
}

#[wasm_bindgen]
pub fn is_uri_autolink(body: &str) -> bool {
    marklex_core::is_uri_autolink(body)
}

#[wasm_bindgen]
pub fn is_email_autolink(body: &str) -> bool {
    marklex_core::is_email_autolink(body)
}

/// Runs the named transform (`collapse`, `detab`, `atx`, ...) over `text`.
#[wasm_bindgen]
pub fn normalize(text: &str, op: &str, per_line: Option<bool>) -> Result<String, JsValue> {
    let op: marklex_core::Op = op
        .parse()
        .map_err(|err: marklex_core::UnknownOp| JsValue::from_str(&err.to_string()))?;
    if per_line.unwrap_or(false) {
        Ok(op.apply_lines(text))
    } else {
        Ok(op.apply(text))
    }
}

/// Classifies the first code point of `text`.
#[wasm_bindgen]
pub fn classify(text: &str) -> Result<JsValue, JsValue> {
    let ch = text
        .chars()
        .next()
        .ok_or_else(|| JsValue::from_str("expected at least one character"))?;
    let info = char_info(ch);
    serde_wasm_bindgen::to_value(&info).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[wasm_bindgen]
pub fn split_lines(source: &str) -> Result<JsValue, JsValue> {
    let lines: Vec<JsLine> = marklex_core::split_lines(source)
        .into_iter()
        .map(|line| JsLine {
            text: line.text.to_string(),
            start: line.span.start,
            end: line.span.end,
            ending: line.ending.map(|ending| ending.as_str()),
        })
        .collect();
    serde_wasm_bindgen::to_value(&lines).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[wasm_bindgen]
pub fn schemes() -> Vec<String> {
    marklex_core::schemes().map(str::to_string).collect()
}

fn char_info(ch: char) -> JsCharInfo {
    JsCharInfo {
        code_point: ch as u32,
        classes: marklex_core::classify(ch)
            .into_iter()
            .map(|class| class.name())
            .collect(),
    }
}
