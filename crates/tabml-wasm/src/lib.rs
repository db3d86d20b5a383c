use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderOptions {
    strict: Option<bool>,
    indent: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderResult {
    html: String,
    diagnostics: Vec<JsDiagnostic>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsDiagnostic {
    code: String,
    message: String,
    severity: String,
}

#[wasm_bindgen]
pub fn render_html(source: &str) -> Result<JsValue, JsValue> {
    render_html_with_options(source, JsValue::UNDEFINED)
}

#[wasm_bindgen]
pub fn render_html_with_options(source: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let options = options_from_js(options)?;
    let result = render_result(source, &options).map_err(|err| JsValue::from_str(&err))?;
    serde_wasm_bindgen::to_value(&result).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[wasm_bindgen]
pub fn normalize(source: &str) -> String {
    tabml_core::normalize(source)
}

fn render_result(
    source: &str,
    options: &tabml_core::CompileOptions,
) -> Result<RenderResult, String> {
    let compiled = tabml_core::render(source, options).map_err(|err| err.to_string())?;
    let diagnostics = compiled
        .diagnostics
        .into_iter()
        .map(|diag| JsDiagnostic {
            code: diag.code.to_string(),
            message: diag.message,
            severity: diag.severity.label().to_string(),
        })
        .collect();
    Ok(RenderResult {
        html: compiled.html,
        diagnostics,
    })
}

fn options_from_js(value: JsValue) -> Result<tabml_core::CompileOptions, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(tabml_core::CompileOptions::default());
    }
    let parsed: RenderOptions =
        serde_wasm_bindgen::from_value(value).map_err(|err| JsValue::from_str(&err.to_string()))?;
    let mut out = tabml_core::CompileOptions::default();
    if let Some(strict) = parsed.strict {
        out.strict_depth = strict;
    }
    if let Some(indent) = parsed.indent {
        out.emit.indent = indent;
    }
    Ok(out)
}
