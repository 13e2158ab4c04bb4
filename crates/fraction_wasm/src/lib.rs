use fraction_core::{InputSettings, Operation};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

pub mod bridge;
pub mod render;
pub mod views;

use bridge::OperandFields;
use render::RenderSettings;
use views::ErrorView;

#[wasm_bindgen]
pub struct WasmCalculator {
    input: InputSettings,
    render: RenderSettings,
}

#[wasm_bindgen]
impl WasmCalculator {
    /// Both arguments are optional plain objects; `undefined` selects defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(input_settings: JsValue, render_settings: JsValue) -> Result<WasmCalculator, JsValue> {
        console_error_panic_hook::set_once();

        Ok(WasmCalculator {
            input: settings_from_js(input_settings)?,
            render: settings_from_js(render_settings)?,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn calculate(
        &self,
        left_whole: &str,
        left_numerator: &str,
        left_denominator: &str,
        op: &str,
        right_whole: &str,
        right_numerator: &str,
        right_denominator: &str,
    ) -> Result<JsValue, JsValue> {
        let left = OperandFields {
            whole: left_whole,
            numerator: left_numerator,
            denominator: left_denominator,
        };
        let right = OperandFields {
            whole: right_whole,
            numerator: right_numerator,
            denominator: right_denominator,
        };
        let view = bridge::calculate_fields(left, op, right, &self.input, &self.render)
            .map_err(error_to_js)?;
        to_js(&view)
    }

    #[wasm_bindgen(js_name = calculateExpression)]
    pub fn calculate_expression(&self, left: &str, op: &str, right: &str) -> Result<JsValue, JsValue> {
        let view = bridge::calculate_expression(left, op, right, &self.render).map_err(error_to_js)?;
        to_js(&view)
    }

    pub fn simplify(&self, numerator: &str, denominator: &str) -> Result<JsValue, JsValue> {
        let view = bridge::simplify(numerator, denominator, &self.render).map_err(error_to_js)?;
        to_js(&view)
    }

    #[wasm_bindgen(js_name = mixedToImproper)]
    pub fn mixed_to_improper(
        &self,
        whole: &str,
        numerator: &str,
        denominator: &str,
    ) -> Result<JsValue, JsValue> {
        let fields = OperandFields {
            whole,
            numerator,
            denominator,
        };
        let view = bridge::mixed_to_improper(fields, &self.input, &self.render).map_err(error_to_js)?;
        to_js(&view)
    }

    #[wasm_bindgen(js_name = improperToMixed)]
    pub fn improper_to_mixed(&self, numerator: &str, denominator: &str) -> Result<JsValue, JsValue> {
        let view = bridge::improper_to_mixed_view(numerator, denominator, &self.render)
            .map_err(error_to_js)?;
        to_js(&view)
    }

    #[wasm_bindgen(js_name = decimalToFraction)]
    pub fn decimal_to_fraction(&self, text: &str) -> Result<JsValue, JsValue> {
        let view = bridge::decimal_to_fraction(text, &self.render).map_err(error_to_js)?;
        to_js(&view)
    }
}

#[wasm_bindgen]
pub fn gcd(a: &str, b: &str) -> Result<String, JsValue> {
    bridge::gcd(a, b).map_err(error_to_js)
}

#[wasm_bindgen]
pub fn lcm(a: &str, b: &str) -> Result<String, JsValue> {
    bridge::lcm(a, b).map_err(error_to_js)
}

#[derive(Serialize)]
struct OperationOption {
    name: &'static str,
    symbol: char,
}

/// Operation names and symbols for populating a `<select>`.
#[wasm_bindgen]
pub fn operations() -> Result<JsValue, JsValue> {
    let options: Vec<OperationOption> = Operation::ALL
        .iter()
        .map(|op| OperationOption {
            name: op.name(),
            symbol: op.symbol(),
        })
        .collect();
    to_js(&options)
}

fn settings_from_js<T: DeserializeOwned + Default>(value: JsValue) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    from_value(value).map_err(|e| JsValue::from_str(&format!("Invalid settings: {}", e)))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn error_to_js(err: anyhow::Error) -> JsValue {
    let view = ErrorView::build(&err);
    to_value(&view).unwrap_or_else(|_| JsValue::from_str(&view.message))
}
