//! Chart.js interop.
//!
//! The chart widget itself lives in JS (`window.Chart`, loaded from
//! `index.html`); this module only hands it a config built from a
//! [`ChartView`] and pushes new labels/series into an existing instance
//! on re-filter.

use contracts::shared::chart::ChartView;
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use serde_json::json;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

// Same palette the bar chart has always used
const SERIES_COLORS: &[&str] = &["#3e59dfe3", "#5ad160ff", "#f0a63aff", "#d15a8bff"];

/// Handle to one live Chart.js bar chart instance.
#[derive(Clone)]
pub struct BarChart {
    instance: JsValue,
}

impl BarChart {
    /// Construct `new Chart(canvas, config)` on the given canvas.
    pub fn create(
        canvas: &HtmlCanvasElement,
        view: &ChartView,
        x_title: &str,
        y_title: &str,
    ) -> Result<Self, JsValue> {
        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
        let constructor = Reflect::get(&window, &JsValue::from_str("Chart"))?;
        if !constructor.is_function() {
            return Err(JsValue::from_str("Chart.js is not loaded"));
        }
        let constructor: Function = constructor.dyn_into()?;
        let config = bar_config(view, x_title, y_title)?;
        let args = Array::of2(canvas.as_ref(), &config);
        let instance = Reflect::construct(&constructor, &args)?;
        Ok(Self {
            instance: instance.into(),
        })
    }

    /// Push new labels and series values into the live instance and
    /// redraw. Series are matched by index, extra series are ignored.
    pub fn update(&self, view: &ChartView) -> Result<(), JsValue> {
        let data = Reflect::get(&self.instance, &JsValue::from_str("data"))?;

        let labels = to_js(&view.labels)?;
        Reflect::set(&data, &JsValue::from_str("labels"), &labels)?;

        let datasets: Array = Reflect::get(&data, &JsValue::from_str("datasets"))?.dyn_into()?;
        for (index, series) in view.datasets.iter().enumerate() {
            let dataset = datasets.get(index as u32);
            if dataset.is_undefined() {
                continue;
            }
            let values = to_js(&series.data)?;
            Reflect::set(&dataset, &JsValue::from_str("data"), &values)?;
        }

        let update: Function =
            Reflect::get(&self.instance, &JsValue::from_str("update"))?.dyn_into()?;
        update.call0(&self.instance)?;
        Ok(())
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

fn bar_config(view: &ChartView, x_title: &str, y_title: &str) -> Result<JsValue, JsValue> {
    let datasets: Vec<serde_json::Value> = view
        .datasets
        .iter()
        .enumerate()
        .map(|(index, series)| {
            json!({
                "label": series.label,
                "data": series.data,
                "backgroundColor": SERIES_COLORS[index % SERIES_COLORS.len()],
                "borderRadius": 6,
            })
        })
        .collect();

    let config = json!({
        "type": "bar",
        "data": {
            "labels": view.labels,
            "datasets": datasets,
        },
        "options": {
            "responsive": true,
            "plugins": {
                "legend": {
                    "position": "top",
                    "align": "end",
                    "labels": { "boxWidth": 12, "boxHeight": 12, "padding": 10 },
                },
            },
            "scales": {
                "y": {
                    "grid": { "color": "#f0f0f0" },
                    "title": { "display": true, "text": y_title, "font": { "size": 14, "weight": "bold" } },
                },
                "x": {
                    "grid": { "display": false },
                    "title": { "display": true, "text": x_title, "font": { "size": 14, "weight": "bold" } },
                },
            },
        },
    });

    to_js(&config)
}
