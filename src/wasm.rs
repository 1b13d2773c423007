//! Browser bindings.
//!
//! [`FigureRenderer`] owns the configuration a web UI edits and renders it
//! on demand. Only available with the `wasm` feature:
//!
//! ```toml
//! [dependencies]
//! crochet-renderer = { version = "0.1", features = ["wasm"] }
//! ```
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { FigureRenderer } from 'crochet-renderer';
//!
//! await init();
//!
//! const renderer = new FigureRenderer();
//! renderer.setBodyColor('vanilla');
//! renderer.setLayers(4);
//! renderer.setLegs(true);
//!
//! preview.innerHTML = renderer.renderSvg();
//! caption.textContent = renderer.description();
//!
//! const png = renderer.renderPng(2);
//! download(png, renderer.fileName('png'));
//! ```

use wasm_bindgen::prelude::*;

use crate::color::{BodyColor, EyeColor};
use crate::composer::compose;
use crate::config::{Configuration, ExportFormat, MouthStyle};
use crate::raster::{RasterOptions, render_png};

/// A configuration plus rendering entry points, exposed to JavaScript.
#[wasm_bindgen]
pub struct FigureRenderer {
    config: Configuration,
}

impl Default for FigureRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl FigureRenderer {
    /// Creates a renderer holding the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> FigureRenderer {
        Self {
            config: Configuration::default(),
        }
    }

    // ---- Configuration ----

    #[wasm_bindgen(js_name = "setBodyColor")]
    pub fn set_body_color(&mut self, name: &str) {
        self.config.body_color = BodyColor::from_name(name);
    }

    #[wasm_bindgen(js_name = "setLayers")]
    pub fn set_layers(&mut self, num_layers: i32) {
        self.config.num_layers = num_layers;
    }

    #[wasm_bindgen(js_name = "setEyes")]
    pub fn set_eyes(&mut self, num_eyes: i32) {
        self.config.num_eyes = num_eyes;
    }

    #[wasm_bindgen(js_name = "setEyeColor")]
    pub fn set_eye_color(&mut self, name: &str) {
        self.config.eye_color = EyeColor::from_name(name);
    }

    #[wasm_bindgen(js_name = "setMouth")]
    pub fn set_mouth(&mut self, name: &str) {
        self.config.mouth_style = MouthStyle::from_name(name);
    }

    #[wasm_bindgen(js_name = "setArms")]
    pub fn set_arms(&mut self, has_arms: bool) {
        self.config.has_arms = has_arms;
    }

    #[wasm_bindgen(js_name = "setLegs")]
    pub fn set_legs(&mut self, has_legs: bool) {
        self.config.has_legs = has_legs;
    }

    /// Replaces the whole configuration with a plain JS object in the
    /// camelCase JSON shape. Missing fields take their defaults.
    #[wasm_bindgen(js_name = "setConfig")]
    pub fn set_config(&mut self, value: JsValue) -> Result<(), JsError> {
        self.config = serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsError::new(&format!("Failed to read configuration: {}", e)))?;
        Ok(())
    }

    /// Returns the current configuration as a plain JS object.
    pub fn config(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.config)
            .map_err(|e| JsError::new(&format!("Failed to write configuration: {}", e)))
    }

    /// Resets to the default configuration.
    pub fn reset(&mut self) {
        self.config = Configuration::default();
    }

    // ---- Rendering ----

    /// Renders SVG markup for inline preview.
    #[wasm_bindgen(js_name = "renderSvg")]
    pub fn render_svg(&self) -> String {
        compose(&self.config).to_svg()
    }

    /// Renders a standalone `.svg` file body.
    #[wasm_bindgen(js_name = "renderSvgFile")]
    pub fn render_svg_file(&self) -> String {
        compose(&self.config).to_svg_file()
    }

    /// Renders PNG bytes at `scale` pixels per unit.
    #[wasm_bindgen(js_name = "renderPng")]
    pub fn render_png(&self, scale: f32) -> Result<Vec<u8>, JsError> {
        let options = RasterOptions::default().with_scale(scale);
        render_png(&compose(&self.config), &options)
            .map_err(|e| JsError::new(&format!("PNG export failed: {}", e)))
    }

    /// Download name for `"svg"` or `"png"`.
    #[wasm_bindgen(js_name = "fileName")]
    pub fn file_name(&self, format: &str) -> String {
        self.config.file_name(ExportFormat::from_name(format))
    }

    /// Caption describing the current figure.
    pub fn description(&self) -> String {
        self.config.description()
    }
}
