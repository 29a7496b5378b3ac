//! Page wiring configuration. Defaults describe the demo page markup.

use crate::label::LabelFormat;

/// Element ids, class names and data attributes the page is expected to carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub modal: String,
    pub close: String,
    pub canvas: String,
    pub loading: String,
    pub restart: String,
    pub demo_button_class: String,
    pub panel_class: String,
    pub demo_attr: String,
    pub width_attr: String,
    pub height_attr: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            modal: "modal".into(),
            close: "close".into(),
            canvas: "canvas".into(),
            loading: "loading-div".into(),
            restart: "restart".into(),
            demo_button_class: "demo-button".into(),
            panel_class: "variable-input".into(),
            demo_attr: "data-demo".into(),
            width_attr: "data-width".into(),
            height_attr: "data-height".into(),
        }
    }
}

/// A range input with a label mirroring its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderSpec {
    pub input_id: String,
    pub label_id: String,
    /// Written over whatever the markup declares.
    pub initial: i32,
    pub format: LabelFormat,
}

impl SliderSpec {
    /// Uses the `label_<id>` naming of the demo page.
    pub fn new(input_id: &str, initial: i32, format: LabelFormat) -> Self {
        Self {
            input_id: input_id.to_owned(),
            label_id: format!("label_{input_id}"),
            initial,
            format,
        }
    }
}

/// Settings for the object handed to the native module's loader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Forward the module's stdout to the log.
    pub echo_print: bool,
    /// Forward the module's stderr to the log.
    pub echo_errors: bool,
    /// Loader script to append once `Module` is installed.
    pub native_script: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub ids: ElementIds,
    pub sliders: Vec<SliderSpec>,
    /// Name of the global the native module exports for restarting.
    pub restart_export: String,
    pub bootstrap: BootstrapConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            sliders: vec![
                SliderSpec::new("N_PART", 14, LabelFormat::PowerOfTwo),
                SliderSpec::new("P_SIZE_MIN", 2, LabelFormat::Raw),
                SliderSpec::new("P_SIZE_MAX", 2, LabelFormat::Raw),
                SliderSpec::new("CLOTH_GRID", 6, LabelFormat::PowerOfTwo),
            ],
            restart_export: "_restart_demo".into(),
            bootstrap: BootstrapConfig::default(),
        }
    }
}
