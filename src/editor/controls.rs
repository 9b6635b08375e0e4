//! View model of the editor's input controls.
//!
//! Every control is a projection of `ThemeState` except the hex text fields,
//! which may hold a draft the user is still typing. A draft is shown in
//! place of the model value until it is accepted or overwritten.

use crate::theme::{ColorField, HexColor, NumericField, PixelValue, ThemeState};

pub const EXPORT_LABEL: &str = "Export Theme";
pub const EXPORT_ACK_LABEL: &str = "✓ Theme Exported!";

/// Swatch picker paired with a hex text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorControl {
    swatch: HexColor,
    hex_draft: Option<String>,
}

impl ColorControl {
    fn new(color: HexColor) -> Self {
        ColorControl {
            swatch: color,
            hex_draft: None,
        }
    }

    pub fn swatch(&self) -> &HexColor {
        &self.swatch
    }

    /// What the hex text field displays
    pub fn hex_text(&self) -> &str {
        self.hex_draft.as_deref().unwrap_or(self.swatch.as_str())
    }

    pub fn has_draft(&self) -> bool {
        self.hex_draft.is_some()
    }
}

/// Range slider with its mirrored readout label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderControl {
    value: PixelValue,
}

impl SliderControl {
    pub fn value(&self) -> PixelValue {
        self.value
    }

    /// Slider's raw value text (`"16"`)
    pub fn value_text(&self) -> String {
        self.value.control_text()
    }

    /// Readout label (`"16px"`)
    pub fn readout(&self) -> String {
        self.value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlPanel {
    primary: ColorControl,
    secondary: ColorControl,
    accent: ColorControl,
    font_family: String,
    font_size: SliderControl,
    border_radius: SliderControl,
    padding: SliderControl,
    pub dark_mode: bool,
    pub export_button: &'static str,
    pub active_preset: Option<&'static str>,
}

impl ControlPanel {
    pub fn from_state(state: &ThemeState) -> Self {
        ControlPanel {
            primary: ColorControl::new(state.primary_color.clone()),
            secondary: ColorControl::new(state.secondary_color.clone()),
            accent: ColorControl::new(state.accent_color.clone()),
            font_family: state.font_family.clone(),
            font_size: SliderControl {
                value: state.font_size,
            },
            border_radius: SliderControl {
                value: state.border_radius,
            },
            padding: SliderControl {
                value: state.padding,
            },
            dark_mode: false,
            export_button: EXPORT_LABEL,
            active_preset: None,
        }
    }

    pub fn color(&self, field: ColorField) -> &ColorControl {
        match field {
            ColorField::Primary => &self.primary,
            ColorField::Secondary => &self.secondary,
            ColorField::Accent => &self.accent,
        }
    }

    fn color_mut(&mut self, field: ColorField) -> &mut ColorControl {
        match field {
            ColorField::Primary => &mut self.primary,
            ColorField::Secondary => &mut self.secondary,
            ColorField::Accent => &mut self.accent,
        }
    }

    pub fn slider(&self, field: NumericField) -> &SliderControl {
        match field {
            NumericField::FontSize => &self.font_size,
            NumericField::BorderRadius => &self.border_radius,
            NumericField::Padding => &self.padding,
        }
    }

    fn slider_mut(&mut self, field: NumericField) -> &mut SliderControl {
        match field {
            NumericField::FontSize => &mut self.font_size,
            NumericField::BorderRadius => &mut self.border_radius,
            NumericField::Padding => &mut self.padding,
        }
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Overwrite every state-backed control. Hex drafts survive.
    pub fn sync(&mut self, state: &ThemeState) {
        for field in ColorField::ALL {
            self.color_mut(field).swatch = state.color(field).clone();
        }
        self.font_family.clone_from(&state.font_family);
        for field in NumericField::ALL {
            self.slider_mut(field).value = state.numeric(field);
        }
    }

    pub fn set_hex_draft(&mut self, field: ColorField, text: &str) {
        self.color_mut(field).hex_draft = Some(text.to_string());
    }

    pub fn clear_hex_draft(&mut self, field: ColorField) {
        self.color_mut(field).hex_draft = None;
    }

    pub fn clear_all_drafts(&mut self) {
        for field in ColorField::ALL {
            self.clear_hex_draft(field);
        }
    }

    /// Whether swatch and hex text agree for every color
    pub fn colors_in_sync(&self) -> bool {
        ColorField::ALL
            .iter()
            .all(|&f| self.color(f).hex_text() == self.color(f).swatch().as_str())
    }
}
