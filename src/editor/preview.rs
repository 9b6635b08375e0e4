//! Effect target: the previewed booking widget and its container.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::theme::ThemeState;

pub const PRIMARY_PROPERTY: &str = "--widget-primary";
pub const SECONDARY_PROPERTY: &str = "--widget-secondary";
pub const ACCENT_PROPERTY: &str = "--widget-accent";
pub const FONT_FAMILY_PROPERTY: &str = "font-family";
pub const FONT_SIZE_PROPERTY: &str = "--widget-font-size";
pub const RADIUS_PROPERTY: &str = "--widget-radius";
pub const PADDING_PROPERTY: &str = "--widget-padding";

/// Presentation class toggled on the preview container
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Container opacity while a file is dragged over it
pub const DRAG_OPACITY: f32 = 0.5;

/// Where theme effects land.
///
/// Style properties go to the widget element; classes and opacity go to
/// the surrounding preview container.
pub trait PreviewTarget {
    fn set_style_property(&mut self, name: &str, value: &str);
    fn set_class(&mut self, class: &str, enabled: bool);
    fn set_opacity(&mut self, opacity: f32);
}

/// The seven style properties for `state`, in application order
pub fn theme_properties(state: &ThemeState) -> [(&'static str, String); 7] {
    [
        (PRIMARY_PROPERTY, state.primary_color.to_string()),
        (SECONDARY_PROPERTY, state.secondary_color.to_string()),
        (ACCENT_PROPERTY, state.accent_color.to_string()),
        (FONT_FAMILY_PROPERTY, state.font_family.clone()),
        (FONT_SIZE_PROPERTY, state.font_size.to_string()),
        (RADIUS_PROPERTY, state.border_radius.to_string()),
        (PADDING_PROPERTY, state.padding.to_string()),
    ]
}

/// In-memory preview target. Records the latest value of every property,
/// the container classes and opacity.
#[derive(Debug, Clone)]
pub struct StyleMap {
    properties: Vec<(String, String)>,
    classes: BTreeSet<String>,
    opacity: f32,
    writes: usize,
}

impl Default for StyleMap {
    fn default() -> Self {
        StyleMap {
            properties: Vec::new(),
            classes: BTreeSet::new(),
            opacity: 1.0,
            writes: 0,
        }
    }
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Total property writes, for asserting that nothing was re-applied
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Render the properties as a CSS rule for `selector`
    pub fn to_css_rule(&self, selector: &str) -> String {
        let mut css = format!("{} {{\n", selector);
        for (name, value) in &self.properties {
            let _ = writeln!(css, "  {}: {};", name, value);
        }
        css.push('}');
        css
    }
}

impl PreviewTarget for StyleMap {
    fn set_style_property(&mut self, name: &str, value: &str) {
        self.writes += 1;
        match self.properties.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self
                .properties
                .push((name.to_string(), value.to_string())),
        }
    }

    fn set_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.classes.insert(class.to_string());
        } else {
            self.classes.remove(class);
        }
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }
}
