//! The theme controller: owns the state, the controls and the effect target.
//!
//! Every handler computes the next `ThemeState`, swaps it in and calls
//! `render`, which projects state onto the controls and then onto the
//! preview. Nothing reads back from the controls.

use tracing::{debug, error, info, warn};

use super::controls::{ControlPanel, EXPORT_ACK_LABEL, EXPORT_LABEL};
use super::events::{DroppedFile, EditorEvent};
use super::host::HostShell;
use super::preview::{theme_properties, PreviewTarget, DARK_MODE_CLASS, DRAG_OPACITY};
use crate::config::EditorConfig;
use crate::error::{ErrorSeverity, ResultExt, ThemeEditorError};
use crate::logging;
use crate::scheduler::{Clock, Scheduler, SystemClock, TaskHandle};
use crate::shortcuts::{KeyPress, Modifiers, Shortcut};
use crate::theme::{
    export_filename, find_preset, parse_theme_document, ColorField, HexColor, NumericField,
    PixelValue, Preset, ThemeDocument, ThemeState, DEFAULT_PRESET,
};

/// Only this declared type is accepted for dropped theme files
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Identifies one in-flight file read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImportTicket(u64);

/// A read the front end must perform and report back with `complete_import`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImport {
    pub ticket: ImportTicket,
    pub file: DroppedFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImportState {
    Idle,
    Reading(ImportTicket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControllerTask {
    RevertExportLabel,
}

/// Whether a key press was consumed (the host suppresses its default action)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHandling {
    Handled,
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Applied,
    Ignored,
    /// A file read must be started for this import
    ImportStarted(PendingImport),
}

impl From<bool> for EventOutcome {
    fn from(applied: bool) -> Self {
        if applied {
            EventOutcome::Applied
        } else {
            EventOutcome::Ignored
        }
    }
}

pub struct ThemeController<P: PreviewTarget, H: HostShell> {
    state: ThemeState,
    controls: ControlPanel,
    preview: P,
    host: H,
    clock: Box<dyn Clock>,
    scheduler: Scheduler<ControllerTask>,
    pending_revert: Option<TaskHandle>,
    import: ImportState,
    next_ticket: u64,
    config: EditorConfig,
    export_shortcut: Shortcut,
    reset_shortcut: Shortcut,
}

impl<P: PreviewTarget, H: HostShell> ThemeController<P, H> {
    /// Create a controller showing the default preset, already rendered.
    pub fn new(config: EditorConfig, preview: P, host: H, clock: Box<dyn Clock>) -> Self {
        let export_shortcut = config
            .export_shortcut()
            .warn_on_err()
            .unwrap_or_else(|| Shortcut::new("e", Modifiers::cmd()));
        let reset_shortcut = config
            .reset_shortcut()
            .warn_on_err()
            .unwrap_or_else(|| Shortcut::new("r", Modifiers::cmd()));

        let state = ThemeState::default();
        let mut controller = ThemeController {
            controls: ControlPanel::from_state(&state),
            state,
            preview,
            host,
            clock,
            scheduler: Scheduler::new(),
            pending_revert: None,
            import: ImportState::Idle,
            next_ticket: 1,
            config,
            export_shortcut,
            reset_shortcut,
        };
        controller.render();
        controller
    }

    pub fn with_defaults(preview: P, host: H) -> Self {
        Self::new(EditorConfig::default(), preview, host, Box::new(SystemClock))
    }

    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    pub fn controls(&self) -> &ControlPanel {
        &self.controls
    }

    pub fn preview(&self) -> &P {
        &self.preview
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn export_shortcut(&self) -> &Shortcut {
        &self.export_shortcut
    }

    pub fn reset_shortcut(&self) -> &Shortcut {
        &self.reset_shortcut
    }

    pub fn is_import_in_progress(&self) -> bool {
        matches!(self.import, ImportState::Reading(_))
    }

    /// Dispatch a user event
    pub fn handle(&mut self, event: EditorEvent) -> EventOutcome {
        match event {
            EditorEvent::SetSwatch { field, value } => {
                self.set_swatch(field, value);
                EventOutcome::Applied
            }
            EditorEvent::SetHexText { field, text } => self.set_hex_text(field, &text).into(),
            EditorEvent::SetFontFamily { value } => {
                self.set_font_family(value);
                EventOutcome::Applied
            }
            EditorEvent::SetSlider { field, value } => {
                self.set_slider(field, value);
                EventOutcome::Applied
            }
            EditorEvent::ApplyPreset { name } => self.apply_preset(&name).into(),
            EditorEvent::Reset => self.reset().into(),
            EditorEvent::Export => self.export_theme().is_some().into(),
            EditorEvent::SetDarkMode { enabled } => {
                self.set_dark_mode(enabled);
                EventOutcome::Applied
            }
            EditorEvent::Key { key, modifiers } => {
                let press = KeyPress::new(key, Modifiers::from_names(&modifiers));
                (self.handle_key(&press) == KeyHandling::Handled).into()
            }
            EditorEvent::DragOver => {
                self.drag_over();
                EventOutcome::Applied
            }
            EditorEvent::DragLeave => {
                self.drag_leave();
                EventOutcome::Applied
            }
            EditorEvent::Drop { files } => match self.drop_files(files) {
                Some(pending) => EventOutcome::ImportStarted(pending),
                None => EventOutcome::Ignored,
            },
            EditorEvent::Tick => (self.tick() > 0).into(),
        }
    }

    // ============================================
    // RENDERING
    // ============================================

    /// Push the current state onto the preview's style properties.
    /// Idempotent.
    pub fn apply_theme(&mut self) {
        for (name, value) in theme_properties(&self.state) {
            self.preview.set_style_property(name, &value);
        }
    }

    fn render(&mut self) {
        self.controls.sync(&self.state);
        self.apply_theme();
    }

    fn commit(&mut self, next: ThemeState) {
        self.state = next;
        self.render();
    }

    // ============================================
    // CONTROL INPUT
    // ============================================

    /// Swatch picker input: always accepted.
    pub fn set_swatch(&mut self, field: ColorField, color: HexColor) {
        debug!(field = %field, color = %color, "Swatch changed");
        self.controls.clear_hex_draft(field);
        let next = self.state.with_color(field, color);
        self.commit(next);
    }

    /// Hex text input. Returns false, keeping the typed text as a draft,
    /// when `text` is not `#RRGGBB`.
    pub fn set_hex_text(&mut self, field: ColorField, text: &str) -> bool {
        match HexColor::parse(text) {
            Ok(color) => {
                self.controls.clear_hex_draft(field);
                let next = self.state.with_color(field, color);
                self.commit(next);
                true
            }
            Err(_) => {
                debug!(field = %field, text = text, "Hex text not a color yet");
                self.controls.set_hex_draft(field, text);
                false
            }
        }
    }

    pub fn set_font_family(&mut self, font_family: impl Into<String>) {
        let next = self.state.with_font_family(font_family);
        self.commit(next);
    }

    pub fn set_slider(&mut self, field: NumericField, value: i64) {
        let next = self.state.with_numeric(field, PixelValue::px(value));
        self.commit(next);
    }

    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.controls.dark_mode = enabled;
        self.preview.set_class(DARK_MODE_CLASS, enabled);
        logging::log_ui_event("dark_mode", if enabled { "on" } else { "off" }, None);
    }

    // ============================================
    // PRESETS
    // ============================================

    /// Preset button: replace the theme with a built-in preset and mark it
    /// active. Unknown names do nothing.
    pub fn apply_preset(&mut self, name: &str) -> bool {
        let Some(preset) = find_preset(name) else {
            debug!(preset = name, "Unknown preset ignored");
            return false;
        };

        self.controls.active_preset = Some(preset.name);
        self.load_preset(preset);
        true
    }

    /// Back to the default preset. The active preset marker is left alone.
    pub fn reset(&mut self) -> bool {
        let Some(preset) = find_preset(DEFAULT_PRESET) else {
            return false;
        };
        self.load_preset(preset);
        true
    }

    fn load_preset(&mut self, preset: &Preset) {
        self.controls.clear_all_drafts();
        self.commit(preset.to_state());
        info!(event_type = "preset", preset = preset.name, "Preset applied");
    }

    // ============================================
    // EXPORT
    // ============================================

    /// Offer the current theme as a download and flash the acknowledgment.
    ///
    /// Returns the filename, or `None` if the download failed.
    pub fn export_theme(&mut self) -> Option<String> {
        let now = self.clock.now();
        let json = ThemeDocument::from_state(&self.state, now)
            .to_json_pretty()
            .log_err()?;
        let filename = export_filename(now);
        self.host.download(&filename, &json).log_err()?;

        if let Some(previous) = self.pending_revert.take() {
            self.scheduler.cancel(previous);
        }
        self.controls.export_button = EXPORT_ACK_LABEL;
        self.pending_revert = Some(self.scheduler.schedule_after(
            now,
            self.config.ack_duration(),
            ControllerTask::RevertExportLabel,
        ));

        info!(event_type = "theme_export", filename = %filename, "Theme exported");
        Some(filename)
    }

    /// Run scheduled work that is due. Returns how many tasks ran.
    pub fn tick(&mut self) -> usize {
        let due = self.scheduler.take_due(self.clock.now());
        for task in &due {
            match task {
                ControllerTask::RevertExportLabel => {
                    self.controls.export_button = EXPORT_LABEL;
                    self.pending_revert = None;
                }
            }
        }
        due.len()
    }

    // ============================================
    // KEYBOARD
    // ============================================

    pub fn handle_key(&mut self, press: &KeyPress) -> KeyHandling {
        if self.export_shortcut.matches(press) {
            logging::log_key_event(&press.key, &press.modifiers.to_string(), "export");
            self.export_theme();
            KeyHandling::Handled
        } else if self.reset_shortcut.matches(press) {
            logging::log_key_event(&press.key, &press.modifiers.to_string(), "reset");
            self.reset();
            KeyHandling::Handled
        } else {
            KeyHandling::Ignored
        }
    }

    // ============================================
    // IMPORT
    // ============================================

    pub fn drag_over(&mut self) {
        self.preview.set_opacity(DRAG_OPACITY);
    }

    pub fn drag_leave(&mut self) {
        self.preview.set_opacity(1.0);
    }

    /// Accept a drop. Only the first file counts, and only when it is
    /// declared as JSON and no other import is still being read.
    pub fn drop_files(&mut self, files: Vec<DroppedFile>) -> Option<PendingImport> {
        self.preview.set_opacity(1.0);

        let file = files.into_iter().next()?;
        if file.content_type != JSON_CONTENT_TYPE {
            debug!(
                file = %file.name,
                content_type = %file.content_type,
                "Dropped file is not JSON, ignoring"
            );
            return None;
        }
        if let ImportState::Reading(ticket) = self.import {
            warn!(file = %file.name, pending = ticket.0, "Import already in progress, drop ignored");
            return None;
        }

        let ticket = ImportTicket(self.next_ticket);
        self.next_ticket += 1;
        self.import = ImportState::Reading(ticket);
        info!(file = %file.name, ticket = ticket.0, "Theme import started");
        Some(PendingImport { ticket, file })
    }

    /// Deliver the outcome of a read started by `drop_files`.
    /// Results for tickets that are no longer pending are discarded.
    pub fn complete_import(
        &mut self,
        ticket: ImportTicket,
        contents: Result<String, ThemeEditorError>,
    ) -> bool {
        if self.import != ImportState::Reading(ticket) {
            debug!(ticket = ticket.0, "Stale import result discarded");
            return false;
        }
        self.import = ImportState::Idle;

        match contents {
            Ok(text) => self.import_text(&text),
            Err(e) => {
                self.report_failure(&e);
                false
            }
        }
    }

    /// Only critical failures interrupt the user with an alert.
    fn report_failure(&mut self, err: &ThemeEditorError) {
        match err.severity() {
            ErrorSeverity::Critical => {
                error!(error = %err, "Theme import rejected");
                self.host.alert(&err.user_message());
            }
            ErrorSeverity::Error | ErrorSeverity::Warning => {
                warn!(error = %err, "Theme import failed");
            }
            ErrorSeverity::Info => debug!(error = %err, "Theme import skipped"),
        }
    }

    /// Apply an imported theme document. Malformed JSON raises one alert
    /// and leaves everything unchanged.
    pub fn import_text(&mut self, text: &str) -> bool {
        let patch = match parse_theme_document(text) {
            Ok(patch) => patch,
            Err(e) => {
                self.report_failure(&e);
                return false;
            }
        };
        if patch.is_empty() {
            debug!("Imported document has no theme groups, re-applying current theme");
        }
        let patch = if self.config.clamp_imported_values {
            patch.clamped(&self.config.control_ranges)
        } else {
            patch
        };

        if let Some(colors) = &patch.colors {
            for (field, color) in [
                (ColorField::Primary, &colors.primary),
                (ColorField::Secondary, &colors.secondary),
                (ColorField::Accent, &colors.accent),
            ] {
                if color.is_some() {
                    self.controls.clear_hex_draft(field);
                }
            }
        }

        let next = patch.apply_to(&self.state);
        // Re-applies every property, including ones the file left alone
        self.commit(next);
        info!(
            event_type = "theme_import",
            colors = patch.colors.is_some(),
            typography = patch.typography.is_some(),
            spacing = patch.spacing.is_some(),
            "Theme imported"
        );
        true
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
