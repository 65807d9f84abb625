mod clipboard;
mod navigation;
mod types;
pub mod view;

pub use navigation::Navigable;
pub use types::{AppEvent, StatusToast};

use clipboard::ClipboardService;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use floatfield::field::DEFAULT_HEIGHT;
use floatfield::{
    AssetLoader, BundledAssets, CornerMask, FieldStyle, FloatingLabelTextField, FontDescriptor,
    Rgba,
};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Duration;
use tracing::{info, trace, warn};

const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Demo screen state: a column of fields, one of them focused
pub struct App {
    pub fields: Vec<FloatingLabelTextField>,
    pub selected_index: usize,
    pub should_quit: bool,
    status_toast: Option<StatusToast>,
    event_rx: Receiver<AppEvent>,
    clipboard: ClipboardService,
}

impl App {
    pub fn new(style: &FieldStyle) -> Self {
        let (event_tx, event_rx) = channel();
        let mut app = Self {
            fields: demo_fields(style, &BundledAssets::new(), &event_tx),
            selected_index: 0,
            should_quit: false,
            status_toast: None,
            event_rx,
            clipboard: ClipboardService::new(),
        };
        if let Some(field) = app.fields.first_mut() {
            field.focus();
        }
        app
    }

    pub fn selected_field(&self) -> Option<&FloatingLabelTextField> {
        self.fields.get(self.selected_index)
    }

    pub fn selected_field_mut(&mut self) -> Option<&mut FloatingLabelTextField> {
        self.fields.get_mut(self.selected_index)
    }

    /// Any field still mid-transition
    pub fn is_animating(&self) -> bool {
        self.fields.iter().any(FloatingLabelTextField::is_animating)
    }

    /// Screen-level keys first, then the focused field
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.next_item(),
            KeyCode::BackTab => self.previous_item(),
            KeyCode::Char('v') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.paste_from_clipboard();
            }
            KeyCode::Char(_)
            | KeyCode::Backspace
            | KeyCode::Delete
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::Enter
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Insert
            | KeyCode::F(_)
            | KeyCode::Null
            | KeyCode::CapsLock
            | KeyCode::ScrollLock
            | KeyCode::NumLock
            | KeyCode::PrintScreen
            | KeyCode::Pause
            | KeyCode::Menu
            | KeyCode::KeypadBegin
            | KeyCode::Media(_)
            | KeyCode::Modifier(_) => {
                if let Some(field) = self.selected_field_mut() {
                    field.handle_key(key);
                }
            }
        }
    }

    /// Bracketed paste from the terminal
    pub fn handle_paste(&mut self, text: &str) {
        let accepted = self
            .selected_field_mut()
            .is_some_and(|field| field.handle_paste(text));
        if !accepted {
            trace!(length = text.chars().count(), "paste not applied");
        }
    }

    fn paste_from_clipboard(&mut self) {
        match self.clipboard.paste_text() {
            Ok(text) => self.handle_paste(&text),
            Err(err) => {
                warn!(error = %err, "clipboard read failed");
                self.show_status_toast("CLIPBOARD UNAVAILABLE");
            }
        }
    }

    /// Drains callback events raised since the last frame
    pub fn check_field_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                AppEvent::IconAction { placeholder } => {
                    info!(%placeholder, "icon action");
                    self.show_status_toast(format!("ACTION: {}", placeholder.trim()));
                }
                AppEvent::TextChanged { index, length } => {
                    trace!(index, length, "text changed");
                }
            }
        }
    }

    pub fn show_status_toast(&mut self, message: impl Into<String>) {
        self.status_toast = Some(StatusToast::new(message));
    }

    pub fn clear_expired_status_toast(&mut self) {
        let should_clear = self
            .status_toast
            .as_ref()
            .is_some_and(|toast| toast.is_expired(TOAST_DURATION));
        if should_clear {
            self.status_toast = None;
        }
    }

    #[must_use]
    pub fn status_toast_message(&self) -> Option<&str> {
        self.status_toast.as_ref().map(|toast| toast.message.as_str())
    }
}

impl Navigable for App {
    fn item_count(&self) -> usize {
        self.fields.len()
    }

    fn selected_index(&self) -> usize {
        self.selected_index
    }

    fn select(&mut self, index: usize) {
        if let Some(field) = self.selected_field_mut() {
            field.blur();
        }
        self.selected_index = index;
        if let Some(field) = self.selected_field_mut() {
            field.focus();
        }
    }
}

/// The example screen: one field per configurable property
fn demo_fields(
    style: &FieldStyle,
    assets: &dyn AssetLoader,
    event_tx: &Sender<AppEvent>,
) -> Vec<FloatingLabelTextField> {
    let mut height = FloatingLabelTextField::with_style("Height", 80.0, style.clone());
    height.set_text_color(Rgba::rgb(0xff, 0x00, 0x00));

    let mut secure = FloatingLabelTextField::with_style("Secure", DEFAULT_HEIGHT, style.clone());
    secure.set_secure(true);
    secure.set_right_icon(Some(assets.icon_or_empty("eye_ic")));

    let mut corner_radius =
        FloatingLabelTextField::with_style("CornerRadius", DEFAULT_HEIGHT, style.clone());
    corner_radius.set_border_corner_radius(CornerMask::BOTTOM_LEFT | CornerMask::BOTTOM_RIGHT);

    let mut font = FloatingLabelTextField::with_style("Font", DEFAULT_HEIGHT, style.clone());
    font.set_font(FontDescriptor::bold(30.0));

    let mut required =
        FloatingLabelTextField::with_style("Required ", DEFAULT_HEIGHT, style.clone());
    required.set_required(true);

    let mut no_clear =
        FloatingLabelTextField::with_style("Hide clear button ", DEFAULT_HEIGHT, style.clone());
    no_clear.set_has_clear_button(false);

    let mut icon = FloatingLabelTextField::with_style("Has icon", DEFAULT_HEIGHT, style.clone());
    icon.set_right_icon(Some(assets.icon_or_empty("camera_ic")));
    let action_tx = event_tx.clone();
    icon.set_right_button_action(move || {
        let _ = action_tx.send(AppEvent::IconAction {
            placeholder: "Has icon".to_string(),
        });
    });

    let mut fields = vec![height, secure, corner_radius, font, required, no_clear, icon];
    for (index, field) in fields.iter_mut().enumerate() {
        let tx = event_tx.clone();
        field.set_on_text_changed(move |text| {
            let _ = tx.send(AppEvent::TextChanged {
                index,
                length: text.chars().count(),
            });
        });
    }
    fields
}
