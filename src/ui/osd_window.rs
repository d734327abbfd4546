use gtk4::gdk_pixbuf::Pixbuf;
use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, Box, Image, Label, Orientation};
use gtk4_layer_shell::{Edge, Layer, LayerShell};

use crate::config::Config;

/// Overlay showing the rendered battery icon next to a short label.
#[derive(Clone)]
pub struct OSDWindow {
    window: ApplicationWindow,
    icon: Image,
    label: Label,
}

impl OSDWindow {
    pub fn new(app: &Application, config: &Config) -> Self {
        let window = ApplicationWindow::builder()
            .application(app)
            .build();

        window.init_layer_shell();
        window.set_layer(Layer::Overlay);
        window.set_keyboard_mode(gtk4_layer_shell::KeyboardMode::None);

        for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
            window.set_anchor(edge, false);
            window.set_margin(edge, 0);
        }

        match config.position.horizontal.as_str() {
            "left" => {
                window.set_anchor(Edge::Left, true);
                window.set_margin(Edge::Left, config.position.padding_left);
            }
            "right" => {
                window.set_anchor(Edge::Right, true);
                window.set_margin(Edge::Right, config.position.padding_right);
            }
            _ => {
                window.set_anchor(Edge::Left, true);
                window.set_anchor(Edge::Right, true);
            }
        }

        match config.position.vertical.as_str() {
            "bottom" => {
                window.set_anchor(Edge::Bottom, true);
                window.set_margin(Edge::Bottom, config.position.padding_bottom);
            }
            _ => {
                window.set_anchor(Edge::Top, true);
                window.set_margin(Edge::Top, config.position.padding_top);
            }
        }

        let container = Box::new(Orientation::Horizontal, 6);
        container.set_halign(gtk4::Align::Center);
        container.set_valign(gtk4::Align::Center);
        container.add_css_class("osd-container");

        let icon = Image::from_icon_name(PLACEHOLDER_ICON);
        icon.add_css_class("osd-icon");
        container.append(&icon);

        let label = Label::new(None);
        label.add_css_class("osd-label");
        container.append(&label);

        window.set_child(Some(&container));
        window.set_visible(true);

        Self { window, icon, label }
    }

    /// Shows `text` and, when present, `icon`. Without an icon the previous
    /// one stays up, unless it belongs to a fault.
    pub fn show_status(&self, icon: Option<&Pixbuf>, text: &str) {
        self.update(icon, text, false);
        self.window.remove_css_class("fault");
    }

    pub fn show_fault(&self, icon: Option<&Pixbuf>, text: &str) {
        self.update(icon, text, true);
        self.window.add_css_class("fault");
    }

    fn update(&self, icon: Option<&Pixbuf>, text: &str, fault: bool) {
        let showing_fault = self.window.has_css_class("fault");
        match (icon_update(showing_fault, fault, icon.is_some()), icon) {
            (IconUpdate::Replace, Some(pixbuf)) => {
                let texture = gdk::Texture::for_pixbuf(pixbuf);
                self.icon.set_pixel_size(pixbuf.width().max(pixbuf.height()));
                self.icon.set_paintable(Some(&texture));
            }
            (IconUpdate::Placeholder, _) => {
                self.icon.set_icon_name(Some(PLACEHOLDER_ICON));
            }
            _ => {}
        }
        self.label.set_text(text);
    }
}

const PLACEHOLDER_ICON: &str = "battery-missing-symbolic";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IconUpdate {
    Replace,
    Keep,
    Placeholder,
}

/// A missing icon keeps the previous one only while the window stays on
/// the same side of status versus fault.
fn icon_update(showing_fault: bool, fault: bool, has_icon: bool) -> IconUpdate {
    if has_icon {
        IconUpdate::Replace
    } else if showing_fault != fault {
        IconUpdate::Placeholder
    } else {
        IconUpdate::Keep
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_icon_always_replaces() {
        for (showing_fault, fault) in [(false, false), (true, false), (false, true), (true, true)] {
            assert_eq!(icon_update(showing_fault, fault, true), IconUpdate::Replace);
        }
    }

    #[test]
    fn missing_status_icon_after_fault_clears_fault_icon() {
        assert_eq!(icon_update(true, false, false), IconUpdate::Placeholder);
    }

    #[test]
    fn missing_fault_icon_after_status_clears_status_icon() {
        assert_eq!(icon_update(false, true, false), IconUpdate::Placeholder);
    }

    #[test]
    fn missing_icon_keeps_previous_of_same_kind() {
        assert_eq!(icon_update(false, false, false), IconUpdate::Keep);
        assert_eq!(icon_update(true, true, false), IconUpdate::Keep);
    }
}
