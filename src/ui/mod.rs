pub mod osd_window;

pub use osd_window::OSDWindow;
