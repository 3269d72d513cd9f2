//! Abstract Factory: themed UI widgets produced in matched families.
//!
//! Client code talks only to [`GuiFactory`], [`Button`] and [`Menu`]. A new family
//! (for example a Mac theme) is one more `GuiFactory` implementation; nothing in
//! [`render_window`] or the showcase changes.

pub mod windows;

pub use windows::*;

use std::io::{self, Write};
use tracing::debug;

pub trait Button {
    /// Name of the themed family this widget belongs to.
    fn family(&self) -> &'static str;
    fn render(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub trait Menu {
    fn family(&self) -> &'static str;
    fn render(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Produces one button and one menu from the same family.
pub trait GuiFactory {
    fn family(&self) -> &'static str;
    fn create_button(&self) -> Box<dyn Button>;
    fn create_menu(&self) -> Box<dyn Menu>;
}

/// Builds and renders a button and a menu with whatever family `factory` provides.
pub fn render_window(factory: &dyn GuiFactory, out: &mut dyn Write) -> io::Result<()> {
    debug!(family = factory.family(), "Rendering window");
    let button = factory.create_button();
    let menu = factory.create_menu();
    button.render(out)?;
    menu.render(out)
}
