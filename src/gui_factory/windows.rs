//! The Windows widget family.

use super::{Button, GuiFactory, Menu};
use std::io::{self, Write};

const FAMILY: &str = "Windows";

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsButton;

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsMenu;

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsFactory;

impl Button for WindowsButton {
    fn family(&self) -> &'static str {
        FAMILY
    }

    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "[{FAMILY}] Botón renderizado.")
    }
}

impl Menu for WindowsMenu {
    fn family(&self) -> &'static str {
        FAMILY
    }

    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "[{FAMILY}] Menú renderizado.")
    }
}

impl GuiFactory for WindowsFactory {
    fn family(&self) -> &'static str {
        FAMILY
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_menu(&self) -> Box<dyn Menu> {
        Box::new(WindowsMenu)
    }
}
