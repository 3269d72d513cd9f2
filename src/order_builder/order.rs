use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// A finished order, produced by [`OrderBuilder::build`](super::OrderBuilder::build).
///
/// Fields are private. Once built, an order can only be read.
/// Fields never set on the builder stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub(super) customer: String,
    pub(super) items: Vec<String>,
    pub(super) shipping_method: String,
    pub(super) notes: String,
}

impl Order {
    /// Starts an empty [`OrderBuilder`](super::OrderBuilder).
    pub fn builder() -> super::OrderBuilder {
        super::OrderBuilder::new()
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Items in insertion order, duplicates included.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn shipping_method(&self) -> &str {
        &self.shipping_method
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Writes the order summary block, preceded by a blank line.
    pub fn show(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "[Orden]")?;
        writeln!(out, "Cliente: {}", self.customer)?;
        writeln!(out, "Ítems: [{}]", self.items.join(", "))?;
        writeln!(out, "Envío: {}", self.shipping_method)?;
        writeln!(out, "Notas: {}", self.notes)
    }
}
