//! Builder: assembles an [`Order`] through chained calls.
//!
//! Every setter takes the builder by value and hands it back, and [`OrderBuilder::build`]
//! consumes it. Touching a builder after `build()` is a compile error:
//!
//! ```compile_fail
//! use creational_patterns::order_builder::OrderBuilder;
//!
//! let builder = OrderBuilder::new().set_customer("María");
//! let _order = builder.build();
//! let _again = builder.add_item("Mouse");
//! ```

pub mod order;

pub use order::*;

use tracing::debug;

/// Accumulates the fields of an [`Order`]. No validation is performed.
///
/// # Example
/// ```
/// use creational_patterns::order_builder::OrderBuilder;
///
/// let order = OrderBuilder::new()
///     .set_customer("María")
///     .add_item("Teclado")
///     .add_item("Mouse")
///     .build();
///
/// assert_eq!(order.items(), ["Teclado", "Mouse"]);
/// assert_eq!(order.shipping_method(), "");
/// ```
#[must_use = "a builder does nothing unless you call `.build()`"]
#[derive(Debug, Default)]
pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_customer(mut self, name: impl Into<String>) -> Self {
        self.order.customer = name.into();
        self
    }

    /// Appends an item. Repeated items are kept.
    pub fn add_item(mut self, item: impl Into<String>) -> Self {
        self.order.items.push(item.into());
        self
    }

    pub fn set_shipping(mut self, method: impl Into<String>) -> Self {
        self.order.shipping_method = method.into();
        self
    }

    pub fn set_notes(mut self, note: impl Into<String>) -> Self {
        self.order.notes = note.into();
        self
    }

    pub fn build(self) -> Order {
        debug!(items = self.order.items.len(), "Order built");
        self.order
    }
}
