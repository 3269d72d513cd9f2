use super::{ShowcaseConfig, ShowcaseError};
use crate::connection::ConnectionRegistry;
use crate::gui_factory::{render_window, GuiFactory, WindowsFactory};
use crate::order_builder::OrderBuilder;
use crate::prototype::{LogMessage, PrototypeRegistry};
use crate::user_factory::UserFactory;
use std::io::Write;
use tracing::{debug, info, instrument};

/// The composition root for the five creational demos.
///
/// `PatternShowcase` is responsible for:
/// - **Ownership**: it holds the one [`ConnectionRegistry`] and lends it out by reference
/// - **Wiring**: it picks the [`GuiFactory`] family and registers the log templates
/// - **Sequencing**: [`run`](Self::run) executes Singleton, Factory, Abstract Factory,
///   Builder and Prototype, in that order
///
/// # Example
///
/// ```
/// use creational_patterns::lifecycle::{PatternShowcase, ShowcaseConfig};
///
/// let showcase = PatternShowcase::new(ShowcaseConfig::default());
/// let mut out = Vec::<u8>::new();
/// showcase.run(&mut out)?;
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("[Singleton] Conexión creada."));
/// # Ok::<(), creational_patterns::lifecycle::ShowcaseError>(())
/// ```
pub struct PatternShowcase {
    config: ShowcaseConfig,
    connections: ConnectionRegistry,
    gui: Box<dyn GuiFactory>,
    templates: PrototypeRegistry<LogMessage>,
}

impl PatternShowcase {
    /// Builds the showcase with the Windows GUI family and the configured log template.
    pub fn new(config: ShowcaseConfig) -> Self {
        let mut templates = PrototypeRegistry::new();
        templates.register(
            config.log_template.clone(),
            LogMessage::new(config.log_template.clone()),
        );

        Self {
            config,
            connections: ConnectionRegistry::new(),
            gui: Box::new(WindowsFactory),
            templates,
        }
    }

    /// Swaps the GUI family. Nothing else in the showcase depends on which one is used.
    pub fn with_gui_factory(mut self, factory: impl GuiFactory + 'static) -> Self {
        self.gui = Box::new(factory);
        self
    }

    pub fn connections(&self) -> &ConnectionRegistry {
        &self.connections
    }

    pub fn templates(&self) -> &PrototypeRegistry<LogMessage> {
        &self.templates
    }

    /// Runs every demo in order, writing their output to `out`.
    ///
    /// # Errors
    /// Stops at the first failure: an unknown user kind in the config, a missing log
    /// template, or a write error.
    pub fn run(&self, out: &mut dyn Write) -> Result<(), ShowcaseError> {
        info!("Starting creational pattern showcase");
        self.singleton_demo(out)?;
        self.factory_demo(out)?;
        self.abstract_factory_demo(out)?;
        self.builder_demo(out)?;
        self.prototype_demo(out)?;
        info!("Showcase completed");
        Ok(())
    }

    #[instrument(skip_all)]
    fn singleton_demo(&self, out: &mut dyn Write) -> Result<(), ShowcaseError> {
        writeln!(out, "\n--- Singleton ---")?;
        for _ in 0..2 {
            let acquired = self.connections.acquire();
            writeln!(out, "{}", acquired.provenance)?;
            acquired.connection.connect(out)?;
        }
        Ok(())
    }

    #[instrument(skip_all)]
    fn factory_demo(&self, out: &mut dyn Write) -> Result<(), ShowcaseError> {
        writeln!(out, "\n--- Factory ---")?;
        let users = self
            .config
            .user_kinds
            .iter()
            .map(|kind| UserFactory::create_user(kind))
            .collect::<Result<Vec<_>, _>>()?;
        for user in &users {
            user.access(out)?;
        }
        Ok(())
    }

    #[instrument(skip_all)]
    fn abstract_factory_demo(&self, out: &mut dyn Write) -> Result<(), ShowcaseError> {
        writeln!(out, "\n--- Abstract Factory ({} GUI) ---", self.gui.family())?;
        render_window(&*self.gui, out)?;
        Ok(())
    }

    #[instrument(skip_all)]
    fn builder_demo(&self, out: &mut dyn Write) -> Result<(), ShowcaseError> {
        writeln!(out, "\n--- Builder ---")?;
        let config = &self.config;
        let order = config
            .items
            .iter()
            .fold(OrderBuilder::new().set_customer(&config.customer), |builder, item| {
                builder.add_item(item)
            })
            .set_shipping(&config.shipping)
            .set_notes(&config.notes)
            .build();
        order.show(out)?;
        Ok(())
    }

    #[instrument(skip_all)]
    fn prototype_demo(&self, out: &mut dyn Write) -> Result<(), ShowcaseError> {
        writeln!(out, "\n--- Prototype ---")?;
        let mut logs = Vec::with_capacity(self.config.log_details.len());
        for details in &self.config.log_details {
            let mut log = self.templates.spawn(&self.config.log_template)?;
            log.set_details(details);
            logs.push(log);
        }
        for log in &logs {
            log.show(out)?;
        }
        debug!(copies = logs.len(), "Template cloned");
        Ok(())
    }
}
