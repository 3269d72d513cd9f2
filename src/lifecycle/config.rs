/// Inputs for the demo sequence run by [`PatternShowcase`](super::PatternShowcase).
///
/// The [`Default`] values reproduce the standard run. There is no file or CLI layer;
/// callers (the binary and the tests) build this struct directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseConfig {
    /// Discriminators handed to the user factory, in order.
    pub user_kinds: Vec<String>,
    pub customer: String,
    pub items: Vec<String>,
    pub shipping: String,
    pub notes: String,
    /// Template text for the prototype log message.
    pub log_template: String,
    /// One clone of the template is made per entry, each with these details.
    pub log_details: Vec<String>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            user_kinds: vec!["cliente".into(), "admin".into()],
            customer: "María".into(),
            items: vec!["Teclado".into(), "Mouse".into()],
            shipping: "Envío estándar".into(),
            notes: "Enviar en paquete ecológico".into(),
            log_template: "ERROR".into(),
            log_details: vec![
                "Archivo no encontrado".into(),
                "Permisos insuficientes".into(),
            ],
        }
    }
}
