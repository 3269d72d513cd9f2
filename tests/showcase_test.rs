use creational_patterns::connection::Provenance;
use creational_patterns::lifecycle::{PatternShowcase, ShowcaseConfig, ShowcaseError};
use creational_patterns::user_factory::UserError;

const EXPECTED: &str = "
--- Singleton ---
[Singleton] Conexión creada.
[BD] Conectado a la base de datos.
[Singleton] Conexión reutilizada.
[BD] Conectado a la base de datos.

--- Factory ---
Cliente: puede comprar productos.
Admin: puede gestionar el sistema.

--- Abstract Factory (Windows GUI) ---
[Windows] Botón renderizado.
[Windows] Menú renderizado.

--- Builder ---

[Orden]
Cliente: María
Ítems: [Teclado, Mouse]
Envío: Envío estándar
Notas: Enviar en paquete ecológico

--- Prototype ---
[LOG] ERROR - Archivo no encontrado
[LOG] ERROR - Permisos insuficientes
";

/// Full run with the default configuration, compared line for line.
#[test]
fn test_default_run_output() {
    let showcase = PatternShowcase::new(ShowcaseConfig::default());
    let mut out = Vec::<u8>::new();

    showcase.run(&mut out).expect("Default run should succeed");

    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
}

/// The registry belongs to the showcase, so a second run reuses its connection.
#[test]
fn test_second_run_reuses_connection() {
    let showcase = PatternShowcase::new(ShowcaseConfig::default());
    showcase.run(&mut Vec::<u8>::new()).unwrap();

    assert!(showcase.connections().is_initialized());
    assert_eq!(showcase.connections().acquire().provenance, Provenance::Reused);

    let mut out = Vec::<u8>::new();
    showcase.run(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("Conexión creada"));
    assert_eq!(text.matches("[Singleton] Conexión reutilizada.").count(), 2);
}

/// An invalid user kind stops the run after the factory header.
#[test]
fn test_invalid_user_kind_aborts_run() {
    let config = ShowcaseConfig {
        user_kinds: vec!["cliente".into(), "invalido".into()],
        ..ShowcaseConfig::default()
    };
    let showcase = PatternShowcase::new(config);
    let mut out = Vec::<u8>::new();

    let result = showcase.run(&mut out);

    match result {
        Err(ShowcaseError::User(UserError::InvalidArgument(kind))) => assert_eq!(kind, "invalido"),
        other => panic!("Expected InvalidArgument, got {:?}", other),
    }

    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with("--- Factory ---\n"));
    assert!(!text.contains("Cliente: puede comprar productos."));
    assert!(!text.contains("--- Builder ---"));
}

#[test]
fn test_custom_config_flows_through_demos() {
    let config = ShowcaseConfig {
        user_kinds: vec!["OPERADOR".into()],
        customer: "Luis".into(),
        items: vec!["Monitor".into(), "Monitor".into()],
        shipping: String::new(),
        notes: String::new(),
        log_template: "WARN".into(),
        log_details: vec!["Disco casi lleno".into()],
    };
    let showcase = PatternShowcase::new(config);
    let mut out = Vec::<u8>::new();

    showcase.run(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("--- Factory ---\nOperador: puede supervisar operaciones.\n\n"));
    assert!(text.contains("Cliente: Luis\nÍtems: [Monitor, Monitor]\nEnvío: \nNotas: \n"));
    assert!(text.ends_with("--- Prototype ---\n[LOG] WARN - Disco casi lleno\n"));
    assert!(showcase.templates().contains("WARN"));
    assert_eq!(showcase.templates().spawn("WARN").unwrap().details(), None);
}
