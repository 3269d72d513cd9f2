use creational_patterns::order_builder::{Order, OrderBuilder};

#[test]
fn test_builder_chain_produces_order() {
    let order = OrderBuilder::new()
        .set_customer("María")
        .add_item("Teclado")
        .add_item("Mouse")
        .set_shipping("Envío estándar")
        .set_notes("x")
        .build();

    assert_eq!(order.customer(), "María");
    assert_eq!(order.items(), ["Teclado", "Mouse"]);
    assert_eq!(order.shipping_method(), "Envío estándar");
    assert_eq!(order.notes(), "x");
}

#[test]
fn test_items_keep_order_and_duplicates() {
    let order = Order::builder()
        .add_item("Mouse")
        .add_item("Teclado")
        .add_item("Mouse")
        .build();

    assert_eq!(order.items(), ["Mouse", "Teclado", "Mouse"]);
}

/// Nothing is validated; unset fields stay empty.
#[test]
fn test_unset_fields_keep_zero_values() {
    let order = OrderBuilder::new().build();

    assert_eq!(order, Order::default());
    assert!(order.customer().is_empty());
    assert!(order.items().is_empty());
    assert!(order.shipping_method().is_empty());
    assert!(order.notes().is_empty());
}

/// Later setter calls overwrite earlier ones.
#[test]
fn test_last_setter_wins() {
    let order = OrderBuilder::new()
        .set_customer("Ana")
        .set_customer("María")
        .set_shipping("Exprés")
        .build();

    assert_eq!(order.customer(), "María");
    assert_eq!(order.shipping_method(), "Exprés");
}

#[test]
fn test_show_writes_summary_block() {
    let order = OrderBuilder::new()
        .set_customer("María")
        .add_item("Teclado")
        .add_item("Mouse")
        .set_shipping("Envío estándar")
        .set_notes("Enviar en paquete ecológico")
        .build();

    let mut out = Vec::<u8>::new();
    order.show(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\n[Orden]\n\
         Cliente: María\n\
         Ítems: [Teclado, Mouse]\n\
         Envío: Envío estándar\n\
         Notas: Enviar en paquete ecológico\n"
    );
}

#[test]
fn test_order_serializes_with_field_names() {
    let order = OrderBuilder::new()
        .set_customer("María")
        .add_item("Teclado")
        .build();

    let json = serde_json::to_value(&order).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "customer": "María",
            "items": ["Teclado"],
            "shipping_method": "",
            "notes": ""
        })
    );
}
