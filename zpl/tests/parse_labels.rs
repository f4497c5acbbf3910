use pretty_assertions::assert_eq;
use zpl::{BarcodeType, LabelParser, LayoutItem, VariableType, zpl};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const SHIPPING_LABEL: &str = "^XA
^FX Top section with company logo, name and address.
^CF0,60
^FO50,50^GB100,100,100^FS
^FO75,75^FR^GB100,100,100^FS
^FO93,93^GB40,40,40^FS
^FO220,50^FDIntershipping, Inc.^FS
^CF0,30
^FO220,115^FD1000 Shipping Lane^FS
^FO50,250^GB700,3,3^FS
^FX Third section with bar code.
^BY5,2,270
^FO100,550^BC^FD12345678^FS
^FO50,900^GB700,250,3^FS
^FO400,900^GB3,250,3^FS
^CF0,40
^FO100,960^FDCtr. X34B-1^FS
^CFA,15
^FO440,925^FH^FDCaf_82 d_82partement^FS
^XZ";

#[test]
fn shipping_label_test() {
    init();
    let result = LabelParser::new(SHIPPING_LABEL).parse();
    assert!(result.is_valid, "{:?}", result.errors);

    let label = result.label.unwrap();
    let kinds: Vec<_> = label.items.iter().map(LayoutItem::kind).collect();
    assert_eq!(
        kinds,
        vec![
            "graphic box",
            "graphic box",
            "graphic box",
            "text",
            "text",
            "graphic box",
            "barcode",
            "graphic box",
            "graphic box",
            "text",
            "text",
        ]
    );
    assert!(label.items[1].is_reversed());
    assert!(!label.items[2].is_reversed());

    let LayoutItem::Barcode(barcode) = &label.items[6] else {
        panic!("expected barcode");
    };
    assert!(matches!(barcode.kind, BarcodeType::Code128(_)));
    let settings = barcode.render_settings(&label);
    assert_eq!(settings.module_width, 5);
    assert_eq!(settings.height, 270);

    let LayoutItem::Text(text) = &label.items[10] else {
        panic!("expected text");
    };
    assert_eq!(text.font.name, "A");
    assert_eq!(text.font.height, Some(15));
    assert_eq!(text.hex_indicator, Some('_'));
}

#[test]
fn unknown_commands_are_reported_in_order_test() {
    init();
    let result = LabelParser::new("^XA^QQ^FO10,10^FDa^FS^QW1,2^FO20,20^FDb^FS^XZ").parse();
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec!["Invalid command: ^QQ", "Invalid command: ^QW"]
    );
    assert_eq!(result.label.unwrap().items.len(), 2);
}

#[test]
fn template_round_trip_test() {
    init();
    let mut parser = zpl(
        "label Badge(name: string, age: number) {
            ^XA
            ^FO50,50^FDname^FS
            ^FO50,100^FDAge: age^FS
            ^XZ
        }",
    );
    assert_eq!(parser.name, "Badge");

    let result = parser.parse();
    assert!(result.is_valid);
    assert_eq!(result.variables["age"].kind, VariableType::Number);
    assert_eq!(
        parser.produce().unwrap(),
        "^XA ^FO50,50^FDname^FS ^FO50,100^FDAge: age^FS ^XZ"
    );

    parser.set_variable("name", "Grace");
    parser.set_variable("age", "85");
    let produced = parser.produce().unwrap();
    assert_eq!(
        produced,
        "^XA ^FO50,50^FDGrace^FS ^FO50,100^FDAge: 85^FS ^XZ"
    );

    let label = LabelParser::new(&produced).parse().label.unwrap();
    let LayoutItem::Text(text) = &label.items[1] else {
        panic!("expected text");
    };
    assert_eq!(text.data, "Age: 85");
}

#[test]
fn home_offset_test() {
    init();
    let label = LabelParser::new("^XA^LH50,50^FDa^FS^FO10,10^FDb^FS^LH0,0^FDc^FS^XZ")
        .parse()
        .label
        .unwrap();
    let positions: Vec<_> = label.items.iter().map(LayoutItem::position).collect();
    // a field keeps the last origin, a later ^LH does not move it
    assert_eq!(positions, vec![(50, 50), (60, 60), (60, 60)]);
}
