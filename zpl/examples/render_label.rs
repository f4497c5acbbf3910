use zpl::{RendererOptions, ZplViewer, zpl};

fn main() {
    env_logger::init();

    let mut parser = zpl(
        "label Shipping(name: string, tracking: string) {
            ^XA
            ^FO40,40^GB732,300,4,B,2^FS
            ^FO70,70^A0N,50,50^FDname^FS
            ^FO70,150^BY3^BCN,120,Y,N,N^FDtracking^FS
            ^XZ
        }",
    );
    parser.parse();
    parser.set_variable("name", "Ada Lovelace");
    parser.set_variable("tracking", "1Z999AA10123456784");
    let produced = parser.produce().expect("label is valid");

    let viewer = ZplViewer::new(RendererOptions::default()).expect("default options are valid");
    let out = viewer
        .render(&mut zpl(&produced))
        .expect("label renders");
    std::fs::write("label.png", out.png().expect("encode png")).expect("write png");
    println!("Wrote label.png");
}
