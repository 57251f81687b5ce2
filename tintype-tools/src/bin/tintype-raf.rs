use tintype::raf::Raf;
use tracing_subscriber::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap();
    let output = args.next().unwrap();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let data = std::fs::read(input).unwrap();
    let raf = Raf::new(data).unwrap();

    eprintln!("Preview at {:#x?}", raf.preview_location());
    std::fs::write(output, raf.embedded_jpeg()).unwrap();
}
