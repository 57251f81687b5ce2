use tintype::exif::ExifData;
use tracing_subscriber::prelude::*;

fn main() {
    let path = std::env::args().nth(1).unwrap();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let data = std::fs::read(path).unwrap();

    let exif = ExifData::from_buffer(data, true);
    exif.assemble().unwrap();

    println!("{}", exif.debug_dump().unwrap());
    println!("{:#?}", exif.summary().unwrap());
}
