use tintype::bim::iptc::Iptc;
use tintype::bim::{Bim, BlockId};
use tracing_subscriber::prelude::*;

fn main() {
    let path = std::env::args().nth(1).unwrap();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let data = std::fs::read(path).unwrap();
    let bim = Bim::new(data).unwrap();

    for block in bim.blocks() {
        println!("{:?}: {} bytes", block.block_id(), block.data().len());
    }

    if let Some(block) = bim.block_by_id(BlockId::IptcNaa) {
        let iptc = Iptc::new(block.data().to_vec()).unwrap();
        for dataset in iptc.datasets() {
            println!(
                "{}:{:03}: {:?}",
                dataset.record,
                dataset.dataset,
                String::from_utf8_lossy(dataset.data)
            );
        }
    }
}
