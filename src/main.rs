//! Pergola demo - one render pass of the landing page on the console host

mod page;

use pergola::config::AppConfig;
use pergola::host::ConsoleHost;

fn main() {
    pergola::log::init();
    pergola::log!("main() starting");

    let config = AppConfig::load();
    pergola::log!(
        "config loaded: features={}, pricing={}",
        config.sections.features,
        config.sections.pricing
    );

    let mut host = ConsoleHost::stdout();
    if let Err(err) = page::render(&mut host, &config) {
        pergola::log!("render failed: {}", err);
        eprintln!("render failed: {}", err);
        std::process::exit(1);
    }

    pergola::log!("render pass complete");
}
