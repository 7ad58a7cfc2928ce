//! tridigit browser entry point.

use tracing_subscriber::filter::LevelFilter;
use tridigit_web::{TriDigit, init_logging};

fn main() {
    init_logging(LevelFilter::INFO);
    tracing::info!("tridigit starting");
    yew::Renderer::<TriDigit>::new().render();
}
