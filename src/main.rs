use island_escape::constants::DEFAULT_LOG_FILTER;
use island_escape::jurassic_island;
use island_escape::simulator::{simulate, SimConfig};
use std::io::{self, Write};

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let map = jurassic_island();
    let result = simulate(&map, &SimConfig::default());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(result.to_text().as_bytes())?;
    out.flush()
}
