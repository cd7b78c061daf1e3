use glimmer_core::{pattern, table};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    for brightness in table::ramp_table() {
        log::debug!("{:2}/32 slots lit", pattern::duty(brightness));
        println!("0b{brightness:032b}");
    }
}
