use wordfreq::{Config, word_count};

fn main() {
    env_logger::builder().init();

    match Config::from_args(std::env::args_os().skip(1)) {
        Ok(config) => println!("{}", word_count(&config)),
        Err(e) => println!("{e}"),
    }
}
