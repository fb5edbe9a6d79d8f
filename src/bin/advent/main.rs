#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

use std::time::Instant;

use advent::{read_input, Day, Solve};
use anyhow::{anyhow, Result};

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let day = Day::from_number(options.day(), options.limits())
        .ok_or_else(|| anyhow!("no solver for day {}", options.day()))?;
    let input = read_input(options.input())?;
    info!("solving day {}: {}", day.number(), day.title());
    let start = Instant::now();
    let answer = day.solve(&input)?;
    debug!("solved in {:.2?}", start.elapsed());
    println!("{}", answer);
    Ok(())
}
