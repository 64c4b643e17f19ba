//! 策略模式演示：先用翅膀飞、呱呱叫，换上火箭后再飞一次。

use duck_strategy::prelude::*;
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut duck = Duck::mallard();
    duck.perform_fly(&mut out)?;
    duck.perform_quack(&mut out)?;

    duck.set_fly_behavior(Arc::new(FlyRocketPowered));
    duck.perform_fly(&mut out)?;

    let person = Person::new("xiao wang");
    writeln!(out, "{}", person.name())?;

    Ok(())
}
