use anyhow::{Context, Result};
use clap::Parser;
use linux_embedded_hal::Delay;
use log::info;
use monitor::{ConsoleSink, Monitor};

mod args;
mod board;

use args::Args;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    println!("Working with MPU 6050 (GY-521 Module)");
    let imu = board::open_imu(&args.bus, args.address)?;
    info!("opened {} at {:#04x}", args.bus, args.address);

    let mut monitor = Monitor::new(imu, Delay, args.monitor_config());
    let mut sink = ConsoleSink;

    monitor.start(&mut sink).context("MPU6050 setup failed")?;
    let taken = monitor.run(&mut sink, args.samples).context("sampling stopped")?;
    info!("done after {} samples", taken);
    Ok(())
}
