/*
Generador de datasets de gestos a partir de grabaciones IMU.

Estructura esperada del directorio de datos:
  <DATA_DIR>/Forward/{orientation,accelerometer,gyro}-<epoch>.csv
  <DATA_DIR>/Backward/...
  <DATA_DIR>/Left/...  <DATA_DIR>/Right/...  <DATA_DIR>/Enter/...

Ejemplo:
    ./target/release/gesture-dataset "Myo Keyboard Data" --sensor gyro -o gyro_xyz.json
    ./target/release/gesture-dataset "Myo Keyboard Data" --sensor accelerometer --axis y --format csv -o accel_y.csv
*/

use anyhow::Result;
use clap::Parser;

use gesture_dataset::cli::{run, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "info" };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(level));

    run(&args)
}
