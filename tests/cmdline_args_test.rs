//! Tests de los argumentos de línea de comandos y de la ejecución completa


use std::fs;

use clap::Parser;
use gesture_dataset::cli::{run, Args, Format};
use gesture_dataset::{Axis, FeatureSensor};
use test_helpers::{synthetic_recordings, write_recordings, PERIOD};

#[test]
fn test_default_arguments() {
    let args = Args::try_parse_from(["gesture-dataset", "data", "-o", "out.json"]).unwrap();
    assert_eq!(args.sensor, FeatureSensor::Gyroscope);
    assert_eq!(args.axis, None);
    assert_eq!(args.format, Format::Json);
    assert!(args.config.is_none());
    assert!(!args.debug);
}

#[test]
fn test_sensor_axis_and_format_values() {
    let args = Args::try_parse_from([
        "gesture-dataset",
        "data",
        "--sensor",
        "accel",
        "--axis",
        "y",
        "--format",
        "csv",
        "-o",
        "out.csv",
    ])
    .unwrap();
    assert_eq!(args.sensor, FeatureSensor::Accelerometer);
    assert_eq!(args.axis, Some(Axis::Y));
    assert_eq!(args.format, Format::Csv);
}

#[test]
fn test_invalid_values_rejected() {
    assert!(Args::try_parse_from(["gesture-dataset", "data", "--axis", "w", "-o", "out.json"]).is_err());
    assert!(Args::try_parse_from(["gesture-dataset", "data", "--sensor", "magnet", "-o", "out.json"]).is_err());
    assert!(Args::try_parse_from(["gesture-dataset", "data", "--format", "xml", "-o", "out.json"]).is_err());
    // la salida es obligatoria
    assert!(Args::try_parse_from(["gesture-dataset", "data"]).is_err());
}

#[test]
fn test_run_without_axis_writes_fused_csv() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    write_recordings(&data_dir, &synthetic_recordings(10));
    let output = dir.path().join("gyro_xyz.csv");

    let args = Args::try_parse_from([
        "gesture-dataset",
        data_dir.to_str().unwrap(),
        "--format",
        "csv",
        "-o",
        output.to_str().unwrap(),
    ])
    .unwrap();
    run(&args).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 51);

    let header: Vec<&str> = lines[0].split(',').collect();
    assert_eq!(header.len(), 3 * PERIOD + 5);
    assert_eq!(header[0], "f0");
    assert_eq!(header[3 * PERIOD], "label0");

    // primera fila: Forward
    assert!(lines[1].ends_with(",1,0,0,0,0"));
}

#[test]
fn test_run_single_axis_writes_json() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    write_recordings(&data_dir, &synthetic_recordings(10));
    let output = dir.path().join("gyro_x.json");

    let args = Args::try_parse_from([
        "gesture-dataset",
        data_dir.to_str().unwrap(),
        "--axis",
        "x",
        "-o",
        output.to_str().unwrap(),
    ])
    .unwrap();
    run(&args).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let examples = value.as_array().unwrap();
    assert_eq!(examples.len(), 50);
    assert_eq!(examples[0]["features"].as_array().unwrap().len(), PERIOD);
    assert_eq!(examples[1]["label"], serde_json::json!([0, 1, 0, 0, 0]));
}

#[test]
fn test_run_reports_missing_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.json");
    let args = Args {
        data_dir: dir.path().join("missing"),
        sensor: FeatureSensor::Gyroscope,
        axis: None,
        format: Format::Json,
        output: output.clone(),
        config: None,
        debug: false,
    };

    assert!(run(&args).is_err());
    assert!(!output.exists());
}
