#![cfg(feature = "cli")]

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tsstego::image::{PngCodec, Raster, RasterCodec};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "tsstego-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn write_carrier(path: &Path, width: u32, height: u32) -> Raster {
    let pixels = (0..width * height * 4)
        .map(|i| (i.wrapping_mul(2_246_822_519) >> 11) as u8)
        .collect();
    let raster = Raster::new(pixels, width, height).expect("raster should be valid");
    PngCodec::new()
        .encode(path, &raster)
        .expect("carrier should be writable");
    raster
}

fn tsstego(args: &[&dyn AsRef<OsStr>]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tsstego"));
    cmd.env_remove("TSSTEGO_PASSWORD")
        .arg("--log-level")
        .arg("error")
        .arg("--format")
        .arg("json")
        .args(args);
    cmd.output().expect("tsstego should run")
}

#[test]
fn encode_then_decode_recovers_payload() {
    let dir = unique_temp_dir("roundtrip");
    let carrier = dir.join("carrier.png");
    let payload = dir.join("secret.bin");
    let encoded = dir.join("encoded.png");
    let recovered = dir.join("recovered.bin");

    write_carrier(&carrier, 32, 32);
    let secret: Vec<u8> = (0..=255u8).chain(b"tail".iter().copied()).collect();
    std::fs::write(&payload, &secret).unwrap();

    let output = tsstego(&[&"encode", &payload, &carrier, &encoded, &"hunter2"]);
    assert!(output.status.success(), "{output:?}");
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("encode should emit json");
    assert_eq!(report["kind"], "encode");
    assert_eq!(report["payload_size"], secret.len());
    assert_eq!(report["mode"], "overwrite");

    let output = tsstego(&[&"decode", &encoded, &recovered, &"hunter2"]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(std::fs::read(&recovered).unwrap(), secret);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn long_password_decodes_with_its_prefix() {
    let dir = unique_temp_dir("long-key");
    let carrier = dir.join("carrier.png");
    let payload = dir.join("secret.txt");
    let encoded = dir.join("encoded.png");
    let recovered = dir.join("recovered.txt");

    write_carrier(&carrier, 16, 16);
    std::fs::write(&payload, b"passphrase protected").unwrap();

    let output = tsstego(&[
        &"encode",
        &payload,
        &carrier,
        &encoded,
        &"correcthorsebatterystaple",
    ]);
    assert!(output.status.success(), "{output:?}");

    let output = tsstego(&[&"decode", &encoded, &recovered, &"correcthorsebatt"]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(std::fs::read(&recovered).unwrap(), b"passphrase protected");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn encode_leaves_alpha_untouched() {
    let dir = unique_temp_dir("alpha");
    let carrier = dir.join("carrier.png");
    let payload = dir.join("secret.txt");
    let encoded = dir.join("encoded.png");

    let original = write_carrier(&carrier, 8, 8);
    std::fs::write(&payload, b"alpha check").unwrap();

    let output = tsstego(&[&"encode", &"--plain", &payload, &carrier, &encoded]);
    assert!(output.status.success(), "{output:?}");

    let packed = PngCodec::new().decode(&encoded).unwrap();
    let alphas = |r: &Raster| r.pixels().iter().skip(3).step_by(4).copied().collect::<Vec<_>>();
    assert_eq!(alphas(&packed), alphas(&original));
    assert_ne!(packed, original);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn xor_mode_needs_the_original_carrier() {
    let dir = unique_temp_dir("xor");
    let carrier = dir.join("carrier.png");
    let small = dir.join("small.png");
    let payload = dir.join("secret.txt");
    let encoded = dir.join("encoded.png");
    let recovered = dir.join("recovered.txt");

    write_carrier(&carrier, 16, 16);
    write_carrier(&small, 2, 2);
    std::fs::write(&payload, b"only with the reference").unwrap();

    let output = tsstego(&[&"encode", &"--xor", &payload, &carrier, &encoded]);
    assert!(output.status.success(), "{output:?}");

    let output = tsstego(&[&"decode", &"--xor", &carrier, &encoded, &recovered]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        std::fs::read(&recovered).unwrap(),
        b"only with the reference"
    );

    let output = tsstego(&[&"decode", &"--xor", &small, &encoded, &recovered]);
    assert_eq!(output.status.code(), Some(60));
    assert!(String::from_utf8_lossy(&output.stderr).contains("reference"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn payload_larger_than_carrier_returns_60() {
    let dir = unique_temp_dir("capacity");
    let carrier = dir.join("carrier.png");
    let payload = dir.join("big.bin");
    let encoded = dir.join("encoded.png");

    write_carrier(&carrier, 4, 4);
    std::fs::write(&payload, [0u8; 13]).unwrap();

    let output = tsstego(&[&"encode", &payload, &carrier, &encoded]);
    assert_eq!(output.status.code(), Some(60));
    assert!(!encoded.exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn capacity_reports_max_payload() {
    let dir = unique_temp_dir("cap-report");
    let carrier = dir.join("carrier.png");
    write_carrier(&carrier, 10, 3);

    let output = tsstego(&[&"capacity", &carrier]);
    assert!(output.status.success(), "{output:?}");
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["pixels"], 30);
    assert_eq!(report["max_payload"], 26);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_carrier_returns_1() {
    let dir = unique_temp_dir("missing");
    let payload = dir.join("secret.txt");
    std::fs::write(&payload, b"x").unwrap();

    let output = tsstego(&[
        &"encode",
        &payload,
        &dir.join("absent.png"),
        &dir.join("out.png"),
    ]);
    assert_eq!(output.status.code(), Some(1));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_arguments_print_usage() {
    let output = tsstego(&[&"encode"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn version_reports_package_version() {
    let output = tsstego(&[&"version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}
