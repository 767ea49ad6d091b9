use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn bin2code() -> Command {
    Command::cargo_bin("bin2code").unwrap()
}

#[test]
fn test_encode_to_stdout_hex() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("payload.bin");
    fs::write(&input, [0u8, 65, 255]).unwrap();

    bin2code()
        .arg("encode")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("0x00, 0x41, 0xFF"))
        .stdout(predicate::str::contains("sg_data_size = 3;"));
}

#[test]
fn test_encode_decode_round_trip() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("payload.bin");
    let header = temp.path().join("payload.h");
    let restored = temp.path().join("restored.bin");

    let payload: Vec<u8> = (0..=255).cycle().take(5000).collect();
    fs::write(&input, &payload).unwrap();

    bin2code()
        .arg("encode")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&header)
        .arg("--style")
        .arg("binary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encoded 5000 bytes"));

    bin2code()
        .arg("decode")
        .arg("--input")
        .arg(&header)
        .arg("--output")
        .arg(&restored)
        .assert()
        .success();

    assert_eq!(fs::read(&restored).unwrap(), payload);
}

#[test]
fn test_compact_round_trip() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("payload.bin");
    let header = temp.path().join("payload.h");
    let restored = temp.path().join("restored.bin");

    fs::write(&input, [250u8, 0, 13]).unwrap();

    bin2code()
        .arg("encode")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&header)
        .arg("--compact")
        .assert()
        .success();

    let text = fs::read_to_string(&header).unwrap();
    assert!(text.contains("{250,0,13};"));

    bin2code()
        .arg("decode")
        .arg("--input")
        .arg(&header)
        .arg("--output")
        .arg(&restored)
        .assert()
        .success();

    assert_eq!(fs::read(&restored).unwrap(), vec![250, 0, 13]);
}

#[test]
fn test_gzip_round_trip() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("payload.bin");
    let header = temp.path().join("payload.h");
    let restored = temp.path().join("restored.bin");

    let payload = b"compressible payload ".repeat(200);
    fs::write(&input, &payload).unwrap();

    bin2code()
        .arg("encode")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&header)
        .arg("--compress")
        .arg("gzip")
        .arg("--level")
        .arg("best")
        .assert()
        .success();

    bin2code()
        .arg("decode")
        .arg("--input")
        .arg(&header)
        .arg("--output")
        .arg(&restored)
        .arg("--compress")
        .arg("gzip")
        .assert()
        .success();

    assert_eq!(fs::read(&restored).unwrap(), payload);
}

#[test]
fn test_std_array_qualifier() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("payload.bin");
    fs::write(&input, [1u8, 2]).unwrap();

    bin2code()
        .arg("encode")
        .arg("--input")
        .arg(&input)
        .arg("--std-array")
        .arg("--qualifier")
        .arg("constexpr")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "static constexpr std::array<unsigned char, 2> sg_data",
        ));
}

#[test]
fn test_image_round_trip() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("input.png");
    let header = temp.path().join("image.h");
    let restored = temp.path().join("restored.png");

    let mut img = image::RgbaImage::new(4, 3);
    for (i, pixel) in img.pixels_mut().enumerate() {
        *pixel = image::Rgba([i as u8 * 9, i as u8 * 5, 255 - i as u8, 255]);
    }
    img.save(&input).unwrap();

    bin2code()
        .arg("encode")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&header)
        .arg("--image")
        .assert()
        .success();

    let text = fs::read_to_string(&header).unwrap();
    assert!(text.contains("sg_data_width = 4;"));
    assert!(text.contains("sg_data_height = 3;"));
    assert!(text.contains("sg_data_channels = 4;"));

    bin2code()
        .arg("decode")
        .arg("--input")
        .arg(&header)
        .arg("--output")
        .arg(&restored)
        .arg("--image-format")
        .arg("png")
        .assert()
        .success();

    let roundtripped = image::open(&restored).unwrap().into_rgba8();
    assert_eq!(roundtripped.dimensions(), (4, 3));
    assert_eq!(roundtripped.into_raw(), img.into_raw());
}

#[test]
fn test_decode_image_without_properties_fails() {
    let temp = tempdir().unwrap();
    let header = temp.path().join("plain.h");
    fs::write(
        &header,
        "static const unsigned char sg_data[] =\n{\n    0x01, 0x02\n};\nstatic const unsigned int sg_data_size = 2;\n",
    )
    .unwrap();

    bin2code()
        .arg("decode")
        .arg("--input")
        .arg(&header)
        .arg("--image-format")
        .arg("png")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse image properties"));
}

#[test]
fn test_decode_reports_malformed_tokens() {
    let temp = tempdir().unwrap();
    let header = temp.path().join("corrupt.h");
    let restored = temp.path().join("restored.bin");
    fs::write(
        &header,
        "static const unsigned char sg_data[] =\n{\n    0x41, 0xZZ, 0x43\n};\nstatic const unsigned int sg_data_size = 3;\n",
    )
    .unwrap();

    bin2code()
        .arg("decode")
        .arg("--input")
        .arg(&header)
        .arg("--output")
        .arg(&restored)
        .assert()
        .success()
        .stderr(predicate::str::contains("Malformed token '0xZZ'"));

    assert_eq!(fs::read(&restored).unwrap(), vec![0x41, 0x43]);
}

#[test]
fn test_unknown_style_fails() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("payload.bin");
    fs::write(&input, [1u8]).unwrap();

    bin2code()
        .arg("encode")
        .arg("--input")
        .arg(&input)
        .arg("--style")
        .arg("octal")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown style 'octal'"));
}

#[test]
fn test_missing_input_fails() {
    let temp = tempdir().unwrap();

    bin2code()
        .arg("encode")
        .arg("--input")
        .arg(temp.path().join("does_not_exist.bin"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open file"));
}
