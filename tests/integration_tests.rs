//! Integration tests for Alphahide
//!
//! These go through the public API end to end: carrier image in, PNG out,
//! PNG back in, text out.

use alphahide::codec::{encode_shares, pack, unpack, SENTINEL};
use alphahide::{
    capacity, decode, decode_buffer, decode_with_config, encode, encode_buffer,
    encode_with_config, encode_with_io, share_modulus, ImageLoader, ImageRenderer, ImageSource,
    Message, PixelBuffer, PngImageIo, RenderedImage, StegoConfig, StegoError, DEFAULT_CONFIG,
};
use image::{DynamicImage, ImageBuffer, Rgba};
use tempfile::TempDir;

fn create_test_image(width: u32, height: u32) -> DynamicImage {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        Rgba([
            ((x * 17) % 256) as u8,
            ((y * 23) % 256) as u8,
            (((x + y) * 31) % 256) as u8,
            255,
        ])
    });
    DynamicImage::ImageRgba8(img)
}

/// Test basic encode/decode roundtrip with the default configuration
#[test]
fn test_encode_decode_roundtrip() {
    let image = create_test_image(64, 64);
    let message = "The quick brown fox jumps over the lazy dog";

    let encoded = encode(message, image).unwrap();
    assert_eq!(encoded.width(), 64);
    assert_eq!(encoded.height(), 64);

    let decoded = decode(encoded.into_bytes()).unwrap();
    assert_eq!(decoded, message);
}

/// Round trip for every t, both code unit sizes, messages up to capacity - 1
#[test]
fn test_roundtrip_all_configurations() {
    let (width, height) = (12, 10);
    let alphabet: Vec<char> = "abcXYZ019 ñ€".chars().collect();

    for t in 1..=7u8 {
        for code_unit_size in [8, 16] {
            let config = DEFAULT_CONFIG.with_t(t).with_code_unit_size(code_unit_size);
            let max_units = capacity(width, height, t, code_unit_size) as usize - 1;

            for len in [0, 1, max_units / 2, max_units] {
                // Build text of exactly `len` code units
                let mut text = String::new();
                let mut i = 0;
                while Message::from_text(&text, code_unit_size).len() < len {
                    let next = alphabet[i % alphabet.len()];
                    let mut candidate = text.clone();
                    candidate.push(next);
                    if Message::from_text(&candidate, code_unit_size).len() > len {
                        candidate = text.clone();
                        candidate.push('a');
                    }
                    text = candidate;
                    i += 1;
                }

                let carrier = PixelBuffer::filled(width, height, 128);
                let encoded = encode_with_config(&text, carrier, &config).unwrap();
                let decoded = decode_with_config(encoded.into_bytes(), &config).unwrap();
                assert_eq!(
                    decoded, text,
                    "t = {}, code_unit_size = {}, len = {}",
                    t, code_unit_size, len
                );
            }
        }
    }
}

/// Only the alpha channel changes
#[test]
fn test_rgb_untouched() {
    let image = create_test_image(20, 20);
    let original = image.to_rgba8();

    let encoded = encode("hidden", image).unwrap();
    let reloaded = image::load_from_memory(encoded.as_bytes())
        .unwrap()
        .to_rgba8();

    for (before, after) in original.pixels().zip(reloaded.pixels()) {
        assert_eq!(before.0[..3], after.0[..3]);
    }
}

/// Message length equal to capacity is rejected
#[test]
fn test_capacity_boundary() {
    // 8x8 = 64 pixels, t = 3, 16-bit units: capacity 12
    let image = create_test_image(8, 8);
    assert_eq!(capacity(8, 8, 3, 16), 12);

    let result = encode("abcdefghijkl", image.clone());
    assert!(matches!(
        result,
        Err(StegoError::Capacity {
            length: 12,
            capacity: 12
        })
    ));

    assert!(encode("abcdefghijk", image).is_ok());
}

/// t outside 1..=7 is rejected on both paths
#[test]
fn test_invalid_t_rejected() {
    let image = create_test_image(16, 16);
    for t in [0, 8] {
        let config = DEFAULT_CONFIG.with_t(t);
        let result = encode_with_config("x", image.clone(), &config);
        assert!(matches!(result, Err(StegoError::InvalidParameter { .. })));

        let result = decode_with_config(image.clone(), &config);
        assert!(matches!(result, Err(StegoError::InvalidParameter { .. })));
    }
}

/// Unusable image sources fail before anything else is checked
#[test]
fn test_invalid_input_rejected() {
    let result = encode("x", "not-a-real-file.png");
    assert!(matches!(result, Err(StegoError::InvalidInput(_))));

    // Invalid input wins over an invalid configuration
    let result = decode_with_config("", &DEFAULT_CONFIG.with_t(0));
    assert!(matches!(result, Err(StegoError::InvalidInput(_))));
}

/// A fully opaque image decodes to the empty message
#[test]
fn test_opaque_image_decodes_empty() {
    let image = create_test_image(10, 10);
    assert_eq!(decode(image).unwrap(), "");
}

/// The concrete t = 3 scenario: modulus 11, shares in 245..=254
#[test]
fn test_hi_scenario() {
    let prime = share_modulus(3);
    assert_eq!(prime, 11);

    let symbols = pack(&[72, 105], 3, 16);
    assert_eq!(unpack(&symbols, 3, 16), vec![72, 105]);

    let shares = encode_shares(&symbols, 1, prime);
    assert!(shares.iter().all(|s| (245..=254).contains(s)));

    let mut buffer = PixelBuffer::filled(4, 4, 0);
    encode_buffer(&Message::from_text("Hi", 16), &mut buffer, &DEFAULT_CONFIG).unwrap();
    let alpha: Vec<u8> = buffer.alpha_bytes().collect();
    assert_eq!(&alpha[..11], shares.as_slice());
    assert!(alpha[11..].iter().all(|&a| a == SENTINEL));

    let decoded = decode_buffer(&buffer, &DEFAULT_CONFIG).unwrap();
    assert_eq!(decoded.to_text(16), "Hi");
}

/// Encoding with threshold > 1 works, decoding it is refused
#[test]
fn test_threshold_two() {
    let config = DEFAULT_CONFIG.with_threshold(2);
    let encoded = encode_with_config("abc", create_test_image(16, 16), &config).unwrap();

    let result = decode_with_config(encoded.into_bytes(), &config);
    assert!(matches!(
        result,
        Err(StegoError::InvalidParameter {
            name: "threshold",
            ..
        })
    ));
}

/// Saving to disk and reading back through a path and a data URL
#[test]
fn test_file_and_data_url_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("secret.png");

    let encoded = encode("über geheim", create_test_image(30, 30)).unwrap();
    encoded.save(&path).unwrap();

    assert_eq!(decode(path.as_path()).unwrap(), "über geheim");
    assert_eq!(decode(encoded.to_data_url()).unwrap(), "über geheim");
}

/// A config file drives both directions
#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("alphahide.toml");
    std::fs::write(&path, "t = 7\ncode_unit_size = 8\n").unwrap();

    let config = StegoConfig::load(&path).unwrap();
    let encoded = encode_with_config("config driven", create_test_image(10, 10), &config).unwrap();
    assert_eq!(
        decode_with_config(encoded.into_bytes(), &config).unwrap(),
        "config driven"
    );
}

/// Custom collaborators plug into the orchestrator
#[test]
fn test_custom_io() {
    struct BlankLoader;

    impl ImageLoader for BlankLoader {
        fn load(&self, _source: &ImageSource) -> alphahide::Result<PixelBuffer> {
            Ok(PixelBuffer::filled(8, 8, 0))
        }
    }

    struct BrokenRenderer;

    impl ImageRenderer for BrokenRenderer {
        fn render(&self, _buffer: &PixelBuffer) -> alphahide::Result<RenderedImage> {
            Err(StegoError::Context("no surface".to_string()))
        }
    }

    let source = ImageSource::from("ignored");
    let result = encode_with_io("hi", &source, &DEFAULT_CONFIG, &BlankLoader, &BrokenRenderer);
    assert!(matches!(result, Err(StegoError::Context(_))));

    let rendered =
        encode_with_io("hi", &source, &DEFAULT_CONFIG, &BlankLoader, &PngImageIo::new()).unwrap();
    assert_eq!(decode(rendered.into_bytes()).unwrap(), "hi");
}
