#![allow(dead_code)]

use image::{ImageFormat, Rgb, RgbImage};
use std::fs::File;
use std::path::Path;

fn ensure_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
}

pub fn create_png(path: &Path) {
    ensure_parent(path);
    RgbImage::from_pixel(10, 10, Rgb([30, 160, 90]))
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}

pub fn create_jpeg(path: &Path) {
    ensure_parent(path);
    RgbImage::from_pixel(10, 10, Rgb([220, 200, 40]))
        .save_with_format(path, ImageFormat::Jpeg)
        .unwrap();
}

pub fn create_empty_file(path: &Path) {
    File::create(path).unwrap();
}

pub fn is_webp(path: &Path) -> bool {
    match std::fs::read(path) {
        Ok(bytes) => bytes.len() > 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP",
        Err(_) => false,
    }
}
