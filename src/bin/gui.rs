// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use cat_tracker::gui;
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};

const ICON_SIZE: u32 = 64;

/// Pixel cat head: round face, two triangle ears, dark eyes.
fn app_icon() -> IconData {
    let fur = Rgba([0xF0, 0x9A, 0x3E, 0xFF]);
    let eye = Rgba([0x20, 0x20, 0x20, 0xFF]);
    let clear = Rgba([0, 0, 0, 0]);

    let c = ICON_SIZE as f32 / 2.0;
    let r = ICON_SIZE as f32 * 0.34;

    let img = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let (fx, fy) = (x as f32 + 0.5, y as f32 + 0.5);
        let (dx, dy) = (fx - c, fy - (c + 4.0));

        // eyes
        for ex in [c - r * 0.4, c + r * 0.4] {
            let (ddx, ddy) = (fx - ex, fy - (c + 1.0));
            if ddx * ddx + ddy * ddy <= 16.0 {
                return eye;
            }
        }
        if dx * dx + dy * dy <= r * r {
            return fur;
        }
        // ears: triangles above the face, apex at y = 6
        let ear_h = c - 6.0;
        if fy >= 6.0 && fy <= c {
            let t = (fy - 6.0) / ear_h;
            for apex in [c - r * 0.7, c + r * 0.7] {
                if (fx - apex).abs() <= t * r * 0.45 {
                    return fur;
                }
            }
        }
        clear
    });

    let (width, height) = img.dimensions();
    IconData { rgba: img.into_raw(), width, height }
}

fn main() {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
