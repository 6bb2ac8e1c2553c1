//! Per-launch background.
//!
//! The grid sits on a vertical gradient picked at random every launch, one of
//! a fixed set of presets.

use eframe::egui::{Color32, Mesh, Painter, Rect, Shape};

struct WallpaperColors {
    top: Color32,
    bottom: Color32,
}

const WALLPAPERS: &[WallpaperColors] = &[
    WallpaperColors { top: Color32::from_rgb(16, 24, 48), bottom: Color32::from_rgb(58, 36, 94) },
    WallpaperColors { top: Color32::from_rgb(10, 38, 71), bottom: Color32::from_rgb(20, 66, 114) },
    WallpaperColors { top: Color32::from_rgb(34, 9, 44), bottom: Color32::from_rgb(110, 29, 58) },
    WallpaperColors { top: Color32::from_rgb(9, 44, 34), bottom: Color32::from_rgb(24, 90, 60) },
    WallpaperColors { top: Color32::from_rgb(45, 22, 6), bottom: Color32::from_rgb(120, 60, 18) },
    WallpaperColors { top: Color32::from_rgb(20, 20, 26), bottom: Color32::from_rgb(56, 56, 70) },
    WallpaperColors { top: Color32::from_rgb(8, 30, 52), bottom: Color32::from_rgb(14, 94, 110) },
    WallpaperColors { top: Color32::from_rgb(40, 12, 60), bottom: Color32::from_rgb(16, 20, 40) },
    WallpaperColors { top: Color32::from_rgb(52, 28, 8), bottom: Color32::from_rgb(20, 12, 30) },
    WallpaperColors { top: Color32::from_rgb(12, 40, 24), bottom: Color32::from_rgb(8, 16, 36) },
    WallpaperColors { top: Color32::from_rgb(30, 10, 10), bottom: Color32::from_rgb(70, 30, 70) },
    WallpaperColors { top: Color32::from_rgb(6, 14, 28), bottom: Color32::from_rgb(40, 70, 90) },
    WallpaperColors { top: Color32::from_rgb(25, 25, 25), bottom: Color32::from_rgb(60, 45, 30) },
    WallpaperColors { top: Color32::from_rgb(18, 32, 46), bottom: Color32::from_rgb(80, 40, 56) },
    WallpaperColors { top: Color32::from_rgb(28, 6, 36), bottom: Color32::from_rgb(90, 60, 20) },
    WallpaperColors { top: Color32::from_rgb(10, 10, 35), bottom: Color32::from_rgb(30, 80, 80) },
];

pub struct Wallpaper {
    index: usize,
}

impl Wallpaper {
    /// Pick a preset at random. Falls back to the first preset if the OS
    /// entropy source refuses, which is not worth surfacing for a backdrop.
    pub fn random() -> Self {
        let mut byte = [0u8; 1];
        let index = match getrandom::fill(&mut byte) {
            Ok(()) => usize::from(byte[0]) % WALLPAPERS.len(),
            Err(_) => 0,
        };
        log::info!("Selected wallpaper preset {index}");
        Self { index }
    }

    pub fn paint(&self, painter: &Painter, rect: Rect) {
        let colors = &WALLPAPERS[self.index];
        let mut mesh = Mesh::default();
        mesh.colored_vertex(rect.left_top(), colors.top);
        mesh.colored_vertex(rect.right_top(), colors.top);
        mesh.colored_vertex(rect.right_bottom(), colors.bottom);
        mesh.colored_vertex(rect.left_bottom(), colors.bottom);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        painter.add(Shape::mesh(mesh));
    }
}
