//! Rendering: Szene → Zeichenliste → Backend.
//!
//! Die Zeichenliste ist backend-neutral. Der Bildschirm zeichnet sie mit dem
//! egui-Painter (`ui::canvas`), der Export rastert sie mit `plan_raster`.

pub mod draw_list;
pub mod plan_scene;
pub mod raster;
pub mod wireframe;

pub use crate::shared::RenderScene;
pub use draw_list::{DrawPrimitive, Rgba, TextMeasure};
pub use plan_scene::build_plan_draw_list;
pub use raster::{rasterize, BitmapTextMeasure};
pub use wireframe::build_wireframe;

use crate::core::{Camera3D, WallModel};
use plan_raster::RgbImage;

/// Rastert den 2D-Plan in Ausgabegröße (`scene.scale` berücksichtigt).
pub fn render_plan_image(scene: &RenderScene) -> RgbImage {
    let [width, height] = scene.output_size();
    let list = build_plan_draw_list(scene, &BitmapTextMeasure);
    rasterize(&list, width, height)
}

/// Rastert die aktuelle 3D-Ansicht.
pub fn render_view3d_image(model: &WallModel, camera: &Camera3D, size: [u32; 2]) -> RgbImage {
    let list = build_wireframe(model, camera, [size[0] as f32, size[1] as f32]);
    rasterize(&list, size[0], size[1])
}
