// VIEW: Rendering and graphics
pub mod surface;
pub mod draw;
#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_surface;
#[cfg(not(target_arch = "wasm32"))]
pub mod gpu_init;

pub use surface::{Color, RenderSurface};
#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2dSurface;
#[cfg(not(target_arch = "wasm32"))]
pub use egui_surface::EguiSurface;
#[cfg(not(target_arch = "wasm32"))]
pub use gpu_init::GpuContext;
