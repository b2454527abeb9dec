//! wgpu render backend.
//!
//! One instanced pipeline draws every mesh object in a render context
//! (grouped by geometry), one line pipeline draws its line batch. Scene
//! truth stays in the context; this crate only reads it.

mod gpu;
mod meshes;
mod shaders;

pub use gpu::WgpuSceneRenderer;

pub fn crate_info() -> &'static str {
    "folio-render-wgpu v0.1.0"
}
