use folio_scene::RenderContext;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the context's arena, camera, and line batch, then
/// produces output. It never mutates the context.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the given context.
    fn render(&self, context: &RenderContext) -> Self::Output;
}

/// Produces a human-readable summary of a render context. Used by the
/// CLI's headless scene commands and by tests of the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, context: &RenderContext) -> String {
        let mut out = String::new();
        let cam = &context.camera;
        out.push_str(&format!(
            "=== Scene '{}' ({}x{}) ===\n",
            context.canvas_label,
            context.size().width(),
            context.size().height()
        ));
        out.push_str(&format!("Objects: {}\n", context.arena.len()));
        out.push_str(&format!(
            "Camera: pos=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            cam.position.x,
            cam.position.y,
            cam.position.z,
            cam.target.x,
            cam.target.y,
            cam.target.z,
            cam.fov.to_degrees()
        ));

        for (handle, object) in context.arena.iter() {
            let p = object.transform.position;
            let r = object.transform.rotation;
            out.push_str(&format!(
                "  [{:3}] {:?} pos=({:.2}, {:.2}, {:.2}) rot=({:.2}, {:.2}, {:.2}) {}{}\n",
                handle.0,
                object.geometry,
                p.x,
                p.y,
                p.z,
                r.x,
                r.y,
                r.z,
                object.color.to_hex_string(),
                if object.wireframe { " wire" } else { "" }
            ));
        }

        if let Some(lines) = &context.lines {
            out.push_str(&format!(
                "Lines: {} segments {} opacity={:.2}\n",
                lines.segment_count(),
                lines.color.to_hex_string(),
                lines.opacity
            ));
        }

        out
    }
}
