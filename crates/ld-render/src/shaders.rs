//! GLSL sources for the polyline program

/// Name of the vertex position input
pub const POSITION_ATTRIBUTE: &str = "a_position";

/// Name of the surface resolution uniform
pub const RESOLUTION_UNIFORM: &str = "u_resolution";

/// Version header matching the GL flavour of the target
pub const fn shader_version() -> &'static str {
    if cfg!(target_arch = "wasm32") {
        "#version 300 es"
    } else {
        "#version 330"
    }
}

/// Maps a pixel-space position into clip space, flipping Y so the origin
/// sits at the top-left corner.
pub const VERTEX_SHADER: &str = r#"
    in vec2 a_position;
    uniform vec2 u_resolution;

    void main() {
        vec2 zero_to_one = a_position / u_resolution;
        vec2 clip_space = zero_to_one * 2.0 - 1.0;
        gl_Position = vec4(clip_space * vec2(1.0, -1.0), 0.0, 1.0);
    }
"#;

/// Opaque black for every covered pixel
pub const FRAGMENT_SHADER: &str = r#"
    precision mediump float;
    out vec4 out_color;

    void main() {
        out_color = vec4(0.0, 0.0, 0.0, 1.0);
    }
"#;

/// Prefix a shader body with the version header
pub fn with_version(source: &str) -> String {
    format!("{}\n{}", shader_version(), source)
}
