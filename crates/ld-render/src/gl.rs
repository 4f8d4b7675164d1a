//! OpenGL polyline renderer
//!
//! The shading program and the position buffer are created once and reused
//! for the lifetime of the session. If any part of the setup fails the
//! renderer keeps running without a pipeline: draws still clear the surface
//! but produce no geometry.

use eframe::glow::{self, HasContext};
use thiserror::Error;
use tracing::{error, info, trace};

use ld_core::Session;

use crate::shaders::{self, POSITION_ATTRIBUTE, RESOLUTION_UNIFORM};
use crate::vertex::{as_bytes, flatten_points, VERTEX_STRIDE};
use crate::Renderer;

/// Color the surface is cleared to before each draw
const CLEAR_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Failures while building the GPU pipeline
#[derive(Debug, Clone, Error)]
pub enum ShaderError {
    #[error("failed to compile {stage} shader: {log}")]
    Compile { stage: &'static str, log: String },

    #[error("failed to link program: {0}")]
    Link(String),

    #[error("program has no `{0}` input")]
    MissingInput(&'static str),

    #[error("failed to create GPU object: {0}")]
    Resource(String),
}

/// GPU objects needed to draw the polyline
struct Pipeline {
    program: glow::Program,
    vertex_array: glow::VertexArray,
    position_buffer: glow::Buffer,
    position_location: u32,
    resolution_location: Option<<glow::Context as HasContext>::UniformLocation>,
}

impl Pipeline {
    unsafe fn new(gl: &glow::Context) -> Result<Self, ShaderError> {
        let program = link_program(gl)?;

        let Some(position_location) = gl.get_attrib_location(program, POSITION_ATTRIBUTE) else {
            gl.delete_program(program);
            return Err(ShaderError::MissingInput(POSITION_ATTRIBUTE));
        };
        let resolution_location = gl.get_uniform_location(program, RESOLUTION_UNIFORM);

        let vertex_array = match gl.create_vertex_array() {
            Ok(vertex_array) => vertex_array,
            Err(err) => {
                gl.delete_program(program);
                return Err(ShaderError::Resource(err));
            }
        };
        let position_buffer = match gl.create_buffer() {
            Ok(buffer) => buffer,
            Err(err) => {
                gl.delete_vertex_array(vertex_array);
                gl.delete_program(program);
                return Err(ShaderError::Resource(err));
            }
        };

        Ok(Self {
            program,
            vertex_array,
            position_buffer,
            position_location,
            resolution_location,
        })
    }

    unsafe fn destroy(&self, gl: &glow::Context) {
        gl.delete_program(self.program);
        gl.delete_vertex_array(self.vertex_array);
        gl.delete_buffer(self.position_buffer);
    }
}

unsafe fn compile_shader(
    gl: &glow::Context,
    kind: u32,
    stage: &'static str,
    source: &str,
) -> Result<glow::Shader, ShaderError> {
    let shader = gl.create_shader(kind).map_err(ShaderError::Resource)?;
    gl.shader_source(shader, &shaders::with_version(source));
    gl.compile_shader(shader);
    if !gl.get_shader_compile_status(shader) {
        let log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        return Err(ShaderError::Compile { stage, log });
    }
    Ok(shader)
}

unsafe fn link_program(gl: &glow::Context) -> Result<glow::Program, ShaderError> {
    let vertex = compile_shader(gl, glow::VERTEX_SHADER, "vertex", shaders::VERTEX_SHADER)?;
    let fragment =
        match compile_shader(gl, glow::FRAGMENT_SHADER, "fragment", shaders::FRAGMENT_SHADER) {
            Ok(fragment) => fragment,
            Err(err) => {
                gl.delete_shader(vertex);
                return Err(err);
            }
        };

    let program = match gl.create_program() {
        Ok(program) => program,
        Err(err) => {
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);
            return Err(ShaderError::Resource(err));
        }
    };

    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);
    gl.link_program(program);
    let linked = gl.get_program_link_status(program);

    for shader in [vertex, fragment] {
        gl.detach_shader(program, shader);
        gl.delete_shader(shader);
    }

    if !linked {
        let log = gl.get_program_info_log(program);
        gl.delete_program(program);
        return Err(ShaderError::Link(log));
    }

    Ok(program)
}

/// Draws the session's points as one connected line strip
pub struct PolylineRenderer {
    pipeline: Option<Pipeline>,
}

impl PolylineRenderer {
    /// Compile and link the shading program. Never fails: errors are logged
    /// and leave the renderer without a pipeline.
    pub fn new(gl: &glow::Context) -> Self {
        let pipeline = match unsafe { Pipeline::new(gl) } {
            Ok(pipeline) => {
                info!("Polyline program ready");
                Some(pipeline)
            }
            Err(err) => {
                error!("Polyline program unavailable, drawing is disabled: {err}");
                None
            }
        };
        Self { pipeline }
    }

    /// Whether the shading program built successfully
    pub fn is_valid(&self) -> bool {
        self.pipeline.is_some()
    }

    /// Clear the surface and draw every point in insertion order.
    ///
    /// The line width is passed straight to the driver, which may clamp it
    /// (commonly to 1.0 on core profiles).
    pub fn draw(&mut self, gl: &glow::Context, session: &Session) {
        let points = session.points();
        let config = session.config();
        trace!(points = points.len(), line_width = config.line_width, "draw");

        unsafe {
            let [r, g, b, a] = CLEAR_COLOR;
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);

            let Some(pipeline) = &self.pipeline else {
                return;
            };

            gl.use_program(Some(pipeline.program));
            gl.bind_vertex_array(Some(pipeline.vertex_array));

            let coords = flatten_points(points.as_slice());
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(pipeline.position_buffer));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, as_bytes(&coords), glow::DYNAMIC_DRAW);

            let [width, height] = config.resolution();
            gl.uniform_2_f32(pipeline.resolution_location.as_ref(), width, height);

            gl.enable_vertex_attrib_array(pipeline.position_location);
            gl.vertex_attrib_pointer_f32(
                pipeline.position_location,
                2,
                glow::FLOAT,
                false,
                VERTEX_STRIDE,
                0,
            );

            gl.line_width(config.line_width);
            gl.draw_arrays(glow::LINE_STRIP, 0, points.len() as i32);

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }
    }

    /// Release GPU objects
    pub fn destroy(&mut self, gl: &glow::Context) {
        if let Some(pipeline) = self.pipeline.take() {
            unsafe { pipeline.destroy(gl) };
        }
    }
}

/// A [`PolylineRenderer`] bound to the GL context of the current frame
pub struct GlSurface<'a> {
    pub renderer: &'a mut PolylineRenderer,
    pub gl: &'a glow::Context,
}

impl Renderer for GlSurface<'_> {
    fn draw(&mut self, session: &Session) {
        self.renderer.draw(self.gl, session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_error_names_stage() {
        let err = ShaderError::Compile {
            stage: "fragment",
            log: "0:3: syntax error".to_string(),
        };
        assert_eq!(err.to_string(), "failed to compile fragment shader: 0:3: syntax error");
    }

    #[test]
    fn test_stride_matches_attribute_layout() {
        assert_eq!(VERTEX_STRIDE, 8);
    }
}
