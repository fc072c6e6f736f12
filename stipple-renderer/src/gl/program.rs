use stipple_math::Mat4;
use web_sys::{WebGlProgram, WebGlShader, WebGlUniformLocation};

use crate::{error::Error, gl::GL};

/// A linked vertex + fragment shader pair.
#[derive(Debug)]
pub struct ShaderProgram {
    pub(crate) program: WebGlProgram,
}

impl ShaderProgram {
    /// Compiles both shader stages and links them into a program.
    ///
    /// The shader objects are deleted once linking succeeds; a failing
    /// compile or link carries its info log in the returned error.
    pub fn create(gl: &GL, vertex_source: &str, fragment_source: &str) -> Result<Self, Error> {
        let program = gl.create_program().ok_or(Error::shader_program_creation_failed())?;

        // compile shaders
        let vertex_shader = compile_shader(gl, ShaderType::Vertex, vertex_source)?;
        let fragment_shader = compile_shader(gl, ShaderType::Fragment, fragment_source)?;

        // attach shaders and link program
        gl.attach_shader(&program, &vertex_shader);
        gl.attach_shader(&program, &fragment_shader);
        gl.link_program(&program);
        check_link_status(gl, &program)?;

        // delete shaders (no longer needed after linking)
        gl.delete_shader(Some(&vertex_shader));
        gl.delete_shader(Some(&fragment_shader));

        Ok(ShaderProgram { program })
    }

    /// Use the shader program.
    pub fn use_program(&self, gl: &GL) {
        gl.use_program(Some(&self.program));
    }

    /// Uploads a column-major matrix to the named `mat4` uniform.
    pub fn set_uniform_mat4(&self, gl: &GL, name: &str, matrix: &Mat4) -> Result<(), Error> {
        let location = self.uniform_location(gl, name)?;
        gl.uniform_matrix4fv_with_f32_array(Some(&location), false, matrix.as_slice());
        Ok(())
    }

    /// Uploads four components to the named `vec4` uniform.
    pub fn set_uniform_vec4(&self, gl: &GL, name: &str, value: [f32; 4]) -> Result<(), Error> {
        let location = self.uniform_location(gl, name)?;
        gl.uniform4fv_with_f32_array(Some(&location), &value);
        Ok(())
    }

    /// Looks up the location of a named vertex attribute.
    pub fn attrib_location(&self, gl: &GL, name: &str) -> Result<u32, Error> {
        let location = gl.get_attrib_location(&self.program, name);
        u32::try_from(location).map_err(|_| Error::attrib_location_failed(name))
    }

    fn uniform_location(&self, gl: &GL, name: &str) -> Result<WebGlUniformLocation, Error> {
        gl.get_uniform_location(&self.program, name)
            .ok_or(Error::uniform_location_failed(name))
    }
}

fn compile_shader(gl: &GL, shader_type: ShaderType, source: &str) -> Result<WebGlShader, Error> {
    let shader = gl
        .create_shader(shader_type.into())
        .ok_or(Error::shader_creation_failed("failed creating shader"))?;

    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    check_compile_status(gl, &shader)?;

    Ok(shader)
}

fn check_compile_status(gl: &GL, shader: &WebGlShader) -> Result<(), Error> {
    let status = gl.get_shader_parameter(shader, GL::COMPILE_STATUS);
    if status.as_bool().unwrap_or(false) {
        return Ok(());
    }

    let log = gl.get_shader_info_log(shader).unwrap_or_default();
    gl.delete_shader(Some(shader));
    Err(Error::shader_compile_failed(log))
}

fn check_link_status(gl: &GL, program: &WebGlProgram) -> Result<(), Error> {
    let status = gl.get_program_parameter(program, GL::LINK_STATUS);
    if status.as_bool().unwrap_or(false) {
        return Ok(());
    }

    let log = gl.get_program_info_log(program).unwrap_or_default();
    Err(Error::shader_link_failed(log))
}

/// Enum representing the type of shader.
enum ShaderType {
    Vertex,
    Fragment,
}

impl From<ShaderType> for u32 {
    fn from(shader_type: ShaderType) -> Self {
        use ShaderType::*;

        match shader_type {
            Vertex => GL::VERTEX_SHADER,
            Fragment => GL::FRAGMENT_SHADER,
        }
    }
}
