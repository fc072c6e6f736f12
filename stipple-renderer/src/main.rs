use stipple_math::{Color, Mat4, Rng};
use stipple_renderer::{
    create_attrib_buffer, input::ClickHandler, upload_f32_array, AttribPointer, Error, Renderer,
    ShaderProgram, GL,
};
use web_sys::console;

const VERTEX_GLSL: &str = include_str!("shaders/point.vert");
const FRAGMENT_GLSL: &str = include_str!("shaders/point.frag");

/// A clicked point in canvas pixel coordinates.
struct Point {
    x: f32,
    y: f32,
    color: Color,
}

fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    run().unwrap()
}

fn run() -> Result<(), Error> {
    let renderer = Renderer::create("#canvas")?;
    let canvas = renderer.canvas().clone();

    let shader = ShaderProgram::create(renderer.gl(), VERTEX_GLSL, FRAGMENT_GLSL)?;
    shader.use_program(renderer.gl());

    let (width, height) = renderer.canvas_size();
    let projection = Mat4::orthographic_from_size(width as f32, height as f32);
    shader.set_uniform_mat4(renderer.gl(), "u_projection", &projection)?;

    let position_attrib = shader.attrib_location(renderer.gl(), "a_position")?;
    let _position_buffer =
        create_attrib_buffer(renderer.gl(), position_attrib, &AttribPointer::floats(2))?;

    renderer.clear(0.0, 0.0, 0.0, 0.1);

    let mut points: Vec<Point> = Vec::new();
    let mut rng = Rng::default();

    let handler = ClickHandler::new(&canvas, move |event| {
        let color = Color::random(&mut rng);
        points.push(Point { x: event.x, y: event.y, color });
        console::log_1(&format!("point {} at ({}, {})", points.len(), event.x, event.y).into());

        if let Err(err) = redraw(&renderer, &shader, &points) {
            console::error_1(&format!("redraw failed: {err}").into());
        }
    })?;

    // the listener must outlive `run`
    handler.leak();

    Ok(())
}

/// Re-uploads every point position and redraws the whole set.
fn redraw(renderer: &Renderer, shader: &ShaderProgram, points: &[Point]) -> Result<(), Error> {
    upload_f32_array(renderer.gl(), GL::ARRAY_BUFFER, &position_data(points), GL::DYNAMIC_DRAW);

    renderer.clear(0.0, 0.0, 0.0, 0.1);
    for (i, point) in points.iter().enumerate() {
        shader.set_uniform_vec4(renderer.gl(), "u_color", point.color.as_f32())?;
        renderer.gl().draw_arrays(GL::POINTS, i as i32, 1);
    }

    Ok(())
}

/// Flattens points into the interleaved x/y layout of the position buffer.
fn position_data(points: &[Point]) -> Vec<f32> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shaders_reference_expected_interface() {
        assert!(VERTEX_GLSL.contains("a_position"));
        assert!(VERTEX_GLSL.contains("u_projection"));
        assert!(FRAGMENT_GLSL.contains("u_color"));
    }

    #[test]
    fn test_position_data_interleaves_xy() {
        let points = vec![
            Point { x: 1.0, y: 2.0, color: Color::WHITE },
            Point { x: 3.0, y: 4.0, color: Color::BLACK },
        ];

        assert_eq!(position_data(&points), [1.0, 2.0, 3.0, 4.0]);
    }
}
