use glium::{
    glutin::surface::WindowSurface, index::PrimitiveType, uniform, Display, DrawParameters, Frame,
    Program, Surface, VertexBuffer,
};

use crate::{
    consts::{BACKGROUND_COLOR, DRAG_LINE_COLOR, HEADING_COLOR, LINE_WIDTH},
    error::RenderError,
    simulator::Simulation,
};

use super::{shapes, Vertex};

static VERTEX_SHADER_SRC: &str = r#"
#version 140

in vec2 position;

uniform vec2 offset;

void main() {
    gl_Position = vec4(position + offset, 0.0, 1.0);
}
"#;

static FRAGMENT_SHADER_SRC: &str = r#"
#version 140

uniform vec3 color;

out vec4 frag_color;

void main() {
    frag_color = vec4(color, 1.0);
}
"#;

/// GPU resources that live as long as the window.
pub struct Scene {
    program: Program,
    /// One triangle fan per body, same order as the simulation
    circles: Vec<VertexBuffer<Vertex>>,
}

impl Scene {
    pub fn new(
        display: &Display<WindowSurface>,
        simulation: &Simulation,
    ) -> Result<Self, RenderError> {
        let program =
            Program::from_source(display, VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC, None)?;

        let mut circles = Vec::with_capacity(simulation.bodies().len());
        for body in simulation.bodies() {
            let shape = shapes::circle_fan(body.radius, body.segments);
            circles.push(VertexBuffer::new(display, &shape)?);
        }

        Ok(Self { program, circles })
    }
}

/// Draws one frame. The frame is always presented, even if a draw call failed.
pub fn draw_scene(
    display: &Display<WindowSurface>,
    scene: &Scene,
    simulation: &Simulation,
) -> Result<(), RenderError> {
    let mut target = display.draw();
    let [r, g, b] = BACKGROUND_COLOR;
    target.clear_color(r, g, b, 1.0);

    let drawn = draw_bodies(&mut target, scene, simulation)
        .and_then(|()| draw_lines(&mut target, display, scene, simulation));

    target.finish()?;
    drawn
}

fn draw_bodies(
    target: &mut Frame,
    scene: &Scene,
    simulation: &Simulation,
) -> Result<(), RenderError> {
    let indices = glium::index::NoIndices(PrimitiveType::TriangleFan);

    for (body, circle) in simulation.bodies().iter().zip(scene.circles.iter()) {
        let uniforms = uniform! {
            offset: body.position.to_array(),
            color: body.color,
        };

        target.draw(circle, indices, &scene.program, &uniforms, &Default::default())?;
    }

    Ok(())
}

fn draw_lines(
    target: &mut Frame,
    display: &Display<WindowSurface>,
    scene: &Scene,
    simulation: &Simulation,
) -> Result<(), RenderError> {
    let indices = glium::index::NoIndices(PrimitiveType::LinesList);
    let params = DrawParameters {
        line_width: Some(LINE_WIDTH),
        ..Default::default()
    };

    let mut headings: Vec<Vertex> = vec![];
    for body in simulation.bodies() {
        let (start, end) = body.heading_indicator();
        headings.append(&mut shapes::line(start, end));
    }

    if !headings.is_empty() {
        let vertex_buffer = VertexBuffer::new(display, &headings)?;
        let uniforms = uniform! {
            offset: [0.0_f32, 0.0],
            color: HEADING_COLOR,
        };
        target.draw(&vertex_buffer, indices, &scene.program, &uniforms, &params)?;
    }

    if let Some((start, end)) = simulation.drag_line() {
        let vertex_buffer = VertexBuffer::new(display, &shapes::line(start, end))?;
        let uniforms = uniform! {
            offset: [0.0_f32, 0.0],
            color: DRAG_LINE_COLOR,
        };
        target.draw(&vertex_buffer, indices, &scene.program, &uniforms, &params)?;
    }

    Ok(())
}
