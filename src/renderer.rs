use glium::{glutin::surface::WindowSurface, implement_vertex, Display};
use winit::{
    event::{ElementState, Event, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::Window,
};

use crate::{
    consts::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH},
    error::RenderError,
    simulator::{FrameClock, Simulation},
};
use draw::Scene;
use event::PointerState;

mod draw;
pub mod event;
pub mod shapes;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
}
implement_vertex!(Vertex, position);

/// Opens a window and runs the simulation inside it until the window is closed.
pub struct Renderer {
    simulation: Simulation,
}

impl Renderer {
    pub fn new(simulation: Simulation) -> Self {
        Self { simulation }
    }

    /// Only returns if the GPU resources could not be created.
    pub fn create_window(self) -> Result<(), RenderError> {
        let event_loop = winit::event_loop::EventLoopBuilder::new().build();

        let (window, display) = glium::backend::glutin::SimpleWindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_WIDTH, WINDOW_HEIGHT)
            .build(&event_loop);

        let scene = Scene::new(&display, &self.simulation)?;

        log::info!(
            "Opened {}x{} window with {} bodies",
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            self.simulation.bodies().len()
        );

        self.run_render_loop(event_loop, display, window, scene)
    }

    fn run_render_loop(
        self,
        event_loop: EventLoop<()>,
        display: Display<WindowSurface>,
        window: Window,
        scene: Scene,
    ) -> ! {
        let mut simulation = self.simulation;
        let mut pointer = PointerState::new(window.inner_size());
        let mut clock = FrameClock::new();

        event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Poll;

            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                        *control_flow = ControlFlow::Exit;
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        if input.virtual_keycode == Some(VirtualKeyCode::Escape)
                            && input.state == ElementState::Pressed
                        {
                            *control_flow = ControlFlow::Exit;
                        }
                    }
                    WindowEvent::Resized(size) => {
                        display.resize((size.width, size.height));
                        pointer.resized(size);
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        if let Some(input) = pointer.cursor_moved(position) {
                            simulation.handle_input(input);
                        }
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        if let Some(input) = pointer.mouse_input(state, button) {
                            simulation.handle_input(input);
                        }
                    }
                    _ => (),
                },
                Event::MainEventsCleared => window.request_redraw(),
                Event::RedrawRequested(_) => {
                    simulation.step(clock.tick());

                    if let Err(err) = draw::draw_scene(&display, &scene, &simulation) {
                        log::error!("{err}");
                        *control_flow = ControlFlow::ExitWithCode(1);
                    }
                }
                _ => (),
            }
        })
    }
}
