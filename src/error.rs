use glium::{vertex::BufferCreationError, DrawError, ProgramCreationError, SwapBuffersError};

/// Fatal failure of the OpenGL side. Never retried.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("Failed to compile the shader program: {0}")]
    Program(#[from] ProgramCreationError),
    #[error("Failed to create a vertex buffer: {0}")]
    Buffer(#[from] BufferCreationError),
    #[error("Draw call failed: {0}")]
    Draw(#[from] DrawError),
    #[error("Failed to present the frame: {0}")]
    Swap(#[from] SwapBuffersError),
}
