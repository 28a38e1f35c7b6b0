use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Window could not be created: {0}")]
    WindowBuild(#[from] sdl2::video::WindowBuildError),

    #[error("Renderer could not be created: {0}")]
    CanvasBuild(#[from] sdl2::IntegerOrSdlError),

    #[error("Unable to load texture from {path:?}: {message}")]
    TextureLoad { path: PathBuf, message: String },
}
