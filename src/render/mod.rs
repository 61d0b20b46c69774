pub mod backend;
pub mod camera;
pub mod cpu;
pub mod text;

pub use backend::FrameRGBA;
pub use camera::Camera;
pub use cpu::CpuRenderer;
