/// Factories for creating adapters selected at runtime
mod presenter_factory;
mod renderer_factory;

pub use presenter_factory::{PresenterFactory, PresenterType};
pub use renderer_factory::RendererFactory;
