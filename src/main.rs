use glam::Vec2;
use gravisim::{
    consts::{DEFAULT_RADIUS, RANDOM_BODY_COUNT},
    properties::Body,
    renderer::Renderer,
    simulator::SimulationBuilder,
};

fn main() {
    env_logger::init();

    let simulation = SimulationBuilder::new()
        .body(Body::new(Vec2::ZERO, Vec2::ZERO, DEFAULT_RADIUS))
        .random_bodies(&mut rand::thread_rng(), RANDOM_BODY_COUNT)
        .build();

    let renderer = Renderer::new(simulation);
    if let Err(err) = renderer.create_window() {
        log::error!("{err}");
        std::process::exit(1);
    }
}
