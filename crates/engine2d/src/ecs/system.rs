//! System trait and implementations

/// System trait for processing entities and components
pub trait System {
    /// Run the system once over the world
    fn run(&mut self, world: &mut crate::ecs::World);
}
