//! System trait and ordered execution pipeline

/// A per-frame pass over a world of type `W`
pub trait System<W> {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Run the system once
    fn run(&mut self, world: &mut W);
}

/// Ordered list of systems executed front to back
///
/// Ordering is the only synchronization between systems, so the order of
/// [`Pipeline::with`] calls is part of the game's contract.
pub struct Pipeline<W> {
    systems: Vec<Box<dyn System<W>>>,
}

impl<W> Pipeline<W> {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self { systems: Vec::new() }
    }

    /// Append a system (builder pattern)
    #[must_use]
    pub fn with(mut self, system: impl System<W> + 'static) -> Self {
        self.systems.push(Box::new(system));
        self
    }

    /// Run every system in order
    pub fn run(&mut self, world: &mut W) {
        for system in &mut self.systems {
            log::trace!("Pipeline: running {}", system.name());
            system.run(world);
        }
    }

    /// System names in execution order
    pub fn names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|s| s.name()).collect()
    }

    /// Number of systems
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Whether the pipeline has no systems
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

impl<W> Default for Pipeline<W> {
    fn default() -> Self {
        Self::new()
    }
}
