mod builder;

pub use builder::EntityBuilder;
