mod classifier;

pub use classifier::DeclarationClassifier;
