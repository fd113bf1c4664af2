mod canonical_renderer;

pub use canonical_renderer::CanonicalRenderer;
