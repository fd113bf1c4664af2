mod discoverer;

pub use discoverer::PackageDiscoverer;
