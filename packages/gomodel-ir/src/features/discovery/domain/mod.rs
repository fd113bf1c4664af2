mod cancellation;
mod package_tree;

pub use cancellation::CancellationToken;
pub(crate) use cancellation::StopCondition;
pub use package_tree::{FileNode, PackageNode, PackageTree, PreOrder};
