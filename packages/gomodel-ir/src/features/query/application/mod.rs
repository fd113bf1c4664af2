mod model_query;

pub use model_query::ModelQuery;
