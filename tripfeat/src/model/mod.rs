pub mod feature;
pub mod featurizer;
pub mod fieldname;
pub mod pipeline;
pub mod trip;
