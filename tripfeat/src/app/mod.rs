mod tripfeat_app;
mod tripfeat_app_error;
pub mod tripfeat_ops;
pub mod trip_csv_ops;

pub use tripfeat_app::{TripFeatApp, TripFeatOperation};
pub use tripfeat_app_error::TripFeatAppError;
