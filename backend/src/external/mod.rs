//! External model-serving integrations

pub mod model_serving;

pub use model_serving::{AqiRegressor, CategoryClassifier, ModelDescriptor, RemoteModel};
