mod requests;
mod responses;

pub use requests::{CreatePostRequest, JsonBody};
pub use responses::HealthResponse;
