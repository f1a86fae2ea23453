pub mod category;
pub mod requests;
pub mod response;
