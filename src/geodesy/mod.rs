pub mod anchor;
pub mod bearing;
pub mod mapper;
pub mod route;
