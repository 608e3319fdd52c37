// Services layer - stateless helpers shared by stores and coordinators
pub mod crypto;
pub mod token_service;

pub use token_service::TokenService;
