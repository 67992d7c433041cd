//! Application services for user management.

mod directory;

pub use directory::{
    AddUserRequest, UserService, UserServiceError, UserServiceResult, UserUpdate,
};
