//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged between the chat client and the identity service.
//!
//! ## Module Organization
//!
//! - [`auth`] - Verification code, code login, and password login DTOs
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /auth/login/password
//! Content-Type: application/json
//!
//! {
//!   "identity": "alice@example.com",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "user": {
//!     "id": "1",
//!     "username": "alice",
//!     "email": "alice@example.com"
//!   },
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "message": "Login successful"
//! }
//! ```

pub mod auth;

pub use auth::*;
