//! Data models module
//!
//! Request and response shapes of the marketplace API. They mirror the
//! server's JSON and pass through the client unchanged.

pub mod auth;
pub mod chat;
pub mod listing;
pub mod location;
pub mod notification;
pub mod request;
pub mod user;

pub use auth::{Token, UserLogin, UserRegister};
pub use chat::{ChatListResponse, ChatStart, MessageCreate, MessageResponse};
pub use listing::{FavoriteToggle, ListingCreate, ListingResponse, ListingUpdate};
pub use location::{find_province, Coordinates, District, Location, Province, ProvinceApiResponse};
pub use notification::NotificationResponse;
pub use request::{ListingSnapshot, RequestCreate, RequestResponse, RequestRole, RequestUpdate};
pub use user::{UserResponse, UserStats, UserUpdate};
