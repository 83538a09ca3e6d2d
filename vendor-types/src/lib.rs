//! # Vendor Types
//!
//! Domain types and DTOs for the vendor panel API. This crate has no IO
//! dependencies - only data structures and the business rules the panel
//! applies before talking to the backend.
//!
//! - `domain/` - Support threads, seller registration, uploads
//! - `dto/` - Request and response bodies for the auth and support routes
//! - `error/` - Domain error types

pub mod domain;
pub mod dto;
pub mod error;

pub use domain::{
    AuthorType, BusinessType, CreateSellerExtendedRequest, CreateSellerRequest, Gender, Member,
    MessageDraft, PresignRequest, PresignResponse, SellerContact, SellerData, StorageMode,
    SupportMessage, SupportThread, ThreadId, ThreadStatus, UploadPrefix, UploadResult,
    VendorRegistration,
};
pub use dto::*;
pub use error::DomainError;
