//! Domain models for the vendor panel.

pub mod seller;
pub mod support;
pub mod upload;

pub use seller::{
    BusinessType, CreateSellerExtendedRequest, CreateSellerRequest, Gender, Member,
    SellerContact, SellerData, VendorRegistration,
};
pub use support::{AuthorType, MessageDraft, SupportMessage, SupportThread, ThreadId, ThreadStatus};
pub use upload::{PresignRequest, PresignResponse, StorageMode, UploadPrefix, UploadResult};
