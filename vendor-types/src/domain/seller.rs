//! Seller registration.
//!
//! A vendor signs up with store, owner and business details plus a picture of
//! their identity card (and optionally their tax-id document). The form maps
//! onto the extended seller request once the documents are uploaded.

use serde::{Deserialize, Serialize};

use super::upload::UploadResult;
use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    #[default]
    Individual,
    Business,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// The team member created alongside the seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub email: String,
}

/// Body of the legacy `POST /vendor/sellers` route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSellerRequest {
    pub name: String,
    pub member: Member,
}

/// Public contact details of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

/// Business, banking and KYC details reviewed by the marketplace admins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_legal_name: Option<String>,
    pub business_type: BusinessType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci_picture_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id_picture_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci_picture_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id_picture_url: Option<String>,
}

/// Body of `POST /vendorapp/sellers-extended`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSellerExtendedRequest {
    pub name: String,
    pub member: Member,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller: Option<SellerContact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_data: Option<SellerData>,
}

/// Values entered on the registration screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorRegistration {
    /// Store name.
    pub name: String,
    /// Owner name.
    pub member_name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    pub phone: Option<String>,
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub tax_id: Option<String>,
    pub industry: Option<String>,
    pub bank_number: Option<String>,
    pub bank_name: Option<String>,
    pub bank_account_type: Option<String>,
    pub business_legal_name: Option<String>,
    pub ci_number: Option<String>,
    pub gender: Option<Gender>,
    pub business_type: BusinessType,
}

impl VendorRegistration {
    /// Checks the password confirmation. Field-level validation is left to
    /// the backend.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.password != self.confirm_password {
            return Err(DomainError::PasswordMismatch);
        }
        Ok(())
    }

    /// Builds the extended seller request from the form and the uploaded
    /// identity documents. Blank optional fields are omitted.
    pub fn into_request(
        self,
        ci_picture: &UploadResult,
        tax_id_picture: Option<&UploadResult>,
    ) -> CreateSellerExtendedRequest {
        let seller = SellerContact {
            email: Some(self.email.clone()),
            phone: non_empty(self.phone),
            address_line: non_empty(self.address_line),
            city: non_empty(self.city),
            state: non_empty(self.state),
            postal_code: non_empty(self.postal_code),
            country_code: non_empty(self.country_code),
            tax_id: non_empty(self.tax_id),
        };

        let seller_data = SellerData {
            business_legal_name: non_empty(self.business_legal_name),
            business_type: self.business_type,
            industry: non_empty(self.industry),
            gender: self.gender,
            ci_number: non_empty(self.ci_number),
            bank_name: non_empty(self.bank_name),
            bank_number: non_empty(self.bank_number),
            bank_account_type: non_empty(self.bank_account_type),
            ci_picture_key: ci_picture.key.clone(),
            tax_id_picture_key: tax_id_picture.and_then(|t| t.key.clone()),
            ci_picture_url: ci_picture.public_url.clone(),
            tax_id_picture_url: tax_id_picture.and_then(|t| t.public_url.clone()),
        };

        CreateSellerExtendedRequest {
            name: self.name,
            member: Member {
                name: self.member_name,
                email: self.email,
            },
            seller: Some(seller),
            seller_data: Some(seller_data),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
