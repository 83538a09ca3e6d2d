//! Seller onboarding.

use vendor_types::{CreateSellerExtendedRequest, UploadPrefix, VendorRegistration};

use crate::{ClientError, UploadFile, VendorClient};

impl VendorClient {
    /// Creates the seller request with business and KYC data.
    ///
    /// Requires a session (see [`VendorClient::sign_up_bare`]).
    pub async fn create_seller_extended(
        &self,
        body: &CreateSellerExtendedRequest,
    ) -> Result<(), ClientError> {
        tracing::debug!(name = %body.name, "Creating extended seller");
        self.post_unit("/vendorapp/sellers-extended", body).await
    }

    /// Runs the full vendor registration.
    ///
    /// Uploads the identity card picture (and the tax-id picture when given),
    /// creates and signs in the auth identity, then submits the seller
    /// request. Returns the submitted request.
    pub async fn register_vendor(
        &mut self,
        registration: VendorRegistration,
        ci_picture: &UploadFile,
        tax_id_picture: Option<&UploadFile>,
    ) -> Result<CreateSellerExtendedRequest, ClientError> {
        registration.validate()?;

        tracing::info!("Uploading identity card");
        let ci = self.upload_image(ci_picture, UploadPrefix::Kyc).await?;

        let tax = match tax_id_picture {
            Some(file) => {
                tracing::info!("Uploading tax-id document");
                Some(self.upload_image(file, UploadPrefix::Kyc).await?)
            }
            None => None,
        };

        self.sign_up_bare(
            &registration.email,
            &registration.password,
            &registration.confirm_password,
        )
        .await?;

        let request = registration.into_request(&ci, tax.as_ref());
        self.create_seller_extended(&request).await?;
        tracing::info!(email = %request.member.email, "Vendor registration submitted");
        Ok(request)
    }
}
