//! Seller authentication with the `emailpass` provider.

use reqwest::Method;
use vendor_types::{
    AuthResponse, CreateSellerRequest, EmailPassCredentials, Member, RegisterIdentityRequest,
    ResetPasswordRequest, SignupMetadata, UpdatePasswordRequest,
};

use crate::{ClientError, VendorClient};

const AUTH_PATH: &str = "/auth/seller/emailpass";

impl VendorClient {
    /// Logs in and keeps the session token.
    ///
    /// Returns the raw answer so callers can follow a redirect location.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ClientError> {
        tracing::debug!(email, "Logging in");
        let creds = EmailPassCredentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: AuthResponse = self.post(AUTH_PATH, &creds).await?;
        if let AuthResponse::Token { token } = &resp {
            self.token = Some(token.clone());
        }
        Ok(resp)
    }

    /// Creates an auth identity and keeps its registration token.
    pub async fn register_identity(
        &mut self,
        email: &str,
        password: &str,
        confirm_password: &str,
        metadata: Option<SignupMetadata>,
    ) -> Result<String, ClientError> {
        tracing::debug!(email, "Registering auth identity");
        let req = RegisterIdentityRequest {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
            metadata,
        };
        match self
            .post::<AuthResponse, _>(&format!("{AUTH_PATH}/register"), &req)
            .await?
        {
            AuthResponse::Token { token } => {
                self.token = Some(token.clone());
                Ok(token)
            }
            AuthResponse::Redirect { location } => Err(ClientError::UnexpectedRedirect(location)),
        }
    }

    /// Creates an auth identity, then logs in right away so the following
    /// seller requests carry a session.
    pub async fn sign_up_bare(
        &mut self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), ClientError> {
        self.register_identity(email, password, confirm_password, Some(SignupMetadata::now()))
            .await?;
        match self.login(email, password).await? {
            AuthResponse::Token { .. } => Ok(()),
            AuthResponse::Redirect { location } => Err(ClientError::UnexpectedRedirect(location)),
        }
    }

    /// Registers an identity and creates the seller through the legacy
    /// `/vendor/sellers` route.
    pub async fn sign_up(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<String, ClientError> {
        let token = self.register_identity(email, password, password, None).await?;
        let seller = CreateSellerRequest {
            name: name.to_string(),
            member: Member {
                name: name.to_string(),
                email: email.to_string(),
            },
        };
        self.post_unit("/vendor/sellers", &seller).await?;
        tracing::info!(email, "Seller created");
        Ok(token)
    }

    /// Requests a password reset email.
    pub async fn reset_password(&self, email: &str) -> Result<(), ClientError> {
        let req = ResetPasswordRequest {
            identifier: email.to_string(),
        };
        self.post_unit(&format!("{AUTH_PATH}/reset-password"), &req)
            .await
    }

    /// Sets a new password using the token from the reset email.
    pub async fn update_password(
        &self,
        reset_token: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        let req = UpdatePasswordRequest {
            password: password.to_string(),
        };
        let resp = self
            .request(Method::POST, &format!("{AUTH_PATH}/update"), false)
            .bearer_auth(reset_token)
            .json(&req)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    /// Ends the session and forgets the token.
    pub async fn logout(&mut self) -> Result<(), ClientError> {
        tracing::debug!("Logging out");
        let resp = self
            .request(Method::DELETE, "/auth/session", true)
            .send()
            .await?;
        Self::check(resp).await?;
        self.token = None;
        Ok(())
    }
}
