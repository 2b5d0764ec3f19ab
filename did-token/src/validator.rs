use crate::{
    claim::Claim,
    crypto::{verify_claim_signature, verify_personal_signature, AddressRecovery, Secp256k1Recovery},
    error::{Error, Result},
    issuer,
    time::now,
    token::Token,
};
use log::{debug, trace};

/// Clock-skew allowance: tokens are accepted up to this many seconds before
/// their `nbf`
pub const GRACE_PERIOD_SECONDS: i64 = 300;

/// Validates DID tokens issued for one client.
///
/// Checks run in a fixed order and stop at the first failure: expiry,
/// not-before (with the grace period), audience, then signature.
#[derive(Clone, Debug)]
pub struct TokenValidator<R = Secp256k1Recovery> {
    client_id: String,
    grace_period: i64,
    recovery: R,
}

impl TokenValidator {
    /// Create a validator expecting tokens whose `aud` is `client_id`
    pub fn new(client_id: impl Into<String>) -> Self {
        TokenValidator {
            client_id: client_id.into(),
            grace_period: GRACE_PERIOD_SECONDS,
            recovery: Secp256k1Recovery,
        }
    }
}

impl<R> TokenValidator<R>
where
    R: AddressRecovery,
{
    /// Override the clock-skew allowance applied to `nbf`
    pub fn with_grace_period(mut self, seconds: u32) -> Self {
        self.grace_period = i64::from(seconds);
        self
    }

    /// Swap the signature recovery backend
    pub fn with_recovery<S>(self, recovery: S) -> TokenValidator<S>
    where
        S: AddressRecovery,
    {
        TokenValidator {
            client_id: self.client_id,
            grace_period: self.grace_period,
            recovery,
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn grace_period(&self) -> i64 {
        self.grace_period
    }

    /// Validate against the current wall-clock time
    pub fn validate(&self, token: &Token) -> Result<()> {
        self.validate_at(token, now())
    }

    /// Validate as if the current time were `now`, in seconds since the Unix
    /// epoch
    pub fn validate_at(&self, token: &Token, now: i64) -> Result<()> {
        let claim = token.claim();

        if is_expired(claim, now) {
            debug!("Rejecting token from {}: expired", claim.issuer);
            return Err(Error::TokenExpired {
                expires_at: claim.expires_at,
                now,
            });
        }

        if self.is_too_early(claim, now) {
            debug!("Rejecting token from {}: not valid yet", claim.issuer);
            return Err(Error::TokenNotYetValid {
                not_before: claim.not_before,
                now,
            });
        }

        if claim.audience != self.client_id {
            debug!("Rejecting token from {}: audience mismatch", claim.issuer);
            return Err(Error::AudienceMismatch {
                expected: self.client_id.clone(),
                actual: claim.audience.clone(),
            });
        }

        self.check_signature(token)?;

        trace!("Validated token {} from {}", claim.token_id, claim.issuer);
        Ok(())
    }

    /// Validate that the proof was produced by the issuer's address over the
    /// canonical claim JSON
    pub fn check_signature(&self, token: &Token) -> Result<()> {
        let claimed_address = issuer::parse_issuer_address(token.issuer())?;

        verify_claim_signature(&self.recovery, token.claim(), token.proof(), &claimed_address)
            .map_err(|error| {
                debug!("Rejecting token from {}: {error}", token.issuer());
                error
            })
    }

    /// Validate that the `add` claim is the issuer's `personal_sign` signature
    /// over `attachment`. Tokens minted without an explicit attachment sign the
    /// literal string `"none"`.
    ///
    /// This does not repeat the checks of [`TokenValidator::validate`].
    pub fn validate_attachment(&self, token: &Token, attachment: &str) -> Result<()> {
        let additional_data = token.claim().additional_data.as_deref().ok_or_else(|| {
            Error::AttachmentMismatch {
                msg: "Token carries no `add` claim".into(),
                source: None,
            }
        })?;

        let attachment_mismatch = |error: Error| Error::AttachmentMismatch {
            msg: format!("`add` is not the issuer's signature over attachment {attachment:?}"),
            source: Some(Box::new(error)),
        };

        let claimed_address =
            issuer::parse_issuer_address(token.issuer()).map_err(attachment_mismatch)?;

        verify_personal_signature(
            &self.recovery,
            attachment.as_bytes(),
            additional_data,
            &claimed_address,
        )
        .map_err(attachment_mismatch)
    }

    /// Decode a token string and validate it in one step
    pub fn decode_and_validate(&self, token: &str) -> Result<Token> {
        let token = Token::decode(token)?;
        self.validate(&token)?;
        Ok(token)
    }

    fn is_too_early(&self, claim: &Claim, now: i64) -> bool {
        now < claim.not_before.saturating_sub(self.grace_period)
    }
}

fn is_expired(claim: &Claim, now: i64) -> bool {
    now > claim.expires_at
}

/// Validate a token against `expected_client_id` and the current time
pub fn validate(token: &Token, expected_client_id: &str) -> Result<()> {
    TokenValidator::new(expected_client_id).validate(token)
}
