use jsonwebtoken::{decode, DecodingKey, Validation};
use shared_types::{AppError, Role, Session, TokenClaims};
use std::collections::HashSet;

/// Decode the token's claims without checking its signature.
///
/// The API verifies signatures on every request; the client only reads the
/// claims to decide what to show. Expiry is checked separately in
/// [`derive_session`] against a caller-supplied clock.
pub fn decode_claims(token: &str) -> Result<TokenClaims, AppError> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims = HashSet::new();

    decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| AppError::auth_invalid(format!("undecodable token: {e}")))
}

/// Map claim role strings onto [`Role`], keeping claim order.
/// Unknown strings are logged and skipped; repeats are dropped.
pub fn roles_from_claims(claims: &[String]) -> Vec<Role> {
    let mut roles = Vec::with_capacity(claims.len());
    for claim in claims {
        match Role::parse_claim(claim) {
            Some(role) if !roles.contains(&role) => roles.push(role),
            Some(_) => {}
            None => tracing::warn!(role = %claim, "Ignoring unknown role claim"),
        }
    }
    roles
}

/// Derive a session from a stored token.
///
/// Returns `None` for an absent or undecodable token, a blank subject, or a
/// token whose `exp` (seconds) lies before `now_ms`. A token expiring in the
/// current millisecond is still accepted. Callers discard the token on `None`.
pub fn derive_session(token: Option<&str>, now_ms: i64) -> Option<Session> {
    let token = token.map(str::trim).filter(|t| !t.is_empty())?;

    let claims = match decode_claims(token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::info!(error = %e, "Discarding stored token");
            return None;
        }
    };

    if claims.sub.trim().is_empty() {
        tracing::info!("Discarding token without a subject");
        return None;
    }

    if claims.exp.saturating_mul(1000) < now_ms {
        tracing::info!(sub = %claims.sub, exp = claims.exp, "Discarding expired token");
        return None;
    }

    Some(Session::new(claims.sub, roles_from_claims(&claims.roles)))
}
