use crate::utils::error::{GenError, Result};

pub const DOMAIN_ENV_VAR: &str = "DOMAIN_NAME";

/// How a resolved domain is cleaned up before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainPolicy {
    /// Use the value exactly as given.
    Verbatim,
    /// Strip surrounding whitespace.
    Trimmed,
}

/// Picks the domain from the environment first and the positional argument second.
///
/// An empty environment value counts as unset. Under [`DomainPolicy::Trimmed`] a
/// value that is empty after trimming is rejected as well.
pub fn resolve_domain(
    env_value: Option<String>,
    arg_value: Option<String>,
    policy: DomainPolicy,
) -> Result<String> {
    let raw = env_value
        .filter(|value| !value.is_empty())
        .or_else(|| arg_value.filter(|value| !value.is_empty()))
        .ok_or(GenError::MissingDomainError)?;

    let domain = match policy {
        DomainPolicy::Verbatim => raw,
        DomainPolicy::Trimmed => raw.trim().to_string(),
    };

    if domain.is_empty() {
        return Err(GenError::MissingDomainError);
    }

    Ok(domain)
}

/// [`resolve_domain`] against the process environment.
pub fn resolve_domain_from_env(arg_value: Option<String>, policy: DomainPolicy) -> Result<String> {
    resolve_domain(std::env::var(DOMAIN_ENV_VAR).ok(), arg_value, policy)
}
