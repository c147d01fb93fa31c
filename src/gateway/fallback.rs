use crate::{
    config::Credential,
    error::{GatewayError, Result},
};
use futures::future::BoxFuture;

/// Runs `attempt` against each credential in order, primary before backup,
/// stopping at the first success. Attempts are strictly sequential; there is
/// no delay and no jitter between them. The per-attempt log lines are
/// advisory only.
pub async fn run_with_fallback<T, F>(
    credentials: &[Credential],
    operation: &str,
    mut attempt: F,
) -> Result<T>
where
    F: FnMut(&Credential) -> BoxFuture<'static, Result<T>>,
{
    if credentials.is_empty() {
        return Err(GatewayError::ConfigError(format!(
            "No API credentials configured for {}",
            operation
        )));
    }

    let mut last_failure = String::new();

    for credential in credentials {
        match attempt(credential).await {
            Ok(value) => {
                log::info!(
                    "{}: {} credential succeeded",
                    operation,
                    credential.rank.as_str()
                );
                return Ok(value);
            }
            Err(e) => {
                log::warn!(
                    "{}: {} credential failed: {}",
                    operation,
                    credential.rank.as_str(),
                    e
                );
                last_failure = e.to_string();
            }
        }
    }

    Err(GatewayError::AllProvidersFailed(last_failure))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CredentialRank;
    use std::cell::RefCell;

    fn credentials() -> Vec<Credential> {
        vec![
            Credential::new("key-primary", CredentialRank::Primary),
            Credential::new("key-backup", CredentialRank::Backup),
        ]
    }

    #[tokio::test]
    async fn stops_at_the_first_success() {
        let calls = RefCell::new(Vec::new());
        let result = run_with_fallback(&credentials(), "test-op", |credential| {
            calls.borrow_mut().push(credential.key.clone());
            Box::pin(async { Ok("artifact") })
        })
        .await
        .unwrap();

        assert_eq!(result, "artifact");
        assert_eq!(*calls.borrow(), vec!["key-primary".to_string()]);
    }

    #[tokio::test]
    async fn falls_back_to_the_backup_after_a_primary_failure() {
        let calls = RefCell::new(Vec::new());
        let result = run_with_fallback(&credentials(), "test-op", |credential| {
            calls.borrow_mut().push(credential.key.clone());
            let is_primary = credential.rank == CredentialRank::Primary;
            Box::pin(async move {
                if is_primary {
                    Err(GatewayError::UpstreamError("status 500".into()))
                } else {
                    Ok("backup artifact")
                }
            })
        })
        .await
        .unwrap();

        assert_eq!(result, "backup artifact");
        assert_eq!(
            *calls.borrow(),
            vec!["key-primary".to_string(), "key-backup".to_string()]
        );
    }

    #[tokio::test]
    async fn reports_the_last_failure_when_every_credential_fails() {
        let result: Result<&str> = run_with_fallback(&credentials(), "test-op", |credential| {
            let rank = credential.rank.as_str();
            Box::pin(async move {
                Err(GatewayError::UpstreamError(format!("{} exploded", rank)))
            })
        })
        .await;

        match result {
            Err(GatewayError::AllProvidersFailed(detail)) => {
                assert!(detail.contains("backup exploded"));
            }
            other => panic!("expected AllProvidersFailed, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn fails_fast_without_credentials() {
        let result: Result<&str> = run_with_fallback(&[], "test-op", |_credential| {
            panic!("attempt must not run without credentials")
        })
        .await;

        assert!(matches!(result, Err(GatewayError::ConfigError(_))));
    }
}
