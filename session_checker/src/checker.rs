use std::{future::Future, time::Duration};

use teloxide::{requests::Requester, Bot};

use crate::status::Status;

/// Who a credential belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub first_name: String,
    pub id: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Request(#[from] teloxide::RequestError),
    #[error("timed out after {}s", .0.as_secs_f64())]
    TimedOut(Duration),
}

/// Anything that can tell us whose credential it's holding.
pub trait IdentitySource {
    fn fetch_identity(&self) -> impl Future<Output = Result<Identity, CheckError>> + Send;
}

impl IdentitySource for Bot {
    async fn fetch_identity(&self) -> Result<Identity, CheckError> {
        let me = self.get_me().await?;
        Ok(Identity {
            first_name: me.user.first_name.clone(),
            id: me.user.id.0,
        })
    }
}

/// Ask `source` who it is, giving up after `timeout`. Never retries.
pub async fn check(source: &impl IdentitySource, timeout: Duration) -> Status {
    let result = match tokio::time::timeout(timeout, source.fetch_identity()).await {
        Ok(result) => result,
        Err(_) => Err(CheckError::TimedOut(timeout)),
    };

    match result {
        Ok(Identity { first_name, id }) => {
            log::info!("Credential belongs to {first_name} ({id}).");
            Status::Valid { first_name, id }
        }
        Err(e) => {
            log::warn!("Credential check failed: {e}");
            Status::invalid(e)
        }
    }
}
