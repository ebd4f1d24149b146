//! Retry-with-alternate-target
//!
//! Tries the primary target, then the alternate when the primary's error is
//! retryable. No backoff and no second round.

use std::future::Future;

#[derive(Debug, Clone)]
pub struct FallbackChain<T> {
    primary: T,
    fallback: T,
}

impl<T: std::fmt::Display> FallbackChain<T> {
    /// Primary target followed by one fixed alternate
    pub fn new(primary: T, fallback: T) -> Self {
        Self { primary, fallback }
    }

    /// Run `attempt` against the primary, then against the fallback if the
    /// primary failed with an error `retry_on` accepts. Returns the
    /// fallback's error when both failed.
    pub async fn run<F, Fut, R, E, P>(&self, mut attempt: F, retry_on: P) -> Result<R, E>
    where
        F: FnMut(&T) -> Fut,
        Fut: Future<Output = Result<R, E>>,
        E: std::fmt::Display,
        P: Fn(&E) -> bool,
    {
        match attempt(&self.primary).await {
            Ok(result) => Ok(result),
            Err(e) if !retry_on(&e) => {
                log::warn!("Primary target {} failed ({}), not retryable", self.primary, e);
                Err(e)
            }
            Err(e) => {
                log::warn!("Primary target {} failed ({}), attempting fallback {}...", self.primary, e, self.fallback);

                let result = attempt(&self.fallback).await;
                if let Err(e) = &result {
                    log::error!("Fallback target {} failed: {}", self.fallback, e);
                }
                result
            }
        }
    }
}
