use tinylink_core::{Mapping, Repository, ShortCode, ShortenerError, StorageError, TargetUrl};
use tinylink_generator::CodeGenerator;
use tracing::{debug, info, warn};

/// States of a single code assignment.
///
/// ```text
/// TryDeterministic -collision-> TryRandom{1} -collision-> .. TryRandom{N} -collision-> Failed
///        |                           |                          |
///        +------------ok-------------+------------ok------------+-> Succeeded
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentState {
    /// Insert the URL's content-derived candidate.
    TryDeterministic,
    /// Insert a random candidate. `attempt` counts from 1.
    TryRandom { attempt: u32 },
    /// A mapping was persisted.
    Succeeded(Mapping),
    /// Every candidate collided; nothing was persisted.
    Failed { attempts: u32 },
}

/// Drives one URL through the assignment state machine.
pub(crate) struct Assignment<'a, R, G> {
    repository: &'a R,
    generator: &'a G,
    url: &'a TargetUrl,
    max_random_attempts: u32,
}

impl<'a, R: Repository, G: CodeGenerator> Assignment<'a, R, G> {
    pub(crate) fn new(
        repository: &'a R,
        generator: &'a G,
        url: &'a TargetUrl,
        max_random_attempts: u32,
    ) -> Self {
        Self {
            repository,
            generator,
            url,
            max_random_attempts,
        }
    }

    pub(crate) async fn run(self) -> Result<Mapping, ShortenerError> {
        let mut state = AssignmentState::TryDeterministic;
        loop {
            state = match state {
                AssignmentState::Succeeded(mapping) => {
                    info!(
                        code = %mapping.short_code,
                        id = %mapping.id,
                        url = %mapping.original_url,
                        "assigned short code"
                    );
                    return Ok(mapping);
                }
                AssignmentState::Failed { attempts } => {
                    warn!(url = %self.url, attempts, "short code assignment exhausted");
                    return Err(ShortenerError::AssignmentExhausted { attempts });
                }
                pending => self.step(pending).await?,
            };
        }
    }

    /// Performs the insert for a non-terminal state and returns the next one.
    async fn step(&self, state: AssignmentState) -> Result<AssignmentState, ShortenerError> {
        match state {
            AssignmentState::TryDeterministic => {
                let code = self.generator.deterministic_code(self.url.as_str());
                Ok(match self.try_insert(&code).await? {
                    Some(mapping) => AssignmentState::Succeeded(mapping),
                    None => {
                        debug!(code = %code, "deterministic candidate collided");
                        self.random_or_fail(1)
                    }
                })
            }
            AssignmentState::TryRandom { attempt } => {
                let code = self.generator.random_code();
                Ok(match self.try_insert(&code).await? {
                    Some(mapping) => AssignmentState::Succeeded(mapping),
                    None => {
                        debug!(code = %code, attempt, "random candidate collided");
                        self.random_or_fail(attempt.saturating_add(1))
                    }
                })
            }
            terminal => Ok(terminal),
        }
    }

    fn random_or_fail(&self, attempt: u32) -> AssignmentState {
        if attempt > self.max_random_attempts {
            AssignmentState::Failed {
                attempts: self.max_random_attempts.saturating_add(1),
            }
        } else {
            AssignmentState::TryRandom { attempt }
        }
    }

    /// `Ok(None)` means the store rejected the code as a duplicate.
    async fn try_insert(&self, code: &ShortCode) -> Result<Option<Mapping>, ShortenerError> {
        match self.repository.insert(code, self.url.as_str()).await {
            Ok(mapping) => Ok(Some(mapping)),
            Err(StorageError::Conflict(_)) => Ok(None),
            Err(other) => Err(ShortenerError::Storage(other)),
        }
    }
}
