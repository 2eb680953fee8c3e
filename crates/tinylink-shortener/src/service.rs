use crate::assignment::Assignment;
use async_trait::async_trait;
use std::sync::Arc;
use tinylink_core::{Mapping, Repository, Shortener, ShortenerError, TargetUrl};
use tinylink_generator::CodeGenerator;
use tracing::trace;
use typed_builder::TypedBuilder;

pub const DEFAULT_MAX_RANDOM_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, TypedBuilder)]
pub struct ShortenerSettings {
    /// Random candidates tried after the deterministic one collides.
    #[builder(default = DEFAULT_MAX_RANDOM_ATTEMPTS)]
    pub max_random_attempts: u32,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `CodeGenerator`. It holds no
/// locks of its own: concurrent calls only meet inside the repository,
/// whose atomic insert decides which caller gets a contested code.
#[derive(Debug)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    settings: ShortenerSettings,
}

impl<R, G> Clone for ShortenerService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
            settings: self.settings.clone(),
        }
    }
}

impl<R: Repository, G: CodeGenerator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService` with default settings.
    pub fn new(repository: R, generator: G) -> Self {
        Self::with_settings(repository, generator, ShortenerSettings::default())
    }

    pub fn with_settings(repository: R, generator: G, settings: ShortenerSettings) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            settings,
        }
    }
}

#[async_trait]
impl<R: Repository, G: CodeGenerator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, url: &str) -> Result<Mapping, ShortenerError> {
        let target = TargetUrl::parse(url)?;
        trace!(url = %target, "shortening url");

        Assignment::new(
            self.repository.as_ref(),
            self.generator.as_ref(),
            &target,
            self.settings.max_random_attempts,
        )
        .run()
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashSet, VecDeque};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use tinylink_core::repository::{ReadRepository, Result as StorageResult};
    use tinylink_core::{ShortCode, StorageError};
    use tinylink_generator::{ContentHashGenerator, GeneratorSettings};
    use tinylink_storage::InMemoryRepository;

    /// A store whose key space is full: every insert collides.
    #[derive(Default)]
    struct FullRepository {
        inserts: AtomicU32,
    }

    #[async_trait]
    impl ReadRepository for FullRepository {
        async fn get(&self, _code: &ShortCode) -> StorageResult<Option<Mapping>> {
            Ok(None)
        }
    }

    #[async_trait]
    impl Repository for FullRepository {
        async fn insert(&self, code: &ShortCode, _original_url: &str) -> StorageResult<Mapping> {
            self.inserts.fetch_add(1, Ordering::SeqCst);
            Err(StorageError::Conflict(code.to_string()))
        }
    }

    /// A store whose backend is down.
    #[derive(Default)]
    struct UnavailableRepository {
        inserts: AtomicU32,
    }

    #[async_trait]
    impl ReadRepository for UnavailableRepository {
        async fn get(&self, _code: &ShortCode) -> StorageResult<Option<Mapping>> {
            Err(StorageError::Unavailable("connection refused".to_string()))
        }
    }

    #[async_trait]
    impl Repository for UnavailableRepository {
        async fn insert(&self, _code: &ShortCode, _original_url: &str) -> StorageResult<Mapping> {
            self.inserts.fetch_add(1, Ordering::SeqCst);
            Err(StorageError::Unavailable("connection refused".to_string()))
        }
    }

    /// Yields a fixed deterministic candidate and a scripted queue of random ones.
    struct ScriptedGenerator {
        deterministic: ShortCode,
        randoms: Mutex<VecDeque<ShortCode>>,
    }

    impl ScriptedGenerator {
        fn new(deterministic: &str, randoms: &[&str]) -> Self {
            Self {
                deterministic: ShortCode::new_unchecked(deterministic),
                randoms: Mutex::new(randoms.iter().map(ShortCode::new_unchecked).collect()),
            }
        }
    }

    impl CodeGenerator for ScriptedGenerator {
        fn deterministic_code(&self, _url: &str) -> ShortCode {
            self.deterministic.clone()
        }

        fn random_code(&self) -> ShortCode {
            self.randoms
                .lock()
                .unwrap()
                .pop_front()
                .expect("random script exhausted")
        }
    }

    fn content_generator() -> ContentHashGenerator {
        ContentHashGenerator::new(GeneratorSettings::default()).unwrap()
    }

    fn test_service() -> (
        ShortenerService<Arc<InMemoryRepository>, ContentHashGenerator>,
        Arc<InMemoryRepository>,
    ) {
        let repo = Arc::new(InMemoryRepository::new());
        let service = ShortenerService::new(Arc::clone(&repo), content_generator());
        (service, repo)
    }

    #[tokio::test]
    async fn shorten_normalizes_and_uses_deterministic_code() {
        let (service, repo) = test_service();

        let mapping = service.shorten("example.com/page").await.unwrap();

        assert_eq!(mapping.original_url, "http://example.com/page");
        assert_eq!(
            mapping.short_code,
            content_generator().deterministic_code("http://example.com/page")
        );
        assert_eq!(repo.get(&mapping.short_code).await.unwrap(), Some(mapping));
    }

    #[tokio::test]
    async fn first_code_is_deterministic_across_runs() {
        let (first, _) = test_service();
        let (second, _) = test_service();

        let a = first.shorten("https://rust-lang.org/learn").await.unwrap();
        let b = second.shorten("https://rust-lang.org/learn").await.unwrap();

        assert_eq!(a.short_code, b.short_code);
    }

    #[tokio::test]
    async fn shortening_same_url_twice_yields_distinct_codes() {
        let (service, repo) = test_service();

        let first = service.shorten("example.com/page").await.unwrap();
        let second = service.shorten("example.com/page").await.unwrap();

        assert_ne!(first.short_code, second.short_code);
        assert_eq!(second.original_url, "http://example.com/page");
        assert_eq!(second.short_code.len(), 7);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn random_fallback_retries_until_a_free_code() {
        let repo = Arc::new(InMemoryRepository::new());
        repo.insert(&ShortCode::new_unchecked("aaaaaaa"), "https://taken.example/")
            .await
            .unwrap();
        repo.insert(&ShortCode::new_unchecked("bbbbbbb"), "https://taken.example/")
            .await
            .unwrap();

        let generator = ScriptedGenerator::new("aaaaaaa", &["bbbbbbb", "ccccccc"]);
        let service = ShortenerService::new(Arc::clone(&repo), generator);

        let mapping = service.shorten("https://example.com/").await.unwrap();
        assert_eq!(mapping.short_code.as_str(), "ccccccc");
        assert_eq!(repo.len(), 3);
    }

    #[tokio::test]
    async fn full_key_space_exhausts_after_one_deterministic_and_three_random_attempts() {
        let repo = Arc::new(FullRepository::default());
        let service = ShortenerService::new(Arc::clone(&repo), content_generator());

        let err = service.shorten("https://example.com/").await.unwrap_err();

        assert!(matches!(
            err,
            ShortenerError::AssignmentExhausted { attempts: 4 }
        ));
        assert_eq!(repo.inserts.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn max_random_attempts_is_configurable() {
        let repo = Arc::new(FullRepository::default());
        let settings = ShortenerSettings::builder().max_random_attempts(5).build();
        let service =
            ShortenerService::with_settings(Arc::clone(&repo), content_generator(), settings);

        let err = service.shorten("https://example.com/").await.unwrap_err();

        assert!(matches!(
            err,
            ShortenerError::AssignmentExhausted { attempts: 6 }
        ));
        assert_eq!(repo.inserts.load(Ordering::SeqCst), 6);
    }

    #[tokio::test]
    async fn zero_random_attempts_tries_only_the_deterministic_code() {
        let repo = Arc::new(FullRepository::default());
        let settings = ShortenerSettings::builder().max_random_attempts(0).build();
        let service =
            ShortenerService::with_settings(Arc::clone(&repo), content_generator(), settings);

        let err = service.shorten("https://example.com/").await.unwrap_err();

        assert!(matches!(
            err,
            ShortenerError::AssignmentExhausted { attempts: 1 }
        ));
        assert_eq!(repo.inserts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalid_url_is_rejected_before_touching_the_store() {
        let repo = Arc::new(FullRepository::default());
        let service = ShortenerService::new(Arc::clone(&repo), content_generator());

        for input in ["", "   ", "ftp://example.com/file", "http://"] {
            let err = service.shorten(input).await.unwrap_err();
            assert!(matches!(err, ShortenerError::InvalidUrl(_)), "{input:?}");
        }
        assert_eq!(repo.inserts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn storage_failure_is_not_retried() {
        let repo = Arc::new(UnavailableRepository::default());
        let service = ShortenerService::new(Arc::clone(&repo), content_generator());

        let err = service.shorten("https://example.com/").await.unwrap_err();

        assert!(matches!(
            err,
            ShortenerError::Storage(StorageError::Unavailable(_))
        ));
        assert_eq!(repo.inserts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn codes_stay_unique_across_many_requests() {
        let (service, repo) = test_service();

        let mut codes = HashSet::new();
        for i in 0..200 {
            let url = format!("https://example.com/{}", i % 20);
            let mapping = service.shorten(&url).await.unwrap();
            assert!(codes.insert(mapping.short_code.clone()));

            let stored = repo.get(&mapping.short_code).await.unwrap().unwrap();
            assert_eq!(stored.original_url, url);
        }

        assert_eq!(repo.len(), 200);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_requests_for_same_url_both_succeed() {
        let (service, repo) = test_service();
        let deterministic = content_generator().deterministic_code("https://example.com/race");

        let a = tokio::spawn({
            let service = service.clone();
            async move { service.shorten("https://example.com/race").await }
        });
        let b = tokio::spawn({
            let service = service.clone();
            async move { service.shorten("https://example.com/race").await }
        });

        let a = a.await.unwrap().unwrap();
        let b = b.await.unwrap().unwrap();

        assert_ne!(a.short_code, b.short_code);
        let holders = [&a, &b]
            .iter()
            .filter(|m| m.short_code == deterministic)
            .count();
        assert_eq!(holders, 1);
        assert_eq!(repo.len(), 2);
    }
}
