//! User profile loading.
//!
//! The profile is fetched exactly once per session through a [`ProfileSource`]. The
//! [`ProfileLoader`] tracks the outcome as a three-state [`ProfileStatus`]; a failed fetch is
//! logged and recorded, never propagated.

mod error;
mod http;

pub use error::{classify_http_status, ProfileFetchError, ProfileFetchErrorKind, RetryConfig};
pub use http::HttpProfileSource;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Profile record returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub course_1: String,
    pub course_2: String,
    #[serde(default)]
    pub link_1: Option<String>,
    #[serde(default)]
    pub link_2: Option<String>,
    #[serde(default)]
    pub q1: Option<String>,
    #[serde(default)]
    pub q2: Option<String>,
}

/// A recommended course with its optional link, as shown in the profile panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseLink<'a> {
    pub title: &'a str,
    pub link: Option<&'a str>,
}

impl Profile {
    /// Recommended courses paired with their links, skipping blank course names.
    pub fn courses(&self) -> impl Iterator<Item = CourseLink<'_>> {
        [
            (self.course_1.as_str(), self.link_1.as_deref()),
            (self.course_2.as_str(), self.link_2.as_deref()),
        ]
        .into_iter()
        .filter_map(|(title, link)| {
            non_blank(title).map(|title| CourseLink {
                title,
                link: link.and_then(non_blank),
            })
        })
    }
}

/// `Some(value)` when `value` has non-whitespace content.
pub(crate) fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Where the profile comes from.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch the profile record.
    async fn fetch(&self) -> Result<Profile, ProfileFetchError>;
}

/// Outcome of the one-shot profile fetch.
///
/// # State Machine
/// ```text
/// Loading -> Ready
///         \-> Failed
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileStatus {
    /// Fetch not finished yet
    Loading,
    /// Profile available
    Ready(Profile),
    /// Fetch failed; the session continues without a profile
    Failed(ProfileFetchError),
}

impl ProfileStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ProfileStatus::Loading)
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            ProfileStatus::Ready(profile) => Some(profile),
            _ => None,
        }
    }
}

/// Performs the single profile fetch and remembers its outcome.
pub struct ProfileLoader {
    source: Arc<dyn ProfileSource>,
    status: ProfileStatus,
}

impl ProfileLoader {
    pub fn new(source: Arc<dyn ProfileSource>) -> Self {
        Self {
            source,
            status: ProfileStatus::Loading,
        }
    }

    pub fn status(&self) -> &ProfileStatus {
        &self.status
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.status.profile()
    }

    /// Fetch the profile.
    ///
    /// Only the first call issues a request; once the loader is `Ready` or `Failed` the
    /// current status is returned unchanged.
    pub async fn load(&mut self) -> &ProfileStatus {
        if self.status.is_terminal() {
            tracing::debug!("Profile already loaded, skipping fetch");
            return &self.status;
        }

        self.status = match self.source.fetch().await {
            Ok(profile) => {
                tracing::info!("Loaded profile for {}", profile.name);
                ProfileStatus::Ready(profile)
            }
            Err(e) => {
                tracing::error!("Failed to load profile: {}", e);
                ProfileStatus::Failed(e)
            }
        };
        &self.status
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-process source returning a fixed result and counting calls.
    pub struct StaticSource {
        result: Result<Profile, ProfileFetchError>,
        calls: AtomicUsize,
    }

    impl StaticSource {
        pub fn ok(profile: Profile) -> Arc<Self> {
            Arc::new(Self {
                result: Ok(profile),
                calls: AtomicUsize::new(0),
            })
        }

        pub fn err(error: ProfileFetchError) -> Arc<Self> {
            Arc::new(Self {
                result: Err(error),
                calls: AtomicUsize::new(0),
            })
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProfileSource for StaticSource {
        async fn fetch(&self) -> Result<Profile, ProfileFetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    pub fn full_profile() -> Profile {
        Profile {
            name: "Ada".to_string(),
            course_1: "Algorithms".to_string(),
            course_2: "Databases".to_string(),
            link_1: Some("https://example.com/algorithms".to_string()),
            link_2: Some("https://example.com/databases".to_string()),
            q1: Some("Get an internship".to_string()),
            q2: Some("Ship a side project".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{full_profile, StaticSource};
    use super::*;

    #[test]
    fn test_profile_decodes_with_missing_and_null_optionals() {
        let profile: Profile = serde_json::from_str(
            r#"{"name":"Ada","course_1":"Algorithms","course_2":"","link_1":null,"q1":"Get an internship"}"#,
        )
        .unwrap();
        assert_eq!(profile.course_2, "");
        assert_eq!(profile.link_1, None);
        assert_eq!(profile.link_2, None);
        assert_eq!(profile.q1.as_deref(), Some("Get an internship"));
        assert_eq!(profile.q2, None);
    }

    #[test]
    fn test_profile_requires_courses() {
        let result = serde_json::from_str::<Profile>(r#"{"name":"Ada","course_1":"Algorithms"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_courses_pair_links_and_skip_blanks() {
        let mut profile = full_profile();
        profile.course_2 = "  ".to_string();
        profile.link_1 = Some(String::new());
        let courses: Vec<_> = profile.courses().collect();
        assert_eq!(
            courses,
            vec![CourseLink {
                title: "Algorithms",
                link: None
            }]
        );
    }

    #[tokio::test]
    async fn test_loader_starts_loading_and_becomes_ready() {
        let source = StaticSource::ok(full_profile());
        let mut loader = ProfileLoader::new(source.clone());
        assert_eq!(loader.status(), &ProfileStatus::Loading);
        assert!(loader.profile().is_none());

        let status = loader.load().await;
        assert_eq!(status, &ProfileStatus::Ready(full_profile()));
        assert_eq!(loader.profile().map(|p| p.name.as_str()), Some("Ada"));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_loader_records_failure() {
        let source = StaticSource::err(ProfileFetchError::network("connection refused"));
        let mut loader = ProfileLoader::new(source);
        let status = loader.load().await;
        assert!(matches!(status, ProfileStatus::Failed(e) if e.kind == ProfileFetchErrorKind::Network));
        assert!(loader.profile().is_none());
    }

    #[tokio::test]
    async fn test_loader_fetches_only_once() {
        let source = StaticSource::err(ProfileFetchError::from_status(503, "busy"));
        let mut loader = ProfileLoader::new(source.clone());
        loader.load().await;
        loader.load().await;
        assert_eq!(source.calls(), 1);
        assert!(loader.status().is_terminal());
    }
}
