//! Discussion creation service.
//!
//! Drives one interactive `create` run from start to finish:
//!
//! 1. Discover the repository's categories (none is fatal)
//! 2. Ask which category to use and resolve its ID
//! 3. Fetch and decode that category's form
//! 4. Ask for a title, then each field in form order
//! 5. Compose the body and submit it (or return it, on a dry run)
//!
//! Every failure aborts the run. Nothing is retried or skipped, and nothing
//! is submitted unless every question was answered.

use tracing::{debug, info};

use discussion_types::discussion::{CreateOutcome, NewDiscussion};
use discussion_types::error::{DiscoveryError, DiscussionError};
use discussion_types::form::Template;
use discussion_types::repo::RepoRef;

use crate::form::{category_question, decode_template, field_prompt, push_section, title_prompt};
use crate::prompt::Prompter;
use crate::repository::{CategoryDiscovery, DiscussionPublisher, TemplateSource};

/// Title and body collected from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub body: String,
}

/// Service orchestrating discovery, prompting and submission.
///
/// Generic over its collaborators so that discussion-core never depends on
/// discussion-infra.
pub struct DiscussionService<D: CategoryDiscovery, T: TemplateSource, P: DiscussionPublisher> {
    discovery: D,
    templates: T,
    publisher: P,
}

impl<D: CategoryDiscovery, T: TemplateSource, P: DiscussionPublisher> DiscussionService<D, T, P> {
    pub fn new(discovery: D, templates: T, publisher: P) -> Self {
        Self {
            discovery,
            templates,
            publisher,
        }
    }

    /// Run one interactive creation against `repo`.
    ///
    /// With `dry_run` set, everything up to and including composing the body
    /// happens, and the result is returned instead of submitted.
    pub async fn create<Q: Prompter>(
        &self,
        repo: &RepoRef,
        prompter: &mut Q,
        dry_run: bool,
    ) -> Result<CreateOutcome, DiscussionError> {
        repo.ensure_supported()?;

        let discovery = self
            .discovery
            .discover(repo)
            .await
            .map_err(|source| DiscussionError::Discovery {
                repo: repo.to_string(),
                source,
            })?;

        if discovery.categories.is_empty() {
            return Err(DiscussionError::Discovery {
                repo: repo.to_string(),
                source: DiscoveryError::NoCategories,
            });
        }

        info!(
            repo = %repo,
            categories = discovery.categories.len(),
            "Discovered discussion categories"
        );

        let slug = prompter
            .ask(&category_question(&discovery.categories), true)
            .map_err(|source| DiscussionError::Prompt {
                stage: "category forms to use".to_string(),
                source,
            })?;

        let category_id = discovery
            .category_id(&slug)
            .ok_or_else(|| DiscussionError::CategoryNotFound {
                slug: slug.clone(),
                searched: discovery.categories.len(),
            })?
            .to_string();

        let raw = self
            .templates
            .fetch_template(repo, &slug)
            .await
            .map_err(|source| DiscussionError::Template {
                slug: slug.clone(),
                source,
            })?;

        let template = decode_template(&raw).map_err(|source| DiscussionError::Decode {
            slug: slug.clone(),
            source,
        })?;

        debug!(slug = %slug, fields = template.len(), "Collecting answers");
        let draft = collect_draft(&template, prompter)?;

        let discussion = NewDiscussion {
            repository_id: discovery.repository_id,
            category_id,
            title: draft.title,
            body: draft.body,
        };

        if dry_run {
            info!(slug = %slug, "Dry run, not creating the discussion");
            return Ok(CreateOutcome::DryRun(discussion));
        }

        let url = self
            .publisher
            .create_discussion(repo, &discussion)
            .await
            .map_err(DiscussionError::Submission)?;

        info!(url = %url, "Created discussion");
        Ok(CreateOutcome::Created { url, discussion })
    }
}

/// Ask for the title, then every field of `template` in order, and compose
/// the body.
///
/// Stops at the first prompt failure; later fields are never asked.
pub fn collect_draft<Q: Prompter>(
    template: &Template,
    prompter: &mut Q,
) -> Result<Draft, DiscussionError> {
    let title = title_prompt();
    let title = prompter
        .ask(&title.question, title.required)
        .map_err(|source| DiscussionError::Prompt {
            stage: "the discussion title".to_string(),
            source,
        })?;

    let mut body = String::new();
    for (index, item) in template.body.iter().enumerate() {
        let prompt = field_prompt(item);
        let answer = prompter
            .ask(&prompt.question, prompt.required)
            .map_err(|source| DiscussionError::Prompt {
                stage: format!("element {index} ({})", prompt.label),
                source,
            })?;
        push_section(&mut body, &prompt.label, &answer);
    }

    Ok(Draft { title, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::error::Error as _;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use discussion_types::category::{Category, Discovery};
    use discussion_types::error::{
        ConfigError, DecodeError, PromptError, SubmissionError,
    };
    use discussion_types::prompt::Question;

    use crate::repository::template_path;

    const FORM: &str = r#"
body:
  - type: dropdown
    id: area
    attributes:
      label: Area
      options: [Bug, Feature]
  - type: input
    id: summary
    attributes:
      label: Summary
    validations:
      required: true
  - type: textarea
    id: details
    attributes:
      label: Details
      value: "prefilled"
"#;

    // --- Fakes ---

    /// In-memory remote serving canned categories and forms.
    struct FakeRemote {
        categories: Vec<Category>,
        form: Result<&'static str, fn(&str) -> DiscoveryError>,
        publish_url: String,
        discover_calls: AtomicUsize,
        fetch_calls: AtomicUsize,
        published: Mutex<Vec<NewDiscussion>>,
    }

    impl FakeRemote {
        fn new(categories: Vec<Category>, form: &'static str) -> Self {
            Self {
                categories,
                form: Ok(form),
                publish_url: "https://github.com/octo/widgets/discussions/1".to_string(),
                discover_calls: AtomicUsize::new(0),
                fetch_calls: AtomicUsize::new(0),
                published: Mutex::new(Vec::new()),
            }
        }

        fn published(&self) -> Vec<NewDiscussion> {
            self.published.lock().unwrap().clone()
        }
    }

    impl CategoryDiscovery for &FakeRemote {
        async fn discover(&self, _repo: &RepoRef) -> Result<Discovery, DiscoveryError> {
            self.discover_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Discovery {
                repository_id: "R_kgDO".to_string(),
                categories: self.categories.clone(),
            })
        }
    }

    impl TemplateSource for &FakeRemote {
        async fn fetch_template(
            &self,
            repo: &RepoRef,
            slug: &str,
        ) -> Result<Vec<u8>, DiscoveryError> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            match self.form {
                Ok(form) => Ok(form.as_bytes().to_vec()),
                Err(make_error) => Err(make_error(&format!("{repo} {}", template_path(slug)))),
            }
        }
    }

    impl DiscussionPublisher for &FakeRemote {
        async fn create_discussion(
            &self,
            repo: &RepoRef,
            discussion: &NewDiscussion,
        ) -> Result<String, SubmissionError> {
            self.published.lock().unwrap().push(discussion.clone());
            if self.publish_url.is_empty() {
                return Err(SubmissionError::NoUrl(repo.to_string()));
            }
            Ok(self.publish_url.clone())
        }
    }

    /// Answers questions from a script and records what was asked.
    struct ScriptedPrompter {
        answers: VecDeque<Result<String, PromptError>>,
        asked: Vec<(Question, bool)>,
    }

    impl ScriptedPrompter {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| Ok(a.to_string())).collect(),
                asked: Vec::new(),
            }
        }

        fn then_cancel(mut self) -> Self {
            self.answers.push_back(Err(PromptError::Cancelled));
            self
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, question: &Question, required: bool) -> Result<String, PromptError> {
            self.asked.push((question.clone(), required));
            self.answers
                .pop_front()
                .unwrap_or_else(|| Err(PromptError::Io("script exhausted".to_string())))
        }
    }

    fn categories() -> Vec<Category> {
        vec![
            Category {
                id: "DIC_ideas".to_string(),
                name: "Ideas".to_string(),
                description: "Share ideas".to_string(),
                slug: "ideas".to_string(),
            },
            Category {
                id: "DIC_qa".to_string(),
                name: "Q&A".to_string(),
                description: "Ask the community".to_string(),
                slug: "q-a".to_string(),
            },
        ]
    }

    fn repo() -> RepoRef {
        RepoRef::new("octo", "widgets")
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_create_submits_composed_discussion() {
        let remote = FakeRemote::new(categories(), FORM);
        let service = DiscussionService::new(&remote, &remote, &remote);
        let mut prompter =
            ScriptedPrompter::new(&["q-a", "Widgets explode", "Bug", "it breaks", "prefilled"]);

        let outcome = service.create(&repo(), &mut prompter, false).await.unwrap();

        let expected = NewDiscussion {
            repository_id: "R_kgDO".to_string(),
            category_id: "DIC_qa".to_string(),
            title: "Widgets explode".to_string(),
            body: "### Area\n\nBug\n\n### Summary\n\nit breaks\n\n### Details\n\nprefilled\n\n"
                .to_string(),
        };
        assert_eq!(
            outcome,
            CreateOutcome::Created {
                url: "https://github.com/octo/widgets/discussions/1".to_string(),
                discussion: expected.clone(),
            }
        );
        assert_eq!(remote.published(), vec![expected]);
    }

    #[tokio::test]
    async fn test_create_asks_in_order_with_required_flags() {
        let remote = FakeRemote::new(categories(), FORM);
        let service = DiscussionService::new(&remote, &remote, &remote);
        let mut prompter = ScriptedPrompter::new(&["ideas", "t", "None", "s", "d"]);

        service.create(&repo(), &mut prompter, true).await.unwrap();

        let asked: Vec<(&str, bool)> = prompter
            .asked
            .iter()
            .map(|(q, required)| (q.message(), *required))
            .collect();
        assert_eq!(
            asked,
            vec![
                ("Select category for new Discussion", true),
                ("Discussion title", true),
                ("Area", false),
                ("Summary", true),
                ("Details", false),
            ]
        );
        assert_eq!(prompter.asked[0].0.choice_values(), vec!["ideas", "q-a"]);
        assert_eq!(prompter.asked[2].0.choice_values(), vec!["Bug", "Feature", "None"]);
        assert_eq!(prompter.asked[4].0.default_answer(), Some("prefilled"));
    }

    #[tokio::test]
    async fn test_dry_run_never_publishes() {
        let remote = FakeRemote::new(categories(), FORM);
        let service = DiscussionService::new(&remote, &remote, &remote);
        let mut prompter = ScriptedPrompter::new(&["ideas", "Title", "Feature", "x", "y"]);

        let outcome = service.create(&repo(), &mut prompter, true).await.unwrap();

        match outcome {
            CreateOutcome::DryRun(discussion) => {
                assert_eq!(discussion.category_id, "DIC_ideas");
                assert_eq!(discussion.title, "Title");
                assert!(discussion.body.starts_with("### Area\n\nFeature\n\n"));
            }
            other => panic!("expected dry run, got {other:?}"),
        }
        assert!(remote.published().is_empty());
    }

    #[tokio::test]
    async fn test_no_categories_aborts_before_prompting() {
        let remote = FakeRemote::new(Vec::new(), FORM);
        let service = DiscussionService::new(&remote, &remote, &remote);
        let mut prompter = ScriptedPrompter::new(&[]);

        let err = service.create(&repo(), &mut prompter, false).await.unwrap_err();

        assert!(matches!(
            err,
            DiscussionError::Discovery {
                source: DiscoveryError::NoCategories,
                ..
            }
        ));
        assert!(prompter.asked.is_empty());
        assert_eq!(remote.fetch_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unsupported_host_makes_no_calls() {
        let remote = FakeRemote::new(categories(), FORM);
        let service = DiscussionService::new(&remote, &remote, &remote);
        let mut prompter = ScriptedPrompter::new(&[]);
        let enterprise: RepoRef = "ghe.example.com/octo/widgets".parse().unwrap();

        let err = service.create(&enterprise, &mut prompter, false).await.unwrap_err();

        assert!(matches!(
            err,
            DiscussionError::Config(ConfigError::UnsupportedHost(_))
        ));
        assert_eq!(remote.discover_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_slug_is_fatal_before_fetch() {
        let remote = FakeRemote::new(categories(), FORM);
        let service = DiscussionService::new(&remote, &remote, &remote);
        let mut prompter = ScriptedPrompter::new(&["general"]);

        let err = service.create(&repo(), &mut prompter, false).await.unwrap_err();

        assert!(matches!(
            err,
            DiscussionError::CategoryNotFound { ref slug, searched: 2 } if slug == "general"
        ));
        assert_eq!(remote.fetch_calls.load(Ordering::SeqCst), 0);
        assert!(remote.published().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_mid_form_stops_asking() {
        let remote = FakeRemote::new(categories(), FORM);
        let service = DiscussionService::new(&remote, &remote, &remote);
        let mut prompter = ScriptedPrompter::new(&["q-a", "Title", "Bug"]).then_cancel();

        let err = service.create(&repo(), &mut prompter, false).await.unwrap_err();

        assert!(matches!(
            err,
            DiscussionError::Prompt {
                source: PromptError::Cancelled,
                ..
            }
        ));
        // category, title, Area, Summary (cancelled); Details never asked
        assert_eq!(prompter.asked.len(), 4);
        assert!(remote.published().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_at_title() {
        let remote = FakeRemote::new(categories(), FORM);
        let service = DiscussionService::new(&remote, &remote, &remote);
        let mut prompter = ScriptedPrompter::new(&["q-a"]).then_cancel();

        let err = service.create(&repo(), &mut prompter, false).await.unwrap_err();

        assert_eq!(err.to_string(), "failed to receive user input for the discussion title");
        assert_eq!(prompter.asked.len(), 2);
        assert!(remote.published().is_empty());
    }

    #[tokio::test]
    async fn test_template_not_found_is_distinguished() {
        let mut remote = FakeRemote::new(categories(), FORM);
        remote.form = Err(|path| DiscoveryError::TemplateNotFound {
            repo: "octo/widgets".to_string(),
            path: path.to_string(),
        });
        let service = DiscussionService::new(&remote, &remote, &remote);
        let mut prompter = ScriptedPrompter::new(&["ideas"]);

        let err = service.create(&repo(), &mut prompter, false).await.unwrap_err();

        match err {
            DiscussionError::Template {
                slug,
                source: DiscoveryError::TemplateNotFound { path, .. },
            } => {
                assert_eq!(slug, "ideas");
                assert!(path.ends_with(".github/DISCUSSION_TEMPLATE/ideas.yml"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(prompter.asked.len(), 1);
    }

    #[tokio::test]
    async fn test_decode_failure_asks_nothing_more() {
        let remote = FakeRemote::new(
            categories(),
            "body:\n  - type: checkboxes\n    attributes: { label: X }\n",
        );
        let service = DiscussionService::new(&remote, &remote, &remote);
        let mut prompter = ScriptedPrompter::new(&["ideas"]);

        let err = service.create(&repo(), &mut prompter, false).await.unwrap_err();

        assert!(matches!(
            err,
            DiscussionError::Decode {
                source: DecodeError::UnknownType { index: 0, .. },
                ..
            }
        ));
        assert!(err.source().unwrap().to_string().contains("checkboxes"));
        assert_eq!(prompter.asked.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_url_is_submission_error() {
        let mut remote = FakeRemote::new(categories(), FORM);
        remote.publish_url = String::new();
        let service = DiscussionService::new(&remote, &remote, &remote);
        let mut prompter = ScriptedPrompter::new(&["ideas", "t", "Bug", "s", "d"]);

        let err = service.create(&repo(), &mut prompter, false).await.unwrap_err();

        assert!(matches!(
            err,
            DiscussionError::Submission(SubmissionError::NoUrl(_))
        ));
    }

    #[test]
    fn test_collect_draft_single_input() {
        let template = decode_template(
            b"body:\n  - type: input\n    attributes:\n      label: Summary\n",
        )
        .unwrap();
        let mut prompter = ScriptedPrompter::new(&["A title", "it breaks"]);

        let draft = collect_draft(&template, &mut prompter).unwrap();

        assert_eq!(draft.title, "A title");
        assert_eq!(draft.body, "### Summary\n\nit breaks\n\n");
    }

    #[test]
    fn test_collect_draft_empty_template() {
        let mut prompter = ScriptedPrompter::new(&["Only a title"]);
        let draft = collect_draft(&Template::default(), &mut prompter).unwrap();
        assert_eq!(draft.body, "");
        assert_eq!(prompter.asked.len(), 1);
    }
}
