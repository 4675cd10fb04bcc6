use thiserror::Error;

/// Errors determining where and as whom to operate.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine what repo to use: {0}")]
    UnresolvedRepository(String),

    #[error("invalid repository '{input}': {reason}")]
    InvalidRepository { input: String, reason: String },

    #[error("using this tool with GitHub Enterprise is not supported at this time (host '{0}')")]
    UnsupportedHost(String),

    #[error("failed to determine a repository, found: {owner}/{name}")]
    IncompleteRepository { owner: String, name: String },

    #[error("no GitHub token found: set GH_TOKEN or GITHUB_TOKEN, or run `gh auth login`")]
    MissingToken,

    #[error("failed to construct GitHub client: {0}")]
    Client(String),
}

/// Errors looking up categories or fetching a category form.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("failed to query repository {repo}: {message}")]
    Transport { repo: String, message: String },

    #[error("no Discussion categories were found")]
    NoCategories,

    #[error("no template could be found at path {path} for repository {repo}")]
    TemplateNotFound { repo: String, path: String },

    #[error("failed to read contents of file at path {path} in repository {repo}: {message}")]
    InvalidContent {
        repo: String,
        path: String,
        message: String,
    },
}

/// Errors decoding a category form document.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("template is not valid YAML: {0}")]
    Syntax(String),

    #[error("template has no `body`")]
    MissingBody,

    #[error("unknown type: {type_name:?} (element {index})")]
    UnknownType { index: usize, type_name: String },

    #[error("failed to decode element {index} of type {item_type:?}: {message}")]
    InvalidItem {
        index: usize,
        item_type: String,
        message: String,
    },
}

/// Errors from the interactive prompter.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled")]
    Cancelled,

    #[error("prompt failed: {0}")]
    Io(String),
}

/// Errors creating the discussion.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("failed to create Discussion for repository {repo}: {message}")]
    Transport { repo: String, message: String },

    #[error("no URL was returned for the created Discussion for repository {0}")]
    NoUrl(String),
}

/// Failure of a whole `create` run, carrying the stage it failed in.
#[derive(Debug, Error)]
pub enum DiscussionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to discover repository {repo}'s Discussion category forms")]
    Discovery {
        repo: String,
        #[source]
        source: DiscoveryError,
    },

    #[error(
        "failed to discover the Discussion category ID for the slug {slug}: looked at {searched} elements, and found none that matched"
    )]
    CategoryNotFound { slug: String, searched: usize },

    #[error("failed to retrieve Discussion category form for slug {slug}")]
    Template {
        slug: String,
        #[source]
        source: DiscoveryError,
    },

    #[error("failed to decode Discussion category form for slug {slug}")]
    Decode {
        slug: String,
        #[source]
        source: DecodeError,
    },

    #[error("failed to receive user input for {stage}")]
    Prompt {
        stage: String,
        #[source]
        source: PromptError,
    },

    #[error("failed to create discussion")]
    Submission(#[source] SubmissionError),
}
