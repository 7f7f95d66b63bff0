#![forbid(unsafe_code)]

/// A mention waiting for a reply, as surfaced by the posting service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    /// Text of the mentioning post.
    pub text: String,
    /// URI of the post to reply under.
    pub uri: String,
    /// Content id of the post to reply under.
    pub cid: String,
}

/// Interface to the remote social-posting service. Implementations own
/// transport, authentication and credential storage; nothing in this
/// workspace performs network I/O.
pub trait SocialClient {
    /// Transport or authentication failure.
    type Error;

    /// Publish a standalone status post.
    fn post_status(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Publish a reply under the given parent post.
    fn post_reply(&mut self, text: &str, parent_uri: &str, parent_cid: &str)
        -> Result<(), Self::Error>;

    /// Return one unanswered mention, if any.
    fn check_mentions(&mut self) -> Result<Option<Mention>, Self::Error>;
}
