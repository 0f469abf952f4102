//! Image with a one-way placeholder fallback

/// Shown in place of any image that fails to load
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&q=80&w=800";

/// An image source that swaps to the placeholder after a load failure
///
/// The swap happens at most once and is never undone: once failed, the
/// instance keeps showing the placeholder for the rest of its life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackImage {
    primary: String,
    failed: bool,
}

impl FallbackImage {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            failed: false,
        }
    }

    /// URL to display right now
    pub fn src(&self) -> &str {
        if self.failed {
            PLACEHOLDER_IMAGE_URL
        } else {
            &self.primary
        }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn placeholder(&self) -> &'static str {
        PLACEHOLDER_IMAGE_URL
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Record a load failure. Returns true only for the transition itself.
    pub fn report_error(&mut self) -> bool {
        let transitioned = !self.failed;
        self.failed = true;
        transitioned
    }
}
