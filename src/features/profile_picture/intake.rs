//! State machine behind the profile-picture selector. It validates candidates,
//! hands out decode tickets, and accepts decoded previews only for the most
//! recent ticket, so a slow decode of an older file can never overwrite a newer
//! choice. The view layer owns the file handles and the actual reading.

use thiserror::Error;

/// Largest accepted image, in bytes.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Why a file was refused. The display text is the notice shown to the user.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum IntakeRejection {
    #[error("Please select a valid image file")]
    NotAnImage,
    #[error("File size must be less than 5MB")]
    TooLarge,
}

/// What the browser tells us about a file before reading it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageCandidate {
    pub mime_type: String,
    pub size: u64,
}

impl ImageCandidate {
    pub fn new(mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            mime_type: mime_type.into(),
            size,
        }
    }

    /// Type check first, then size.
    pub fn validate(&self) -> Result<(), IntakeRejection> {
        if !self.mime_type.starts_with("image/") {
            return Err(IntakeRejection::NotAnImage);
        }
        if self.size > MAX_IMAGE_BYTES {
            return Err(IntakeRejection::TooLarge);
        }
        Ok(())
    }
}

/// Proof that a decode was started; only the latest one may land.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeTicket(u64);

/// Change reported to the owner of the selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection<F> {
    Chosen { file: F, preview: String },
    Cleared,
}

#[cfg(test)]
impl<F> Selection<F> {
    pub fn preview(&self) -> Option<&str> {
        match self {
            Selection::Chosen { preview, .. } => Some(preview),
            Selection::Cleared => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageIntake {
    preview: Option<String>,
    drag_over: bool,
    issued: u64,
}

impl ImageIntake {
    /// Starts with an optional preview supplied by the caller.
    pub fn new(current_image: Option<String>) -> Self {
        Self {
            preview: current_image,
            ..Self::default()
        }
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    pub fn drag_over(&mut self) {
        self.drag_over = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_over = false;
    }

    /// Ends a drag and keeps only the first dropped file.
    pub fn drop_files<F>(&mut self, files: impl IntoIterator<Item = F>) -> Option<F> {
        self.drag_over = false;
        files.into_iter().next()
    }

    /// Validates `candidate` and, when it passes, issues a ticket for its
    /// decode. A rejection leaves the state untouched.
    pub fn accept(&mut self, candidate: &ImageCandidate) -> Result<DecodeTicket, IntakeRejection> {
        candidate.validate()?;
        self.issued += 1;
        Ok(DecodeTicket(self.issued))
    }

    /// Applies a finished decode. Returns the selection to report, or `None`
    /// when a newer selection or a removal has superseded `ticket`.
    pub fn complete<F>(
        &mut self,
        ticket: DecodeTicket,
        file: F,
        preview: String,
    ) -> Option<Selection<F>> {
        if ticket.0 != self.issued {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.issued,
                "discarding superseded image decode"
            );
            return None;
        }
        self.preview = Some(preview.clone());
        Some(Selection::Chosen { file, preview })
    }

    /// Clears the preview and invalidates any decode still in flight.
    pub fn remove<F>(&mut self) -> Selection<F> {
        self.preview = None;
        self.issued += 1;
        Selection::Cleared
    }
}

#[cfg(test)]
mod tests {
    use super::{ImageCandidate, ImageIntake, IntakeRejection, MAX_IMAGE_BYTES, Selection};

    const PNG_URI: &str = "data:image/png;base64,iVBORw0KGgo=";

    /// Records what the selector would hand to its callback.
    #[derive(Default)]
    struct Harness {
        intake: ImageIntake,
        reported: Vec<Selection<&'static str>>,
    }

    impl Harness {
        fn finish(&mut self, ticket: super::DecodeTicket, file: &'static str, preview: &str) {
            if let Some(selection) = self.intake.complete(ticket, file, preview.to_string()) {
                self.reported.push(selection);
            }
        }

        fn remove(&mut self) {
            let selection = self.intake.remove();
            self.reported.push(selection);
        }
    }

    #[test]
    fn non_image_types_are_rejected_without_state_change() {
        let mut intake = ImageIntake::new(Some(PNG_URI.to_string()));
        let before = intake.clone();

        for mime in ["application/pdf", "text/plain", "", "IMAGE/PNG", "video/mp4"] {
            assert_eq!(
                intake.accept(&ImageCandidate::new(mime, 10)),
                Err(IntakeRejection::NotAnImage)
            );
        }
        assert_eq!(intake, before);
    }

    #[test]
    fn oversize_files_are_rejected_whatever_the_type() {
        let mut intake = ImageIntake::default();
        let too_big = MAX_IMAGE_BYTES + 1;

        assert_eq!(
            intake.accept(&ImageCandidate::new("image/png", too_big)),
            Err(IntakeRejection::TooLarge)
        );
        assert!(intake.accept(&ImageCandidate::new("text/plain", too_big)).is_err());
        assert_eq!(intake, ImageIntake::default());
    }

    #[test]
    fn exactly_five_mebibytes_is_accepted() {
        let mut intake = ImageIntake::default();
        assert!(
            intake
                .accept(&ImageCandidate::new("image/jpeg", MAX_IMAGE_BYTES))
                .is_ok()
        );
    }

    #[test]
    fn rejection_messages_match_the_notices() {
        assert_eq!(
            IntakeRejection::NotAnImage.to_string(),
            "Please select a valid image file"
        );
        assert_eq!(
            IntakeRejection::TooLarge.to_string(),
            "File size must be less than 5MB"
        );
    }

    #[test]
    fn preview_stays_unchanged_until_decode_completes() {
        let mut harness = Harness::default();
        let ticket = harness
            .intake
            .accept(&ImageCandidate::new("image/png", 2048))
            .expect("valid image");

        assert_eq!(harness.intake.preview(), None);
        assert!(harness.reported.is_empty());

        harness.finish(ticket, "avatar.png", PNG_URI);

        assert_eq!(harness.intake.preview(), Some(PNG_URI));
        assert_eq!(
            harness.reported,
            vec![Selection::Chosen {
                file: "avatar.png",
                preview: PNG_URI.to_string()
            }]
        );
    }

    #[test]
    fn out_of_order_completion_keeps_the_latest_selection() {
        let mut harness = Harness::default();
        let first = harness
            .intake
            .accept(&ImageCandidate::new("image/png", 10))
            .unwrap();
        let second = harness
            .intake
            .accept(&ImageCandidate::new("image/gif", 10))
            .unwrap();

        harness.finish(second, "second.gif", "data:image/gif;base64,R0lG");
        harness.finish(first, "first.png", PNG_URI);

        assert_eq!(harness.intake.preview(), Some("data:image/gif;base64,R0lG"));
        assert_eq!(harness.reported.len(), 1);
        assert_eq!(
            harness.reported[0].preview(),
            Some("data:image/gif;base64,R0lG")
        );
    }

    #[test]
    fn rejected_file_does_not_supersede_a_pending_decode() {
        let mut harness = Harness::default();
        let ticket = harness
            .intake
            .accept(&ImageCandidate::new("image/png", 10))
            .unwrap();
        assert!(
            harness
                .intake
                .accept(&ImageCandidate::new("application/zip", 10))
                .is_err()
        );

        harness.finish(ticket, "avatar.png", PNG_URI);

        assert_eq!(harness.intake.preview(), Some(PNG_URI));
    }

    #[test]
    fn remove_clears_and_is_idempotent() {
        let mut harness = Harness {
            intake: ImageIntake::new(Some(PNG_URI.to_string())),
            ..Harness::default()
        };

        harness.remove();
        harness.remove();

        assert_eq!(harness.intake.preview(), None);
        assert_eq!(
            harness.reported,
            vec![Selection::Cleared, Selection::Cleared]
        );
    }

    #[test]
    fn remove_invalidates_an_in_flight_decode() {
        let mut harness = Harness::default();
        let ticket = harness
            .intake
            .accept(&ImageCandidate::new("image/png", 10))
            .unwrap();

        harness.remove();
        harness.finish(ticket, "avatar.png", PNG_URI);

        assert_eq!(harness.intake.preview(), None);
        assert_eq!(harness.reported, vec![Selection::Cleared]);
    }

    #[test]
    fn drag_state_toggles_and_drop_takes_the_first_file() {
        let mut intake = ImageIntake::default();

        intake.drag_over();
        assert!(intake.is_drag_over());
        intake.drag_leave();
        assert!(!intake.is_drag_over());

        intake.drag_over();
        let picked = intake.drop_files(["a.png", "b.png", "c.png"]);
        assert_eq!(picked, Some("a.png"));
        assert!(!intake.is_drag_over());

        assert_eq!(intake.drop_files(Vec::<&str>::new()), None);
    }
}
